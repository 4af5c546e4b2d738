use thiserror::Error;

use crate::units::*;

/// 단위 문자열 해석 시 발생 가능한 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
}

/// 유량 단위 문자열을 해석한다. `m3/h`, `L/s`, `gpm` 등.
pub fn parse_flow_unit(s: &str) -> Result<FlowUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m3/s" | "m^3/s" | "m³/s" => Ok(FlowUnit::CubicMeterPerSecond),
        "m3/h" | "m^3/h" | "m³/h" | "cmh" => Ok(FlowUnit::CubicMeterPerHour),
        "l/s" | "lps" => Ok(FlowUnit::LiterPerSecond),
        "l/min" | "lpm" => Ok(FlowUnit::LiterPerMinute),
        "gpm" => Ok(FlowUnit::Gpm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 압력 단위 문자열을 해석한다. 모두 절대압 척도로 취급한다.
pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" | "bara" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "psi" | "psia" => Ok(PressureUnit::Psi),
        "atm" => Ok(PressureUnit::Atm),
        "kg/cm2" | "kgf/cm2" => Ok(PressureUnit::KgPerCm2),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "m" | "meter" | "metre" => Ok(LengthUnit::Meter),
        "mm" => Ok(LengthUnit::Millimeter),
        "in" | "inch" => Ok(LengthUnit::Inch),
        "ft" | "foot" => Ok(LengthUnit::Foot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 단위 문자열과 함께 받은 유량을 m³/s 로 환산한다.
pub fn flow_si(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(flow_to_si(value, parse_flow_unit(unit)?))
}

/// 단위 문자열과 함께 받은 압력을 Pa(abs) 로 환산한다.
pub fn pressure_si(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(pressure_to_pa(value, parse_pressure_unit(unit)?))
}

/// 단위 문자열과 함께 받은 길이를 m 로 환산한다.
pub fn length_si(value: f64, unit: &str) -> Result<f64, ConversionError> {
    Ok(length_to_si(value, parse_length_unit(unit)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_strings_are_case_insensitive() {
        assert_eq!(parse_flow_unit("M3/H"), Ok(FlowUnit::CubicMeterPerHour));
        assert_eq!(parse_pressure_unit(" kPa "), Ok(PressureUnit::KiloPascal));
        assert_eq!(parse_length_unit("MM"), Ok(LengthUnit::Millimeter));
    }

    #[test]
    fn unknown_unit_keeps_original_text() {
        assert_eq!(
            parse_flow_unit("furlong/fortnight"),
            Err(ConversionError::UnknownUnit("furlong/fortnight".to_string()))
        );
    }

    #[test]
    fn converts_to_si() {
        assert!((flow_si(36.0, "m3/h").unwrap() - 0.01).abs() < 1e-12);
        assert!((pressure_si(1.0, "bar").unwrap() - 100_000.0).abs() < 1e-9);
        assert!((length_si(100.0, "mm").unwrap() - 0.1).abs() < 1e-12);
        assert!((flow_si(15_850.32, "gpm").unwrap() - 1.0).abs() < 1e-9);
    }
}
