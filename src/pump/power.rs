use crate::error::{CalcError, CalcResult};
use crate::hydraulics::GRAVITY;

/// W → hp 환산 계수
pub const WATTS_PER_HP: f64 = 745.7;

/// 수동력(유효 동력) [W]. P_h = ρ·g·Q·H
pub fn hydraulic_power(flow_m3_per_s: f64, head_m: f64, density_kg_per_m3: f64) -> f64 {
    density_kg_per_m3 * GRAVITY * flow_m3_per_s * head_m
}

/// 축동력 [W]. P_s = P_h / η
///
/// 효율이 (0, 1] 범위를 벗어나면 오류를 반환한다.
pub fn shaft_power(hydraulic_power_w: f64, efficiency: f64) -> CalcResult<f64> {
    if !(efficiency > 0.0 && efficiency <= 1.0) {
        return Err(CalcError::InvalidInput("펌프 효율은 0 초과 1 이하여야 합니다."));
    }
    Ok(hydraulic_power_w / efficiency)
}

/// 필요 전동기 출력 [W]. P_m = (P_s / η_motor) · 안전율
pub fn motor_power(shaft_power_w: f64, motor_efficiency: f64, safety_factor: f64) -> f64 {
    shaft_power_w / motor_efficiency * safety_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shaft_power_accepts_unit_efficiency() {
        assert_eq!(shaft_power(1500.0, 1.0), Ok(1500.0));
    }

    #[test]
    fn shaft_power_rejects_out_of_range_efficiency() {
        for eta in [0.0, -0.2, 1.01, f64::NAN] {
            assert!(shaft_power(1000.0, eta).is_err(), "eta={eta}");
        }
    }
}
