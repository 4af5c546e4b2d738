use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 m³/s 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    CubicMeterPerSecond,
    CubicMeterPerHour,
    LiterPerSecond,
    LiterPerMinute,
    /// US gallon per minute
    Gpm,
}

/// 1 m³/s 에 해당하는 US gpm
const GPM_PER_M3_PER_S: f64 = 15_850.32;

fn to_m3_per_s(value: f64, unit: FlowUnit) -> f64 {
    match unit {
        FlowUnit::CubicMeterPerSecond => value,
        FlowUnit::CubicMeterPerHour => value / 3600.0,
        FlowUnit::LiterPerSecond => value / 1000.0,
        FlowUnit::LiterPerMinute => value / 60_000.0,
        FlowUnit::Gpm => value / GPM_PER_M3_PER_S,
    }
}

/// 입력 유량을 엔진 기준(m³/s)으로 바꾼다.
pub fn flow_to_si(value: f64, unit: FlowUnit) -> f64 {
    to_m3_per_s(value, unit)
}
