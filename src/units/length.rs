use serde::{Deserialize, Serialize};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Millimeter,
    Inch,
    Foot,
}

impl LengthUnit {
    /// 1 단위가 몇 m 인지.
    fn meters(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

pub fn length_to_si(value: f64, unit: LengthUnit) -> f64 {
    value * unit.meters()
}
