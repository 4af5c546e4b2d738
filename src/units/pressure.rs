use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 절대압 Pa 이다.
/// 흡입 압력과 증기압은 모두 절대압으로 입력받으므로 게이지 보정은 하지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Psi,
    Atm,
    KgPerCm2,
    MmHg,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    /// 1 단위가 몇 Pa 인지.
    fn pascals(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::KiloPascal => 1000.0,
            PressureUnit::MegaPascal => 1.0e6,
            PressureUnit::Bar => PA_PER_BAR,
            PressureUnit::MilliBar => 100.0,
            PressureUnit::Psi => 6894.757,
            PressureUnit::Atm => PA_PER_ATM,
            PressureUnit::KgPerCm2 => 98_066.5,
            PressureUnit::MmHg => 133.322_4,
        }
    }
}

pub fn pressure_to_pa(value: f64, unit: PressureUnit) -> f64 {
    value * unit.pascals()
}

pub fn pa_to_bar(value_pa: f64) -> f64 {
    value_pa / PA_PER_BAR
}
