use serde::Serialize;

/// 비속도 Ns = N·√Q[m3/h] / H^0.75 (미터 단위계 유럽식)
pub fn specific_speed(flow_m3_per_s: f64, head_m: f64, speed_rpm: f64) -> f64 {
    let flow_m3_per_h = flow_m3_per_s * 3600.0;
    speed_rpm * flow_m3_per_h.sqrt() / head_m.powf(0.75)
}

/// 비속도에 따른 펌프 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PumpType {
    /// Ns < 20
    RadialLowSpecificSpeed,
    /// 20 ≤ Ns < 40
    Radial,
    /// 40 ≤ Ns < 80
    MixedRadial,
    /// 80 ≤ Ns < 150
    MixedFlow,
    /// 150 ≤ Ns < 300
    Axial,
    /// Ns ≥ 300
    Propeller,
}

impl PumpType {
    /// 각 구간의 상한은 미만(<) 비교이다.
    pub fn classify(specific_speed: f64) -> Self {
        if specific_speed < 20.0 {
            PumpType::RadialLowSpecificSpeed
        } else if specific_speed < 40.0 {
            PumpType::Radial
        } else if specific_speed < 80.0 {
            PumpType::MixedRadial
        } else if specific_speed < 150.0 {
            PumpType::MixedFlow
        } else if specific_speed < 300.0 {
            PumpType::Axial
        } else {
            PumpType::Propeller
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PumpType::RadialLowSpecificSpeed => "저비속도 반경류 원심펌프",
            PumpType::Radial => "반경류 원심펌프",
            PumpType::MixedRadial => "혼류-반경류 원심펌프",
            PumpType::MixedFlow => "혼류 원심펌프",
            PumpType::Axial => "축류 원심펌프",
            PumpType::Propeller => "축류(프로펠러) 펌프",
        }
    }
}

impl std::fmt::Display for PumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_strict_upper_bounds() {
        assert_eq!(PumpType::classify(19.99), PumpType::RadialLowSpecificSpeed);
        assert_eq!(PumpType::classify(20.0), PumpType::Radial);
        assert_eq!(PumpType::classify(40.0), PumpType::MixedRadial);
        assert_eq!(PumpType::classify(80.0), PumpType::MixedFlow);
        assert_eq!(PumpType::classify(150.0), PumpType::Axial);
        assert_eq!(PumpType::classify(300.0), PumpType::Propeller);
    }

    #[test]
    fn radial_description_mentions_radial() {
        assert!(PumpType::classify(30.0).description().contains("반경류"));
        assert_eq!(PumpType::Propeller.to_string(), "축류(프로펠러) 펌프");
    }
}
