use serde::Serialize;

/// 배관 용도(서비스) 구분.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ServiceType {
    PumpSuction,
    PumpDischarge,
    #[default]
    GeneralPiping,
    GravityDrain,
    PotableWater,
    SaturatedSteam,
    SuperheatedSteam,
    Gas,
}

impl ServiceType {
    pub const ALL: [ServiceType; 8] = [
        ServiceType::PumpSuction,
        ServiceType::PumpDischarge,
        ServiceType::GeneralPiping,
        ServiceType::GravityDrain,
        ServiceType::PotableWater,
        ServiceType::SaturatedSteam,
        ServiceType::SuperheatedSteam,
        ServiceType::Gas,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ServiceType::PumpSuction => "pump-suction",
            ServiceType::PumpDischarge => "pump-discharge",
            ServiceType::GeneralPiping => "general",
            ServiceType::GravityDrain => "gravity-drain",
            ServiceType::PotableWater => "potable-water",
            ServiceType::SaturatedSteam => "saturated-steam",
            ServiceType::SuperheatedSteam => "superheated-steam",
            ServiceType::Gas => "gas",
        }
    }

    /// 코드 문자열로 찾는다. 대소문자 무시.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.code().eq_ignore_ascii_case(code.trim()))
    }

    /// 용도별 허용 유속.
    pub fn limits(self) -> VelocityLimits {
        let (min, max, recommended) = match self {
            ServiceType::PumpSuction => (0.6, 1.5, 1.0),
            ServiceType::PumpDischarge => (1.5, 3.0, 2.0),
            ServiceType::GeneralPiping => (1.0, 3.0, 2.0),
            ServiceType::GravityDrain => (0.5, 2.0, 1.0),
            ServiceType::PotableWater => (0.5, 2.5, 1.5),
            ServiceType::SaturatedSteam => (15.0, 30.0, 20.0),
            ServiceType::SuperheatedSteam => (20.0, 50.0, 30.0),
            ServiceType::Gas => (5.0, 30.0, 15.0),
        };
        VelocityLimits {
            min_m_per_s: min,
            max_m_per_s: max,
            recommended_m_per_s: recommended,
        }
    }
}

/// 허용 유속 범위 [m/s]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VelocityLimits {
    pub min_m_per_s: f64,
    pub max_m_per_s: f64,
    pub recommended_m_per_s: f64,
}

/// 유속 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VelocityStatus {
    /// 범위를 벗어남
    Warning,
    /// 범위 안이지만 권장값과 0.5 m/s 이상 차이
    Acceptable,
    /// 권장값 근처
    Optimal,
}

/// 유속 검토 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityCheck {
    pub status: VelocityStatus,
    pub velocity_m_per_s: f64,
    pub service: ServiceType,
    pub limits: VelocityLimits,
    pub warnings: Vec<String>,
    pub in_range: bool,
}

/// 권장값과의 허용 편차 [m/s]
const OPTIMAL_BAND_M_PER_S: f64 = 0.5;

/// 용도별 허용 범위와 유속을 비교한다.
pub fn check_velocity(velocity_m_per_s: f64, service: ServiceType) -> VelocityCheck {
    let limits = service.limits();
    let mut warnings = Vec::new();
    if velocity_m_per_s < limits.min_m_per_s {
        warnings.push(format!(
            "유속이 낮습니다 ({velocity_m_per_s:.2} m/s < {} m/s)",
            limits.min_m_per_s
        ));
        warnings.push("침전 및 층화 위험".to_string());
    }
    if velocity_m_per_s > limits.max_m_per_s {
        warnings.push(format!(
            "유속이 높습니다 ({velocity_m_per_s:.2} m/s > {} m/s)",
            limits.max_m_per_s
        ));
        warnings.push("침식, 소음, 진동 위험".to_string());
    }

    let in_range =
        velocity_m_per_s >= limits.min_m_per_s && velocity_m_per_s <= limits.max_m_per_s;
    let status = if !in_range {
        VelocityStatus::Warning
    } else if (velocity_m_per_s - limits.recommended_m_per_s).abs() > OPTIMAL_BAND_M_PER_S {
        VelocityStatus::Acceptable
    } else {
        VelocityStatus::Optimal
    };

    VelocityCheck {
        status,
        velocity_m_per_s,
        service,
        limits,
        warnings,
        in_range,
    }
}
