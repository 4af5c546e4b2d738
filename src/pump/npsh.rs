use serde::{Deserialize, Serialize};

use crate::hydraulics::{pressure_to_head, velocity_head};

/// m3/s → US gpm
const GPM_PER_M3_PER_S: f64 = 15_850.32;
/// ft → m
const M_PER_FT: f64 = 0.3048;

/// 흡입 조건. 압력은 모두 절대압 [Pa].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuctionSpec {
    /// 흡입부 절대압 [Pa]
    pub pressure_suction_pa: f64,
    /// 운전 온도에서의 증기압 [Pa]
    pub vapor_pressure_pa: f64,
    /// 흡입 배관 유속 [m/s]
    pub velocity_suction_m_per_s: f64,
    /// 펌프 중심선 대비 액면 높이 [m] (+위, -아래)
    pub elevation_m: f64,
}

/// 사용 가능 NPSH [m].
///
/// NPSHa = (P_s − P_v)/(ρg) + v²/2g + z
pub fn npsh_available(suction: &SuctionSpec, density_kg_per_m3: f64) -> f64 {
    pressure_to_head(suction.pressure_suction_pa, density_kg_per_m3)
        - pressure_to_head(suction.vapor_pressure_pa, density_kg_per_m3)
        + velocity_head(suction.velocity_suction_m_per_s)
        + suction.elevation_m
}

/// 흡입 비속도 S 를 이용한 요구 NPSH 추정 [m].
///
/// 경험식은 미국 단위계(gpm, ft) 기준이므로 유량을 gpm 으로 바꿔 4/3 승을 적용한 뒤 m 로 되돌린다.
pub fn npsh_required_estimate(flow_m3_per_s: f64, speed_rpm: f64, suction_specific_speed: f64) -> f64 {
    let flow_gpm = flow_m3_per_s * GPM_PER_M3_PER_S;
    let npshr_ft = (speed_rpm * flow_gpm.sqrt() / suction_specific_speed).powf(4.0 / 3.0);
    npshr_ft * M_PER_FT
}

/// 유량 배열에 대한 요구 NPSH 곡선.
pub fn npsh_required_curve(flows_m3_per_s: &[f64], speed_rpm: f64, suction_specific_speed: f64) -> Vec<f64> {
    flows_m3_per_s
        .iter()
        .map(|q| npsh_required_estimate(*q, speed_rpm, suction_specific_speed))
        .collect()
}

/// 공동현상 판정 3단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CavitationStatus {
    /// 여유가 충분함
    Safe,
    /// 안전 여유는 만족하지만 여유가 작음
    LowMargin,
    /// 안전 여유 미달, 공동현상 위험
    CavitationRisk,
}

impl CavitationStatus {
    pub fn label(self) -> &'static str {
        match self {
            CavitationStatus::Safe => "안전",
            CavitationStatus::LowMargin => "주의: 여유 부족",
            CavitationStatus::CavitationRisk => "공동현상 위험",
        }
    }
}

/// 공동현상 검토 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CavitationCheck {
    /// 여유가 안전 여유 이상인지
    pub safe: bool,
    /// NPSHa − NPSHr [m]
    pub margin_m: f64,
    pub status: CavitationStatus,
    pub recommendation: &'static str,
    pub npsh_available_m: f64,
    pub npsh_required_m: f64,
}

/// NPSHa 와 NPSHr 를 비교해 공동현상 여부를 판정한다.
///
/// margin < safety_margin 이면 위험, safety_margin ≤ margin < comfort_margin 이면 주의, 그 외 안전.
pub fn cavitation_check(
    npsh_available_m: f64,
    npsh_required_m: f64,
    safety_margin_m: f64,
    comfort_margin_m: f64,
) -> CavitationCheck {
    let margin = npsh_available_m - npsh_required_m;
    let safe = margin >= safety_margin_m;
    let (status, recommendation) = if !safe {
        (
            CavitationStatus::CavitationRisk,
            "사용 가능 NPSH를 높이거나 요구 NPSH가 더 낮은 펌프를 선정하세요.",
        )
    } else if margin < comfort_margin_m {
        (
            CavitationStatus::LowMargin,
            "사용 가능 NPSH를 높이는 것을 검토하세요.",
        )
    } else {
        (CavitationStatus::Safe, "흡입 조건이 적절합니다.")
    };
    CavitationCheck {
        safe,
        margin_m: margin,
        status,
        recommendation,
        npsh_available_m,
        npsh_required_m,
    }
}
