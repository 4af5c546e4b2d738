use serde::Serialize;

use crate::error::{ensure_non_negative, ensure_positive, CalcResult};

/// API RP 14E 연속 운전 경험 계수 C
pub const EROSION_C_CONTINUOUS: f64 = 100.0;

/// 침식 판정 4단계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErosionStatus {
    /// 비율 < 0.5
    Safe,
    /// 비율 < 0.8
    Acceptable,
    /// 비율 < 1.0
    Caution,
    /// 비율 ≥ 1.0
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErosionCheck {
    pub status: ErosionStatus,
    pub velocity_m_per_s: f64,
    pub erosion_velocity_m_per_s: f64,
    /// 실제 유속 / 침식 유속
    pub ratio: f64,
    pub risk: &'static str,
}

/// 침식 유속 V_e = C/√ρ
pub fn erosion_velocity(density_kg_per_m3: f64, c_factor: f64) -> f64 {
    c_factor / density_kg_per_m3.sqrt()
}

/// 실제 유속을 침식 유속과 비교한다.
pub fn erosion_velocity_check(velocity_m_per_s: f64, density_kg_per_m3: f64) -> CalcResult<ErosionCheck> {
    ensure_non_negative(velocity_m_per_s, "유속은 0 이상이어야 합니다.")?;
    ensure_positive(density_kg_per_m3, "밀도는 0보다 커야 합니다.")?;

    let v_erosion = erosion_velocity(density_kg_per_m3, EROSION_C_CONTINUOUS);
    let ratio = velocity_m_per_s / v_erosion;
    let (status, risk) = if ratio < 0.5 {
        (ErosionStatus::Safe, "침식 위험 매우 낮음")
    } else if ratio < 0.8 {
        (ErosionStatus::Acceptable, "침식 위험 낮음")
    } else if ratio < 1.0 {
        (ErosionStatus::Caution, "침식 한계에 근접")
    } else {
        (ErosionStatus::Danger, "유속이 침식 한계를 초과함")
    };
    Ok(ErosionCheck {
        status,
        velocity_m_per_s,
        erosion_velocity_m_per_s: v_erosion,
        ratio,
        risk,
    })
}
