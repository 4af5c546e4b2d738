use std::f64::consts::PI;

use serde::Serialize;

use super::SelectionStatus;
use crate::error::{ensure_positive, CalcResult};

/// ISO/DIN 표준 공칭 지름 DN [mm], 오름차순.
pub const STANDARD_PIPE_SIZES_MM: &[u32] = &[
    6, 8, 10, 15, 20, 25, 32, 40, 50, 65, 80, 100, 125, 150, 200, 250, 300, 350, 400, 450, 500,
    600, 700, 800, 900, 1000, 1200,
];

/// 함께 보여줄 후보 개수
const CANDIDATE_COUNT: usize = 3;

/// 배관 크기 선정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeSizeSelection {
    pub status: SelectionStatus,
    pub flow_m3_per_h: f64,
    pub max_velocity_m_per_s: f64,
    /// Q = v_max·A 에서 구한 최소 내경 [mm]
    pub required_diameter_mm: f64,
    pub recommended_dn: Option<u32>,
    /// 선정된 DN 에서의 실제 유속 [m/s]
    pub actual_velocity_m_per_s: Option<f64>,
    /// 권장 DN 부터 최대 세 개의 후보
    pub candidate_sizes: Vec<u32>,
    pub message: String,
}

/// 최대 유속을 넘지 않는 가장 작은 표준 DN 을 고른다.
pub fn select_pipe_size(flow_m3_per_s: f64, max_velocity_m_per_s: f64) -> CalcResult<PipeSizeSelection> {
    ensure_positive(flow_m3_per_s, "유량은 0보다 커야 합니다.")?;
    ensure_positive(max_velocity_m_per_s, "최대 유속은 0보다 커야 합니다.")?;

    let area_required = flow_m3_per_s / max_velocity_m_per_s;
    let required_diameter_mm = (4.0 * area_required / PI).sqrt() * 1000.0;

    let suitable: Vec<u32> = STANDARD_PIPE_SIZES_MM
        .iter()
        .copied()
        .filter(|dn| f64::from(*dn) >= required_diameter_mm)
        .collect();

    let Some(&recommended) = suitable.first() else {
        return Ok(PipeSizeSelection {
            status: SelectionStatus::NoSolution,
            flow_m3_per_h: flow_m3_per_s * 3600.0,
            max_velocity_m_per_s,
            required_diameter_mm,
            recommended_dn: None,
            actual_velocity_m_per_s: None,
            candidate_sizes: Vec::new(),
            message: format!(
                "필요 내경({required_diameter_mm:.0} mm)이 표준 크기를 초과합니다."
            ),
        });
    };

    let diameter_m = f64::from(recommended) / 1000.0;
    let actual_velocity = flow_m3_per_s / (PI * (diameter_m / 2.0).powi(2));

    Ok(PipeSizeSelection {
        status: SelectionStatus::Ok,
        flow_m3_per_h: flow_m3_per_s * 3600.0,
        max_velocity_m_per_s,
        required_diameter_mm,
        recommended_dn: Some(recommended),
        actual_velocity_m_per_s: Some(actual_velocity),
        candidate_sizes: suitable.into_iter().take(CANDIDATE_COUNT).collect(),
        message: format!("DN{recommended} 선정, 실제 유속 {actual_velocity:.2} m/s"),
    })
}
