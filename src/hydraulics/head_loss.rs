use std::f64::consts::PI;

use super::GRAVITY;

/// 원관 단면적 [m2]
pub fn pipe_area(diameter_m: f64) -> f64 {
    PI * diameter_m * diameter_m / 4.0
}

/// 체적 유량으로부터 평균 유속을 구한다. v = Q / (πD²/4)
pub fn velocity_from_flow(flow_m3_per_s: f64, diameter_m: f64) -> f64 {
    flow_m3_per_s / pipe_area(diameter_m)
}

/// 평균 유속으로부터 체적 유량을 구한다. `velocity_from_flow`의 역함수.
pub fn flow_from_velocity(velocity_m_per_s: f64, diameter_m: f64) -> f64 {
    velocity_m_per_s * pipe_area(diameter_m)
}

/// 속도 수두 v²/2g [m]
pub fn velocity_head(velocity_m_per_s: f64) -> f64 {
    velocity_m_per_s * velocity_m_per_s / (2.0 * GRAVITY)
}

/// Darcy-Weisbach 마찰 손실수두. hf = f·(L/D)·v²/2g
pub fn head_loss_darcy_weisbach(
    friction_factor: f64,
    length_m: f64,
    diameter_m: f64,
    velocity_m_per_s: f64,
) -> f64 {
    friction_factor * (length_m / diameter_m) * velocity_head(velocity_m_per_s)
}

/// 피팅/밸브 국부 손실수두. h = K·v²/2g
pub fn minor_loss(k_factor: f64, velocity_m_per_s: f64) -> f64 {
    k_factor * velocity_head(velocity_m_per_s)
}

/// K 값 목록의 국부 손실 합. 순서와 무관한 단순 합이다.
pub fn minor_losses(k_factors: &[f64], velocity_m_per_s: f64) -> f64 {
    k_factors
        .iter()
        .map(|k| minor_loss(*k, velocity_m_per_s))
        .sum()
}

/// Hazen-Williams 경험식 손실수두 (물, 상온 전용).
///
/// hf = 10.67·L·Q^1.852 / (C^1.852·D^4.87)
pub fn head_loss_hazen_williams(
    flow_m3_per_s: f64,
    diameter_m: f64,
    length_m: f64,
    c_factor: f64,
) -> f64 {
    10.67 * length_m * flow_m3_per_s.powf(1.852) / (c_factor.powf(1.852) * diameter_m.powf(4.87))
}

/// 압력 [Pa] → 수두 [m]. h = P/(ρg)
pub fn pressure_to_head(pressure_pa: f64, density_kg_per_m3: f64) -> f64 {
    pressure_pa / (density_kg_per_m3 * GRAVITY)
}

/// 수두 [m] → 압력 [Pa]. P = ρgh
pub fn head_to_pressure(head_m: f64, density_kg_per_m3: f64) -> f64 {
    density_kg_per_m3 * GRAVITY * head_m
}
