use serde::Serialize;

use super::friction::{friction_factor, reynolds_number, FlowRegime, FrictionResult, SolverSettings};
use super::head_loss::{
    head_loss_darcy_weisbach, head_to_pressure, minor_loss, minor_losses, velocity_from_flow,
};
use super::materials::{find_roughness, FittingData};
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, CalcError, CalcResult};
use crate::fluid::water_properties;

/// 단일 배관 구간 사양.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeSpec {
    /// 내경 [m]
    pub inner_diameter_m: f64,
    /// 길이 [m]
    pub length_m: f64,
    /// 절대 거칠기 [m]
    pub roughness_m: f64,
    /// 재질 이름 (거칠기 테이블에서 가져온 경우)
    pub material: Option<String>,
}

impl PipeSpec {
    pub fn new(inner_diameter_m: f64, length_m: f64, roughness_m: f64) -> Self {
        Self {
            inner_diameter_m,
            length_m,
            roughness_m,
            material: None,
        }
    }

    /// 거칠기 테이블의 재질 코드/이름으로 배관을 만든다.
    pub fn from_material(inner_diameter_m: f64, length_m: f64, material: &str) -> CalcResult<Self> {
        let data = find_roughness(material)
            .ok_or(CalcError::InvalidInput("거칠기 테이블에 없는 재질입니다."))?;
        Ok(Self {
            inner_diameter_m,
            length_m,
            roughness_m: data.roughness_m(),
            material: Some(data.name.to_string()),
        })
    }

    fn validate(&self) -> CalcResult<()> {
        ensure_positive(self.inner_diameter_m, "내경은 0보다 커야 합니다.")?;
        ensure_positive(self.length_m, "배관 길이는 0보다 커야 합니다.")?;
        ensure_non_negative(self.roughness_m, "거칠기는 0 이상이어야 합니다.")?;
        Ok(())
    }
}

/// 배관 수력 계산 입력.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInput {
    /// 체적 유량 [m3/s]
    pub flow_m3_per_s: f64,
    pub pipe: PipeSpec,
    /// 피팅/밸브 K 값 목록
    pub fittings_k: Vec<f64>,
    /// 유체(물) 온도 [°C]
    pub temperature_c: f64,
    /// 순 고도 변화 [m] (+상승, -낙차)
    pub elevation_change_m: f64,
}

/// 유량과 평균 유속.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowState {
    pub flow_m3_per_s: f64,
    pub velocity_m_per_s: f64,
}

/// 배관 수력 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemResult {
    pub flow_m3_per_s: f64,
    pub velocity_m_per_s: f64,
    pub reynolds: f64,
    pub flow_regime: FlowRegime,
    pub friction_factor: f64,
    pub head_loss_friction_m: f64,
    pub head_loss_minor_m: f64,
    pub elevation_head_m: f64,
    /// 마찰 + 국부 + 고도 [m]
    pub total_head_loss_m: f64,
    /// 총 손실수두에 해당하는 압력강하 [kPa]
    pub pressure_drop_kpa: f64,
    pub density_kg_per_m3: f64,
    pub kinematic_viscosity_m2_per_s: f64,
    /// 물성 클램프 등 비치명적 안내
    pub advisories: Vec<String>,
}

impl SystemResult {
    pub fn flow_state(&self) -> FlowState {
        FlowState {
            flow_m3_per_s: self.flow_m3_per_s,
            velocity_m_per_s: self.velocity_m_per_s,
        }
    }

    pub fn friction(&self) -> FrictionResult {
        FrictionResult {
            reynolds: self.reynolds,
            regime: self.flow_regime,
            friction_factor: self.friction_factor,
        }
    }
}

/// 단일 배관 구간의 유속, 레이놀즈수, 마찰계수, 손실수두, 압력강하를 계산한다.
pub fn calculate_system(input: &SystemInput, settings: &SolverSettings) -> CalcResult<SystemResult> {
    ensure_positive(input.flow_m3_per_s, "유량은 0보다 커야 합니다.")?;
    input.pipe.validate()?;
    ensure_finite(input.elevation_change_m, "고도 변화는 유한값이어야 합니다.")?;
    ensure_finite(input.temperature_c, "유체 온도는 유한값이어야 합니다.")?;
    for k in &input.fittings_k {
        ensure_non_negative(*k, "피팅 K 값은 0 이상이어야 합니다.")?;
    }

    let pipe = &input.pipe;
    let velocity = velocity_from_flow(input.flow_m3_per_s, pipe.inner_diameter_m);
    let fluid = water_properties(input.temperature_c);
    let reynolds = reynolds_number(
        velocity,
        pipe.inner_diameter_m,
        fluid.kinematic_viscosity_m2_per_s,
    )?;
    let friction = friction_factor(reynolds, pipe.roughness_m, pipe.inner_diameter_m, settings)?;

    let head_loss_friction = head_loss_darcy_weisbach(
        friction.friction_factor,
        pipe.length_m,
        pipe.inner_diameter_m,
        velocity,
    );
    let head_loss_minor = minor_losses(&input.fittings_k, velocity);
    let total_head_loss = head_loss_friction + head_loss_minor + input.elevation_change_m;
    let pressure_drop_kpa = head_to_pressure(total_head_loss, fluid.density_kg_per_m3) / 1000.0;

    Ok(SystemResult {
        flow_m3_per_s: input.flow_m3_per_s,
        velocity_m_per_s: velocity,
        reynolds,
        flow_regime: friction.regime,
        friction_factor: friction.friction_factor,
        head_loss_friction_m: head_loss_friction,
        head_loss_minor_m: head_loss_minor,
        elevation_head_m: input.elevation_change_m,
        total_head_loss_m: total_head_loss,
        pressure_drop_kpa,
        density_kg_per_m3: fluid.density_kg_per_m3,
        kinematic_viscosity_m2_per_s: fluid.kinematic_viscosity_m2_per_s,
        advisories: fluid.advisory().into_iter().collect(),
    })
}

/// 피팅별 국부 손실 내역.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinorLossItem {
    pub name: &'static str,
    pub quantity: u32,
    pub k: f64,
    pub head_loss_m: f64,
}

/// 피팅 종류/수량별 손실수두 내역을 만든다.
pub fn minor_loss_breakdown(
    fittings: &[(&'static FittingData, u32)],
    velocity_m_per_s: f64,
) -> Vec<MinorLossItem> {
    fittings
        .iter()
        .map(|(fitting, quantity)| MinorLossItem {
            name: fitting.name,
            quantity: *quantity,
            k: fitting.k,
            head_loss_m: minor_loss(fitting.k, velocity_m_per_s) * f64::from(*quantity),
        })
        .collect()
}

/// 피팅 종류/수량 목록을 K 값 목록으로 펼친다.
pub fn expand_fittings(fittings: &[(&'static FittingData, u32)]) -> Vec<f64> {
    fittings
        .iter()
        .flat_map(|(fitting, quantity)| std::iter::repeat(fitting.k).take(*quantity as usize))
        .collect()
}
