//! BEP(최고효율점) 기준 포물선 펌프 성능곡선 생성.
//!
//! - 양정: H(Q) = H0 − a·Q², H0 = 1.15·H_bep, BEP 를 정확히 통과하도록 a 를 정한다. 음수는 0 으로.
//! - 효율: BEP 유량 중심의 가우스형 곡선, [0.01, 1.0] 으로 자른다.
//! - 동력: 각 점의 수동력(기준 밀도) ÷ 해당 점 효율. 별도 매개변수 없음.

use serde::{Deserialize, Serialize};

use super::power::hydraulic_power;
use crate::error::{ensure_positive, CalcError, CalcResult};

const MIN_EFFICIENCY: f64 = 0.01;
const MAX_EFFICIENCY: f64 = 1.0;

/// 최고효율점 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BepPoint {
    pub flow_m3_per_s: f64,
    pub head_m: f64,
    /// BEP 동력 [W]. 곡선 계산에는 쓰이지 않고 기록용이다.
    pub power_w: Option<f64>,
    pub efficiency: f64,
}

impl BepPoint {
    /// 동력이 주어지지 않으면 수동력/효율로 구한다.
    pub fn power_or_derived(&self, density_kg_per_m3: f64) -> f64 {
        self.power_w.unwrap_or_else(|| {
            hydraulic_power(self.flow_m3_per_s, self.head_m, density_kg_per_m3) / self.efficiency
        })
    }
}

/// 곡선 생성 설정값. 설정 파일의 `[curve]` 섹션에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSettings {
    /// 기본 샘플 수
    pub num_points: usize,
    /// 체절 양정 / BEP 양정
    pub shutoff_head_ratio: f64,
    /// 곡선 최대 유량 / BEP 유량
    pub max_flow_ratio: f64,
    /// 효율 곡선 폭 (BEP 유량 대비 비율)
    pub efficiency_spread: f64,
    /// 동력 곡선 계산용 기준 밀도 [kg/m3]
    pub reference_density_kg_per_m3: f64,
}

impl Default for CurveSettings {
    fn default() -> Self {
        Self {
            num_points: 50,
            shutoff_head_ratio: 1.15,
            max_flow_ratio: 1.5,
            efficiency_spread: 0.4,
            reference_density_kg_per_m3: 998.2,
        }
    }
}

/// 곡선의 한 점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    pub flow_m3_per_s: f64,
    pub head_m: f64,
    pub power_w: f64,
    pub efficiency: f64,
}

/// 이산화된 펌프 성능곡선. 네 배열의 길이는 항상 같다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpCurve {
    bep: BepPoint,
    shutoff_head_m: f64,
    head_coefficient: f64,
    efficiency_spread: f64,
    reference_density_kg_per_m3: f64,
    flow_m3_per_s: Vec<f64>,
    head_m: Vec<f64>,
    power_w: Vec<f64>,
    efficiency: Vec<f64>,
}

impl PumpCurve {
    pub fn bep(&self) -> &BepPoint {
        &self.bep
    }

    pub fn shutoff_head_m(&self) -> f64 {
        self.shutoff_head_m
    }

    pub fn len(&self) -> usize {
        self.flow_m3_per_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flow_m3_per_s.is_empty()
    }

    pub fn flow(&self) -> &[f64] {
        &self.flow_m3_per_s
    }

    pub fn head(&self) -> &[f64] {
        &self.head_m
    }

    pub fn power(&self) -> &[f64] {
        &self.power_w
    }

    pub fn efficiency(&self) -> &[f64] {
        &self.efficiency
    }

    pub fn sample(&self, index: usize) -> Option<CurveSample> {
        Some(CurveSample {
            flow_m3_per_s: *self.flow_m3_per_s.get(index)?,
            head_m: self.head_m[index],
            power_w: self.power_w[index],
            efficiency: self.efficiency[index],
        })
    }

    pub fn samples(&self) -> impl Iterator<Item = CurveSample> + '_ {
        (0..self.len()).filter_map(|i| self.sample(i))
    }

    /// 임의 유량에서의 연속 양정 [m]
    pub fn head_at(&self, flow_m3_per_s: f64) -> f64 {
        (self.shutoff_head_m - self.head_coefficient * flow_m3_per_s * flow_m3_per_s).max(0.0)
    }

    /// 임의 유량에서의 연속 효율
    pub fn efficiency_at(&self, flow_m3_per_s: f64) -> f64 {
        bell_efficiency(
            flow_m3_per_s,
            self.bep.flow_m3_per_s,
            self.bep.efficiency,
            self.efficiency_spread,
        )
    }

    /// 임의 유량에서의 연속 축동력 [W]
    pub fn power_at(&self, flow_m3_per_s: f64) -> f64 {
        hydraulic_power(
            flow_m3_per_s,
            self.head_at(flow_m3_per_s),
            self.reference_density_kg_per_m3,
        ) / self.efficiency_at(flow_m3_per_s)
    }

    /// 곡선이 다루는 최대 유량 [m3/s]
    pub fn max_flow_m3_per_s(&self) -> f64 {
        self.flow_m3_per_s.last().copied().unwrap_or(0.0)
    }
}

fn bell_efficiency(flow: f64, bep_flow: f64, bep_efficiency: f64, spread: f64) -> f64 {
    let normalized = flow / bep_flow;
    let z = (normalized - 1.0) / spread;
    (bep_efficiency * (-0.5 * z * z).exp()).clamp(MIN_EFFICIENCY, MAX_EFFICIENCY)
}

/// [0, end] 구간을 n 개 점으로 균등 분할한다. 마지막 점은 정확히 end.
fn linspace(end: f64, n: usize) -> Vec<f64> {
    let step = end / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
    if let Some(last) = values.last_mut() {
        *last = end;
    }
    values
}

/// BEP 사양으로 펌프 성능곡선을 만든다.
pub fn generate_pump_curve(
    bep: &BepPoint,
    num_points: usize,
    settings: &CurveSettings,
) -> CalcResult<PumpCurve> {
    if num_points < 2 {
        return Err(CalcError::InvalidInput("곡선 샘플 수는 2 이상이어야 합니다."));
    }
    ensure_positive(bep.flow_m3_per_s, "BEP 유량은 0보다 커야 합니다.")?;
    ensure_positive(bep.head_m, "BEP 양정은 0보다 커야 합니다.")?;
    if !(bep.efficiency > 0.0 && bep.efficiency <= 1.0) {
        return Err(CalcError::InvalidInput("BEP 효율은 0 초과 1 이하여야 합니다."));
    }
    // 1 이하이면 양정이 유량에 따라 증가하는 곡선이 된다.
    if !(settings.shutoff_head_ratio.is_finite() && settings.shutoff_head_ratio > 1.0) {
        return Err(CalcError::InvalidInput("체절 양정 비는 1보다 커야 합니다."));
    }
    ensure_positive(settings.max_flow_ratio, "최대 유량 비는 0보다 커야 합니다.")?;
    ensure_positive(settings.efficiency_spread, "효율 곡선 폭은 0보다 커야 합니다.")?;
    ensure_positive(settings.reference_density_kg_per_m3, "기준 밀도는 0보다 커야 합니다.")?;

    let q_bep = bep.flow_m3_per_s;
    let shutoff = bep.head_m * settings.shutoff_head_ratio;
    let coefficient = (shutoff - bep.head_m) / (q_bep * q_bep);

    let flow = linspace(settings.max_flow_ratio * q_bep, num_points);
    let head: Vec<f64> = flow
        .iter()
        .map(|q| (shutoff - coefficient * q * q).max(0.0))
        .collect();
    let efficiency: Vec<f64> = flow
        .iter()
        .map(|q| bell_efficiency(*q, q_bep, bep.efficiency, settings.efficiency_spread))
        .collect();
    let power = flow
        .iter()
        .zip(&head)
        .zip(&efficiency)
        .map(|((q, h), eta)| hydraulic_power(*q, *h, settings.reference_density_kg_per_m3) / eta)
        .collect();

    Ok(PumpCurve {
        bep: *bep,
        shutoff_head_m: shutoff,
        head_coefficient: coefficient,
        efficiency_spread: settings.efficiency_spread,
        reference_density_kg_per_m3: settings.reference_density_kg_per_m3,
        flow_m3_per_s: flow,
        head_m: head,
        power_w: power,
        efficiency,
    })
}
