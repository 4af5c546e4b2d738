//! 펌프 곡선과 시스템 저항곡선 H = H_static + k·Q² 의 교점(운전점) 탐색.
//!
//! 기본 탐색(`operating_point`)은 곡선 샘플 중 두 곡선의 양정 차가 가장 작은 점을 고른다.
//! 정밀도는 샘플 간격(유량 범위의 1/N)으로 제한되며 기준 결과와의 호환을 위해 유지한다.
//! `operating_point_refined`는 연속 곡선에 이분법을 적용하는 별도 모드다.

use serde::{Deserialize, Serialize};

use super::curve::{generate_pump_curve, BepPoint, CurveSettings, PumpCurve};
use crate::error::{ensure_finite, CalcResult};

const BISECTION_MAX_ITERATIONS: usize = 200;

/// 시스템 저항곡선.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemCurve {
    /// 정수두 [m]
    pub static_head_m: f64,
    /// 저항 계수 k [m/(m3/s)²]
    pub k_coefficient: f64,
}

impl SystemCurve {
    pub fn head_at(&self, flow_m3_per_s: f64) -> f64 {
        self.static_head_m + self.k_coefficient * flow_m3_per_s * flow_m3_per_s
    }

    fn validate(&self) -> CalcResult<()> {
        ensure_finite(self.static_head_m, "정수두는 유한값이어야 합니다.")?;
        ensure_finite(self.k_coefficient, "저항 계수는 유한값이어야 합니다.")?;
        Ok(())
    }
}

/// 운전점.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingPoint {
    pub flow_m3_per_s: f64,
    pub head_m: f64,
    pub power_w: f64,
    pub efficiency: f64,
    /// 선택된 곡선 샘플 인덱스. 연속 탐색이면 `None`.
    pub sample_index: Option<usize>,
    /// |펌프 양정 − 시스템 양정| [m]
    pub head_mismatch_m: f64,
}

/// 샘플 탐색 결과. 플롯용 시스템 곡선 샘플을 함께 돌려준다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperatingPointSearch {
    pub point: OperatingPoint,
    /// 펌프 곡선과 같은 유량 점에서의 시스템 양정 [m]
    pub system_head_m: Vec<f64>,
}

/// 곡선 샘플 중 양정 차가 최소인 점을 고른다. 동률이면 유량이 작은 쪽.
pub fn operating_point(curve: &PumpCurve, system: &SystemCurve) -> CalcResult<OperatingPointSearch> {
    system.validate()?;
    let system_head_m: Vec<f64> = curve.flow().iter().map(|q| system.head_at(*q)).collect();

    let mut best_index = 0;
    let mut best_diff = f64::INFINITY;
    for (i, (pump_h, sys_h)) in curve.head().iter().zip(&system_head_m).enumerate() {
        let diff = (pump_h - sys_h).abs();
        if diff < best_diff {
            best_diff = diff;
            best_index = i;
        }
    }

    let point = OperatingPoint {
        flow_m3_per_s: curve.flow()[best_index],
        head_m: curve.head()[best_index],
        power_w: curve.power()[best_index],
        efficiency: curve.efficiency()[best_index],
        sample_index: Some(best_index),
        head_mismatch_m: best_diff,
    };
    Ok(OperatingPointSearch {
        point,
        system_head_m,
    })
}

/// 곡선을 생성하고 운전점을 찾는다. 생성한 곡선도 함께 돌려준다.
pub fn find_operating_point(
    bep: &BepPoint,
    num_points: usize,
    system: &SystemCurve,
    settings: &CurveSettings,
) -> CalcResult<(PumpCurve, OperatingPointSearch)> {
    let curve = generate_pump_curve(bep, num_points, settings)?;
    let search = operating_point(&curve, system)?;
    Ok((curve, search))
}

/// 연속 양정곡선과 시스템 곡선의 교점을 이분법으로 찾는다.
///
/// 곡선 유량 범위 [0, Q_max] 안에서 부호가 바뀌지 않으면 교점이 없으므로 `None`.
/// 샘플 탐색과 결과가 다를 수 있다.
pub fn operating_point_refined(
    curve: &PumpCurve,
    system: &SystemCurve,
) -> CalcResult<Option<OperatingPoint>> {
    system.validate()?;
    let residual = |q: f64| curve.head_at(q) - system.head_at(q);

    let mut lo = 0.0;
    let mut hi = curve.max_flow_m3_per_s();
    let (r_lo, r_hi) = (residual(lo), residual(hi));
    if r_lo == 0.0 {
        hi = lo;
    } else if r_hi == 0.0 {
        lo = hi;
    } else if r_lo.signum() == r_hi.signum() {
        return Ok(None);
    }

    let lo_sign = r_lo.signum();
    for _ in 0..BISECTION_MAX_ITERATIONS {
        if hi - lo <= f64::EPSILON * hi.max(1.0) {
            break;
        }
        let mid = 0.5 * (lo + hi);
        let r_mid = residual(mid);
        if r_mid == 0.0 {
            lo = mid;
            hi = mid;
            break;
        }
        if r_mid.signum() == lo_sign {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let q = 0.5 * (lo + hi);
    Ok(Some(OperatingPoint {
        flow_m3_per_s: q,
        head_m: curve.head_at(q),
        power_w: curve.power_at(q),
        efficiency: curve.efficiency_at(q),
        sample_index: None,
        head_mismatch_m: residual(q).abs(),
    }))
}
