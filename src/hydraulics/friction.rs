//! 레이놀즈수와 Darcy 마찰계수 계산.
//!
//! 영역 선택 규칙:
//! - Re < 2300: 층류, f = 64/Re
//! - 2300 ≤ Re < 4000: 천이, Swamee-Jain 근사식으로 연속성을 유지
//! - Re ≥ 4000: 난류, Colebrook-White 반복 해

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_non_negative, ensure_positive, CalcError, CalcResult};

/// 층류 상한 레이놀즈수
pub const LAMINAR_UPPER_RE: f64 = 2300.0;
/// 난류 하한 레이놀즈수
pub const TURBULENT_LOWER_RE: f64 = 4000.0;

/// 유동 영역.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// 레이놀즈수만으로 영역을 결정한다. 경계값 2300, 4000은 상위 영역에 속한다.
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_UPPER_RE {
            FlowRegime::Laminar
        } else if reynolds < TURBULENT_LOWER_RE {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "층류",
            FlowRegime::Transitional => "천이",
            FlowRegime::Turbulent => "난류",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Colebrook 반복 해의 수렴 조건.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// 연속 반복값 차이의 허용치
    pub colebrook_tolerance: f64,
    /// 최대 반복 횟수
    pub colebrook_max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            colebrook_tolerance: 1e-6,
            colebrook_max_iterations: 100,
        }
    }
}

/// 마찰계수 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionResult {
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Darcy 마찰계수
    pub friction_factor: f64,
}

/// 레이놀즈수 Re = v·D/ν
pub fn reynolds_number(
    velocity_m_per_s: f64,
    diameter_m: f64,
    kinematic_viscosity_m2_per_s: f64,
) -> CalcResult<f64> {
    ensure_positive(velocity_m_per_s, "유속은 0보다 커야 합니다.")?;
    ensure_positive(diameter_m, "내경은 0보다 커야 합니다.")?;
    ensure_positive(kinematic_viscosity_m2_per_s, "동점도는 0보다 커야 합니다.")?;
    Ok(velocity_m_per_s * diameter_m / kinematic_viscosity_m2_per_s)
}

/// 층류 마찰계수 f = 64/Re
pub fn friction_factor_laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

/// Swamee-Jain 명시 근사식.
///
/// f = 0.25 / [log10(ε/(3.7D) + 5.74/Re^0.9)]²
pub fn friction_factor_swamee_jain(reynolds: f64, roughness_m: f64, diameter_m: f64) -> f64 {
    let relative_roughness = roughness_m / diameter_m;
    let term = relative_roughness / 3.7 + 5.74 / reynolds.powf(0.9);
    0.25 / term.log10().powi(2)
}

/// Colebrook-White 식을 고정점 반복으로 푼다. 초기값은 Swamee-Jain 근사.
///
/// 1/√f = -2·log10(ε/(3.7D) + 2.51/(Re·√f))
///
/// 허용 반복 횟수를 넘기면 `NonConvergence`를 반환한다. 근사값으로 대체하지 않는다.
pub fn friction_factor_colebrook(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
    settings: &SolverSettings,
) -> CalcResult<f64> {
    if reynolds.is_nan() || reynolds < TURBULENT_LOWER_RE {
        return Err(CalcError::InvalidInput(
            "Colebrook 식은 난류(Re ≥ 4000)에만 적용합니다. 층류는 f = 64/Re 를 사용하세요.",
        ));
    }
    ensure_positive(diameter_m, "내경은 0보다 커야 합니다.")?;
    ensure_non_negative(roughness_m, "거칠기는 0 이상이어야 합니다.")?;

    let rough_term = roughness_m / diameter_m / 3.7;
    let mut f = friction_factor_swamee_jain(reynolds, roughness_m, diameter_m);
    let mut last_change = f64::INFINITY;
    for iteration in 1..=settings.colebrook_max_iterations {
        let previous = f;
        f = 0.25 / (rough_term + 2.51 / (reynolds * previous.sqrt())).log10().powi(2);
        last_change = (f - previous).abs();
        if last_change < settings.colebrook_tolerance {
            debug!(iterations = iteration, reynolds, friction_factor = f, "Colebrook converged");
            return Ok(f);
        }
    }
    Err(CalcError::NonConvergence {
        iterations: settings.colebrook_max_iterations,
        last_change,
    })
}

/// 레이놀즈수에 따라 영역을 고르고 해당 방법으로 마찰계수를 계산한다.
pub fn friction_factor(
    reynolds: f64,
    roughness_m: f64,
    diameter_m: f64,
    settings: &SolverSettings,
) -> CalcResult<FrictionResult> {
    ensure_positive(reynolds, "레이놀즈수는 0보다 커야 합니다.")?;
    ensure_positive(diameter_m, "내경은 0보다 커야 합니다.")?;
    ensure_non_negative(roughness_m, "거칠기는 0 이상이어야 합니다.")?;

    let regime = FlowRegime::from_reynolds(reynolds);
    let friction_factor = match regime {
        FlowRegime::Laminar => friction_factor_laminar(reynolds),
        FlowRegime::Transitional => friction_factor_swamee_jain(reynolds, roughness_m, diameter_m),
        FlowRegime::Turbulent => {
            friction_factor_colebrook(reynolds, roughness_m, diameter_m, settings)?
        }
    };
    Ok(FrictionResult {
        reynolds,
        regime,
        friction_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_boundaries_belong_to_upper_regime() {
        assert_eq!(FlowRegime::from_reynolds(2299.999), FlowRegime::Laminar);
        assert_eq!(FlowRegime::from_reynolds(2300.0), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(3999.999), FlowRegime::Transitional);
        assert_eq!(FlowRegime::from_reynolds(4000.0), FlowRegime::Turbulent);
    }

    #[test]
    fn colebrook_rejects_laminar_reynolds() {
        let err = friction_factor_colebrook(3000.0, 4.5e-5, 0.1, &SolverSettings::default());
        assert!(matches!(err, Err(CalcError::InvalidInput(_))));
    }

    #[test]
    fn colebrook_reports_non_convergence_with_zero_budget() {
        let settings = SolverSettings {
            colebrook_tolerance: 1e-6,
            colebrook_max_iterations: 0,
        };
        let err = friction_factor_colebrook(1e5, 4.5e-5, 0.1, &settings).unwrap_err();
        assert!(matches!(err, CalcError::NonConvergence { iterations: 0, .. }));
    }

    #[test]
    fn colebrook_reports_non_convergence_with_impossible_tolerance() {
        let settings = SolverSettings {
            colebrook_tolerance: 0.0,
            colebrook_max_iterations: 5,
        };
        let err = friction_factor_colebrook(1e5, 4.5e-5, 0.1, &settings).unwrap_err();
        assert!(matches!(err, CalcError::NonConvergence { iterations: 5, .. }));
    }
}
