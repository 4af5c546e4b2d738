use thiserror::Error;

/// 계산 엔진 전체에서 공유하는 오류 타입.
///
/// 엔지니어링적으로 "불합격"인 결과는 오류가 아니다. 판정 레코드의 status로 전달된다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// 호출 규약 위반 (0 이하의 유량/직경/점도, 범위 밖 효율 등)
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
    /// Colebrook 반복 해가 허용 반복 횟수 안에 수렴하지 않음
    #[error("Colebrook 반복이 {iterations}회 안에 수렴하지 않았습니다 (마지막 변화량 {last_change:.3e})")]
    NonConvergence { iterations: usize, last_change: f64 },
}

pub type CalcResult<T> = Result<T, CalcError>;

/// 양의 유한값인지 확인한다.
pub(crate) fn ensure_positive(value: f64, what: &'static str) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(what))
    }
}

/// 0 이상의 유한값인지 확인한다.
pub(crate) fn ensure_non_negative(value: f64, what: &'static str) -> CalcResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(what))
    }
}

pub(crate) fn ensure_finite(value: f64, what: &'static str) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput(what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_guard_rejects_zero_and_nan() {
        assert!(ensure_positive(0.0, "x").is_err());
        assert!(ensure_positive(f64::NAN, "x").is_err());
        assert_eq!(ensure_positive(2.5, "x"), Ok(2.5));
    }

    #[test]
    fn non_negative_guard_accepts_zero() {
        assert_eq!(ensure_non_negative(0.0, "x"), Ok(0.0));
        assert!(ensure_non_negative(-1e-9, "x").is_err());
    }

    #[test]
    fn non_convergence_message_mentions_iterations() {
        let err = CalcError::NonConvergence {
            iterations: 100,
            last_change: 1e-3,
        };
        assert!(err.to_string().contains("100"));
    }
}
