use serde::Serialize;

use crate::hydraulics::FlowRegime;

/// 레이놀즈수 검토 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReynoldsCheck {
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub description: &'static str,
    /// 영역별 우려 사항. 난류는 비어 있다.
    pub concerns: Vec<&'static str>,
}

/// 수력 계산과 같은 경계(2300, 4000)로 유동 영역을 분류하고 설명을 붙인다.
pub fn check_reynolds(reynolds: f64) -> ReynoldsCheck {
    let regime = FlowRegime::from_reynolds(reynolds);
    let (description, concerns) = match regime {
        FlowRegime::Laminar => (
            "평행한 층으로 흐르는 질서 있는 유동",
            vec!["유속이 매우 낮음", "침전 가능성"],
        ),
        FlowRegime::Transitional => (
            "층류와 난류 사이의 불안정한 유동",
            vec!["거동 예측이 어려움", "이 영역에서의 운전을 피할 것"],
        ),
        FlowRegime::Turbulent => ("완전 혼합 유동, 일반적인 운전 영역", Vec::new()),
    };
    ReynoldsCheck {
        reynolds,
        regime,
        description,
        concerns,
    }
}
