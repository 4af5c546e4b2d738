//! 설계 안전율/여유 참고표.
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SafetyFactor {
    pub item: &'static str,
    /// 근거 규격 또는 관행
    pub basis: &'static str,
    pub value: f64,
    /// 배수는 "×", 여유는 단위 표기
    pub unit: &'static str,
    pub description: &'static str,
}

pub const SAFETY_FACTORS: &[SafetyFactor] = &[
    SafetyFactor {
        item: "정압",
        basis: "ASME B31.3",
        value: 1.5,
        unit: "×",
        description: "운전압 대비 설계압",
    },
    SafetyFactor {
        item: "정압",
        basis: "ISO 15649",
        value: 1.5,
        unit: "×",
        description: "운전압 대비 설계압",
    },
    SafetyFactor {
        item: "정압",
        basis: "API 610",
        value: 1.25,
        unit: "×",
        description: "운전압 대비 설계압",
    },
    SafetyFactor {
        item: "수격",
        basis: "관행",
        value: 2.0,
        unit: "×",
        description: "과도 수력 현상에 의한 압력 상승",
    },
    SafetyFactor {
        item: "전동기 동력",
        basis: "관행",
        value: 1.15,
        unit: "×",
        description: "전동기 선정 여유",
    },
    SafetyFactor {
        item: "NPSH",
        basis: "ANSI/HI 9.6.1",
        value: 0.5,
        unit: "m",
        description: "요구 NPSH 대비 최소 여유",
    },
];

/// 항목 이름과 근거로 찾는다. 대소문자는 무시한다.
pub fn find_safety_factor(item: &str, basis: &str) -> Option<&'static SafetyFactor> {
    SAFETY_FACTORS
        .iter()
        .find(|f| f.item.eq_ignore_ascii_case(item) && f.basis.eq_ignore_ascii_case(basis))
}
