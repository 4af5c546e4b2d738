use serde::Serialize;

use super::SelectionStatus;
use crate::error::{ensure_finite, ensure_non_negative, CalcResult};

/// 운전압 대비 설계압 안전율 (ASME B31.3)
pub const DESIGN_PRESSURE_FACTOR: f64 = 1.5;

/// 압력 등급 체계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PressureStandard {
    /// ASME/ANSI 플랜지 클래스 (압력 + 온도 등급)
    Ansi,
    /// DIN/ISO 공칭압력 PN (압력 등급만)
    Pn,
}

impl PressureStandard {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ansi" | "asme" => Some(PressureStandard::Ansi),
            "pn" | "din" | "iso" => Some(PressureStandard::Pn),
            _ => None,
        }
    }
}

/// 압력 등급 테이블의 한 항목.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PressureClass {
    pub name: &'static str,
    pub max_pressure_bar: f64,
    /// ANSI 전용 온도 등급 [°C]
    pub max_temp_c: Option<f64>,
    pub applications: &'static str,
}

/// 작은 등급부터 정렬되어 있다. 테이블 순서가 곧 선호 순서다.
pub const ANSI_CLASSES: &[PressureClass] = &[
    ansi("150", 19.6, 260.0),
    ansi("300", 51.0, 370.0),
    ansi("600", 102.0, 400.0),
    ansi("900", 153.0, 427.0),
    ansi("1500", 255.0, 450.0),
    ansi("2500", 425.0, 482.0),
];

pub const PN_CLASSES: &[PressureClass] = &[
    pn("PN6", 6.0, "저압, 배수"),
    pn("PN10", 10.0, "냉수, 저압"),
    pn("PN16", 16.0, "물, 일반 용도"),
    pn("PN25", 25.0, "중압, 산업용"),
    pn("PN40", 40.0, "고압, 공정"),
    pn("PN63", 63.0, "초고압"),
    pn("PN100", 100.0, "극한 압력"),
];

const fn ansi(name: &'static str, max_pressure_bar: f64, max_temp_c: f64) -> PressureClass {
    PressureClass {
        name,
        max_pressure_bar,
        max_temp_c: Some(max_temp_c),
        applications: "",
    }
}

const fn pn(name: &'static str, max_pressure_bar: f64, applications: &'static str) -> PressureClass {
    PressureClass {
        name,
        max_pressure_bar,
        max_temp_c: None,
        applications,
    }
}

pub fn pressure_classes(standard: PressureStandard) -> &'static [PressureClass] {
    match standard {
        PressureStandard::Ansi => ANSI_CLASSES,
        PressureStandard::Pn => PN_CLASSES,
    }
}

/// 압력 등급 선정 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureClassSelection {
    pub status: SelectionStatus,
    pub standard: PressureStandard,
    pub operating_pressure_bar: f64,
    pub design_pressure_bar: f64,
    pub temperature_c: f64,
    /// 조건을 만족하는 첫 번째(가장 작은) 등급
    pub recommended_class: Option<&'static str>,
    pub suitable_classes: Vec<&'static str>,
    pub message: String,
}

/// 설계압(운전압 × 1.5)과 온도를 만족하는 가장 작은 등급을 고른다.
///
/// 만족하는 등급이 없으면 오류가 아니라 `NoSolution` 상태를 돌려준다.
pub fn select_pressure_class(
    operating_pressure_bar: f64,
    temperature_c: f64,
    standard: PressureStandard,
) -> CalcResult<PressureClassSelection> {
    ensure_non_negative(operating_pressure_bar, "운전 압력은 0 이상이어야 합니다.")?;
    ensure_finite(temperature_c, "온도는 유한값이어야 합니다.")?;

    let design_pressure_bar = operating_pressure_bar * DESIGN_PRESSURE_FACTOR;
    let suitable_classes: Vec<&'static str> = pressure_classes(standard)
        .iter()
        .filter(|c| {
            design_pressure_bar <= c.max_pressure_bar
                && c.max_temp_c.map_or(true, |t| temperature_c <= t)
        })
        .map(|c| c.name)
        .collect();

    let recommended_class = suitable_classes.first().copied();
    let (status, message) = match recommended_class {
        Some(name) => (
            SelectionStatus::Ok,
            format!("설계 압력 {design_pressure_bar:.1} bar 에 대해 {name} 등급을 권장합니다."),
        ),
        None => (
            SelectionStatus::NoSolution,
            format!(
                "설계 압력 {design_pressure_bar:.1} bar, 온도 {temperature_c:.0}°C 조건에 맞는 압력 등급이 없습니다."
            ),
        ),
    };

    Ok(PressureClassSelection {
        status,
        standard,
        operating_pressure_bar,
        design_pressure_bar,
        temperature_c,
        recommended_class,
        suitable_classes,
        message,
    })
}
