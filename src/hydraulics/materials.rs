//! 배관 재질별 절대 거칠기, 피팅 K 값, Hazen-Williams C 계수 테이블.
//! 값은 ISO/ASME 자료의 대표값이며 설계 시 제조사 자료로 검증해야 한다.

#[derive(Debug)]
pub struct RoughnessData {
    pub code: &'static str,
    pub name: &'static str,
    /// 절대 거칠기 [mm]
    pub roughness_mm: f64,
}

impl RoughnessData {
    /// 절대 거칠기 [m]
    pub fn roughness_m(&self) -> f64 {
        self.roughness_mm / 1000.0
    }
}

#[derive(Debug)]
pub struct FittingData {
    pub code: &'static str,
    pub name: &'static str,
    /// 국부 손실 계수 K
    pub k: f64,
}

#[derive(Debug)]
pub struct HazenWilliamsData {
    pub code: &'static str,
    pub name: &'static str,
    pub c: f64,
}

pub fn find_roughness(code: &str) -> Option<&'static RoughnessData> {
    ROUGHNESS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

pub fn find_fitting(code: &str) -> Option<&'static FittingData> {
    FITTINGS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

pub fn find_hazen_williams(code: &str) -> Option<&'static HazenWilliamsData> {
    HAZEN_WILLIAMS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

const ROUGHNESS: &[RoughnessData] = &[
    rough("steel-new", "Commercial steel new", 0.045),
    rough("steel-used", "Commercial steel used", 0.15),
    rough("riveted-steel", "Riveted steel", 1.5),
    rough("cast-iron-new", "Cast iron new", 0.26),
    rough("cast-iron-used", "Cast iron used", 1.5),
    rough("galvanized", "Galvanized iron", 0.15),
    rough("pvc", "PVC", 0.0015),
    rough("hdpe", "HDPE", 0.0015),
    rough("copper", "Copper", 0.0015),
    rough("glass", "Glass", 0.0015),
    rough("concrete-smooth", "Smooth concrete", 0.3),
    rough("concrete-rough", "Rough concrete", 3.0),
];

const FITTINGS: &[FittingData] = &[
    fit("gate-valve", "Gate valve (fully open)", 0.2),
    fit("globe-valve", "Globe valve (fully open)", 10.0),
    fit("elbow-90", "90° elbow", 0.9),
    fit("elbow-90-lr", "90° long-radius elbow", 0.6),
    fit("elbow-45", "45° elbow", 0.4),
    fit("tee-branch", "Tee (flow through branch)", 1.8),
    fit("tee-run", "Tee (flow through run)", 0.6),
    fit("check-valve", "Swing check valve", 2.0),
    fit("entrance", "Sharp entrance", 0.5),
    fit("exit", "Exit", 1.0),
];

const HAZEN_WILLIAMS: &[HazenWilliamsData] = &[
    hw("pvc-new", "PVC new", 150.0),
    hw("pvc-used", "PVC used", 140.0),
    hw("hdpe", "HDPE", 150.0),
    hw("copper", "Copper", 140.0),
    hw("steel-new", "Steel new", 140.0),
    hw("steel-5y", "Steel 5 years", 130.0),
    hw("steel-10y", "Steel 10 years", 120.0),
    hw("steel-20y", "Steel 20 years", 100.0),
    hw("cast-iron-new", "Cast iron new", 130.0),
    hw("cast-iron-10y", "Cast iron 10 years", 110.0),
    hw("cast-iron-20y", "Cast iron 20 years", 90.0),
    hw("concrete-smooth", "Smooth concrete", 130.0),
    hw("concrete-rough", "Rough concrete", 110.0),
];

const fn rough(code: &'static str, name: &'static str, roughness_mm: f64) -> RoughnessData {
    RoughnessData {
        code,
        name,
        roughness_mm,
    }
}

const fn fit(code: &'static str, name: &'static str, k: f64) -> FittingData {
    FittingData { code, name, k }
}

const fn hw(code: &'static str, name: &'static str, c: f64) -> HazenWilliamsData {
    HazenWilliamsData { code, name, c }
}
