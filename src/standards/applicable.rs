use serde::Serialize;

/// 적용 분야.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Application {
    PotableWater,
    #[default]
    GeneralIndustrial,
    OilAndGas,
    Chemical,
}

impl Application {
    /// 모르는 코드는 일반 산업용으로 취급한다.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "potable-water" | "water" => Application::PotableWater,
            "oil-gas" | "oil-and-gas" => Application::OilAndGas,
            "chemical" => Application::Chemical,
            _ => Application::GeneralIndustrial,
        }
    }
}

/// 분야별 적용 규격 목록.
pub fn applicable_standards(application: Application) -> &'static [&'static str] {
    match application {
        Application::PotableWater => &[
            "ISO 9906 - Rotodynamic pumps",
            "ISO 15649 - Piping",
            "EN 1092 - Flanges",
            "NSF/ANSI 61 - Drinking water system components",
        ],
        Application::GeneralIndustrial => &[
            "ISO 9906 - Rotodynamic pumps",
            "ASME B31.3 - Process piping",
            "API 610 - Centrifugal pumps for petroleum industries",
            "ANSI/HI 9.6.3 - NPSH margin",
            "ISO 5167 - Flow measurement",
        ],
        Application::OilAndGas => &[
            "API 610 - Centrifugal pumps",
            "API 614 - Lubrication, shaft-sealing and oil-control systems",
            "ASME B31.3 - Process piping",
            "API RP 14E - Erosional velocity",
            "NACE MR0175 - Materials for H2S service",
        ],
        Application::Chemical => &[
            "ASME B31.3 - Process piping",
            "ISO 9906 - Pumps",
            "ISO 5199 - Chemical process pumps",
            "DIN 24255 - Chemical pumps",
        ],
    }
}
