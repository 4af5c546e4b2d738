use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::hydraulics::SolverSettings;
use crate::pump::{CurveSettings, PumpSettings};
use crate::units::{FlowUnit, LengthUnit, PressureUnit};

/// 기본 설정 파일 경로
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// CLI 입력에 단위를 생략했을 때 쓰는 기본 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitDefaults {
    pub flow: FlowUnit,
    pub pressure: PressureUnit,
    pub length: LengthUnit,
}

impl Default for UnitDefaults {
    fn default() -> Self {
        Self {
            flow: FlowUnit::CubicMeterPerHour,
            pressure: PressureUnit::KiloPascal,
            length: LengthUnit::Meter,
        }
    }
}

/// 애플리케이션 설정을 표현한다. 빠진 섹션은 기본값으로 채운다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub solver: SolverSettings,
    pub pump: PumpSettings,
    pub curve: CurveSettings,
    pub units: UnitDefaults,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "기본 설정 파일을 생성했습니다");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML 파일로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [solver]
            colebrook_max_iterations = 20

            [pump]
            npsh_safety_margin_m = 0.9
            "#,
        )
        .unwrap();
        assert_eq!(cfg.solver.colebrook_max_iterations, 20);
        assert_eq!(cfg.solver.colebrook_tolerance, SolverSettings::default().colebrook_tolerance);
        assert_eq!(cfg.pump.npsh_safety_margin_m, 0.9);
        assert_eq!(cfg.pump.motor_efficiency, 0.95);
        assert_eq!(cfg.curve, CurveSettings::default());
        assert_eq!(cfg.units, UnitDefaults::default());
    }

    #[test]
    fn default_config_survives_toml_round_trip() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, Config::default());
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = std::env::temp_dir().join(format!(
            "pipe_pump_toolbox_cfg_{}.toml",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        let cfg = load_or_default(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        let reloaded = load_or_default(&path).unwrap();
        assert_eq!(reloaded, cfg);
        let _ = fs::remove_file(&path);
    }
}
