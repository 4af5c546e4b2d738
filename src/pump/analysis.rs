use serde::{Deserialize, Serialize};

use super::npsh::{cavitation_check, npsh_available, npsh_required_estimate, CavitationCheck, SuctionSpec};
use super::power::{hydraulic_power, motor_power, shaft_power, WATTS_PER_HP};
use super::specific_speed::{specific_speed, PumpType};
use crate::error::{ensure_finite, ensure_positive, CalcResult};

/// 20°C 물 밀도 [kg/m3]. 밀도를 따로 주지 않을 때 사용한다.
pub const DEFAULT_DENSITY_KG_PER_M3: f64 = 998.2;

/// 펌프 사양.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpSpec {
    /// 회전수 [rpm]
    pub speed_rpm: f64,
    /// 펌프 효율 (0, 1]
    pub efficiency: f64,
}

impl Default for PumpSpec {
    fn default() -> Self {
        Self {
            speed_rpm: 1750.0,
            efficiency: 0.75,
        }
    }
}

/// 펌프 계산 설정값. 설정 파일의 `[pump]` 섹션에 대응한다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpSettings {
    pub motor_efficiency: f64,
    /// 전동기 출력 안전율
    pub motor_safety_factor: f64,
    /// 공동현상 안전 여유 [m]
    pub npsh_safety_margin_m: f64,
    /// 이 값 미만의 여유는 "여유 부족"으로 표시 [m]
    pub npsh_comfort_margin_m: f64,
    /// 흡입 비속도 S (미국 단위계)
    pub suction_specific_speed: f64,
    /// 최소 연속 유량 = BEP 유량 × 계수
    pub min_flow_factor: f64,
    /// 최대 권장 유량 = BEP 유량 × 계수
    pub max_flow_factor: f64,
}

impl Default for PumpSettings {
    fn default() -> Self {
        Self {
            motor_efficiency: 0.95,
            motor_safety_factor: 1.15,
            npsh_safety_margin_m: 0.5,
            npsh_comfort_margin_m: 1.0,
            suction_specific_speed: 11_000.0,
            min_flow_factor: 0.3,
            max_flow_factor: 1.2,
        }
    }
}

/// 펌프 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PumpInput {
    /// 설계 유량 [m3/s] (BEP 유량으로 취급)
    pub flow_m3_per_s: f64,
    /// 전양정 [m]
    pub total_head_m: f64,
    pub suction: SuctionSpec,
    pub pump: PumpSpec,
    pub density_kg_per_m3: f64,
}

/// 펌프 계산 결과.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PumpResult {
    pub hydraulic_power_kw: f64,
    pub shaft_power_kw: f64,
    pub motor_power_kw: f64,
    pub motor_power_hp: f64,
    pub efficiency: f64,
    pub npsh_available_m: f64,
    pub npsh_required_m: f64,
    pub cavitation: CavitationCheck,
    pub specific_speed: f64,
    pub pump_type: PumpType,
    /// 최소 연속 유량 [m3/s]
    pub minimum_flow_m3_per_s: f64,
    /// 최대 권장 유량 [m3/s]
    pub maximum_flow_m3_per_s: f64,
}

impl PumpResult {
    /// "최소 - 최대 m³/h" 형식의 운전 범위.
    pub fn operating_range(&self) -> String {
        format!(
            "{:.1} - {:.1} m³/h",
            self.minimum_flow_m3_per_s * 3600.0,
            self.maximum_flow_m3_per_s * 3600.0
        )
    }
}

/// 최소 연속 유량 [m3/s]
pub fn minimum_flow(bep_flow_m3_per_s: f64, factor: f64) -> f64 {
    bep_flow_m3_per_s * factor
}

/// 최대 권장 유량 [m3/s]
pub fn maximum_flow(bep_flow_m3_per_s: f64, factor: f64) -> f64 {
    bep_flow_m3_per_s * factor
}

/// 동력, NPSH, 공동현상, 비속도, 운전 범위를 한 번에 계산한다.
pub fn analyze_pump(input: &PumpInput, settings: &PumpSettings) -> CalcResult<PumpResult> {
    ensure_positive(input.flow_m3_per_s, "유량은 0보다 커야 합니다.")?;
    ensure_positive(input.total_head_m, "전양정은 0보다 커야 합니다.")?;
    ensure_positive(input.density_kg_per_m3, "밀도는 0보다 커야 합니다.")?;
    ensure_positive(input.pump.speed_rpm, "회전수는 0보다 커야 합니다.")?;
    ensure_positive(settings.motor_efficiency, "전동기 효율은 0보다 커야 합니다.")?;
    ensure_finite(input.suction.pressure_suction_pa, "흡입 압력은 유한값이어야 합니다.")?;
    ensure_finite(input.suction.vapor_pressure_pa, "증기압은 유한값이어야 합니다.")?;
    ensure_finite(input.suction.velocity_suction_m_per_s, "흡입 유속은 유한값이어야 합니다.")?;
    ensure_finite(input.suction.elevation_m, "흡입 높이는 유한값이어야 합니다.")?;

    let hydraulic_w = hydraulic_power(input.flow_m3_per_s, input.total_head_m, input.density_kg_per_m3);
    let shaft_w = shaft_power(hydraulic_w, input.pump.efficiency)?;
    let motor_w = motor_power(shaft_w, settings.motor_efficiency, settings.motor_safety_factor);

    let npsh_a = npsh_available(&input.suction, input.density_kg_per_m3);
    let npsh_r = npsh_required_estimate(
        input.flow_m3_per_s,
        input.pump.speed_rpm,
        settings.suction_specific_speed,
    );
    let cavitation = cavitation_check(
        npsh_a,
        npsh_r,
        settings.npsh_safety_margin_m,
        settings.npsh_comfort_margin_m,
    );

    let ns = specific_speed(input.flow_m3_per_s, input.total_head_m, input.pump.speed_rpm);

    Ok(PumpResult {
        hydraulic_power_kw: hydraulic_w / 1000.0,
        shaft_power_kw: shaft_w / 1000.0,
        motor_power_kw: motor_w / 1000.0,
        motor_power_hp: motor_w / WATTS_PER_HP,
        efficiency: input.pump.efficiency,
        npsh_available_m: npsh_a,
        npsh_required_m: npsh_r,
        cavitation,
        specific_speed: ns,
        pump_type: PumpType::classify(ns),
        minimum_flow_m3_per_s: minimum_flow(input.flow_m3_per_s, settings.min_flow_factor),
        maximum_flow_m3_per_s: maximum_flow(input.flow_m3_per_s, settings.max_flow_factor),
    })
}
