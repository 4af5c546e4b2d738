use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;

use crate::config::{self, Config, ConfigError, DEFAULT_CONFIG_PATH};
use crate::conversion::{self, ConversionError};
use crate::error::CalcError;
use crate::fluid::{water_density, water_properties, FluidProperties};
use crate::hydraulics::materials::{find_fitting, find_hazen_williams, FittingData};
use crate::hydraulics::{
    calculate_system, expand_fittings, head_loss_hazen_williams, minor_loss_breakdown,
    MinorLossItem, PipeSpec, SystemInput, SystemResult,
};
use crate::pump::{
    affinity_flow, affinity_head, affinity_power, analyze_pump, find_operating_point,
    generate_pump_curve, npsh_required_curve, operating_point_refined, BepPoint,
    CurveSample, OperatingPoint, OperatingPointSearch, PumpInput, PumpResult, PumpSpec,
    SuctionSpec, SystemCurve, DEFAULT_DENSITY_KG_PER_M3,
};
use crate::standards::materials::{find_pipe_material, pipe_materials, PipeMaterialData};
use crate::standards::{
    applicable_standards, check_reynolds, check_velocity, erosion_velocity_check,
    select_pipe_size, select_pressure_class, Application, ErosionCheck, PipeSizeSelection,
    PipeSchedule, PressureClassSelection, PressureStandard, ReynoldsCheck, SafetyFactor,
    ServiceType, VelocityCheck, PIPE_SCHEDULES, SAFETY_FACTORS,
};
use crate::ui_cli;
use crate::units::{flow_to_si, length_to_si, pa_to_bar, pressure_to_pa};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("계산 오류: {0}")]
    Calc(#[from] CalcError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    #[error("JSON 출력 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// 테이블에 없는 피팅/서비스/규격 코드
    #[error("알 수 없는 코드: {0}")]
    UnknownCode(String),
}

#[derive(Parser, Debug)]
#[command(name = "pipe_pump_toolbox", version)]
#[command(about = "배관 수력 및 펌프 선정 계산기", long_about = None)]
pub struct Cli {
    /// 설정 파일 경로 (없으면 기본값으로 생성)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    /// 결과를 JSON 으로 출력
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 물 물성치 조회
    Properties {
        /// 온도 [°C]
        #[arg(long, allow_hyphen_values = true)]
        temp: f64,
    },
    /// 단일 배관 구간 수력 계산
    Pipe(PipeArgs),
    /// 펌프 동력/NPSH/비속도 분석
    Pump(PumpArgs),
    /// BEP 기준 펌프 곡선과 운전점
    Curve(CurveArgs),
    /// 규격 기준 판정
    #[command(subcommand)]
    Check(CheckCommand),
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("roughness").required(true).args(["roughness_mm", "material"])))]
pub struct PipeArgs {
    /// 유량
    #[arg(long)]
    pub flow: f64,
    /// 유량 단위 (m3/s, m3/h, L/s, L/min, gpm)
    #[arg(long)]
    pub flow_unit: Option<String>,
    /// 내경
    #[arg(long)]
    pub diameter: f64,
    /// 내경 단위
    #[arg(long, default_value = "mm")]
    pub diameter_unit: String,
    /// 배관 길이
    #[arg(long)]
    pub length: f64,
    /// 길이 단위 (m, mm, in, ft)
    #[arg(long)]
    pub length_unit: Option<String>,
    /// 절대 거칠기 [mm]
    #[arg(long)]
    pub roughness_mm: Option<f64>,
    /// 거칠기 테이블의 재질 코드 (steel-new, pvc, ...)
    #[arg(long)]
    pub material: Option<String>,
    /// 피팅 K 값 (여러 번 지정 가능)
    #[arg(long = "k")]
    pub k: Vec<f64>,
    /// 피팅 코드[:수량] (예: elbow-90:4)
    #[arg(long = "fitting")]
    pub fittings: Vec<String>,
    /// 유체 온도 [°C]
    #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
    pub temp: f64,
    /// 순 고도 변화 [m]
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub elevation: f64,
    /// 유속 판정용 서비스 코드
    #[arg(long, default_value = "general")]
    pub service: String,
    /// Hazen-Williams C 테이블 재질 코드. 지정하면 비교용 손실수두를 함께 계산
    #[arg(long)]
    pub hazen_williams: Option<String>,
}

#[derive(Args, Debug)]
pub struct PumpArgs {
    #[arg(long)]
    pub flow: f64,
    #[arg(long)]
    pub flow_unit: Option<String>,
    /// 전양정 [m]
    #[arg(long)]
    pub head: f64,
    #[arg(long, default_value_t = 0.75)]
    pub efficiency: f64,
    /// 회전수 [rpm]
    #[arg(long, default_value_t = 1750.0)]
    pub speed: f64,
    /// 흡입부 절대압
    #[arg(long)]
    pub suction_pressure: f64,
    /// 증기압 (절대압)
    #[arg(long)]
    pub vapor_pressure: f64,
    /// 압력 단위 (Pa, kPa, bar, psi, ...)
    #[arg(long)]
    pub pressure_unit: Option<String>,
    /// 흡입 유속 [m/s]
    #[arg(long)]
    pub suction_velocity: f64,
    /// 펌프 중심선 대비 액면 높이 [m]
    #[arg(long, allow_hyphen_values = true)]
    pub suction_elevation: f64,
    /// 유체 온도 [°C]. 없으면 998.2 kg/m3 사용
    #[arg(long, allow_hyphen_values = true)]
    pub temp: Option<f64>,
    /// 상사법칙으로 환산할 회전수 [rpm]
    #[arg(long)]
    pub new_speed: Option<f64>,
}

#[derive(Args, Debug)]
pub struct CurveArgs {
    #[arg(long)]
    pub bep_flow: f64,
    #[arg(long)]
    pub flow_unit: Option<String>,
    #[arg(long)]
    pub bep_head: f64,
    /// BEP 동력 [W] (기록용)
    #[arg(long)]
    pub bep_power: Option<f64>,
    #[arg(long, default_value_t = 0.75)]
    pub bep_efficiency: f64,
    /// 샘플 수 (없으면 설정값)
    #[arg(long)]
    pub points: Option<usize>,
    /// 시스템 곡선 정수두 [m]
    #[arg(long, requires = "k_coefficient", allow_hyphen_values = true)]
    pub static_head: Option<f64>,
    /// 시스템 곡선 계수 k [m/(m3/s)²]
    #[arg(long, requires = "static_head")]
    pub k_coefficient: Option<f64>,
    /// 연속 곡선 이분법으로 운전점을 함께 구함
    #[arg(long, requires = "static_head")]
    pub refined: bool,
    /// 요구 NPSH 곡선용 회전수 [rpm]
    #[arg(long)]
    pub speed: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// 서비스별 허용 유속 판정
    Velocity {
        /// 유속 [m/s]
        velocity: f64,
        #[arg(long, default_value = "general")]
        service: String,
    },
    /// 유동 영역 판정
    Reynolds { reynolds: f64 },
    /// 압력 등급 선정
    PressureClass {
        pressure: f64,
        #[arg(long, default_value = "bar")]
        pressure_unit: String,
        #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
        temp: f64,
        /// ansi 또는 pn
        #[arg(long, default_value = "ansi")]
        standard: String,
    },
    /// 표준 배관 크기 선정
    PipeSize {
        flow: f64,
        #[arg(long)]
        flow_unit: Option<String>,
        /// 최대 허용 유속 [m/s]
        #[arg(long, default_value_t = 3.0)]
        max_velocity: f64,
    },
    /// 침식 유속 판정
    Erosion {
        /// 유속 [m/s]
        velocity: f64,
        /// 밀도 [kg/m3] (없으면 온도로 조회)
        #[arg(long)]
        density: Option<f64>,
        #[arg(long, default_value_t = 20.0, allow_hyphen_values = true)]
        temp: f64,
    },
    /// 적용 분야별 규격 목록
    Standards {
        #[arg(long, default_value = "general")]
        application: String,
    },
    /// 배관 스케줄 목록
    Schedules,
    /// 설계 안전율/여유 참고표
    SafetyFactors,
    /// 배관 재질 카탈로그 조회
    Material {
        /// 재질 코드 또는 이름. 없으면 전체 목록
        code: Option<String>,
    },
}

/// 배관 계산 보고서.
#[derive(Debug, Serialize)]
pub struct PipeReport {
    pub system: SystemResult,
    pub minor_losses: Vec<MinorLossItem>,
    pub hazen_williams: Option<HazenWilliamsComparison>,
    pub velocity: VelocityCheck,
    pub reynolds: ReynoldsCheck,
    pub erosion: ErosionCheck,
}

/// Darcy-Weisbach 마찰 손실과 나란히 보여주는 Hazen-Williams 손실.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HazenWilliamsComparison {
    pub material: &'static str,
    pub c_factor: f64,
    pub head_loss_m: f64,
    /// Hazen-Williams − Darcy-Weisbach 마찰 손실 [m]
    pub difference_m: f64,
}

/// 상사법칙 환산값.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffinityScaling {
    pub speed_rpm: f64,
    pub flow_m3_per_s: f64,
    pub head_m: f64,
    pub shaft_power_kw: f64,
}

#[derive(Debug, Serialize)]
pub struct PumpReport {
    pub result: PumpResult,
    pub operating_range: String,
    pub affinity: Option<AffinityScaling>,
}

#[derive(Debug, Serialize)]
pub struct CurveReport {
    pub bep: BepPoint,
    pub bep_power_w: f64,
    pub samples: Vec<CurveSample>,
    pub npsh_required_m: Option<Vec<f64>>,
    pub operating_point: Option<OperatingPointSearch>,
    pub refined_requested: bool,
    pub refined_point: Option<OperatingPoint>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckReport {
    Velocity(VelocityCheck),
    Reynolds(ReynoldsCheck),
    PressureClass(PressureClassSelection),
    PipeSize(PipeSizeSelection),
    Erosion(ErosionCheck),
    Standards {
        application: Application,
        standards: &'static [&'static str],
    },
    Schedules(&'static [PipeSchedule]),
    SafetyFactors(&'static [SafetyFactor]),
    Materials(Vec<&'static PipeMaterialData>),
}

/// 설정을 읽고 명령을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;
    match &cli.command {
        Command::Properties { temp } => {
            emit(cli.json, &properties_report(*temp), ui_cli::print_properties)
        }
        Command::Pipe(args) => emit(cli.json, &pipe_report(args, &cfg)?, ui_cli::print_pipe_report),
        Command::Pump(args) => emit(cli.json, &pump_report(args, &cfg)?, ui_cli::print_pump_report),
        Command::Curve(args) => {
            emit(cli.json, &curve_report(args, &cfg)?, ui_cli::print_curve_report)
        }
        Command::Check(check) => {
            emit(cli.json, &check_report(check, &cfg)?, ui_cli::print_check_report)
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, print: fn(&T)) -> Result<(), AppError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

fn flow_input(value: f64, unit: Option<&str>, cfg: &Config) -> Result<f64, ConversionError> {
    match unit {
        Some(u) => conversion::flow_si(value, u),
        None => Ok(flow_to_si(value, cfg.units.flow)),
    }
}

fn pressure_input(value: f64, unit: Option<&str>, cfg: &Config) -> Result<f64, ConversionError> {
    match unit {
        Some(u) => conversion::pressure_si(value, u),
        None => Ok(pressure_to_pa(value, cfg.units.pressure)),
    }
}

fn length_input(value: f64, unit: Option<&str>, cfg: &Config) -> Result<f64, ConversionError> {
    match unit {
        Some(u) => conversion::length_si(value, u),
        None => Ok(length_to_si(value, cfg.units.length)),
    }
}

fn parse_service(code: &str) -> Result<ServiceType, AppError> {
    ServiceType::from_code(code).ok_or_else(|| AppError::UnknownCode(code.to_string()))
}

/// `code[:qty]` 형식의 피팅 지정을 해석한다.
fn parse_fitting(spec: &str) -> Result<(&'static FittingData, u32), AppError> {
    let (code, qty) = match spec.split_once(':') {
        Some((code, qty)) => {
            let qty = qty
                .trim()
                .parse::<u32>()
                .map_err(|_| AppError::UnknownCode(spec.to_string()))?;
            (code, qty)
        }
        None => (spec, 1),
    };
    let fitting = find_fitting(code.trim()).ok_or_else(|| AppError::UnknownCode(code.to_string()))?;
    Ok((fitting, qty))
}

/// 물성 조회. 범위 밖 온도는 클램프되고 안내 문구가 붙는다.
pub fn properties_report(temp_c: f64) -> FluidProperties {
    water_properties(temp_c)
}

pub fn pipe_report(args: &PipeArgs, cfg: &Config) -> Result<PipeReport, AppError> {
    let flow = flow_input(args.flow, args.flow_unit.as_deref(), cfg)?;
    let diameter = conversion::length_si(args.diameter, &args.diameter_unit)?;
    let length = length_input(args.length, args.length_unit.as_deref(), cfg)?;
    let service = parse_service(&args.service)?;

    let pipe = match (&args.material, args.roughness_mm) {
        (Some(material), _) => PipeSpec::from_material(diameter, length, material)?,
        (None, Some(roughness_mm)) => PipeSpec::new(diameter, length, roughness_mm / 1000.0),
        (None, None) => return Err(CalcError::InvalidInput("거칠기 또는 재질이 필요합니다.").into()),
    };

    let fittings = args
        .fittings
        .iter()
        .map(|f| parse_fitting(f.as_str()))
        .collect::<Result<Vec<_>, _>>()?;
    let mut fittings_k = args.k.clone();
    fittings_k.extend(expand_fittings(&fittings));

    let input = SystemInput {
        flow_m3_per_s: flow,
        pipe,
        fittings_k,
        temperature_c: args.temp,
        elevation_change_m: args.elevation,
    };
    let system = calculate_system(&input, &cfg.solver)?;

    let hazen_williams = match &args.hazen_williams {
        Some(code) => {
            let data =
                find_hazen_williams(code).ok_or_else(|| AppError::UnknownCode(code.clone()))?;
            let head_loss_m = head_loss_hazen_williams(
                system.flow_m3_per_s,
                input.pipe.inner_diameter_m,
                input.pipe.length_m,
                data.c,
            );
            Some(HazenWilliamsComparison {
                material: data.name,
                c_factor: data.c,
                head_loss_m,
                difference_m: head_loss_m - system.head_loss_friction_m,
            })
        }
        None => None,
    };

    Ok(PipeReport {
        hazen_williams,
        minor_losses: minor_loss_breakdown(&fittings, system.velocity_m_per_s),
        velocity: check_velocity(system.velocity_m_per_s, service),
        reynolds: check_reynolds(system.reynolds),
        erosion: erosion_velocity_check(system.velocity_m_per_s, system.density_kg_per_m3)?,
        system,
    })
}

pub fn pump_report(args: &PumpArgs, cfg: &Config) -> Result<PumpReport, AppError> {
    let pressure_unit = args.pressure_unit.as_deref();
    let input = PumpInput {
        flow_m3_per_s: flow_input(args.flow, args.flow_unit.as_deref(), cfg)?,
        total_head_m: args.head,
        suction: SuctionSpec {
            pressure_suction_pa: pressure_input(args.suction_pressure, pressure_unit, cfg)?,
            vapor_pressure_pa: pressure_input(args.vapor_pressure, pressure_unit, cfg)?,
            velocity_suction_m_per_s: args.suction_velocity,
            elevation_m: args.suction_elevation,
        },
        pump: PumpSpec {
            speed_rpm: args.speed,
            efficiency: args.efficiency,
        },
        density_kg_per_m3: args.temp.map_or(DEFAULT_DENSITY_KG_PER_M3, water_density),
    };
    let result = analyze_pump(&input, &cfg.pump)?;

    let affinity = args.new_speed.map(|n2| AffinityScaling {
        speed_rpm: n2,
        flow_m3_per_s: affinity_flow(input.flow_m3_per_s, args.speed, n2),
        head_m: affinity_head(input.total_head_m, args.speed, n2),
        shaft_power_kw: affinity_power(result.shaft_power_kw, args.speed, n2),
    });

    Ok(PumpReport {
        operating_range: result.operating_range(),
        result,
        affinity,
    })
}

pub fn curve_report(args: &CurveArgs, cfg: &Config) -> Result<CurveReport, AppError> {
    let bep = BepPoint {
        flow_m3_per_s: flow_input(args.bep_flow, args.flow_unit.as_deref(), cfg)?,
        head_m: args.bep_head,
        power_w: args.bep_power,
        efficiency: args.bep_efficiency,
    };
    let points = args.points.unwrap_or(cfg.curve.num_points);

    let system = match (args.static_head, args.k_coefficient) {
        (Some(static_head_m), Some(k_coefficient)) => Some(SystemCurve {
            static_head_m,
            k_coefficient,
        }),
        _ => None,
    };

    let (curve, search) = match &system {
        Some(system) => {
            let (curve, search) = find_operating_point(&bep, points, system, &cfg.curve)?;
            (curve, Some(search))
        }
        None => (generate_pump_curve(&bep, points, &cfg.curve)?, None),
    };

    let refined_point = match (&system, args.refined) {
        (Some(system), true) => operating_point_refined(&curve, system)?,
        _ => None,
    };
    let npsh_required_m = args
        .speed
        .map(|speed| npsh_required_curve(curve.flow(), speed, cfg.pump.suction_specific_speed));

    Ok(CurveReport {
        bep_power_w: bep.power_or_derived(cfg.curve.reference_density_kg_per_m3),
        bep,
        samples: curve.samples().collect(),
        npsh_required_m,
        operating_point: search,
        refined_requested: args.refined,
        refined_point,
    })
}

pub fn check_report(check: &CheckCommand, cfg: &Config) -> Result<CheckReport, AppError> {
    let report = match check {
        CheckCommand::Velocity { velocity, service } => {
            CheckReport::Velocity(check_velocity(*velocity, parse_service(service)?))
        }
        CheckCommand::Reynolds { reynolds } => CheckReport::Reynolds(check_reynolds(*reynolds)),
        CheckCommand::PressureClass {
            pressure,
            pressure_unit,
            temp,
            standard,
        } => {
            let standard = PressureStandard::from_code(standard)
                .ok_or_else(|| AppError::UnknownCode(standard.clone()))?;
            let pressure_bar = pa_to_bar(conversion::pressure_si(*pressure, pressure_unit)?);
            CheckReport::PressureClass(select_pressure_class(pressure_bar, *temp, standard)?)
        }
        CheckCommand::PipeSize {
            flow,
            flow_unit,
            max_velocity,
        } => {
            let flow = flow_input(*flow, flow_unit.as_deref(), cfg)?;
            CheckReport::PipeSize(select_pipe_size(flow, *max_velocity)?)
        }
        CheckCommand::Erosion {
            velocity,
            density,
            temp,
        } => {
            let density = density.unwrap_or_else(|| water_density(*temp));
            CheckReport::Erosion(erosion_velocity_check(*velocity, density)?)
        }
        CheckCommand::Standards { application } => {
            let application = Application::from_code(application);
            CheckReport::Standards {
                application,
                standards: applicable_standards(application),
            }
        }
        CheckCommand::Schedules => CheckReport::Schedules(PIPE_SCHEDULES),
        CheckCommand::SafetyFactors => CheckReport::SafetyFactors(SAFETY_FACTORS),
        CheckCommand::Material { code } => match code {
            Some(code) => {
                let material =
                    find_pipe_material(code).ok_or_else(|| AppError::UnknownCode(code.clone()))?;
                CheckReport::Materials(vec![material])
            }
            None => CheckReport::Materials(pipe_materials().iter().collect()),
        },
    };
    Ok(report)
}
