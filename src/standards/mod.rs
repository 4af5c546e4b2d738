//! 계산 결과를 규격 기준 판정으로 바꾸는 상태 없는 분류기 모음.
//! 유속 범위, 유동 영역, 압력 등급, 표준 배관 크기, 침식 유속, 적용 규격과 참고표로 구성한다.
//!
//! "불합격" 판정도 정상 결과다. 오류는 잘못된 입력에만 쓴다.

pub mod applicable;
pub mod erosion;
pub mod materials;
pub mod pipe_size;
pub mod pressure_class;
pub mod reynolds;
pub mod safety_factors;
pub mod schedules;
pub mod velocity;

use serde::Serialize;

pub use applicable::{applicable_standards, Application};
pub use erosion::{erosion_velocity, erosion_velocity_check, ErosionCheck, ErosionStatus};
pub use pipe_size::{select_pipe_size, PipeSizeSelection, STANDARD_PIPE_SIZES_MM};
pub use pressure_class::{select_pressure_class, PressureClassSelection, PressureStandard};
pub use reynolds::{check_reynolds, ReynoldsCheck};
pub use safety_factors::{find_safety_factor, SafetyFactor, SAFETY_FACTORS};
pub use schedules::{find_schedule, PipeSchedule, PIPE_SCHEDULES};
pub use velocity::{check_velocity, ServiceType, VelocityCheck, VelocityLimits, VelocityStatus};

/// 테이블 선정 결과 상태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelectionStatus {
    /// 조건을 만족하는 항목을 찾음
    Ok,
    /// 테이블에 조건을 만족하는 항목이 없음
    NoSolution,
}
