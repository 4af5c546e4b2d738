//! 원심 펌프 성능 계산 모듈 모음.
//! 동력, NPSH/공동현상, 비속도, 상사 법칙, 성능곡선과 운전점으로 구성한다.

pub mod affinity;
pub mod analysis;
pub mod curve;
pub mod npsh;
pub mod operating_point;
pub mod power;
pub mod specific_speed;

pub use affinity::*;
pub use analysis::*;
pub use curve::*;
pub use npsh::*;
pub use operating_point::*;
pub use power::*;
pub use specific_speed::*;
