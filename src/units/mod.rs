//! 입력 단위 정의 및 변환 모듈 모음. 엔진은 항상 SI 값만 받는다.

pub mod flow;
pub mod length;
pub mod pressure;

pub use flow::{flow_to_si, FlowUnit};
pub use length::{length_to_si, LengthUnit};
pub use pressure::{pa_to_bar, pressure_to_pa, PressureUnit};
