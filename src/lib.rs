//! 배관 수력 계산과 펌프 선정 엔진을 라이브러리로 분리하여 CLI 뿐 아니라 다른 보고서 계층에서도 쓸 수 있게 한다.
//!
//! 엔진 함수는 모두 순수 함수이며 SI 단위(m, s, kg, Pa, W)만 받는다.

pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod fluid;
pub mod hydraulics;
pub mod pump;
pub mod standards;
pub mod ui_cli;
pub mod units;

pub use error::{CalcError, CalcResult};
