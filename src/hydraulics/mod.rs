//! 단일 배관 구간의 정상상태 수력 계산 모듈.
//! 유속/레이놀즈수, 마찰계수 영역 선택, 마찰·국부 손실, 압력-수두 환산으로 구성한다.

pub mod friction;
pub mod head_loss;
pub mod materials;
pub mod system;

/// 중력가속도 [m/s2]
pub const GRAVITY: f64 = 9.81;

pub use friction::*;
pub use head_loss::*;
pub use system::*;
