//! 펌프 상사 법칙. 회전수 비 n2/n1 에 대해 유량 1승, 양정 2승, 동력 3승으로 환산한다.

/// Q2 = Q1 · (n2/n1)
pub fn affinity_flow(flow1: f64, speed1_rpm: f64, speed2_rpm: f64) -> f64 {
    flow1 * (speed2_rpm / speed1_rpm)
}

/// H2 = H1 · (n2/n1)²
pub fn affinity_head(head1: f64, speed1_rpm: f64, speed2_rpm: f64) -> f64 {
    head1 * (speed2_rpm / speed1_rpm).powi(2)
}

/// P2 = P1 · (n2/n1)³
pub fn affinity_power(power1: f64, speed1_rpm: f64, speed2_rpm: f64) -> f64 {
    power1 * (speed2_rpm / speed1_rpm).powi(3)
}
