//! 대기압 기준 물의 온도별 밀도/동점도 테이블과 선형 보간.
//! 값은 ISO 물성표의 대표값이며 0~100°C 사이의 비균등 간격 기준점을 사용한다.

use serde::Serialize;
use tracing::warn;

/// 온도 기준점 하나.
#[derive(Debug, Clone, Copy)]
pub struct TempPoint {
    pub temp_c: f64,
    pub value: f64,
}

impl TempPoint {
    pub const fn new(temp_c: f64, value: f64) -> Self {
        Self { temp_c, value }
    }
}

/// 보간 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableValue {
    pub value: f64,
    /// 값을 가져온 온도. 클램프되면 가장자리 기준점 온도가 된다.
    pub source_temp_c: f64,
    /// true면 테이블 범위 밖이라 가장자리 값으로 클램프됨을 의미한다.
    pub clamped: bool,
}

/// 밀도 [kg/m3]
pub const WATER_DENSITY: &[TempPoint] = &[
    tp(0.0, 999.8),
    tp(5.0, 1000.0),
    tp(10.0, 999.7),
    tp(15.0, 999.1),
    tp(20.0, 998.2),
    tp(25.0, 997.0),
    tp(30.0, 995.7),
    tp(40.0, 992.2),
    tp(50.0, 988.0),
    tp(60.0, 983.2),
    tp(70.0, 977.8),
    tp(80.0, 971.8),
    tp(90.0, 965.3),
    tp(100.0, 958.4),
];

/// 동점도 [m2/s]
pub const WATER_KINEMATIC_VISCOSITY: &[TempPoint] = &[
    tp(0.0, 1.787e-6),
    tp(5.0, 1.519e-6),
    tp(10.0, 1.307e-6),
    tp(15.0, 1.139e-6),
    tp(20.0, 1.004e-6),
    tp(25.0, 0.893e-6),
    tp(30.0, 0.801e-6),
    tp(40.0, 0.658e-6),
    tp(50.0, 0.553e-6),
    tp(60.0, 0.475e-6),
    tp(70.0, 0.413e-6),
    tp(80.0, 0.364e-6),
    tp(90.0, 0.326e-6),
    tp(100.0, 0.294e-6),
];

const fn tp(temp_c: f64, value: f64) -> TempPoint {
    TempPoint::new(temp_c, value)
}

/// 온도 오름차순 테이블에서 선형 보간한다. 범위 밖이면 가장자리 값으로 클램프한다.
///
/// 빈 테이블이면 `None`.
pub fn interpolate(points: &[TempPoint], temp_c: f64) -> Option<TableValue> {
    let first = *points.first()?;
    let last = *points.last()?;
    if temp_c < first.temp_c || temp_c.is_nan() {
        return Some(TableValue {
            value: first.value,
            source_temp_c: first.temp_c,
            clamped: true,
        });
    }
    if temp_c > last.temp_c {
        return Some(TableValue {
            value: last.value,
            source_temp_c: last.temp_c,
            clamped: true,
        });
    }
    if let Some(exact) = points.iter().find(|p| p.temp_c == temp_c) {
        return Some(TableValue {
            value: exact.value,
            source_temp_c: exact.temp_c,
            clamped: false,
        });
    }
    for win in points.windows(2) {
        let (a, b) = (win[0], win[1]);
        if temp_c > a.temp_c && temp_c < b.temp_c {
            let frac = (temp_c - a.temp_c) / (b.temp_c - a.temp_c);
            return Some(TableValue {
                value: a.value + frac * (b.value - a.value),
                source_temp_c: temp_c,
                clamped: false,
            });
        }
    }
    // 정렬된 테이블에서는 도달하지 않는다.
    None
}

/// 물성 조회 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluidProperties {
    /// 요청 온도 [°C]
    pub temperature_c: f64,
    pub density_kg_per_m3: f64,
    pub kinematic_viscosity_m2_per_s: f64,
    /// 동점도 × 밀도 [Pa·s]
    pub dynamic_viscosity_pa_s: f64,
    /// 0~100°C 범위를 벗어나 가장자리 값을 사용했는지 여부
    pub clamped: bool,
}

impl FluidProperties {
    /// 클램프된 경우 사용자에게 보여줄 안내 문구.
    pub fn advisory(&self) -> Option<String> {
        self.clamped.then(|| {
            format!(
                "온도 {:.1}°C 가 물성표 범위(0~100°C)를 벗어나 가장자리 값을 사용했습니다.",
                self.temperature_c
            )
        })
    }
}

/// 온도에 해당하는 물의 밀도와 동점도를 반환한다.
///
/// 범위 밖 온도는 오류가 아니다. 가장자리 값으로 클램프하고 경고 로그를 남긴다.
pub fn water_properties(temperature_c: f64) -> FluidProperties {
    let density = lookup(WATER_DENSITY, temperature_c);
    let viscosity = lookup(WATER_KINEMATIC_VISCOSITY, temperature_c);
    let clamped = density.clamped || viscosity.clamped;
    if clamped {
        warn!(
            requested_c = temperature_c,
            used_c = density.source_temp_c,
            "temperature outside water property table; clamped to nearest anchor"
        );
    }
    FluidProperties {
        temperature_c,
        density_kg_per_m3: density.value,
        kinematic_viscosity_m2_per_s: viscosity.value,
        dynamic_viscosity_pa_s: density.value * viscosity.value,
        clamped,
    }
}

/// 물 밀도 [kg/m3]
pub fn water_density(temperature_c: f64) -> f64 {
    water_properties(temperature_c).density_kg_per_m3
}

/// 물 동점도 [m2/s]
pub fn water_kinematic_viscosity(temperature_c: f64) -> f64 {
    water_properties(temperature_c).kinematic_viscosity_m2_per_s
}

fn lookup(points: &'static [TempPoint], temp_c: f64) -> TableValue {
    // 상수 테이블은 비어 있지 않다.
    interpolate(points, temp_c).unwrap_or(TableValue {
        value: f64::NAN,
        source_temp_c: temp_c,
        clamped: true,
    })
}
