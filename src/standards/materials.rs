//! 배관 재질 카탈로그 (ASME/ISO 참고값).
//! 값은 참고용이며 설계 시 최신 코드로 검증해야 한다.
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PipeMaterialData {
    pub code: &'static str,
    pub name: &'static str,
    /// 규격 표기
    pub specification: &'static str,
    /// 최고 사용 온도 [°C]
    pub max_temp_c: f64,
    /// 인장 강도 [MPa]
    pub tensile_strength_mpa: f64,
    pub applications: &'static str,
    /// 부식 여유 [mm]
    pub corrosion_allowance_mm: f64,
}

impl PipeMaterialData {
    /// 운전 온도가 재질 최고 사용 온도 이하인지.
    pub fn allows_temperature(&self, temp_c: f64) -> bool {
        temp_c <= self.max_temp_c
    }
}

pub fn pipe_materials() -> &'static [PipeMaterialData] {
    PIPE_MATERIALS
}

pub fn find_pipe_material(code: &str) -> Option<&'static PipeMaterialData> {
    PIPE_MATERIALS
        .iter()
        .find(|m| m.code.eq_ignore_ascii_case(code) || m.name.eq_ignore_ascii_case(code))
}

const PIPE_MATERIALS: &[PipeMaterialData] = &[
    PipeMaterialData {
        code: "CS",
        name: "Carbon steel",
        specification: "ASTM A106 Gr.B",
        max_temp_c: 400.0,
        tensile_strength_mpa: 415.0,
        applications: "고온 일반 용도",
        corrosion_allowance_mm: 3.0,
    },
    PipeMaterialData {
        code: "SS304",
        name: "Stainless steel 304",
        specification: "ASTM A312 TP304",
        max_temp_c: 650.0,
        tensile_strength_mpa: 515.0,
        applications: "부식성 유체, 식품",
        corrosion_allowance_mm: 0.0,
    },
    PipeMaterialData {
        code: "SS316",
        name: "Stainless steel 316",
        specification: "ASTM A312 TP316",
        max_temp_c: 650.0,
        tensile_strength_mpa: 515.0,
        applications: "고부식, 해양",
        corrosion_allowance_mm: 0.0,
    },
    PipeMaterialData {
        code: "PVC",
        name: "PVC",
        specification: "ASTM D1785 SCH 40",
        max_temp_c: 60.0,
        tensile_strength_mpa: 52.0,
        applications: "냉수, 배수",
        corrosion_allowance_mm: 0.0,
    },
    PipeMaterialData {
        code: "HDPE",
        name: "HDPE",
        specification: "ASTM D3350 PE100",
        max_temp_c: 60.0,
        tensile_strength_mpa: 24.0,
        applications: "물, 가스, 매설",
        corrosion_allowance_mm: 0.0,
    },
    PipeMaterialData {
        code: "CU-K",
        name: "Copper type K",
        specification: "ASTM B88",
        max_temp_c: 200.0,
        tensile_strength_mpa: 210.0,
        applications: "음용수, HVAC",
        corrosion_allowance_mm: 0.0,
    },
    PipeMaterialData {
        code: "DI",
        name: "Ductile iron",
        specification: "ISO 2531",
        max_temp_c: 50.0,
        tensile_strength_mpa: 420.0,
        applications: "물, 매설",
        corrosion_allowance_mm: 2.0,
    },
];
