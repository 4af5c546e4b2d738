use pipe_pump_toolbox::{
    hydraulics::FlowRegime,
    pump::PumpSettings,
    standards::{
        applicable_standards, check_reynolds, check_velocity, erosion_velocity,
        erosion_velocity_check, find_safety_factor, find_schedule, materials,
        pressure_class::DESIGN_PRESSURE_FACTOR, select_pipe_size, select_pressure_class,
        Application, ErosionStatus, PressureStandard, SelectionStatus, ServiceType,
        VelocityStatus, PIPE_SCHEDULES, SAFETY_FACTORS, STANDARD_PIPE_SIZES_MM,
    },
};
use proptest::prelude::*;
use std::f64::consts::PI;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

#[test]
fn velocity_near_recommended_is_optimal() {
    let check = check_velocity(2.0, ServiceType::GeneralPiping);
    assert_eq!(check.status, VelocityStatus::Optimal);
    assert!(check.in_range);
    assert!(check.warnings.is_empty());
}

#[test]
fn velocity_limits_are_inclusive() {
    let check = check_velocity(3.0, ServiceType::GeneralPiping);
    assert!(check.in_range);
    assert_eq!(check.status, VelocityStatus::Acceptable);
    let check = check_velocity(0.6, ServiceType::PumpSuction);
    assert!(check.in_range);
}

#[test]
fn low_and_high_velocity_warnings() {
    let low = check_velocity(0.3, ServiceType::GeneralPiping);
    assert_eq!(low.status, VelocityStatus::Warning);
    assert_eq!(low.warnings.len(), 2);

    let high = check_velocity(4.0, ServiceType::PumpSuction);
    assert_eq!(high.status, VelocityStatus::Warning);
    assert!(!high.in_range);
    assert_eq!(high.limits.max_m_per_s, 1.5);
}

#[test]
fn service_codes_round_trip() {
    for service in ServiceType::ALL {
        assert_eq!(ServiceType::from_code(service.code()), Some(service));
    }
    assert_eq!(ServiceType::from_code("Pump-Discharge"), Some(ServiceType::PumpDischarge));
    assert_eq!(ServiceType::from_code("slurry"), None);
    assert_eq!(ServiceType::default(), ServiceType::GeneralPiping);
}

#[test]
fn reynolds_check_uses_hydraulic_boundaries() {
    assert_eq!(check_reynolds(2299.0).regime, FlowRegime::Laminar);
    assert_eq!(check_reynolds(2300.0).regime, FlowRegime::Transitional);
    let turbulent = check_reynolds(4000.0);
    assert_eq!(turbulent.regime, FlowRegime::Turbulent);
    assert!(turbulent.concerns.is_empty());
    assert!(!check_reynolds(3000.0).concerns.is_empty());
}

#[test]
fn ansi_class_selection() {
    let sel = select_pressure_class(10.0, 100.0, PressureStandard::Ansi).unwrap();
    assert_eq!(sel.status, SelectionStatus::Ok);
    assert_close(sel.design_pressure_bar, 15.0, 1e-12);
    assert_eq!(sel.recommended_class, Some("150"));
    assert_eq!(sel.suitable_classes.len(), 6);

    // 온도 때문에 150 탈락
    let hot = select_pressure_class(10.0, 300.0, PressureStandard::Ansi).unwrap();
    assert_eq!(hot.recommended_class, Some("300"));
}

#[test]
fn pn_class_selection_ignores_temperature() {
    let sel = select_pressure_class(10.0, 500.0, PressureStandard::Pn).unwrap();
    assert_eq!(sel.recommended_class, Some("PN16"));
    assert_eq!(sel.suitable_classes, vec!["PN16", "PN25", "PN40", "PN63", "PN100"]);
}

#[test]
fn pressure_class_without_solution_is_not_an_error() {
    let sel = select_pressure_class(400.0, 20.0, PressureStandard::Ansi).unwrap();
    assert_eq!(sel.status, SelectionStatus::NoSolution);
    assert_eq!(sel.recommended_class, None);
    assert!(sel.suitable_classes.is_empty());
    assert!(select_pressure_class(-1.0, 20.0, PressureStandard::Pn).is_err());
    assert_eq!(PressureStandard::from_code("ASME"), Some(PressureStandard::Ansi));
}

#[test]
fn pipe_size_selection() {
    // 36 m3/h, 3 m/s → 필요 내경 65.1 mm → DN80
    let sel = select_pipe_size(0.01, 3.0).unwrap();
    assert_eq!(sel.status, SelectionStatus::Ok);
    assert_close(sel.required_diameter_mm, 65.147, 1e-3);
    assert_eq!(sel.recommended_dn, Some(80));
    assert_eq!(sel.candidate_sizes, vec![80, 100, 125]);
    let v = sel.actual_velocity_m_per_s.unwrap();
    assert!(v <= 3.0);
    assert_close(v, 0.01 / (PI * 0.04 * 0.04), 1e-9);
}

#[test]
fn pipe_size_beyond_table_reports_no_solution() {
    let sel = select_pipe_size(50.0, 1.0).unwrap();
    assert_eq!(sel.status, SelectionStatus::NoSolution);
    assert_eq!(sel.recommended_dn, None);
    assert!(sel.candidate_sizes.is_empty());
    assert!(select_pipe_size(0.0, 1.0).is_err());
    assert!(select_pipe_size(0.01, 0.0).is_err());
}

#[test]
fn erosion_tiers() {
    let rho = 998.2;
    let ve = erosion_velocity(rho, 100.0);
    assert_close(ve, 3.1651, 1e-4);
    assert_eq!(erosion_velocity_check(0.4 * ve, rho).unwrap().status, ErosionStatus::Safe);
    assert_eq!(
        erosion_velocity_check(0.6 * ve, rho).unwrap().status,
        ErosionStatus::Acceptable
    );
    assert_eq!(erosion_velocity_check(0.9 * ve, rho).unwrap().status, ErosionStatus::Caution);
    assert_eq!(erosion_velocity_check(ve, rho).unwrap().status, ErosionStatus::Danger);
    assert!(erosion_velocity_check(1.0, 0.0).is_err());
}

#[test]
fn pipe_material_catalogue_lookup() {
    let cs = materials::find_pipe_material("cs").unwrap();
    assert_eq!(cs.max_temp_c, 400.0);
    assert_eq!(cs.corrosion_allowance_mm, 3.0);
    assert!(cs.allows_temperature(350.0));
    let by_name = materials::find_pipe_material("ductile IRON").unwrap();
    assert_eq!(by_name.code, "DI");
    assert!(materials::find_pipe_material("wood").is_none());
    assert_eq!(materials::pipe_materials().len(), 7);
}

#[test]
fn unknown_application_falls_back_to_general() {
    assert_eq!(Application::from_code("aerospace"), Application::GeneralIndustrial);
    assert_eq!(
        applicable_standards(Application::from_code("aerospace")),
        applicable_standards(Application::GeneralIndustrial)
    );
    assert!(applicable_standards(Application::OilAndGas)
        .iter()
        .any(|s| s.starts_with("API RP 14E")));
}

#[test]
fn schedule_lookup_accepts_short_forms() {
    assert_eq!(PIPE_SCHEDULES.len(), 12);
    assert_eq!(find_schedule("40").unwrap().name, "SCH 40");
    assert_eq!(find_schedule("sch10s").unwrap().name, "SCH 10S");
    assert_eq!(find_schedule("SCH 160").unwrap().name, "SCH 160");
    assert!(find_schedule("SCH 45").is_none());
}

#[test]
fn safety_factors_agree_with_calculation_defaults() {
    assert_eq!(SAFETY_FACTORS.len(), 6);
    let b31 = find_safety_factor("정압", "asme b31.3").unwrap();
    assert_eq!(b31.value, DESIGN_PRESSURE_FACTOR);

    let pump = PumpSettings::default();
    assert_eq!(
        find_safety_factor("전동기 동력", "관행").unwrap().value,
        pump.motor_safety_factor
    );
    let npsh = find_safety_factor("NPSH", "ANSI/HI 9.6.1").unwrap();
    assert_eq!(npsh.unit, "m");
    assert_eq!(npsh.value, pump.npsh_safety_margin_m);
}

proptest! {
    #[test]
    fn selected_size_is_smallest_that_fits(q in 1e-5_f64..5.0, vmax in 0.3_f64..10.0) {
        let sel = select_pipe_size(q, vmax).unwrap();
        match sel.recommended_dn {
            Some(dn) => {
                let d = f64::from(dn) / 1000.0;
                let v = q / (PI * d * d / 4.0);
                prop_assert!(v <= vmax * (1.0 + 1e-9));
                let idx = STANDARD_PIPE_SIZES_MM.iter().position(|s| *s == dn).unwrap();
                if idx > 0 {
                    let smaller = f64::from(STANDARD_PIPE_SIZES_MM[idx - 1]) / 1000.0;
                    let v_smaller = q / (PI * smaller * smaller / 4.0);
                    prop_assert!(v_smaller > vmax * (1.0 - 1e-9));
                }
            }
            None => {
                prop_assert_eq!(sel.status, SelectionStatus::NoSolution);
                prop_assert!(sel.required_diameter_mm > 1200.0);
            }
        }
    }
}
