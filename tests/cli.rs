use clap::Parser;
use pipe_pump_toolbox::{
    app::{
        check_report, curve_report, pipe_report, properties_report, pump_report, AppError,
        CheckCommand, CheckReport, Cli, Command,
    },
    config::Config,
    pump::CavitationStatus,
    standards::SelectionStatus,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["pipe_pump_toolbox"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn pipe_command_converts_units_and_expands_fittings() {
    let cli = parse(&[
        "pipe",
        "--flow",
        "36",
        "--flow-unit",
        "m3/h",
        "--diameter",
        "100",
        "--length",
        "100",
        "--roughness-mm",
        "0.05",
        "--k",
        "0.5",
        "--fitting",
        "elbow-90:2",
        "--k",
        "1.0",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    let report = pipe_report(args, &Config::default()).unwrap();
    assert_close(report.system.flow_m3_per_s, 0.01, 1e-12);
    assert_close(report.system.velocity_m_per_s, 1.2732, 1e-4);
    // K 0.5 + 1.0 + 2 × 0.9 = 3.3
    assert_close(
        report.system.head_loss_minor_m,
        3.3 * 1.2732_f64.powi(2) / (2.0 * 9.81),
        1e-3,
    );
    assert_eq!(report.minor_losses.len(), 1);
    assert_eq!(report.minor_losses[0].quantity, 2);
}

#[test]
fn pipe_command_requires_roughness_or_material() {
    let result = Cli::try_parse_from([
        "pipe_pump_toolbox",
        "pipe",
        "--flow",
        "36",
        "--diameter",
        "100",
        "--length",
        "10",
    ]);
    assert!(result.is_err());
}

#[test]
fn unknown_fitting_is_reported() {
    let cli = parse(&[
        "pipe", "--flow", "36", "--diameter", "100", "--length", "10", "--material", "pvc",
        "--fitting", "flux-capacitor",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    assert!(matches!(
        pipe_report(args, &Config::default()),
        Err(AppError::UnknownCode(_))
    ));
}

#[test]
fn unknown_flow_unit_is_a_conversion_error() {
    let cli = parse(&[
        "pipe", "--flow", "36", "--flow-unit", "bbl/d", "--diameter", "100", "--length", "10",
        "--material", "pvc",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    assert!(matches!(
        pipe_report(args, &Config::default()),
        Err(AppError::Conversion(_))
    ));
}

#[test]
fn pump_command_with_affinity() {
    let cli = parse(&[
        "pump",
        "--flow",
        "36",
        "--head",
        "30",
        "--suction-pressure",
        "101.325",
        "--vapor-pressure",
        "2.339",
        "--pressure-unit",
        "kPa",
        "--suction-velocity",
        "1.5",
        "--suction-elevation",
        "-1",
        "--new-speed",
        "3500",
    ]);
    let Command::Pump(args) = &cli.command else {
        panic!("expected pump command");
    };
    let report = pump_report(args, &Config::default()).unwrap();
    assert_eq!(report.result.cavitation.status, CavitationStatus::Safe);
    let affinity = report.affinity.unwrap();
    assert_close(affinity.flow_m3_per_s, 0.02, 1e-12);
    assert_close(affinity.head_m, 120.0, 1e-9);
    assert_close(affinity.shaft_power_kw, report.result.shaft_power_kw * 8.0, 1e-9);
}

#[test]
fn curve_command_with_operating_point() {
    let cli = parse(&[
        "curve",
        "--bep-flow",
        "0.01",
        "--flow-unit",
        "m3/s",
        "--bep-head",
        "30",
        "--points",
        "31",
        "--static-head",
        "10",
        "--k-coefficient",
        "200000",
        "--refined",
        "--speed",
        "1750",
    ]);
    let Command::Curve(args) = &cli.command else {
        panic!("expected curve command");
    };
    let report = curve_report(args, &Config::default()).unwrap();
    assert_eq!(report.samples.len(), 31);
    assert_eq!(report.npsh_required_m.as_ref().map(Vec::len), Some(31));
    let search = report.operating_point.unwrap();
    assert_eq!(search.point.sample_index, Some(20));
    let refined = report.refined_point.unwrap();
    assert_close(refined.flow_m3_per_s, 0.01, 1e-9);
}

#[test]
fn check_pressure_class_converts_to_bar() {
    let cli = parse(&["check", "pressure-class", "1000", "--pressure-unit", "kPa"]);
    let Command::Check(check) = &cli.command else {
        panic!("expected check command");
    };
    let CheckReport::PressureClass(sel) = check_report(check, &Config::default()).unwrap() else {
        panic!("expected pressure class report");
    };
    assert_close(sel.operating_pressure_bar, 10.0, 1e-12);
    assert_eq!(sel.status, SelectionStatus::Ok);
}

#[test]
fn check_velocity_rejects_unknown_service() {
    let check = CheckCommand::Velocity {
        velocity: 1.0,
        service: "lava".to_string(),
    };
    assert!(matches!(
        check_report(&check, &Config::default()),
        Err(AppError::UnknownCode(_))
    ));
}

#[test]
fn check_material_lists_catalogue() {
    let check = CheckCommand::Material { code: None };
    let CheckReport::Materials(all) = check_report(&check, &Config::default()).unwrap() else {
        panic!("expected material report");
    };
    assert_eq!(all.len(), 7);
}

#[test]
fn reports_serialize_to_json() {
    let check = CheckCommand::PipeSize {
        flow: 36.0,
        flow_unit: None,
        max_velocity: 3.0,
    };
    let report = check_report(&check, &Config::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["recommended_dn"], 80);
    assert_eq!(json["status"], "Ok");
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli = parse(&["properties", "--temp", "25", "--json", "--config", "custom.toml"]);
    assert!(cli.json);
    assert_eq!(cli.config.to_str(), Some("custom.toml"));
}

#[test]
fn negative_temperature_reaches_clamp_advisory() {
    let cli = parse(&["properties", "--temp", "-5"]);
    let Command::Properties { temp } = cli.command else {
        panic!("expected properties command");
    };
    assert_eq!(temp, -5.0);
    let props = properties_report(temp);
    assert!(props.clamped);
    assert!(props.advisory().is_some());

    let cli = parse(&[
        "pipe", "--flow", "36", "--diameter", "100", "--length", "10", "--material", "pvc",
        "--temp", "-5",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    let report = pipe_report(args, &Config::default()).unwrap();
    assert_eq!(report.system.advisories.len(), 1);
    assert_eq!(report.system.density_kg_per_m3, 999.8);
}

#[test]
fn negative_temperature_parses_for_pump_and_erosion() {
    let cli = parse(&[
        "pump",
        "--flow",
        "36",
        "--head",
        "30",
        "--suction-pressure",
        "101.325",
        "--vapor-pressure",
        "0.6",
        "--pressure-unit",
        "kPa",
        "--suction-velocity",
        "1.0",
        "--suction-elevation",
        "1",
        "--temp",
        "-2",
    ]);
    let Command::Pump(args) = &cli.command else {
        panic!("expected pump command");
    };
    assert_eq!(args.temp, Some(-2.0));

    let cli = parse(&["check", "erosion", "2.0", "--temp", "-1"]);
    let Command::Check(CheckCommand::Erosion { temp, .. }) = cli.command else {
        panic!("expected erosion check");
    };
    assert_eq!(temp, -1.0);
}

#[test]
fn pipe_command_compares_hazen_williams() {
    let cli = parse(&[
        "pipe",
        "--flow",
        "36",
        "--flow-unit",
        "m3/h",
        "--diameter",
        "100",
        "--length",
        "100",
        "--length-unit",
        "m",
        "--material",
        "pvc",
        "--hazen-williams",
        "pvc-new",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    let report = pipe_report(args, &Config::default()).unwrap();
    let hw = report.hazen_williams.unwrap();
    assert_eq!(hw.c_factor, 150.0);
    assert_close(hw.head_loss_m, 1.459, 0.005);
    assert_close(
        hw.difference_m,
        hw.head_loss_m - report.system.head_loss_friction_m,
        1e-12,
    );
}

#[test]
fn unknown_hazen_williams_code_is_reported() {
    let cli = parse(&[
        "pipe", "--flow", "36", "--diameter", "100", "--length", "10", "--material", "pvc",
        "--hazen-williams", "bamboo",
    ]);
    let Command::Pipe(args) = &cli.command else {
        panic!("expected pipe command");
    };
    assert!(matches!(
        pipe_report(args, &Config::default()),
        Err(AppError::UnknownCode(_))
    ));
}

#[test]
fn check_reference_tables() {
    let cli = parse(&["check", "schedules"]);
    let Command::Check(check) = &cli.command else {
        panic!("expected check command");
    };
    let CheckReport::Schedules(schedules) = check_report(check, &Config::default()).unwrap()
    else {
        panic!("expected schedule report");
    };
    assert_eq!(schedules.len(), 12);

    let report = check_report(&CheckCommand::SafetyFactors, &Config::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(6));
    assert_eq!(json[0]["value"], 1.5);
}
