use pipe_pump_toolbox::{
    pump::{
        find_operating_point, generate_pump_curve, operating_point, operating_point_refined,
        BepPoint, CurveSettings, SystemCurve,
    },
    CalcError,
};

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "actual={actual} expected={expected} tol={tol}"
    );
}

fn reference_bep() -> BepPoint {
    BepPoint {
        flow_m3_per_s: 0.01,
        head_m: 30.0,
        power_w: None,
        efficiency: 0.75,
    }
}

/// 0.01 m3/s 에서 30 m 를 지나는 시스템 곡선
fn crossing_system() -> SystemCurve {
    SystemCurve {
        static_head_m: 10.0,
        k_coefficient: 200_000.0,
    }
}

#[test]
fn curve_passes_through_bep() {
    let settings = CurveSettings::default();
    let curve = generate_pump_curve(&reference_bep(), 31, &settings).unwrap();
    assert_close(curve.head_at(0.01), 30.0, 1e-9);
    assert_close(curve.efficiency_at(0.01), 0.75, 1e-12);
    // 31 점이면 20 번째 샘플이 BEP 유량
    let bep_sample = curve.sample(20).unwrap();
    assert_close(bep_sample.flow_m3_per_s, 0.01, 1e-12);
    assert_close(bep_sample.head_m, 30.0, 1e-6);
    assert_close(curve.shutoff_head_m(), 34.5, 1e-9);
}

#[test]
fn arrays_share_length_and_flow_spans_range() {
    let curve = generate_pump_curve(&reference_bep(), 50, &CurveSettings::default()).unwrap();
    assert_eq!(curve.len(), 50);
    assert_eq!(curve.head().len(), 50);
    assert_eq!(curve.power().len(), 50);
    assert_eq!(curve.efficiency().len(), 50);
    assert_eq!(curve.flow()[0], 0.0);
    assert_eq!(curve.max_flow_m3_per_s(), 1.5 * 0.01);
    assert_eq!(curve.samples().count(), 50);
}

#[test]
fn head_is_non_increasing_and_never_negative() {
    let settings = CurveSettings {
        max_flow_ratio: 3.0,
        ..CurveSettings::default()
    };
    let curve = generate_pump_curve(&reference_bep(), 60, &settings).unwrap();
    assert!(curve.head().windows(2).all(|w| w[1] <= w[0]));
    assert!(curve.head().iter().all(|h| *h >= 0.0));
    assert_eq!(*curve.head().last().unwrap(), 0.0);
}

#[test]
fn efficiency_is_clipped() {
    let settings = CurveSettings {
        efficiency_spread: 0.05,
        ..CurveSettings::default()
    };
    let curve = generate_pump_curve(&reference_bep(), 41, &settings).unwrap();
    assert_eq!(curve.efficiency()[0], 0.01);
    assert!(curve
        .efficiency()
        .iter()
        .all(|eta| (0.01..=1.0).contains(eta)));
}

#[test]
fn power_is_hydraulic_over_efficiency() {
    let settings = CurveSettings::default();
    let curve = generate_pump_curve(&reference_bep(), 31, &settings).unwrap();
    let s = curve.sample(20).unwrap();
    let expected = settings.reference_density_kg_per_m3 * 9.81 * s.flow_m3_per_s * s.head_m / s.efficiency;
    assert_close(s.power_w, expected, 1e-6);
    assert_eq!(curve.power()[0], 0.0);
}

#[test]
fn generation_rejects_bad_input() {
    let settings = CurveSettings::default();
    assert!(matches!(
        generate_pump_curve(&reference_bep(), 1, &settings),
        Err(CalcError::InvalidInput(_))
    ));
    let mut bep = reference_bep();
    bep.flow_m3_per_s = 0.0;
    assert!(generate_pump_curve(&bep, 10, &settings).is_err());
    let mut bep = reference_bep();
    bep.efficiency = 0.0;
    assert!(generate_pump_curve(&bep, 10, &settings).is_err());
}

#[test]
fn shutoff_ratio_must_exceed_one() {
    for ratio in [0.9, 1.0, f64::NAN, f64::INFINITY] {
        let settings = CurveSettings {
            shutoff_head_ratio: ratio,
            ..CurveSettings::default()
        };
        assert!(
            matches!(
                generate_pump_curve(&reference_bep(), 5, &settings),
                Err(CalcError::InvalidInput(_))
            ),
            "ratio={ratio}"
        );
    }
    let settings = CurveSettings {
        shutoff_head_ratio: 1.01,
        ..CurveSettings::default()
    };
    let curve = generate_pump_curve(&reference_bep(), 5, &settings).unwrap();
    assert!(curve.head().windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn nearest_sample_operating_point() {
    let curve = generate_pump_curve(&reference_bep(), 31, &CurveSettings::default()).unwrap();
    let search = operating_point(&curve, &crossing_system()).unwrap();
    assert_eq!(search.point.sample_index, Some(20));
    assert_close(search.point.flow_m3_per_s, 0.01, 1e-12);
    assert_close(search.point.head_m, 30.0, 1e-6);
    assert!(search.point.head_mismatch_m < 1e-6);
    assert_eq!(search.system_head_m.len(), curve.len());
}

#[test]
fn ties_resolve_to_lowest_flow() {
    let bep = reference_bep();
    let settings = CurveSettings::default();
    let curve = generate_pump_curve(&bep, 25, &settings).unwrap();
    // 펌프 곡선과 똑같은 시스템 곡선: 모든 샘플의 차가 0
    let shutoff = bep.head_m * settings.shutoff_head_ratio;
    let system = SystemCurve {
        static_head_m: shutoff,
        k_coefficient: -((shutoff - bep.head_m) / (bep.flow_m3_per_s * bep.flow_m3_per_s)),
    };
    let search = operating_point(&curve, &system).unwrap();
    assert_eq!(search.point.sample_index, Some(0));
}

#[test]
fn no_crossing_still_returns_nearest_sample() {
    let curve = generate_pump_curve(&reference_bep(), 31, &CurveSettings::default()).unwrap();
    let high_static = SystemCurve {
        static_head_m: 50.0,
        k_coefficient: 1000.0,
    };
    let search = operating_point(&curve, &high_static).unwrap();
    assert_eq!(search.point.sample_index, Some(0));
    assert!(search.point.head_mismatch_m > 0.0);
    assert_eq!(operating_point_refined(&curve, &high_static).unwrap(), None);
}

#[test]
fn refined_operating_point_is_continuous() {
    let curve = generate_pump_curve(&reference_bep(), 7, &CurveSettings::default()).unwrap();
    let point = operating_point_refined(&curve, &crossing_system())
        .unwrap()
        .expect("crossing exists");
    assert_eq!(point.sample_index, None);
    assert_close(point.flow_m3_per_s, 0.01, 1e-9);
    assert_close(point.head_m, 30.0, 1e-5);
    assert_close(point.efficiency, 0.75, 1e-6);
}

#[test]
fn non_finite_system_curve_is_rejected() {
    let curve = generate_pump_curve(&reference_bep(), 10, &CurveSettings::default()).unwrap();
    let bad = SystemCurve {
        static_head_m: f64::NAN,
        k_coefficient: 1.0,
    };
    assert!(operating_point(&curve, &bad).is_err());
    assert!(operating_point_refined(&curve, &bad).is_err());
}

#[test]
fn find_operating_point_returns_curve_and_point() {
    let (curve, search) = find_operating_point(
        &reference_bep(),
        31,
        &crossing_system(),
        &CurveSettings::default(),
    )
    .unwrap();
    assert_eq!(curve.len(), 31);
    assert_eq!(search.point.sample_index, Some(20));
}

#[test]
fn concurrent_generation_is_independent() {
    let settings = CurveSettings::default();
    let beps: Vec<BepPoint> = (1..=8)
        .map(|i| BepPoint {
            flow_m3_per_s: 0.005 * f64::from(i),
            head_m: 20.0 + f64::from(i),
            power_w: None,
            efficiency: 0.7,
        })
        .collect();

    let sequential: Vec<_> = beps
        .iter()
        .map(|bep| generate_pump_curve(bep, 40, &settings).unwrap())
        .collect();

    let parallel: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = beps
            .iter()
            .map(|bep| scope.spawn(move || generate_pump_curve(bep, 40, &settings).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, parallel);
}
