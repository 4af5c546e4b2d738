//! 계산 결과를 사람이 읽는 텍스트로 출력한다. JSON 출력은 app 에서 처리한다.

use crate::app::{CheckReport, CurveReport, PipeReport, PumpReport};
use crate::fluid::FluidProperties;
use crate::standards::SelectionStatus;

pub fn print_properties(props: &FluidProperties) {
    println!("\n-- 물 물성치 ({:.1} °C) --", props.temperature_c);
    println!("밀도: {:.2} kg/m3", props.density_kg_per_m3);
    println!("동점도: {:.4e} m2/s", props.kinematic_viscosity_m2_per_s);
    println!("점도: {:.4e} Pa·s", props.dynamic_viscosity_pa_s);
    if let Some(advisory) = props.advisory() {
        println!("주의: {advisory}");
    }
}

pub fn print_pipe_report(report: &PipeReport) {
    let s = &report.system;
    println!("\n-- 배관 수력 계산 --");
    println!(
        "유량: {:.2} m3/h, 유속: {:.3} m/s",
        s.flow_m3_per_s * 3600.0,
        s.velocity_m_per_s
    );
    println!("Re={:.3e} ({}), f={:.5}", s.reynolds, s.flow_regime, s.friction_factor);
    println!(
        "마찰 손실: {:.3} m, 국부 손실: {:.3} m, 고도: {:.2} m",
        s.head_loss_friction_m, s.head_loss_minor_m, s.elevation_head_m
    );
    println!(
        "총 손실수두: {:.3} m, 압력강하: {:.2} kPa",
        s.total_head_loss_m, s.pressure_drop_kpa
    );
    for item in &report.minor_losses {
        println!(
            "  {} x{} (K={}): {:.3} m",
            item.name, item.quantity, item.k, item.head_loss_m
        );
    }
    if let Some(hw) = &report.hazen_williams {
        println!(
            "Hazen-Williams ({}, C={}): {:.3} m (Darcy 대비 {:+.3} m)",
            hw.material, hw.c_factor, hw.head_loss_m, hw.difference_m
        );
    }
    for advisory in &s.advisories {
        println!("주의: {advisory}");
    }

    let v = &report.velocity;
    println!(
        "유속 판정 [{}]: {:?} (허용 {}~{} m/s, 권장 {} m/s)",
        v.service.code(),
        v.status,
        v.limits.min_m_per_s,
        v.limits.max_m_per_s,
        v.limits.recommended_m_per_s
    );
    for w in &v.warnings {
        println!("  - {w}");
    }
    println!("유동 영역: {}", report.reynolds.description);
    for c in &report.reynolds.concerns {
        println!("  - {c}");
    }
    let e = &report.erosion;
    println!(
        "침식 판정: {:?} (침식 유속 {:.2} m/s, 비율 {:.2}) {}",
        e.status, e.erosion_velocity_m_per_s, e.ratio, e.risk
    );
}

pub fn print_pump_report(report: &PumpReport) {
    let r = &report.result;
    println!("\n-- 펌프 분석 --");
    println!(
        "수동력: {:.2} kW, 축동력: {:.2} kW (효율 {:.0}%)",
        r.hydraulic_power_kw,
        r.shaft_power_kw,
        r.efficiency * 100.0
    );
    println!(
        "전동기 출력: {:.2} kW ({:.1} hp)",
        r.motor_power_kw, r.motor_power_hp
    );
    println!(
        "NPSHa: {:.2} m, NPSHr: {:.2} m, 여유: {:.2} m -> {}",
        r.npsh_available_m,
        r.npsh_required_m,
        r.cavitation.margin_m,
        r.cavitation.status.label()
    );
    println!("  {}", r.cavitation.recommendation);
    println!("비속도 Ns: {:.1} -> {}", r.specific_speed, r.pump_type);
    println!("운전 범위: {}", report.operating_range);
    if let Some(a) = &report.affinity {
        println!(
            "{:.0} rpm 환산: 유량 {:.2} m3/h, 양정 {:.2} m, 축동력 {:.2} kW",
            a.speed_rpm,
            a.flow_m3_per_s * 3600.0,
            a.head_m,
            a.shaft_power_kw
        );
    }
}

pub fn print_curve_report(report: &CurveReport) {
    println!("\n-- 펌프 성능곡선 --");
    println!(
        "BEP: {:.2} m3/h, {:.2} m, 효율 {:.0}%, 동력 {:.2} kW",
        report.bep.flow_m3_per_s * 3600.0,
        report.bep.head_m,
        report.bep.efficiency * 100.0,
        report.bep_power_w / 1000.0
    );
    println!("{:>10} {:>10} {:>8} {:>10}", "Q[m3/h]", "H[m]", "η[%]", "P[kW]");
    for s in &report.samples {
        println!(
            "{:>10.2} {:>10.2} {:>8.1} {:>10.3}",
            s.flow_m3_per_s * 3600.0,
            s.head_m,
            s.efficiency * 100.0,
            s.power_w / 1000.0
        );
    }
    if let Some(npshr) = &report.npsh_required_m {
        if let (Some(first), Some(last)) = (npshr.first(), npshr.last()) {
            println!("요구 NPSH: {first:.2} ~ {last:.2} m");
        }
    }
    if let Some(search) = &report.operating_point {
        let p = &search.point;
        println!(
            "운전점: {:.2} m3/h, {:.2} m, 효율 {:.0}% (양정 차 {:.3} m)",
            p.flow_m3_per_s * 3600.0,
            p.head_m,
            p.efficiency * 100.0,
            p.head_mismatch_m
        );
    }
    if report.refined_requested {
        match &report.refined_point {
            Some(p) => println!(
                "정밀 운전점: {:.3} m3/h, {:.3} m, 효율 {:.1}%",
                p.flow_m3_per_s * 3600.0,
                p.head_m,
                p.efficiency * 100.0
            ),
            None => println!("곡선 범위 안에서 시스템 곡선과의 교점이 없습니다."),
        }
    }
}

pub fn print_check_report(report: &CheckReport) {
    match report {
        CheckReport::Velocity(v) => {
            println!(
                "{:.2} m/s [{}]: {:?}",
                v.velocity_m_per_s,
                v.service.code(),
                v.status
            );
            for w in &v.warnings {
                println!("  - {w}");
            }
        }
        CheckReport::Reynolds(r) => {
            println!("Re={:.3e}: {} - {}", r.reynolds, r.regime, r.description);
            for c in &r.concerns {
                println!("  - {c}");
            }
        }
        CheckReport::PressureClass(sel) => {
            println!("{}", sel.message);
            if sel.status == SelectionStatus::Ok {
                println!("적합 등급: {}", sel.suitable_classes.join(", "));
            }
        }
        CheckReport::PipeSize(sel) => {
            println!(
                "필요 내경: {:.1} mm ({:.2} m3/h, 최대 {} m/s)",
                sel.required_diameter_mm, sel.flow_m3_per_h, sel.max_velocity_m_per_s
            );
            println!("{}", sel.message);
            if !sel.candidate_sizes.is_empty() {
                let sizes: Vec<String> =
                    sel.candidate_sizes.iter().map(|dn| format!("DN{dn}")).collect();
                println!("후보: {}", sizes.join(", "));
            }
        }
        CheckReport::Erosion(e) => {
            println!(
                "{:?}: 유속 {:.2} m/s / 침식 유속 {:.2} m/s (비율 {:.2})",
                e.status, e.velocity_m_per_s, e.erosion_velocity_m_per_s, e.ratio
            );
            println!("  {}", e.risk);
        }
        CheckReport::Standards {
            application,
            standards,
        } => {
            println!("{application:?} 적용 규격:");
            for s in standards.iter() {
                println!("  - {s}");
            }
        }
        CheckReport::Schedules(schedules) => {
            for s in schedules.iter() {
                println!("{:<8} {}", s.name, s.description);
            }
        }
        CheckReport::SafetyFactors(factors) => {
            for f in factors.iter() {
                println!(
                    "{} [{}]: {} {} - {}",
                    f.item, f.basis, f.value, f.unit, f.description
                );
            }
        }
        CheckReport::Materials(materials) => {
            for m in materials {
                println!(
                    "{} ({}, {}): 최고 {} °C, 인장강도 {} MPa, 부식여유 {} mm - {}",
                    m.code,
                    m.name,
                    m.specification,
                    m.max_temp_c,
                    m.tensile_strength_mpa,
                    m.corrosion_allowance_mm,
                    m.applications
                );
            }
        }
    }
}
