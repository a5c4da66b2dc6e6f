//! 라이선스 반영 모델 테스트.
use gtreplicate_roi::roi::{self, Category, FleetProfile, LicenseTerms, ModeKind, RoiInput};

fn example_terms() -> LicenseTerms {
    LicenseTerms {
        license_cost_per_vessel: 30.0,
        implementation_cost: 0.0,
        maintenance_hours_per_vessel: 5.0,
    }
}

#[test]
fn license_aware_example() {
    let input = RoiInput::license_aware(FleetProfile::default(), example_terms());
    let r = roi::calculate(&input).expect("calc");
    assert_eq!(r.mode, ModeKind::LicenseAware);
    let lic = r.license.expect("license summary");
    assert!((lic.monthly_license_cost - 300.0).abs() < 1e-9);
    assert!((lic.annual_license_cost - 3600.0).abs() < 1e-9);
    assert!((r.gtreplicate.manual - 2500.0).abs() < 1e-9);
    assert!((r.gt_total - 9300.0).abs() < 1e-9);
    assert!((r.monthly_savings - 20700.0).abs() < 1e-9);
    assert_eq!(lic.roi_months, Some(0.0));
}

#[test]
fn payback_months_divides_implementation_by_savings() {
    let terms = LicenseTerms {
        implementation_cost: 41400.0,
        ..example_terms()
    };
    let r = roi::calculate(&RoiInput::license_aware(FleetProfile::default(), terms)).expect("calc");
    let months = r.license.and_then(|l| l.roi_months).expect("defined");
    assert!((months - 2.0).abs() < 1e-9);
}

#[test]
fn payback_is_undefined_without_positive_savings() {
    // 라이선스가 현행 비용보다 비싸면 절감액이 음수다.
    let terms = LicenseTerms {
        license_cost_per_vessel: 5000.0,
        implementation_cost: 10000.0,
        ..example_terms()
    };
    let r = roi::calculate(&RoiInput::license_aware(FleetProfile::default(), terms)).expect("calc");
    assert!(r.monthly_savings < 0.0);
    assert_eq!(r.license.and_then(|l| l.roi_months), None);
    assert!(roi::savings_breakdown(&r).is_none());
    assert_eq!(roi::payback_months(100.0, 0.0), None);
}

#[test]
fn license_is_charged_against_operations_bucket() {
    let r = roi::calculate(&RoiInput::license_aware(FleetProfile::default(), example_terms()))
        .expect("calc");
    let s = r.savings_by_category;
    assert!((s.bandwidth - 9000.0).abs() < 1e-9);
    assert!((s.operations - (10000.0 - 2500.0 - 300.0)).abs() < 1e-9);
    assert!((s.failure - 4500.0).abs() < 1e-9);
    assert!((s.total() - r.monthly_savings).abs() < 1e-9);
}

#[test]
fn manual_cost_ignores_current_manual_hours() {
    let base = FleetProfile::default();
    let busier = FleetProfile {
        monthly_manual_hours_per_vessel: 80.0,
        ..base
    };
    let a = roi::calculate(&RoiInput::license_aware(base, example_terms())).expect("calc");
    let b = roi::calculate(&RoiInput::license_aware(busier, example_terms())).expect("calc");
    assert_eq!(a.gtreplicate.manual, b.gtreplicate.manual);
    assert!(b.current.manual > a.current.manual);
}

#[test]
fn comparison_series_adds_license_row() {
    let r = roi::calculate(&RoiInput::license_aware(FleetProfile::default(), example_terms()))
        .expect("calc");
    let rows = roi::comparison_series(&r);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[3].category, Category::License);
    assert_eq!(rows[3].current, 0.0);
    assert!((rows[3].gtreplicate - 300.0).abs() < 1e-9);
}

#[test]
fn negative_license_terms_are_rejected() {
    let terms = LicenseTerms {
        maintenance_hours_per_vessel: -1.0,
        ..example_terms()
    };
    assert!(roi::calculate(&RoiInput::license_aware(FleetProfile::default(), terms)).is_err());
}
