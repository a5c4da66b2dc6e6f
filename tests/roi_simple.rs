//! 고정 절감률 모드 회귀 테스트.
use gtreplicate_roi::roi::{self, Field, FleetProfile, InputError, RoiInput};

fn example_fleet() -> FleetProfile {
    FleetProfile {
        vessels: 10,
        data_per_vessel_gb: 50.0,
        bandwidth_cost_per_gb: 30.0,
        monthly_manual_hours_per_vessel: 20.0,
        it_cost_per_hour: 50.0,
        monthly_failures_per_vessel: 5.0,
        hours_per_failure: 2.0,
    }
}

#[test]
fn default_dashboard_example() {
    let r = roi::calculate(&RoiInput::simple(example_fleet())).expect("calc");
    assert!((r.current.bandwidth - 15000.0).abs() < 1e-9);
    assert!((r.current.manual - 10000.0).abs() < 1e-9);
    assert!((r.current.failure - 5000.0).abs() < 1e-9);
    assert!((r.current_total - 30000.0).abs() < 1e-9);
    assert!((r.gtreplicate.bandwidth - 6000.0).abs() < 1e-9);
    assert!((r.gtreplicate.manual - 2500.0).abs() < 1e-9);
    assert!((r.gtreplicate.failure - 500.0).abs() < 1e-9);
    assert!((r.gt_total - 9000.0).abs() < 1e-9);
    assert!((r.monthly_savings - 21000.0).abs() < 1e-9);
    assert!((r.annual_savings - 252000.0).abs() < 1e-6);
    let pct = r.savings_pct.expect("pct defined");
    assert!((pct - 70.0).abs() < 1e-9, "pct={pct}");
    assert!(r.license.is_none());
}

#[test]
fn defaults_match_dashboard_defaults() {
    assert_eq!(FleetProfile::default(), example_fleet());
}

#[test]
fn zero_failure_inputs_keep_percentage_defined() {
    let fleet = FleetProfile {
        monthly_failures_per_vessel: 0.0,
        hours_per_failure: 0.0,
        ..example_fleet()
    };
    let r = roi::calculate(&RoiInput::simple(fleet)).expect("calc");
    assert_eq!(r.current.failure, 0.0);
    assert_eq!(r.gtreplicate.failure, 0.0);
    assert!(r.savings_pct.is_some());
}

#[test]
fn savings_percentage_is_undefined_only_for_zero_total() {
    assert_eq!(roi::savings_percentage(0.0, 0.0), None);
    assert_eq!(roi::savings_percentage(200.0, 50.0), Some(25.0));
    assert_eq!(roi::savings_percentage(100.0, -10.0), Some(-10.0));
}

#[test]
fn below_minimum_is_rejected_with_field_name() {
    let fleet = FleetProfile {
        vessels: 0,
        ..example_fleet()
    };
    let err = roi::calculate(&RoiInput::simple(fleet)).unwrap_err();
    assert_eq!(
        err,
        InputError::BelowMinimum {
            field: "vessels",
            min: 1.0,
            value: 0.0
        }
    );

    let fleet = FleetProfile {
        bandwidth_cost_per_gb: f64::NAN,
        ..example_fleet()
    };
    assert!(matches!(
        roi::calculate(&RoiInput::simple(fleet)),
        Err(InputError::NotFinite {
            field: "bandwidth_cost_per_gb"
        })
    ));
}

#[test]
fn comparison_series_has_three_rows_without_license() {
    let r = roi::calculate(&RoiInput::simple(example_fleet())).expect("calc");
    let rows = roi::comparison_series(&r);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].category, roi::Category::Bandwidth);
    assert!((rows[1].gtreplicate - 2500.0).abs() < 1e-9);
}

#[test]
fn savings_breakdown_shares_sum_to_one() {
    let r = roi::calculate(&RoiInput::simple(example_fleet())).expect("calc");
    let slices = roi::savings_breakdown(&r).expect("positive savings");
    let share: f64 = slices.iter().map(|s| s.share).sum();
    assert!((share - 1.0).abs() < 1e-12);
    // 9000 / 21000
    assert!((slices[0].share - 9000.0 / 21000.0).abs() < 1e-12);
}

#[test]
fn products_beyond_f64_range_are_rejected() {
    let fleet = FleetProfile {
        data_per_vessel_gb: 1e200,
        bandwidth_cost_per_gb: 1e200,
        ..FleetProfile::default()
    };
    assert!(matches!(
        roi::calculate(&RoiInput::simple(fleet)),
        Err(InputError::Overflow {
            metric: "current_total"
        })
    ));
}

#[test]
fn derived_ratios_stay_finite_or_undefined() {
    assert_eq!(roi::payback_months(1e308, 1e-10), None);
    assert_eq!(roi::savings_percentage(1e-310, 1e300), None);
    assert_eq!(roi::payback_months(1000.0, 500.0), Some(2.0));
}

#[test]
fn vessel_count_must_be_a_whole_u32() {
    assert!(matches!(
        Field::Vessels.check(2.5),
        Err(InputError::NotInteger { field: "vessels", .. })
    ));
    assert!(matches!(
        Field::Vessels.check(5e9),
        Err(InputError::NotInteger { .. })
    ));
    assert_eq!(Field::Vessels.check(4.0), Ok(4.0));

    let mut fleet = example_fleet();
    assert!(fleet.set(Field::Vessels, 7.9).is_err());
    assert_eq!(fleet.vessels, example_fleet().vessels);
}
