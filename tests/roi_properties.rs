//! 계산 모델의 선형성/단조성/합계 성질.
use gtreplicate_roi::roi::{
    self, FleetProfile, LicenseTerms, RoiInput, BANDWIDTH_FACTOR, FAILURE_FACTOR, MANUAL_FACTOR,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn fleet_strategy() -> impl Strategy<Value = FleetProfile> {
    (
        1_u32..500,
        1.0_f64..1000.0,
        1.0_f64..200.0,
        1.0_f64..200.0,
        1.0_f64..300.0,
        0.0_f64..50.0,
        0.0_f64..24.0,
    )
        .prop_map(|(vessels, data, bw, hours, it, failures, per_failure)| FleetProfile {
            vessels,
            data_per_vessel_gb: data,
            bandwidth_cost_per_gb: bw,
            monthly_manual_hours_per_vessel: hours,
            it_cost_per_hour: it,
            monthly_failures_per_vessel: failures,
            hours_per_failure: per_failure,
        })
}

fn terms_strategy() -> impl Strategy<Value = LicenseTerms> {
    (0.0_f64..500.0, 0.0_f64..1.0e6, 0.0_f64..100.0).prop_map(|(lic, imp, maint)| LicenseTerms {
        license_cost_per_vessel: lic,
        implementation_cost: imp,
        maintenance_hours_per_vessel: maint,
    })
}

fn close(a: f64, b: f64) -> bool {
    close_at(a, b, a.abs().max(b.abs()))
}

/// `scale` 크기의 값끼리 뺄셈한 결과를 비교할 때 쓴다.
fn close_at(a: f64, b: f64, scale: f64) -> bool {
    (a - b).abs() <= 1e-9 * scale.max(1.0)
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn simple_mode_applies_fixed_factors(fleet in fleet_strategy()) {
        let r = roi::calculate(&RoiInput::simple(fleet)).expect("valid input");
        prop_assert!(close(r.current_total, r.current.bandwidth + r.current.manual + r.current.failure));
        prop_assert!(close(r.gtreplicate.bandwidth, BANDWIDTH_FACTOR * r.current.bandwidth));
        prop_assert!(close(r.gtreplicate.manual, MANUAL_FACTOR * r.current.manual));
        prop_assert!(close(r.gtreplicate.failure, FAILURE_FACTOR * r.current.failure));
        prop_assert!(r.savings_pct.is_some());
    }

    #[test]
    fn category_savings_sum_to_total(fleet in fleet_strategy(), terms in terms_strategy()) {
        for input in [RoiInput::simple(fleet), RoiInput::license_aware(fleet, terms)] {
            let r = roi::calculate(&input).expect("valid input");
            let scale = r.current_total.max(r.gt_total);
            prop_assert!(close_at(r.savings_by_category.total(), r.monthly_savings, scale));
            prop_assert!(close_at(r.current_total - r.gt_total, r.monthly_savings, scale));
        }
    }

    #[test]
    fn maintenance_hours_scale_gt_manual_linearly(
        fleet in fleet_strategy(),
        terms in terms_strategy(),
        extra in 0.5_f64..50.0,
    ) {
        let more = LicenseTerms {
            maintenance_hours_per_vessel: terms.maintenance_hours_per_vessel + extra,
            ..terms
        };
        let a = roi::calculate(&RoiInput::license_aware(fleet, terms)).expect("valid input");
        let b = roi::calculate(&RoiInput::license_aware(fleet, more)).expect("valid input");
        let expected = f64::from(fleet.vessels) * extra * fleet.it_cost_per_hour;
        prop_assert!(close_at(b.gtreplicate.manual - a.gtreplicate.manual, expected, b.gtreplicate.manual));
        prop_assert_eq!(a.current, b.current);
    }

    #[test]
    fn more_vessels_cost_more(fleet in fleet_strategy(), terms in terms_strategy(), lic in 1.0_f64..500.0) {
        let terms = LicenseTerms { license_cost_per_vessel: lic, ..terms };
        let bigger = FleetProfile { vessels: fleet.vessels + 1, ..fleet };
        let a = roi::calculate(&RoiInput::license_aware(fleet, terms)).expect("valid input");
        let b = roi::calculate(&RoiInput::license_aware(bigger, terms)).expect("valid input");
        prop_assert!(b.current_total > a.current_total);
        prop_assert!(b.gt_total > a.gt_total);
    }

    #[test]
    fn payback_defined_iff_savings_positive(fleet in fleet_strategy(), terms in terms_strategy()) {
        let r = roi::calculate(&RoiInput::license_aware(fleet, terms)).expect("valid input");
        let months = r.license.and_then(|l| l.roi_months);
        prop_assert_eq!(months.is_some(), r.monthly_savings > 0.0);
        if let Some(m) = months {
            prop_assert!(m.is_finite() && m >= 0.0);
        }
    }
}
