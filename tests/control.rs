use fuzzy_kettle::{KettleController, Level, NoRuleFired};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

#[test]
fn medium_reading_low_target_runs_gently() {
    let kettle = KettleController::new();

    // current 50 is fully Medium, desired 20 is Low at 0.6; the single
    // (Medium, Low -> Low) rule clips the Low power term at 0.6 and its
    // centroid lands just above 18%.
    let power = kettle.control(50., 20.).unwrap();

    assert!((power - 18.30516431924883).abs() < EPS);
}

#[test]
fn cold_reading_hot_target_runs_hard() {
    let kettle = KettleController::new();

    // current 0 is fully Low, desired 100 fully High: the full-power rule
    // fires at strength 1 and the High term's centroid comes out intact.
    let power = kettle.control(0., 100.).unwrap();

    assert!(power > 75.);
    assert!((power - 251. / 3.).abs() < EPS);
}

#[test]
fn reading_at_target_idles_low() {
    let kettle = KettleController::new();

    let power = kettle.control(50., 50.).unwrap();

    assert!((power - 49. / 3.).abs() < EPS);
}

#[test]
fn inference_is_bit_exact_deterministic() {
    let kettle = KettleController::new();

    let first = kettle.control(50., 20.).unwrap();
    let second = kettle.control(50., 20.).unwrap();

    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(kettle.aggregate(33.3, 66.6), kettle.aggregate(33.3, 66.6));
}

#[test]
fn out_of_universe_inputs_report_no_rule_fired() {
    let kettle = KettleController::new();

    assert_eq!(kettle.control(-50., -50.), Err(NoRuleFired));
    assert_eq!(kettle.control(500., 500.), Err(NoRuleFired));
}

#[test]
fn overheated_kettle_reports_no_rule_fired() {
    let kettle = KettleController::new();

    // The bank has no (High, Low) rule, so a kettle well above its target
    // fires nothing even though both inputs are inside the universe.
    assert_eq!(kettle.control(100., 0.), Err(NoRuleFired));
}

#[test]
fn widening_the_gap_never_dents_the_power() {
    let kettle = KettleController::new();

    // For a fixed target, walking the reading downward should push power
    // up. The discrete centroid ripples by a fraction of a point where
    // the aggregated shape plateaus, so allow one point of slack below
    // the running maximum.
    for desired in (0..=100).step_by(5) {
        let desired = desired as f64;
        let mut best = f64::NEG_INFINITY;

        for gap in (0..=desired as i32).step_by(5) {
            let current = desired - gap as f64;

            let Ok(power) = kettle.control(current, desired) else {
                continue;
            };

            assert!(
                power >= best - 1.,
                "power dropped from {best} to {power} at current={current} desired={desired}"
            );
            best = best.max(power);
        }
    }
}

#[test]
fn aggregate_exposes_the_output_universe() {
    let kettle = KettleController::new();
    let curve = kettle.aggregate(50., 20.);

    assert_eq!(curve.len(), 101);
    assert_eq!(curve.samples()[0], 0.);
    assert_eq!(curve.samples()[100], 100.);

    // The iterator view matches the parallel slices.
    let pairs: Vec<_> = curve.iter().collect();
    assert_eq!(pairs.len(), curve.len());
    assert_eq!(pairs[20], (20., 0.6));
}

proptest! {
    #[test]
    fn memberships_stay_in_the_unit_interval(x in -200.0f64..300.0) {
        let kettle = KettleController::new();

        for level in Level::ALL {
            let degree = kettle.temperature().membership(level, x);
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    #[test]
    fn aggregated_degrees_stay_in_the_unit_interval(
        current in -50.0f64..150.0,
        desired in -50.0f64..150.0,
    ) {
        let kettle = KettleController::new();
        let curve = kettle.aggregate(current, desired);

        for &degree in curve.degrees() {
            prop_assert!((0.0..=1.0).contains(&degree));
        }
    }

    #[test]
    fn crisp_output_stays_on_the_power_universe(
        current in 0.0f64..=100.0,
        desired in 0.0f64..=100.0,
    ) {
        let kettle = KettleController::new();

        if let Ok(power) = kettle.control(current, desired) {
            prop_assert!((0.0..=100.0).contains(&power));
        }
    }
}
