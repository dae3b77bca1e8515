use super::*;
use proptest::prelude::*;

fn custom_curves() -> Vec<EasingCurve> {
    vec![
        EasingCurve::new("overshoot", "Overshoot", (0.34, 1.56), (0.64, 1.0)),
        EasingCurve::new("flat", "Flat", (0.0, 0.0), (0.0, 0.0)),
        EasingCurve::new("steep", "Steep", (1.0, 0.0), (0.0, 1.0)),
    ]
}

#[test]
fn endpoints_are_stable() {
    let lib = CurveLibrary::builtin();
    for curve in lib.iter().cloned().chain(custom_curves()) {
        assert!(curve.evaluate(0.0).abs() < 1e-4, "{} at 0", curve.id);
        assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-4, "{} at 1", curve.id);
    }
}

#[test]
fn linear_is_identity() {
    let linear = CurveLibrary::builtin().get("linear");
    for x in [0.0, 0.25, 0.5, 0.75, 1.0] {
        assert!((evaluate_curve(&linear, x) - x).abs() < 1e-4, "x = {x}");
    }
}

#[test]
fn builtins_are_monotonic_spot_check() {
    let lib = CurveLibrary::builtin();
    for curve in lib.iter() {
        let a = curve.evaluate(0.25);
        let b = curve.evaluate(0.5);
        let c = curve.evaluate(0.75);
        assert!(a < b && b < c, "{}", curve.id);
    }
}

#[test]
fn ease_in_starts_slow_and_ease_out_starts_fast() {
    let lib = CurveLibrary::builtin();
    assert!(lib.get("ease-in").evaluate(0.25) < 0.25);
    assert!(lib.get("ease-out").evaluate(0.25) > 0.25);
    let mid = lib.get("ease-in-out").evaluate(0.5);
    assert!((mid - 0.5).abs() < 1e-3);
}

#[test]
fn out_of_range_and_nan_inputs_stay_finite() {
    for curve in custom_curves() {
        for x in [-0.5, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(curve.evaluate(x).is_finite(), "{} at {x}", curve.id);
        }
    }
}

#[test]
fn missing_id_falls_back_to_linear() {
    let lib = CurveLibrary::builtin();
    assert_eq!(lib.get("nope").id, LINEAR_ID);
    assert!((lib.evaluate(None, 0.3) - 0.3).abs() < 1e-4);
    assert!((lib.evaluate(Some("nope"), 0.3) - 0.3).abs() < 1e-4);
}

#[test]
fn builtins_are_immutable_custom_curves_are_not() {
    let mut lib = CurveLibrary::builtin();
    let mut fake = EasingCurve::new("linear", "Mine", (0.1, 0.2), (0.3, 0.4));
    assert!(lib.insert(fake.clone()).is_err());
    assert!(lib.remove("ease-in").is_err());

    fake.id = "mine".into();
    lib.insert(fake.clone()).unwrap();
    fake.p1y = 0.9;
    lib.insert(fake).unwrap();
    assert_eq!(lib.get("mine").p1y, 0.9);
    assert_eq!(lib.remove("mine").unwrap().id, "mine");
    assert!(!lib.contains("mine"));
    assert!(lib.remove("mine").is_err());
}

#[test]
fn invalid_control_points_are_rejected() {
    let mut lib = CurveLibrary::builtin();
    assert!(
        lib.insert(EasingCurve::new("bad", "Bad", (1.5, 0.0), (0.5, 1.0)))
            .is_err()
    );
    assert!(
        lib.insert(EasingCurve::new("nan", "NaN", (f64::NAN, 0.0), (0.5, 1.0)))
            .is_err()
    );
}

#[test]
fn library_round_trips_as_map() {
    let lib = CurveLibrary::builtin();
    let json = serde_json::to_value(&lib).unwrap();
    assert!(json.get("ease-in-out").is_some());
    assert_eq!(json["linear"]["builtIn"], serde_json::Value::Bool(true));
}

#[test]
fn loading_merges_user_curves_over_builtins() {
    let json = r#"{
        "snappy": { "id": "snappy", "name": "Snappy", "p1x": 0.2, "p1y": 0.9, "p2x": 0.3, "p2y": 1.0 },
        "linear": { "id": "linear", "name": "Hijacked", "p1x": 0.9, "p1y": 0.0, "p2x": 0.9, "p2y": 0.0 }
    }"#;
    let lib: CurveLibrary = serde_json::from_str(json).unwrap();
    assert!(lib.contains("ease-in-out"));
    assert!(lib.contains("snappy"));
    assert_eq!(lib.get("linear"), EasingCurve::linear());

    let bad = r#"{ "oops": { "id": "oops", "name": "Oops", "p1x": 2.0, "p1y": 0.0, "p2x": 0.5, "p2y": 1.0 } }"#;
    assert!(serde_json::from_str::<CurveLibrary>(bad).is_err());
}

proptest! {
    #[test]
    fn endpoints_hold_for_any_valid_control_points(
        p1x in 0.0f64..=1.0,
        p1y in -2.0f64..3.0,
        p2x in 0.0f64..=1.0,
        p2y in -2.0f64..3.0,
    ) {
        let curve = EasingCurve::new("any", "Any", (p1x, p1y), (p2x, p2y));
        prop_assert!(curve.validate().is_ok());
        prop_assert!(curve.evaluate(0.0).abs() < 1e-4);
        prop_assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn evaluation_is_finite_everywhere(
        p1x in 0.0f64..=1.0,
        p1y in -2.0f64..3.0,
        p2x in 0.0f64..=1.0,
        p2y in -2.0f64..3.0,
        x in -10.0f64..10.0,
    ) {
        prop_assert!(evaluate_cubic_bezier(p1x, p1y, p2x, p2y, x).is_finite());
    }
}
