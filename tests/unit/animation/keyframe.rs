use super::*;
use crate::animation::value::UnitNumber;

fn curves() -> CurveLibrary {
    CurveLibrary::builtin()
}

fn span_with(property: &str, keys: Vec<Keyframe>) -> SubtitleSpan {
    let mut span = SubtitleSpan::new("Hello").with_style("fs", 40.0);
    for k in keys {
        span.set_keyframe(property, k);
    }
    span
}

#[test]
fn clamps_outside_keyframe_range() {
    let span = span_with(
        "fs",
        vec![Keyframe::new(100.0, 10.0), Keyframe::new(200.0, 20.0)],
    );
    let early = apply_animations_to_span(&span, 0.0, &curves());
    assert_eq!(early.style["fs"], PropValue::Number(10.0));
    let late = apply_animations_to_span(&span, 10_000.0, &curves());
    assert_eq!(late.style["fs"], PropValue::Number(20.0));
}

#[test]
fn linear_midpoint_interpolates() {
    let span = span_with(
        "fs",
        vec![Keyframe::new(0.0, 10.0), Keyframe::new(1000.0, 20.0)],
    );
    let mid = apply_animations_to_span(&span, 500.0, &curves());
    let v = mid.style["fs"].as_number().unwrap();
    assert!((v - 15.0).abs() < 1e-4);
}

#[test]
fn easing_comes_from_the_segment_start() {
    let span = span_with(
        "fs",
        vec![
            Keyframe::new(0.0, 0.0).with_easing("ease-in"),
            Keyframe::new(1000.0, 100.0),
        ],
    );
    let v = apply_animations_to_span(&span, 250.0, &curves()).style["fs"]
        .as_number()
        .unwrap();
    assert!(v < 25.0);

    let span = span_with(
        "fs",
        vec![
            Keyframe::new(0.0, 0.0).with_easing("missing-curve"),
            Keyframe::new(1000.0, 100.0),
        ],
    );
    let v = apply_animations_to_span(&span, 250.0, &curves()).style["fs"]
        .as_number()
        .unwrap();
    assert!((v - 25.0).abs() < 1e-3);
}

#[test]
fn text_steps_at_the_boundary() {
    let span = span_with(
        "text",
        vec![Keyframe::new(0.0, "A"), Keyframe::new(1000.0, "B")],
    );
    assert_eq!(apply_animations_to_span(&span, 999.0, &curves()).text, "A");
    assert_eq!(apply_animations_to_span(&span, 1000.0, &curves()).text, "B");
}

#[test]
fn uninterpolable_values_step() {
    let span = span_with(
        "ff",
        vec![
            Keyframe::new(0.0, PropValue::Text("Arial".into())),
            Keyframe::new(1000.0, PropValue::Text("Roboto".into())),
        ],
    );
    let at = |t| apply_animations_to_span(&span, t, &curves()).style["ff"].clone();
    assert_eq!(at(500.0), PropValue::Text("Arial".into()));
    assert_eq!(at(1000.0), PropValue::Text("Roboto".into()));
}

#[test]
fn colors_and_units_interpolate() {
    let mut span = SubtitleSpan::new("x");
    span.set_keyframe("fc", Keyframe::new(0.0, "#000000"));
    span.set_keyframe("fc", Keyframe::new(1000.0, "#FFFFFF"));
    span.set_keyframe("ls", Keyframe::new(0.0, "0%"));
    span.set_keyframe("ls", Keyframe::new(1000.0, "100%"));

    let out = apply_animations_to_span(&span, 500.0, &curves());
    assert_eq!(out.style["fc"], PropValue::Color("#808080".into()));
    match &out.style["ls"] {
        PropValue::UnitNumber(UnitNumber { value, unit }) => {
            assert!((value - 50.0).abs() < 1e-3);
            assert_eq!(unit, "%");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn original_span_is_untouched() {
    let span = span_with(
        "fs",
        vec![Keyframe::new(0.0, 10.0), Keyframe::new(1000.0, 20.0)],
    );
    let before = span.clone();
    let _ = apply_animations_to_span(&span, 500.0, &curves());
    assert_eq!(span, before);
}

#[test]
fn empty_track_leaves_base_value() {
    let mut span = SubtitleSpan::new("x").with_style("fs", 40.0);
    span.animations.push(Animation::new("fs"));
    let out = apply_animations_to_span(&span, 10.0, &curves());
    assert_eq!(out.style["fs"], PropValue::Number(40.0));
}

#[test]
fn insert_replaces_on_exact_time_only() {
    let mut anim = Animation::new("fs");
    anim.insert_keyframe(Keyframe::new(500.0, 1.0));
    anim.insert_keyframe(Keyframe::new(0.0, 2.0));
    anim.insert_keyframe(Keyframe::new(500.0, 3.0));
    anim.insert_keyframe(Keyframe::new(500.5, 4.0));

    let times: Vec<f64> = anim.keyframes.iter().map(|k| k.time).collect();
    assert_eq!(times, vec![0.0, 500.0, 500.5]);
    assert_eq!(anim.keyframes[1].value, PropValue::Number(3.0));
    assert!(anim.validate().is_ok());

    assert!(anim.remove_keyframe_at(500.0).is_some());
    assert!(anim.remove_keyframe_at(500.0).is_none());
}

#[test]
fn unsorted_keys_still_bracket_correctly() {
    let keys = vec![
        Keyframe::new(1000.0, 20.0),
        Keyframe::new(0.0, 10.0),
    ];
    let v = resolve_keyframes("fs", &keys, 500.0, &curves()).unwrap();
    assert!((v.as_number().unwrap() - 15.0).abs() < 1e-4);
    assert_eq!(
        resolve_keyframes("fs", &keys, -5.0, &curves()),
        Some(PropValue::Number(10.0))
    );
    assert!(resolve_keyframes("fs", &[], 0.0, &curves()).is_none());
}
