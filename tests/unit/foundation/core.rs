use super::*;

#[test]
fn dir_axis_and_leading_sides() {
    assert_eq!(Dir::Left.axis(), Axis::Horizontal);
    assert_eq!(Dir::Bottom.axis(), Axis::Vertical);
    assert!(Dir::Left.is_leading());
    assert!(Dir::Top.is_leading());
    assert!(!Dir::Right.is_leading());
    assert!(!Dir::Bottom.is_leading());
}

#[test]
fn move_border_keeps_opposite_edge() {
    let mut a = Area::new("a", 10.0, 20.0, 30.0, 40.0);
    a.move_border(Dir::Left, 5.0);
    assert_eq!(a.x, 15.0);
    assert_eq!(a.right(), 40.0);

    a.move_border(Dir::Bottom, -10.0);
    assert_eq!(a.y, 20.0);
    assert_eq!(a.bottom(), 50.0);
}

#[test]
fn min_sizes_default_when_absent() {
    let a = Area::new("a", 0.0, 0.0, 50.0, 50.0);
    assert_eq!(a.effective_min_width(), DEFAULT_MIN_SIZE);
    let b = a.with_min_size(12.0, 8.0);
    assert_eq!(b.min_size(Axis::Horizontal), 12.0);
    assert_eq!(b.min_size(Axis::Vertical), 8.0);
}

#[test]
fn validate_rejects_out_of_bounds_and_empty() {
    assert!(Area::full("a").validate().is_ok());
    assert!(Area::new("a", 60.0, 0.0, 50.0, 10.0).validate().is_err());
    assert!(Area::new("a", 0.0, 0.0, 0.0, 10.0).validate().is_err());
    assert!(Area::new("a", 0.0, f64::NAN, 10.0, 10.0).validate().is_err());
}

#[test]
fn area_serializes_camel_case() {
    let a = Area::full("a").with_min_size(10.0, 10.0);
    let json = serde_json::to_string(&a).unwrap();
    assert!(json.contains("\"minWidth\":10.0"));
    let plain: Area =
        serde_json::from_str(r#"{"id":"p","x":0,"y":0,"width":100,"height":100}"#).unwrap();
    assert_eq!(plain.min_width, None);
}

#[test]
fn clamp_bounds_value() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
}
