use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SubframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SubframeError::layout("x").to_string().contains("layout error:"));
    assert!(
        SubframeError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        SubframeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SubframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SubframeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, SubframeError::Serde(_)));
}
