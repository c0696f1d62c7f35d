use super::*;

#[test]
fn default_style_matches_constants() {
    let style = ConnectorStyle::default();
    assert_eq!(style.direction_length, DIRECTION_ARROW_LENGTH);
    assert_eq!(style.direction_radius, DIRECTION_ARROW_RADIUS);
    assert_eq!(style.up_length, UP_ARROW_LENGTH);
    assert_eq!(style.up_radius, UP_ARROW_RADIUS);
    assert_eq!(style.segments, ARROW_SEGMENTS);
}

#[test]
fn style_rejects_negative_radius() {
    let err = ConnectorStyle::new(50.0, 3.0, 20.0, -2.0, 12).unwrap_err();
    assert_eq!(err, ConfigError::NonPositive("up_radius", -2.0));
}

#[test]
fn style_rejects_nan_length() {
    let err = ConnectorStyle::new(f64::NAN, 3.0, 20.0, 2.0, 12).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositive("direction_length", _)));
}

#[test]
fn style_rejects_degenerate_segments() {
    let err = ConnectorStyle::new(50.0, 3.0, 20.0, 2.0, 2).unwrap_err();
    assert_eq!(err, ConfigError::InvalidSegments(2));
}

#[test]
fn config_error_display() {
    let err = ConfigError::InvalidSegments(1);
    assert_eq!(err.to_string(), "segments must be >= 3: 1");
}
