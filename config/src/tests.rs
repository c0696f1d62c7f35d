//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_equal() {
    assert!(approx_equal(0.1 + 0.2, 0.3));
    assert!(!approx_equal(0.0, 1e-6));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(-1e-12));
    assert!(!approx_zero(-1e-3));
}

// =============================================================================
// ORIGIN FRAME TESTS
// =============================================================================

fn length(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

#[test]
fn test_origin_axes_are_unit_length() {
    assert!(approx_equal(length(ORIGIN_DIRECTION), 1.0));
    assert!(approx_equal(length(ORIGIN_UP), 1.0));
}

#[test]
fn test_origin_axes_are_orthogonal() {
    let dot: f64 = ORIGIN_DIRECTION
        .iter()
        .zip(ORIGIN_UP.iter())
        .map(|(a, b)| a * b)
        .sum();
    assert!(approx_zero(dot));
}

#[test]
fn test_origin_position_is_zero() {
    // Container translation is the raw offset from this point, which is only
    // a rigid transform when the origin sits at the coordinate zero.
    assert_eq!(ORIGIN_POSITION, [0.0, 0.0, 0.0]);
}

// =============================================================================
// VISUALIZATION TESTS
// =============================================================================

#[test]
fn test_arrow_heads_fit_in_arrows() {
    // Shaft length is the arrow length minus the head length; it must stay positive.
    assert!(DIRECTION_ARROW_LENGTH > DIRECTION_ARROW_RADIUS * ARROW_HEAD_LENGTH_FACTOR);
    assert!(UP_ARROW_LENGTH > UP_ARROW_RADIUS * ARROW_HEAD_LENGTH_FACTOR);
}

#[test]
fn test_up_arrow_is_smaller() {
    assert!(UP_ARROW_LENGTH < DIRECTION_ARROW_LENGTH);
    assert!(UP_ARROW_RADIUS < DIRECTION_ARROW_RADIUS);
}

#[test]
fn test_arrow_segments_form_polygon() {
    assert!(ARROW_SEGMENTS >= 3);
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_colors_in_range() {
    for rgba in [RED, GREEN] {
        for c in rgba {
            assert!((0.0..=1.0).contains(&c), "color component out of range: {}", c);
        }
    }
}

#[test]
fn test_colors_are_opaque() {
    assert_eq!(RED[3], 1.0);
    assert_eq!(GREEN[3], 1.0);
}
