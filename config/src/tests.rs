//! # Tests for Config Constants
//!
//! Unit tests verifying the relationships between configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small for precision");
}

#[test]
fn test_full_turn_is_tau() {
    assert_eq!(FULL_TURN, std::f64::consts::TAU);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_segment_bounds_are_ordered() {
    assert!(MIN_SEGMENTS >= 3, "a polygon needs at least three sides");
    assert!(MIN_SEGMENTS <= DEFAULT_SEGMENTS);
    assert!(DEFAULT_SEGMENTS <= MAX_SEGMENTS);
}

#[test]
fn test_max_segments_fit_in_u32_indices() {
    // Center vertex plus one closing rim point on top of the segments.
    let vertex_count = u64::from(MAX_SEGMENTS) + 2;
    assert!(vertex_count < u64::from(u32::MAX));
}
