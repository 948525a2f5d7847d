use std::f32::consts::FRAC_PI_2;

use crate::constraint::{add_curve_position, compute_world_positions, locate_segment};
use crate::{PathTarget, PositionMode, SpacingMode, StaticPath};

fn assert_approx_eps(actual: f32, expected: f32, eps: f32) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= eps,
        "expected {expected}, got {actual} (diff {diff})"
    );
}

fn assert_approx(actual: f32, expected: f32) {
    assert_approx_eps(actual, expected, 1.0e-3);
}

fn sample(
    path: &StaticPath,
    position_mode: PositionMode,
    spacing_mode: SpacingMode,
    spaces: &[f32],
    position: f32,
) -> Vec<f32> {
    let geometry = path.path().unwrap();
    let mut positions = Vec::new();
    let mut world = Vec::new();
    let mut curves = Vec::new();
    compute_world_positions(
        path,
        &geometry,
        &mut positions,
        &mut world,
        &mut curves,
        position_mode,
        spacing_mode,
        spaces.len(),
        true,
        spaces,
        position,
    )
    .to_vec()
}

/// Straight path from (0, 0) to (10, 0), one curve, uniform control points.
fn straight_path() -> StaticPath {
    StaticPath::open(vec![
        0.0, 0.0, 0.0, 0.0, 3.3333333, 0.0, 6.6666665, 0.0, 10.0, 0.0, 10.0, 0.0,
    ])
}

/// Axis-aligned closed square with perimeter 40, degenerate handles.
fn square_path() -> StaticPath {
    StaticPath::closed(vec![
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, // (0, 0)
        10.0, 0.0, 10.0, 0.0, 10.0, 0.0, // (10, 0)
        10.0, 10.0, 10.0, 10.0, 10.0, 10.0, // (10, 10)
        0.0, 10.0, 0.0, 10.0, 0.0, 10.0, // (0, 10)
    ])
}

#[test]
fn curve_position_at_zero_returns_first_control_point_exactly() {
    let mut out = [0.0f32; 5];
    add_curve_position(
        0.0, 1.5, -2.0, 3.0, 4.0, 7.0, -1.0, 9.0, 0.5, &mut out, 0, true,
    );
    assert_eq!(out[0], 1.5);
    assert_eq!(out[1], -2.0);
    assert_eq!(out[2], (4.0f32 - -2.0).atan2(3.0 - 1.5));
}

#[test]
fn curve_position_nan_parameter_falls_back_to_start() {
    let mut out = [0.0f32; 5];
    add_curve_position(
        f32::NAN,
        1.5,
        -2.0,
        3.0,
        4.0,
        7.0,
        -1.0,
        9.0,
        0.5,
        &mut out,
        0,
        true,
    );
    assert_eq!(out[0], 1.5);
    assert_eq!(out[1], -2.0);
}

#[test]
fn curve_position_midpoint_of_arch() {
    let mut out = [0.0f32; 5];
    add_curve_position(
        0.5, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, &mut out, 0, false,
    );
    assert_approx(out[0], 5.0);
    assert_approx(out[1], 7.5);
}

#[test]
fn tangent_near_zero_uses_first_handle_direction() {
    let mut out = [0.0f32; 5];
    add_curve_position(
        0.0005, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, &mut out, 0, true,
    );
    assert_eq!(out[2], FRAC_PI_2);
}

#[test]
fn locate_segment_resumes_and_normalizes() {
    let table = [10.0, 30.0, 60.0];
    assert_eq!(locate_segment(&table, 0, 5.0), (0, 0.5));

    let (index, local) = locate_segment(&table, 0, 45.0);
    assert_eq!(index, 2);
    assert_approx(local, 0.5);

    // Resuming past the containing segment never scans backwards.
    let (index, _) = locate_segment(&table, 2, 5.0);
    assert_eq!(index, 2);
}

#[test]
fn closed_path_wraps_any_whole_number_of_laps() {
    let path = square_path();
    let base = sample(&path, PositionMode::Percent, SpacingMode::Percent, &[0.3], 0.0);
    for offset in [1.3f32, 2.3, -0.7] {
        let lapped = sample(
            &path,
            PositionMode::Percent,
            SpacingMode::Percent,
            &[offset],
            0.0,
        );
        assert_approx(lapped[0], base[0]);
        assert_approx(lapped[1], base[1]);
        assert_approx(lapped[2], base[2]);
    }
}

#[test]
fn open_path_sample_at_exact_length_matches_zero_overshoot_extrapolation() {
    let path = straight_path().with_lengths(vec![10.0]);
    let at_end = sample(&path, PositionMode::Fixed, SpacingMode::Fixed, &[10.0], 0.0);
    assert_approx(at_end[0], 10.0);
    assert_approx(at_end[1], 0.0);
    assert_approx(at_end[2], 0.0);

    let past_end = sample(
        &path,
        PositionMode::Fixed,
        SpacingMode::Fixed,
        &[10.0001],
        0.0,
    );
    assert_approx(past_end[0], 10.0);
    assert_approx(past_end[1], 0.0);
    assert_approx(past_end[2], 0.0);
}

#[test]
fn open_path_extrapolates_before_start() {
    let path = straight_path().with_lengths(vec![10.0]);
    let before = sample(&path, PositionMode::Fixed, SpacingMode::Fixed, &[-5.0], 0.0);
    assert_approx(before[0], -5.0);
    assert_approx(before[1], 0.0);
    assert_approx(before[2], 0.0);
}

#[test]
fn variable_speed_closed_path_wraps_position() {
    // Degenerate out-and-back path with precomputed lengths [10, 20].
    let path = StaticPath::closed(vec![
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0,
    ])
    .with_lengths(vec![10.0, 20.0]);
    let out = sample(&path, PositionMode::Fixed, SpacingMode::Fixed, &[25.0], 0.0);
    assert_approx(out[0], 5.0);
    assert_approx(out[1], 0.0);
}

#[test]
fn constant_speed_two_curve_scenario_starts_at_first_anchor() {
    // Arch up then arch down; position 0 must return the first anchor exactly,
    // with the tangent pointing along the first handle.
    let path = StaticPath::open(vec![
        0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, 10.0, -10.0, 20.0, -10.0, 20.0, 0.0,
        20.0, 0.0,
    ]);
    let out = sample(&path, PositionMode::Fixed, SpacingMode::Fixed, &[0.0], 0.0);
    assert_eq!(out[0], 0.0);
    assert_eq!(out[1], 0.0);
    assert_eq!(out[2], FRAC_PI_2);
}

#[test]
fn constant_speed_walks_across_curve_boundary() {
    let path = StaticPath::open(vec![
        0.0, 0.0, 0.0, 0.0, 0.0, 10.0, 10.0, 10.0, 10.0, 0.0, 10.0, -10.0, 20.0, -10.0, 20.0, 0.0,
        20.0, 0.0,
    ]);
    // Two samples, one per arch; both must land on the respective curve.
    let geometry = path.path().unwrap();
    let mut positions = Vec::new();
    let mut world = Vec::new();
    let mut curves = Vec::new();
    let out = compute_world_positions(
        &path,
        &geometry,
        &mut positions,
        &mut world,
        &mut curves,
        PositionMode::Percent,
        SpacingMode::Percent,
        2,
        true,
        &[0.25, 0.5],
        0.0,
    );
    // First sample on the upward arch, second on the downward arch.
    assert!(out[1] > 0.0, "first sample should sit on the upper arch");
    assert!(out[4] < 0.0, "second sample should sit on the lower arch");
}

#[test]
fn too_short_vertex_array_produces_no_samples() {
    let path = StaticPath::open(vec![0.0, 0.0, 1.0, 1.0]);
    let out = sample(&path, PositionMode::Fixed, SpacingMode::Fixed, &[0.0], 0.0);
    assert!(out.is_empty());
}
