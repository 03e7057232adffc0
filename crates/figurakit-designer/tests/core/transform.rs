use figurakit_designer::model::{FigureShape, Point, Rectangle, Shape};
use figurakit_designer::transform::{apply, StageSkipped, TransformState};
use proptest::prelude::*;

const TOL: f64 = 1e-9;

fn unit_square() -> Shape {
    Shape::Rectangle(Rectangle::new(0.0, 0.0, 1.0, 1.0))
}

fn assert_point(p: Point, x: f64, y: f64) {
    assert!((p.x - x).abs() < TOL && (p.y - y).abs() < TOL, "{p:?} vs ({x}, {y})");
}

#[test]
fn test_default_state_is_identity() {
    let shape = unit_square();
    let placement = apply(&shape, &TransformState::default());
    assert!(placement.is_clean());
    assert_eq!(placement.vertices.as_slice(), shape.local_vertices().as_slice());
}

#[test]
fn test_scale_applies_before_translate() {
    let shape = unit_square();
    let state = TransformState {
        scale_x: 2.0,
        translate_x: 0.1,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);

    // Fixed order: x * 2 + 0.1. The commuted order would give (x + 0.1) * 2.
    assert_point(placement.vertices[2], 2.1, 1.0);
    assert!((placement.vertices[2].x - 2.2).abs() > 0.05);
}

#[test]
fn test_rotation_pivots_on_anchor_corner() {
    let shape = Shape::Rectangle(Rectangle::new(-0.8, -0.8, 0.4, 0.4));
    let state = TransformState {
        rotation: 90.0,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);

    assert!(placement.is_clean());
    // The pivot itself does not move; its neighbor sweeps a quarter turn.
    assert_point(placement.vertices[0], -0.8, -0.8);
    assert_point(placement.vertices[1], -0.8, -0.4);
}

#[test]
fn test_full_turn_is_within_range() {
    let shape = unit_square();
    let state = TransformState {
        rotation: 360.0,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);
    assert!(placement.is_clean());
    assert!((placement.vertices[2].x - 1.0).abs() < 1e-6);
}

#[test]
fn test_out_of_range_rotation_skips_only_that_stage() {
    let shape = unit_square();
    let state = TransformState {
        rotation: 400.0,
        translate_x: 0.1,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);

    assert_eq!(
        placement.skipped,
        vec![StageSkipped::Rotation { degrees: 400.0 }]
    );
    // Translation still applied.
    assert_point(placement.vertices[0], 0.1, 0.0);
    assert_point(placement.vertices[2], 1.1, 1.0);
}

#[test]
fn test_out_of_range_bias_skips_only_skew() {
    let shape = unit_square();
    let state = TransformState {
        bias_x: 1.5,
        scale_y: 3.0,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);

    assert_eq!(
        placement.skipped,
        vec![StageSkipped::Skew { bias_x: 1.5, bias_y: 0.0 }]
    );
    // Scale still applied.
    assert_point(placement.vertices[2], 1.0, 3.0);
}

#[test]
fn test_skew_is_anchored_at_left_edge_midpoint() {
    let shape = Shape::Rectangle(Rectangle::new(-0.8, -0.8, 0.4, 0.4));
    let state = TransformState {
        bias_x: 0.5,
        ..TransformState::default()
    };
    let placement = apply(&shape, &state);

    assert!(placement.is_clean());
    // The anchor column is fixed; x offsets shear y away from it.
    assert_point(placement.vertices[0], -0.8, -0.8);
    assert_point(placement.vertices[1], -0.4, -0.6);
}

#[test]
fn test_pipeline_does_not_mutate_inputs() {
    let shape = unit_square();
    let state = TransformState {
        rotation: 45.0,
        ..TransformState::default()
    };
    let before = shape.clone();
    let _ = apply(&shape, &state);
    assert_eq!(shape, before);
}

proptest! {
    #[test]
    fn rotation_within_a_full_turn_is_never_skipped(deg in -360.0f64..=360.0) {
        let placement = apply(&unit_square(), &TransformState {
            rotation: deg,
            ..TransformState::default()
        });
        prop_assert!(placement.is_clean());
    }

    #[test]
    fn rotation_beyond_a_full_turn_is_reported(extra in 1e-3f64..=1e3) {
        let placement = apply(&unit_square(), &TransformState {
            rotation: 360.0 + extra,
            ..TransformState::default()
        });
        prop_assert_eq!(placement.skipped.len(), 1);
    }
}
