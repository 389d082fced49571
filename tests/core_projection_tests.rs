use std::f64::consts::{FRAC_PI_2, TAU};

use approx::assert_abs_diff_eq;
use radar_rs::core::{PolarProjector, Point, RadialScale, axis_angle};

fn projector() -> PolarProjector {
    let scale = RadialScale::new(250.0).expect("valid scale");
    PolarProjector::new(Point::new(400.0, 400.0), scale)
}

#[test]
fn axis_zero_points_straight_up() {
    let angle = axis_angle(0, 5).expect("angle");
    assert_eq!(angle, FRAC_PI_2);

    let tip = projector().project(angle, 10.0).expect("tip");
    assert_abs_diff_eq!(tip.x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tip.y, 150.0, epsilon = 1e-9);
}

#[test]
fn angular_gaps_sum_to_full_turn() {
    let count = 7;
    let mut gap_sum = 0.0;
    for index in 0..count {
        let here = axis_angle(index, count).expect("angle");
        let next = axis_angle((index + 1) % count, count).expect("angle");
        let mut gap = next - here;
        if gap <= 0.0 {
            gap += TAU;
        }
        gap_sum += gap;
    }
    assert_abs_diff_eq!(gap_sum, TAU, epsilon = 1e-9);
}

#[test]
fn zero_score_projects_to_center_for_any_angle() {
    let projector = projector();
    for index in 0..12 {
        let angle = axis_angle(index, 12).expect("angle");
        let point = projector.project(angle, 0.0).expect("center");
        assert_abs_diff_eq!(point.x, 400.0, epsilon = 1e-9);
        assert_abs_diff_eq!(point.y, 400.0, epsilon = 1e-9);
    }
}

#[test]
fn four_full_scores_form_a_square() {
    let projector = projector();
    let expected = [
        (400.0, 150.0),
        (150.0, 400.0),
        (400.0, 650.0),
        (650.0, 400.0),
    ];

    for (index, (x, y)) in expected.iter().enumerate() {
        let angle = axis_angle(index, 4).expect("angle");
        let vertex = projector.project(angle, 10.0).expect("vertex");
        assert_abs_diff_eq!(vertex.x, *x, epsilon = 1e-9);
        assert_abs_diff_eq!(vertex.y, *y, epsilon = 1e-9);
    }
}

#[test]
fn two_axis_half_and_zero_scores() {
    let projector = projector();

    let first = projector
        .project(axis_angle(0, 2).expect("angle"), 5.0)
        .expect("first");
    assert_abs_diff_eq!(first.x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(first.y, 275.0, epsilon = 1e-9);

    let second = projector
        .project(axis_angle(1, 2).expect("angle"), 0.0)
        .expect("second");
    assert_abs_diff_eq!(second.x, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.y, 400.0, epsilon = 1e-9);
}

#[test]
fn axis_angle_rejects_degenerate_inputs() {
    assert!(axis_angle(0, 0).is_err());
    assert!(axis_angle(3, 3).is_err());
}

#[test]
fn single_axis_chart_is_valid() {
    let angle = axis_angle(0, 1).expect("angle");
    assert_eq!(angle, FRAC_PI_2);
}
