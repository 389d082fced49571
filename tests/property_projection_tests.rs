use std::f64::consts::TAU;

use proptest::prelude::*;
use radar_rs::core::{PolarProjector, Point, RadialScale, axis_angle};

proptest! {
    #[test]
    fn angular_gaps_always_sum_to_full_turn(count in 1usize..64) {
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
        prop_assert!((gap_sum - TAU).abs() <= 1e-9);
    }

    #[test]
    fn radial_scale_is_additive(
        radius in 1.0f64..10_000.0,
        a in 0.0f64..10.0,
        b in 0.0f64..10.0
    ) {
        let scale = RadialScale::new(radius).expect("valid scale");
        let left = scale.score_to_radius(a).expect("a") + scale.score_to_radius(b).expect("b");
        let right = scale.score_to_radius(a + b).expect("a+b");
        prop_assert!((left - right).abs() <= radius * 1e-12);
    }

    #[test]
    fn zero_score_always_projects_to_the_pole(
        angle in -100.0f64..100.0,
        cx in -1_000.0f64..1_000.0,
        cy in -1_000.0f64..1_000.0
    ) {
        let scale = RadialScale::new(250.0).expect("valid scale");
        let projector = PolarProjector::new(Point::new(cx, cy), scale);
        let point = projector.project(angle, 0.0).expect("projection");
        prop_assert!((point.x - cx).abs() <= 1e-9);
        prop_assert!((point.y - cy).abs() <= 1e-9);
    }

    #[test]
    fn projected_points_sit_at_the_scaled_radius(
        index in 0usize..16,
        count in 1usize..16,
        score in 0.0f64..10.0
    ) {
        prop_assume!(index < count);
        let scale = RadialScale::new(250.0).expect("valid scale");
        let center = Point::new(400.0, 400.0);
        let projector = PolarProjector::new(center, scale);

        let angle = axis_angle(index, count).expect("angle");
        let point = projector.project(angle, score).expect("projection");

        let distance = ((point.x - center.x).powi(2) + (point.y - center.y).powi(2)).sqrt();
        let expected = scale.score_to_radius(score).expect("radius");
        prop_assert!((distance - expected).abs() <= 1e-9);
    }
}
