use radar_rs::core::{RadialScale, SCORE_MAX, SCORE_MIN};

#[test]
fn score_domain_endpoints_map_exactly() {
    let scale = RadialScale::new(250.0).expect("valid scale");

    assert_eq!(scale.score_to_radius(SCORE_MIN).expect("zero"), 0.0);
    assert_eq!(scale.score_to_radius(SCORE_MAX).expect("max"), 250.0);
}

#[test]
fn scale_is_linear() {
    let scale = RadialScale::new(250.0).expect("valid scale");

    let half = scale.score_to_radius(5.0).expect("half");
    assert_eq!(half, 125.0);

    let a = scale.score_to_radius(3.0).expect("a");
    let b = scale.score_to_radius(4.0).expect("b");
    let sum = scale.score_to_radius(7.0).expect("sum");
    assert!((a + b - sum).abs() <= 1e-9);
}

#[test]
fn scale_is_monotonic_across_the_domain() {
    let scale = RadialScale::new(250.0).expect("valid scale");

    let mut previous = scale.score_to_radius(0.0).expect("radius");
    for step in 1..=20 {
        let radius = scale.score_to_radius(step as f64 * 0.5).expect("radius");
        assert!(radius > previous);
        previous = radius;
    }
}

#[test]
fn out_of_domain_scores_extrapolate() {
    let scale = RadialScale::new(250.0).expect("valid scale");

    let beyond = scale.score_to_radius(12.0).expect("beyond");
    assert_eq!(beyond, 300.0);

    let negative = scale.score_to_radius(-1.0).expect("negative");
    assert_eq!(negative, -25.0);
}

#[test]
fn radius_round_trip_within_tolerance() {
    let scale = RadialScale::new(250.0).expect("valid scale");

    let original = 7.3;
    let radius = scale.score_to_radius(original).expect("to radius");
    let recovered = scale.radius_to_score(radius).expect("from radius");
    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn invalid_radius_is_rejected() {
    assert!(RadialScale::new(0.0).is_err());
    assert!(RadialScale::new(-5.0).is_err());
    assert!(RadialScale::new(f64::NAN).is_err());
}

#[test]
fn non_finite_score_is_rejected() {
    let scale = RadialScale::new(250.0).expect("valid scale");
    assert!(scale.score_to_radius(f64::NAN).is_err());
    assert!(scale.score_to_radius(f64::INFINITY).is_err());
}
