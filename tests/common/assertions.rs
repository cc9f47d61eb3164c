use approx::assert_relative_eq;
use wing_aero::IntegralResult;

/// Assert that the refined segments tile the integration domain
#[track_caller]
pub fn assert_segments_contiguous(result: &IntegralResult) {
    assert!(!result.segments.is_empty(), "{} has no segments", result.quantity);
    for pair in result.segments.windows(2) {
        assert_relative_eq!(pair[0].upper, pair[1].lower, epsilon = 1e-12);
        assert!(pair[0].lower < pair[0].upper, "empty segment in {}", result.quantity);
    }
}

/// Assert that the reported value is the factor times the sum of the segment
/// integrals
#[track_caller]
pub fn assert_integral_consistent(result: &IntegralResult) {
    assert_segments_contiguous(result);

    let sum: f64 = result.segments.iter().map(|s| s.value).sum();
    assert_relative_eq!(result.integral, sum, epsilon = 1e-12, max_relative = 1e-12);
    assert_relative_eq!(
        result.value,
        result.factor * result.integral,
        epsilon = 1e-12,
        max_relative = 1e-12
    );

    // each segment value is its antiderivative difference
    for segment in &result.segments {
        let exact = segment.antiderivative.evaluate(segment.upper)
            - segment.antiderivative.evaluate(segment.lower);
        assert_relative_eq!(segment.value, exact, epsilon = 1e-10, max_relative = 1e-10);
    }
}
