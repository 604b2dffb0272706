use fourier_core::errors::{ErrorInfo, FourierError};
use fourier_core::{Coefficients, Domain};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("count", 0)
        .with_context("reason", "example")
}

#[test]
fn series_count_error_surface() {
    let err = FourierError::InvalidSeriesCount(sample_info("F001", "count must be positive"));
    assert_eq!(err.info().code, "F001");
    assert_eq!(err.info().context.get("count").map(String::as_str), Some("0"));
}

#[test]
fn display_includes_context() {
    let err = FourierError::InvalidStep(
        ErrorInfo::new("non-positive-step", "bad step").with_context("step", -1.5),
    );
    assert_eq!(
        err.to_string(),
        "invalid step: bad step (code: non-positive-step) | context: [step=-1.5]"
    );
}

#[test]
fn coefficient_invariants_are_enforced() {
    let err = Coefficients::new(vec![1.0, 2.0], vec![0.0]).unwrap_err();
    assert!(matches!(err, FourierError::InvalidCoefficients(_)));
    assert_eq!(err.info().code, "length-mismatch");

    let err = Coefficients::new(vec![1.0], vec![0.0]).unwrap_err();
    assert_eq!(err.info().code, "too-few-harmonics");

    let err = Coefficients::new(vec![1.0, 2.0], vec![0.5, 1.0]).unwrap_err();
    assert_eq!(err.info().code, "nonzero-sine-constant");
    assert_eq!(err.info().context.get("b0").map(String::as_str), Some("0.5"));
}

#[test]
fn domain_invariants_are_enforced() {
    assert!(matches!(
        Domain::new(2.0, 1.0),
        Err(FourierError::InvalidDomain(_))
    ));
    let err = Domain::new(f64::NEG_INFINITY, 1.0).unwrap_err();
    assert_eq!(err.info().code, "non-finite-bounds");
}

#[test]
fn simplify_error_surface() {
    let mut zeros = Coefficients::new(vec![0.0; 4], vec![0.0; 4]).unwrap();
    let err = zeros.simplify(0.01).unwrap_err();
    assert!(matches!(err, FourierError::DegenerateCoefficients(_)));

    let mut coeffs = Coefficients::new(vec![1.0, 0.5], vec![0.0, 0.25]).unwrap();
    for tolerance in [0.0, -0.1, f64::NAN, f64::INFINITY] {
        let err = coeffs.simplify(tolerance).unwrap_err();
        assert!(matches!(err, FourierError::InvalidTolerance(_)));
    }
    assert_eq!(coeffs.a(), &[1.0, 0.5]);
}
