use fourier_core::errors::{ErrorInfo, FourierError};
use fourier_core::{Coefficients, Domain};

#[test]
fn coefficients_round_trip_json() {
    let coeffs = Coefficients::new(vec![1.5, -0.25, 0.125], vec![0.0, 2.0, -3.0]).unwrap();
    let json = serde_json::to_string_pretty(&coeffs).expect("serialize");
    let decoded: Coefficients = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, coeffs);
}

#[test]
fn domain_round_trip_json() {
    let domain = Domain::new(-1.25, 8.0).unwrap();
    let json = serde_json::to_string(&domain).expect("serialize");
    assert_eq!(json, r#"{"start":-1.25,"end":8.0}"#);
    let decoded: Domain = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, domain);
}

#[test]
fn invalid_payloads_are_rejected() {
    let bad_domain = serde_json::from_str::<Domain>(r#"{"start":3.0,"end":1.0}"#);
    assert!(bad_domain.is_err());

    let bad_coeffs = serde_json::from_str::<Coefficients>(r#"{"a":[1.0,2.0],"b":[1.0,0.0]}"#);
    assert!(bad_coeffs.is_err());
}

#[test]
fn errors_round_trip_json() {
    let err = FourierError::DegenerateCoefficients(
        ErrorInfo::new("no-dominant-coefficient", "all zero").with_context("max_abs", 0.0),
    );
    let json = serde_json::to_string(&err).expect("serialize");
    let decoded: FourierError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
