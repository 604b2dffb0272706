use fourier_core::errors::{ErrorInfo, FourierError};
use fourier_core::{Coefficients, PI, TWO_PI};
use tracing::{debug, trace};

/// Relative distance from an integer below which `2π / step` counts as exact.
const SNAP_TOLERANCE: f64 = 1e-12;

pub(crate) fn count_error(count: usize) -> FourierError {
    FourierError::InvalidSeriesCount(
        ErrorInfo::new("zero-series-count", "series count must be positive")
            .with_context("count", count),
    )
}

pub(crate) fn check_step(step: f64) -> Result<(), FourierError> {
    if step.is_finite() && step > 0.0 {
        return Ok(());
    }
    Err(FourierError::InvalidStep(
        ErrorInfo::new("non-positive-step", "integration step must be positive and finite")
            .with_context("step", step),
    ))
}

/// Number of left Riemann samples `-π + k·step` lying strictly below `π`.
fn sample_count(step: f64) -> usize {
    let quotient = TWO_PI / step;
    let nearest = quotient.round();
    if nearest >= 1.0 && (quotient - nearest).abs() <= SNAP_TOLERANCE * nearest {
        nearest as usize
    } else {
        quotient.ceil() as usize
    }
}

/// Estimates `count` harmonics of `f`, a function on the standard angle
/// range `[-π, π]`, by left Riemann sums with the given `step`.
///
/// `f` is evaluated once per sample point and every harmonic is accumulated
/// from that single pass. The result holds `count + 1` cosine and sine
/// coefficients with `b[0] == 0`. Coarse steps are accepted and simply give
/// poor estimates.
pub fn estimate<F>(f: F, count: usize, step: f64) -> Result<Coefficients, FourierError>
where
    F: Fn(f64) -> f64,
{
    if count == 0 {
        return Err(count_error(count));
    }
    check_step(step)?;

    let samples = sample_count(step);
    debug!(count, step, samples, "estimating fourier coefficients");

    let mut a = vec![0.0; count + 1];
    let mut b = vec![0.0; count + 1];
    for k in 0..samples {
        let x = -PI + k as f64 * step;
        let weighted = step * f(x);
        for n in 0..=count {
            let angle = n as f64 * x;
            a[n] += weighted * angle.cos();
            if n > 0 {
                b[n] += weighted * angle.sin();
            }
        }
    }
    for v in a.iter_mut().chain(b.iter_mut()) {
        *v /= PI;
    }
    trace!(?a, ?b, "estimated coefficients");

    Coefficients::new(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_divisions_do_not_gain_a_sample() {
        assert_eq!(sample_count(TWO_PI / 10.0), 10);
        assert_eq!(sample_count(TWO_PI / 7.0), 7);
        assert_eq!(sample_count(0.5), 13);
        assert_eq!(sample_count(100.0), 1);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(matches!(
            estimate(|x| x, 0, 0.1),
            Err(FourierError::InvalidSeriesCount(_))
        ));
        assert!(matches!(
            estimate(|x| x, 2, 0.0),
            Err(FourierError::InvalidStep(_))
        ));
        assert!(matches!(
            estimate(|x| x, 2, f64::NAN),
            Err(FourierError::InvalidStep(_))
        ));
    }

    #[test]
    fn cosine_lands_on_first_harmonic() {
        let coeffs = estimate(f64::cos, 4, TWO_PI / 32.0).unwrap();
        assert!((coeffs.a()[1] - 1.0).abs() < 1e-9);
        for n in [0, 2, 3, 4] {
            assert!(coeffs.a()[n].abs() < 1e-9, "a[{n}] = {}", coeffs.a()[n]);
        }
        assert!(coeffs.b().iter().all(|v| v.abs() < 1e-9));
        assert_eq!(coeffs.b()[0], 0.0);
    }
}
