//! Cosine and sine coefficient sequences of a truncated series.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{ErrorInfo, FourierError};

fn coefficients_error(code: &str, message: impl Into<String>) -> FourierError {
    FourierError::InvalidCoefficients(ErrorInfo::new(code, message))
}

fn round_to_digits(value: f64, digits: i32) -> f64 {
    if digits <= 0 {
        return value;
    }
    let factor = 10f64.powi(digits);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}

#[derive(Deserialize)]
struct RawCoefficients {
    a: Vec<f64>,
    b: Vec<f64>,
}

/// Parallel cosine (`a`) and sine (`b`) coefficients.
///
/// Both sequences hold `count + 1` entries. `a[0]` is twice the mean of the
/// approximated function and `b[0]` is always zero; it only keeps the two
/// sequences index-aligned by harmonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoefficients")]
pub struct Coefficients {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl Coefficients {
    /// Creates a coefficient set after checking the length and alignment
    /// invariants.
    pub fn new(a: Vec<f64>, b: Vec<f64>) -> Result<Self, FourierError> {
        if a.len() != b.len() {
            return Err(FourierError::InvalidCoefficients(
                ErrorInfo::new("length-mismatch", "cosine and sine sequences differ in length")
                    .with_context("a_len", a.len())
                    .with_context("b_len", b.len()),
            ));
        }
        if a.len() < 2 {
            return Err(coefficients_error(
                "too-few-harmonics",
                "at least one harmonic beyond the constant term is required",
            ));
        }
        if b[0] != 0.0 {
            return Err(FourierError::InvalidCoefficients(
                ErrorInfo::new("nonzero-sine-constant", "b[0] must be zero")
                    .with_context("b0", b[0]),
            ));
        }
        Ok(Self { a, b })
    }

    /// Cosine coefficients, `a[0]` included.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Sine coefficients, `b[0] == 0` included.
    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Number of harmonics beyond the constant term.
    pub fn count(&self) -> usize {
        self.a.len() - 1
    }

    /// Returns `(a[n], b[n])`, or `None` past the last harmonic.
    pub fn harmonic(&self, n: usize) -> Option<(f64, f64)> {
        Some((*self.a.get(n)?, *self.b.get(n)?))
    }

    /// Largest absolute value across both sequences.
    pub fn max_abs(&self) -> f64 {
        self.a
            .iter()
            .chain(self.b.iter())
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Sums the series at the standard angle `t`.
    pub fn apply(&self, t: f64) -> f64 {
        let mut sum = self.a[0] / 2.0;
        for i in 1..self.a.len() {
            let angle = t * i as f64;
            if self.a[i] != 0.0 {
                sum += self.a[i] * angle.cos();
            }
            if self.b[i] != 0.0 {
                sum += self.b[i] * angle.sin();
            }
        }
        sum
    }

    /// Decimal places kept by [`Coefficients::simplify`] at `tolerance`,
    /// `ceil(log10(1 / (max_abs() · tolerance)))`. Non-positive values mean
    /// no rounding takes place.
    pub fn retained_digits(&self, tolerance: f64) -> Result<i32, FourierError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(FourierError::InvalidTolerance(
                ErrorInfo::new("non-positive-tolerance", "tolerance must be positive and finite")
                    .with_context("tolerance", tolerance),
            ));
        }
        let max_coef = self.max_abs();
        if max_coef == 0.0 || !max_coef.is_finite() {
            return Err(FourierError::DegenerateCoefficients(
                ErrorInfo::new(
                    "no-dominant-coefficient",
                    "simplification needs at least one nonzero finite coefficient",
                )
                .with_context("max_abs", max_coef),
            ));
        }
        Ok((1.0 / (max_coef * tolerance)).log10().ceil() as i32)
    }

    /// Zeroes coefficients that are negligible relative to the largest one
    /// and rounds the rest to the decimal digits the tolerance calls for.
    ///
    /// With `m = max_abs()`, coefficients with `|v| / m < tolerance` become
    /// exactly zero and the others are rounded to
    /// [`Coefficients::retained_digits`] decimal places.
    ///
    /// A second pass with the same tolerance is a no-op only when rounding
    /// kept the digit count and left every survivor at or above
    /// `tolerance` times the new maximum. Rounding the maximum across a power
    /// of ten, or a survivor sitting just above the threshold, breaks that.
    pub fn simplify(&mut self, tolerance: f64) -> Result<(), FourierError> {
        let digits = self.retained_digits(tolerance)?;
        let max_coef = self.max_abs();
        let mut zeroed = 0usize;
        for v in self.a.iter_mut().chain(self.b.iter_mut()) {
            if v.abs() / max_coef < tolerance {
                if *v != 0.0 {
                    zeroed += 1;
                }
                *v = 0.0;
            } else {
                *v = round_to_digits(*v, digits);
            }
        }
        debug!(max_coef, digits, zeroed, "simplified coefficients");
        Ok(())
    }
}

impl TryFrom<RawCoefficients> for Coefficients {
    type Error = FourierError;

    fn try_from(raw: RawCoefficients) -> Result<Self, Self::Error> {
        Coefficients::new(raw.a, raw.b)
    }
}
