use std::fmt;

use fourier_core::errors::{ErrorInfo, FourierError};
use fourier_core::{Coefficients, Domain};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::estimator::{check_step, count_error, estimate};
use crate::hash::stable_hash_string;
use crate::render::{render_expression, RenderOpts};

/// The default quadrature step is the domain width divided by this.
const DEFAULT_STEP_DIVISOR: f64 = 10.0;

fn default_count() -> usize {
    5
}

/// Options describing how a function is expanded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpandOpts {
    /// Number of harmonics beyond the constant term.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Quadrature step on the normalized angle scale; a tenth of the domain
    /// width when absent.
    #[serde(default)]
    pub step: Option<f64>,
}

impl Default for ExpandOpts {
    fn default() -> Self {
        Self {
            count: default_count(),
            step: None,
        }
    }
}

/// Truncated Fourier series bound to the domain it approximates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FourierExpansion {
    coefficients: Coefficients,
    domain: Domain,
}

impl FourierExpansion {
    /// Bundles precomputed coefficients with their domain.
    pub fn new(coefficients: Coefficients, domain: Domain) -> Self {
        Self {
            coefficients,
            domain,
        }
    }

    /// Series coefficients.
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Domain the series was fitted on.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Evaluates the series at `x`. Points outside the domain follow the
    /// periodic extension.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.apply(self.domain.to_angle(x))
    }

    /// Evaluates the series at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Evaluates the series on `points` evenly spaced abscissae spanning the
    /// closed domain, endpoints included.
    pub fn sample(&self, points: usize) -> Result<Vec<(f64, f64)>, FourierError> {
        if points < 2 {
            return Err(FourierError::InvalidSampleCount(
                ErrorInfo::new("too-few-points", "a sampling grid needs both endpoints")
                    .with_context("points", points),
            ));
        }
        let spacing = self.domain.range() / (points - 1) as f64;
        let samples = (0..points)
            .map(|idx| {
                let x = if idx == points - 1 {
                    self.domain.end()
                } else {
                    self.domain.start() + idx as f64 * spacing
                };
                (x, self.evaluate(x))
            })
            .collect();
        Ok(samples)
    }

    /// Rounds and truncates the coefficients in place, see
    /// [`Coefficients::simplify`]. The domain and harmonic count are kept.
    pub fn simplify(&mut self, tolerance: f64) -> Result<(), FourierError> {
        self.coefficients.simplify(tolerance)
    }

    /// Human readable formula with default number formatting.
    pub fn expression(&self) -> String {
        self.expression_with(&RenderOpts::default())
    }

    /// Human readable formula using the supplied rendering options.
    pub fn expression_with(&self, opts: &RenderOpts) -> String {
        render_expression(&self.coefficients, &self.domain, opts)
    }

    /// SHA-256 digest of the canonical JSON form of the expansion.
    pub fn fingerprint(&self) -> Result<String, FourierError> {
        stable_hash_string(self)
    }
}

impl fmt::Display for FourierExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression())
    }
}

/// Expands `f` over `domain` into `count` harmonics.
///
/// The function is first composed with the affine map taking `[-π, π]` onto
/// the domain, then integrated with a left Riemann sum. `step` is taken on
/// the normalized `[-π, π]` scale and defaults to a tenth of the domain
/// width, so wide domains get coarse default sampling.
pub fn fourier_expand<F>(
    f: F,
    domain: Domain,
    count: usize,
    step: Option<f64>,
) -> Result<FourierExpansion, FourierError>
where
    F: Fn(f64) -> f64,
{
    if count == 0 {
        return Err(count_error(count));
    }
    let step = step.unwrap_or(domain.range() / DEFAULT_STEP_DIVISOR);
    check_step(step)?;
    debug!(
        start = domain.start(),
        end = domain.end(),
        count,
        step,
        "expanding function"
    );

    let normalized = |t: f64| f(domain.from_angle(t));
    let coefficients = estimate(normalized, count, step)?;
    Ok(FourierExpansion::new(coefficients, domain))
}

/// Expands `f` over `domain` using the harmonic count and step from `opts`.
pub fn fourier_expand_with<F>(
    f: F,
    domain: Domain,
    opts: &ExpandOpts,
) -> Result<FourierExpansion, FourierError>
where
    F: Fn(f64) -> f64,
{
    fourier_expand(f, domain, opts.count, opts.step)
}
