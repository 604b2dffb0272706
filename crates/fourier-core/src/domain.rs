//! Closed real interval on which a series is defined.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, FourierError};
use crate::{PI, TWO_PI};

fn domain_error(code: &str, message: impl Into<String>, start: f64, end: f64) -> FourierError {
    FourierError::InvalidDomain(
        ErrorInfo::new(code, message)
            .with_context("start", start)
            .with_context("end", end),
    )
}

#[derive(Deserialize)]
struct RawDomain {
    start: f64,
    end: f64,
}

/// Closed interval `[start, end]` with `start < end`.
///
/// The interval is mapped affinely onto the standard angle range `[-π, π]`
/// for quadrature and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDomain")]
pub struct Domain {
    start: f64,
    end: f64,
}

impl Domain {
    /// Creates a domain, rejecting non-finite or non-increasing bounds.
    pub fn new(start: f64, end: f64) -> Result<Self, FourierError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(domain_error(
                "non-finite-bounds",
                "domain bounds must be finite",
                start,
                end,
            ));
        }
        if start >= end {
            return Err(domain_error(
                "empty-domain",
                "domain start must be strictly below its end",
                start,
                end,
            ));
        }
        Ok(Self { start, end })
    }

    /// Lower bound.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Upper bound.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Width of the interval.
    pub fn range(&self) -> f64 {
        self.end - self.start
    }

    /// Centre of the interval.
    pub fn midpoint(&self) -> f64 {
        self.start + self.range() / 2.0
    }

    /// Whether `x` lies inside the closed interval.
    pub fn contains(&self, x: f64) -> bool {
        x >= self.start && x <= self.end
    }

    /// Maps `x` to the standard angle `t = (x - start) / range · 2π - π`.
    ///
    /// Values outside the domain map outside `[-π, π]`; callers relying on
    /// periodicity need no wrapping.
    pub fn to_angle(&self, x: f64) -> f64 {
        (x - self.start) / self.range() * TWO_PI - PI
    }

    /// Inverse of [`Domain::to_angle`].
    pub fn from_angle(&self, t: f64) -> f64 {
        (t + PI) / TWO_PI * self.range() + self.start
    }
}

impl TryFrom<RawDomain> for Domain {
    type Error = FourierError;

    fn try_from(raw: RawDomain) -> Result<Self, Self::Error> {
        Domain::new(raw.start, raw.end)
    }
}
