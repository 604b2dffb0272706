//! Quadrature-based truncated Fourier series.
//!
//! [`fourier_expand`] integrates a caller supplied function against the
//! cosine and sine basis and returns a [`FourierExpansion`] that can be
//! evaluated, simplified and rendered as a formula.

pub mod estimator;
pub mod expansion;
pub mod hash;
pub mod render;

pub use estimator::estimate;
pub use expansion::{fourier_expand, fourier_expand_with, ExpandOpts, FourierExpansion};
pub use fourier_core::{Coefficients, Domain, ErrorInfo, FourierError, PI, TWO_PI};
pub use hash::stable_hash_string;
pub use render::{render_expression, RenderOpts};
