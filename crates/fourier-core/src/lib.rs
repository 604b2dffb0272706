#![deny(missing_docs)]
#![doc = "Core data types for truncated Fourier series: domains, coefficient sequences and the shared error type."]

pub mod coefficients;
pub mod domain;
pub mod errors;

pub use coefficients::Coefficients;
pub use domain::Domain;
pub use errors::{ErrorInfo, FourierError};

/// Circle constant used by every angular mapping in the workspace.
pub const PI: f64 = std::f64::consts::PI;

/// One full period of the standard angle range.
pub const TWO_PI: f64 = 2.0 * PI;
