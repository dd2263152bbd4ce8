//! Internal algorithm modules for the real-order Bessel and gamma functions.
//!
//! Everything here is `pub(crate)`. The routines work on a single real
//! order and argument and return `Result<_, Error>`; saturation to 0 or ∞
//! is a value, not an error. Only a continued fraction or series that
//! runs out of iterations reports [`Error::ConvergenceFailure`].
//!
//! # Clippy suppressions
//!
//! Modules that carry coefficient tables allow
//! `clippy::excessive_precision`; the literals are kept at the precision
//! they were published with.
//!
//! [`Error::ConvergenceFailure`]: crate::types::Error::ConvergenceFailure

pub(crate) mod constants;
pub(crate) mod gamln;

// Temme's method: series at small x, continued fractions elsewhere
pub(crate) mod ratio;
pub(crate) mod steed;
pub(crate) mod temme;

// asymptotic regions
pub(crate) mod debye;
pub(crate) mod hankel;
