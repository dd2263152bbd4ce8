//! Pure Rust confluent hypergeometric limit function 0F1(c; z) for real
//! order and argument.
//!
//! 0F1 is evaluated through the Bessel-function forms
//!
//! ```text
//! 0F1(c; z) = Γ(c) z^((1-c)/2) I_{c-1}(2√z)          z > 0
//! 0F1(c; z) = Γ(c) (-z)^((1-c)/2) J_{c-1}(2√(-z))    z < 0
//! ```
//!
//! with a uniform large-order expansion taking over wherever the closed
//! form would overflow or underflow, so that values such as 0F1(300; 50)
//! come out finite. The real-order Bessel and gamma functions it needs are
//! part of the crate and usable on their own.
//!
//! # Quick start
//!
//! ```
//! use hyp0f1::{hyp0f1, hyp0f1_raw, Regime};
//!
//! // 0F1(1/2; x²/4) = cosh x
//! let v = hyp0f1(0.5_f64, 0.25);
//! assert!((v - 1.0_f64.cosh()).abs() < 1e-14);
//!
//! // non-positive integer orders are defined as 0
//! assert_eq!(hyp0f1(-2.0_f64, 3.7), 0.0);
//!
//! // which branch produced a value
//! let r = hyp0f1_raw(300.0_f64, 50.0);
//! assert_eq!(r.regime, Regime::ModifiedAsymptotic);
//! ```
//!
//! # Custom primitives
//!
//! [`hyp0f1_with`] takes any [`Primitives`] implementation, so the Bessel
//! and gamma back end can be replaced without touching the branch logic.
//!
//! # `no_std` support
//!
//! Disable the default `std` feature for `no_std` builds. Math functions
//! then come from `libm` through `num-traits`, and [`SpecialFloat::fma`]
//! degrades to a separate multiply and add.
//!
//! ```toml
//! [dependencies]
//! hyp0f1 = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod algo;
mod asy;
mod besi;
mod besj;
mod hyp0f1;
pub mod machine;
mod primitives;
pub mod types;
mod utils;

pub use algo::gamln::{gamma, gammasgn, lgamma};
pub use asy::{hyp0f1_asy, hyp0f1_asy_with};
pub use besi::besseli;
pub use besj::besselj;
pub use hyp0f1::{hyp0f1, hyp0f1_raw, hyp0f1_with};
pub use machine::SpecialFloat;
pub use primitives::{Native, Primitives};
pub use types::{Error, Hyp0f1Result, Regime};
pub use utils::{cospi, sinpi, xlogy};
