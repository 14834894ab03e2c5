//! Exact arithmetic on fractions and `n`-th root radicals over `i64`.
//!
//! The crate is organized bottom-up:
//! - [number_theory]: greatest common divisor strategies and prime factorization
//! - [lcm]: least common multiple, built on the former
//! - [fraction]: reduced fractions and mixed numbers
//! - [radical]: radicals `a × ⁿ√b` with simplification and cross-degree arithmetic
//!
//! Every fallible operation returns [Result] and reports integer overflow as
//! [ArithmeticError::Overflow] instead of wrapping.

mod error;
pub mod fraction;
pub mod lcm;
pub mod number_theory;
pub mod radical;
pub mod traits;

pub use error::{ArithmeticError, Result};
pub use fraction::{Fraction, MixedNumber};
pub use number_theory::GcdStrategy;
pub use radical::{Radical, RationalRadical};
pub use traits::{Approximation, Canonical, FromRoot};
