//! Integer number theory primitives: greatest common divisors, divisors and
//! prime factorization.
//!
//! Several algorithms are provided for the greatest common divisor:
//! 1. [gcd_euclidean] by repeated remainder
//! 2. [gcd_binary] by Stein's algorithm
//! 3. [gcd_common_factors] as the largest element of [common_factors]
//! 4. [gcd_via_lcm] through `|a·b| / lcm(a, b)`
//!
//! They agree whenever the result is representable, and [GcdStrategy] selects one of them for [gcd_of_with].

mod factor;
mod gcd;

pub use factor::*;
pub use gcd::*;
