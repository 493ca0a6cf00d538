//! Arbitrary-precision integer parsing for the arithmetic primitives.
//!
//! Arithmetic operates on decimal strings with an optional leading sign;
//! anything that doesn't parse degrades to zero rather than erroring.

use num_bigint::BigInt;
use num_traits::Zero;

pub fn parse(s: &str) -> BigInt {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned.parse::<BigInt>().unwrap_or_else(|_| BigInt::zero())
}
