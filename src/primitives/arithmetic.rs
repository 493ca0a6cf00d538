//! Arbitrary-precision arithmetic and comparison primitives.

use num_bigint::BigInt;
use num_traits::Zero;

use super::arg;
use crate::bignum;

pub fn ad(args: &[String]) -> String {
    (bignum::parse(arg(args, 0)) + bignum::parse(arg(args, 1))).to_string()
}

pub fn su(args: &[String]) -> String {
    (bignum::parse(arg(args, 0)) - bignum::parse(arg(args, 1))).to_string()
}

pub fn ml(args: &[String]) -> String {
    (bignum::parse(arg(args, 0)) * bignum::parse(arg(args, 1))).to_string()
}

/// `dv A B`: truncating division; `B = 0` returns `"0"`.
pub fn dv(args: &[String]) -> String {
    let b = bignum::parse(arg(args, 1));
    if b.is_zero() {
        return "0".to_string();
    }
    (bignum::parse(arg(args, 0)) / b).to_string()
}

/// `eq A B T F`: plain string equality, not numeric.
pub fn eq(args: &[String]) -> String {
    if arg(args, 0) == arg(args, 1) {
        arg(args, 2).to_string()
    } else {
        arg(args, 3).to_string()
    }
}

pub fn gr(args: &[String]) -> String {
    let a: BigInt = bignum::parse(arg(args, 0));
    let b: BigInt = bignum::parse(arg(args, 1));
    if a > b {
        arg(args, 2).to_string()
    } else {
        arg(args, 3).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn basic_arithmetic() {
        assert_eq!(ad(&v(&["2", "3"])), "5");
        assert_eq!(su(&v(&["2", "3"])), "-1");
        assert_eq!(ml(&v(&["4", "5"])), "20");
        assert_eq!(dv(&v(&["7", "2"])), "3");
        assert_eq!(dv(&v(&["-7", "2"])), "-3");
    }

    #[test]
    fn division_by_zero_is_zero() {
        assert_eq!(dv(&v(&["5", "0"])), "0");
    }

    #[test]
    fn additive_inverse_identity() {
        // #(ad,A,#(su,0,A)) == "0" for every integer A.
        let neg_a = su(&v(&["0", "1025"]));
        let sum = bignum::parse(&ad(&v(&["1025", &neg_a])));
        assert_eq!(sum, num_bigint::BigInt::from(0));
    }

    #[test]
    fn eq_and_gr() {
        assert_eq!(eq(&v(&["x", "x", "T", "F"])), "T");
        assert_eq!(eq(&v(&["x", "y", "T", "F"])), "F");
        assert_eq!(gr(&v(&["5", "3", "T", "F"])), "T");
        assert_eq!(gr(&v(&["3", "5", "T", "F"])), "F");
    }
}
