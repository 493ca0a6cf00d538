//! Radix conversion and character-code primitives.

use num_bigint::BigUint;
use num_traits::Zero;

use super::arg;

/// A single base-36 digit character's value (`0`-`9` → 0-9, `A`-`Z` → 10-35),
/// or `None` if it isn't one.
fn digit_value(ch: char) -> Option<u32> {
    ch.to_digit(36)
}

/// The radix character itself is a digit interpreted as the base it names:
/// `0` → base 1, `9` → base 10, `F` → base 16, `Z` → base 36.
fn radix_value(ch: char) -> Option<u32> {
    digit_value(ch).map(|v| v + 1)
}

/// `cr R1 R2 V` (three-argument form): reinterpret `V`'s digits from base
/// `R1` into base `R2`. Invalid digits or bases yield `""`; zero is always
/// `"0"`. Arbitrary precision, matching the arithmetic primitives — a radix
/// conversion shouldn't silently fail just because `V` is large.
pub fn convert(args: &[String]) -> String {
    let r1 = arg(args, 0);
    let r2 = arg(args, 1);
    let v = arg(args, 2);

    let (Some(from_ch), Some(to_ch)) = (r1.chars().next(), r2.chars().next()) else {
        return String::new();
    };
    let (Some(from_base), Some(to_base)) = (radix_value(from_ch), radix_value(to_ch)) else {
        return String::new();
    };
    if from_base < 1 || to_base < 1 || from_base > 36 || to_base > 36 {
        return String::new();
    }

    let (negative, digits) = match v.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, v.strip_prefix('+').unwrap_or(v)),
    };
    if digits.is_empty() {
        return String::new();
    }

    let mut magnitude = BigUint::zero();
    let from_base_big = BigUint::from(from_base);
    for ch in digits.chars() {
        let Some(d) = digit_value(ch) else {
            return String::new();
        };
        if d >= from_base {
            return String::new();
        }
        magnitude = magnitude * &from_base_big + BigUint::from(d);
    }

    if magnitude.is_zero() {
        return "0".to_string();
    }

    let to_base_big = BigUint::from(to_base);
    let mut out = Vec::new();
    let mut rem = magnitude;
    while !rem.is_zero() {
        let (q, r) = (&rem / &to_base_big, &rem % &to_base_big);
        let d = r.iter_u32_digits().next().unwrap_or(0);
        out.push(std::char::from_digit(d, 36).unwrap().to_ascii_uppercase());
        rem = q;
    }
    out.reverse();
    let mut s: String = out.into_iter().collect();
    if negative {
        s.insert(0, '-');
    }
    s
}

/// `sl S`: decimal character count of `S`.
pub fn sl(args: &[String]) -> String {
    arg(args, 0).chars().count().to_string()
}

/// `cd C`: decimal code point of the first character of `C`, or `"0"`.
pub fn cd(args: &[String]) -> String {
    match arg(args, 0).chars().next() {
        Some(ch) => (ch as u32).to_string(),
        None => "0".to_string(),
    }
}

/// `dc N`: the single character with code point `N`, or `""` if out of range
/// or unparsable.
pub fn dc(args: &[String]) -> String {
    let n: Option<u32> = arg(args, 0).parse().ok();
    match n.and_then(char::from_u32) {
        Some(ch) => ch.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn decimal_to_hex() {
        assert_eq!(convert(&v(&["9", "F", "1025"])), "401");
    }

    #[test]
    fn round_trip_base_conversion() {
        let hex = convert(&v(&["9", "F", "1025"]));
        let back = convert(&v(&["F", "9", &hex]));
        assert_eq!(back, "1025");
    }

    #[test]
    fn zero_is_always_zero() {
        assert_eq!(convert(&v(&["9", "F", "0"])), "0");
    }

    #[test]
    fn invalid_digit_is_empty() {
        assert_eq!(convert(&v(&["9", "F", "A"])), "");
    }

    #[test]
    fn handles_values_larger_than_a_machine_word() {
        // 50! in decimal, converted to hex and back, exercises magnitudes
        // far beyond u128 to confirm the conversion is arbitrary precision.
        let fifty_factorial =
            "30414093201713378043612608166064768844377641568960512000000000000";
        let hex = convert(&v(&["9", "F", fifty_factorial]));
        let back = convert(&v(&["F", "9", &hex]));
        assert_eq!(back, fifty_factorial);
    }

    #[test]
    fn char_code_round_trip() {
        assert_eq!(cd(&v(&["A"])), "65");
        assert_eq!(dc(&v(&["65"])), "A");
        assert_eq!(sl(&v(&["hello"])), "5");
    }
}
