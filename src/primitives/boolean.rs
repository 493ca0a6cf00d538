//! Boolean (bit-string) primitives. A Boolean value is the maximal
//! trailing run of `0`/`1` characters in a string; anything else extracts
//! as empty.

use super::arg;

/// Extracts the maximal trailing run of `0`/`1` characters.
fn boolean_suffix(s: &str) -> Vec<bool> {
    s.chars()
        .rev()
        .take_while(|c| *c == '0' || *c == '1')
        .map(|c| c == '1')
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect()
}

fn render(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// `bu A B`: bitwise OR, shorter operand left-padded with zeros.
pub fn bu(args: &[String]) -> String {
    let a = boolean_suffix(arg(args, 0));
    let b = boolean_suffix(arg(args, 1));
    let len = a.len().max(b.len());
    let pad = |bits: &[bool]| {
        let mut out = vec![false; len - bits.len()];
        out.extend_from_slice(bits);
        out
    };
    let a = pad(&a);
    let b = pad(&b);
    render(&a.iter().zip(&b).map(|(x, y)| x | y).collect::<Vec<_>>())
}

/// `bi A B`: bitwise AND, longer operand truncated on the left.
pub fn bi(args: &[String]) -> String {
    let a = boolean_suffix(arg(args, 0));
    let b = boolean_suffix(arg(args, 1));
    let len = a.len().min(b.len());
    let a = &a[a.len() - len..];
    let b = &b[b.len() - len..];
    render(&a.iter().zip(b).map(|(x, y)| x & y).collect::<Vec<_>>())
}

/// `bc A`: bitwise NOT, length preserved.
pub fn bc(args: &[String]) -> String {
    let a = boolean_suffix(arg(args, 0));
    render(&a.iter().map(|x| !x).collect::<Vec<_>>())
}

/// `bs S A`: shift by signed `S` (positive = left, negative = right),
/// zero-fill, length preserved.
pub fn bs(args: &[String]) -> String {
    let s: i64 = arg(args, 0).parse().unwrap_or(0);
    let a = boolean_suffix(arg(args, 1));
    let len = a.len();
    if len == 0 {
        return String::new();
    }
    if s.unsigned_abs() as usize >= len {
        return render(&vec![false; len]);
    }
    let shift = s.unsigned_abs() as usize;
    let mut out = vec![false; len];
    if s > 0 {
        out[..len - shift].copy_from_slice(&a[shift..]);
    } else if s < 0 {
        out[shift..].copy_from_slice(&a[..len - shift]);
    } else {
        out = a;
    }
    render(&out)
}

/// `br S A`: circular rotate by signed `S` mod length, length preserved.
pub fn br(args: &[String]) -> String {
    let s: i64 = arg(args, 0).parse().unwrap_or(0);
    let a = boolean_suffix(arg(args, 1));
    let len = a.len();
    if len == 0 {
        return String::new();
    }
    let shift = s.rem_euclid(len as i64) as usize;
    if shift == 0 {
        return render(&a);
    }
    // Positive S rotates left: the first `shift` bits move to the tail.
    let mut out = Vec::with_capacity(len);
    out.extend_from_slice(&a[shift..]);
    out.extend_from_slice(&a[..shift]);
    render(&out)
}
