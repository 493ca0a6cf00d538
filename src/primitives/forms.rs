//! Form definition, segmentation, and listing primitives.

use super::arg;
use crate::interpreter::Interpreter;

/// `ds N B`: define/replace form `N`, resetting its pointer to 0. Null-valued.
pub fn ds(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    let body = arg(args, 1);
    if !name.is_empty() {
        interp.forms.define(name, body);
    }
    String::new()
}

/// `ss N P1 P2 …`: segment form `N` on each non-empty pattern in order.
/// Null-valued.
pub fn ss(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    let Some(form) = interp.forms.get_mut(name) else {
        return String::new();
    };
    for (i, pattern) in args.iter().skip(1).enumerate() {
        if !pattern.is_empty() {
            form.body.apply_segmentation(pattern, (i + 1) as u32);
        }
    }
    String::new()
}

/// `cl N A1 A2 …`: render form `N` with markers substituted positionally.
pub fn cl(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    match interp.forms.get(name) {
        Some(form) => form.body.render(&args[1.min(args.len())..]),
        None => String::new(),
    }
}

/// `ln S`: form names joined by `S`, in insertion order.
pub fn ln(interp: &mut Interpreter, args: &[String]) -> String {
    interp.forms.names_joined(arg(args, 0))
}

/// `dd N1 N2 …`: delete the named forms. Null-valued.
pub fn dd(interp: &mut Interpreter, args: &[String]) -> String {
    for name in args {
        if !name.is_empty() {
            interp.forms.delete(name);
        }
    }
    String::new()
}

/// `da`: delete all forms. Null-valued.
pub fn da(interp: &mut Interpreter, _args: &[String]) -> String {
    interp.forms.delete_all();
    String::new()
}

/// `sr N`: if any marker index from 1 to the maximum observed is missing,
/// return the maximum; else `"0"` (also `"0"` for an absent or marker-less
/// form).
pub fn sr(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    let Some(form) = interp.forms.get(name) else {
        return "0".to_string();
    };
    let max = form.body.max_marker();
    if max == 0 {
        return "0".to_string();
    }
    let present = form.body.marker_set();
    for i in 1..=max {
        if !present.contains(&i) {
            return max.to_string();
        }
    }
    "0".to_string()
}
