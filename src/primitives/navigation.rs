//! Character-navigation primitives: all operate on a named form's pointer
//! in marker-free coordinate space, and all but `pf` use the force-active
//! override to deliver their fallback argument `Z` when the pointer would
//! escape the form's bounds.

use super::arg;
use crate::interpreter::Interpreter;

/// `cc N Z`: return and advance past one character, or fall back to `Z`.
pub fn cc(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0).to_string();
    let z = arg(args, 1).to_string();
    let Some(form) = interp.forms.get_mut(&name) else {
        interp.force_active = Some(z.clone());
        return z;
    };
    let l = form.body.literal_len();
    if form.pointer < l {
        let ch = form.body.literal_slice(form.pointer, form.pointer + 1);
        form.pointer += 1;
        ch
    } else {
        interp.force_active = Some(z.clone());
        z
    }
}

/// `cs N Z`: return and advance past the run up to the next marker or form
/// end, or fall back to `Z`.
pub fn cs(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0).to_string();
    let z = arg(args, 1).to_string();
    let Some(form) = interp.forms.get_mut(&name) else {
        interp.force_active = Some(z.clone());
        return z;
    };
    let l = form.body.literal_len();
    if form.pointer >= l {
        interp.force_active = Some(z.clone());
        return z;
    }
    let boundary = form
        .body
        .boundaries()
        .into_iter()
        .find(|&b| b > form.pointer)
        .unwrap_or(l);
    let text = form.body.literal_slice(form.pointer, boundary);
    form.pointer = boundary;
    text
}

/// `cn N D Z`: return and advance by signed distance `D`, or fall back to
/// `Z` when the range would overshoot the form.
pub fn cn(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0).to_string();
    let d: i64 = arg(args, 1).parse().unwrap_or(0);
    let z = arg(args, 2).to_string();

    if d == 0 {
        return String::new();
    }

    let Some(form) = interp.forms.get_mut(&name) else {
        interp.force_active = Some(z.clone());
        return z;
    };
    let l = form.body.literal_len() as i64;
    let pointer = form.pointer as i64;

    if d > 0 {
        let end = pointer + d;
        if end > l {
            interp.force_active = Some(z.clone());
            return z;
        }
        let text = form.body.literal_slice(pointer as usize, end as usize);
        form.pointer = end as usize;
        text
    } else {
        let start = pointer + d;
        if start < 0 {
            interp.force_active = Some(z.clone());
            return z;
        }
        let text = form.body.literal_slice(start as usize, pointer as usize);
        form.pointer = start as usize;
        text
    }
}

/// `in N X Z`: search for `X` from the pointer, skipping candidates that
/// would span a marker. Empty `X` matches immediately with no movement.
pub fn find_in(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0).to_string();
    let pattern = arg(args, 1).to_string();
    let z = arg(args, 2).to_string();

    if pattern.is_empty() {
        return String::new();
    }

    let Some(form) = interp.forms.get_mut(&name) else {
        interp.force_active = Some(z.clone());
        return z;
    };
    let l = form.body.literal_len();
    let pattern_len = pattern.chars().count();
    let markers = form.body.marker_positions();

    let mut start = form.pointer;
    while start + pattern_len <= l {
        let end = start + pattern_len;
        let candidate = form.body.literal_slice(start, end);
        let spans_marker = markers.iter().any(|&m| m > start && m < end);
        if !spans_marker && candidate == pattern {
            let prefix = form.body.literal_slice(form.pointer, start);
            form.pointer = end;
            return prefix;
        }
        start += 1;
    }
    interp.force_active = Some(z.clone());
    z
}

/// `pf N`: write a pretty-printed rendering of form `N` to the sink.
/// Null-valued; the only navigation primitive that side-effects the sink.
pub fn pf(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    if let Some(form) = interp.forms.get(name) {
        let rendered = form.body.pretty(form.pointer);
        interp.write_out(&rendered);
    }
    String::new()
}

/// `cr N` (the one-argument pointer-reset form): no-op if absent. Null-valued.
pub fn cr_reset(interp: &mut Interpreter, args: &[String]) -> String {
    let name = arg(args, 0);
    interp.forms.reset_pointer(name);
    String::new()
}
