//! Meta-character and I/O-bridge primitives. `rc`/`rs` read straight from
//! the interpreter's character source, bypassing the active buffer
//! entirely — they are the only primitives that can suspend.

use super::arg;
use crate::interpreter::Interpreter;

/// `qm`: current meta-character.
pub fn qm(interp: &mut Interpreter) -> String {
    interp.meta_char.to_string()
}

/// `cm X`: set the meta-character to the first character of `X`. Null-valued;
/// no-op if `X` is empty.
pub fn cm(interp: &mut Interpreter, args: &[String]) -> String {
    if let Some(ch) = arg(args, 0).chars().next() {
        interp.meta_char = ch;
    }
    String::new()
}

/// `ps X`: write `X` to the sink directly. Null-valued.
pub fn ps(interp: &mut Interpreter, args: &[String]) -> String {
    interp.write_out(arg(args, 0));
    String::new()
}

/// `rc`: read and return the next character from the source. Signals halt
/// (and returns empty) when the source is drained in non-interactive mode;
/// in interactive mode the underlying source blocks instead.
pub fn rc(interp: &mut Interpreter) -> String {
    match interp.next_source_char() {
        Some(ch) => ch.to_string(),
        None => {
            tracing::info!("source exhausted during rc, halting");
            interp.halted = true;
            String::new()
        }
    }
}

/// `rs`: read characters until the meta-character is seen (excluded from the
/// result), or the source is drained. End-of-source with nothing read halts;
/// end-of-source after reading something returns what was accumulated.
pub fn rs(interp: &mut Interpreter) -> String {
    let mut out = String::new();
    loop {
        match interp.next_source_char() {
            Some(ch) if ch == interp.meta_char => break,
            Some(ch) => out.push(ch),
            None => {
                if out.is_empty() {
                    tracing::info!("source exhausted during rs with nothing read, halting");
                    interp.halted = true;
                }
                break;
            }
        }
    }
    out
}

/// `hl`: signal halt. Null-valued.
pub fn hl(interp: &mut Interpreter) -> String {
    interp.halted = true;
    String::new()
}

/// `tn`: enable tracing. Null-valued.
pub fn tn(interp: &mut Interpreter) -> String {
    interp.trace = true;
    String::new()
}

/// `tf`: disable tracing. Null-valued.
pub fn tf(interp: &mut Interpreter) -> String {
    interp.trace = false;
    String::new()
}
