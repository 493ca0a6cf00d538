//! The rewrite loop: scan, open/close calls, dispatch, deliver.
//!
//! The scanner's dispatch over the active buffer is implemented here, with
//! one structural simplification: protective-paren tracking and
//! call-argument tracking share a single "current depth" concept —
//! `CallFrame::paren_depth` when a call is open, or
//! `ScannerState::top_paren_depth` at top level — so `(`/`)` nesting is
//! handled uniformly whether or not a call happens to be in progress.

use crate::interpreter::Interpreter;
use crate::scanner::CallMode;

/// Characters deleted on sight regardless of scanner state. The current
/// meta-character is checked separately since it's mutable (`cm`).
fn is_fixed_terminator(ch: char) -> bool {
    matches!(ch, '\t' | '\n' | '\r')
}

impl Interpreter {
    /// Runs until the halt flag is set: `hl`, or (non-interactive) the
    /// active buffer running dry with nothing to reseed it.
    pub fn run(&mut self) {
        let bootstrap = self.initial_program.clone();
        self.scanner.active.append(&bootstrap);
        while !self.halted {
            match self.scanner.active.pop() {
                Some(ch) => self.scan_step(ch),
                None => self.handle_exhaustion(),
            }
        }
    }

    /// Active buffer ran dry. An unresolved call or protective paren means
    /// the record was malformed — abandon it rather than silently halting
    /// mid-parse. Otherwise the record ended cleanly: all scan state
    /// (including whatever top-level text never made it into an open `ps`
    /// argument) is cleared between records — there is no implicit flush
    /// of the neutral buffer to the sink; only `ps` ever writes to it.
    /// Then reseed (interactive) or halt (batch).
    fn handle_exhaustion(&mut self) {
        if self.scanner.in_call() || self.scanner.in_protective_paren() {
            tracing::warn!("unbalanced call or parenthesis at end of source; abandoning record");
            self.scanner.abandon_record();
            return;
        }
        if !self.scanner.neutral.is_empty() {
            tracing::trace!(
                text = %self.scanner.neutral,
                "discarding unclaimed top-level text at record boundary"
            );
            self.scanner.neutral.clear();
        }
        if self.interactive {
            let bootstrap = self.initial_program.clone();
            self.scanner.active.append(&bootstrap);
        } else {
            tracing::info!("active buffer exhausted, halting");
            self.halted = true;
        }
    }

    fn scan_step(&mut self, ch: char) {
        if ch == self.meta_char || is_fixed_terminator(ch) {
            return;
        }

        let depth = match self.scanner.frames.last() {
            Some(frame) => frame.paren_depth,
            None => self.scanner.top_paren_depth,
        };
        if depth > 0 {
            self.scan_in_protective_paren(ch, depth);
            return;
        }

        if ch == '(' {
            self.set_paren_depth(1);
            return;
        }
        if ch == '#' {
            self.scan_hash();
            return;
        }
        if self.scanner.in_call() {
            match ch {
                ',' => self.scanner.frames.last_mut().unwrap().close_argument(),
                ')' => self.close_call(),
                _ => self.scanner.emit(ch),
            }
        } else if ch == ')' {
            tracing::warn!("stray ')' outside any open call; abandoning record");
            self.scanner.abandon_record();
        } else {
            self.scanner.emit(ch);
        }
    }

    /// Within an unmatched `(`: track nesting, copy everything else
    /// (including what would otherwise be call/comma syntax) verbatim.
    fn scan_in_protective_paren(&mut self, ch: char, depth: u32) {
        match ch {
            '(' => {
                self.scanner.emit(ch);
                self.set_paren_depth(depth + 1);
            }
            ')' => {
                if depth > 1 {
                    self.scanner.emit(ch);
                }
                self.set_paren_depth(depth - 1);
            }
            _ => self.scanner.emit(ch),
        }
    }

    fn set_paren_depth(&mut self, depth: u32) {
        match self.scanner.frames.last_mut() {
            Some(frame) => frame.paren_depth = depth,
            None => self.scanner.top_paren_depth = depth,
        }
    }

    /// Having just consumed a `#`, determine whether it opens an active
    /// call (`#(`), a neutral call (`##(`), or was just a literal `#`.
    /// Lookahead only — nothing is consumed on a non-match, so a lone `#`
    /// never swallows what follows it.
    fn scan_hash(&mut self) {
        let active = &mut self.scanner.active;
        if active.peek() == Some('#') && active.peek_nth(1) == Some('(') {
            active.pop();
            active.pop();
            self.scanner
                .frames
                .push(crate::scanner::CallFrame::new(CallMode::Neutral));
            return;
        }
        if active.peek() == Some('(') {
            active.pop();
            self.scanner
                .frames
                .push(crate::scanner::CallFrame::new(CallMode::Active));
            return;
        }
        self.scanner.emit('#');
    }

    /// Closes the innermost call: dispatches to a user form or a
    /// primitive, applies any pending force-active override, and delivers
    /// the result either to the active buffer (rescanned) or straight to
    /// the enclosing neutral accumulator.
    fn close_call(&mut self) {
        let frame = self.scanner.frames.pop().expect("in_call checked by caller");
        let args = frame.all_args();
        let name = args.first().cloned().unwrap_or_default();
        let rest_args: &[String] = if args.len() > 1 { &args[1..] } else { &[] };

        if self.trace {
            tracing::debug!(call = %name, args = ?rest_args, "dispatch");
        }
        let rewrite = self.dispatch(&name, rest_args);
        if self.halted {
            return;
        }

        let (text, forced) = match self.force_active.take() {
            Some(override_text) => (override_text, true),
            None => (rewrite, false),
        };
        if forced || matches!(frame.mode, CallMode::Active) {
            self.scanner.active.splice_front(&text);
        } else {
            self.scanner.emit_str(&text);
        }
    }

    /// Form-shadows-primitive: a user-defined form named like a primitive
    /// is called in place of it.
    fn dispatch(&mut self, name: &str, args: &[String]) -> String {
        if let Some(form) = self.forms.get(name) {
            return form.body.render(args);
        }
        crate::primitives::call(self, name, args)
    }
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{BatchSource, Interpreter};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn run_and_capture(source_text: &str) -> String {
        let buf = Rc::new(RefCell::new(String::new()));
        let source = Box::new(BatchSource::new(source_text));
        let sink = Box::new(buf.clone());
        let mut interp = Interpreter::new(source, sink);
        interp.run();
        let out = buf.borrow().clone();
        out
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(run_and_capture("hello world'"), "hello world");
    }

    #[test]
    fn trailing_record_after_meta_is_not_executed() {
        assert_eq!(run_and_capture("abc'xyz"), "abc");
    }

    #[test]
    fn active_call_rewrites_inline() {
        let out = run_and_capture("#(ds,greeting,hi)#(cl,greeting)'");
        assert_eq!(out, "hi");
    }

    #[test]
    fn neutral_call_copies_result_without_rescanning() {
        let out = run_and_capture("##(ds,greeting,hi)done'");
        assert_eq!(out, "done");
    }

    #[test]
    fn stray_close_paren_abandons_record_without_halting() {
        assert_eq!(run_and_capture(")abc'"), "");
    }

    #[test]
    fn form_shadows_primitive() {
        let out = run_and_capture("#(ds,ds,shadowed)#(ds,x,y)'");
        assert_eq!(out, "shadowed");
    }

    #[test]
    fn explicit_ps_writes_directly() {
        assert_eq!(run_and_capture("#(ps,(ABC))'"), "ABC");
    }

    #[test]
    fn rs_continues_reading_the_same_source_after_the_bootstrap_record() {
        let out = run_and_capture("#(ps,] )#(ps,#(rs))'XYZ'");
        assert_eq!(out, "] XYZ");
    }

    #[test]
    fn protective_parens_hide_commas_and_calls() {
        let out = run_and_capture("#(ps,(a,b#(ds,x,y)))'");
        assert_eq!(out, "a,b#(ds,x,y)");
    }

    #[test]
    fn lone_hash_is_literal() {
        assert_eq!(run_and_capture("a#b'"), "a#b");
    }
}
