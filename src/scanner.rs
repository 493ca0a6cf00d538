//! The active buffer, neutral buffer, and call-frame stack that drive the
//! rewrite loop.

use std::collections::VecDeque;

/// The text still waiting to be scanned. Rewritten text is spliced back in
/// at the front rather than re-appended at the end, so a form's own
/// expansion is scanned before anything that followed it in the source.
#[derive(Debug, Default)]
pub struct ActiveBuffer {
    chars: VecDeque<char>,
}

impl ActiveBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.front().copied()
    }

    /// The character `n` positions past the front, without consuming
    /// anything. Used by the scanner's lookahead for `#(` vs `##(`.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(n).copied()
    }

    pub fn pop(&mut self) -> Option<char> {
        self.chars.pop_front()
    }

    /// Splice text back in at the scan position, so it is the next thing
    /// read. Used to deliver a primitive's rewrite result and to reseed
    /// the buffer from an interactive source.
    pub fn splice_front(&mut self, text: &str) {
        for ch in text.chars().rev() {
            self.chars.push_front(ch);
        }
    }

    /// Append text at the tail, used when reseeding from a fresh record.
    pub fn append(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }
}

/// Whether a call was opened with `#(` (active — its rewrite is rescanned)
/// or `##(` (neutral — its rewrite is copied to the neutral buffer as-is).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMode {
    Active,
    Neutral,
}

/// One open, unmatched call. `paren_depth` tracks protective parens opened
/// within the call's current argument — while positive, commas and parens
/// are copied literally instead of acting as argument separators.
#[derive(Debug)]
pub struct CallFrame {
    pub mode: CallMode,
    pub paren_depth: u32,
    pub closed_args: Vec<String>,
    pub current_arg: String,
}

impl CallFrame {
    pub fn new(mode: CallMode) -> Self {
        Self {
            mode,
            paren_depth: 0,
            closed_args: Vec::new(),
            current_arg: String::new(),
        }
    }

    /// `,`: close the current argument and start a new one.
    pub fn close_argument(&mut self) {
        self.closed_args.push(std::mem::take(&mut self.current_arg));
    }

    /// All arguments as they'd be delivered to the dispatcher: the ones
    /// already closed by commas, plus whatever is still accumulating.
    pub fn all_args(&self) -> Vec<String> {
        let mut args = self.closed_args.clone();
        args.push(self.current_arg.clone());
        args
    }
}

/// The full mutable scan state: what's left to read, what's been rewritten
/// so far, and the stack of calls currently open.
#[derive(Debug, Default)]
pub struct ScannerState {
    pub active: ActiveBuffer,
    pub neutral: String,
    pub frames: Vec<CallFrame>,
    /// Protective-paren nesting depth when no call is open, i.e. applied
    /// at top level. Mirrors `CallFrame::paren_depth`, which handles the
    /// in-call case.
    pub top_paren_depth: u32,
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_call(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Whether any protective-paren copy (top-level or within the
    /// innermost call) is still unbalanced.
    pub fn in_protective_paren(&self) -> bool {
        match self.frames.last() {
            Some(frame) => frame.paren_depth > 0,
            None => self.top_paren_depth > 0,
        }
    }

    /// Text destined for the neutral buffer when no call is open: either
    /// pushed straight onto `neutral`, or accumulated into the innermost
    /// open frame's current argument when a call is in progress.
    pub fn emit(&mut self, ch: char) {
        if let Some(frame) = self.frames.last_mut() {
            frame.current_arg.push(ch);
        } else {
            self.neutral.push(ch);
        }
    }

    pub fn emit_str(&mut self, s: &str) {
        if let Some(frame) = self.frames.last_mut() {
            frame.current_arg.push_str(s);
        } else {
            self.neutral.push_str(s);
        }
    }

    /// Reset to a fresh record: drop all open frames, the neutral buffer,
    /// and whatever is left unscanned in the active buffer. This is
    /// abandonment, not a hard halt — the next source read decides whether
    /// it turns into a reseed or a true halt.
    pub fn abandon_record(&mut self) {
        self.frames.clear();
        self.neutral.clear();
        self.active.clear();
        self.top_paren_depth = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splice_front_preserves_order() {
        let mut buf = ActiveBuffer::new();
        buf.append("world");
        buf.splice_front("hello ");
        let mut out = String::new();
        while let Some(c) = buf.pop() {
            out.push(c);
        }
        assert_eq!(out, "hello world");
    }

    #[test]
    fn frame_tracks_closed_and_current_args() {
        let mut frame = CallFrame::new(CallMode::Active);
        frame.current_arg.push_str("ds");
        frame.close_argument();
        frame.current_arg.push_str("greeting");
        frame.close_argument();
        frame.current_arg.push_str("hi");
        assert_eq!(frame.all_args(), vec!["ds", "greeting", "hi"]);
    }

    #[test]
    fn emit_targets_innermost_frame() {
        let mut state = ScannerState::new();
        state.emit_str("top level");
        assert_eq!(state.neutral, "top level");
        state.frames.push(CallFrame::new(CallMode::Active));
        state.emit_str("inside call");
        assert_eq!(state.frames[0].current_arg, "inside call");
        assert_eq!(state.neutral, "top level");
    }
}
