//! The `Interpreter`: owns the form store and scan state, and abstracts
//! over where program text comes from and where output goes.

use crossbeam_channel::Receiver;

use crate::form::FormStore;
use crate::scanner::ScannerState;

/// Where the engine reads characters from once the initial program text
/// is exhausted. Blocking: a source with nothing left to offer either
/// returns `None` (batch mode, signals end-of-source) or blocks until more
/// arrives (interactive mode).
pub trait CharSource {
    fn read_char(&mut self) -> Option<char>;
}

/// Where rewritten output (the neutral buffer's final contents, and the
/// `ps`/`ps*` family's direct writes) goes.
pub trait CharSink {
    fn write_str(&mut self, s: &str);
}

/// Concatenated CLI-provided program text (files and `@literal` sources
/// joined by newlines). Exhaustion is permanent: batch mode halts rather
/// than reseeding.
pub struct BatchSource {
    chars: std::vec::IntoIter<char>,
}

impl BatchSource {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl CharSource for BatchSource {
    fn read_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// Reads from a channel fed by a background terminal-input thread (see
/// `crate::input`). Never reports exhaustion on its own — closing the
/// channel (the reader thread exiting) is the only way `read_char` returns
/// `None`, which the engine treats as a request to halt.
pub struct InteractiveSource {
    rx: Receiver<char>,
}

impl InteractiveSource {
    pub fn new(rx: Receiver<char>) -> Self {
        Self { rx }
    }
}

impl CharSource for InteractiveSource {
    fn read_char(&mut self) -> Option<char> {
        self.rx.recv().ok()
    }
}

/// Collects output into an owned `String`. Used by tests and by any
/// embedding that wants the rewritten text back as a value.
#[derive(Debug, Default)]
pub struct BufSink {
    pub buf: String,
}

impl CharSink for BufSink {
    fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }
}

/// A shared buffer sink, for tests that need to inspect output after
/// `Interpreter` has taken ownership of the sink half.
impl CharSink for std::rc::Rc<std::cell::RefCell<String>> {
    fn write_str(&mut self, s: &str) {
        self.borrow_mut().push_str(s);
    }
}

/// Writes straight to the process's standard output, used by the `trac`
/// binary.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl CharSink for StdoutSink {
    fn write_str(&mut self, s: &str) {
        use std::io::Write;
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        let _ = lock.write_all(s.as_bytes());
        let _ = lock.flush();
    }
}

/// The default batch bootstrap: read one record from the character source
/// and print it back through the scanner — i.e. "print the result of
/// reading one record." Since this `#(rs)` is called in *active* mode,
/// whatever it reads is spliced back into the active buffer and rescanned
/// as TRAC source, not merely echoed as inert text.
pub const DEFAULT_BATCH_BOOTSTRAP: &str = "#(ps,#(rs))";

/// The interactive bootstrap additionally prints a prompt ("CR, LF,
/// `TRAC> `") before blocking on a new record.
pub const DEFAULT_INTERACTIVE_BOOTSTRAP: &str = "#(ps,(\r\nTRAC> ))#(ps,#(rs))";

/// The live interpreter: persistent form store, scan state, the
/// meta-character and trace flag, and the pluggable source/sink pair.
pub struct Interpreter {
    pub forms: FormStore,
    pub scanner: ScannerState,
    pub meta_char: char,
    pub trace: bool,
    pub halted: bool,
    /// One-shot override set by `cc`/`cs`/`cn`/`in` in place of their
    /// ordinary return value; consumed by the very next call-closure
    /// delivery regardless of which primitive closes it.
    pub force_active: Option<String>,
    /// Whether the active buffer is reseeded with `initial_program` on
    /// exhaustion (interactive) or the run halts (batch).
    pub interactive: bool,
    /// Text used to reseed the active buffer each time it is found empty
    /// while `interactive` is set; appended once at the start of `run`
    /// either way.
    pub initial_program: String,
    source: Box<dyn CharSource>,
    sink: Box<dyn CharSink>,
}

impl Interpreter {
    pub fn new(source: Box<dyn CharSource>, sink: Box<dyn CharSink>) -> Self {
        Self {
            forms: FormStore::new(),
            scanner: ScannerState::new(),
            meta_char: '\'',
            trace: false,
            halted: false,
            force_active: None,
            interactive: false,
            initial_program: DEFAULT_BATCH_BOOTSTRAP.to_string(),
            source,
            sink,
        }
    }

    /// Switches to interactive mode: the active buffer is reseeded with
    /// the prompt-printing bootstrap every time it runs dry, instead of
    /// halting.
    pub fn with_interactive(mut self) -> Self {
        self.interactive = true;
        self.initial_program = DEFAULT_INTERACTIVE_BOOTSTRAP.to_string();
        self
    }

    /// Overrides the bootstrap program spliced in at start (and, in
    /// interactive mode, on every subsequent reseed) — the embedding
    /// contract's "initial program string".
    pub fn with_initial_program(mut self, program: impl Into<String>) -> Self {
        self.initial_program = program.into();
        self
    }

    pub fn with_meta_char(mut self, meta_char: char) -> Self {
        self.meta_char = meta_char;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub(crate) fn next_source_char(&mut self) -> Option<char> {
        self.source.read_char()
    }

    pub(crate) fn write_out(&mut self, s: &str) {
        self.sink.write_str(s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_source_exhausts() {
        let mut src = BatchSource::new("ab");
        assert_eq!(src.read_char(), Some('a'));
        assert_eq!(src.read_char(), Some('b'));
        assert_eq!(src.read_char(), None);
    }

    #[test]
    fn buf_sink_accumulates() {
        let mut sink = BufSink::default();
        sink.write_str("hello");
        sink.write_str(" world");
        assert_eq!(sink.buf, "hello world");
    }
}
