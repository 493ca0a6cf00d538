//! A TRAC T-64 interpreter: a self-modifying string-rewriting macro
//! processor. The core is [`interpreter::Interpreter`] plus the rewrite
//! loop in [`engine`]; everything under `src/` outside of `primitives` and
//! `bignum` exists to host that engine inside a CLI or an embedding.

pub mod bignum;
mod engine;
pub mod form;
pub mod interpreter;
pub mod primitives;
pub mod scanner;

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod terminal;

pub use interpreter::{
    BatchSource, BufSink, CharSink, CharSource, InteractiveSource, Interpreter, StdoutSink,
};
