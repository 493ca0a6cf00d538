//! `trac`: a CLI front end for the interpreter. Arguments are character
//! sources: an argument starting with `@` is literal program text, anything
//! else names a file. With no arguments at all, the program reads from the
//! raw-mode terminal instead and enters interactive mode.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use trac::{BatchSource, InteractiveSource, Interpreter, StdoutSink};
use trac::error::TracCliError;
use trac::{config, input, logging, terminal};

#[derive(Parser, Debug)]
#[command(name = "trac", version, about = "A TRAC T-64 interpreter")]
struct Args {
    /// Program sources, in order: `@text` for literal text, or a file path.
    /// With none given, the interpreter runs interactively against the
    /// terminal.
    sources: Vec<String>,

    /// Configuration file path (overrides discovery of `trac.toml`).
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Start with tracing enabled (equivalent to an initial `tn`).
    #[arg(long = "trace")]
    trace: bool,
}

fn resolve_sources(sources: &[String]) -> Result<String> {
    let mut parts = Vec::with_capacity(sources.len());
    for source in sources {
        if let Some(text) = source.strip_prefix('@') {
            parts.push(text.to_string());
        } else {
            let path = PathBuf::from(source);
            let content = std::fs::read_to_string(&path).map_err(|e| TracCliError::SourceRead {
                path: path.clone(),
                source: e,
            })?;
            parts.push(content);
        }
    }
    Ok(parts.join("\n"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load_from(args.config.clone());
    let _log_guard = logging::init(&config.logging);

    tracing::info!(target: "runtime", "startup");

    let meta_char = config
        .engine
        .meta_char
        .chars()
        .next()
        .unwrap_or('\'');
    let trace = args.trace || config.logging.trace;

    if args.sources.is_empty() {
        run_interactive(meta_char, trace)
    } else {
        let program_text = resolve_sources(&args.sources)
            .context("failed to assemble program text from CLI sources")?;
        run_batch(program_text, meta_char, trace)
    }
}

fn run_batch(program_text: String, meta_char: char, trace: bool) -> Result<()> {
    let source = Box::new(BatchSource::new(&program_text));
    let sink = Box::new(StdoutSink);
    let mut interp = Interpreter::new(source, sink)
        .with_meta_char(meta_char)
        .with_trace(trace);
    interp.run();
    Ok(())
}

fn run_interactive(meta_char: char, trace: bool) -> Result<()> {
    let _guard = terminal::RawModeGuard::enter().map_err(TracCliError::Terminal)?;
    let rx = input::spawn_reader();
    let source = Box::new(InteractiveSource::new(rx));
    let sink = Box::new(StdoutSink);
    let mut interp = Interpreter::new(source, sink)
        .with_interactive()
        .with_meta_char(meta_char)
        .with_trace(trace);
    interp.run();
    Ok(())
}
