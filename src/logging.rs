//! Tracing setup: a non-blocking, rolling-never file appender plus a panic
//! hook that logs before delegating to the default handler (`ox-bin`'s
//! `configure_logging`/`install_panic_hook`).

use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;

/// Must be kept alive for the process lifetime: dropping it stops the
/// background writer thread and the remaining buffered log lines are lost.
pub struct LogGuard(#[allow(dead_code)] Option<WorkerGuard>);

pub fn init(config: &LoggingConfig) -> LogGuard {
    let log_dir = Path::new(&config.dir);
    let log_path = log_dir.join("trac.log");
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, "trac.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(writer)
        .try_init();

    install_panic_hook();

    match result {
        Ok(()) => LogGuard(Some(guard)),
        Err(_) => LogGuard(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}
