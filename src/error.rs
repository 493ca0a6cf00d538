//! Typed errors at the CLI/config boundary. The language core itself never
//! fails this way — malformed programs and bad primitive arguments degrade
//! to empty strings or record abandonment, never a `Result::Err`. This type
//! is for the glue around it: reading program-text arguments off disk and
//! loading `trac.toml`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TracCliError {
    #[error("failed to read program source {path}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to enable raw terminal mode")]
    Terminal(#[source] std::io::Error),
}
