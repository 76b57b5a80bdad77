use std::path::PathBuf;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Error, Debug)]
pub enum EmitError {
    /// No usable output path, or another bad generator configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// A create-new file was emitted at a path that already exists.
    #[error("duplicate generated file: {}", path.display())]
    DuplicateFile { path: PathBuf },

    #[error("formatting failed for {}: {source}", path.display())]
    Format { path: PathBuf, source: FormatError },

    #[error("failed to write {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
