use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Failures of a single file conversion.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Input missing or unreadable, or output not writable.
    #[error("cannot access {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input bytes are not UTF-8.
    #[error("{} is not valid UTF-8 text", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}
