//! Error types for typofix library operations.
//!
//! Dictionary problems are fatal to a run; everything else is scoped to the
//! single file being processed and is reported by the driver before moving on.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A dictionary line without the `->` separator.
    #[error("{source_name}:{line_number}: invalid dictionary entry (missing '->'): {line}")]
    DictionaryParse {
        source_name: String,
        line_number: usize,
        line: String,
    },

    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// None of the configured encodings could decode the file.
    #[error("Could not detect encoding: {}", path.display())]
    Undecodable { path: PathBuf },

    /// A fix produced text the file's encoding cannot represent.
    #[error("cannot write {} as {}: replacement not representable", path.display(), encoding)]
    Unencodable {
        path: PathBuf,
        encoding: &'static str,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
