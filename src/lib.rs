pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod logging;
pub mod walker;

pub use checker::dictionary::{Correction, Dictionary, DictionarySource};
pub use checker::SpellChecker;
pub use config::Config;
pub use walker::Walker;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Something to scan: a file on disk, or stdin when the path argument is `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Input::Stdin => Cow::Borrowed("-"),
            Input::File(path) => path.to_string_lossy(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    /// Misspellings reported (not fixed) for this input.
    pub misspellings: Vec<Misspelling>,
    pub fixed_count: usize,
    /// Set when the input was skipped without scanning (binary file).
    pub skipped: bool,
}

impl CheckResult {
    pub fn skipped() -> Self {
        Self {
            skipped: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Misspelling {
    pub word: String,
    /// 1-based.
    pub line: usize,
    pub suggestion: String,
    pub reason: String,
    /// The whole line, trimmed.
    pub context: String,
}
