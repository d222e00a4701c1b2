//! Turns command-line path arguments into scanned inputs.
//!
//! Directory trees are walked depth-first, pre-order, with each directory's
//! entries sorted by file name, so output order is stable across runs.

use crate::checker::dictionary::Dictionary;
use crate::checker::SpellChecker;
use crate::cli::output::Reporter;
use crate::files::is_hidden;
use crate::{Config, Input};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_fixed: usize,
    pub misspellings: usize,
}

/// Regular files under `root`, skipping hidden entries below it and symlinks.
///
/// Hidden directories are pruned, so nothing beneath them is visited.
pub fn walk_dir(root: &Path) -> impl Iterator<Item = walkdir::Result<PathBuf>> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => {
                let file_type = entry.file_type();
                if file_type.is_symlink() {
                    tracing::debug!(path = %entry.path().display(), "skipping symlink");
                    None
                } else if file_type.is_file() {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(e)),
        })
}

pub struct Walker<'a> {
    config: &'a Config,
    checker: SpellChecker<'a>,
    reporter: Reporter,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a Config, dictionary: &'a Dictionary) -> Self {
        Self {
            config,
            checker: SpellChecker::new(dictionary, config),
            reporter: Reporter::new(config),
        }
    }

    /// Process every argument in order. Per-file failures are reported and skipped.
    pub fn run(&self, paths: &[PathBuf]) -> RunSummary {
        let mut summary = RunSummary::default();

        for path in paths {
            if is_hidden(path) {
                tracing::debug!(path = %path.display(), "skipping hidden path");
                continue;
            }

            if path.as_os_str() != "-" && path.is_dir() {
                if !self.config.recursive {
                    tracing::debug!(path = %path.display(), "skipping directory, recursion is off");
                    continue;
                }

                for file in walk_dir(path) {
                    match file {
                        Ok(file) => self.process(&Input::File(file), &mut summary),
                        Err(e) => self.reporter.error(&e),
                    }
                }
                continue;
            }

            self.process(&Input::from_arg(path), &mut summary);
        }

        summary
    }

    fn process(&self, input: &Input, summary: &mut RunSummary) {
        tracing::debug!(input = %input.label(), "scanning");

        match self.checker.check(input, &self.reporter) {
            Ok(result) if result.skipped => {}
            Ok(result) => {
                summary.files_scanned += 1;
                summary.misspellings += result.misspellings.len();
                if result.fixed_count > 0 {
                    tracing::debug!(input = %input.label(), fixed = result.fixed_count, "applied fixes");
                    summary.files_fixed += 1;
                }
            }
            Err(e) => self.reporter.error(&e),
        }
    }
}
