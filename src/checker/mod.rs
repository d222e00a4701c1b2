pub mod case;
pub mod dictionary;
pub mod tokenizer;

use crate::cli::output::Reporter;
use crate::error::{Error, Result};
use crate::files::{self, encoding};
use crate::{CheckResult, Config, Input, Misspelling};
use dictionary::Dictionary;
use std::fs;
use std::io::{self, Read};

/// Result of scanning one line: the line as it should now read, plus what was
/// left for the user to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScan {
    pub line: String,
    pub misspellings: Vec<Misspelling>,
    pub fixed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextScan {
    pub text: String,
    pub misspellings: Vec<Misspelling>,
    pub fixed: usize,
}

pub struct SpellChecker<'a> {
    dictionary: &'a Dictionary,
    write_changes: bool,
}

impl<'a> SpellChecker<'a> {
    pub fn new(dictionary: &'a Dictionary, config: &Config) -> Self {
        Self {
            dictionary,
            write_changes: config.write_changes,
        }
    }

    /// Scan a single line (terminator included, if any).
    ///
    /// In write mode every auto-fixable match is replaced at its own position;
    /// the rest of the line is copied verbatim.
    pub fn scan_line(&self, line: &str, line_number: usize) -> LineScan {
        let mut out = String::with_capacity(line.len());
        let mut misspellings = Vec::new();
        let mut fixed = 0;
        let mut copied_to = 0;

        for token in tokenizer::words(line) {
            let Some(correction) = self.dictionary.get(&token.text.to_lowercase()) else {
                continue;
            };

            let suggestion = case::adapt(token.text, &correction.replacement);

            if self.write_changes && correction.auto_fixable {
                out.push_str(&line[copied_to..token.start]);
                out.push_str(&suggestion);
                copied_to = token.end();
                fixed += 1;
                continue;
            }

            misspellings.push(Misspelling {
                word: token.text.to_string(),
                line: line_number,
                suggestion,
                reason: correction.reason.clone(),
                context: line.trim().to_string(),
            });
        }

        out.push_str(&line[copied_to..]);

        LineScan {
            line: out,
            misspellings,
            fixed,
        }
    }

    /// Scan a whole buffer line by line. Line terminators are kept as they are.
    pub fn scan_text(&self, text: &str) -> TextScan {
        let mut scan = TextScan {
            text: String::with_capacity(text.len()),
            misspellings: Vec::new(),
            fixed: 0,
        };

        for (idx, line) in text.split_inclusive('\n').enumerate() {
            let result = self.scan_line(line, idx + 1);
            scan.text.push_str(&result.line);
            scan.misspellings.extend(result.misspellings);
            scan.fixed += result.fixed;
        }

        scan
    }

    /// Read, scan, report and (in write mode) rewrite one input.
    ///
    /// A file is only written after its whole content has been decoded, scanned
    /// and re-encoded in memory.
    pub fn check(&self, input: &Input, reporter: &Reporter) -> Result<CheckResult> {
        let bytes = match input {
            Input::Stdin => {
                let mut buf = Vec::new();
                io::stdin()
                    .read_to_end(&mut buf)
                    .map_err(|e| Error::io("-", e))?;
                buf
            }
            Input::File(path) => {
                if !files::is_text_file(path)? {
                    reporter.binary_file(path);
                    return Ok(CheckResult::skipped());
                }
                fs::read(path).map_err(|e| Error::io(path, e))?
            }
        };

        let decoded = encoding::decode(&bytes, |failed, next| {
            reporter.decode_failed(input, failed, next)
        })
        .ok_or_else(|| Error::Undecodable {
            path: input.label().into_owned().into(),
        })?;

        tracing::trace!(input = %input.label(), encoding = decoded.encoding.name, "decoded");

        let scan = self.scan_text(&decoded.text);

        for misspelling in &scan.misspellings {
            reporter.misspelling(input, misspelling);
        }

        if scan.fixed > 0 {
            match input {
                Input::Stdin => reporter.fixed_stdin(&scan.text),
                Input::File(path) => {
                    let bytes = encoding::encode(&scan.text, &decoded.encoding).ok_or_else(|| {
                        Error::Unencodable {
                            path: path.clone(),
                            encoding: decoded.encoding.name,
                        }
                    })?;
                    reporter.fixed(path);
                    fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
                }
            }
        }

        Ok(CheckResult {
            misspellings: scan.misspellings,
            fixed_count: scan.fixed,
            skipped: false,
        })
    }
}
