use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the misspellings list comes from. `-` on the command line means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    Stdin,
    File(PathBuf),
}

impl DictionarySource {
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            DictionarySource::Stdin
        } else {
            DictionarySource::File(arg.to_path_buf())
        }
    }

    fn name(&self) -> String {
        match self {
            DictionarySource::Stdin => "<stdin>".to_string(),
            DictionarySource::File(path) => path.display().to_string(),
        }
    }
}

/// A single entry of the misspellings list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub replacement: String,
    /// Only unambiguous single replacements are applied in write mode.
    pub auto_fixable: bool,
    pub reason: String,
}

impl Correction {
    /// Parse the right-hand side of `key->...`.
    ///
    /// The last comma splits replacement from reason. A trailing comma marks the
    /// entry as not auto-fixable without giving a reason.
    pub fn parse(data: &str) -> Self {
        let data = data.trim();

        match data.rfind(',') {
            None => Self {
                replacement: data.to_string(),
                auto_fixable: true,
                reason: String::new(),
            },
            Some(idx) if idx == data.len() - 1 => Self {
                replacement: data[..idx].to_string(),
                auto_fixable: false,
                reason: String::new(),
            },
            Some(idx) => Self {
                replacement: data[..idx].to_string(),
                auto_fixable: false,
                reason: data[idx + 1..].trim().to_string(),
            },
        }
    }
}

/// Lowercase misspelling -> correction. Read-only once loaded.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, Correction>,
}

impl Dictionary {
    pub fn load(source: &DictionarySource) -> Result<Self> {
        let content = match source {
            DictionarySource::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|e| Error::io("-", e))?;
                buf
            }
            DictionarySource::File(path) => {
                fs::read_to_string(path).map_err(|e| Error::io(path, e))?
            }
        };

        Self::parse(&content, &source.name())
    }

    /// Parse dictionary text. Any line without `->` fails the whole load.
    pub fn parse(content: &str, source_name: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let (key, data) = line.split_once("->").ok_or_else(|| Error::DictionaryParse {
                source_name: source_name.to_string(),
                line_number: idx + 1,
                line: line.to_string(),
            })?;

            // Later duplicates win.
            entries.insert(key.trim().to_lowercase(), Correction::parse(data));
        }

        let dictionary = Self { entries };
        tracing::debug!(
            entries = dictionary.len(),
            auto_fixable = dictionary.auto_fixable_count(),
            source = source_name,
            "loaded dictionary"
        );

        Ok(dictionary)
    }

    /// Look up an already-lowercased word.
    pub fn get(&self, word: &str) -> Option<&Correction> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn auto_fixable_count(&self) -> usize {
        self.entries.values().filter(|c| c.auto_fixable).count()
    }
}
