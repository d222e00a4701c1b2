use crate::files::encoding::TextEncoding;
use crate::{Config, Input, Misspelling};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Colors for each diagnostic field. A disabled palette returns text untouched.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn file(&self, text: &str) -> String {
        self.paint(text, Color::Yellow)
    }

    pub fn wrong(&self, text: &str) -> String {
        self.paint(text, Color::Red)
    }

    pub fn right(&self, text: &str) -> String {
        self.paint(text, Color::Green)
    }
}

#[derive(Debug, Serialize)]
struct JsonMisspelling<'a> {
    file: &'a str,
    line: usize,
    word: &'a str,
    suggestion: &'a str,
    reason: &'a str,
}

/// Writes match reports to stdout and warnings/notices to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    palette: Palette,
    format: OutputFormat,
}

impl Reporter {
    pub fn new(config: &Config) -> Self {
        Self {
            palette: Palette::new(config.colors),
            format: config.format,
        }
    }

    pub fn misspelling(&self, input: &Input, misspelling: &Misspelling) {
        match self.format {
            OutputFormat::Text => println!("{}", self.format_text(input, misspelling)),
            OutputFormat::Json => match format_json(input, misspelling) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("ERROR: {}", e),
            },
        }
    }

    pub fn format_text(&self, input: &Input, m: &Misspelling) -> String {
        let p = &self.palette;
        let line = p.file(&m.line.to_string());
        let wrong = p.wrong(&m.word);
        let right = p.right(&m.suggestion);
        let reason = if m.reason.is_empty() {
            String::new()
        } else {
            format!("  | {}", p.file(&m.reason))
        };

        match input {
            Input::File(_) => format!(
                "{}:{}: {}  ==> {}{}",
                p.file(&input.label()),
                line,
                wrong,
                right,
                reason
            ),
            Input::Stdin => format!("{}: {}\n\t{} ==> {}{}", line, m.context, wrong, right, reason),
        }
    }

    pub fn binary_file(&self, path: &Path) {
        eprintln!("WARNING: Binary file: {}", path.display());
    }

    pub fn decode_failed(&self, input: &Input, failed: &TextEncoding, next: Option<&TextEncoding>) {
        eprintln!("WARNING: Decoding file {}", input.label());
        eprintln!("WARNING: using encoding={} failed.", failed.name);
        if let Some(next) = next {
            eprintln!("WARNING: Trying next encoding: {}", next.name);
        }
    }

    pub fn fixed(&self, path: &Path) {
        eprintln!("{} {}", self.palette.right("FIXED:"), path.display());
    }

    /// Stdin has nowhere to be written back to, so the fixed text goes to stdout.
    pub fn fixed_stdin(&self, text: &str) {
        println!("---");
        print!("{}", text);
    }

    pub fn error(&self, err: &dyn fmt::Display) {
        eprintln!("ERROR: {}", err);
    }
}

fn format_json(input: &Input, m: &Misspelling) -> serde_json::Result<String> {
    let label = input.label();
    serde_json::to_string(&JsonMisspelling {
        file: &label,
        line: m.line,
        word: &m.word,
        suggestion: &m.suggestion,
        reason: &m.reason,
    })
}
