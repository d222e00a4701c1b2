use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Maximal runs of word characters (alphanumeric plus underscore).
    static ref WORD: Regex = Regex::new(r"\w+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token inside its line.
    pub start: usize,
}

impl Token<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Split a line into word tokens, left to right.
pub fn words(line: &str) -> impl Iterator<Item = Token<'_>> {
    WORD.find_iter(line).map(|m| Token {
        text: m.as_str(),
        start: m.start(),
    })
}
