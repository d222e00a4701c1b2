//! Case adaptation: give the suggested replacement the casing of the word it replaces.

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Derive the suggestion for `word` from a dictionary `replacement`.
///
/// A capitalized word gets a capitalized replacement, an upper-case word an
/// upper-case one; anything else (lower or mixed case) gets it verbatim.
/// Capitalization is tested first, so single letters like `A` capitalize.
pub fn adapt(word: &str, replacement: &str) -> String {
    if word == capitalize(word) {
        capitalize(replacement)
    } else if word == word.to_uppercase() {
        replacement.to_uppercase()
    } else {
        replacement.to_string()
    }
}
