use encoding_rs::{Encoding, UTF_8_INIT, WINDOWS_1252_INIT};
use std::borrow::Cow;

#[derive(Debug, Clone, Copy)]
pub struct TextEncoding {
    pub name: &'static str,
    encoding: &'static Encoding,
}

/// Tried in order. The single-byte fallback accepts any input.
pub static ENCODINGS: [TextEncoding; 2] = [
    TextEncoding {
        name: "utf-8",
        encoding: &UTF_8_INIT,
    },
    TextEncoding {
        // WHATWG treats the iso-8859-1 label as windows-1252.
        name: "iso-8859-1",
        encoding: &WINDOWS_1252_INIT,
    },
];

#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Decode `bytes` with the first encoding in [`ENCODINGS`] that accepts them.
///
/// `on_failure` is told about every rejected encoding and the one tried next.
/// Returns `None` once the list is exhausted.
pub fn decode<F>(bytes: &[u8], mut on_failure: F) -> Option<Decoded>
where
    F: FnMut(&TextEncoding, Option<&TextEncoding>),
{
    for (idx, candidate) in ENCODINGS.iter().enumerate() {
        match candidate
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
        {
            Some(text) => {
                return Some(Decoded {
                    text: text.into_owned(),
                    encoding: *candidate,
                })
            }
            None => on_failure(candidate, ENCODINGS.get(idx + 1)),
        }
    }

    None
}

/// Encode `text` back into `encoding`, or `None` if some character has no mapping.
pub fn encode<'a>(text: &'a str, encoding: &TextEncoding) -> Option<Cow<'a, [u8]>> {
    let (bytes, _, had_errors) = encoding.encoding.encode(text);
    if had_errors {
        None
    } else {
        Some(bytes)
    }
}
