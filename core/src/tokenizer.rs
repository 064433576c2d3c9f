/// Split text into terms on the ASCII space character, dropping empty pieces.
///
/// Only `' '` separates terms; tabs, newlines and other whitespace stay inside
/// the term they appear in.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ').filter(|word| !word.is_empty()).collect()
}

/// Returns false if the text contains a control character (code points 0-31).
pub fn is_valid_text(text: &str) -> bool {
    !text.chars().any(|c| (c as u32) < 32)
}
