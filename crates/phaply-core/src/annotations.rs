//! Delimited-text codec for annotation lists.
//!
//! The editor shows each knowledge-base list as one free-text field with
//! entries separated by semicolons ("Rủi ro A; Rủi ro B"). Encoding joins
//! with `"; "`; decoding splits on `';'`, trims each piece, and drops the
//! empty ones, so stray or doubled delimiters never produce blank entries.
//!
//! An entry that itself contains a semicolon does not round-trip — it comes
//! back as two entries. The field format has no escape syntax.

/// Join annotation entries into the editor's delimited text form.
pub fn encode_list(entries: &[String]) -> String {
    entries.join("; ")
}

/// Split delimited text back into annotation entries.
///
/// Each piece is whitespace-trimmed; empty pieces are discarded.
pub fn decode_list(text: &str) -> Vec<String> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
