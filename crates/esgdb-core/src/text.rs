//! Text helpers shared by the collection crates.

/// Truncate `text` to at most `max_chars` characters, never splitting a
/// multi-byte character. Returns the input unchanged when it fits.
///
/// Caps are counted in chars rather than tokens; upstream content caps are
/// raw-length caps, not tokenizer-aware budgets.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
