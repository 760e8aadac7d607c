/// Characters that may end a generated sentence.
const TERMINATORS: [char; 4] = ['.', '!', '?', '"'];

/// Trims generated text to end at the last sentence-terminating character.
///
/// Everything after the last `.`, `!`, `?` or `"` is discarded, whitespace
/// included; text with no terminator is returned whole. Surrounding whitespace
/// is always stripped. The rule is a literal last-occurrence scan, so embedded
/// punctuation such as abbreviations is not special-cased.
pub fn sanitize(text: &str) -> String {
    match text.rfind(TERMINATORS) {
        // The terminators are all single-byte, so `pos + 1` stays on a char
        // boundary.
        Some(pos) => text[..=pos].trim().to_string(),
        None => text.trim().to_string(),
    }
}
