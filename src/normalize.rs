/// Reduce text to its palindrome-comparable form.
///
/// Every character outside `a`–`z`, `A`–`Z`, `0`–`9` is removed, the
/// remaining characters are lowercased, and relative order is preserved.
/// Whitespace counts as punctuation here — callers must not rely on
/// trimming for correctness.
///
/// The rule is deliberately ASCII-only: non-Latin letters and digits are
/// stripped along with punctuation, so accented or CJK text normalizes
/// toward the empty string instead of taking part in the comparison.
///
/// Idempotent — normalizing an already-normalized string returns it
/// unchanged. Total over all inputs, including the empty string.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Character-reversed copy of `text`.
pub fn reversed(text: &str) -> String {
    text.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("RaceCar"), "racecar");
    }

    #[test]
    fn test_normalize_strips_spaces_and_punctuation() {
        assert_eq!(
            normalize("A man a plan a canal Panama"),
            "amanaplanacanalpanama"
        );
        assert_eq!(
            normalize("Was it a car or a cat I saw?"),
            "wasitacaroracatisaw"
        );
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize("12,321"), "12321");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_punctuation_only_is_empty() {
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize(" \t\n.,;:"), "");
    }

    #[test]
    fn test_normalize_non_ascii_stripped() {
        // ASCII-only rule: accented and CJK characters are removed,
        // not folded.
        assert_eq!(normalize("café"), "caf");
        assert_eq!(normalize("한국어 中文"), "");
        assert_eq!(normalize("abc🚀cba"), "abccba");
    }

    #[test]
    fn test_normalize_idempotent() {
        for input in ["RaceCar", "A man, a plan!", "12321", "", "!!!", "café"] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_normalize_preserves_order() {
        assert_eq!(normalize("a1!b2?c3"), "a1b2c3");
    }

    #[test]
    fn test_reversed_ascii() {
        assert_eq!(reversed("hello"), "olleh");
        assert_eq!(reversed(""), "");
        assert_eq!(reversed("a"), "a");
    }

    #[test]
    fn test_reversed_multibyte_chars_kept_whole() {
        assert_eq!(reversed("ab🚀"), "🚀ba");
    }
}
