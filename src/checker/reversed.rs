use crate::checker::Strategy;

/// Reversed-copy comparison: builds the character-reversed form of the
/// normalized string and tests it for equality. Costs one allocation but
/// reads as the textbook definition.
pub struct ReversedCopy;

impl Strategy for ReversedCopy {
    fn name(&self) -> &'static str {
        "reversed"
    }

    fn is_palindrome(&self, normalized: &str) -> bool {
        let mirror: String = normalized.chars().rev().collect();
        mirror == normalized
    }
}
