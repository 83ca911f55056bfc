pub mod paired;
pub mod reversed;

use std::str::FromStr;

use crate::error::CheckError;

pub use paired::PairedScan;
pub use reversed::ReversedCopy;

/// Categories for recoverable input issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningCode {
    LegacyEncoding,
    MalformedText,
}

/// A recoverable issue encountered while collecting candidate text.
#[derive(Debug, Clone)]
pub struct CheckWarning {
    pub code: WarningCode,
    pub message: String,
    pub location: Option<String>,
}

/// Selects the decision algorithm behind [`crate::check_text`].
///
/// Both algorithms produce identical verdicts on every input; `Paired`
/// is the default because it decides without allocating a second copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    #[default]
    Paired,
    Reversed,
}

impl StrategyKind {
    /// The strategy implementation for this kind.
    pub fn as_strategy(self) -> &'static dyn Strategy {
        match self {
            StrategyKind::Paired => &PairedScan,
            StrategyKind::Reversed => &ReversedCopy,
        }
    }
}

impl FromStr for StrategyKind {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "paired" => Ok(StrategyKind::Paired),
            "reversed" => Ok(StrategyKind::Reversed),
            other => Err(CheckError::UnknownStrategy {
                name: other.to_string(),
            }),
        }
    }
}

/// Options controlling check behavior.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Decision algorithm to run.
    pub strategy: StrategyKind,
}

/// The verdict for one candidate.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The candidate as submitted.
    pub input: String,
    /// The normalized form the verdict was computed over.
    pub normalized: String,
    /// Reversed normalized form, for illustration; populated on negative
    /// verdicts only.
    pub reversed: Option<String>,
    /// Whether the normalized form is a palindrome.
    pub is_palindrome: bool,
}

/// Trait implemented by each decision strategy.
pub trait Strategy {
    /// Name used for selection and display (e.g., `"paired"`).
    fn name(&self) -> &'static str;

    /// Decide whether an already-normalized string is a palindrome.
    ///
    /// Callers pass output of [`crate::normalize`], so the input is
    /// lowercase ASCII alphanumerics only.
    fn is_palindrome(&self, normalized: &str) -> bool;
}
