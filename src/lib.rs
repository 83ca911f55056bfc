pub mod checker;
pub mod error;
pub mod input;
pub mod normalize;
pub mod report;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use checker::{
    CheckOptions, CheckResult, CheckWarning, PairedScan, ReversedCopy, Strategy, StrategyKind,
    WarningCode,
};
pub use error::CheckError;
pub use normalize::{normalize, reversed};

use std::path::Path;

/// Check a single candidate text.
///
/// Normalizes, runs the strategy selected in `options`, and fills in the
/// reversed normalized form on negative verdicts. Total over all string
/// inputs — an empty or punctuation-only candidate is a palindrome by
/// definition; rejecting it is the caller's concern.
pub fn check_text(text: &str, options: &CheckOptions) -> CheckResult {
    let normalized = normalize(text);
    let is_palindrome = options.strategy.as_strategy().is_palindrome(&normalized);
    let mirror = if is_palindrome {
        None
    } else {
        Some(reversed(&normalized))
    };
    CheckResult {
        input: text.to_string(),
        normalized,
        reversed: mirror,
        is_palindrome,
    }
}

/// Decide whether `text` is a palindrome using the default strategy.
pub fn is_palindrome(text: &str) -> bool {
    check_text(text, &CheckOptions::default()).is_palindrome
}

/// Verdicts for every candidate line of a file, plus any input-decoding
/// warnings.
#[derive(Debug, Clone, Default)]
pub struct FileReport {
    pub results: Vec<CheckResult>,
    pub warnings: Vec<CheckWarning>,
}

/// Check every candidate line of the file at `path`.
///
/// Bytes are decoded per [`input::decode_text`]; lines are trimmed and
/// blank lines skipped.
pub fn check_file(
    path: impl AsRef<Path>,
    options: &CheckOptions,
) -> Result<FileReport, CheckError> {
    let data = std::fs::read(path)?;
    let (candidates, warnings) = input::read_candidates(&data);
    let results = candidates.iter().map(|c| check_text(c, options)).collect();
    Ok(FileReport { results, warnings })
}
