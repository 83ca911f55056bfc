//! Browser bindings for the checker.
//!
//! Compiled behind the `wasm` feature. The page's event handlers call
//! these exports and own all DOM work; the bindings are the boundary.

use wasm_bindgen::prelude::*;

use crate::{report, CheckOptions};

/// Decide whether `text` is a palindrome.
#[wasm_bindgen(js_name = isPalindrome)]
pub fn is_palindrome(text: &str) -> bool {
    crate::is_palindrome(text)
}

/// Normalized form of `text`: lowercased ASCII alphanumerics only.
#[wasm_bindgen(js_name = normalize)]
pub fn normalize(text: &str) -> String {
    crate::normalize(text)
}

/// Full verdict for `text` as a JSON object string.
///
/// Fields: `input`, `normalized`, `palindrome`, and `reversed` (null on
/// positive verdicts).
#[wasm_bindgen(js_name = checkText)]
pub fn check_text(text: &str) -> String {
    report::render_json(&crate::check_text(text, &CheckOptions::default()))
}
