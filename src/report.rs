use crate::checker::CheckResult;

/// Render the human-readable verdict for one candidate.
///
/// Positive verdicts show the normalized form; negative verdicts also show
/// its reversal so the mismatch is visible at a glance.
pub fn render(result: &CheckResult) -> String {
    let mut out = String::new();
    if result.is_palindrome {
        out.push_str(&format!(
            "\"{}\" reads the same forwards and backwards.\n",
            result.input
        ));
        out.push_str(&format!("  normalized: {}\n", result.normalized));
    } else {
        out.push_str(&format!(
            "\"{}\" does not read the same forwards and backwards.\n",
            result.input
        ));
        out.push_str(&format!("  normalized: {}\n", result.normalized));
        if let Some(mirror) = &result.reversed {
            out.push_str(&format!("  reversed:   {mirror}\n"));
        }
    }
    out
}

/// Render one candidate's verdict as a compact JSON object.
///
/// `reversed` is `null` on positive verdicts.
pub fn render_json(result: &CheckResult) -> String {
    serde_json::json!({
        "input": result.input,
        "normalized": result.normalized,
        "palindrome": result.is_palindrome,
        "reversed": result.reversed,
    })
    .to_string()
}
