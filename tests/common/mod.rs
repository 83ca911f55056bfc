/// Normalize report text for golden comparison: trim trailing whitespace
/// on each line and strip the trailing newline.
pub fn normalize_report(s: &str) -> String {
    s.lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
        .trim_end()
        .to_string()
}
