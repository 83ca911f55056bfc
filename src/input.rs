use encoding_rs::{UTF_16BE, UTF_16LE, WINDOWS_1252};

use crate::checker::{CheckWarning, WarningCode};

/// Decode candidate bytes into text.
///
/// UTF-8 passes through unchanged (a leading BOM is stripped silently).
/// UTF-16 is recognized by BOM and anything else falls back to
/// Windows-1252; both fallback paths attach a warning instead of failing,
/// so decoding is total.
pub fn decode_text(data: &[u8]) -> (String, Option<CheckWarning>) {
    if data.starts_with(&[0xFF, 0xFE]) {
        let (text, _, had_errors) = UTF_16LE.decode(&data[2..]);
        return (text.into_owned(), Some(decode_warning("UTF-16 LE", had_errors)));
    }
    if data.starts_with(&[0xFE, 0xFF]) {
        let (text, _, had_errors) = UTF_16BE.decode(&data[2..]);
        return (text.into_owned(), Some(decode_warning("UTF-16 BE", had_errors)));
    }

    let data = data.strip_prefix(&[0xEF, 0xBB, 0xBF][..]).unwrap_or(data);
    match std::str::from_utf8(data) {
        Ok(text) => (text.to_string(), None),
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_1252.decode(data);
            (
                text.into_owned(),
                Some(decode_warning("Windows-1252", had_errors)),
            )
        }
    }
}

fn decode_warning(encoding: &str, had_errors: bool) -> CheckWarning {
    if had_errors {
        CheckWarning {
            code: WarningCode::MalformedText,
            message: format!(
                "{encoding} input contained malformed sequences; replacement characters inserted"
            ),
            location: None,
        }
    } else {
        CheckWarning {
            code: WarningCode::LegacyEncoding,
            message: format!("input decoded as {encoding}"),
            location: None,
        }
    }
}

/// Split decoded input into candidates: one per line, trimmed, blank
/// lines dropped.
///
/// Trimming here is presentation-side cleanup only; the check applies its
/// own normalization and does not depend on it.
pub fn read_candidates(data: &[u8]) -> (Vec<String>, Vec<CheckWarning>) {
    let (text, warning) = decode_text(data);
    let mut warnings = Vec::new();
    if let Some(w) = warning {
        warnings.push(w);
    }
    let candidates = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    (candidates, warnings)
}
