use std::sync::LazyLock;

use regex::Regex;

static ISO_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{4}-\d{2}-\d{2})").unwrap());
static SLASH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{4})").unwrap());
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = MONTHS.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(r"(\d{{1,2}})\s*({})[a-z]*\s*(\d{{4}})", names.join("|"))).unwrap()
});

/// French and English month names, with and without diacritics.
const MONTHS: &[(&str, &str)] = &[
    ("janvier", "01"),
    ("fevrier", "02"),
    ("février", "02"),
    ("mars", "03"),
    ("avril", "04"),
    ("mai", "05"),
    ("juin", "06"),
    ("juillet", "07"),
    ("aout", "08"),
    ("août", "08"),
    ("septembre", "09"),
    ("octobre", "10"),
    ("novembre", "11"),
    ("decembre", "12"),
    ("décembre", "12"),
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

/// Find an opening date in free text and return it as `YYYY-MM-DD`.
///
/// Calendar validity is not checked: "31/02/2024" yields "2024-02-31".
pub fn extract(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }

    if let Some(caps) = ISO_RE.captures(text) {
        return Some(caps[1].to_string());
    }

    let lower = text.to_lowercase();
    if let Some(caps) = MONTH_RE.captures(&lower) {
        let month = MONTHS
            .iter()
            .find(|(name, _)| *name == &caps[2])
            .map(|(_, num)| *num)?;
        return Some(format!("{}-{}-{:0>2}", &caps[3], month, &caps[1]));
    }

    SLASH_RE.captures(text).map(|caps| {
        format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1])
    })
}

// ── Tests ──
