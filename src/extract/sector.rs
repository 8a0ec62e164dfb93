use crate::lexicon;

/// Sector named in a hint, or `fallback` when the hint is missing or unknown.
pub fn extract(hint: Option<&str>, fallback: &str) -> String {
    hint.and_then(lexicon::find_sector)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

// ── Tests ──
