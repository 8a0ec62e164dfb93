use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

/// Function words in both languages plus tags that describe the public, not the route.
const STOP_WORDS: &[&str] = &[
    "a", "à", "au", "aux", "de", "des", "du", "le", "la", "les", "l", "un", "une", "et", "ou",
    "en", "pour", "par", "sur", "avec", "sans", "the", "an", "and", "or", "for", "with",
    "without", "on", "in", "kid", "kids", "adapte", "adapted",
];

/// Hashtag tokens longer than two characters, minus stop words.
///
/// Tokens keep their scraped case; `#Dalle` and `#dalle` are distinct.
pub fn extract(text: &str) -> BTreeSet<String> {
    HASHTAG_RE
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|tag| tag.chars().count() > 2)
        .filter(|tag| !STOP_WORDS.contains(&tag.to_lowercase().as_str()))
        .collect()
}

// ── Tests ──
