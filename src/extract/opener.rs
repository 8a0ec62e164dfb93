use std::sync::LazyLock;

use regex::Regex;

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static DATE_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap());
static LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-ZÀ-ÿ]").unwrap());

/// First line of a detail blob that reads like a person's name.
///
/// Skips hashtag lines, bare numbers and lines opening with an ISO date.
pub fn extract(text: &str) -> Option<String> {
    text.lines()
        .map(str::trim)
        .find(|line| is_name_line(line))
        .map(str::to_string)
}

fn is_name_line(line: &str) -> bool {
    !line.is_empty()
        && !line.starts_with('#')
        && !NUMERIC_RE.is_match(line)
        && !DATE_PREFIX_RE.is_match(line)
        && LETTER_RE.is_match(line)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_noise_lines() {
        let blob = "\n  42\n2024-03-01\n#dalle #reglette\n  Jérémie R.  \nAutre";
        assert_eq!(extract(blob).as_deref(), Some("Jérémie R."));
    }

    #[test]
    fn accented_only_name() {
        assert_eq!(extract("2024-01-01\nÉlodie").as_deref(), Some("Élodie"));
    }

    #[test]
    fn symbols_only_is_not_a_name() {
        assert_eq!(extract("--\n***\n12"), None);
    }

    #[test]
    fn line_with_date_after_name_is_kept() {
        // Only a leading date disqualifies a line.
        assert_eq!(extract("Max 2024-01-01").as_deref(), Some("Max 2024-01-01"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   \n \n"), None);
    }
}
