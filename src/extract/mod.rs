pub mod date;
pub mod hashtags;
pub mod opener;
pub mod sector;

use std::collections::BTreeSet;

/// Fields pulled out of one card's detail view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailFields {
    pub opened_at: Option<String>,
    pub opener_name: Option<String>,
    pub hashtags: BTreeSet<String>,
    pub sector: String,
}

/// Fold the detail-view fragments of one card into a single bundle.
///
/// Date and opener come from the first fragment that yields one; hashtags
/// are collected from every fragment.
pub fn extract_details(fragments: &[String], sector_hint: Option<&str>, fallback_sector: &str) -> DetailFields {
    let mut fields = DetailFields {
        sector: sector::extract(sector_hint, fallback_sector),
        ..Default::default()
    };

    for fragment in fragments.iter().map(|f| f.trim()).filter(|f| !f.is_empty()) {
        if fields.opened_at.is_none() {
            fields.opened_at = date::extract(fragment);
        }
        if fields.opener_name.is_none() {
            fields.opener_name = opener::extract(fragment);
        }
        fields.hashtags.extend(hashtags::extract(fragment));
    }

    fields
}

// ── Tests ──
