use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ScrapeError, ScrapeResult};

/// Raw strings read off one route card by the browser collaborator.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCard {
    /// Bloc-number text as displayed, e.g. "Bloc 12".
    pub number: String,
    pub difficulty_label: String,
    pub hold_color_label: String,
    /// Text of each info element in the detail view.
    pub details: Vec<String>,
    pub sector_hint: Option<String>,
    pub detail_photo: Option<String>,
    pub card_photo: Option<String>,
}

/// Load a JSON array of card captures.
pub fn load(path: &Path) -> ScrapeResult<Vec<RawCard>> {
    let raw = fs::read_to_string(path).map_err(|source| ScrapeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cards: Vec<RawCard> = serde_json::from_str(&raw).map_err(|source| ScrapeError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded {} card captures from {}", cards.len(), path.display());
    Ok(cards)
}

// ── Tests ──
