pub mod snapshot;
pub mod sql;

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assemble::BlocCollection;
use crate::settings::Settings;
use crate::error::{ScrapeError, ScrapeResult};

/// A bloc as it appears in the snapshot, categories flattened to strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocRecord {
    pub number: u32,
    pub name: String,
    pub difficulty: String,
    pub hold_color_hex: String,
    pub hold_color_category: String,
    pub main_photo: Option<String>,
    pub sector: String,
    pub route_types: Vec<String>,
    pub opened_at: String,
    pub opener_name: Option<String>,
}

/// Write the snapshot and the insertion script, overwriting previous runs.
pub fn write_outputs(
    blocs: &BlocCollection,
    settings: &Settings,
    now: DateTime<Local>,
) -> ScrapeResult<()> {
    let records = blocs.records();

    let snap = snapshot::Snapshot::new(now, records.clone());
    write_file(&settings.output_json, &snapshot::render(&snap)?)?;
    info!("Wrote snapshot: {}", settings.output_json.display());

    let script = sql::render_script(&records, settings, now);
    write_file(&settings.output_sql, &script)?;
    info!("Wrote SQL script: {}", settings.output_sql.display());
    Ok(())
}

pub(crate) fn write_file(path: &Path, contents: &str) -> ScrapeResult<()> {
    let wrap = |source| ScrapeError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)
}

// ── Tests ──
