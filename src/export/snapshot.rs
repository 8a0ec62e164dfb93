use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::BlocRecord;
use crate::error::{ScrapeError, ScrapeResult};

/// The JSON document written after a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub scraped_at: DateTime<Local>,
    pub blocs: Vec<BlocRecord>,
}

impl Snapshot {
    /// Records are sorted by number.
    pub fn new(scraped_at: DateTime<Local>, mut blocs: Vec<BlocRecord>) -> Self {
        blocs.sort_by_key(|b| b.number);
        Snapshot { scraped_at, blocs }
    }
}

/// Pretty-printed UTF-8 JSON; accents are written as-is.
pub fn render(snapshot: &Snapshot) -> ScrapeResult<String> {
    serde_json::to_string_pretty(snapshot).map_err(ScrapeError::Serialize)
}

pub fn read(path: &Path) -> ScrapeResult<Snapshot> {
    let raw = fs::read_to_string(path).map_err(|source| ScrapeError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ScrapeError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub struct SnapshotStats {
    pub total: usize,
    /// Blocs whose opening date differs from the scrape day.
    pub with_date: usize,
    pub per_sector: BTreeMap<String, usize>,
}

impl SnapshotStats {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let scrape_day = snapshot.scraped_at.format("%Y-%m-%d").to_string();
        let mut per_sector = BTreeMap::new();
        for b in &snapshot.blocs {
            *per_sector.entry(b.sector.clone()).or_insert(0) += 1;
        }
        SnapshotStats {
            total: snapshot.blocs.len(),
            with_date: snapshot
                .blocs
                .iter()
                .filter(|b| b.opened_at != scrape_day)
                .count(),
            per_sector,
        }
    }

    pub fn print(&self) {
        println!("Blocs:     {}", self.total);
        println!("With date: {}/{}", self.with_date, self.total);
        println!("\n--- Sectors ---");
        for (sector, count) in &self.per_sector {
            println!("  {:<16} {:>4}", sector, count);
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn record(number: u32, sector: &str, opened_at: &str) -> BlocRecord {
        BlocRecord {
            number,
            name: format!("Bloc {}", number),
            difficulty: "Vert".to_string(),
            hold_color_hex: "#22c55e".to_string(),
            hold_color_category: "green".to_string(),
            main_photo: None,
            sector: sector.to_string(),
            route_types: vec![],
            opened_at: opened_at.to_string(),
            opener_name: None,
        }
    }

    fn at(day: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, day, 12, 0, 0).single().unwrap()
    }

    fn scraped_at_field(json: &str) -> &str {
        let start = json.find("\"scrapedAt\": \"").unwrap() + "\"scrapedAt\": \"".len();
        let len = json[start..].find('"').unwrap();
        &json[start..start + len]
    }

    #[test]
    fn sorted_and_camel_case() {
        let snap = Snapshot::new(at(18), vec![record(9, "Lego", "2026-01-02"), record(2, "Éléphant", "2026-10-18")]);
        let json = render(&snap).unwrap();
        assert!(scraped_at_field(&json).starts_with("2026-10-18T12:00:00"));
        assert!(json.contains("\"holdColorHex\""));
        assert!(json.contains("\"openerName\": null"));
        assert!(json.contains("Éléphant"), "non-ASCII must not be escaped");
        assert!(json.find("\"number\": 2").unwrap() < json.find("\"number\": 9").unwrap());
    }

    #[test]
    fn read_back() {
        let snap = Snapshot::new(at(18), vec![record(1, "Podium", "2024-01-12")]);
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), render(&snap).unwrap()).unwrap();
        assert_eq!(read(file.path()).unwrap(), snap);
    }

    #[test]
    fn scraped_at_is_rfc3339_with_offset() {
        let now = Local::now();
        let json = render(&Snapshot::new(now, vec![])).unwrap();
        let stamp = scraped_at_field(&json);
        let parsed = DateTime::parse_from_rfc3339(stamp).unwrap();
        assert_eq!(parsed, now.fixed_offset());
    }

    #[test]
    fn stats_count_dates_and_sectors() {
        let snap = Snapshot::new(
            at(18),
            vec![
                record(1, "Podium", "2024-01-12"),
                record(2, "Podium", "2026-10-18"),
                record(3, "Lego", "2025-06-30"),
            ],
        );
        let stats = SnapshotStats::from_snapshot(&snap);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.with_date, 2);
        assert_eq!(stats.per_sector.get("Podium"), Some(&2));
        assert_eq!(stats.per_sector.get("Lego"), Some(&1));
    }
}
