use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::ScrapeResult;
use crate::lexicon::tables::DEFAULT_SECTOR;

/// Optional settings file, looked up in the working directory (any format `config` knows).
const CONFIG_FILE: &str = "bloc_scraper";
const ENV_PREFIX: &str = "BLOC";

/// Runtime settings. Every key can be overridden with `BLOC_<KEY>`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Raw card captures written by the browser collaborator.
    pub input: PathBuf,
    pub output_json: PathBuf,
    pub output_sql: PathBuf,
    /// Gym name written in the SQL script header.
    pub venue: String,
    /// Sector used when a card carries no recognizable sector.
    pub fallback_sector: String,
    /// Bloc already present in the destination table; 0 disables the exclusion.
    pub excluded_number: u32,
    pub opener_id: String,
    pub placeholder_photo: String,
    pub status: String,
    pub table: String,
    /// Map hashtags through the route-type lexicon instead of keeping them verbatim.
    pub canonical_route_types: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from("data/cards.json"),
            output_json: PathBuf::from("data/sboulder-data-detailed.json"),
            output_sql: PathBuf::from("data/insert-zenith-blocs.sql"),
            venue: "Zenith".to_string(),
            fallback_sector: DEFAULT_SECTOR.to_string(),
            excluded_number: 16,
            opener_id: "57f59f9a-432e-46e2-a4fd-1df817b5b52f".to_string(),
            placeholder_photo:
                "https://socialboulder.s3-eu-west-1.amazonaws.com/800/bouldersPics/joa5yFWESd2bfGe47.jpg"
                    .to_string(),
            status: "ACTIVE".to_string(),
            table: "routes".to_string(),
            canonical_route_types: false,
        }
    }
}

impl Settings {
    pub fn excluded(&self) -> Option<u32> {
        (self.excluded_number != 0).then_some(self.excluded_number)
    }
}

/// Defaults, then the settings file, then `BLOC_*` env vars.
///
/// An explicit `path` must exist; otherwise `bloc_scraper.{toml,json,yaml}` is optional.
pub fn load(path: Option<&Path>) -> ScrapeResult<Settings> {
    let file = match path {
        Some(p) => File::from(p).required(true),
        None => File::with_name(CONFIG_FILE).required(false),
    };
    let settings = Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?
        .try_deserialize()?;
    Ok(settings)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::io::Write;

    use config::FileFormat;

    use super::*;

    fn from_toml(toml: &str) -> ScrapeResult<Settings> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    #[test]
    fn defaults_match_reference_deployment() {
        let s = Settings::default();
        assert_eq!(s.fallback_sector, "Zenith");
        assert_eq!(s.excluded(), Some(16));
        assert_eq!(s.status, "ACTIVE");
        assert!(!s.canonical_route_types);
    }

    #[test]
    fn toml_overrides_only_given_keys() {
        let s = from_toml(
            r#"
            fallback_sector = "Annexe"
            excluded_number = 0
            output_sql = "out/blocs.sql"
            "#,
        )
        .unwrap();
        assert_eq!(s.fallback_sector, "Annexe");
        assert_eq!(s.venue, "Zenith");
        assert_eq!(s.excluded(), None);
        assert_eq!(s.output_sql, PathBuf::from("out/blocs.sql"));
        assert_eq!(s.table, "routes");
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "table = \"routes_staging\"").unwrap();
        let s = load(Some(file.path())).unwrap();
        assert_eq!(s.table, "routes_staging");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(load(Some(Path::new("does/not/exist.toml"))).is_err());
    }
}
