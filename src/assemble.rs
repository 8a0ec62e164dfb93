use std::collections::btree_map::{BTreeMap, Entry};
use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::cards::RawCard;
use crate::settings::Settings;
use crate::error::CardError;
use crate::export::BlocRecord;
use crate::extract::{self, DetailFields};
use crate::lexicon::{self, CategoryEntry};

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)").unwrap());

/// One physical route, fully normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bloc {
    pub number: u32,
    pub difficulty: CategoryEntry,
    pub hold_color: CategoryEntry,
    pub sector: String,
    pub route_types: BTreeSet<String>,
    pub opened_at: String,
    pub opener_name: Option<String>,
    pub main_photo: Option<String>,
}

impl Bloc {
    pub fn name(&self) -> String {
        format!("Bloc {}", self.number)
    }

    pub fn to_record(&self) -> BlocRecord {
        BlocRecord {
            number: self.number,
            name: self.name(),
            difficulty: self.difficulty.name.to_string(),
            hold_color_hex: self.hold_color.hex_or_empty().to_string(),
            hold_color_category: self.hold_color.code.to_string(),
            main_photo: self.main_photo.clone(),
            sector: self.sector.clone(),
            route_types: self.route_types.iter().cloned().collect(),
            opened_at: self.opened_at.clone(),
            opener_name: self.opener_name.clone(),
        }
    }
}

/// Photo URLs seen for one card, in order of preference.
#[derive(Debug, Clone, Copy, Default)]
pub struct Photos<'a> {
    pub detail: Option<&'a str>,
    pub card: Option<&'a str>,
}

impl Photos<'_> {
    /// Detail-view photo, else the summary-card photo. Blank URLs are ignored.
    pub fn pick(&self) -> Option<String> {
        [self.detail, self.card]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .map(str::to_string)
    }
}

/// Build one bloc from its raw labels and extracted fields.
///
/// Never fails: unknown labels become grey, a missing date becomes `today`.
pub fn assemble_bloc(
    number: u32,
    difficulty_label: &str,
    hold_color_label: &str,
    fields: DetailFields,
    photos: Photos,
    today: &str,
) -> Bloc {
    let difficulty = lexicon::resolve_difficulty(difficulty_label);
    if difficulty.is_default() {
        debug!(number, label = difficulty_label, "difficulty defaulted to grey");
    }
    let hold_color = lexicon::resolve_hold_color(hold_color_label);
    if hold_color.is_default() {
        debug!(number, label = hold_color_label, "hold color defaulted to grey");
    }

    Bloc {
        number,
        difficulty: difficulty.into_inner(),
        hold_color: hold_color.into_inner(),
        sector: fields.sector,
        route_types: fields.hashtags,
        opened_at: fields.opened_at.unwrap_or_else(|| today.to_string()),
        opener_name: fields.opener_name,
        main_photo: photos.pick(),
    }
}

/// First run of digits in the scraped number text.
pub fn parse_bloc_number(raw: &str) -> Result<u32, CardError> {
    let caps = NUMBER_RE
        .captures(raw)
        .ok_or_else(|| CardError::MissingNumber(raw.to_string()))?;
    match caps[1].parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CardError::InvalidNumber(raw.to_string())),
    }
}

/// Map hashtags onto canonical route types; unknown tags are kept as scraped.
pub fn canonicalize_route_types(tags: BTreeSet<String>) -> BTreeSet<String> {
    tags.into_iter()
        .flat_map(|tag| {
            let known = lexicon::route_types(&tag);
            if known.is_empty() {
                vec![tag]
            } else {
                known.into_iter().map(str::to_string).collect()
            }
        })
        .collect()
}

/// Blocs keyed by number. The first bloc inserted for a number is kept.
#[derive(Debug, Default)]
pub struct BlocCollection {
    blocs: BTreeMap<u32, Bloc>,
}

impl BlocCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert if absent. Returns false when the number was already taken.
    pub fn insert(&mut self, bloc: Bloc) -> bool {
        match self.blocs.entry(bloc.number) {
            Entry::Vacant(slot) => {
                slot.insert(bloc);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.blocs.contains_key(&number)
    }

    #[cfg(test)]
    pub fn get(&self, number: u32) -> Option<&Bloc> {
        self.blocs.get(&number)
    }

    pub fn len(&self) -> usize {
        self.blocs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocs.is_empty()
    }

    /// Ascending by number.
    pub fn iter(&self) -> impl Iterator<Item = &Bloc> {
        self.blocs.values()
    }

    pub fn records(&self) -> Vec<BlocRecord> {
        self.iter().map(Bloc::to_record).collect()
    }
}

/// What happened to one card.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Assembled { number: u32, dated: bool },
    Duplicate(u32),
    Skipped(CardError),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub assembled: usize,
    pub duplicates: usize,
    pub skipped: usize,
    /// Assembled blocs whose opening date came from the page.
    pub dated: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Assembled { dated, .. } => {
                self.assembled += 1;
                if *dated {
                    self.dated += 1;
                }
            }
            Outcome::Duplicate(_) => self.duplicates += 1,
            Outcome::Skipped(_) => self.skipped += 1,
        }
    }

    pub fn print(&self) {
        println!(
            "Assembled {} blocs ({} with a page date), {} duplicates, {} skipped.",
            self.assembled, self.dated, self.duplicates, self.skipped,
        );
    }
}

/// Turns raw cards into blocs with the configured fallbacks.
pub struct Assembler<'a> {
    settings: &'a Settings,
    today: String,
}

impl<'a> Assembler<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        Self::with_today(settings, today)
    }

    pub fn with_today(settings: &'a Settings, today: String) -> Self {
        Assembler { settings, today }
    }

    /// Assemble one card into the collection unless its number is bad or already seen.
    pub fn ingest(&self, card: &RawCard, blocs: &mut BlocCollection) -> Outcome {
        let number = match parse_bloc_number(&card.number) {
            Ok(n) => n,
            Err(e) => {
                warn!("Skipping card: {}", e);
                return Outcome::Skipped(e);
            }
        };
        if blocs.contains(number) {
            debug!(number, "already assembled, keeping the first one");
            return Outcome::Duplicate(number);
        }

        let mut fields = extract::extract_details(
            &card.details,
            card.sector_hint.as_deref(),
            &self.settings.fallback_sector,
        );
        if self.settings.canonical_route_types {
            fields.hashtags = canonicalize_route_types(fields.hashtags);
        }
        let dated = fields.opened_at.is_some();

        let photos = Photos {
            detail: card.detail_photo.as_deref(),
            card: card.card_photo.as_deref(),
        };
        let bloc = assemble_bloc(
            number,
            &card.difficulty_label,
            &card.hold_color_label,
            fields,
            photos,
            &self.today,
        );
        debug!(
            number,
            difficulty = bloc.difficulty.name,
            sector = %bloc.sector,
            opened_at = %bloc.opened_at,
            "assembled"
        );
        blocs.insert(bloc);
        Outcome::Assembled { number, dated }
    }

    /// Ingest every card in order, calling `on_card` after each one.
    pub fn ingest_all(
        &self,
        cards: &[RawCard],
        blocs: &mut BlocCollection,
        mut on_card: impl FnMut(&Outcome),
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        for card in cards {
            let outcome = self.ingest(card, blocs);
            summary.record(&outcome);
            on_card(&outcome);
        }
        summary
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::cards;

    const TODAY: &str = "2026-10-18";

    fn fixture_blocs(settings: &Settings) -> (BlocCollection, RunSummary) {
        let cards = cards::load(Path::new("tests/fixtures/cards.json")).unwrap();
        let assembler = Assembler::with_today(settings, TODAY.to_string());
        let mut blocs = BlocCollection::new();
        let summary = assembler.ingest_all(&cards, &mut blocs, |_| {});
        (blocs, summary)
    }

    fn fields(sector: &str) -> DetailFields {
        DetailFields {
            sector: sector.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_bloc_number("Bloc 12"), Ok(12));
        assert_eq!(parse_bloc_number(" 7 "), Ok(7));
        assert_eq!(parse_bloc_number("#42b"), Ok(42));
        assert_eq!(parse_bloc_number("Bloc ١٢ / 12"), Ok(12));
        assert!(matches!(parse_bloc_number("Bloc ١٢"), Err(CardError::MissingNumber(_))));
        assert!(matches!(parse_bloc_number("Bloc"), Err(CardError::MissingNumber(_))));
        assert!(matches!(parse_bloc_number(""), Err(CardError::MissingNumber(_))));
        assert!(matches!(parse_bloc_number("0"), Err(CardError::InvalidNumber(_))));
        assert!(matches!(
            parse_bloc_number("99999999999999"),
            Err(CardError::InvalidNumber(_))
        ));
    }

    #[test]
    fn defaults_when_nothing_resolves() {
        let bloc = assemble_bloc(3, "", "???", fields("Zenith"), Photos::default(), TODAY);
        assert_eq!(bloc.difficulty.name, "Gris");
        assert_eq!(bloc.hold_color.code, "grey");
        assert_eq!(bloc.opened_at, TODAY);
        assert_eq!(bloc.opener_name, None);
        assert_eq!(bloc.main_photo, None);
        assert!(bloc.route_types.is_empty());
    }

    #[test]
    fn photo_preference() {
        let both = Photos {
            detail: Some("https://a/detail.jpg"),
            card: Some("https://a/card.jpg"),
        };
        assert_eq!(both.pick().as_deref(), Some("https://a/detail.jpg"));
        let card_only = Photos {
            detail: Some(""),
            card: Some("https://a/card.jpg"),
        };
        assert_eq!(card_only.pick().as_deref(), Some("https://a/card.jpg"));
        assert_eq!(Photos::default().pick(), None);
    }

    #[test]
    fn first_seen_number_wins() {
        let mut blocs = BlocCollection::new();
        let first = assemble_bloc(5, "vert", "jaune", fields("Lego"), Photos::default(), TODAY);
        let second = assemble_bloc(5, "noir", "rouge", fields("Podium"), Photos::default(), TODAY);
        assert!(blocs.insert(first.clone()));
        assert!(!blocs.insert(second));
        assert_eq!(blocs.len(), 1);
        assert_eq!(blocs.get(5), Some(&first));
    }

    #[test]
    fn fixture_run_summary() {
        let (blocs, summary) = fixture_blocs(&Settings::default());
        assert_eq!(
            summary,
            RunSummary {
                assembled: 4,
                duplicates: 1,
                skipped: 1,
                dated: 3,
            }
        );
        let numbers: Vec<u32> = blocs.iter().map(|b| b.number).collect();
        assert_eq!(numbers, vec![1, 7, 12, 16]);
    }

    #[test]
    fn ingest_all_reports_every_card() {
        let cards = cards::load(Path::new("tests/fixtures/cards.json")).unwrap();
        let settings = Settings::default();
        let mut blocs = BlocCollection::new();
        let mut seen = Vec::new();
        let summary = Assembler::with_today(&settings, TODAY.to_string())
            .ingest_all(&cards, &mut blocs, |outcome| seen.push(format!("{:?}", outcome)));
        assert_eq!(seen.len(), cards.len());
        assert_eq!(seen[2], "Duplicate(1)");
        assert!(seen[3].starts_with("Skipped("));
        assert_eq!(summary.assembled + summary.duplicates + summary.skipped, seen.len());
    }

    #[test]
    fn fixture_bloc_fields() {
        let (blocs, _) = fixture_blocs(&Settings::default());

        let b1 = blocs.get(1).unwrap();
        assert_eq!(b1.difficulty.name, "Vert");
        assert_eq!(b1.hold_color.code, "yellow");
        assert_eq!(b1.sector, "Sous-bois");
        assert_eq!(b1.opened_at, "2024-05-02");
        assert_eq!(b1.opener_name.as_deref(), Some("Camille"));
        let types: Vec<&str> = b1.route_types.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Dalle", "Equilibre"]);

        let b7 = blocs.get(7).unwrap();
        assert_eq!(b7.difficulty.name, "Bleu fonce");
        assert_eq!(b7.hold_color.code, "grey");
        assert_eq!(b7.sector, "Zenith");
        assert_eq!(b7.opened_at, TODAY);
        assert_eq!(b7.opener_name, None);
        assert!(b7.main_photo.as_deref().unwrap().ends_with("b7-card.jpg"));

        let b12 = blocs.get(12).unwrap();
        assert_eq!(b12.difficulty.name, "Gris");
        assert_eq!(b12.sector, "Massif central");
        assert_eq!(b12.opened_at, "2024-02-03");
        assert_eq!(b12.opener_name.as_deref(), Some("Lucie O'Brien"));
        assert_eq!(b12.main_photo.as_deref(), Some("https://cdn.example.com/o'brien.jpg"));

        let b16 = blocs.get(16).unwrap();
        assert_eq!(b16.difficulty.name, "Bleu foncé");
        assert_eq!(b16.hold_color.code, "red");
        assert_eq!(b16.opened_at, "2024-01-12");
    }

    #[test]
    fn fallback_sector_is_configurable() {
        let settings = Settings {
            fallback_sector: "Annexe".to_string(),
            ..Settings::default()
        };
        let (blocs, _) = fixture_blocs(&settings);
        assert_eq!(blocs.get(7).unwrap().sector, "Annexe");
    }

    #[test]
    fn canonical_route_types() {
        let tags: BTreeSet<String> = ["Dyno", "arete", "Slopers"].iter().map(|s| s.to_string()).collect();
        let canon: Vec<String> = canonicalize_route_types(tags).into_iter().collect();
        assert_eq!(canon, vec!["Arete", "Dynamique", "Slopers"]);

        let settings = Settings {
            canonical_route_types: true,
            ..Settings::default()
        };
        let (blocs, _) = fixture_blocs(&settings);
        let types: Vec<&str> = blocs.get(16).unwrap().route_types.iter().map(String::as_str).collect();
        assert_eq!(types, vec!["Dynamique"]);
    }
}
