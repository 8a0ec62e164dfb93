mod assemble;
mod cards;
mod error;
mod export;
mod extract;
mod lexicon;
mod settings;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use assemble::{Assembler, BlocCollection, RunSummary};
use export::snapshot::SnapshotStats;
use settings::Settings;

#[derive(Parser)]
#[command(name = "bloc_scraper", about = "Normalize scraped bouldering cards into a JSON snapshot and SQL inserts")]
struct Cli {
    /// Settings file (default: ./bloc_scraper.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble card captures and write the snapshot + SQL script
    Process {
        /// Card captures JSON (default: settings `input`)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Max cards to process (default: all)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
    /// Regenerate the SQL script from an existing snapshot
    Sql {
        /// Snapshot JSON (default: settings `output_json`)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
    /// Show how a raw label resolves
    Resolve {
        #[arg(value_enum)]
        kind: LexiconKind,
        label: String,
    },
    /// Show snapshot statistics
    Stats {
        /// Snapshot JSON (default: settings `output_json`)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LexiconKind {
    Difficulty,
    HoldColor,
    Sector,
    RouteType,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = settings::load(cli.config.as_deref()).context("Failed to load settings")?;
    info!(settings = ?settings, "Settings loaded");

    let result = match cli.command {
        Commands::Process { input, limit } => {
            let path = input.unwrap_or_else(|| settings.input.clone());
            let mut cards = cards::load(&path)?;
            if let Some(n) = limit {
                cards.truncate(n);
            }
            if cards.is_empty() {
                println!("No card captures in {}.", path.display());
                return Ok(());
            }

            println!("Assembling {} cards...", cards.len());
            let mut blocs = BlocCollection::new();
            let summary = process_cards(&settings, &cards, &mut blocs)?;
            summary.print();
            if blocs.is_empty() {
                println!("Nothing to export.");
                return Ok(());
            }

            println!("Exporting {} blocs...", blocs.len());
            let now = chrono::Local::now();
            export::write_outputs(&blocs, &settings, now)?;
            println!("JSON: {}", settings.output_json.display());
            println!("SQL:  {}", settings.output_sql.display());
            Ok(())
        }
        Commands::Sql { snapshot } => {
            let path = snapshot.unwrap_or_else(|| settings.output_json.clone());
            let snap = export::snapshot::read(&path)?;
            let now = chrono::Local::now();
            let script = export::sql::render_script(&snap.blocs, &settings, now);
            export::write_file(&settings.output_sql, &script)?;
            println!(
                "Wrote {} blocs to {}",
                snap.blocs.len(),
                settings.output_sql.display()
            );
            Ok(())
        }
        Commands::Resolve { kind, label } => {
            print_resolution(kind, &label, &settings);
            Ok(())
        }
        Commands::Stats { snapshot } => {
            let path = snapshot.unwrap_or_else(|| settings.output_json.clone());
            let snap = export::snapshot::read(&path)?;
            println!("Scraped at: {}", snap.scraped_at);
            SnapshotStats::from_snapshot(&snap).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn process_cards(
    settings: &Settings,
    cards: &[cards::RawCard],
    blocs: &mut BlocCollection,
) -> anyhow::Result<RunSummary> {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(cards.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")?
            .progress_chars("#>-"),
    );

    let summary = Assembler::new(settings).ingest_all(cards, blocs, |_| pb.inc(1));

    pb.finish_and_clear();
    Ok(summary)
}

fn print_resolution(kind: LexiconKind, label: &str, settings: &Settings) {
    match kind {
        LexiconKind::Difficulty | LexiconKind::HoldColor => {
            let resolution = match kind {
                LexiconKind::Difficulty => lexicon::resolve_difficulty(label),
                _ => lexicon::resolve_hold_color(label),
            };
            let tag = if resolution.is_default() { "default" } else { "matched" };
            let entry = resolution.into_inner();
            println!("{} | {} | {} ({})", entry.name, entry.code, entry.hex_or_empty(), tag);
        }
        LexiconKind::Sector => match lexicon::find_sector(label) {
            Some(name) => println!("{} (matched)", name),
            None => println!("{} (default)", settings.fallback_sector),
        },
        LexiconKind::RouteType => {
            let types = lexicon::route_types(label);
            if types.is_empty() {
                println!("(none)");
            } else {
                println!("{}", types.join(", "));
            }
        }
    }
}
