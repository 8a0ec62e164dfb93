use std::fmt::Write;

use chrono::{DateTime, Local, SecondsFormat};

use super::BlocRecord;
use crate::settings::Settings;

const COLUMNS: &str = r#"id, name, difficulty, "holdColorHex", "holdColorCategory", sector, "routeTypes", description, tips, "openerId", "mainPhoto", status, "openedAt", "createdAt", "updatedAt""#;

/// Difficulty values the destination enum spells differently.
const DIFFICULTY_FIXES: &[(&str, &str)] = &[("Bleu", "Bleu foncé"), ("Bleu fonce", "Bleu foncé")];

/// Single-quoted SQL literal with embedded quotes doubled.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

pub fn fix_difficulty(name: &str) -> &str {
    DIFFICULTY_FIXES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

pub fn fix_hold_category(code: &str) -> &str {
    if code == "gray" {
        "grey"
    } else {
        code
    }
}

/// One INSERT for a bloc.
pub fn insert_statement(bloc: &BlocRecord, settings: &Settings) -> String {
    let name = format!("Bloc {}", bloc.number);
    let photo = bloc
        .main_photo
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .unwrap_or(settings.placeholder_photo.as_str());
    let types = serde_json::to_string(&bloc.route_types).unwrap_or_else(|_| "[]".to_string());

    let values = [
        "gen_random_uuid()".to_string(),
        quote(&name),
        quote(fix_difficulty(&bloc.difficulty)),
        quote(&bloc.hold_color_hex),
        quote(fix_hold_category(&bloc.hold_color_category)),
        quote(&bloc.sector),
        format!("{}::jsonb", quote(&types)),
        quote(&name),
        quote(""),
        quote(&settings.opener_id),
        quote(photo),
        quote(&settings.status),
        quote(&bloc.opened_at),
        "NOW()".to_string(),
        "NOW()".to_string(),
    ];

    format!(
        "INSERT INTO {} ({})\nVALUES ({});\n",
        settings.table,
        COLUMNS,
        values.join(", ")
    )
}

/// The whole script: header, then one transaction with every bloc in number order.
pub fn render_script(blocs: &[BlocRecord], settings: &Settings, generated_at: DateTime<Local>) -> String {
    let mut sorted: Vec<&BlocRecord> = blocs.iter().collect();
    sorted.sort_by_key(|b| b.number);

    let mut sql = String::new();
    let _ = writeln!(
        sql,
        "-- Blocs {} - {}",
        settings.venue,
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, false)
    );
    let _ = writeln!(sql, "-- Total: {}", sorted.len());
    sql.push_str("\nBEGIN;\n\n");

    for bloc in sorted {
        if settings.excluded() == Some(bloc.number) {
            let _ = writeln!(sql, "-- Bloc {} already exists in {}, skipped\n", bloc.number, settings.table);
            continue;
        }
        sql.push_str(&insert_statement(bloc, settings));
        sql.push('\n');
    }

    sql.push_str("COMMIT;\n");
    sql
}

// ── Tests ──
