use super::{CategoryEntry, Lexicon, MatchMode};

// ── Difficulty levels ──

const GREEN: CategoryEntry = CategoryEntry::new("Vert", "green", "#22c55e");
const LIGHT_GREEN: CategoryEntry = CategoryEntry::new("Vert clair", "light-green", "#86efac");
const LIGHT_BLUE: CategoryEntry = CategoryEntry::new("Bleu clair", "light-blue", "#7dd3fc");
const BLUE: CategoryEntry = CategoryEntry::new("Bleu foncé", "blue", "#3b82f6");
// Legacy display without the accent; the SQL export rewrites it.
const DARK_BLUE: CategoryEntry = CategoryEntry::new("Bleu fonce", "dark-blue", "#1d4ed8");
const PURPLE: CategoryEntry = CategoryEntry::new("Violet", "purple", "#a855f7");
const PINK: CategoryEntry = CategoryEntry::new("Rose", "pink", "#ec4899");
const RED: CategoryEntry = CategoryEntry::new("Rouge", "red", "#ef4444");
const ORANGE: CategoryEntry = CategoryEntry::new("Orange", "orange", "#f97316");
const YELLOW: CategoryEntry = CategoryEntry::new("Jaune", "yellow", "#eab308");
const WHITE: CategoryEntry = CategoryEntry::new("Blanc", "white", "#f3f4f6");
const BLACK: CategoryEntry = CategoryEntry::new("Noir", "black", "#1f2937");
pub const GREY_DIFFICULTY: CategoryEntry = CategoryEntry::new("Gris", "grey", "#6b7280");

pub static DIFFICULTY: Lexicon = Lexicon {
    entries: &[
        ("green", GREEN),
        ("light green", LIGHT_GREEN),
        ("light blue", LIGHT_BLUE),
        ("blue", BLUE),
        ("dark blue", DARK_BLUE),
        ("purple", PURPLE),
        ("pink", PINK),
        ("red", RED),
        ("orange", ORANGE),
        ("yellow", YELLOW),
        ("white", WHITE),
        ("black", BLACK),
        ("gray", GREY_DIFFICULTY),
        ("grey", GREY_DIFFICULTY),
        ("vert", GREEN),
        ("vert clair", LIGHT_GREEN),
        ("bleu clair", LIGHT_BLUE),
        ("bleu", BLUE),
        ("bleu fonce", DARK_BLUE),
        ("bleu foncé", DARK_BLUE),
        ("violet", PURPLE),
        ("rose", PINK),
        ("rouge", RED),
        ("jaune", YELLOW),
        ("blanc", WHITE),
        ("noir", BLACK),
        ("gris", GREY_DIFFICULTY),
    ],
    noise: &["niveau ", "level "],
    mode: MatchMode::ExactThenContains,
};

// ── Hold colors ──
//
// Light shades keep their own hex but share the base category code.

const YELLOW_HOLDS: CategoryEntry = CategoryEntry::new("Jaune", "yellow", "#eab308");
const RED_HOLDS: CategoryEntry = CategoryEntry::new("Rouge", "red", "#ef4444");
const BLUE_HOLDS: CategoryEntry = CategoryEntry::new("Bleu", "blue", "#3b82f6");
const LIGHT_BLUE_HOLDS: CategoryEntry = CategoryEntry::new("Bleu", "blue", "#7dd3fc");
const GREEN_HOLDS: CategoryEntry = CategoryEntry::new("Vert", "green", "#22c55e");
const LIGHT_GREEN_HOLDS: CategoryEntry = CategoryEntry::new("Vert", "green", "#86efac");
const ORANGE_HOLDS: CategoryEntry = CategoryEntry::new("Orange", "orange", "#f97316");
const PURPLE_HOLDS: CategoryEntry = CategoryEntry::new("Violet", "purple", "#a855f7");
const PINK_HOLDS: CategoryEntry = CategoryEntry::new("Rose", "pink", "#ec4899");
const BLACK_HOLDS: CategoryEntry = CategoryEntry::new("Noir", "black", "#1f2937");
const WHITE_HOLDS: CategoryEntry = CategoryEntry::new("Blanc", "white", "#f3f4f6");
pub const GREY_HOLDS: CategoryEntry = CategoryEntry::new("Gris", "grey", "#6b7280");

pub static HOLD_COLOR: Lexicon = Lexicon {
    entries: &[
        ("yellow", YELLOW_HOLDS),
        ("red", RED_HOLDS),
        ("blue", BLUE_HOLDS),
        ("light blue", LIGHT_BLUE_HOLDS),
        ("green", GREEN_HOLDS),
        ("light green", LIGHT_GREEN_HOLDS),
        ("orange", ORANGE_HOLDS),
        ("purple", PURPLE_HOLDS),
        ("pink", PINK_HOLDS),
        ("black", BLACK_HOLDS),
        ("white", WHITE_HOLDS),
        ("gray", GREY_HOLDS),
        ("grey", GREY_HOLDS),
        ("jaunes", YELLOW_HOLDS),
        ("jaune", YELLOW_HOLDS),
        ("rouges", RED_HOLDS),
        ("rouge", RED_HOLDS),
        ("bleues", BLUE_HOLDS),
        ("bleu", BLUE_HOLDS),
        ("bleu clair", LIGHT_BLUE_HOLDS),
        ("vertes", GREEN_HOLDS),
        ("vert", GREEN_HOLDS),
        ("vert clair", LIGHT_GREEN_HOLDS),
        ("oranges", ORANGE_HOLDS),
        ("violettes", PURPLE_HOLDS),
        ("violet", PURPLE_HOLDS),
        ("roses", PINK_HOLDS),
        ("rose", PINK_HOLDS),
        ("noires", BLACK_HOLDS),
        ("noir", BLACK_HOLDS),
        ("blanches", WHITE_HOLDS),
        ("blanc", WHITE_HOLDS),
        ("grises", GREY_HOLDS),
        ("gris", GREY_HOLDS),
    ],
    noise: &[" holds", "prises "],
    mode: MatchMode::ExactThenContains,
};

// ── Sectors ──

pub const DEFAULT_SECTOR: &str = "Zenith";

const SOUS_BOIS: CategoryEntry = CategoryEntry::plain("Sous-bois", "sous-bois");
const CHAMPIGNON: CategoryEntry = CategoryEntry::plain("Champignon", "champignon");
const ELEPHANT: CategoryEntry = CategoryEntry::plain("Éléphant", "elephant");
const PODIUM: CategoryEntry = CategoryEntry::plain("Podium", "podium");
const HIGH_BOARD: CategoryEntry = CategoryEntry::plain("High-board", "high-board");
const BIBLIOTHEQUE: CategoryEntry = CategoryEntry::plain("Bibliothèque", "bibliotheque");
const BACKSTAGE: CategoryEntry = CategoryEntry::plain("Backstage", "backstage");
const BIGWALL: CategoryEntry = CategoryEntry::plain("Bigwall", "bigwall");
const MASSIF_CENTRAL: CategoryEntry = CategoryEntry::plain("Massif central", "massif-central");
const LEGO: CategoryEntry = CategoryEntry::plain("Lego", "lego");
const ZENITH: CategoryEntry = CategoryEntry::plain(DEFAULT_SECTOR, "zenith");

pub static SECTOR: Lexicon = Lexicon {
    entries: &[
        ("sous-bois", SOUS_BOIS),
        ("sousbois", SOUS_BOIS),
        ("champignon", CHAMPIGNON),
        ("elephant", ELEPHANT),
        ("éléphant", ELEPHANT),
        ("podium", PODIUM),
        ("high-board", HIGH_BOARD),
        ("highboard", HIGH_BOARD),
        ("high board", HIGH_BOARD),
        ("bibliotheque", BIBLIOTHEQUE),
        ("bibliothèque", BIBLIOTHEQUE),
        ("backstage", BACKSTAGE),
        ("bigwall", BIGWALL),
        ("big wall", BIGWALL),
        ("massif central", MASSIF_CENTRAL),
        ("massif-central", MASSIF_CENTRAL),
        ("massifcentral", MASSIF_CENTRAL),
        ("lego", LEGO),
        ("zenith", ZENITH),
    ],
    noise: &[],
    mode: MatchMode::Contains,
};

// ── Route types ──

const DALLE: CategoryEntry = CategoryEntry::plain("Dalle", "dalle");
const DEVERS: CategoryEntry = CategoryEntry::plain("Devers", "devers");
const VERTICAL: CategoryEntry = CategoryEntry::plain("Vertical", "vertical");
const DIEDRE: CategoryEntry = CategoryEntry::plain("Diedre", "diedre");
const ARETE: CategoryEntry = CategoryEntry::plain("Arete", "arete");
const TOIT: CategoryEntry = CategoryEntry::plain("Toit", "toit");
const DYNAMIQUE: CategoryEntry = CategoryEntry::plain("Dynamique", "dynamique");
const EQUILIBRE: CategoryEntry = CategoryEntry::plain("Equilibre", "equilibre");
const COORDINATION: CategoryEntry = CategoryEntry::plain("Coordination", "coordination");
const REGLETTE: CategoryEntry = CategoryEntry::plain("Reglette", "reglette");
const PINCE: CategoryEntry = CategoryEntry::plain("Pince", "pince");
const BAC: CategoryEntry = CategoryEntry::plain("Bac", "bac");
const PLAT: CategoryEntry = CategoryEntry::plain("Plat", "plat");
const ARQUEE: CategoryEntry = CategoryEntry::plain("Arquee", "arquee");

pub static ROUTE_TYPE: Lexicon = Lexicon {
    entries: &[
        ("dalle", DALLE),
        ("devers", DEVERS),
        ("vertical", VERTICAL),
        ("diedre", DIEDRE),
        ("arete", ARETE),
        ("toit", TOIT),
        ("dynamique", DYNAMIQUE),
        ("dyno", DYNAMIQUE),
        ("equilibre", EQUILIBRE),
        ("coordination", COORDINATION),
        ("reglette", REGLETTE),
        ("pince", PINCE),
        ("bac", BAC),
        ("plat", PLAT),
        ("arquee", ARQUEE),
    ],
    noise: &[],
    mode: MatchMode::Contains,
};
