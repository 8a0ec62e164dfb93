pub mod tables;

/// Canonical category a raw label resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub hex: Option<&'static str>,
}

impl CategoryEntry {
    pub const fn new(name: &'static str, code: &'static str, hex: &'static str) -> Self {
        CategoryEntry {
            name,
            code,
            hex: Some(hex),
        }
    }

    pub const fn plain(name: &'static str, code: &'static str) -> Self {
        CategoryEntry {
            name,
            code,
            hex: None,
        }
    }

    pub fn hex_or_empty(&self) -> &'static str {
        self.hex.unwrap_or("")
    }
}

/// Outcome of a lookup: matched a table key, or fell back to the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Defaulted(T),
}

impl<T> Resolution<T> {
    pub fn into_inner(self) -> T {
        match self {
            Resolution::Resolved(v) | Resolution::Defaulted(v) => v,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Resolution::Defaulted(_))
    }
}

/// How a lookup compares the cleaned label against table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exact key first, then substring containment.
    ExactThenContains,
    /// Substring containment only.
    Contains,
}

/// A static many-to-one mapping from raw tokens to canonical entries.
pub struct Lexicon {
    pub entries: &'static [(&'static str, CategoryEntry)],
    /// Removed from the label before matching (e.g. "niveau ", " holds").
    pub noise: &'static [&'static str],
    pub mode: MatchMode,
}

impl Lexicon {
    /// Lowercase, strip noise words, trim.
    pub fn clean(&self, raw: &str) -> String {
        let mut label = raw.to_lowercase();
        for word in self.noise {
            label = label.replace(word, "");
        }
        label.trim().to_string()
    }

    /// Best single match, or `None`.
    ///
    /// Substring ties go to the longest key; equal lengths keep table order.
    pub fn find(&self, raw: &str) -> Option<CategoryEntry> {
        let label = self.clean(raw);
        if label.is_empty() {
            return None;
        }

        if self.mode == MatchMode::ExactThenContains {
            if let Some((_, entry)) = self.entries.iter().find(|(key, _)| *key == label) {
                return Some(*entry);
            }
        }

        let mut best: Option<(&str, CategoryEntry)> = None;
        for (key, entry) in self.entries {
            if !label.contains(key) {
                continue;
            }
            match best {
                Some((k, _)) if k.chars().count() >= key.chars().count() => {}
                _ => best = Some((*key, *entry)),
            }
        }
        best.map(|(_, entry)| entry)
    }

    /// Total lookup: falls back to `default` when nothing matches.
    pub fn resolve(&self, raw: &str, default: CategoryEntry) -> Resolution<CategoryEntry> {
        match self.find(raw) {
            Some(entry) => Resolution::Resolved(entry),
            None => Resolution::Defaulted(default),
        }
    }

    /// Every distinct entry whose key occurs in the label, in table order.
    pub fn find_all(&self, raw: &str) -> Vec<CategoryEntry> {
        let label = self.clean(raw);
        let mut found: Vec<CategoryEntry> = Vec::new();
        for (key, entry) in self.entries {
            if label.contains(key) && !found.contains(entry) {
                found.push(*entry);
            }
        }
        found
    }
}

/// Resolve a difficulty label; unknown labels become grey.
pub fn resolve_difficulty(raw: &str) -> Resolution<CategoryEntry> {
    tables::DIFFICULTY.resolve(raw, tables::GREY_DIFFICULTY)
}

/// Resolve a hold-color label; unknown labels become grey.
pub fn resolve_hold_color(raw: &str) -> Resolution<CategoryEntry> {
    tables::HOLD_COLOR.resolve(raw, tables::GREY_HOLDS)
}

/// Sector name found in the text, if any.
pub fn find_sector(raw: &str) -> Option<&'static str> {
    tables::SECTOR.find(raw).map(|e| e.name)
}

/// Canonical route-type labels mentioned in the text. Never defaulted.
pub fn route_types(raw: &str) -> Vec<&'static str> {
    tables::ROUTE_TYPE
        .find_all(raw)
        .into_iter()
        .map(|e| e.name)
        .collect()
}

// ── Tests ──
