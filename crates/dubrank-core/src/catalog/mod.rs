//! Immutable catalog of cutscene entries grouped into categories.

mod data;
mod error;
pub mod parser;

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::Serialize;
use tracing::debug;

pub use data::BUILTIN_CATALOG;
pub use error::CatalogError;
pub use parser::{parse_catalog, parse_category};

use crate::config::CatalogConfig;
use crate::duration::{Calculator, DurationValue, DEFAULT_FRAME_RATE};
use crate::lang::{LangMap, LanguageCode};

/// One cutscene with its per-language timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub description: String,
    /// How much slower each language is than the fastest one for this
    /// entry; `None` when the language has no voice data.
    pub deltas: LangMap<Option<DurationValue>>,
    /// Languages with no voice data for this entry. The display flags them
    /// as slowest.
    pub tied_for_slowest: Vec<LanguageCode>,
}

impl Entry {
    pub fn delta(&self, lang: LanguageCode) -> Option<&DurationValue> {
        self.deltas[lang].as_ref()
    }

    /// `name - description`, or just the name.
    pub fn label(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} - {}", self.name, self.description)
        }
    }
}

/// Named group of entries; never aggregated as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Position-based short id, `<category>-<entry>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId {
    pub category: usize,
    pub entry: usize,
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.entry)
    }
}

impl FromStr for EntryId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, entry) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("invalid entry id '{s}'"))?;
        let parse = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| format!("invalid entry id '{s}'"))
        };
        Ok(Self {
            category: parse(category)?,
            entry: parse(entry)?,
        })
    }
}

/// Parsed, read-only catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    frame_rate: u32,
    categories: Vec<Category>,
}

impl Catalog {
    /// Parse catalog text with the given calculator.
    pub fn parse(text: &str, calc: &Calculator) -> Result<Self, CatalogError> {
        let categories = parse_catalog(text, calc)?;
        debug!(
            categories = categories.len(),
            entries = categories.iter().map(|c| c.entries.len()).sum::<usize>(),
            frame_rate = calc.frame_rate(),
            "catalog parsed"
        );
        Ok(Self {
            frame_rate: calc.frame_rate(),
            categories,
        })
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path, calc: &Calculator) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|e| CatalogError::Read {
            path: path.display().to_string(),
            source: Arc::new(e),
        })?;
        Self::parse(&text, calc)
    }

    /// The shipped table, parsed once per process at the default frame rate.
    pub fn builtin() -> Result<&'static Catalog, CatalogError> {
        static BUILTIN: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Catalog::parse(BUILTIN_CATALOG, &Calculator::default()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Catalog selected by config: a custom file, or the shipped table.
    pub fn from_config(config: &CatalogConfig, calc: &Calculator) -> crate::Result<Self> {
        let catalog = match &config.path {
            Some(path) => Self::load(Path::new(path), calc)?,
            None if calc.frame_rate() == DEFAULT_FRAME_RATE => Self::builtin()?.clone(),
            None => Self::parse(BUILTIN_CATALOG, calc)?,
        };
        Ok(catalog)
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every entry with its id, in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (EntryId, &Entry)> + '_ {
        self.categories.iter().enumerate().flat_map(|(c, category)| {
            category.entries.iter().enumerate().map(move |(e, entry)| {
                (
                    EntryId {
                        category: c,
                        entry: e,
                    },
                    entry,
                )
            })
        })
    }

    pub fn entry_by_name(&self, name: &str) -> Option<&Entry> {
        self.entries()
            .find(|(_, entry)| entry.name == name)
            .map(|(_, entry)| entry)
    }

    pub fn entry_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.categories.get(id.category)?.entries.get(id.entry)
    }

    pub fn id_of(&self, name: &str) -> Option<EntryId> {
        self.entries()
            .find(|(_, entry)| entry.name == name)
            .map(|(id, _)| id)
    }

    pub fn all_names(&self) -> Vec<&str> {
        self.entries().map(|(_, entry)| entry.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
