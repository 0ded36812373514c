//! The caller's current choice of entries.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{Catalog, Entry, EntryId};

/// Unordered set of selected entry names. Duplicates collapse and names the
/// catalog does not know are carried along but ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    names: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Every entry in the catalog.
    pub fn all(catalog: &Catalog) -> Self {
        Self::from_names(catalog.all_names())
    }

    /// Decode a comma-separated list of `<category>-<entry>` ids.
    /// Garbled or out-of-range ids are skipped.
    pub fn from_id_list(catalog: &Catalog, list: &str) -> Self {
        let names = list
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .filter_map(|part| match part.parse::<EntryId>() {
                Ok(id) => catalog.entry_by_id(id).map(|entry| entry.name.clone()),
                Err(e) => {
                    debug!(error = %e, "ignoring entry id");
                    None
                }
            });
        Self::from_names(names)
    }

    /// Sorted, comma-separated ids of the selected entries the catalog knows.
    pub fn to_id_list(&self, catalog: &Catalog) -> String {
        let mut ids: Vec<EntryId> = self
            .names
            .iter()
            .filter_map(|name| catalog.id_of(name))
            .collect();
        ids.sort();
        ids.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.names.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Add every entry of the named category. Returns false if the category
    /// does not exist.
    pub fn select_category(&mut self, catalog: &Catalog, category: &str) -> bool {
        let Some(category) = catalog.category(category) else {
            return false;
        };
        for entry in &category.entries {
            self.names.insert(entry.name.clone());
        }
        true
    }

    /// Remove every entry of the named category.
    pub fn deselect_category(&mut self, catalog: &Catalog, category: &str) -> bool {
        let Some(category) = catalog.category(category) else {
            return false;
        };
        for entry in &category.entries {
            self.names.remove(&entry.name);
        }
        true
    }

    /// True when every entry of the category is selected.
    pub fn is_category_selected(&self, catalog: &Catalog, category: &str) -> bool {
        catalog
            .category(category)
            .is_some_and(|c| c.entries.iter().all(|e| self.contains(&e.name)))
    }

    /// True when every catalog entry is selected.
    pub fn is_all_selected(&self, catalog: &Catalog) -> bool {
        catalog.entries().all(|(_, e)| self.contains(&e.name))
    }

    /// Selected entries in catalog order, each at most once.
    pub fn resolve<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Entry> {
        let resolved: Vec<&Entry> = catalog
            .entries()
            .map(|(_, entry)| entry)
            .filter(|entry| self.contains(&entry.name))
            .collect();
        if resolved.len() < self.names.len() {
            for name in self.names() {
                if catalog.entry_by_name(name).is_none() {
                    debug!(name, "ignoring unknown entry in selection");
                }
            }
        }
        resolved
    }
}
