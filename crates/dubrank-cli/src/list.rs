use std::process::ExitCode;

use anyhow::{Context, Result};
use serde::Serialize;

use dubrank_core::Catalog;

#[derive(Debug, Serialize)]
pub struct ListedEntry<'a> {
    pub id: String,
    pub category: &'a str,
    pub name: &'a str,
    pub description: &'a str,
}

pub fn listing(catalog: &Catalog) -> Vec<ListedEntry<'_>> {
    catalog
        .entries()
        .map(|(id, entry)| ListedEntry {
            id: id.to_string(),
            category: &catalog.categories()[id.category].name,
            name: &entry.name,
            description: &entry.description,
        })
        .collect()
}

pub fn run(catalog: &Catalog, json: bool) -> Result<ExitCode> {
    if json {
        let listing = listing(catalog);
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("failed to serialize listing")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    for (c, category) in catalog.categories().iter().enumerate() {
        if c > 0 {
            println!();
        }
        println!("{}", category.name);
        println!("{}", "=".repeat(category.name.len()));
        for (e, entry) in category.entries.iter().enumerate() {
            println!("{:<6} {}", format!("{c}-{e}"), entry.label());
        }
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_ids_match_catalog_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let listing = listing(catalog);
        assert_eq!(listing.len(), catalog.len());
        for item in &listing {
            let id = catalog.id_of(item.name).unwrap();
            assert_eq!(id.to_string(), item.id);
        }
        assert_eq!(listing[0].category, "Main Quests");
    }
}
