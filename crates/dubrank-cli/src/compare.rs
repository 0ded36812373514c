use std::fmt::Write as _;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use tracing::warn;

use dubrank_core::report::{entry_rows, EntryRow};
use dubrank_core::{recompute, Calculator, Catalog, ComparisonReport, LanguageCode, Selection};

const CELL_WIDTH: usize = 8;

pub struct CompareOpts {
    pub entries: Vec<String>,
    pub ids: Option<String>,
    pub categories: Vec<String>,
    pub all: bool,
    pub json: bool,
    pub show_unselected: bool,
}

/// Union of every selection flag. Unknown entry names are kept and later
/// ignored by the core; an unknown category is a usage error.
pub fn build_selection(catalog: &Catalog, opts: &CompareOpts) -> Result<Selection> {
    if opts.all {
        return Ok(Selection::all(catalog));
    }

    let mut selection = match &opts.ids {
        Some(ids) => Selection::from_id_list(catalog, ids),
        None => Selection::new(),
    };
    for name in &opts.entries {
        if catalog.entry_by_name(name).is_none() {
            warn!(name = %name, "no such entry in catalog");
        }
        selection.insert(name.clone());
    }
    for category in &opts.categories {
        if !selection.select_category(catalog, category) {
            let known: Vec<&str> = catalog.categories().iter().map(|c| c.name.as_str()).collect();
            bail!("unknown category '{category}'; available: {}", known.join(", "));
        }
    }
    Ok(selection)
}

pub fn run(catalog: &Catalog, calc: &Calculator, opts: &CompareOpts) -> Result<ExitCode> {
    let selection = build_selection(catalog, opts)?;
    let outcome = recompute(catalog, &selection, calc);
    let report = ComparisonReport::from_outcome(&outcome);

    if opts.json {
        println!("{}", report.to_json().context("failed to serialize report")?);
    } else {
        let rows = entry_rows(catalog, &selection, opts.show_unselected);
        print!("{}", render_table(&rows, &report));
        if !selection.is_empty() {
            println!();
            println!("Selection: {}", selection.to_id_list(catalog));
        }
    }

    if report.is_error {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Fixed-width table: one row per entry, a totals row, then the summary.
pub fn render_table(rows: &[EntryRow], report: &ComparisonReport) -> String {
    let label_width = rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total".len());
    let width = CELL_WIDTH;

    let mut out = String::new();
    let _ = write!(out, "    {:<6} {:<label_width$}", "ID", "Entry");
    for lang in LanguageCode::ALL {
        let _ = write!(out, " {:^width$}", lang.code());
    }
    out.push('\n');

    for row in rows {
        let mark = if row.selected { "[x]" } else { "[ ]" };
        let _ = write!(out, "{mark} {:<6} {:<label_width$}", row.id, row.label);
        for (lang, cell) in LanguageCode::ALL.into_iter().zip(&row.cells) {
            let marked = if row.highlighted.contains(&lang) {
                format!("{cell}!")
            } else {
                cell.clone()
            };
            let _ = write!(out, " {marked:^width$}");
        }
        out.push('\n');
    }

    let _ = write!(out, "    {:<6} {:<label_width$}", "", "Total");
    for (total, label) in report.totals.iter().zip(report.cell_labels()) {
        let marked = if report.slowest.contains(&total.code) {
            format!("{label}!")
        } else {
            label
        };
        let _ = write!(out, " {marked:^width$}");
    }
    out.push('\n');
    out.push('\n');
    out.push_str(&report.summary);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> CompareOpts {
        CompareOpts {
            entries: Vec::new(),
            ids: None,
            categories: Vec::new(),
            all: false,
            json: false,
            show_unselected: true,
        }
    }

    #[test]
    fn selection_flags_are_combined() {
        let catalog = Catalog::builtin().unwrap();
        let opts = CompareOpts {
            entries: vec!["New Game".to_string()],
            ids: Some("1-0".to_string()),
            categories: vec!["Main Quests".to_string()],
            ..opts()
        };
        let selection = build_selection(catalog, &opts).unwrap();
        assert_eq!(selection.len(), 6);
        assert!(selection.contains("Qaza Tokki"));
    }

    #[test]
    fn all_overrides_other_flags() {
        let catalog = Catalog::builtin().unwrap();
        let opts = CompareOpts {
            all: true,
            entries: vec!["New Game".to_string()],
            ..opts()
        };
        let selection = build_selection(catalog, &opts).unwrap();
        assert!(selection.is_all_selected(catalog));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let catalog = Catalog::builtin().unwrap();
        let opts = CompareOpts {
            categories: vec!["Bosses".to_string()],
            ..opts()
        };
        let err = build_selection(catalog, &opts).unwrap_err();
        assert!(err.to_string().contains("unknown category 'Bosses'"));
    }

    #[test]
    fn table_has_header_rows_totals_and_summary() {
        let catalog = Catalog::builtin().unwrap();
        let selection = Selection::from_names(["New Game"]);
        let outcome = recompute(catalog, &selection, &Calculator::default());
        let report = ComparisonReport::from_outcome(&outcome);
        let rows = entry_rows(catalog, &selection, false);
        let table = render_table(&rows, &report);

        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("EN") && lines[0].contains("RU"));
        assert!(lines[1].starts_with("[x] 3-0"));
        assert!(lines[1].contains(" -! "));
        assert!(lines[2].contains("Total"));
        assert!(lines[2].contains("Fastest"));
        assert_eq!(lines.last().copied(), Some(report.summary.as_str()));
    }

    #[test]
    fn empty_selection_prints_prompt() {
        let catalog = Catalog::builtin().unwrap();
        let outcome = recompute(catalog, &Selection::new(), &Calculator::default());
        let report = ComparisonReport::from_outcome(&outcome);
        let table = render_table(&[], &report);
        assert!(table.ends_with("Please select at least one cutscene\n"));
    }
}
