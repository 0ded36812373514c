//! Presentation-ready view of a recomputation.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::duration::DurationValue;
use crate::lang::LanguageCode;
use crate::recompute::Outcome;
use crate::selection::Selection;

/// Shown in place of every total when a recomputation failed.
pub const ERROR_SENTINEL: &str = "ERROR";

const EMPTY_SELECTION_SUMMARY: &str = "Please select at least one cutscene";

/// Normalized total for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageTotal {
    pub code: LanguageCode,
    pub name: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport {
    pub selected_entries: usize,
    pub is_error: bool,
    pub totals: Vec<LanguageTotal>,
    pub fastest: Vec<LanguageCode>,
    pub second_fastest: Vec<LanguageCode>,
    pub slowest: Vec<LanguageCode>,
    pub summary: String,
}

impl ComparisonReport {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let comparison = match outcome {
            Ok(comparison) => comparison,
            Err(failure) => {
                return Self {
                    selected_entries: 0,
                    is_error: true,
                    totals: totals(|_| ERROR_SENTINEL.to_string()),
                    fastest: Vec::new(),
                    second_fastest: Vec::new(),
                    slowest: Vec::new(),
                    summary: failure.to_string(),
                }
            }
        };

        let rank = &comparison.rank;
        let summary = if comparison.is_empty_selection() {
            EMPTY_SELECTION_SUMMARY.to_string()
        } else {
            let runner_up = rank
                .second_fastest
                .first()
                .map(|lang| &rank.normalized[*lang]);
            describe(&rank.fastest, &rank.second_fastest, runner_up, &rank.slowest)
        };

        Self {
            selected_entries: comparison.selected_entries,
            is_error: false,
            totals: totals(|lang| rank.normalized[lang].to_string()),
            fastest: rank.fastest.clone(),
            second_fastest: rank.second_fastest.clone(),
            slowest: rank.slowest.clone(),
            summary,
        }
    }

    /// Display label for each total, in catalog order.
    pub fn cell_labels(&self) -> Vec<String> {
        self.totals
            .iter()
            .map(|total| cell_label(&total.value, false))
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn totals(mut value: impl FnMut(LanguageCode) -> String) -> Vec<LanguageTotal> {
    LanguageCode::ALL
        .into_iter()
        .map(|code| LanguageTotal {
            code,
            name: code.display_name(),
            value: value(code),
        })
        .collect()
}

fn names(langs: &[LanguageCode]) -> String {
    langs
        .iter()
        .map(|lang| lang.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn subject(noun: &str, count: usize) -> String {
    if count > 1 {
        format!("{noun}s are:")
    } else {
        format!("{noun} is")
    }
}

fn describe(
    fastest: &[LanguageCode],
    second: &[LanguageCode],
    runner_up: Option<&DurationValue>,
    slowest: &[LanguageCode],
) -> String {
    let mut text = format!(
        "The {} {}.",
        subject("fastest language", fastest.len()),
        names(fastest)
    );
    if let Some(gap) = runner_up {
        let verb = if second.len() > 1 { "are" } else { "is" };
        text.push_str(&format!(
            " The {} {}, which {verb} {gap} slower than the fastest.",
            subject("second fastest language", second.len()),
            names(second)
        ));
    }
    text.push_str(&format!(
        " The {} {}.",
        subject("slowest language", slowest.len()),
        names(slowest)
    ));
    text
}

/// Label for one table cell.
///
/// `"0"` reads `Fastest` unless the row is disabled, in which case it shows
/// as a zero offset. Values without seconds are padded so every offset
/// lines up as `+SSsMMM`.
pub fn cell_label(value: &str, disabled: bool) -> String {
    if value == ERROR_SENTINEL {
        return value.to_string();
    }
    let mut label = value.to_string();
    if label.is_empty() || label == "0" || label == "000" {
        if !disabled {
            return "Fastest".to_string();
        }
        label = "000".to_string();
    }
    if !label.contains('s') {
        label = format!("00s{label}");
    } else if label.ends_with('s') {
        label.push_str("000");
    }
    format!("+{label}")
}

/// One catalog entry as a display row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub id: String,
    pub label: String,
    pub selected: bool,
    pub cells: Vec<String>,
    /// Languages without voice data, flagged as slowest like the slowest
    /// totals.
    pub highlighted: Vec<LanguageCode>,
}

/// Rows for every catalog entry, or only the selected ones.
///
/// A language with no voice data shows `-`.
pub fn entry_rows(catalog: &Catalog, selection: &Selection, show_unselected: bool) -> Vec<EntryRow> {
    catalog
        .entries()
        .filter(|(_, entry)| show_unselected || selection.contains(&entry.name))
        .map(|(id, entry)| {
            let selected = selection.contains(&entry.name);
            let cells = LanguageCode::ALL
                .into_iter()
                .map(|lang| match entry.delta(lang) {
                    Some(delta) => cell_label(delta.as_str(), !selected),
                    None => "-".to_string(),
                })
                .collect();
            EntryRow {
                id: id.to_string(),
                label: entry.label(),
                selected,
                cells,
                highlighted: entry.tied_for_slowest.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::duration::testing::FailingEngine;
    use crate::duration::Calculator;
    use crate::recompute::recompute;
    use crate::LanguageCode::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn empty_selection_asks_for_a_cutscene() {
        let outcome = recompute(catalog(), &Selection::new(), &Calculator::default());
        let report = ComparisonReport::from_outcome(&outcome);
        assert_eq!(report.summary, "Please select at least one cutscene");
        assert!(!report.is_error);
        assert_eq!(report.fastest.len(), 9);
        assert!(report.totals.iter().all(|t| t.value == "0"));
    }

    #[test]
    fn failure_marks_every_language() {
        let calc = Calculator::new(Arc::new(FailingEngine::failing_at(0)), 30);
        let outcome = recompute(catalog(), &Selection::all(catalog()), &calc);
        let report = ComparisonReport::from_outcome(&outcome);
        assert!(report.is_error);
        assert_eq!(report.totals.len(), 9);
        assert!(report.totals.iter().all(|t| t.value == ERROR_SENTINEL));
        assert!(report.cell_labels().iter().all(|l| l == "ERROR"));
        assert!(report.fastest.is_empty());
    }

    #[test]
    fn summary_uses_singular_and_plural() {
        let text = describe(&[En], &[It, Fr], Some(&DurationValue::from_engine("400")), &[De]);
        assert_eq!(
            text,
            "The fastest language is English. The second fastest languages are: \
             Italian, French (France), which are 400 slower than the fastest. \
             The slowest language is German."
        );
    }

    #[test]
    fn summary_without_runner_up() {
        let text = describe(&[En, Ja], &[], None, &[En, Ja]);
        assert_eq!(
            text,
            "The fastest languages are: English, Japanese. \
             The slowest languages are: English, Japanese."
        );
    }

    #[test]
    fn cell_labels_pad_offsets() {
        assert_eq!(cell_label("0", false), "Fastest");
        assert_eq!(cell_label("0", true), "+00s000");
        assert_eq!(cell_label("500", false), "+00s500");
        assert_eq!(cell_label("7s", false), "+7s000");
        assert_eq!(cell_label("1s200", true), "+1s200");
        assert_eq!(cell_label("ERROR", false), "ERROR");
    }

    #[test]
    fn rows_hide_unselected_on_request() {
        let selection = Selection::from_names(["Qaza Tokki"]);
        assert_eq!(entry_rows(catalog(), &selection, true).len(), catalog().len());

        let rows = entry_rows(catalog(), &selection, false);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "1-0");
        assert!(rows[0].selected);
        assert_eq!(rows[0].cells.len(), 9);
        assert!(rows[0].cells.iter().any(|c| c == "Fastest"));
        assert_eq!(rows[0].highlighted, vec![De, It, Fr]);
    }

    #[test]
    fn report_serializes_codes() {
        let outcome = recompute(
            catalog(),
            &Selection::from_names(["New Game"]),
            &Calculator::default(),
        );
        let json = ComparisonReport::from_outcome(&outcome).to_json().unwrap();
        assert!(json.contains(r#""code": "EN""#));
        assert!(json.contains(r#""name": "English""#));
    }
}
