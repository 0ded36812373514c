use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use dubrank_core::recompute::Snapshot;
use dubrank_core::{Calculator, Catalog, ComparisonReport, RecomputeService, Selection};

/// `all`, a blank line for nothing, or a comma-separated id list.
pub fn parse_selection_line(catalog: &Catalog, line: &str) -> Selection {
    match line.trim() {
        "" => Selection::new(),
        all if all.eq_ignore_ascii_case("all") => Selection::all(catalog),
        ids => Selection::from_id_list(catalog, ids),
    }
}

/// One printable line for a published snapshot.
pub fn render_snapshot(snapshot: &Snapshot, catalog: &Catalog, json: bool) -> Result<Option<String>> {
    let Some(outcome) = &snapshot.outcome else {
        return Ok(None);
    };
    let report = ComparisonReport::from_outcome(outcome);
    if json {
        let line = serde_json::to_string(&report).context("failed to serialize report")?;
        return Ok(Some(line));
    }
    let totals: Vec<String> = report
        .totals
        .iter()
        .zip(report.cell_labels())
        .map(|(total, label)| format!("{}={label}", total.code))
        .collect();
    Ok(Some(format!(
        "#{} [{}] {}\n    {}",
        snapshot.token.0,
        snapshot.selection.to_id_list(catalog),
        totals.join(" "),
        report.summary
    )))
}

/// Feed stdin selections into the service until EOF, printing every
/// result it publishes. Exits with 1 if the last published result failed.
pub async fn run(catalog: Arc<Catalog>, calc: Calculator, json: bool) -> Result<ExitCode> {
    let service = RecomputeService::new(Arc::clone(&catalog), calc);
    let mut rx = service.subscribe();
    let printer = tokio::spawn(async move {
        let mut last_failed = false;
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            last_failed = matches!(snapshot.outcome, Some(Err(_)));
            if let Some(line) = render_snapshot(&snapshot, &catalog, json)? {
                println!("{line}");
            }
        }
        anyhow::Ok(last_failed)
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .context("failed to read selection from stdin")?
    {
        let selection = parse_selection_line(service.catalog(), &line);
        debug!(selected = selection.len(), "selection received");
        pending.push(service.submit(selection));
    }

    for handle in pending {
        handle.await.context("recomputation task panicked")?;
    }
    // Closing the channel ends the printer once it has seen the last value.
    drop(service);

    let last_failed = printer.await.context("printer task panicked")??;
    if last_failed {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn selection_lines() {
        assert!(parse_selection_line(catalog(), "   ").is_empty());
        assert!(parse_selection_line(catalog(), "ALL").is_all_selected(catalog()));
        let selection = parse_selection_line(catalog(), "1-0, 3-0");
        assert_eq!(selection.to_id_list(catalog()), "1-0,3-0");
    }

    #[test]
    fn unpublished_snapshot_prints_nothing() {
        let snapshot = Snapshot::default();
        assert!(render_snapshot(&snapshot, catalog(), false).unwrap().is_none());
    }

    #[tokio::test]
    async fn published_snapshot_renders_token_and_ids() {
        let service = RecomputeService::new(Arc::new(catalog().clone()), Calculator::default());
        assert!(service
            .submit(Selection::from_names(["Qaza Tokki"]))
            .await
            .unwrap());
        let snapshot = service.latest();

        let text = render_snapshot(&snapshot, catalog(), false).unwrap().unwrap();
        assert!(text.starts_with("#1 [1-0] EN="));

        let json = render_snapshot(&snapshot, catalog(), true).unwrap().unwrap();
        assert!(json.contains(r#""is_error":false"#));
    }
}
