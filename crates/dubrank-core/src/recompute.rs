//! Recompute entry point and a last-write-wins service around it.
//!
//! Every selection change reruns the aggregator and ranker from scratch.
//! [`RecomputeService`] tags each run with a [`RequestToken`] so a slow,
//! superseded run can never overwrite the result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::duration::{ArithmeticFailure, Calculator};
use crate::scoring::{aggregate, rank, AggregateResult, RankResult};
use crate::selection::Selection;

/// Successful recomputation for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Catalog entries the selection resolved to.
    pub selected_entries: usize,
    pub aggregate: AggregateResult,
    pub rank: RankResult,
}

impl Comparison {
    pub fn is_empty_selection(&self) -> bool {
        self.selected_entries == 0
    }
}

/// Either a full comparison or the failure that invalidated it.
pub type Outcome = Result<Comparison, ArithmeticFailure>;

/// Aggregate then rank the selected entries.
pub fn recompute(catalog: &Catalog, selection: &Selection, calc: &Calculator) -> Outcome {
    let entries = selection.resolve(catalog);
    if entries.is_empty() {
        return Ok(Comparison {
            selected_entries: 0,
            aggregate: aggregate(&[], calc)?,
            rank: RankResult::empty_selection(),
        });
    }

    let totals = aggregate(&entries, calc)?;
    let ranked = rank(&totals, calc)?;
    Ok(Comparison {
        selected_entries: entries.len(),
        aggregate: totals,
        rank: ranked,
    })
}

/// Monotonically increasing id of a started recomputation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(pub u64);

/// Latest published recomputation.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub token: RequestToken,
    pub selection: Selection,
    /// `None` until the first recomputation is published.
    pub outcome: Option<Outcome>,
}

/// Runs recomputations off the async executor and publishes only the
/// result of the most recently started one.
#[derive(Clone)]
pub struct RecomputeService {
    catalog: Arc<Catalog>,
    calc: Calculator,
    started: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Snapshot>>,
}

impl RecomputeService {
    pub fn new(catalog: Arc<Catalog>, calc: Calculator) -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self {
            catalog,
            calc,
            started: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    /// Clone of the currently published snapshot.
    pub fn latest(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Hand out the next token, marking every earlier request stale.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.started.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Publish `outcome` if `token` is still the latest started request and
    /// newer than what is already published. Returns whether it was published.
    pub fn publish(&self, token: RequestToken, selection: Selection, outcome: Outcome) -> bool {
        if token.0 != self.started.load(Ordering::SeqCst) {
            debug!(token = token.0, "discarding superseded recomputation");
            return false;
        }
        let published = self.tx.send_if_modified(|current| {
            if current.outcome.is_some() && current.token >= token {
                return false;
            }
            *current = Snapshot {
                token,
                selection,
                outcome: Some(outcome),
            };
            true
        });
        if published {
            info!(token = token.0, "published recomputation");
        }
        published
    }

    /// Start a recomputation for `selection` on the blocking pool.
    ///
    /// The handle resolves to whether the result was published.
    pub fn submit(&self, selection: Selection) -> JoinHandle<bool> {
        let token = self.begin();
        let service = self.clone();
        debug!(token = token.0, selected = selection.len(), "recomputation started");
        tokio::task::spawn_blocking(move || {
            let outcome = recompute(&service.catalog, &selection, &service.calc);
            service.publish(token, selection, outcome)
        })
    }
}
