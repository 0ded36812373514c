//! Core engine for comparing cutscene durations across voice-acted languages.
//!
//! Raw catalog text is parsed once into immutable [`catalog::Catalog`] entries,
//! then every selection change runs the aggregator and ranker from scratch.

pub mod catalog;
pub mod config;
pub mod duration;
pub mod error;
pub mod lang;
pub mod recompute;
pub mod report;
pub mod scoring;
pub mod selection;

pub use catalog::{Catalog, CatalogError, Category, Entry, EntryId};
pub use duration::{ArithmeticEngine, ArithmeticFailure, Calculator, DurationValue, FrameClock};
pub use error::{DubrankError, Result};
pub use lang::{LangMap, LanguageCode};
pub use recompute::{recompute, Comparison, Outcome, RecomputeService, RequestToken};
pub use report::ComparisonReport;
pub use scoring::{aggregate, rank, AggregateResult, RankResult};
pub use selection::Selection;
