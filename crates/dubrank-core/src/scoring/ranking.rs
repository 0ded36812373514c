use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::AggregateResult;
use crate::duration::{ArithmeticFailure, Calculator, DurationValue};
use crate::lang::{LangMap, LanguageCode};

/// Ranking of per-language totals, normalized so the fastest reads `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankResult {
    pub fastest: Vec<LanguageCode>,
    pub second_fastest: Vec<LanguageCode>,
    pub slowest: Vec<LanguageCode>,
    pub normalized: LangMap<DurationValue>,
}

impl RankResult {
    /// Result for a selection with no entries: everything tied at zero,
    /// nothing slowest and no runner-up.
    pub fn empty_selection() -> Self {
        Self {
            fastest: LanguageCode::ALL.to_vec(),
            second_fastest: Vec::new(),
            slowest: Vec::new(),
            normalized: LangMap::filled(DurationValue::zero()),
        }
    }
}

/// Rank aggregate totals.
///
/// A single linear scan tracks the minimum (first occurrence wins) and every
/// language tied for the maximum. Totals are then normalized by subtracting
/// the minimum; languages already at the minimum become `"0"` without an
/// engine call. The fastest languages are those normalized to `"0"` and the
/// second fastest are all languages tied for the smallest non-zero total.
pub fn rank(
    aggregate: &AggregateResult,
    calc: &Calculator,
) -> Result<RankResult, ArithmeticFailure> {
    let [first, rest @ ..] = LanguageCode::ALL;
    let mut min_lang = first;
    let mut max_lang = first;
    let mut slowest = vec![first];

    for lang in rest {
        let value = &aggregate[lang];
        if calc.compare(value, &aggregate[min_lang]) == Ordering::Less {
            min_lang = lang;
        }
        match calc.compare(value, &aggregate[max_lang]) {
            Ordering::Greater => {
                max_lang = lang;
                slowest = vec![lang];
            }
            Ordering::Equal => slowest.push(lang),
            Ordering::Less => {}
        }
    }

    let min = &aggregate[min_lang];
    let mut normalized = LangMap::filled(DurationValue::zero());
    for lang in LanguageCode::ALL {
        let value = &aggregate[lang];
        if lang == min_lang || value == min {
            continue;
        }
        normalized[lang] = calc.difference(value, min)?;
    }

    let fastest = normalized.languages_where(DurationValue::is_zero);
    let second_fastest = smallest_non_zero(&normalized, calc);

    debug!(?fastest, ?second_fastest, ?slowest, "ranked aggregate");

    Ok(RankResult {
        fastest,
        second_fastest,
        slowest,
        normalized,
    })
}

/// Every language tied for the smallest total that is not `"0"`.
fn smallest_non_zero(normalized: &LangMap<DurationValue>, calc: &Calculator) -> Vec<LanguageCode> {
    let mut best: Option<LanguageCode> = None;
    let mut tied = Vec::new();

    for (lang, value) in normalized.iter() {
        if value.is_zero() {
            continue;
        }
        let Some(current) = best else {
            best = Some(lang);
            tied = vec![lang];
            continue;
        };
        match calc.compare(value, &normalized[current]) {
            Ordering::Less => {
                best = Some(lang);
                tied = vec![lang];
            }
            Ordering::Equal => tied.push(lang),
            Ordering::Greater => {}
        }
    }

    tied
}
