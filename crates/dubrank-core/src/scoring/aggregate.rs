use tracing::debug;

use crate::catalog::Entry;
use crate::duration::{ArithmeticFailure, Calculator, DurationValue};
use crate::lang::{LangMap, LanguageCode};

/// Per-language total slower-by time over a selection, before normalization.
pub type AggregateResult = LangMap<DurationValue>;

/// Sum every language's stored deltas across the selected entries.
///
/// Empty and zero deltas contribute nothing. Each language total is one
/// left-to-right `0+a+b+...` expression; a language with nothing to add stays
/// `"0"` without an engine call. Any engine failure discards the whole
/// result.
pub fn aggregate(
    entries: &[&Entry],
    calc: &Calculator,
) -> Result<AggregateResult, ArithmeticFailure> {
    let mut totals = LangMap::filled(DurationValue::zero());
    if entries.is_empty() {
        return Ok(totals);
    }

    for lang in LanguageCode::ALL {
        let terms = entries
            .iter()
            .filter_map(|entry| entry.delta(lang))
            .filter(|delta| !delta.is_zero());
        totals[lang] = calc.sum(terms)?;
    }

    debug!(entries = entries.len(), "aggregated selection");
    Ok(totals)
}
