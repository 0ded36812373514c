//! Parser for the pipe-delimited catalog text format.
//!
//! ```text
//! Shrines            | EN    | JA    | ... | RU
//! Qaza Tokki, Hebra  | 07.03 | 00.05 | ... | 07.05
//! ```
//!
//! The first column of a header row is the category name; the remaining
//! columns are the nine language codes in any order. Data rows carry
//! `name[, description]` followed by one `<seconds>.<frames>` delta per
//! language, where an empty cell means no voice data.

use std::cmp::Ordering;
use std::collections::HashSet;

use super::{CatalogError, Category, Entry};
use crate::duration::{Calculator, DurationValue};
use crate::lang::{LangMap, LanguageCode, LANGUAGE_COUNT};

type Line<'a> = (usize, &'a str);

/// Parse a text asset holding any number of categories.
///
/// A row whose every column after the first is a language code starts a new
/// category. Entry names must be unique across the whole catalog.
pub fn parse_catalog(text: &str, calc: &Calculator) -> Result<Vec<Category>, CatalogError> {
    let mut blocks: Vec<Vec<Line<'_>>> = Vec::new();
    for line in significant_lines(text) {
        if is_header(line.1) {
            blocks.push(vec![line]);
            continue;
        }
        match blocks.last_mut() {
            Some(block) => block.push(line),
            None => {
                return Err(CatalogError::MalformedCatalog {
                    category: String::new(),
                    line: line.0,
                    reason: "data row before the first header".to_string(),
                })
            }
        }
    }

    let categories = blocks
        .iter()
        .map(|block| parse_block(block, calc))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for category in &categories {
        for entry in &category.entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(CatalogError::MalformedCatalog {
                    category: category.name.clone(),
                    line: 0,
                    reason: format!("duplicate entry name '{}'", entry.name),
                });
            }
        }
    }

    Ok(categories)
}

/// Parse one category: a header row followed by at least one entry row.
pub fn parse_category(text: &str, calc: &Calculator) -> Result<Category, CatalogError> {
    let lines: Vec<Line<'_>> = significant_lines(text).collect();
    parse_block(&lines, calc)
}

fn significant_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split('|').map(str::trim).collect()
}

fn is_header(line: &str) -> bool {
    let fields = split_fields(line);
    fields.len() > 1
        && fields[1..]
            .iter()
            .all(|f| f.parse::<LanguageCode>().is_ok())
}

fn parse_block(lines: &[Line<'_>], calc: &Calculator) -> Result<Category, CatalogError> {
    let Some((&(header_line, header), rows)) = lines.split_first() else {
        return Err(CatalogError::MalformedCatalog {
            category: String::new(),
            line: 0,
            reason: "need a header and at least one row".to_string(),
        });
    };
    let (name, columns) = parse_header(header_line, header)?;
    if rows.is_empty() {
        return Err(CatalogError::MalformedCatalog {
            category: name,
            line: header_line,
            reason: "need a header and at least one row".to_string(),
        });
    }

    let entries = rows
        .iter()
        .map(|&(line, row)| parse_row(&name, &columns, line, row, calc))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Category { name, entries })
}

fn parse_header(line: usize, header: &str) -> Result<(String, Vec<LanguageCode>), CatalogError> {
    let fields = split_fields(header);
    let name = fields[0].to_string();
    let malformed = |reason: String| CatalogError::MalformedCatalog {
        category: name.clone(),
        line,
        reason,
    };

    if name.is_empty() {
        return Err(malformed("missing category name".to_string()));
    }
    let codes = &fields[1..];
    if codes.len() != LANGUAGE_COUNT {
        return Err(malformed(format!(
            "expected {LANGUAGE_COUNT} languages, found {}",
            codes.len()
        )));
    }

    let mut columns = Vec::with_capacity(LANGUAGE_COUNT);
    for code in codes {
        let lang = code
            .parse::<LanguageCode>()
            .map_err(|e| malformed(e.to_string()))?;
        if columns.contains(&lang) {
            return Err(malformed(format!("language {lang} listed twice")));
        }
        columns.push(lang);
    }

    Ok((name, columns))
}

fn parse_row(
    category: &str,
    columns: &[LanguageCode],
    line: usize,
    row: &str,
    calc: &Calculator,
) -> Result<Entry, CatalogError> {
    let fields = split_fields(row);
    let malformed = |reason: &str| CatalogError::MalformedCatalog {
        category: category.to_string(),
        line,
        reason: reason.to_string(),
    };

    let label = fields[0];
    if label.is_empty() {
        return Err(malformed("missing entry name"));
    }
    let (name, description) = match label.split_once(',') {
        Some((name, description)) => (name.trim().to_string(), description.trim().to_string()),
        None => (label.to_string(), String::new()),
    };
    if name.is_empty() {
        return Err(malformed("missing entry name"));
    }
    if fields.len() - 1 != columns.len() {
        return Err(malformed(&format!(
            "expected {} deltas, found {}",
            columns.len(),
            fields.len() - 1
        )));
    }

    let mut raw: LangMap<Option<DurationValue>> = LangMap::filled(None);
    for (&lang, field) in columns.iter().zip(&fields[1..]) {
        raw[lang] = parse_delta(&name, lang, field, calc)?;
    }

    let tied_for_slowest = raw.languages_where(Option::is_none);
    let deltas = invert(&name, &raw, calc)?;

    Ok(Entry {
        name,
        description,
        deltas,
        tied_for_slowest,
    })
}

/// Convert `<seconds>.<frames>` into a duration; an empty cell is `None`.
pub fn parse_delta(
    entry: &str,
    language: LanguageCode,
    value: &str,
    calc: &Calculator,
) -> Result<Option<DurationValue>, CatalogError> {
    if value.is_empty() {
        return Ok(None);
    }
    let malformed = |reason: String| CatalogError::MalformedDelta {
        entry: entry.to_string(),
        language,
        value: value.to_string(),
        reason,
    };

    let Some((seconds, frames)) = value.split_once('.') else {
        return Err(malformed("no frame part".to_string()));
    };
    if frames.contains('.') {
        return Err(malformed("too many '.' separators".to_string()));
    }
    let seconds = parse_integer(seconds)
        .ok_or_else(|| malformed("seconds must be an integer".to_string()))?;
    let frames =
        parse_integer(frames).ok_or_else(|| malformed("frames must be an integer".to_string()))?;
    if frames >= u64::from(calc.frame_rate()) {
        return Err(malformed(format!(
            "frame {frames} is not below the frame rate {}",
            calc.frame_rate()
        )));
    }

    calc.from_frames(seconds, frames)
        .map(Some)
        .map_err(|e| malformed(e.to_string()))
}

fn parse_integer(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Turn "faster than the slowest" deltas into "slower than the fastest".
///
/// The largest raw delta (first one wins on ties) becomes `"0"`; every other
/// present delta becomes `max - raw`. Empty cells stay empty and take no
/// part in the max search.
fn invert(
    entry: &str,
    raw: &LangMap<Option<DurationValue>>,
    calc: &Calculator,
) -> Result<LangMap<Option<DurationValue>>, CatalogError> {
    let mut max: Option<(LanguageCode, &DurationValue)> = None;
    for (lang, value) in raw.iter() {
        let Some(value) = value else { continue };
        match max {
            Some((_, current)) if calc.compare(value, current) != Ordering::Greater => {}
            _ => max = Some((lang, value)),
        }
    }
    let Some((max_lang, max_value)) = max else {
        return Ok(raw.clone());
    };

    let mut stored = LangMap::filled(None);
    for (lang, value) in raw.iter() {
        stored[lang] = match value {
            None => None,
            Some(_) if lang == max_lang => Some(DurationValue::zero()),
            Some(value) => Some(calc.difference(max_value, value).map_err(|e| {
                CatalogError::MalformedDelta {
                    entry: entry.to_string(),
                    language: lang,
                    value: value.to_string(),
                    reason: e.to_string(),
                }
            })?),
        };
    }
    Ok(stored)
}
