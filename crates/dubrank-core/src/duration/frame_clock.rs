//! Default millisecond-precision arithmetic engine.
//!
//! Grammar (whitespace ignored, `,` separates independent expressions):
//!
//! ```text
//! expression = ["-"] term (("+" | "-") term)*
//! term       = frames | duration
//! frames     = digits "f"
//! duration   = [digits "h"] [digits "m"] [digits "s"] [digits]
//! ```
//!
//! Trailing digits of a duration are whole milliseconds. Values print as
//! `1h02m03s004`, `7s100`, `7s` or `033`, with zero printed as `000`.

use std::fmt::Write;
use std::sync::LazyLock;

use regex::Regex;

use super::{ArithmeticEngine, DurationValue, Evaluation, ENGINE_ZERO};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Engine used when no other implementation is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock;

impl ArithmeticEngine for FrameClock {
    fn evaluate(&self, expression: &str, frame_rate: u32) -> Evaluation {
        let mut out = Evaluation::default();
        for part in expression.split(',') {
            match evaluate_sum(part, frame_rate) {
                Ok(ms) => out.values.push(DurationValue(format_ms(ms))),
                Err(e) => out.errors.push(e),
            }
        }
        out
    }

    fn frames_to_milliseconds(&self, frames: u64, frame_rate: u32) -> DurationValue {
        match frames_to_ms(frames, frame_rate) {
            Ok(ms) => DurationValue(format_ms(ms)),
            Err(e) => {
                // Leave the literal unconverted so the next evaluation reports it.
                tracing::warn!(frames, frame_rate, error = %e, "frame conversion failed");
                DurationValue(format!("{frames}f"))
            }
        }
    }
}

static LITERAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s)?(\d*)$").unwrap());

static FRAMES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d+)f$").unwrap());

/// Round half up to the nearest millisecond.
fn frames_to_ms(frames: u64, frame_rate: u32) -> Result<i64, String> {
    if frame_rate == 0 {
        return Err("frame rate must be positive".to_string());
    }
    let rate = u128::from(frame_rate);
    let ms = (u128::from(frames) * 1000 + rate / 2) / rate;
    i64::try_from(ms).map_err(|_| format!("{frames} frames overflows"))
}

fn evaluate_sum(expression: &str, frame_rate: u32) -> Result<i64, String> {
    let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err("empty expression".to_string());
    }

    let mut total: i64 = 0;
    let mut negate = false;
    let mut term = String::new();
    let mut first = true;

    let mut apply = |term: &str, negate: bool| -> Result<(), String> {
        let value = parse_term(term, frame_rate)?;
        let next = if negate {
            total.checked_sub(value)
        } else {
            total.checked_add(value)
        };
        total = next.ok_or_else(|| format!("overflow in '{expression}'"))?;
        Ok(())
    };

    for c in compact.chars() {
        match c {
            '+' | '-' => {
                if term.is_empty() {
                    if first && c == '-' && !negate {
                        negate = true;
                        continue;
                    }
                    return Err(format!("missing term before '{c}' in '{expression}'"));
                }
                apply(&term, negate)?;
                term.clear();
                negate = c == '-';
                first = false;
            }
            _ => term.push(c),
        }
    }
    if term.is_empty() {
        return Err(format!("'{expression}' ends with an operator"));
    }
    apply(&term, negate)?;

    Ok(total)
}

fn parse_term(term: &str, frame_rate: u32) -> Result<i64, String> {
    if let Some(caps) = FRAMES_RE.captures(term) {
        let frames: u64 = caps[1]
            .parse()
            .map_err(|_| format!("frame count '{}' overflows", &caps[1]))?;
        return frames_to_ms(frames, frame_rate);
    }

    let caps = LITERAL_RE
        .captures(term)
        .ok_or_else(|| format!("invalid duration '{term}'"))?;

    let component = |idx: usize| -> Result<Option<i64>, String> {
        caps.get(idx)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| {
                m.as_str()
                    .parse::<i64>()
                    .map_err(|_| format!("component '{}' of '{term}' overflows", m.as_str()))
            })
            .transpose()
    };

    let hours = component(1)?;
    let minutes = component(2)?;
    let seconds = component(3)?;
    let millis = component(4)?;

    if minutes.is_some_and(|m| m >= 60) && hours.is_some() {
        return Err(format!("minutes out of range in '{term}'"));
    }
    if seconds.is_some_and(|s| s >= 60) && (hours.is_some() || minutes.is_some()) {
        return Err(format!("seconds out of range in '{term}'"));
    }
    let has_unit = hours.is_some() || minutes.is_some() || seconds.is_some();
    if has_unit && caps.get(4).is_some_and(|m| m.as_str().len() > 3) {
        return Err(format!("more than 3 millisecond digits in '{term}'"));
    }

    let overflow = || format!("'{term}' overflows");
    let mut total: i64 = 0;
    for (value, scale) in [
        (hours, MS_PER_HOUR),
        (minutes, MS_PER_MINUTE),
        (seconds, MS_PER_SECOND),
        (millis, 1),
    ] {
        if let Some(v) = value {
            let part = v.checked_mul(scale).ok_or_else(overflow)?;
            total = total.checked_add(part).ok_or_else(overflow)?;
        }
    }
    Ok(total)
}

fn format_ms(ms: i64) -> String {
    if ms == 0 {
        return ENGINE_ZERO.to_string();
    }
    let abs = ms.unsigned_abs();
    let hours = abs / MS_PER_HOUR as u64;
    let minutes = abs % MS_PER_HOUR as u64 / MS_PER_MINUTE as u64;
    let seconds = abs % MS_PER_MINUTE as u64 / MS_PER_SECOND as u64;
    let millis = abs % MS_PER_SECOND as u64;

    let parts = [
        (hours, "h", 0usize),
        (minutes, "m", 2),
        (seconds, "s", 2),
        (millis, "", 3),
    ];
    // abs > 0, so at least one part is non-zero.
    let first = parts.iter().position(|p| p.0 > 0).unwrap_or(3);
    let last = parts.iter().rposition(|p| p.0 > 0).unwrap_or(3);

    let mut out = String::new();
    if ms < 0 {
        out.push('-');
    }
    for (i, (value, unit, width)) in parts[first..=last].iter().enumerate() {
        if i == 0 && !unit.is_empty() {
            let _ = write!(out, "{value}{unit}");
        } else {
            let _ = write!(out, "{value:0width$}{unit}", width = *width);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::duration::testing::capture_events;
    use crate::duration::Calculator;

    fn eval(expr: &str) -> Evaluation {
        FrameClock.evaluate(expr, 30)
    }

    fn one(expr: &str) -> String {
        let result = eval(expr);
        assert!(result.errors.is_empty(), "{expr}: {:?}", result.errors);
        assert_eq!(result.values.len(), 1);
        result.values[0].as_str().to_string()
    }

    #[test]
    fn formats_each_magnitude() {
        assert_eq!(format_ms(0), "000");
        assert_eq!(format_ms(33), "033");
        assert_eq!(format_ms(500), "500");
        assert_eq!(format_ms(7_000), "7s");
        assert_eq!(format_ms(7_100), "7s100");
        assert_eq!(format_ms(61_500), "1m01s500");
        assert_eq!(format_ms(3_605_000), "1h00m05s");
        assert_eq!(format_ms(-1_200), "-1s200");
    }

    #[test]
    fn printed_values_parse_back() {
        for ms in [33, 500, 7_000, 7_100, 61_500, 3_605_000, 3_723_004] {
            assert_eq!(parse_term(&format_ms(ms), 30).unwrap(), ms);
        }
    }

    #[test]
    fn adds_and_subtracts_left_to_right() {
        assert_eq!(one("0+7s100+500"), "7s600");
        assert_eq!(one("7s100 - 167"), "6s933");
        assert_eq!(one("1s - 2s"), "-1s");
        assert_eq!(one("-500 + 1s"), "500");
        assert_eq!(one("1s-1s000"), "000");
    }

    #[test]
    fn frame_terms_use_frame_rate() {
        assert_eq!(one("3f"), "100");
        assert_eq!(one("5f"), "167");
        assert_eq!(one("7s+3f"), "7s100");
        assert_eq!(FrameClock.evaluate("1f", 60).values[0].as_str(), "017");
    }

    #[test]
    fn frames_round_half_up() {
        assert_eq!(frames_to_ms(1, 30).unwrap(), 33);
        assert_eq!(frames_to_ms(15, 30).unwrap(), 500);
        assert_eq!(frames_to_ms(29, 30).unwrap(), 967);
        assert!(frames_to_ms(1, 0).is_err());
    }

    #[test]
    fn comma_separates_expressions() {
        let result = eval("1s, 2s+500");
        assert!(result.errors.is_empty());
        let values: Vec<&str> = result.values.iter().map(|v| v.as_str()).collect();
        assert_eq!(values, vec!["1s", "2s500"]);
    }

    #[test]
    fn malformed_expressions_report_errors() {
        for bad in ["", "1s+", "+1s", "1s++2s", "abc", "1s2m", "1m75s", "1h60m", "7s1000", "ERROR"] {
            let result = eval(bad);
            assert!(result.values.is_empty(), "{bad} should not evaluate");
            assert_eq!(result.errors.len(), 1, "{bad}");
        }
    }

    #[test]
    fn overflow_is_an_error() {
        let result = eval("9223372036854775807+1");
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("overflow"));
    }

    #[test]
    fn frames_to_milliseconds_prints_engine_form() {
        assert_eq!(FrameClock.frames_to_milliseconds(0, 30).as_str(), "000");
        assert_eq!(FrameClock.frames_to_milliseconds(3, 30).as_str(), "100");
    }

    #[test]
    fn zero_frame_rate_warns_and_fails_downstream() {
        let events = capture_events(|| {
            assert_eq!(FrameClock.frames_to_milliseconds(3, 0).as_str(), "3f");
        });
        assert_eq!(
            events,
            vec![(tracing::Level::WARN, "frame rate must be positive".to_string())]
        );

        let calc = Calculator::new(Arc::new(FrameClock), 0);
        let failure = calc.from_frames(7, 3).unwrap_err();
        assert_eq!(failure.errors, vec!["frame rate must be positive".to_string()]);
    }
}
