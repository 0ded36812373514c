//! Duration values and the arithmetic engine they are manipulated through.
//!
//! The core never does numeric math on durations directly. Every sum,
//! difference, comparison and frame conversion goes through an
//! [`ArithmeticEngine`] as a textual expression, so rounding and precision
//! are whatever the engine defines.

mod error;
mod frame_clock;

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub use error::ArithmeticFailure;
pub use frame_clock::FrameClock;

/// Canonical zero used throughout the core.
pub const ZERO: &str = "0";

/// Zero as printed by the engine (zero milliseconds).
pub const ENGINE_ZERO: &str = "000";

/// Fixed frame rate of the game footage the catalog was timed from.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Opaque time offset in the engine's `<sign><sec>s<ms>` form, or `"0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationValue(String);

impl DurationValue {
    pub fn zero() -> Self {
        Self(ZERO.to_string())
    }

    /// Wrap a value produced by an engine, folding the engine's zero
    /// literal into the canonical `"0"`.
    pub fn from_engine(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw == ENGINE_ZERO {
            Self::zero()
        } else {
            Self(raw)
        }
    }

    /// True only for the canonical `"0"`.
    pub fn is_zero(&self) -> bool {
        self.0 == ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DurationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw engine output for one expression string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub values: Vec<DurationValue>,
    pub errors: Vec<String>,
}

/// Contract for the external duration-arithmetic library.
pub trait ArithmeticEngine: Send + Sync {
    /// Evaluate `+`/`-` expressions over duration literals at `frame_rate`.
    fn evaluate(&self, expression: &str, frame_rate: u32) -> Evaluation;

    /// Convert a frame count into a duration at `frame_rate`.
    fn frames_to_milliseconds(&self, frames: u64, frame_rate: u32) -> DurationValue;
}

/// Engine handle bound to a frame rate; the only way the core touches durations.
#[derive(Clone)]
pub struct Calculator {
    engine: Arc<dyn ArithmeticEngine>,
    frame_rate: u32,
}

impl fmt::Debug for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("frame_rate", &self.frame_rate)
            .finish_non_exhaustive()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Arc::new(FrameClock), DEFAULT_FRAME_RATE)
    }
}

impl Calculator {
    pub fn new(engine: Arc<dyn ArithmeticEngine>, frame_rate: u32) -> Self {
        Self { engine, frame_rate }
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Evaluate an expression that must produce exactly one value.
    pub fn evaluate(&self, expression: &str) -> Result<DurationValue, ArithmeticFailure> {
        let Evaluation { mut values, errors } = self.engine.evaluate(expression, self.frame_rate);
        if !errors.is_empty() {
            return Err(ArithmeticFailure::new(expression, errors));
        }
        match values.len() {
            1 => Ok(DurationValue::from_engine(values.remove(0).0)),
            n => Err(ArithmeticFailure::new(
                expression,
                vec![format!("expected one value, engine returned {n}")],
            )),
        }
    }

    /// `seconds` whole seconds plus `frames` frames.
    pub fn from_frames(&self, seconds: u64, frames: u64) -> Result<DurationValue, ArithmeticFailure> {
        let frame_part = self.engine.frames_to_milliseconds(frames, self.frame_rate);
        self.evaluate(&format!("{seconds}s+{frame_part}"))
    }

    /// Left-to-right chain `0+t1+t2+...`; no terms yields `"0"` without an engine call.
    pub fn sum<'a>(
        &self,
        terms: impl IntoIterator<Item = &'a DurationValue>,
    ) -> Result<DurationValue, ArithmeticFailure> {
        let mut expression = String::from(ZERO);
        let mut any = false;
        for term in terms {
            expression.push('+');
            expression.push_str(term.as_str());
            any = true;
        }
        if !any {
            return Ok(DurationValue::zero());
        }
        self.evaluate(&expression)
    }

    /// `a - b`.
    pub fn difference(
        &self,
        a: &DurationValue,
        b: &DurationValue,
    ) -> Result<DurationValue, ArithmeticFailure> {
        self.evaluate(&format!("{a}-{b}"))
    }

    /// Order two durations by the sign of `a - b`.
    ///
    /// An engine error is reported through `tracing` and the pair is
    /// treated as equal.
    pub fn compare(&self, a: &DurationValue, b: &DurationValue) -> Ordering {
        let expression = format!("{a}-{b}");
        let Evaluation { values, errors } = self.engine.evaluate(&expression, self.frame_rate);
        if !errors.is_empty() {
            for message in &errors {
                warn!(%expression, error = %message, "comparison failed, treating as equal");
            }
            return Ordering::Equal;
        }
        let Some(answer) = values.into_iter().next() else {
            warn!(%expression, "comparison produced no value, treating as equal");
            return Ordering::Equal;
        };
        let answer = DurationValue::from_engine(answer.0);
        if answer.is_zero() {
            Ordering::Equal
        } else if answer.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Delegates to [`FrameClock`] but fails the Nth `evaluate` call (0-based)
    /// and counts every call.
    pub struct FailingEngine {
        pub fail_on: Option<usize>,
        pub calls: AtomicUsize,
    }

    impl FailingEngine {
        pub fn failing_at(n: usize) -> Self {
            Self {
                fail_on: Some(n),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn counting() -> Self {
            Self {
                fail_on: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ArithmeticEngine for FailingEngine {
        fn evaluate(&self, expression: &str, frame_rate: u32) -> Evaluation {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_on == Some(n) {
                return Evaluation {
                    values: Vec::new(),
                    errors: vec![format!("forced failure evaluating '{expression}'")],
                };
            }
            FrameClock.evaluate(expression, frame_rate)
        }

        fn frames_to_milliseconds(&self, frames: u64, frame_rate: u32) -> DurationValue {
            FrameClock.frames_to_milliseconds(frames, frame_rate)
        }
    }

    pub fn dv(s: &str) -> DurationValue {
        DurationValue::from_engine(s)
    }

    /// Rejects every expression with the same fixed messages.
    pub struct RejectingEngine(pub Vec<&'static str>);

    impl ArithmeticEngine for RejectingEngine {
        fn evaluate(&self, _expression: &str, _frame_rate: u32) -> Evaluation {
            Evaluation {
                values: Vec::new(),
                errors: self.0.iter().map(|m| m.to_string()).collect(),
            }
        }

        fn frames_to_milliseconds(&self, frames: u64, frame_rate: u32) -> DurationValue {
            FrameClock.frames_to_milliseconds(frames, frame_rate)
        }
    }

    /// `(level, error field)` of every event emitted while `f` runs.
    pub fn capture_events(f: impl FnOnce()) -> Vec<(tracing::Level, String)> {
        use std::fmt;
        use std::sync::Mutex;

        use tracing::field::{Field, Visit};
        use tracing::{Event, Subscriber};
        use tracing_subscriber::layer::{Context, SubscriberExt};
        use tracing_subscriber::Layer;

        struct ErrorField(String);

        impl Visit for ErrorField {
            fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
                if field.name() == "error" {
                    self.0 = format!("{value:?}");
                }
            }
        }

        struct Capture(Arc<Mutex<Vec<(tracing::Level, String)>>>);

        impl<S: Subscriber> Layer<S> for Capture {
            fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
                let mut field = ErrorField(String::new());
                event.record(&mut field);
                self.0
                    .lock()
                    .unwrap()
                    .push((*event.metadata().level(), field.0));
            }
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::registry().with(Capture(Arc::clone(&events)));
        tracing::subscriber::with_default(subscriber, f);
        let captured = events.lock().unwrap().clone();
        captured
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{capture_events, dv, FailingEngine, RejectingEngine};
    use super::*;

    #[test]
    fn engine_zero_is_canonicalized() {
        assert!(DurationValue::from_engine("000").is_zero());
        assert_eq!(DurationValue::from_engine("000").as_str(), "0");
        assert!(!DurationValue::from_engine("7s100").is_zero());
    }

    #[test]
    fn from_frames_adds_seconds_and_frames() {
        let calc = Calculator::default();
        assert_eq!(calc.from_frames(7, 3).unwrap(), dv("7s100"));
        assert_eq!(calc.from_frames(0, 0).unwrap(), DurationValue::zero());
        assert_eq!(calc.from_frames(0, 15).unwrap(), dv("500"));
    }

    #[test]
    fn sum_of_nothing_skips_engine() {
        let engine = Arc::new(FailingEngine::counting());
        let calc = Calculator::new(engine.clone(), 30);
        assert_eq!(calc.sum(std::iter::empty()).unwrap(), DurationValue::zero());
        assert_eq!(engine.call_count(), 0);
    }

    #[test]
    fn sum_chains_left_to_right() {
        let calc = Calculator::default();
        let terms = [dv("500"), dv("1s200"), dv("7s")];
        assert_eq!(calc.sum(terms.iter()).unwrap(), dv("8s700"));
    }

    #[test]
    fn compare_orders_by_sign() {
        let calc = Calculator::default();
        assert_eq!(calc.compare(&dv("500"), &dv("1s")), Ordering::Less);
        assert_eq!(calc.compare(&dv("1s"), &dv("500")), Ordering::Greater);
        assert_eq!(calc.compare(&dv("1s"), &dv("1s000")), Ordering::Equal);
        assert_eq!(calc.compare(&DurationValue::zero(), &dv("000")), Ordering::Equal);
    }

    #[test]
    fn compare_error_counts_as_equal() {
        let calc = Calculator::new(Arc::new(FailingEngine::failing_at(0)), 30);
        assert_eq!(calc.compare(&dv("500"), &dv("9s")), Ordering::Equal);
    }

    #[test]
    fn compare_error_warns_once_per_message() {
        let calc = Calculator::new(Arc::new(RejectingEngine(vec!["bad term", "overflow"])), 30);
        let events = capture_events(|| {
            assert_eq!(calc.compare(&dv("500"), &dv("9s")), Ordering::Equal);
        });
        assert_eq!(
            events,
            vec![
                (tracing::Level::WARN, "bad term".to_string()),
                (tracing::Level::WARN, "overflow".to_string()),
            ]
        );
    }

    #[test]
    fn arithmetic_failure_logs_each_message_as_error() {
        let calc = Calculator::new(Arc::new(RejectingEngine(vec!["bad term", "overflow"])), 30);
        let events = capture_events(|| {
            let err = calc.difference(&dv("1s"), &dv("500")).unwrap_err();
            assert_eq!(err.errors.len(), 2);
        });
        assert_eq!(
            events,
            vec![
                (tracing::Level::ERROR, "bad term".to_string()),
                (tracing::Level::ERROR, "overflow".to_string()),
            ]
        );
    }

    #[test]
    fn evaluate_rejects_multiple_values() {
        let calc = Calculator::default();
        let err = calc.evaluate("1s,2s").unwrap_err();
        assert!(err.to_string().contains("expected one value"));
    }
}
