use crate::state::SliderState;
use crate::{Error, Result};

/// Converts a raw slider value to an integer.
///
/// Plain integers are accepted with an optional sign. Finite decimal numbers are truncated
/// toward zero. Everything else fails with [`Error::ValueConversion`].
pub fn to_int(raw: &str) -> Result<i64> {
    let text = raw.trim();
    if let Ok(v) = text.parse::<i64>() {
        return Ok(v);
    }

    let conversion_error = || Error::ValueConversion {
        value: raw.to_string(),
    };
    // `f64::from_str` also accepts `inf`/`NaN`; only plain decimal notation is a number here.
    let looks_decimal = !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !looks_decimal {
        return Err(conversion_error());
    }
    let v = text.parse::<f64>().map_err(|_| conversion_error())?;
    let truncated = v.trunc();
    if !truncated.is_finite() || truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(conversion_error());
    }
    Ok(truncated as i64)
}

/// Outcome of value resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedValue {
    /// The value shown by the input and the client widget, always within `[min, max]`.
    pub display: i64,
    /// A value that should be written back into the component's stored value.
    ///
    /// Only set when neither a submitted nor a stored value existed and the default was used.
    pub persist: Option<i64>,
}

impl ResolvedValue {
    /// Writes the persisted default, if any, into `state`.
    pub fn apply(&self, state: &mut SliderState) {
        if let Some(v) = self.persist {
            state.value = Some(v);
        }
    }
}

/// The value a slider starts at when nothing is stored: half of `max`, rounded down.
pub fn default_value(max: i64) -> i64 {
    max.div_euclid(2)
}

/// Resolves the value to display for `state`.
///
/// The submitted value wins over the stored value; with neither present the default from
/// [`default_value`] is used and reported for persisting. The result is clamped into
/// `[min, max]` without raising an error.
pub fn resolve_value(state: &SliderState) -> Result<ResolvedValue> {
    let (raw, persist) = match (&state.submitted_value, state.value) {
        (Some(submitted), _) => (to_int(submitted)?, None),
        (None, Some(stored)) => (stored, None),
        (None, None) => {
            let v = default_value(state.max);
            tracing::debug!(max = state.max, value = v, "no slider value, using default");
            (v, Some(v))
        }
    };

    Ok(ResolvedValue {
        display: clamp_value(raw, state.min, state.max),
        persist,
    })
}

/// Clamps `v` into `[min, max]`. The upper bound is applied first, so an inverted range
/// (`min > max`) yields `min`.
pub fn clamp_value(v: i64, min: i64, max: i64) -> i64 {
    let mut out = v;
    if out > max {
        out = max;
    }
    if out < min {
        out = min;
    }
    if out != v {
        tracing::debug!(value = v, min, max, clamped = out, "slider value out of range");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Mode;

    fn state(min: i64, max: i64) -> SliderState {
        SliderState {
            min,
            max,
            ..SliderState::new(Mode::Basic)
        }
    }

    #[test]
    fn to_int_accepts_integers_and_truncates_decimals() {
        assert_eq!(to_int("42"), Ok(42));
        assert_eq!(to_int(" -7 "), Ok(-7));
        assert_eq!(to_int("+3"), Ok(3));
        assert_eq!(to_int("42.9"), Ok(42));
        assert_eq!(to_int("-42.9"), Ok(-42));
        assert_eq!(to_int("1e2"), Ok(100));
    }

    #[test]
    fn to_int_rejects_non_numbers() {
        for raw in ["", "  ", "abc", "12abc", "NaN", "inf", "1e400", "--1"] {
            assert_eq!(
                to_int(raw),
                Err(Error::ValueConversion {
                    value: raw.to_string()
                }),
                "{raw:?} should not convert"
            );
        }
    }

    #[test]
    fn default_is_half_of_max() {
        let resolved = resolve_value(&state(0, 100)).expect("resolves");
        assert_eq!(
            resolved,
            ResolvedValue {
                display: 50,
                persist: Some(50)
            }
        );

        let resolved = resolve_value(&state(0, 7)).expect("resolves");
        assert_eq!(resolved.display, 3);
        assert_eq!(default_value(-5), -3);
    }

    #[test]
    fn default_is_clamped_but_persisted_unclamped() {
        let resolved = resolve_value(&state(80, 100)).expect("resolves");
        assert_eq!(resolved.display, 80);
        assert_eq!(resolved.persist, Some(50));
    }

    #[test]
    fn submitted_value_wins_over_stored_value() {
        let mut s = state(0, 100);
        s.value = Some(10);
        s.submitted_value = Some("20".to_string());
        assert_eq!(
            resolve_value(&s),
            Ok(ResolvedValue {
                display: 20,
                persist: None
            })
        );
    }

    #[test]
    fn stored_value_is_clamped() {
        let mut s = state(0, 10);
        s.value = Some(15);
        assert_eq!(resolve_value(&s).map(|r| r.display), Ok(10));

        s.value = Some(-3);
        assert_eq!(resolve_value(&s).map(|r| r.display), Ok(0));
    }

    #[test]
    fn non_numeric_submission_propagates_conversion_error() {
        let mut s = state(0, 10);
        s.value = Some(5);
        s.submitted_value = Some("ten".to_string());
        assert_eq!(
            resolve_value(&s),
            Err(Error::ValueConversion {
                value: "ten".to_string()
            })
        );
    }

    #[test]
    fn apply_only_writes_persisted_default() {
        let mut s = state(0, 10);
        resolve_value(&s).expect("resolves").apply(&mut s);
        assert_eq!(s.value, Some(5));

        s.value = Some(9);
        resolve_value(&s).expect("resolves").apply(&mut s);
        assert_eq!(s.value, Some(9));
    }
}
