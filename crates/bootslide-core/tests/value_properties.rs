use bootslide_core::{FormData, Mode, SliderState, decode, resolve_value};
use proptest::prelude::*;

fn slider(min: i64, max: i64, value: Option<i64>) -> SliderState {
    SliderState {
        min,
        max,
        value,
        ..SliderState::new(Mode::Edit)
    }
}

proptest! {
    #[test]
    fn in_range_value_is_displayed_unchanged(min in -1000i64..1000, span in 0i64..1000, offset in 0i64..1000) {
        let max = min + span;
        let x = min + offset % (span + 1);
        let resolved = resolve_value(&slider(min, max, Some(x))).expect("resolves");
        prop_assert_eq!(resolved.display, x);
        prop_assert_eq!(resolved.persist, None);
    }

    #[test]
    fn value_above_max_displays_max(min in -1000i64..0, max in 0i64..1000, excess in 1i64..100_000) {
        let resolved = resolve_value(&slider(min, max, Some(max + excess))).expect("resolves");
        prop_assert_eq!(resolved.display, max);
    }

    #[test]
    fn value_below_min_displays_min(min in -1000i64..0, max in 0i64..1000, deficit in 1i64..100_000) {
        let resolved = resolve_value(&slider(min, max, Some(min - deficit))).expect("resolves");
        prop_assert_eq!(resolved.display, min);
    }

    #[test]
    fn missing_value_defaults_to_half_max(max in 0i64..100_000) {
        let mut state = slider(0, max, None);
        let resolved = resolve_value(&state).expect("resolves");
        prop_assert_eq!(resolved.display, max / 2);
        resolved.apply(&mut state);
        prop_assert_eq!(state.value, Some(max / 2));
    }

    #[test]
    fn submitted_text_is_clamped_like_stored_values(submitted in -100_000i64..100_000) {
        let mut state = slider(-50, 50, Some(0));
        state.submitted_value = Some(submitted.to_string());
        let resolved = resolve_value(&state).expect("resolves");
        prop_assert_eq!(resolved.display, submitted.clamp(-50, 50));
    }

    #[test]
    fn locked_slider_ignores_any_request(body in "[a-z0-9=&%:]{0,40}", value in proptest::option::of(-10i64..10)) {
        let mut state = slider(-10, 10, value);
        state.disabled = true;
        let before = state.clone();
        let mut form = FormData::from_urlencoded(&body);
        form.insert("s", "5");
        decode(&mut state, "s", &form);
        prop_assert_eq!(state, before);
    }
}

#[test]
fn documented_examples() {
    let resolved = resolve_value(&slider(0, 100, None)).expect("resolves");
    assert_eq!(resolved.display, 50);
    assert_eq!(resolved.persist, Some(50));

    let resolved = resolve_value(&slider(0, 10, Some(15))).expect("resolves");
    assert_eq!(resolved.display, 10);
}

#[test]
fn decode_then_resolve_uses_submission() {
    let mut state = slider(0, 10, Some(2));
    let form = FormData::from_urlencoded("form%3Avolume=8");
    assert!(decode(&mut state, "form:volume", &form));
    assert_eq!(resolve_value(&state).expect("resolves").display, 8);
}
