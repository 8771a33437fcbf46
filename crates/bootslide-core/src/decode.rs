use crate::form::FormData;
use crate::state::SliderState;

/// Copies the request value for `client_id` into the slider's submitted value.
///
/// Disabled and read-only sliders ignore the request entirely. Deeper validation is left to
/// the validation phase; a stored submission only marks the slider valid.
///
/// Returns `true` when a submitted value was stored.
pub fn decode(state: &mut SliderState, client_id: &str, form: &FormData) -> bool {
    if state.ignores_input() {
        tracing::debug!(
            client_id,
            disabled = state.disabled,
            readonly = state.readonly,
            "slider ignores request input"
        );
        return false;
    }

    let Some(submitted) = form.get(client_id) else {
        return false;
    };
    tracing::trace!(client_id, submitted, "slider submitted value");
    state.submitted_value = Some(submitted.to_string());
    state.valid = true;
    true
}
