use crate::{StyleError, components::BUTTON_STYLES, theme::validate_sizes};

/// Validates every static style table and the button size tiers.
///
/// Call once at startup: a table missing a `(kind, state)` row is an
/// authoring defect and should fail there instead of on some later render.
pub fn init() -> Result<(), StyleError> {
    BUTTON_STYLES
        .validate()
        .and_then(|()| validate_sizes())
        .inspect_err(|err| {
            tracing::error!(%err, "style table validation failed");
        })?;

    tracing::debug!("style tables ready");
    Ok(())
}
