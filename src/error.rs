use bui_variants_theme::ThemeError;
use thiserror::Error;

use crate::theme::{ButtonShape, ButtonSize, VisualState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// The requested component kind has no style table entry.
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),

    #[error("unknown size `{0}`")]
    UnknownSize(String),

    #[error("unknown shape `{0}`")]
    UnknownShape(String),

    /// Unknown themes are rejected rather than rendering unstyled.
    #[error(transparent)]
    UnknownTheme(#[from] ThemeError),

    /// A style table is missing a `(kind, state)` row. This is an authoring
    /// defect in the static table and is reported by `init()`.
    #[error("style table `{table}` has no {state} entry for `{kind}`")]
    MissingStyleEntry {
        table: &'static str,
        kind: &'static str,
        state: VisualState,
    },

    /// A size tier's fragments break the sizing rules. Reported by `init()`.
    #[error("{shape} button size `{size}` {reason}")]
    InconsistentSize {
        size: ButtonSize,
        shape: ButtonShape,
        reason: &'static str,
    },
}
