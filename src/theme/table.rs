use std::fmt;

use crate::{
    StyleError,
    theme::{Theme, Themed},
    utils::Fragments,
};

/// Whether a component renders its normal or its disabled styling.
///
/// Derived from props on every resolution, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualState {
    Enabled,
    Disabled,
}

impl VisualState {
    pub const ALL: [VisualState; 2] = [VisualState::Enabled, VisualState::Disabled];

    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            VisualState::Disabled
        } else {
            VisualState::Enabled
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VisualState::Enabled => "enabled",
            VisualState::Disabled => "disabled",
        }
    }
}

impl fmt::Display for VisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A component style family that owns rows in a [`StyleTable`].
pub trait StyleKind: Copy + PartialEq + 'static {
    /// Every kind a complete table has to cover.
    const KINDS: &'static [Self];

    fn kind_name(&self) -> &'static str;
}

/// The fragments one kind emits in one visual state, per theme.
#[derive(Debug, Clone, Copy)]
pub struct StyleEntry<K> {
    pub kind: K,
    pub state: VisualState,
    pub fragments: Themed<Fragments>,
}

impl<K> StyleEntry<K> {
    pub const fn new(kind: K, state: VisualState, light: Fragments, dark: Fragments) -> Self {
        Self {
            kind,
            state,
            fragments: Themed::new(light, dark),
        }
    }
}

/// Static `(kind, state) -> per-theme fragments` rows for one component.
///
/// Rows are plain data, so a kind can be left out by mistake. Run
/// [`StyleTable::validate`] at startup to catch that before any lookup does.
#[derive(Debug)]
pub struct StyleTable<K: 'static> {
    name: &'static str,
    entries: &'static [StyleEntry<K>],
}

impl<K: 'static> StyleTable<K> {
    pub const fn new(name: &'static str, entries: &'static [StyleEntry<K>]) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &'static [StyleEntry<K>] {
        self.entries
    }
}

impl<K: StyleKind> StyleTable<K> {
    pub fn entry(&self, kind: K, state: VisualState) -> Result<&'static StyleEntry<K>, StyleError> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind && entry.state == state)
            .ok_or_else(|| StyleError::MissingStyleEntry {
                table: self.name,
                kind: kind.kind_name(),
                state,
            })
    }

    /// The fragments for `kind` in `state` under `theme`. The entry for the
    /// other state is never consulted.
    pub fn lookup(
        &self,
        kind: K,
        theme: Theme,
        state: VisualState,
    ) -> Result<Fragments, StyleError> {
        Ok(*self.entry(kind, state)?.fragments.get(theme))
    }

    /// Checks that every kind has a row for every visual state.
    pub fn validate(&self) -> Result<(), StyleError> {
        for &kind in K::KINDS {
            for state in VisualState::ALL {
                self.entry(kind, state)?;
            }
        }

        tracing::debug!(
            table = self.name,
            kinds = K::KINDS.len(),
            entries = self.entries.len(),
            "validated style table"
        );

        Ok(())
    }
}
