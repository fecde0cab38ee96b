use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two color themes a component can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The lowercase name used in props and class fragments.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| ThemeError::Unknown(s.to_string()))
    }
}

impl TryFrom<String> for Theme {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Theme> for &'static str {
    fn from(theme: Theme) -> Self {
        theme.name()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("unknown theme `{0}`, expected `light` or `dark`")]
    Unknown(String),
}

/// A value defined once per [`Theme`].
///
/// Storing both sides in one struct makes a missing theme a compile error
/// rather than a lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Themed<T> {
    pub light: T,
    pub dark: T,
}

impl<T> Themed<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    pub fn get(&self, theme: Theme) -> &T {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }
}

impl<T: Copy> Themed<T> {
    /// The same value for both themes.
    pub const fn uniform(value: T) -> Self {
        Self {
            light: value,
            dark: value,
        }
    }
}
