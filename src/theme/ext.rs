use crate::theme::Theme;

/// Access to the ambient theme of whatever context is rendering.
///
/// Resolution is always done by the caller: class resolvers take a concrete
/// [`Theme`] and never read ambient state themselves.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme(&mut self, theme: Theme);

    /// Gets the current theme.
    fn get_theme(&self) -> Theme;

    /// Picks a component's own theme if it has one, the ambient one otherwise.
    fn resolve_theme(&self, theme: Option<Theme>) -> Theme {
        theme.unwrap_or_else(|| self.get_theme())
    }
}

/// A plain ambient theme holder for callers without a context of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl ThemeExt for ThemeContext {
    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    fn get_theme(&self) -> Theme {
        self.theme
    }
}
