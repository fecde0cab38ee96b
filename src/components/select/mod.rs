use serde::{Deserialize, Serialize};

use crate::{
    theme::{Theme, Themed},
    utils::{ClassComposer, ClassName, Fragments},
};

mod item;
pub use item::*;

const MENU_BASE: Fragments = &[
    "bu-absolute",
    "bu-min-w-[80px]",
    "bu-overflow-hidden",
    "bu-rounded-[4px]",
    "bu-py-[8px]",
];

const MENU_SURFACE: Themed<Fragments> = Themed::new(
    &["bu-bg-light-background", "bu-shadow-[0_4px_12px_rgba(0,0,0,0.08)]"],
    &["bu-bg-dark-fill-secondary", "bu-shadow-[0_4px_12px_rgba(0,0,0,0.32)]"],
);

const FILLED_ARROW: Fragments = &["bu-h-[16px]", "bu-w-[16px]"];
const OUTLINED_ARROW: Fragments = &["bu-ml-[4px]", "bu-h-[10px]", "bu-w-[10px]"];

const FILLED_ARROW_COLOR: Themed<Fragments> =
    Themed::new(&["bu-text-light-label"], &["bu-text-dark-label"]);
const OUTLINED_ARROW_COLOR: Themed<Fragments> =
    Themed::new(&["bu-text-light-label-60"], &["bu-text-dark-label-60"]);

/// Classes for the floating menu panel. Positioning is left to the overlay
/// layer.
pub fn menu_classes(theme: Theme) -> ClassName {
    ClassComposer::new()
        .layer(MENU_BASE)
        .layer(MENU_SURFACE.get(theme))
        .finish()
}

/// The look of the select trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectType {
    #[default]
    Filled,
    Outlined,
}

/// The arrow icon next to the select label.
///
/// A filled arrow points down while the menu is closed and flips when it
/// opens; an outlined arrow does the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectArrow<'a> {
    pub select_type: SelectType,
    pub theme: Theme,
    pub open: bool,
    pub class_name: Option<&'a str>,
}

impl<'a> SelectArrow<'a> {
    pub fn new(select_type: SelectType, theme: Theme) -> Self {
        Self {
            select_type,
            theme,
            ..Self::default()
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Extra caller classes, applied last so they win conflicts.
    pub fn class_name(mut self, class_name: &'a str) -> Self {
        self.class_name = Some(class_name);
        self
    }

    pub fn classes(&self) -> ClassName {
        let (shape, color, rotated) = match self.select_type {
            SelectType::Filled => (FILLED_ARROW, FILLED_ARROW_COLOR, !self.open),
            SelectType::Outlined => (OUTLINED_ARROW, OUTLINED_ARROW_COLOR, self.open),
        };

        ClassComposer::new()
            .layer(shape)
            .push_if(rotated, "bu-rotate-180")
            .layer(color.get(self.theme))
            .push_opt(self.class_name)
            .finish()
    }
}
