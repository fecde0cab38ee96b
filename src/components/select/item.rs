use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    theme::{Theme, ThemeExt, Themed, de_optional_theme},
    utils::{ClassComposer, ClassName, Fragments},
};

/// Defines how an item in a select menu is identified and displayed.
pub trait SelectItem {
    /// The type of value this item represents.
    type Value: PartialEq + ?Sized;

    /// Returns the label shown in the menu.
    fn label(&self) -> &str;

    /// Returns a reference to the underlying value.
    fn value(&self) -> &Self::Value;
}

/// A label paired with the value it selects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledItem {
    pub label: String,
    pub value: String,
}

impl LabeledItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl SelectItem for LabeledItem {
    type Value = str;

    fn label(&self) -> &str {
        &self.label
    }

    fn value(&self) -> &Self::Value {
        &self.value
    }
}

impl SelectItem for &'static str {
    type Value = str;

    fn label(&self) -> &str {
        self
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

impl SelectItem for String {
    type Value = str;

    fn label(&self) -> &str {
        self
    }

    fn value(&self) -> &Self::Value {
        self
    }
}

const MENU_ITEM_BASE: Fragments = &[
    "bu-flex",
    "bu-h-[32px]",
    "bu-cursor-pointer",
    "bu-items-center",
    "bu-px-[16px]",
    "bu-text-[12px]",
    "bu-leading-[18px]",
];

const MENU_ITEM_ACTIVE: Themed<Fragments> = Themed::new(
    &["bu-text-light-primary", "bu-bg-light-primary-10"],
    &["bu-text-dark-primary", "bu-bg-dark-primary-10"],
);

const MENU_ITEM_INACTIVE: Themed<Fragments> = Themed::new(
    &["bu-text-light-label", "hover:bu-bg-light-fill-primary"],
    &["bu-text-dark-label", "hover:bu-bg-dark-fill-primary"],
);

/// Highlight state of one menu item.
///
/// Both active states render the same classes; they are kept apart so
/// callers can tell a hovered selection from a resting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemState {
    Inactive,
    ActiveSelected,
    ActiveHover,
}

impl MenuItemState {
    /// `active_color = false` switches highlighting off for every item, no
    /// matter which one is selected.
    pub fn derive(selected: bool, hovered: bool, active_color: bool) -> Self {
        match (active_color && selected, hovered) {
            (false, _) => MenuItemState::Inactive,
            (true, false) => MenuItemState::ActiveSelected,
            (true, true) => MenuItemState::ActiveHover,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, MenuItemState::Inactive)
    }

    /// Active and inactive styling replace each other; they are never
    /// layered.
    pub fn classes(&self, theme: Theme) -> ClassName {
        let state = if self.is_active() {
            MENU_ITEM_ACTIVE
        } else {
            MENU_ITEM_INACTIVE
        };

        ClassComposer::new()
            .layer(MENU_ITEM_BASE)
            .layer(state.get(theme))
            .finish()
    }
}

impl fmt::Display for MenuItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItemState::Inactive => "inactive",
            MenuItemState::ActiveSelected => "active-selected",
            MenuItemState::ActiveHover => "active-hover",
        })
    }
}

/// Classes for `item` in a menu whose current value is `value`.
pub fn menu_item_classes<I: SelectItem>(
    value: &I::Value,
    item: &I,
    theme: Theme,
    active_color: bool,
) -> ClassName {
    MenuItemState::derive(item.value() == value, false, active_color).classes(theme)
}

fn active_by_default() -> bool {
    true
}

/// Select menu props as they arrive from a component's configuration.
///
/// Highlighting the selected item is on unless `active` is explicitly
/// `false`; a missing or empty theme defers to the ambient one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_optional_theme",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<Theme>,
    #[serde(rename = "active", alias = "activeColor", default = "active_by_default")]
    pub active_color: bool,
}

impl Default for MenuProps {
    fn default() -> Self {
        Self {
            value: None,
            theme: None,
            active_color: active_by_default(),
        }
    }
}

impl MenuProps {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Classes for `item` under these props, with the theme pinned against
    /// `cx`. Nothing is selected while `value` is unset.
    pub fn item_classes<I>(&self, item: &I, cx: &impl ThemeExt) -> ClassName
    where
        I: SelectItem<Value = str>,
    {
        let selected = self.value.as_deref() == Some(item.value());
        MenuItemState::derive(selected, false, self.active_color)
            .classes(cx.resolve_theme(self.theme))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeContext;

    #[test]
    fn test_state_collapses_to_two_outputs() {
        for theme in Theme::ALL {
            let selected = MenuItemState::ActiveSelected.classes(theme);
            let hovered = MenuItemState::ActiveHover.classes(theme);
            let inactive = MenuItemState::Inactive.classes(theme);

            assert_eq!(selected, hovered);
            assert_ne!(selected, inactive);
        }
    }

    #[test]
    fn test_active_color_is_a_kill_switch() {
        for selected in [true, false] {
            for hovered in [true, false] {
                assert_eq!(
                    MenuItemState::derive(selected, hovered, false),
                    MenuItemState::Inactive,
                    "selected={selected} hovered={hovered} should be inactive"
                );
            }
        }

        let item = LabeledItem::new("1H", "1h");
        for theme in Theme::ALL {
            assert_eq!(
                menu_item_classes("1h", &item, theme, false),
                MenuItemState::Inactive.classes(theme)
            );
        }
    }

    #[test]
    fn test_selected_item_is_active() {
        assert_eq!(
            MenuItemState::derive(true, false, true),
            MenuItemState::ActiveSelected
        );
        assert_eq!(
            MenuItemState::derive(true, true, true),
            MenuItemState::ActiveHover
        );
        assert_eq!(
            MenuItemState::derive(false, true, true),
            MenuItemState::Inactive
        );

        let items = [LabeledItem::new("1H", "1h"), LabeledItem::new("1D", "1d")];
        let classes: Vec<_> = items
            .iter()
            .map(|item| menu_item_classes("1d", item, Theme::Dark, true))
            .collect();

        assert!(!classes[0].contains("bu-text-dark-primary"));
        assert!(classes[1].contains("bu-text-dark-primary"));
        assert!(classes[1].contains("bu-bg-dark-primary-10"));
    }

    #[test]
    fn test_active_and_inactive_do_not_blend() {
        let active = MenuItemState::ActiveSelected.classes(Theme::Light);
        let inactive = MenuItemState::Inactive.classes(Theme::Light);

        assert!(!active.contains("bu-text-light-label"));
        assert!(!active.contains("hover:bu-bg-light-fill-primary"));
        assert!(!inactive.contains("bu-text-light-primary"));
    }

    #[test]
    fn test_plain_string_items() {
        let item: &'static str = "USDT";
        assert_eq!(item.label(), "USDT");
        assert_eq!(
            menu_item_classes("USDT", &item, Theme::Light, true),
            MenuItemState::ActiveSelected.classes(Theme::Light)
        );

        let owned = String::from("BTC");
        assert_eq!(owned.value(), "BTC");
    }

    #[test]
    fn test_menu_props_highlight_selection_by_default() {
        let props = MenuProps::from_json(r#"{"value": "1d"}"#).unwrap();
        assert!(props.active_color, "Active highlighting should default to on");
        assert_eq!(
            props,
            MenuProps {
                value: Some("1d".into()),
                ..MenuProps::default()
            }
        );

        let cx = ThemeContext::new(Theme::Dark);
        let selected = props.item_classes(&LabeledItem::new("1D", "1d"), &cx);
        let other = props.item_classes(&LabeledItem::new("1H", "1h"), &cx);

        assert_eq!(selected, MenuItemState::ActiveSelected.classes(Theme::Dark));
        assert_eq!(other, MenuItemState::Inactive.classes(Theme::Dark));
    }

    #[test]
    fn test_menu_props_active_false_switches_highlighting_off() {
        let cx = ThemeContext::default();
        let item = LabeledItem::new("1D", "1d");

        for json in [
            r#"{"value": "1d", "active": false}"#,
            r#"{"value": "1d", "activeColor": false}"#,
        ] {
            let props = MenuProps::from_json(json).unwrap();
            assert_eq!(
                props.item_classes(&item, &cx),
                MenuItemState::Inactive.classes(Theme::Light),
                "{json} should render inactive"
            );
        }
    }

    #[test]
    fn test_menu_props_theme() {
        let item: &'static str = "USDT";
        let props = MenuProps::from_json(r#"{"value": "USDT", "theme": "light"}"#).unwrap();
        assert_eq!(
            props.item_classes(&item, &ThemeContext::new(Theme::Dark)),
            MenuItemState::ActiveSelected.classes(Theme::Light)
        );

        let props = MenuProps::from_json("{}").unwrap();
        assert_eq!(props, MenuProps::default());
        let classes = props.item_classes(&item, &ThemeContext::default());
        assert!(!classes.contains("bu-text-light-primary"));

        assert!(MenuProps::from_json(r#"{"theme": "sepia"}"#).is_err());
    }

    #[test]
    fn test_state_names() {
        assert_eq!(MenuItemState::ActiveHover.to_string(), "active-hover");
    }
}
