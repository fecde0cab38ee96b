use crate::{
    components::ButtonVariant::{self, *},
    theme::{
        StyleEntry, StyleTable,
        VisualState::{Disabled, Enabled},
    },
};

/// Per-state button fragments. Fragments a kind shows in every state live
/// in [`ButtonVariant::base`] so enabled and disabled rows never share one.
pub static BUTTON_STYLES: StyleTable<ButtonVariant> = StyleTable::new(
    "button",
    &[
        StyleEntry::new(
            Primary,
            Enabled,
            &["bu-bg-light-primary", "hover:bu-bg-light-hover-primary"],
            &["bu-bg-dark-primary", "hover:bu-bg-dark-hover-primary"],
        ),
        StyleEntry::new(
            Primary,
            Disabled,
            &["bu-bg-light-primary-40", "hover:bu-bg-light-primary-40"],
            &["bu-bg-dark-primary-40", "hover:bu-bg-dark-primary-40"],
        ),
        StyleEntry::new(
            Secondary,
            Enabled,
            &["hover:bu-bg-light-hover-primary-10", "bu-text-light-primary"],
            &["hover:bu-bg-dark-hover-primary-10", "bu-text-dark-primary"],
        ),
        StyleEntry::new(
            Secondary,
            Disabled,
            &["hover:bu-bg-light-primary-14", "bu-text-light-primary-60"],
            &["hover:bu-bg-dark-primary-14", "bu-text-dark-primary-60"],
        ),
        StyleEntry::new(
            Tertiary,
            Enabled,
            &[
                "bu-bg-light-fill-secondary",
                "hover:bu-bg-light-hover-fill-secondary",
                "bu-text-light-label",
            ],
            &[
                "bu-bg-dark-fill-secondary",
                "hover:bu-bg-dark-hover-fill-secondary",
                "bu-text-dark-label",
            ],
        ),
        StyleEntry::new(
            Tertiary,
            Disabled,
            &[
                "bu-bg-light-fill-primary",
                "hover:bu-bg-light-fill-primary",
                "bu-text-light-label-40",
            ],
            &[
                "bu-bg-dark-fill-primary",
                "hover:bu-bg-dark-fill-primary",
                "bu-text-dark-label-60",
            ],
        ),
        StyleEntry::new(
            Text,
            Enabled,
            &["bu-text-light-label", "hover:bu-text-light-primary"],
            &["bu-text-dark-label", "hover:bu-text-dark-primary"],
        ),
        StyleEntry::new(
            Text,
            Disabled,
            &["bu-text-light-label-40", "hover:bu-text-light-label-40"],
            &["bu-text-dark-label-40", "hover:bu-text-dark-label-40"],
        ),
        StyleEntry::new(
            Info,
            Enabled,
            &["hover:bu-text-light-primary"],
            &["hover:bu-text-dark-primary"],
        ),
        StyleEntry::new(
            Info,
            Disabled,
            &["hover:bu-text-light-label-40"],
            &["hover:bu-text-dark-label-40"],
        ),
        StyleEntry::new(
            Ghost,
            Enabled,
            &[
                "bu-text-light-primary",
                "hover:bu-text-light-hover-primary",
                "bu-border-light-primary",
                "hover:bu-bg-light-primary-10",
            ],
            &[
                "bu-text-dark-primary",
                "hover:bu-text-dark-hover-primary",
                "bu-border-dark-primary",
                "hover:bu-bg-dark-primary-10",
            ],
        ),
        StyleEntry::new(
            Ghost,
            Disabled,
            &[
                "bu-text-light-primary-60",
                "hover:bu-text-light-primary-60",
                "bu-border-light-primary-60",
                "hover:bu-bg-transparent",
            ],
            &[
                "bu-text-dark-primary-60",
                "hover:bu-text-dark-primary-60",
                "bu-border-dark-primary-60",
                "hover:bu-bg-transparent",
            ],
        ),
        StyleEntry::new(
            Buy,
            Enabled,
            &["bu-bg-light-green", "hover:bu-bg-light-hover-green"],
            &["bu-bg-dark-green", "hover:bu-bg-dark-hover-green"],
        ),
        StyleEntry::new(
            Buy,
            Disabled,
            &["bu-bg-light-label-20", "hover:bu-bg-light-label-20"],
            &["bu-bg-dark-label-20", "hover:bu-bg-dark-label-20"],
        ),
        StyleEntry::new(
            Sell,
            Enabled,
            &["bu-bg-light-red", "hover:bu-bg-light-hover-red"],
            &["bu-bg-dark-red", "hover:bu-bg-dark-hover-red"],
        ),
        StyleEntry::new(
            Sell,
            Disabled,
            &["bu-bg-light-label-20", "hover:bu-bg-light-label-20"],
            &["bu-bg-dark-label-20", "hover:bu-bg-dark-label-20"],
        ),
    ],
);
