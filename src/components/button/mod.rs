#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{
    StyleError,
    theme::{
        ButtonShape, ButtonSize, StyleKind, Theme, ThemeExt, Themed, VisualState,
        de_optional_theme,
    },
    utils::{ClassComposer, ClassName, Fragments, impl_named_token},
};

mod styles;
pub use styles::BUTTON_STYLES;

/// Structural classes every button starts from.
pub const BUTTON_BASE: Fragments = &[
    "bu-box-border",
    "bu-inline-flex",
    "bu-items-center",
    "bu-justify-center",
    "bu-rounded-[4px]",
];

const WHITE_TEXT: Themed<Fragments> = Themed::uniform(&["bu-text-white"]);
const OUTLINED: Themed<Fragments> = Themed::uniform(&["bu-border", "bu-border-solid"]);
const TINTED: Themed<Fragments> =
    Themed::new(&["bu-bg-light-primary-14"], &["bu-bg-dark-primary-14"]);
const MUTED_LABEL: Themed<Fragments> =
    Themed::new(&["bu-text-light-label-40"], &["bu-text-dark-label-40"]);
const PLAIN: Themed<Fragments> = Themed::uniform(&[]);

/// The visual treatment of a button.
///
/// `base()` holds the fragments a kind keeps in every state; the per-state
/// rows live in [`BUTTON_STYLES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn base(&self) -> Themed<Fragments>)]
pub enum ButtonVariant {
    #[default]
    #[assoc(name = "primary")]
    #[assoc(base = WHITE_TEXT)]
    Primary,
    #[assoc(name = "secondary")]
    #[assoc(base = TINTED)]
    Secondary,
    #[assoc(name = "tertiary")]
    #[assoc(base = PLAIN)]
    Tertiary,
    #[assoc(name = "text")]
    #[assoc(base = PLAIN)]
    Text,
    #[assoc(name = "ghost")]
    #[assoc(base = OUTLINED)]
    Ghost,
    #[assoc(name = "info")]
    #[assoc(base = MUTED_LABEL)]
    Info,
    #[assoc(name = "buy")]
    #[assoc(base = WHITE_TEXT)]
    Buy,
    #[assoc(name = "sell")]
    #[assoc(base = WHITE_TEXT)]
    Sell,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 8] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Tertiary,
        ButtonVariant::Text,
        ButtonVariant::Ghost,
        ButtonVariant::Info,
        ButtonVariant::Buy,
        ButtonVariant::Sell,
    ];
}

impl StyleKind for ButtonVariant {
    const KINDS: &'static [Self] = &ButtonVariant::ALL;

    fn kind_name(&self) -> &'static str {
        self.name()
    }
}

impl_named_token!(ButtonVariant, UnknownVariant);

/// Semantic button props, resolved into classes by [`ButtonVariants::classes`].
///
/// The theme must already be concrete here; see [`VariantProps`] for
/// inheriting it from an ambient context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ButtonVariants {
    pub variant: ButtonVariant,
    pub theme: Theme,
    pub size: ButtonSize,
    pub shape: ButtonShape,
    pub disabled: bool,
}

impl ButtonVariants {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Composes structural base, kind, size, and shape fragments in that
    /// order. Disabled buttons take the disabled row instead of the enabled
    /// one, never both.
    pub fn classes(&self) -> Result<ClassName, StyleError> {
        let state = VisualState::from_disabled(self.disabled);
        let base = self.variant.base();
        let row = BUTTON_STYLES.lookup(self.variant, self.theme, state)?;

        let class_name = ClassComposer::new()
            .layer(BUTTON_BASE)
            .layer(base.get(self.theme))
            .layer(row)
            .layer(self.size.fragments(self.shape))
            .layer(self.shape.fragments())
            .finish();

        tracing::trace!(
            variant = %self.variant,
            theme = %self.theme,
            size = %self.size,
            shape = %self.shape,
            disabled = self.disabled,
            classes = %class_name,
            "resolved button classes"
        );

        Ok(class_name)
    }
}

/// Resolves button classes from a kind name, failing loudly on names the
/// style table doesn't know.
pub fn resolve_classes(
    kind: &str,
    theme: Theme,
    size: ButtonSize,
    shape: ButtonShape,
    disabled: bool,
) -> Result<ClassName, StyleError> {
    ButtonVariants {
        variant: kind.parse()?,
        theme,
        size,
        shape,
        disabled,
    }
    .classes()
}

/// Button props as they arrive from a component's configuration.
///
/// Everything but the kind is optional: size defaults to medium, shape to
/// normal, and a missing or empty theme defers to the ambient one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantProps {
    #[serde(alias = "variant")]
    pub kind: ButtonVariant,
    #[serde(
        default,
        deserialize_with = "de_optional_theme",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub size: ButtonSize,
    #[serde(default)]
    pub shape: ButtonShape,
    #[serde(default)]
    pub disabled: bool,
}

impl VariantProps {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Pins the theme against `cx` and returns the context-free props.
    pub fn variants(&self, cx: &impl ThemeExt) -> ButtonVariants {
        ButtonVariants {
            variant: self.kind,
            theme: cx.resolve_theme(self.theme),
            size: self.size,
            shape: self.shape,
            disabled: self.disabled,
        }
    }

    pub fn resolve(&self, cx: &impl ThemeExt) -> Result<ClassName, StyleError> {
        self.variants(cx).classes()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tracing_test::traced_test;

    use super::*;
    use crate::{theme::ThemeContext, utils::find_px};

    fn all_variants() -> impl Strategy<Value = ButtonVariants> {
        (
            prop::sample::select(ButtonVariant::ALL.to_vec()),
            prop::sample::select(Theme::ALL.to_vec()),
            prop::sample::select(ButtonSize::ALL.to_vec()),
            prop::sample::select(ButtonShape::ALL.to_vec()),
            any::<bool>(),
        )
            .prop_map(|(variant, theme, size, shape, disabled)| ButtonVariants {
                variant,
                theme,
                size,
                shape,
                disabled,
            })
    }

    #[test]
    fn test_buy_light_medium_normal() {
        let classes = resolve_classes(
            "buy",
            Theme::Light,
            ButtonSize::Medium,
            ButtonShape::Normal,
            false,
        )
        .unwrap();

        assert_eq!(
            classes,
            "bu-box-border bu-inline-flex bu-items-center bu-justify-center bu-rounded-[4px] \
             bu-text-white bu-bg-light-green hover:bu-bg-light-hover-green \
             bu-h-[40px] bu-min-w-[100px] bu-px-[16px] bu-text-[14px] bu-leading-[20px]"
        );
        assert!(
            !classes.contains("bu-rounded-[50%]"),
            "Normal buttons keep the base radius"
        );
    }

    #[test]
    fn test_ghost_dark_small_circle_disabled() {
        let classes = resolve_classes(
            "ghost",
            Theme::Dark,
            ButtonSize::Small,
            ButtonShape::Circle,
            true,
        )
        .unwrap();

        assert_eq!(
            classes,
            "bu-box-border bu-inline-flex bu-items-center bu-justify-center \
             bu-border bu-border-solid \
             bu-text-dark-primary-60 hover:bu-text-dark-primary-60 \
             bu-border-dark-primary-60 hover:bu-bg-transparent \
             bu-h-[28px] bu-w-[28px] bu-text-[12px] bu-leading-[18px] \
             bu-rounded-[50%] bu-px-[0px] bu-py-[0px]"
        );
    }

    #[test]
    fn test_emitted_circle_is_as_wide_as_it_is_tall() {
        for size in ButtonSize::ALL {
            for variant in ButtonVariant::ALL {
                let classes = ButtonVariants {
                    variant,
                    theme: Theme::Light,
                    size,
                    shape: ButtonShape::Circle,
                    disabled: false,
                }
                .classes()
                .unwrap();

                let height = find_px(classes.tokens(), "h");
                assert!(height.is_some(), "{variant} {size} circle should set a height");
                assert_eq!(
                    find_px(classes.tokens(), "w"),
                    height,
                    "{variant} {size} circle emitted {classes}"
                );
                assert!(!classes.tokens().any(|token| token.starts_with("bu-min-w-")));
            }
        }
    }

    #[traced_test]
    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = resolve_classes(
            "nonexistent",
            Theme::Light,
            ButtonSize::Medium,
            ButtonShape::Normal,
            false,
        );

        assert_eq!(
            result,
            Err(StyleError::UnknownVariant("nonexistent".to_string()))
        );
        assert!(logs_contain("rejected unknown style token"));
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        assert!("Primary".parse::<ButtonVariant>().is_err());
        assert_eq!("sell".parse::<ButtonVariant>(), Ok(ButtonVariant::Sell));
    }

    #[test]
    fn test_disabled_replaces_enabled_row() {
        for variant in ButtonVariant::ALL {
            for theme in Theme::ALL {
                let enabled_row = BUTTON_STYLES
                    .lookup(variant, theme, VisualState::Enabled)
                    .unwrap();
                let disabled = ButtonVariants::new(variant)
                    .theme(theme)
                    .disabled(true)
                    .classes()
                    .unwrap();

                for fragment in enabled_row {
                    assert!(
                        !disabled.contains(fragment),
                        "{variant}/{theme} disabled output kept enabled fragment {fragment}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_theme_selects_matching_fragments() {
        let light = ButtonVariants::new(ButtonVariant::Sell).classes().unwrap();
        let dark = ButtonVariants::new(ButtonVariant::Sell)
            .theme(Theme::Dark)
            .classes()
            .unwrap();

        assert!(light.contains("bu-bg-light-red"));
        assert!(!light.contains("bu-bg-dark-red"));
        assert!(dark.contains("bu-bg-dark-red"));
        assert!(!dark.contains("bu-bg-light-red"));
    }

    #[test]
    fn test_props_inherit_ambient_theme() {
        let props =
            VariantProps::from_json(r#"{"kind": "ghost", "size": "small", "shape": "circle", "disabled": true}"#)
                .unwrap();

        let classes = props.resolve(&ThemeContext::new(Theme::Dark)).unwrap();
        let expected = resolve_classes(
            "ghost",
            Theme::Dark,
            ButtonSize::Small,
            ButtonShape::Circle,
            true,
        )
        .unwrap();

        assert_eq!(classes, expected);
    }

    #[test]
    fn test_props_theme_overrides_ambient() {
        let props = VariantProps::from_json(r#"{"variant": "primary", "theme": "light"}"#).unwrap();
        let classes = props.resolve(&ThemeContext::new(Theme::Dark)).unwrap();

        assert!(classes.contains("bu-bg-light-primary"));
        assert_eq!(props.size, ButtonSize::Medium);
        assert_eq!(props.shape, ButtonShape::Normal);
        assert!(!props.disabled);
    }

    #[test]
    fn test_props_reject_unknown_tokens() {
        let err = VariantProps::from_json(r#"{"kind": "nonexistent"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown variant `nonexistent`"));

        let err = VariantProps::from_json(r#"{"kind": "buy", "theme": "sepia"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown theme `sepia`"));

        let err = VariantProps::from_json(r#"{"kind": "buy", "size": "huge"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown size `huge`"));

        assert!(VariantProps::from_json(r#"{"size": "small"}"#).is_err());
    }

    #[test]
    fn test_props_serialize_with_token_names() {
        let props = VariantProps {
            kind: ButtonVariant::Buy,
            theme: None,
            size: ButtonSize::Max,
            shape: ButtonShape::Circle,
            disabled: false,
        };

        assert_eq!(
            serde_json::to_value(&props).unwrap(),
            serde_json::json!({
                "kind": "buy",
                "size": "max",
                "shape": "circle",
                "disabled": false
            })
        );
    }

    proptest! {
        #[test]
        fn prop_resolution_is_idempotent(variants in all_variants()) {
            let first = variants.classes().unwrap();
            let second = variants.classes().unwrap();
            prop_assert_eq!(first.as_str().as_bytes(), second.as_str().as_bytes());
        }

        #[test]
        fn prop_table_fragments_survive_composition(variants in all_variants()) {
            let classes = variants.classes().unwrap();
            let state = VisualState::from_disabled(variants.disabled);
            let row = BUTTON_STYLES.lookup(variants.variant, variants.theme, state).unwrap();
            let base = variants.variant.base();

            for fragment in row.iter().chain(base.get(variants.theme).iter()) {
                prop_assert!(classes.contains(fragment), "{} missing from {}", fragment, classes);
            }
        }

        #[test]
        fn prop_radius_override_only_for_circles(variants in all_variants()) {
            let classes = variants.classes().unwrap();
            let circle = variants.shape == ButtonShape::Circle;

            prop_assert_eq!(classes.contains("bu-rounded-[50%]"), circle);
            prop_assert_eq!(classes.contains("bu-rounded-[4px]"), !circle);
        }
    }
}
