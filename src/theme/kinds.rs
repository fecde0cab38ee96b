#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use crate::{
    StyleError,
    utils::{Fragments, find_px, impl_named_token},
};

const NO_FRAGMENTS: Fragments = &[];

// Rectangles grow a minimum width with size; circles pin width to height.
const SMALL_RECT: Fragments = &[
    "bu-h-[28px]",
    "bu-min-w-[80px]",
    "bu-px-[12px]",
    "bu-text-[12px]",
    "bu-leading-[18px]",
];
const SMALL_CIRCLE: Fragments = &[
    "bu-h-[28px]",
    "bu-w-[28px]",
    "bu-px-[12px]",
    "bu-text-[12px]",
    "bu-leading-[18px]",
];
const MEDIUM_RECT: Fragments = &[
    "bu-h-[40px]",
    "bu-min-w-[100px]",
    "bu-px-[16px]",
    "bu-text-[14px]",
    "bu-leading-[20px]",
];
const MEDIUM_CIRCLE: Fragments = &[
    "bu-h-[40px]",
    "bu-w-[40px]",
    "bu-px-[16px]",
    "bu-text-[14px]",
    "bu-leading-[20px]",
];
const LARGE_RECT: Fragments = &[
    "bu-h-[48px]",
    "bu-min-w-[140px]",
    "bu-px-[24px]",
    "bu-text-[16px]",
    "bu-leading-[24px]",
];
const LARGE_CIRCLE: Fragments = &[
    "bu-h-[48px]",
    "bu-w-[48px]",
    "bu-px-[24px]",
    "bu-text-[16px]",
    "bu-leading-[24px]",
];
const MAX_RECT: Fragments = &[
    "bu-h-[56px]",
    "bu-min-w-[180px]",
    "bu-px-[24px]",
    "bu-text-[18px]",
    "bu-leading-[26px]",
];
const MAX_CIRCLE: Fragments = &[
    "bu-h-[56px]",
    "bu-w-[56px]",
    "bu-px-[24px]",
    "bu-text-[18px]",
    "bu-leading-[26px]",
];

const CIRCLE: Fragments = &["bu-rounded-[50%]", "bu-px-[0px]", "bu-py-[0px]"];

/// Button size tiers, smallest first.
///
/// Size fragments depend on the shape as well, see [`ButtonSize::fragments`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Assoc, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "&'static str")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn fragments(&self, shape: ButtonShape) -> Fragments)]
pub enum ButtonSize {
    #[assoc(name = "small")]
    #[assoc(fragments = shape.pick(SMALL_RECT, SMALL_CIRCLE))]
    Small,
    #[default]
    #[assoc(name = "medium")]
    #[assoc(fragments = shape.pick(MEDIUM_RECT, MEDIUM_CIRCLE))]
    Medium,
    #[assoc(name = "large")]
    #[assoc(fragments = shape.pick(LARGE_RECT, LARGE_CIRCLE))]
    Large,
    #[assoc(name = "max")]
    #[assoc(fragments = shape.pick(MAX_RECT, MAX_CIRCLE))]
    Max,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Small,
        ButtonSize::Medium,
        ButtonSize::Large,
        ButtonSize::Max,
    ];
}

impl_named_token!(ButtonSize, UnknownSize);

fn size_px(size: ButtonSize, shape: ButtonShape, utility: &str) -> Option<u32> {
    find_px(size.fragments(shape).iter().copied(), utility)
}

/// Checks the size tiers: every tier sets a height, circles are as wide as
/// they are tall, and rectangle minimum widths grow strictly with size.
pub fn validate_sizes() -> Result<(), StyleError> {
    let mut previous_min_width = 0;

    for size in ButtonSize::ALL {
        let inconsistent = |shape, reason| StyleError::InconsistentSize {
            size,
            shape,
            reason,
        };

        let height = size_px(size, ButtonShape::Circle, "h")
            .ok_or(inconsistent(ButtonShape::Circle, "sets no pixel height"))?;
        if size_px(size, ButtonShape::Circle, "w") != Some(height) {
            return Err(inconsistent(ButtonShape::Circle, "is not as wide as it is tall"));
        }

        let min_width = size_px(size, ButtonShape::Normal, "min-w")
            .ok_or(inconsistent(ButtonShape::Normal, "sets no pixel min width"))?;
        if size_px(size, ButtonShape::Normal, "h") != Some(height) {
            return Err(inconsistent(ButtonShape::Normal, "differs in height from its circle"));
        }
        if min_width <= previous_min_width {
            return Err(inconsistent(ButtonShape::Normal, "is not wider than the tier below"));
        }
        previous_min_width = min_width;
    }

    tracing::debug!(tiers = ButtonSize::ALL.len(), "validated button sizes");
    Ok(())
}

/// Button outline. Circle only adds structure (radius, zero padding); the
/// size-dependent part lives in [`ButtonSize::fragments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Assoc, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[func(pub fn name(&self) -> &'static str)]
#[func(pub fn fragments(&self) -> Fragments)]
pub enum ButtonShape {
    #[default]
    #[assoc(name = "normal")]
    #[assoc(fragments = NO_FRAGMENTS)]
    Normal,
    #[assoc(name = "circle")]
    #[assoc(fragments = CIRCLE)]
    Circle,
}

impl ButtonShape {
    pub const ALL: [ButtonShape; 2] = [ButtonShape::Normal, ButtonShape::Circle];

    pub fn pick<T>(self, normal: T, circle: T) -> T {
        match self {
            ButtonShape::Normal => normal,
            ButtonShape::Circle => circle,
        }
    }
}

impl_named_token!(ButtonShape, UnknownShape);
