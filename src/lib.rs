//! Style-variant resolution for the `bu-` utility class design system.
//!
//! Components describe themselves with semantic props (kind, theme, size,
//! shape, disabled). This crate turns those props into one deduplicated
//! class string, deterministically and without reading any ambient state:
//!
//! ```
//! use bui_variants::{
//!     components::ButtonVariants,
//!     theme::{ButtonShape, Theme},
//! };
//!
//! let classes = "ghost"
//!     .parse()
//!     .map(ButtonVariants::new)
//!     .and_then(|button| button.theme(Theme::Dark).shape(ButtonShape::Circle).classes())
//!     .unwrap();
//!
//! assert!(classes.contains("bu-rounded-[50%]"));
//! ```

pub mod components;

pub mod theme;

mod error;
pub use error::*;

mod utils;
pub use utils::{
    CLASS_PREFIX, ClassComposer, ClassName, FragmentGroup, FragmentProperty, Fragments, cn,
    find_px, fragment_px,
};

mod init;
pub use init::*;
