//! Themes, style tokens, and the tables that map them to class fragments.
//!
//! The [`Theme`] itself lives in `bui_variants_theme`; this module adds the
//! component side: size and shape tokens, visual states, and the generic
//! [`StyleTable`] every component kind is looked up in.

pub use bui_variants_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod table;
pub use table::*;
