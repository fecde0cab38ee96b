use crate::{
    theme::{Theme, Themed},
    utils::{ClassName, Fragments, cn},
};

const TABLE_BACKGROUND: Themed<Fragments> =
    Themed::new(&["bu-bg-light-background"], &["bu-bg-dark-background"]);

// Forced so cell content can't recolor table text.
const TABLE_TEXT: Themed<Fragments> =
    Themed::new(&["!bu-text-light-label"], &["!bu-text-dark-label"]);

pub fn table_background(theme: Theme) -> ClassName {
    cn(TABLE_BACKGROUND.get(theme).iter().copied())
}

pub fn table_text(theme: Theme) -> ClassName {
    cn(TABLE_TEXT.get(theme).iter().copied())
}
