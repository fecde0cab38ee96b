/// Reads the pixel value of an arbitrary-value fragment such as
/// `bu-min-w-[80px]`.
///
/// `utility` is the fragment without its namespace and value (`min-w`).
/// Returns `None` when the fragment is for another utility or its value is
/// not a whole pixel length.
pub fn fragment_px(fragment: &str, utility: &str) -> Option<u32> {
    fragment
        .strip_prefix(crate::utils::CLASS_PREFIX)?
        .strip_prefix(utility)?
        .strip_prefix("-[")?
        .strip_suffix("px]")?
        .parse()
        .ok()
}

/// Finds the first fragment for `utility` and reads its pixel value.
pub fn find_px<'a>(fragments: impl IntoIterator<Item = &'a str>, utility: &str) -> Option<u32> {
    fragments
        .into_iter()
        .find_map(|fragment| fragment_px(fragment, utility))
}
