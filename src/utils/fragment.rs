/// Namespace every utility class of the design system starts with.
pub const CLASS_PREFIX: &str = "bu-";

/// The CSS property a utility class writes to.
///
/// Two fragments with the same property (and the same modifiers) conflict,
/// and the later one wins during composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentProperty<'a> {
    Background,
    TextColor,
    FontSize,
    TextAlign,
    LineHeight,
    Height,
    Width,
    MinWidth,
    MinHeight,
    Padding,
    PaddingX,
    PaddingY,
    Radius,
    BorderWidth,
    BorderStyle,
    BorderColor,
    Display,
    AlignItems,
    JustifyContent,
    BoxSizing,
    Rotate,
    Cursor,
    Overflow,
    /// Anything the grouping doesn't know about. Only identical tokens
    /// conflict.
    Other(&'a str),
}

/// A fragment's conflict key: its property scoped by state modifiers
/// (`hover:`) and the important flag (`!`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FragmentGroup<'a> {
    pub modifiers: &'a str,
    pub important: bool,
    pub property: FragmentProperty<'a>,
}

impl<'a> FragmentGroup<'a> {
    pub fn of(token: &'a str) -> Self {
        let (modifiers, utility) = split_modifiers(token);
        let (important, utility) = match utility.strip_prefix('!') {
            Some(utility) => (true, utility),
            None => (false, utility),
        };

        let property = match utility.strip_prefix(CLASS_PREFIX).and_then(classify) {
            Some(property) => property,
            None => FragmentProperty::Other(utility),
        };

        Self {
            modifiers,
            important,
            property,
        }
    }
}

/// Splits `hover:focus:bu-bg-x` into `("hover:focus:", "bu-bg-x")`.
/// Colons inside arbitrary values (`[...]`) are not separators.
fn split_modifiers(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = 0;

    for (index, ch) in token.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = index + 1,
            _ => {}
        }
    }

    token.split_at(split)
}

/// Known property of a `bu-` utility, without its prefix. `None` leaves the
/// token keyed by its full text.
fn classify(name: &str) -> Option<FragmentProperty<'static>> {
    use FragmentProperty::*;

    match name {
        "box-border" | "box-content" => return Some(BoxSizing),
        "flex" | "inline-flex" | "block" | "inline-block" | "inline" | "grid" | "hidden" => {
            return Some(Display);
        }
        "rounded" => return Some(Radius),
        "border" => return Some(BorderWidth),
        "border-solid" | "border-dashed" | "border-dotted" | "border-double" | "border-none" => {
            return Some(BorderStyle);
        }
        _ => {}
    }

    if let Some(value) = name.strip_prefix("text-") {
        return Some(match value {
            "left" | "center" | "right" | "justify" => TextAlign,
            "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" => FontSize,
            _ if is_length(value) => FontSize,
            _ => TextColor,
        });
    }

    if let Some(value) = name.strip_prefix("border-") {
        return if is_length(value) || value.parse::<u8>().is_ok() {
            Some(BorderWidth)
        } else if is_side(value) {
            None
        } else {
            Some(BorderColor)
        };
    }

    if let Some(value) = name.strip_prefix("rounded-") {
        return (!is_side(value)).then_some(Radius);
    }

    let prefixed = [
        ("bg-", Background),
        ("leading-", LineHeight),
        ("min-w-", MinWidth),
        ("min-h-", MinHeight),
        ("h-", Height),
        ("w-", Width),
        ("px-", PaddingX),
        ("py-", PaddingY),
        ("p-", Padding),
        ("items-", AlignItems),
        ("justify-", JustifyContent),
        ("rotate-", Rotate),
        ("cursor-", Cursor),
        ("overflow-", Overflow),
    ];

    prefixed
        .into_iter()
        .find(|(prefix, _)| name.starts_with(prefix))
        .map(|(_, property)| property)
}

/// `[12px]`, `[1.5rem]` and friends.
fn is_length(value: &str) -> bool {
    value
        .strip_prefix('[')
        .and_then(|value| value.strip_suffix(']'))
        .is_some_and(|value| value.ends_with("px") || value.ends_with("rem") || value.ends_with("em"))
}

/// Side-specific utilities (`rounded-t-*`, `border-l`) only touch part of
/// the property and must not displace the full one.
fn is_side(value: &str) -> bool {
    let side = value.split('-').next().unwrap_or_default();
    matches!(
        side,
        "t" | "r" | "b" | "l" | "x" | "y" | "tl" | "tr" | "br" | "bl"
    )
}
