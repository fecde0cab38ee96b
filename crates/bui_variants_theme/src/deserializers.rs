use serde::{Deserialize, Deserializer, de::Error};

use crate::Theme;

/// Deserializes an optional theme override.
///
/// A missing value, `null`, or an empty string means "use the ambient
/// theme". Any other string must name a known theme.
pub fn de_optional_theme<'de, D>(deserializer: D) -> Result<Option<Theme>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => name.parse().map(Some).map_err(D::Error::custom),
    }
}
