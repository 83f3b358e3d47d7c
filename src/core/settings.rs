//! Site settings shared by the server render and the hydrated client
//!
//! The server knows its settings from the environment. The browser learns them
//! from a `<meta>` tag the server writes into the document head, so both sides
//! pick the same page variant and hydration sees identical markup.

use serde::{Deserialize, Serialize};

use crate::core::content::DEFAULT_VARIANT;

/// Name of the `<meta>` tag carrying the default variant key
pub const VARIANT_META: &str = "landing-variant";

/// Query parameter selecting a variant for one visit
pub const VARIANT_QUERY: &str = "variant";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub default_variant: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            default_variant: DEFAULT_VARIANT.to_string(),
        }
    }
}

impl SiteSettings {
    /// Settings as read back from the meta tag; blank values keep the default
    pub fn from_meta(content: Option<&str>) -> Self {
        match content.map(str::trim) {
            Some(key) if !key.is_empty() => Self {
                default_variant: key.to_string(),
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_builtin_variant() {
        assert_eq!(SiteSettings::default().default_variant, "pinky");
    }

    #[test]
    fn test_from_meta() {
        assert_eq!(
            SiteSettings::from_meta(Some(" pinky-direct ")).default_variant,
            "pinky-direct"
        );
        assert_eq!(SiteSettings::from_meta(Some("")), SiteSettings::default());
        assert_eq!(SiteSettings::from_meta(None), SiteSettings::default());
    }
}
