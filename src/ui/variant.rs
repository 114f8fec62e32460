//! Page variants

use serde::{Deserialize, Serialize};

/// The two flavours of the dashboard page.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PageVariant {
    /// Dashboard only.
    #[default]
    Standard,
    /// Dashboard with a toggleable navigation drawer.
    Drawer,
}

impl PageVariant {
    pub fn has_drawer(&self) -> bool {
        matches!(self, PageVariant::Drawer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_uses_lowercase_names() {
        assert_eq!(
            serde_json::to_string(&PageVariant::Drawer).unwrap(),
            "\"drawer\""
        );
        let parsed: PageVariant = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(parsed, PageVariant::Standard);
    }

    #[test]
    fn test_only_drawer_variant_has_drawer() {
        assert!(PageVariant::Drawer.has_drawer());
        assert!(!PageVariant::Standard.has_drawer());
        assert_eq!(PageVariant::Drawer.to_string(), "drawer");
    }
}
