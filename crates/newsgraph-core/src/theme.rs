//! Rendering themes.
//!
//! A [`Theme`] only ever changes which colors are picked. Geometry is
//! identical between themes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Light or dark color scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns `true` for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Picks the light or dark variant of a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use newsgraph_core::theme::Theme;
    ///
    /// assert_eq!(Theme::Light.pick("#dc2626", "#ef4444"), "#dc2626");
    /// assert_eq!(Theme::Dark.pick("#dc2626", "#ef4444"), "#ef4444");
    /// ```
    pub fn pick<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(format!("invalid theme `{s}`, valid values: light, dark")),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_str() {
        assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
        assert_eq!(Theme::from_str("Dark").unwrap(), Theme::Dark);

        let result = Theme::from_str("sepia");
        assert!(result.unwrap_err().contains("invalid theme"));
    }

    #[test]
    fn test_theme_display_round_trips() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_str(&theme.to_string()).unwrap(), theme);
        }
    }

    #[test]
    fn test_theme_deserialize_lowercase() {
        let theme: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert!(theme.is_dark());
    }
}
