//! Palette configuration.
//!
//! The `[palette]` table selects which SGR range the base color names
//! map to and whether escape output starts enabled.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use technicolor_core::Error;

/// Which SGR range the base palette assigns to color names.
///
/// `Light` uses the bright ranges (foreground 90-97, background
/// 100-107); `Dark` uses the normal ranges (30-37 and 40-47). This
/// only picks the registry's base codes; brightness transforms always
/// operate on the fixed ranges regardless of mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bright base palette (90-97 / 100-107).
    #[default]
    Light,
    /// Normal base palette (30-37 / 40-47).
    Dark,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Light => write!(f, "light"),
            Mode::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Mode::Light),
            "dark" => Ok(Mode::Dark),
            other => Err(Error::Config(format!(
                "unknown palette mode '{}', expected 'light' or 'dark'",
                other
            ))),
        }
    }
}

/// Palette configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaletteConfig {
    /// Base palette range selection.
    /// Default: light (bright ranges)
    #[serde(default)]
    pub mode: Mode,

    /// Whether escape output starts enabled.
    /// Default: true
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            enabled: true,
        }
    }
}

impl PaletteConfig {
    /// Merge another PaletteConfig into this one.
    ///
    /// All fields are copied from `other` since they're all
    /// simple values with no "unset" state in TOML.
    pub fn merge(&mut self, other: &PaletteConfig) {
        self.mode = other.mode;
        self.enabled = other.enabled;
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Light);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("light".parse::<Mode>().unwrap(), Mode::Light);
        assert_eq!("DARK".parse::<Mode>().unwrap(), Mode::Dark);
        assert!("dim".parse::<Mode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trip() {
        for mode in [Mode::Light, Mode::Dark] {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_palette_toml_keys() {
        let palette: PaletteConfig = toml::from_str(
            r#"
            Mode = "dark"
            Enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(palette.mode, Mode::Dark);
        assert!(!palette.enabled);
    }

    #[test]
    fn test_palette_defaults() {
        let palette: PaletteConfig = toml::from_str("").unwrap();
        assert_eq!(palette.mode, Mode::Light);
        assert!(palette.enabled);
    }

    #[test]
    fn test_merge_copies_fields() {
        let mut base = PaletteConfig::default();
        let other = PaletteConfig {
            mode: Mode::Dark,
            enabled: false,
        };
        base.merge(&other);
        assert_eq!(base.mode, Mode::Dark);
        assert!(!base.enabled);
    }
}
