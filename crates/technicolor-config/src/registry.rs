//! The color registry.
//!
//! Built once from configuration and read-only afterwards: maps color
//! names and single-letter aliases to foreground and background
//! styles, resolves the dotted paths used by the inline markup
//! language, and iterates canonical entries for display.

use std::collections::HashMap;

use technicolor_core::{codes, Error, Result, Style};

use crate::{Config, Mode};

/// Canonical color names, their single-letter aliases, and their
/// offset within an SGR color range.
const COLOR_NAMES: &[(&str, &str, u8)] = &[
    ("BLACK", "K", 0),
    ("RED", "R", 1),
    ("GREEN", "G", 2),
    ("YELLOW", "Y", 3),
    ("BLUE", "B", 4),
    ("MAGENTA", "M", 5),
    ("CYAN", "C", 6),
    ("WHITE", "W", 7),
];

/// Immutable name-to-style tables for one palette mode.
///
/// The registry is the lookup surface behind the inline markup
/// language: `FG`/`BG` namespaces of eight colors each (plus aliases),
/// the attribute constants, and trailing `light`/`dark` transforms.
#[derive(Debug, Clone)]
pub struct Registry {
    mode: Mode,
    fg: HashMap<String, Style>,
    bg: HashMap<String, Style>,
}

impl Registry {
    /// Build the registry tables for the configured palette mode.
    pub fn from_config(config: &Config) -> Self {
        Self::with_mode(config.palette.mode)
    }

    /// Build the registry tables for an explicit mode.
    pub fn with_mode(mode: Mode) -> Self {
        let (fg_base, bg_base) = bases(mode);

        let mut fg = HashMap::new();
        let mut bg = HashMap::new();
        for &(name, alias, offset) in COLOR_NAMES {
            for key in [name, alias] {
                fg.insert(key.to_string(), Style::from_code(fg_base + offset));
                bg.insert(key.to_string(), Style::from_code(bg_base + offset));
            }
        }

        Self { mode, fg, bg }
    }

    /// The palette mode the tables were built for.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Look up a foreground color by name or alias, case-insensitively.
    pub fn fg(&self, name: &str) -> Option<&Style> {
        self.fg.get(&name.to_ascii_uppercase())
    }

    /// Look up a background color by name or alias, case-insensitively.
    pub fn bg(&self, name: &str) -> Option<&Style> {
        self.bg.get(&name.to_ascii_uppercase())
    }

    /// Look up an attribute style by name or alias.
    pub fn attribute(&self, name: &str) -> Option<Style> {
        codes::attribute_code(name).map(Style::from_code)
    }

    /// Resolve a dotted style path from the markup language.
    ///
    /// Grammar: an optional `FG`/`BG` namespace, then a color name or
    /// alias (or a bare attribute name), then any number of `light`/
    /// `bright`/`dark` transform segments. Bare color names resolve as
    /// foreground. All segments match case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] for anything that does not resolve;
    /// a broken markup path is a caller bug and is never ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use technicolor_config::{Mode, Registry};
    ///
    /// let registry = Registry::with_mode(Mode::Light);
    /// assert_eq!(registry.lookup("FG.RED").unwrap().codes(), &[91]);
    /// assert_eq!(registry.lookup("BG.K.dark").unwrap().codes(), &[40]);
    /// assert_eq!(registry.lookup("BOLD").unwrap().codes(), &[1]);
    /// assert!(registry.lookup("FG.PINK").is_err());
    /// ```
    pub fn lookup(&self, path: &str) -> Result<Style> {
        let mut segments = path.split('.').map(str::trim);

        let first = segments.next().unwrap_or_default();
        let mut style = match first.to_ascii_uppercase().as_str() {
            "FG" => {
                let name = segments.next().ok_or_else(|| missing_color(path))?;
                self.fg(name).cloned().ok_or_else(|| bad_path(path, name))?
            }
            "BG" => {
                let name = segments.next().ok_or_else(|| missing_color(path))?;
                self.bg(name).cloned().ok_or_else(|| bad_path(path, name))?
            }
            bare => {
                if let Some(color) = self.fg.get(bare) {
                    color.clone()
                } else if let Some(attr) = self.attribute(bare) {
                    attr
                } else {
                    return Err(bad_path(path, first));
                }
            }
        };

        for segment in segments {
            match segment.to_ascii_lowercase().as_str() {
                "light" | "bright" => style = style.lighten(),
                "dark" => style = style.darken(),
                _ => return Err(bad_path(path, segment)),
            }
        }

        Ok(style)
    }

    /// Canonical color entries in SGR code order, for display.
    ///
    /// Yields `(name, fg, bg)` triples; aliases are skipped.
    pub fn iter_colors(&self) -> impl Iterator<Item = (&'static str, Style, Style)> {
        let (fg_base, bg_base) = bases(self.mode);
        COLOR_NAMES.iter().map(move |&(name, _, offset)| {
            (
                name,
                Style::from_code(fg_base + offset),
                Style::from_code(bg_base + offset),
            )
        })
    }
}

fn bases(mode: Mode) -> (u8, u8) {
    match mode {
        Mode::Light => (codes::FG_BRIGHT_BASE, codes::BG_BRIGHT_BASE),
        Mode::Dark => (codes::FG_BASE, codes::BG_BASE),
    }
}

fn bad_path(path: &str, segment: &str) -> Error {
    Error::Lookup(format!("unknown style '{}' in path '{}'", segment, path))
}

fn missing_color(path: &str) -> Error {
    Error::Lookup(format!("color path '{}' needs a color name", path))
}
