use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
/// Class put on the document root while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

const DARK: &str = "dark";
const LIGHT: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown theme: {0}")]
pub struct ThemeParseError(String);

/// Class list of the document root element.
pub trait RootStyle {
    fn set_class(&self, class: &str, enabled: bool);
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The literal written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// Glyph on the toggle button: the theme a click switches to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Self::Light => "\u{263E}",
            Self::Dark => "\u{2600}",
        }
    }

    pub fn apply<R: RootStyle + ?Sized>(self, root: &R) {
        root.set_class(DARK_THEME_CLASS, self.is_dark());
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            DARK => Ok(Self::Dark),
            LIGHT => Ok(Self::Light),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}
