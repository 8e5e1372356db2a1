//! Colour scheme preference.
//!
//! The preference is read once at startup into a [`ThemeConfig`] and applied
//! by the web layer; nothing here touches the DOM.

use std::fmt;
use std::str::FromStr;

/// Persisted colour scheme preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
    /// Follow the operating system.
    #[default]
    System,
}

impl ColorScheme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::System => "system",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised stored preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color scheme '{0}'")]
pub struct UnknownScheme(pub String);

impl FromStr for ColorScheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "system" | "" => Ok(Self::System),
            other => Err(UnknownScheme(other.to_string())),
        }
    }
}

/// Startup theme configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    pub preference: ColorScheme,
}

impl ThemeConfig {
    /// Build from the raw stored value. Missing or unknown → `System`.
    pub fn from_stored(value: Option<&str>) -> Self {
        let preference = value
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        Self { preference }
    }

    /// Whether dark mode is in effect given the OS preference.
    pub fn is_dark(self, system_prefers_dark: bool) -> bool {
        match self.preference {
            ColorScheme::Dark => true,
            ColorScheme::Light => false,
            ColorScheme::System => system_prefers_dark,
        }
    }

    /// The explicit preference the header toggle switches to.
    pub fn toggled(self, system_prefers_dark: bool) -> Self {
        let preference = if self.is_dark(system_prefers_dark) {
            ColorScheme::Light
        } else {
            ColorScheme::Dark
        };
        Self { preference }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("dark".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
        assert_eq!(" Light ".parse::<ColorScheme>(), Ok(ColorScheme::Light));
        assert_eq!("".parse::<ColorScheme>(), Ok(ColorScheme::System));
        assert_eq!(
            "sepia".parse::<ColorScheme>(),
            Err(UnknownScheme("sepia".to_string()))
        );
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(ThemeConfig::from_stored(None).preference, ColorScheme::System);
        assert_eq!(ThemeConfig::from_stored(Some("dark")).preference, ColorScheme::Dark);
        assert_eq!(ThemeConfig::from_stored(Some("junk")).preference, ColorScheme::System);
    }

    #[test]
    fn test_is_dark() {
        let system = ThemeConfig::default();
        assert!(system.is_dark(true));
        assert!(!system.is_dark(false));
        assert!(ThemeConfig { preference: ColorScheme::Dark }.is_dark(false));
        assert!(!ThemeConfig { preference: ColorScheme::Light }.is_dark(true));
    }

    #[test]
    fn test_toggled() {
        let system = ThemeConfig::default();
        assert_eq!(system.toggled(true).preference, ColorScheme::Light);
        assert_eq!(system.toggled(false).preference, ColorScheme::Dark);
        let dark = ThemeConfig { preference: ColorScheme::Dark };
        assert_eq!(dark.toggled(false).toggled(false), dark);
    }
}
