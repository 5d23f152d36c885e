//! # Theme
//!
//! Default colors for the bottom bar, and the parsing of `[theme]` overrides.
//!
//! The roles follow a surface / primary / on-surface-variant scheme:
//! the bar sits on `surface`, the selected item uses `primary`, everything
//! else uses `on_surface_variant`.

use ratatui::style::Color;
use std::str::FromStr;

use crate::core::config::{ConfigError, ThemeConfig};
use crate::tui::components::navigation_bar::BarStyle;

pub const SURFACE: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
pub const PRIMARY: Color = Color::Rgb(0x89, 0xb4, 0xfa);
pub const ON_SURFACE_VARIANT: Color = Color::Rgb(0xa6, 0xad, 0xc8);
pub const DEFAULT_CORNER_RADIUS: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub surface: Color,
    pub primary: Color,
    pub on_surface_variant: Color,
    pub corner_radius: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            surface: SURFACE,
            primary: PRIMARY,
            on_surface_variant: ON_SURFACE_VARIANT,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

impl Theme {
    /// Apply `[theme]` overrides on top of the defaults.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            surface: parse_color("container", config.container.as_deref(), defaults.surface)?,
            primary: parse_color("selected", config.selected.as_deref(), defaults.primary)?,
            on_surface_variant: parse_color(
                "unselected",
                config.unselected.as_deref(),
                defaults.on_surface_variant,
            )?,
            corner_radius: config.corner_radius.unwrap_or(defaults.corner_radius),
        })
    }

    pub fn bar_style(&self) -> BarStyle {
        BarStyle {
            container: self.surface,
            selected: self.primary,
            unselected: self.on_surface_variant,
            corner_radius: self.corner_radius,
        }
    }
}

fn parse_color(field: &'static str, value: Option<&str>, default: Color) -> Result<Color, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => Color::from_str(raw.trim()).map_err(|_| ConfigError::InvalidColor {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_keeps_defaults() {
        let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_overrides_are_independent() {
        let config = ThemeConfig {
            selected: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config).unwrap();
        assert_eq!(theme.primary, Color::Rgb(255, 0, 0));
        assert_eq!(theme.surface, SURFACE);
        assert_eq!(theme.on_surface_variant, ON_SURFACE_VARIANT);
        assert_eq!(theme.corner_radius, DEFAULT_CORNER_RADIUS);
    }

    #[test]
    fn test_named_colors_parse() {
        let config = ThemeConfig {
            container: Some("black".to_string()),
            unselected: Some("gray".to_string()),
            corner_radius: Some(0),
            ..Default::default()
        };
        let style = Theme::from_config(&config).unwrap().bar_style();
        assert_eq!(style.container, Color::Black);
        assert_eq!(style.unselected, Color::Gray);
        assert_eq!(style.corner_radius, 0);
    }

    #[test]
    fn test_invalid_color_names_the_field() {
        let config = ThemeConfig {
            unselected: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let err = Theme::from_config(&config).unwrap_err();
        assert_eq!(err.to_string(), "invalid color for theme.unselected: 'not-a-color'");
    }
}
