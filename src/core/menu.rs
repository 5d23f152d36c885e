//! # Menu Catalog
//!
//! The ordered list of destinations shown in the bottom bar.
//!
//! A `MenuCatalog` is built once (from config or `MenuCatalog::default()`)
//! and never changes afterwards. Construction is the only place that can
//! fail: two entries pointing at the same route are rejected with
//! `ConfigurationError::DuplicateRoute`, so everything downstream can assume
//! at most one entry matches any route.
//!
//! ```text
//! MenuCatalog
//! └── entries: Vec<MenuEntry>   // rendering order, unique routes
//!     ├── route: Route
//!     ├── icon: IconRef          // unselected asset
//!     ├── selected_icon: IconRef // selected asset
//!     └── title: String
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::route::Route;

/// Opaque reference to an icon asset. Resolved by the renderer's icon store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// One navigable, renderable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub route: Route,
    pub icon: IconRef,
    pub selected_icon: IconRef,
    pub title: String,
}

impl MenuEntry {
    pub fn new(
        route: Route,
        icon: impl Into<IconRef>,
        selected_icon: impl Into<IconRef>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            route,
            icon: icon.into(),
            selected_icon: selected_icon.into(),
            title: title.into(),
        }
    }
}

/// Raised when a catalog cannot be built from the given entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two entries target the same route. Positions are zero-based.
    DuplicateRoute {
        route: Route,
        first: usize,
        second: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::DuplicateRoute {
                route,
                first,
                second,
            } => write!(
                f,
                "menu entries {first} and {second} both target route '{route}'"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Ordered, immutable collection of menu entries with unique routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Build a catalog, rejecting duplicate routes.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, ConfigurationError> {
        for (second, entry) in entries.iter().enumerate() {
            if let Some(first) = entries[..second]
                .iter()
                .position(|earlier| earlier.route == entry.route)
            {
                return Err(ConfigurationError::DuplicateRoute {
                    route: entry.route,
                    first,
                    second,
                });
            }
        }
        debug!("Built menu catalog with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// A catalog with no entries. Renders an empty bar.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MenuEntry> {
        self.entries.get(index)
    }

    /// Index of the entry targeting `route`, if any.
    pub fn position(&self, route: Route) -> Option<usize> {
        self.entries.iter().position(|e| e.route == route)
    }
}

impl Default for MenuCatalog {
    /// The built-in bar: Home, Application, My Page.
    fn default() -> Self {
        Self {
            entries: vec![
                MenuEntry::new(Route::Home, "home", "home-fill", "Home"),
                MenuEntry::new(Route::Application, "apps", "apps-fill", "Apply"),
                MenuEntry::new(Route::MyPage, "person", "person-fill", "My Page"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(route: Route, title: &str) -> MenuEntry {
        MenuEntry::new(route, "icon", "icon-fill", title)
    }

    #[test]
    fn test_unique_routes_build_in_order() {
        let catalog = MenuCatalog::new(vec![
            entry(Route::MyPage, "Me"),
            entry(Route::Home, "Home"),
            entry(Route::Application, "Apply"),
        ])
        .unwrap();

        let titles: Vec<&str> = catalog.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Me", "Home", "Apply"]);
    }

    #[test]
    fn test_entries_are_deterministic() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.entries(), catalog.entries());
        assert_eq!(catalog.entries().to_vec(), MenuCatalog::default().entries().to_vec());
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let err = MenuCatalog::new(vec![
            entry(Route::Home, "Home"),
            entry(Route::MyPage, "Me"),
            entry(Route::Home, "Home again"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ConfigurationError::DuplicateRoute {
                route: Route::Home,
                first: 0,
                second: 2,
            }
        );
        assert_eq!(
            err.to_string(),
            "menu entries 0 and 2 both target route 'home'"
        );
    }

    #[test]
    fn test_duplicate_detected_even_with_different_titles_and_icons() {
        let a = MenuEntry::new(Route::Splash, "a", "b", "One");
        let b = MenuEntry::new(Route::Splash, "c", "d", "Two");
        assert!(MenuCatalog::new(vec![a, b]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let catalog = MenuCatalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog, MenuCatalog::empty());
    }

    #[test]
    fn test_position_and_get() {
        let catalog = MenuCatalog::default();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position(Route::Application), Some(1));
        assert_eq!(catalog.position(Route::Splash), None);
        assert_eq!(catalog.get(2).map(|e| e.route), Some(Route::MyPage));
        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_default_catalog_passes_validation() {
        let default = MenuCatalog::default();
        let rebuilt = MenuCatalog::new(default.entries().to_vec()).unwrap();
        assert_eq!(rebuilt, default);
    }

    #[test]
    fn test_icon_ref_is_transparent_in_serde() {
        let entry = MenuEntry::new(Route::Home, "home", "home-fill", "Home");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["icon"], "home");
        assert_eq!(json["selected_icon"], "home-fill");
        assert_eq!(json["route"], "home");
    }
}
