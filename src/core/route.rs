//! # Routes
//!
//! Every destination the app can show. The set is closed: adding a screen
//! means adding a variant here, and the compiler points at every `match` that
//! needs updating.
//!
//! Routes are compared by value. Two menu entries that point at
//! `Route::Home` target the same destination, no matter where they came from.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Splash,
    #[default]
    Home,
    Application,
    MyPage,
}

impl Route {
    /// All routes in declaration order.
    pub const ALL: [Route; 4] = [
        Route::Splash,
        Route::Home,
        Route::Application,
        Route::MyPage,
    ];

    /// Stable key used in config files and snapshots.
    pub fn key(&self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Home => "home",
            Route::Application => "application",
            Route::MyPage => "my-page",
        }
    }

    /// Parse a config/env key back into a route.
    pub fn from_key(key: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.key() == key.trim())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_key(route.key()), Some(route));
        }
        assert_eq!(Route::from_key("nowhere"), None);
    }

    #[test]
    fn test_from_key_trims_whitespace() {
        assert_eq!(Route::from_key("  my-page \n"), Some(Route::MyPage));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Route::MyPage).unwrap();
        assert_eq!(json, "\"my-page\"");
        let parsed: Route = serde_json::from_str("\"application\"").unwrap();
        assert_eq!(parsed, Route::Application);
    }

    #[test]
    fn test_value_equality() {
        let a = Route::Home;
        let b = Route::from_key("home").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Route::Splash);
    }
}
