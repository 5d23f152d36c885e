//! # Application State
//!
//! Core state for the host app. No TUI types here; presentation state
//! (color transitions, cached hit areas) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── back_stack: BackStack     // navigation history, never empty
//! ├── catalog: MenuCatalog      // entries shown in the bottom bar
//! └── status_message: String    // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::menu::MenuCatalog;
use crate::core::navigation::BackStack;
use crate::core::route::Route;

pub struct App {
    pub back_stack: BackStack,
    pub catalog: MenuCatalog,
    pub status_message: String,
}

impl App {
    pub fn new(catalog: MenuCatalog, start: Route) -> Self {
        Self {
            back_stack: BackStack::new(start),
            catalog,
            status_message: String::from("Welcome!"),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.catalog.clone(), config.start_route)
    }

    pub fn current_route(&self) -> Route {
        self.back_stack.current()
    }

    /// Title of the current route's menu entry, or its key if it has none.
    pub fn current_title(&self) -> String {
        let route = self.current_route();
        self.catalog
            .position(route)
            .and_then(|i| self.catalog.get(i))
            .map(|e| e.title.clone())
            .unwrap_or_else(|| route.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome!");
        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.back_stack.depth(), 1);
    }

    #[test]
    fn test_current_title_falls_back_to_route_key() {
        let app = App::new(MenuCatalog::default(), Route::Splash);
        assert_eq!(app.current_title(), "splash");
        let app = App::new(MenuCatalog::default(), Route::MyPage);
        assert_eq!(app.current_title(), "My Page");
    }
}
