//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;

use crate::core::menu::{MenuCatalog, MenuEntry};
use crate::core::route::Route;
use crate::core::state::App;

/// Creates a test App on the default catalog, starting at Home.
pub fn test_app() -> App {
    App::new(MenuCatalog::default(), Route::Home)
}

/// Two-entry catalog: Home, then Settings (routed to MyPage).
pub fn home_settings_catalog() -> MenuCatalog {
    MenuCatalog::new(vec![
        MenuEntry::new(Route::Home, "home", "home-fill", "Home"),
        MenuEntry::new(Route::MyPage, "person", "person-fill", "Settings"),
    ])
    .unwrap()
}

/// The symbols of row `y`, concatenated.
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    (area.x..area.x + area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
