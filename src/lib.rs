//! Navbar library exports for testing

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::bar::view;
pub use crate::core::menu::{ConfigurationError, IconRef, MenuCatalog, MenuEntry};
pub use crate::core::route::Route;
pub use crate::tui::components::navigation_bar::{BarStyle, BarView, ItemView};
