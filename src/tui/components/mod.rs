//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status line with the current screen and status
//! - `ScreenPlaceholder`: Stand-in for destination content
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames and emit events:
//! - `NavigationBar`: Bottom bar. Persistent `NavigationBarState` holds color
//!   transitions and hit areas; the `NavigationBar` wrapper is built per frame
//!   with borrowed state and props.
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into global
//! state. The bar gets its catalog and current route from the host and hands
//! taps back through `on_navigate`:
//!
//! ```rust,ignore
//! // Good: dependencies are explicit
//! NavigationBar::new(&mut tui.nav_bar, &app.catalog, Some(route), &mut on_navigate)
//!
//! // Bad: hidden dependency on a global menu
//! NavigationBar::new(&mut tui.nav_bar)
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── navigation_bar.rs  (Bottom bar: transitions, rendering, taps)
//! ├── screen.rs          (Destination placeholder)
//! └── title_bar.rs       (Top status line)
//! ```

pub mod navigation_bar;
mod screen;
mod title_bar;

pub use navigation_bar::{BarStyle, BarView, ItemView, NavigationBar, NavigationBarState};
pub use screen::ScreenPlaceholder;
pub use title_bar::TitleBar;
