//! # Core Application Logic
//!
//! Routes, the menu catalog, and the host's navigation state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Route (destinations) │
//!                    │  • MenuCatalog (menu)   │
//!                    │  • view() (bar view)    │
//!                    │  • BackStack (history)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`route`]: The `Route` enum, every navigable destination
//! - [`menu`]: `MenuEntry` and the validated `MenuCatalog`
//! - [`bar`]: `view()`, the pure bar view over any color type
//! - [`navigation`]: `BackStack`, the host-owned history
//! - [`state`]: The `App` struct
//! - [`action`]: The `Action` enum and `update()`
//! - [`config`]: File/env/CLI configuration

pub mod action;
pub mod bar;
pub mod config;
pub mod menu;
pub mod navigation;
pub mod route;
pub mod state;
