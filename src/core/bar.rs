//! # Bar View
//!
//! What the bottom bar shows, derived from the catalog and the current route.
//!
//! ```text
//! view(catalog, current_route, style) ──► BarView ──► any renderer
//! ```
//!
//! `view` is pure: no clock, no I/O, same inputs give the same `BarView`. It is
//! generic over the color type so a renderer can bring its own (the terminal
//! adapter uses ratatui colors, tests use plain strings).
//!
//! ## Selection Rules
//!
//! - `selected = (entry.route == current_route)`, by value
//! - the selected entry is disabled: tapping it never calls `on_navigate`
//! - a `current_route` that matches nothing (or `None`) selects nothing
//! - an empty catalog gives a bar with no items
//!
//! Two entries sharing a route cannot happen here: `MenuCatalog` rejects that
//! at construction.

use std::fmt;

use log::{debug, info};
use serde::{Serialize, Serializer};

use crate::core::menu::{IconRef, MenuCatalog};
use crate::core::route::Route;

/// Visual configuration. Each field drives exactly one visual property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarStyle<C> {
    /// Bar background.
    pub container: C,
    /// Icon and title color of the selected entry.
    pub selected: C,
    /// Icon and title color of every other entry.
    pub unselected: C,
    /// Rounding of the top corners. `0` draws square corners.
    pub corner_radius: u16,
}

/// One column of the bar, fully derived from props.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "C: fmt::Display"))]
pub struct ItemView<C> {
    pub route: Route,
    pub title: String,
    /// `selected_icon` when selected, `icon` otherwise.
    pub icon: IconRef,
    pub selected: bool,
    pub enabled: bool,
    /// Color the item settles on. A renderer may animate toward it.
    #[serde(serialize_with = "serialize_color")]
    pub target_color: C,
}

/// The whole bar as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound(serialize = "C: fmt::Display"))]
pub struct BarView<C> {
    #[serde(serialize_with = "serialize_color")]
    pub container: C,
    pub corner_radius: u16,
    pub items: Vec<ItemView<C>>,
}

/// Derive the bar for the given inputs. Same inputs, same output.
pub fn view<C: Copy>(catalog: &MenuCatalog, current_route: Option<Route>, style: &BarStyle<C>) -> BarView<C> {
    let items = catalog
        .entries()
        .iter()
        .map(|entry| {
            let selected = current_route == Some(entry.route);
            ItemView {
                route: entry.route,
                title: entry.title.clone(),
                icon: if selected {
                    entry.selected_icon.clone()
                } else {
                    entry.icon.clone()
                },
                selected,
                enabled: !selected,
                target_color: if selected { style.selected } else { style.unselected },
            }
        })
        .collect();

    BarView {
        container: style.container,
        corner_radius: style.corner_radius,
        items,
    }
}

impl<C> BarView<C> {
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// Deliver a tap on column `index`.
    ///
    /// Calls `on_navigate` once with the item's route if the item exists and
    /// is enabled. Returns whether it was called.
    pub fn tap(&self, index: usize, on_navigate: impl FnOnce(Route)) -> bool {
        match self.items.get(index) {
            Some(item) if item.enabled => {
                info!("Bottom bar tap: {} ({})", item.title, item.route);
                on_navigate(item.route);
                true
            }
            Some(item) => {
                debug!("Ignoring tap on selected item {}", item.route);
                false
            }
            None => false,
        }
    }

    /// Column next to the selection, wrapping around. With nothing selected,
    /// forward starts at the first column and backward at the last.
    pub fn neighbor(&self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        Some(match (self.selected_index(), forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        })
    }
}

fn serialize_color<C: fmt::Display, S: Serializer>(color: &C, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(color)
}
