//! # Back Stack
//!
//! The host side of navigation. The bottom bar only *asks* to go somewhere;
//! this stack decides what that means.
//!
//! Tab-style rules:
//! - navigating to the route already on top does nothing;
//! - navigating to a route further down pops back to it (no duplicates);
//! - anything else is pushed.
//!
//! The stack is never empty. `pop()` at the root refuses and returns `false`.

use log::debug;

use crate::core::route::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    routes: Vec<Route>,
}

impl BackStack {
    pub fn new(start: Route) -> Self {
        Self {
            routes: vec![start],
        }
    }

    pub fn current(&self) -> Route {
        // Invariant: never empty
        self.routes[self.routes.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Move to `route`. Returns `true` if the current route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            debug!("Navigate to {route}: already current");
            return false;
        }
        if let Some(index) = self.routes.iter().position(|r| *r == route) {
            self.routes.truncate(index + 1);
            debug!("Navigate to {route}: popped back to depth {}", self.depth());
        } else {
            self.routes.push(route);
            debug!("Navigate to {route}: pushed, depth {}", self.depth());
        }
        true
    }

    /// Pop the top route. Returns `false` at the root.
    pub fn pop(&mut self) -> bool {
        if self.routes.len() <= 1 {
            return false;
        }
        self.routes.pop();
        true
    }
}
