//! # Actions
//!
//! Everything that can happen to the host app becomes an `Action`.
//! A tap on the bottom bar? That's `Action::Navigate(route)`.
//! Backspace? That's `Action::Back`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the event loop what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::info;

use crate::core::route::Route;
use crate::core::state::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Route),
    Back,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(route) => {
            if app.back_stack.navigate(route) {
                info!(
                    "Navigated to {route} (depth {})",
                    app.back_stack.depth()
                );
                app.status_message = format!("Opened {}", app.current_title());
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        Action::Back => {
            if app.back_stack.pop() {
                info!("Back to {}", app.current_route());
                app.status_message = format!("Back to {}", app.current_title());
            } else {
                app.status_message = String::from("Already at the first screen");
            }
            Effect::Redraw
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_navigate_changes_route_and_status() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Navigate(Route::MyPage));
        assert_eq!(effect, Effect::Redraw);
        assert_eq!(app.current_route(), Route::MyPage);
        assert_eq!(app.status_message, "Opened My Page");
    }

    #[test]
    fn test_navigate_to_current_has_no_effect() {
        let mut app = test_app();
        let before = app.status_message.clone();
        assert_eq!(update(&mut app, Action::Navigate(Route::Home)), Effect::None);
        assert_eq!(app.status_message, before);
    }

    #[test]
    fn test_back_pops_and_reports_root() {
        let mut app = test_app();
        update(&mut app, Action::Navigate(Route::Application));
        assert_eq!(update(&mut app, Action::Back), Effect::Redraw);
        assert_eq!(app.current_route(), Route::Home);
        assert_eq!(app.status_message, "Back to Home");

        update(&mut app, Action::Back);
        assert_eq!(app.status_message, "Already at the first screen");
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
