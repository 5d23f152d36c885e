//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates input into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Navigation Round Trip
//!
//! ```text
//! click / key ──► NavigationBar::handle_event ──► on_navigate(route)
//!                                                      │ mpsc
//!                                                      ▼
//!        redraw ◄── Effect::Redraw ◄── update(app, Action::Navigate(route))
//! ```
//!
//! The bar only reports taps. The back stack in `App` decides what happens,
//! and the next frame renders the bar with whatever route is current.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (a color transition in flight): draws every ~33ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.

pub mod component;
pub mod components;
pub mod event;
pub mod icons;
pub mod theme;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::bar;
use crate::core::config::ResolvedConfig;
use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::navigation_bar::{BarStyle, NavigationBarState};
use crate::tui::components::NavigationBar;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(33);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub nav_bar: NavigationBarState,
    pub bar_style: BarStyle,
}

impl TuiState {
    pub fn new(animation: Duration, bar_style: BarStyle) -> Self {
        Self {
            nav_bar: NavigationBarState::new(animation),
            bar_style,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// The bar's view for the configured start route, as pretty JSON.
pub fn snapshot_json(config: &ResolvedConfig, bar_style: &BarStyle) -> serde_json::Result<String> {
    let view = bar::view(&config.catalog, Some(config.start_route), bar_style);
    serde_json::to_string_pretty(&view)
}

pub fn run(config: ResolvedConfig, bar_style: BarStyle) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(config.animation, bar_style);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable mouse capture: {e}");
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    // Navigation requests from the bar, applied by the host below
    let (tx, rx) = mpsc::channel::<Action>();
    let mut on_navigate = move |route: Route| {
        if tx.send(Action::Navigate(route)).is_err() {
            warn!("Dropped navigation request to {route}: receiver gone");
        }
    };

    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        if needs_redraw || tui.nav_bar.is_animating(now) {
            terminal.draw(|f| ui::draw_ui(f, app, tui, now, &mut on_navigate))?;
            needs_redraw = false;
        }

        // Short poll while colors are moving, long when idle
        let timeout = if tui.nav_bar.is_animating(Instant::now()) {
            ANIMATION_FRAME
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain pending events before next draw
        let events = first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate));
        if handle_events(events, app, tui, &mut on_navigate, &rx) == Flow::Quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Handle a batch of events until it runs dry, a quit, or a resize.
///
/// A resize ends the batch: hit areas are from the old size until the next
/// draw, so later clicks stay queued for the next iteration.
fn handle_events(
    events: impl Iterator<Item = TuiEvent>,
    app: &mut App,
    tui: &mut TuiState,
    on_navigate: &mut dyn FnMut(Route),
    rx: &mpsc::Receiver<Action>,
) -> Flow {
    for event in events {
        let effect = match event {
            TuiEvent::Resize => {
                debug!("Resize, redrawing before further input");
                return Flow::Continue;
            }
            TuiEvent::Quit => update(app, Action::Quit),
            TuiEvent::Back => update(app, Action::Back),
            TuiEvent::TapIndex(_)
            | TuiEvent::TapPrevious
            | TuiEvent::TapNext
            | TuiEvent::MouseClick(..) => {
                let current = Some(app.current_route());
                NavigationBar::new(&mut tui.nav_bar, &app.catalog, current, &mut *on_navigate)
                    .style(tui.bar_style)
                    .handle_event(&event);
                // Apply right away so the next tap sees the new selection
                apply_pending(app, rx)
            }
        };
        if effect == Effect::Quit {
            return Flow::Quit;
        }
    }
    Flow::Continue
}

/// Feed queued navigation requests through the reducer.
fn apply_pending(app: &mut App, rx: &mpsc::Receiver<Action>) -> Effect {
    let mut combined = Effect::None;
    while let Ok(action) = rx.try_recv() {
        debug!("Event loop received: {:?}", action);
        match update(app, action) {
            Effect::Quit => return Effect::Quit,
            Effect::Redraw => combined = Effect::Redraw,
            Effect::None => {}
        }
    }
    combined
}
