//! # NavigationBar Component
//!
//! The bottom bar: one column per menu entry, icon on top, title beneath.
//!
//! ## Responsibilities
//!
//! - Draw the `BarView` from `core::bar` with ratatui widgets
//! - Animate each item's color toward its target
//! - Turn taps (clicks, digit keys, arrows) into `on_navigate(route)` calls
//!
//! It never navigates by itself. The host owns the back stack, decides what a
//! request means, and renders again with whatever route is current afterwards.
//!
//! ## Two Layers
//!
//! ```text
//! core::bar::view(catalog, current_route, style) ──► BarView   pure, no time, no I/O
//!                                                       │
//! NavigationBar::render ◄───────────────────────────────┘      ratatui adapter
//!        │
//!        └── NavigationBarState                                color transitions,
//!                                                              hit areas, icon store
//! ```
//!
//! Selection rules live with the pure view. This layer adds only presentation:
//! the animated color and where each column landed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::bar::{self, view};
use crate::core::menu::MenuCatalog;
use crate::core::route::Route;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::icons::IconSet;
use crate::tui::theme::Theme;

/// Rows the bar needs: top border, icon, title.
pub const BAR_HEIGHT: u16 = 3;

/// Bar style in terminal colors.
pub type BarStyle = bar::BarStyle<Color>;
pub type BarView = bar::BarView<Color>;
pub type ItemView = bar::ItemView<Color>;

impl Default for BarStyle {
    fn default() -> Self {
        Theme::default().bar_style()
    }
}

// ============================================================================
// Color Transitions
// ============================================================================

/// Time-based color animation toward a target.
///
/// Retargeting mid-flight starts a new transition from whatever color is on
/// screen right now. Nothing queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    started: Instant,
    duration: Duration,
}

impl ColorTransition {
    /// A transition that is already finished at `color`.
    pub fn settled(color: Color, now: Instant) -> Self {
        Self {
            from: color,
            to: color,
            started: now,
            duration: Duration::ZERO,
        }
    }

    pub fn target(&self) -> Color {
        self.to
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn color_at(&self, now: Instant) -> Color {
        lerp_color(self.from, self.to, self.progress(now))
    }

    pub fn is_running(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Point the transition at `to`. No-op if that is already the target.
    ///
    /// Only RGB to RGB animates. Any other pair settles on `to` at once.
    pub fn retarget(&mut self, to: Color, now: Instant, duration: Duration) {
        if to == self.to {
            return;
        }
        self.from = self.color_at(now);
        self.to = to;
        self.started = now;
        self.duration = match (self.from, to) {
            (Color::Rgb(..), Color::Rgb(..)) => duration,
            _ => Duration::ZERO,
        };
    }
}

/// Linear RGB interpolation. Anything that isn't RGB swaps instantly.
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
            lerp_channel(r1, r2, t),
            lerp_channel(g1, g2, t),
            lerp_channel(b1, b2, t),
        ),
        _ => to,
    }
}

fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

// ============================================================================
// Persistent State
// ============================================================================

/// Presentation state that outlives a single frame.
pub struct NavigationBarState {
    /// Length of a color transition. Zero swaps colors instantly.
    pub animation: Duration,
    icons: IconSet,
    transitions: HashMap<Route, ColorTransition>,
    /// Column areas from the last render, in catalog order.
    item_areas: Vec<Rect>,
}

impl NavigationBarState {
    pub fn new(animation: Duration) -> Self {
        Self::with_icons(animation, IconSet::default())
    }

    pub fn with_icons(animation: Duration, icons: IconSet) -> Self {
        Self {
            animation,
            icons,
            transitions: HashMap::new(),
            item_areas: Vec::new(),
        }
    }

    /// Bring transitions in line with `view` and return each item's color at `now`.
    ///
    /// Items seen for the first time start settled, so the first frame
    /// doesn't animate. Routes no longer in the view are forgotten.
    fn sync(&mut self, view: &BarView, now: Instant) -> Vec<Color> {
        self.transitions
            .retain(|route, _| view.items.iter().any(|item| item.route == *route));

        let duration = self.animation;
        view.items
            .iter()
            .map(|item| {
                let transition = self
                    .transitions
                    .entry(item.route)
                    .or_insert_with(|| ColorTransition::settled(item.target_color, now));
                transition.retarget(item.target_color, now, duration);
                transition.color_at(now)
            })
            .collect()
    }

    /// True while any item's color is still moving.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.transitions.values().any(|t| t.is_running(now))
    }

    /// Column index under a screen position, from the last render.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.item_areas.iter().position(|area| area.contains(position))
    }

    pub fn item_areas(&self) -> &[Rect] {
        &self.item_areas
    }
}

// ============================================================================
// Transient Wrapper
// ============================================================================

/// Bottom navigation bar, built fresh for each frame or event.
///
/// # Props
///
/// - `current_route`: active destination, `None` for no selection
/// - `catalog`: entries to show, in order
/// - `style`: colors and corner radius (defaults from the theme)
/// - `now`: clock reading used for color transitions
/// - `on_navigate`: called with the route of a tapped, enabled entry
///
/// # Example
///
/// ```rust,ignore
/// let mut on_navigate = |route| { let _ = tx.send(Action::Navigate(route)); };
/// NavigationBar::new(&mut tui.nav_bar, &app.catalog, Some(app.current_route()), &mut on_navigate)
///     .style(style)
///     .render(frame, bar_area);
/// ```
pub struct NavigationBar<'a> {
    pub current_route: Option<Route>,
    pub catalog: &'a MenuCatalog,
    pub style: BarStyle,
    pub now: Instant,
    on_navigate: &'a mut dyn FnMut(Route),
    state: &'a mut NavigationBarState,
}

impl<'a> NavigationBar<'a> {
    pub fn new(
        state: &'a mut NavigationBarState,
        catalog: &'a MenuCatalog,
        current_route: Option<Route>,
        on_navigate: &'a mut dyn FnMut(Route),
    ) -> Self {
        Self {
            current_route,
            catalog,
            style: BarStyle::default(),
            now: Instant::now(),
            on_navigate,
            state,
        }
    }

    pub fn style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn at(mut self, now: Instant) -> Self {
        self.now = now;
        self
    }

    pub fn view(&self) -> BarView {
        view(self.catalog, self.current_route, &self.style)
    }

    /// Tap column `index`. See [`BarView::tap`].
    pub fn tap(&mut self, index: usize) -> bool {
        let view = self.view();
        let on_navigate = &mut *self.on_navigate;
        view.tap(index, |route| on_navigate(route))
    }
}

impl Component for NavigationBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let view = self.view();
        let colors = self.state.sync(&view, self.now);

        let border_type = if view.corner_radius > 0 {
            BorderType::Rounded
        } else {
            BorderType::Plain
        };
        let block = Block::new()
            .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
            .border_type(border_type)
            .style(Style::new().bg(view.container));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if view.items.is_empty() {
            self.state.item_areas.clear();
            return;
        }

        let columns = Layout::horizontal(vec![Constraint::Fill(1); view.items.len()]).split(inner);
        self.state.item_areas = columns.to_vec();

        let icons = &self.state.icons;
        for ((item, color), column) in view.items.iter().zip(colors).zip(columns.iter()) {
            render_item(frame, *column, item, color, icons);
        }
    }
}

impl EventHandler for NavigationBar<'_> {
    /// The route handed to `on_navigate`, if a tap went through.
    type Event = Route;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Route> {
        let view = self.view();
        let index = match event {
            TuiEvent::TapIndex(index) => Some(*index),
            TuiEvent::TapPrevious => view.neighbor(false),
            TuiEvent::TapNext => view.neighbor(true),
            TuiEvent::MouseClick(column, row) => self.state.hit_test(*column, *row),
            _ => None,
        }?;
        let route = view.items.get(index)?.route;
        let on_navigate = &mut *self.on_navigate;
        view.tap(index, |route| on_navigate(route)).then_some(route)
    }
}

fn render_item(frame: &mut Frame, area: Rect, item: &ItemView, color: Color, icons: &IconSet) {
    let style = Style::new().fg(color);
    let lines = vec![
        Line::styled(icons.glyph(&item.icon), style),
        Line::styled(truncate_to_width(&item.title, area.width as usize), style),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Cut `text` to `max_width` terminal cells, ending in `…` when shortened.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
