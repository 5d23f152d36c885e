use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::route::Route;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::navigation_bar::BAR_HEIGHT;
use crate::tui::components::{NavigationBar, ScreenPlaceholder, TitleBar};

/// Split the frame into title line, screen, and bottom bar.
pub fn frame_layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Min(0), Length(BAR_HEIGHT)]).areas(area)
}

pub fn draw_ui(
    frame: &mut Frame,
    app: &App,
    tui: &mut TuiState,
    now: Instant,
    on_navigate: &mut dyn FnMut(Route),
) {
    let [title_area, main_area, bar_area] = frame_layout(frame.area());

    TitleBar::new(
        app.current_title(),
        app.status_message.clone(),
        app.back_stack.depth(),
    )
    .render(frame, title_area);

    ScreenPlaceholder::new(app.current_route(), app.current_title(), app.back_stack.depth())
        .render(frame, main_area);

    NavigationBar::new(
        &mut tui.nav_bar,
        &app.catalog,
        Some(app.current_route()),
        on_navigate,
    )
    .style(tui.bar_style)
    .at(now)
    .render(frame, bar_area);
}
