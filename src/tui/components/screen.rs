//! # Screen Placeholder
//!
//! Stands in for a destination's content. Screens themselves are out of scope;
//! this shows which route is active and how deep the back stack is, so the
//! bar's effect is visible.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::route::Route;
use crate::tui::component::Component;

pub struct ScreenPlaceholder {
    pub route: Route,
    pub title: String,
    pub depth: usize,
}

impl ScreenPlaceholder {
    pub fn new(route: Route, title: String, depth: usize) -> Self {
        Self { route, title, depth }
    }
}

impl Component for ScreenPlaceholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("route: {}  ·  depth: {}", self.route, self.depth),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "1-9 / ←→ / Tab / click: switch  ·  Backspace: back  ·  q: quit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [center] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_row;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_placeholder_shows_route_and_depth() {
        let mut terminal = Terminal::new(TestBackend::new(70, 9)).unwrap();
        let mut screen = ScreenPlaceholder::new(Route::MyPage, "My Page".to_string(), 3);
        terminal.draw(|f| screen.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..9).map(|y| buffer_row(buffer, y)).collect();
        assert!(rows[3].contains("My Page"));
        assert!(rows[4].contains("route: my-page"));
        assert!(rows[4].contains("depth: 3"));
    }
}
