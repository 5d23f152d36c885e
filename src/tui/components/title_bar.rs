//! # TitleBar Component
//!
//! Top status line showing where the user is.
//!
//! ## Responsibilities
//!
//! - Display the current screen's title
//! - Display the last status message (e.g., "Opened My Page")
//! - Show a "‹ Back" hint when the back stack has somewhere to go
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(app.current_title(), app.status_message.clone(), app.back_stack.depth());
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Can go back, with status**: `"Navbar | My Page | Opened My Page | ‹ Back"`
//! 2. **Status only**: `"Navbar | Home | Welcome!"`
//! 3. **Default**: `"Navbar | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Title of the current screen
    pub screen_title: String,
    /// Status message (e.g., "Opened Home")
    pub status_message: String,
    /// Back stack depth; > 1 means Backspace goes somewhere
    pub depth: usize,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String, depth: usize) -> Self {
        Self {
            screen_title,
            status_message,
            depth,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Navbar | {}", self.screen_title);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.depth > 1 {
            text.push_str(" | ‹ Back");
        }
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
