//! # TitleBar Component
//!
//! Top status bar: app name, current route, the service being talked to and
//! the latest status message.
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar {
//!     route: app.route,
//!     base_url: config.base_url.clone(),
//!     status_message: app.status_message.clone(),
//! };
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! 1. **Status message**: `"promptshare /create-post @ https://host | Generating..."`
//! 2. **Default**: `"promptshare /create-post @ https://host"`

use crate::core::state::Route;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub route: Route,
    /// Service base URL (e.g., "https://dalle-arbb.onrender.com")
    pub base_url: String,
    /// Status message (e.g., "Generating...", "Image ready")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(route: Route, base_url: String, status_message: String) -> Self {
        Self {
            route,
            base_url,
            status_message,
        }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = vec![
            Span::styled(
                "promptshare ",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{} @ {}", self.route.path(), self.base_url)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status_message),
                Style::default().fg(Color::Yellow),
            ));
        }
        Line::from(spans)
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
