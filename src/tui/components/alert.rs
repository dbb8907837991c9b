//! # Alert Component
//!
//! Modal box for a [`Notice`]. While an alert is open it swallows all input
//! except the keys that dismiss it, like a browser `alert()`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};

use crate::core::notify::{Level, Notice};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    Dismiss,
}

pub struct Alert<'a> {
    pub notice: &'a Notice,
}

impl Alert<'_> {
    fn color(&self) -> Color {
        match self.notice.level {
            Level::Info => Color::Green,
            Level::Error => Color::Red,
        }
    }

    /// Height needed for the wrapped message, the gap, the footer and borders.
    fn height_for(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(4).max(1) as usize;
        let lines = textwrap::wrap(&self.notice.message, inner).len().max(1) as u16;
        lines + 4
    }
}

/// Centered rect of the given size, clamped to `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

impl Component for Alert<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = MAX_WIDTH.min(area.width);
        let rect = centered(area, width, self.height_for(width));
        let color = self.color();

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", self.notice.title()),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Enter / Esc to dismiss ").centered());

        let body = Paragraph::new(vec![
            Line::from(self.notice.message.as_str()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block.padding(ratatui::widgets::Padding::new(1, 1, 1, 0)));

        frame.render_widget(Clear, rect);
        frame.render_widget(body, rect);
    }
}

/// Stateless: dismissal is decided from the event alone.
pub struct AlertKeys;

impl EventHandler for AlertKeys {
    type Event = AlertEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar(' ') => {
                Some(AlertEvent::Dismiss)
            }
            _ => None,
        }
    }
}
