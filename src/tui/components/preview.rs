//! # Preview Component
//!
//! The photo panel. A terminal cannot show the JPEG itself, so the panel
//! reports what is there (size, how to save it) and shows a spinner while an
//! image request is in flight.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::photo;
use crate::tui::component::Component;

const SPINNER: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub struct Preview<'a> {
    pub photo: Option<&'a str>,
    pub prompt: &'a str,
    pub generating: bool,
    pub spinner_frame: usize,
}

fn human_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

impl Preview<'_> {
    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if self.generating {
            let spin = SPINNER[self.spinner_frame % SPINNER.len()];
            lines.push(Line::from(Span::styled(
                format!("{spin} Generating..."),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        match self.photo {
            Some(uri) => {
                let size = photo::approx_decoded_len(uri)
                    .map(human_size)
                    .unwrap_or_else(|| "unknown size".to_string());
                lines.push(Line::from(Span::styled(
                    format!("▣ JPEG ready ({size})"),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    format!("\"{}\"", self.prompt),
                    Style::default().add_modifier(Modifier::ITALIC),
                )));
                lines.push(Line::from(Span::styled(
                    "Ctrl+S saves it to disk",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            None if !self.generating => {
                lines.push(Line::from(Span::styled(
                    "No image yet",
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::from(Span::styled(
                    "Write a prompt and press Ctrl+G",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            None => {}
        }
        lines
    }
}

impl Component for Preview<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Photo");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = self.lines();
        let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(inner);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }
}
