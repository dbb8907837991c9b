//! # ActionBar Component
//!
//! The two form buttons. Each button shows its busy label while its request
//! is in flight and is drawn dimmed, since the reducer ignores it then.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub struct ActionBar {
    pub generating: bool,
    pub submitting: bool,
    pub generate_focused: bool,
    pub share_focused: bool,
}

impl ActionBar {
    pub fn generate_label(&self) -> &'static str {
        if self.generating { "Generating..." } else { "Generate" }
    }

    pub fn share_label(&self) -> &'static str {
        if self.submitting { "Sharing..." } else { "Share with the Community" }
    }
}

fn button(label: &str, color: Color, focused: bool, busy: bool) -> Paragraph<'_> {
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if busy {
        style = style.add_modifier(Modifier::DIM);
    }
    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(color).add_modifier(Modifier::DIM)
    };
    let border_type = if focused { BorderType::Thick } else { BorderType::Rounded };
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().border_type(border_type).border_style(border))
}

impl Component for ActionBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [generate_area, share_area] =
            Layout::horizontal([Constraint::Length(20), Constraint::Length(30)])
                .spacing(2)
                .areas(area);

        frame.render_widget(
            button(self.generate_label(), Color::Green, self.generate_focused, self.generating),
            generate_area,
        );
        frame.render_widget(
            button(self.share_label(), Color::LightBlue, self.share_focused, self.submitting),
            share_area,
        );
    }
}
