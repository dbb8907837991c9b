//! # TextField Component
//!
//! Single-line labelled input used for the author name and the prompt.
//!
//! The value is a prop mirrored from the draft every frame via [`TextField::sync`];
//! the field only owns its cursor. Edits are reported as
//! [`FieldEvent::Changed`] with the new value and the parent dispatches them
//! to the reducer, so the draft stays the single source of truth.
//!
//! Text wider than the box scrolls horizontally to keep the cursor visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Changed(String),
}

pub struct TextField {
    /// Box title (Prop)
    pub label: &'static str,
    /// Greyed hint shown while empty (Prop)
    pub placeholder: &'static str,
    /// Right-aligned hint in the border (Prop)
    pub hint: Option<&'static str>,
    /// Whether keyboard focus is here (Prop)
    pub focused: bool,
    value: String,
    /// Byte offset into `value`, always on a char boundary
    cursor: usize,
}

/// Byte offset of the previous character boundary before `pos`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Byte offset of the next character boundary after `pos`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Start byte of the slice ending at `pos` that fits in `width` columns,
/// leaving one column for the cursor itself.
fn scroll_start(text: &str, pos: usize, width: u16) -> usize {
    let budget = (width as usize).saturating_sub(1);
    let mut used = 0;
    let mut start = pos;
    for (i, c) in text[..pos].char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > budget {
            break;
        }
        start = i;
    }
    start
}

fn display_width(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            hint: None,
            focused: false,
            value: String::new(),
            cursor: 0,
        }
    }

    pub fn with_hint(mut self, hint: &'static str) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Mirror the draft's value. An outside change (surprise prompt, form
    /// reset) moves the cursor to the end.
    pub fn sync(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.cursor = self.value.len();
        }
    }

    fn changed(&self) -> Option<FieldEvent> {
        Some(FieldEvent::Changed(self.value.clone()))
    }
}

impl Component for TextField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(self.label, Style::default().add_modifier(Modifier::BOLD)));
        if let Some(hint) = self.hint {
            block = block.title_top(Line::from(hint).right_aligned());
        }

        let inner_width = area.width.saturating_sub(2);
        let line = if self.value.is_empty() {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))
        } else {
            let start = scroll_start(&self.value, self.cursor, inner_width);
            Line::from(&self.value[start..])
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused && area.width > 2 && area.height > 2 {
            let start = scroll_start(&self.value, self.cursor, inner_width);
            let col = display_width(&self.value[start..self.cursor]) as u16;
            frame.set_cursor_position((area.x + 1 + col.min(inner_width.saturating_sub(1)), area.y + 1));
        }
    }
}

impl EventHandler for TextField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.value.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single line: newlines from the clipboard become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                self.value.insert_str(self.cursor, &flat);
                self.cursor += flat.len();
                self.changed()
            }
            TuiEvent::Backspace if self.cursor > 0 => {
                let prev = prev_char_boundary(&self.value, self.cursor);
                self.value.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete if self.cursor < self.value.len() => {
                let next = next_char_boundary(&self.value, self.cursor);
                self.value.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.value, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                if self.cursor < self.value.len() {
                    self.cursor = next_char_boundary(&self.value, self.cursor);
                }
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.value.len();
                None
            }
            _ => None,
        }
    }
}
