//! # Home Component
//!
//! The application root. Lists the posts shared during this run, newest
//! first, and tells the user how to start another.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Paragraph};

use crate::core::state::SharedPost;
use crate::tui::component::Component;

pub struct Home<'a> {
    pub shared_posts: &'a [SharedPost],
}

fn post_item(post: &SharedPost) -> ListItem<'static> {
    let author = if post.name.is_empty() {
        "anonymous".to_string()
    } else {
        post.name.clone()
    };
    ListItem::new(Line::from(vec![
        Span::styled(
            post.shared_at.format("%H:%M ").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(author, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(": "),
        Span::raw(post.prompt.clone()),
    ]))
}

impl Component for Home<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                "The Community Showcase",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Posts you shared in this session",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(header, header_area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Shared ({})", self.shared_posts.len()));

        if self.shared_posts.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "Nothing shared yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            frame.render_widget(empty, list_area);
        } else {
            let items: Vec<ListItem> = self.shared_posts.iter().rev().map(post_item).collect();
            frame.render_widget(List::new(items).block(block), list_area);
        }

        frame.render_widget(
            Span::styled("n: create a post   q / Esc: quit", Style::default().fg(Color::DarkGray)),
            help_area,
        );
    }
}
