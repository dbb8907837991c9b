use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// A reusable piece of the form screen.
///
/// Props arrive as struct fields, internal presentation state (cursor,
/// scroll) lives behind `&mut self`, and `render` draws into the given area.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns key events into something the form cares about.
pub trait EventHandler {
    type Event;

    /// `None` when the event means nothing to this component.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
