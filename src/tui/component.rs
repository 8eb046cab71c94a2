use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// A piece of the screen that draws itself into a `Rect`.
///
/// Props live in struct fields; `render` takes `&mut self` so a component
/// can refresh caches (wrapped text, scroll bounds) as it draws.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal events.
pub trait EventHandler {
    /// What the component reports back to the event loop.
    type Event;

    /// Returns `Some` when the event changed something the caller must act on.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
