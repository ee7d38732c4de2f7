//! Traits shared by every widget in `components/`.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Transient components (`MessageList`, `AnalysisPanel`) are built each frame
/// around a `&mut` borrow of their persistent state plus read-only props from
/// `App`. `render` takes `&mut self` because drawing may update that state:
/// the message list caches bubble heights and pins its scroll offset, the
/// input box moves its horizontal scroll to keep the caret visible.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Something that consumes `TuiEvent`s while it has focus.
///
/// Implementors handle low-level keys themselves and only surface what the
/// event loop needs to act on (an edit to mirror into `App`, a tone pick to
/// dispatch). `None` means the event was absorbed or ignored.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
