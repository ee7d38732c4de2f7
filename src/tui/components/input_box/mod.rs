//! # InputBox Component
//!
//! The single-line message composer.
//!
//! ## Responsibilities
//!
//! - Capture text input (typing and bracketed paste)
//! - Handle editing (backspace, delete, caret movement)
//! - Handle shift-selection and select-all
//! - Report every caret/selection change upward as a `Selection`
//! - Accept an external text replacement plus caret request
//!
//! ## State Management
//!
//! The buffer is internal state and is mirrored into `App::composer` through
//! `InputEvent::ContentChanged`. The only way text flows back in is
//! [`InputBox::set_content`], called when a tone suggestion was applied.

mod cursor;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::core::selection::{Selection, char_to_byte};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use cursor::CursorState;

/// Border (2) + padding (2) consumed horizontally by the bordered block
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Offset from area edge to the first text column (border + padding)
const TEXT_OFFSET_X: u16 = 2;
/// Borders plus one line of text
pub const INPUT_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "Type a message...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Text changed; carries the selection after the edit
    ContentChanged(Selection),
    /// Only the caret or selection moved
    SelectionChanged(Selection),
}

/// Single-line text input with selection.
///
/// # Props
///
/// - `focused`: whether keyboard input goes here (dims the box otherwise)
///
/// # State
///
/// - `buffer`: current text
/// - `cursor`: caret, selection anchor and horizontal scroll
pub struct InputBox {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Keyboard focus (Prop)
    pub focused: bool,
    cursor: CursorState,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: CursorState::new(),
        }
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Current selection in char offsets.
    pub fn selection(&self) -> Selection {
        self.cursor.selection()
    }

    /// Caret position in char offsets.
    pub fn caret(&self) -> usize {
        self.cursor.pos
    }

    /// Replace the whole buffer and put a collapsed caret at `caret`.
    ///
    /// Returns the resulting selection so the caller can report it.
    pub fn set_content(&mut self, text: &str, caret: usize) -> Selection {
        self.buffer = text.to_string();
        self.cursor.set(caret.min(self.char_len()));
        self.selection()
    }

    /// Remove the selected chars, leaving the caret at the range start.
    fn delete_selection(&mut self) -> bool {
        let sel = self.cursor.selection();
        if sel.is_empty() {
            return false;
        }
        let start = char_to_byte(&self.buffer, sel.start);
        let end = char_to_byte(&self.buffer, sel.end);
        self.buffer.drain(start..end);
        self.cursor.set(sel.start);
        true
    }

    /// Insert text at the caret, replacing any selection.
    fn insert_str(&mut self, text: &str) {
        self.delete_selection();
        let at = char_to_byte(&self.buffer, self.cursor.pos);
        self.buffer.insert_str(at, text);
        self.cursor.set(self.cursor.pos + text.chars().count());
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::ContentChanged(self.selection()))
    }

    fn moved(&mut self, target: usize, extend: bool) -> Option<InputEvent> {
        let len = self.char_len();
        self.cursor
            .move_to(target, len, extend)
            .then(|| InputEvent::SelectionChanged(self.selection()))
    }

    /// Build the visible line, highlighting the selected span.
    fn visible_line(&self) -> Line<'_> {
        let base = if self.focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        let highlight = Style::default()
            .fg(Color::Black)
            .bg(Color::Magenta)
            .add_modifier(Modifier::BOLD);

        let sel = self.cursor.selection();
        let scroll = self.cursor.scroll;
        let visible = |from: usize, to: usize| -> String {
            let from = from.max(scroll);
            self.buffer
                .chars()
                .skip(from)
                .take(to.saturating_sub(from))
                .collect()
        };

        let len = self.char_len();
        Line::from(vec![
            Span::styled(visible(scroll, sel.start), base),
            Span::styled(visible(sel.start, sel.end), highlight),
            Span::styled(visible(sel.end, len), base),
        ])
    }
}

impl Component for InputBox {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        self.cursor.update_scroll(&self.buffer, inner_width);

        let border_style = if self.focused {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = match self.selection() {
            sel if !sel.is_empty() => format!("Message ({} selected)", sel.len()),
            _ => "Message".to_string(),
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title)
            .padding(Padding::horizontal(1));

        let content = if self.buffer.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            self.visible_line()
        };

        frame.render_widget(Paragraph::new(content).block(block), area);

        if self.focused {
            let col = self.cursor.column(&self.buffer).min(inner_width);
            frame.set_cursor_position((area.x + TEXT_OFFSET_X + col, area.y + 1));
        }
    }
}

impl EventHandler for InputBox {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut tmp = [0u8; 4];
                self.insert_str(c.encode_utf8(&mut tmp));
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line input: flatten line breaks
                let flat: String = text
                    .chars()
                    .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
                    .collect();
                if flat.is_empty() && !self.cursor.has_selection() {
                    return None;
                }
                self.insert_str(&flat);
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.delete_selection() {
                    return self.changed();
                }
                if self.cursor.pos == 0 {
                    return None;
                }
                let start = char_to_byte(&self.buffer, self.cursor.pos - 1);
                let end = char_to_byte(&self.buffer, self.cursor.pos);
                self.buffer.drain(start..end);
                self.cursor.set(self.cursor.pos - 1);
                self.changed()
            }
            TuiEvent::Delete => {
                if self.delete_selection() {
                    return self.changed();
                }
                if self.cursor.pos >= self.char_len() {
                    return None;
                }
                let start = char_to_byte(&self.buffer, self.cursor.pos);
                let end = char_to_byte(&self.buffer, self.cursor.pos + 1);
                self.buffer.drain(start..end);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                // Collapsing a selection lands on its left edge
                let target = if self.cursor.has_selection() {
                    self.selection().start
                } else {
                    self.cursor.pos.saturating_sub(1)
                };
                self.moved(target, false)
            }
            TuiEvent::CursorRight => {
                let target = if self.cursor.has_selection() {
                    self.selection().end
                } else {
                    self.cursor.pos + 1
                };
                self.moved(target, false)
            }
            TuiEvent::CursorHome => self.moved(0, false),
            TuiEvent::CursorEnd => self.moved(self.char_len(), false),
            TuiEvent::SelectLeft => self.moved(self.cursor.pos.saturating_sub(1), true),
            TuiEvent::SelectRight => self.moved(self.cursor.pos + 1, true),
            TuiEvent::SelectHome => self.moved(0, true),
            TuiEvent::SelectEnd => self.moved(self.char_len(), true),
            TuiEvent::SelectAll => {
                let len = self.char_len();
                self.cursor
                    .select_all(len)
                    .then(|| InputEvent::SelectionChanged(self.selection()))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn typed(text: &str) -> InputBox {
        let mut input = InputBox::new();
        for c in text.chars() {
            input.handle_event(&TuiEvent::InputChar(c));
        }
        input
    }

    #[test]
    fn test_input_box_new() {
        let input = InputBox::new();
        assert!(input.buffer.is_empty());
        assert_eq!(input.selection(), Selection::caret(0));
    }

    #[test]
    fn test_handle_input() {
        let mut input = InputBox::new();

        let res = input.handle_event(&TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged(Selection::caret(1))));
        assert_eq!(input.buffer, "a");

        input.handle_event(&TuiEvent::InputChar('b'));
        assert_eq!(input.buffer, "ab");

        let res = input.handle_event(&TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged(Selection::caret(1))));
        assert_eq!(input.buffer, "a");
    }

    #[test]
    fn backspace_at_start_emits_nothing() {
        let mut input = InputBox::new();
        assert_eq!(input.handle_event(&TuiEvent::Backspace), None);
    }

    #[test]
    fn shift_selection_reports_range() {
        let mut input = typed("Yeah, I'll try.");
        input.handle_event(&TuiEvent::CursorHome);

        let mut last = None;
        for _ in 0..4 {
            last = input.handle_event(&TuiEvent::SelectRight);
        }
        assert_eq!(last, Some(InputEvent::SelectionChanged(Selection::new(0, 4))));
    }

    #[test]
    fn typing_replaces_selection() {
        let mut input = typed("hello world");
        input.handle_event(&TuiEvent::SelectHome);
        let res = input.handle_event(&TuiEvent::InputChar('X'));
        assert_eq!(input.buffer, "X");
        assert_eq!(res, Some(InputEvent::ContentChanged(Selection::caret(1))));
    }

    #[test]
    fn backspace_deletes_selection() {
        let mut input = typed("hello world");
        input.handle_event(&TuiEvent::SelectLeft);
        input.handle_event(&TuiEvent::SelectLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "hello wor");
        assert_eq!(input.caret(), 9);
    }

    #[test]
    fn delete_removes_char_after_caret() {
        let mut input = typed("abc");
        input.handle_event(&TuiEvent::CursorHome);
        input.handle_event(&TuiEvent::Delete);
        assert_eq!(input.buffer, "bc");
        assert_eq!(input.handle_event(&TuiEvent::CursorEnd), Some(InputEvent::SelectionChanged(Selection::caret(2))));
        assert_eq!(input.handle_event(&TuiEvent::Delete), None);
    }

    #[test]
    fn left_collapses_to_selection_start() {
        let mut input = typed("abcdef");
        input.handle_event(&TuiEvent::SelectAll);
        let res = input.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(res, Some(InputEvent::SelectionChanged(Selection::caret(0))));
    }

    #[test]
    fn select_all_selects_everything() {
        let mut input = typed("héllo");
        let res = input.handle_event(&TuiEvent::SelectAll);
        assert_eq!(res, Some(InputEvent::SelectionChanged(Selection::new(0, 5))));
    }

    #[test]
    fn multibyte_editing_uses_char_offsets() {
        let mut input = typed("a😊b");
        input.handle_event(&TuiEvent::CursorLeft);
        input.handle_event(&TuiEvent::Backspace);
        assert_eq!(input.buffer, "ab");
        assert_eq!(input.caret(), 1);
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut input = InputBox::new();
        input.handle_event(&TuiEvent::Paste("one\ntwo".to_string()));
        assert_eq!(input.buffer, "one two");
        assert_eq!(input.caret(), 7);
    }

    #[test]
    fn set_content_places_caret_and_clears_selection() {
        let mut input = typed("old text");
        input.handle_event(&TuiEvent::SelectAll);
        let sel = input.set_content("new message", 3);
        assert_eq!(input.buffer, "new message");
        assert_eq!(sel, Selection::caret(3));

        let sel = input.set_content("tiny", 40);
        assert_eq!(sel, Selection::caret(4));
    }

    #[test]
    fn enter_is_not_handled() {
        let mut input = typed("hi");
        assert_eq!(input.handle_event(&TuiEvent::Submit), None);
        assert_eq!(input.buffer, "hi");
    }

    #[test]
    fn test_render_shows_placeholder_and_selection_count() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut input = InputBox::new();

        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Type a message..."));

        let mut input = typed("hello");
        input.handle_event(&TuiEvent::SelectAll);
        terminal.draw(|f| input.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Message (5 selected)"));
        assert!(text.contains("hello"));
    }
}
