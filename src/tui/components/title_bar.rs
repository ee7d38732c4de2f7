//! # TitleBar Component
//!
//! Conversation header: contact avatar (initials), name, presence, and a
//! hint for the analysis panel toggle.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives all data as props and has
//! no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&app.contact, app.panel_open);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Props-in-Struct Pattern
//!
//! Props live in struct fields rather than render() parameters so the
//! Component trait keeps a fixed render() signature.

use crate::core::conversation::Contact;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Header height: one text row plus the bottom rule.
pub const TITLE_BAR_HEIGHT: u16 = 2;

/// Conversation header component.
pub struct TitleBar<'a> {
    pub contact: &'a Contact,
    /// Whether the analysis panel is currently shown
    pub panel_open: bool,
}

impl<'a> TitleBar<'a> {
    pub fn new(contact: &'a Contact, panel_open: bool) -> Self {
        Self {
            contact,
            panel_open,
        }
    }

    fn panel_hint(&self) -> &'static str {
        if self.panel_open {
            "^P Hide analysis"
        } else {
            "^P ✦ Analyze tone"
        }
    }
}

impl<'a> Component for TitleBar<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = Line::from(vec![
            Span::styled(
                format!(" {} ", self.contact.initials()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                self.contact.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled("●", Style::default().fg(Color::Green)),
            Span::styled(
                format!(" {}", self.contact.presence),
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        frame.render_widget(Paragraph::new(left), inner);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                self.panel_hint(),
                Style::default().fg(Color::Cyan),
            )))
            .right_aligned(),
            inner,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(contact: &Contact, panel_open: bool) -> String {
        let backend = TestBackend::new(80, TITLE_BAR_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TitleBar::new(contact, panel_open).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn shows_contact_and_presence() {
        let contact = Contact::new("Jordan Davis");
        let text = render_text(&contact, true);

        assert!(text.contains("JD"));
        assert!(text.contains("Jordan Davis"));
        assert!(text.contains("Active now"));
    }

    #[test]
    fn hint_tracks_panel_visibility() {
        let contact = Contact::new("Jordan Davis");
        assert!(render_text(&contact, true).contains("Hide analysis"));
        assert!(render_text(&contact, false).contains("Analyze tone"));
    }
}
