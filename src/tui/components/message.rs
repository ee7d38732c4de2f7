use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::conversation::{ChatMessage, Sender};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Bubbles never take more than this share of the list width.
const MAX_WIDTH_PERCENT: u16 = 70;

/// A stateless chat bubble.
///
/// # Design
///
/// `Message` is a **transient component**: it's created fresh each frame with
/// the data it needs to render. User bubbles are magenta and right-aligned by
/// the parent list; the other party's bubbles are blue and left-aligned.
///
/// # Size Calculation
///
/// [`bubble_width`](Self::bubble_width) and
/// [`calculate_height`](Self::calculate_height) predict the rendered size using
/// `textwrap` with options that match Ratatui's `Paragraph` wrapping, so the
/// parent can lay out the `ScrollView` canvas without rendering first.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub message: &'a ChatMessage,
    /// Title for the other party's bubbles
    pub contact_name: &'a str,
}

impl<'a> Message<'a> {
    pub fn new(message: &'a ChatMessage, contact_name: &'a str) -> Self {
        Self {
            message,
            contact_name,
        }
    }

    fn sender_label(&self) -> &'a str {
        match self.message.sender {
            Sender::User => "You",
            Sender::Other => self.contact_name,
        }
    }

    /// Width of the bubble inside a list `list_width` columns wide.
    pub fn bubble_width(&self, list_width: u16) -> u16 {
        let max = ((list_width as u32 * MAX_WIDTH_PERCENT as u32 / 100) as u16).max(HORIZONTAL_OVERHEAD + 1);
        let natural = self
            .message
            .text
            .trim()
            .width()
            .max(self.sender_label().width())
            .max(self.message.timestamp.width()) as u16
            + HORIZONTAL_OVERHEAD;
        natural.min(max).min(list_width)
    }

    /// Calculate the height required for this message given a bubble width.
    ///
    /// The wrapping options must match the `Ratatui` default for `Paragraph`
    /// to ensure 1:1 mapping between calculated and actual height.
    pub fn calculate_height(message: &ChatMessage, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding
            return 1;
        }

        let content = message.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        (lines.len() as u16).max(1) + VERTICAL_OVERHEAD
    }
}

fn sender_style(sender: Sender) -> Style {
    match sender {
        Sender::User => Style::default().fg(Color::Magenta),
        Sender::Other => Style::default().fg(Color::Blue),
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = sender_style(self.message.sender);
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(self.sender_label())
            .title_bottom(Line::from(self.message.timestamp.as_str()).right_aligned())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.message.text.trim())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_message(sender: Sender, text: &str) -> ChatMessage {
        ChatMessage {
            id: 1,
            text: text.to_string(),
            sender,
            timestamp: "10:32 AM".to_string(),
        }
    }

    #[test]
    fn calculate_height_empty_content_returns_border_height() {
        let msg = make_message(Sender::User, "   ");
        assert_eq!(Message::calculate_height(&msg, 40), VERTICAL_OVERHEAD);
    }

    #[test]
    fn calculate_height_zero_width_returns_minimum() {
        let msg = make_message(Sender::User, "Hello world");
        assert_eq!(Message::calculate_height(&msg, HORIZONTAL_OVERHEAD), 1);
    }

    #[test]
    fn calculate_height_wraps_at_width_boundary() {
        let msg = make_message(Sender::Other, "Hello world");
        // content width 5 → "Hello" | "world"
        assert_eq!(Message::calculate_height(&msg, 9), 2 + VERTICAL_OVERHEAD);
    }

    #[test]
    fn short_message_gets_natural_width() {
        let msg = make_message(Sender::User, "Sure thing.");
        let bubble = Message::new(&msg, "Jordan Davis");
        // "Sure thing." is 11 wide, wider than "You" and the timestamp
        assert_eq!(bubble.bubble_width(100), 11 + HORIZONTAL_OVERHEAD);
    }

    #[test]
    fn long_message_is_capped() {
        let msg = make_message(Sender::Other, &"word ".repeat(40));
        let bubble = Message::new(&msg, "Jordan Davis");
        assert_eq!(bubble.bubble_width(100), 70);
    }

    #[test]
    fn title_uses_contact_name_for_other() {
        let msg = make_message(Sender::Other, "Hey!");
        let backend = TestBackend::new(30, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                f.render_widget(Message::new(&msg, "Jordan Davis"), f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Jordan Davis"));
        assert!(text.contains("Hey!"));
        assert!(text.contains("10:32 AM"));
    }

    #[test]
    fn styles_differ_by_sender() {
        assert_eq!(sender_style(Sender::User).fg, Some(Color::Magenta));
        assert_eq!(sender_style(Sender::Other).fg, Some(Color::Blue));
    }
}
