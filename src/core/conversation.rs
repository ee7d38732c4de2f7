//! # Conversation
//!
//! The fixed conversation shown in the message list. Seeded once at startup
//! and never mutated.

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub sender: Sender,
    /// Display string, e.g. "10:32 AM".
    pub timestamp: String,
}

impl ChatMessage {
    fn seed(id: u32, text: &str, sender: Sender, timestamp: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            sender,
            timestamp: timestamp.to_string(),
        }
    }
}

/// The person on the other side of the conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub presence: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            presence: "Active now".to_string(),
        }
    }

    /// First letter of up to two words, uppercased ("Jordan Davis" → "JD").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

pub const DEFAULT_CONTACT_NAME: &str = "Jordan Davis";

/// The six-message exchange the mockup always opens with.
pub fn seed_messages() -> Vec<ChatMessage> {
    vec![
        ChatMessage::seed(
            1,
            "Hey! Did you get a chance to review the proposal I sent over?",
            Sender::Other,
            "10:32 AM",
        ),
        ChatMessage::seed(
            2,
            "Not yet, been swamped with other stuff. Will try to look at it later.",
            Sender::User,
            "10:45 AM",
        ),
        ChatMessage::seed(
            3,
            "No worries! Just wanted to check in. It would be great if you could give me feedback by end of day though.",
            Sender::Other,
            "10:47 AM",
        ),
        ChatMessage::seed(4, "Yeah, I'll try.", Sender::User, "10:48 AM"),
        ChatMessage::seed(
            5,
            "Thanks! I really appreciate it. Let me know if you have any questions.",
            Sender::Other,
            "10:49 AM",
        ),
        ChatMessage::seed(6, "Sure thing.", Sender::User, "10:50 AM"),
    ]
}
