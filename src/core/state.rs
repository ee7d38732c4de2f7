//! # Application State
//!
//! Core business state for Parley, i.e. the root container. Domain logic
//! only, no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── contact: Contact                   // header name + presence
//! ├── messages: Vec<ChatMessage>         // fixed conversation
//! ├── panel_open: bool                   // analysis panel visibility
//! ├── composer: String                   // current composer text
//! ├── selection: SelectionTracker        // current + last non-empty range
//! ├── pending_cursor: Option<usize>      // caret request, consumed once
//! ├── tone: ToneSelection                // interaction/role state machine
//! ├── relationship: Relationship         // recipient/sender labels
//! └── status_message: String             // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use log::debug;

use crate::core::config::ResolvedConfig;
use crate::core::conversation::{ChatMessage, Contact, seed_messages};
use crate::core::panel::{Relationship, ToneSelection};
use crate::core::selection::{Selection, SelectionTracker, splice};

pub struct App {
    pub contact: Contact,
    pub messages: Vec<ChatMessage>,
    pub panel_open: bool,
    pub composer: String,
    pub selection: SelectionTracker,
    /// Caret position the composer must apply on its next sync.
    pending_cursor: Option<usize>,
    pub tone: ToneSelection,
    pub relationship: Relationship,
    pub status_message: String,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(&ResolvedConfig::default())
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            contact: Contact::new(config.contact_name.clone()),
            messages: seed_messages(),
            panel_open: config.panel_open,
            composer: String::new(),
            selection: SelectionTracker::new(),
            pending_cursor: None,
            tone: ToneSelection::new(config.interaction),
            relationship: Relationship {
                recipient_label: config.recipient_label.clone(),
                sender_label: config.sender_label.clone(),
            },
            status_message: String::new(),
        }
    }

    /// Splice `message` into the composer.
    ///
    /// Target range: `range` if non-empty, else the last non-empty selection.
    /// Does nothing (and returns `false`) when the composer is blank or no
    /// range is available.
    pub fn apply_tone(&mut self, message: &str, range: Option<Selection>) -> bool {
        if self.composer.trim().is_empty() {
            debug!("Apply tone skipped: composer is empty");
            return false;
        }

        let target = range
            .filter(|r| !r.is_empty())
            .or_else(|| self.selection.last_non_empty());
        let Some(target) = target else {
            debug!("Apply tone skipped: no selection to replace");
            return false;
        };

        let (text, caret) = splice(&self.composer, target, message);
        debug!(
            "Applied tone over [{}, {}), caret -> {}",
            target.start, target.end, caret
        );
        self.composer = text;
        self.pending_cursor = Some(caret);
        true
    }

    /// Take the pending caret request. Returns `Some` at most once per request.
    pub fn take_pending_cursor(&mut self) -> Option<usize> {
        self.pending_cursor.take()
    }

    pub fn has_pending_cursor(&self) -> bool {
        self.pending_cursor.is_some()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
