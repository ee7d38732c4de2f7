//! # Actions
//!
//! Everything that can happen in Parley becomes an `Action`.
//! User highlights text in the composer? That's `Action::SelectionChanged`.
//! User hits "Apply Recommended Tones"? That's `Action::ApplyRecommendedTone`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` telling the adapter what to do next.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::selection::Selection;
use crate::core::state::App;
use crate::core::tone::InteractionType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Toggle the analysis panel (the sparkle button).
    TogglePanel,
    ClosePanel,
    /// Composer text changed (typing, paste, delete).
    ComposerEdited(String),
    /// Composer caret/selection moved. Offsets are chars, in either order.
    SelectionChanged { start: usize, end: usize },
    /// Splice `message` over `range`, or over the last non-empty selection.
    ApplyTone {
        message: String,
        range: Option<Selection>,
    },
    /// Apply the canned message of the current interaction type.
    ApplyRecommendedTone,
    SelectInteraction(InteractionType),
    SelectRole(InteractionType),
    DismissRoleWarning,
    RenameRecipient(String),
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Composer text was replaced; push `App::composer` and the pending
    /// caret back into the input widget.
    SyncComposer,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Quit => Effect::Quit,
        Action::TogglePanel => {
            app.panel_open = !app.panel_open;
            Effect::None
        }
        Action::ClosePanel => {
            app.panel_open = false;
            Effect::None
        }
        Action::ComposerEdited(text) => {
            app.composer = text;
            // "Applied ... tone" describes text the user has now changed
            app.status_message.clear();
            Effect::None
        }
        Action::SelectionChanged { start, end } => {
            app.selection.record(start, end);
            Effect::None
        }
        Action::ApplyTone { message, range } => apply(app, &message, range),
        Action::ApplyRecommendedTone => {
            let message = app.tone.interaction().config().message;
            apply(app, message, None)
        }
        Action::SelectInteraction(interaction) => {
            app.tone.select_interaction(interaction);
            Effect::None
        }
        Action::SelectRole(role) => {
            app.tone.select_role(role);
            Effect::None
        }
        Action::DismissRoleWarning => {
            app.tone.dismiss_warning();
            Effect::None
        }
        Action::RenameRecipient(draft) => {
            app.relationship.rename_recipient(&draft);
            Effect::None
        }
    }
}

fn apply(app: &mut App, message: &str, range: Option<Selection>) -> Effect {
    if app.apply_tone(message, range) {
        app.status_message = format!("Applied {} tone", app.tone.interaction().label());
        Effect::SyncComposer
    } else {
        Effect::None
    }
}
