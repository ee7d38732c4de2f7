//! # Tone Panel State
//!
//! The interaction/role selection state machine and the editable
//! relationship labels. Section switching, list highlight and the label
//! draft live in the TUI; this module only holds what the rest of the app
//! reads.
//!
//! ```text
//!   select_interaction(X) ──▶ interaction = X, role = X, dismissal cleared
//!   select_role(Y)        ──▶ role = Y (warning shows if Y != interaction
//!                             and (interaction, Y) was not dismissed)
//!   dismiss_warning()     ──▶ add (interaction, role) to the dismissed set
//! ```

use log::debug;
use std::collections::HashSet;

use crate::core::tone::InteractionType;

/// Interaction type, role and mismatch-warning dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneSelection {
    interaction: InteractionType,
    role: InteractionType,
    /// Every (interaction, role) pair the warning was dismissed for since
    /// the interaction type was last chosen.
    dismissed: HashSet<(InteractionType, InteractionType)>,
}

impl Default for ToneSelection {
    fn default() -> Self {
        Self::new(InteractionType::default())
    }
}

impl ToneSelection {
    pub fn new(interaction: InteractionType) -> Self {
        Self {
            interaction,
            role: interaction,
            dismissed: HashSet::new(),
        }
    }

    pub fn interaction(&self) -> InteractionType {
        self.interaction
    }

    pub fn role(&self) -> InteractionType {
        self.role
    }

    pub fn select_interaction(&mut self, interaction: InteractionType) {
        debug!("Interaction type -> {}", interaction);
        self.interaction = interaction;
        self.role = interaction;
        self.dismissed.clear();
    }

    pub fn select_role(&mut self, role: InteractionType) {
        debug!("Role -> {} (interaction {})", role, self.interaction);
        self.role = role;
    }

    /// Hide the warning for the current combination. No-op when roles match.
    pub fn dismiss_warning(&mut self) {
        if self.is_mismatched() {
            self.dismissed.insert((self.interaction, self.role));
        }
    }

    pub fn is_mismatched(&self) -> bool {
        self.role != self.interaction
    }

    pub fn warning_visible(&self) -> bool {
        self.is_mismatched() && !self.dismissed.contains(&(self.interaction, self.role))
    }
}

/// Recipient/sender labels for the relationship diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub recipient_label: String,
    pub sender_label: String,
}

pub const DEFAULT_RECIPIENT_LABEL: &str = "Colleague";
pub const DEFAULT_SENDER_LABEL: &str = "You";

impl Default for Relationship {
    fn default() -> Self {
        Self {
            recipient_label: DEFAULT_RECIPIENT_LABEL.to_string(),
            sender_label: DEFAULT_SENDER_LABEL.to_string(),
        }
    }
}

impl Relationship {
    /// Replace the recipient label with the trimmed draft.
    ///
    /// Blank drafts leave the label unchanged. Returns whether it changed.
    pub fn rename_recipient(&mut self, draft: &str) -> bool {
        let trimmed = draft.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.recipient_label = trimmed.to_string();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InteractionType::*;

    #[test]
    fn new_selection_matches_role() {
        let sel = ToneSelection::new(HighStakesFormal);
        assert_eq!(sel.interaction(), HighStakesFormal);
        assert_eq!(sel.role(), HighStakesFormal);
        assert!(!sel.warning_visible());
    }

    #[test]
    fn role_mismatch_shows_warning() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesInformal);
        assert!(sel.warning_visible());
    }

    #[test]
    fn selecting_interaction_resets_role_and_warning() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesInformal);
        sel.dismiss_warning();
        sel.select_interaction(LowStakesInformal);

        assert_eq!(sel.role(), LowStakesInformal);
        assert!(!sel.warning_visible());
        assert!(!sel.is_mismatched());
    }

    #[test]
    fn dismissal_sticks_for_same_combination() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesFormal);
        sel.dismiss_warning();
        assert!(!sel.warning_visible());

        // Re-picking the same role keeps it dismissed.
        sel.select_role(HighStakesFormal);
        assert!(!sel.warning_visible());
    }

    #[test]
    fn earlier_dismissal_survives_a_second_one() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesFormal);
        sel.dismiss_warning();
        sel.select_role(HighStakesInformal);
        assert!(sel.warning_visible());
        sel.dismiss_warning();

        sel.select_role(HighStakesFormal);
        assert!(!sel.warning_visible());
        sel.select_role(HighStakesInformal);
        assert!(!sel.warning_visible());
    }

    #[test]
    fn selecting_interaction_forgets_all_dismissals() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesFormal);
        sel.dismiss_warning();
        sel.select_role(HighStakesInformal);
        sel.dismiss_warning();

        sel.select_interaction(LowStakesFormal);
        sel.select_role(HighStakesFormal);
        assert!(sel.warning_visible());
    }

    #[test]
    fn new_mismatch_rearms_warning() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesFormal);
        sel.dismiss_warning();

        sel.select_role(LowStakesInformal);
        assert!(sel.warning_visible());
    }

    #[test]
    fn returning_to_matching_role_hides_warning() {
        let mut sel = ToneSelection::default();
        sel.select_role(HighStakesFormal);
        sel.select_role(LowStakesFormal);
        assert!(!sel.warning_visible());
    }

    #[test]
    fn dismiss_without_mismatch_is_noop() {
        let mut sel = ToneSelection::default();
        sel.dismiss_warning();
        sel.select_role(HighStakesFormal);
        assert!(sel.warning_visible());
    }

    #[test]
    fn rename_recipient_trims() {
        let mut rel = Relationship::default();
        assert!(rel.rename_recipient("  Manager "));
        assert_eq!(rel.recipient_label, "Manager");
    }

    #[test]
    fn rename_recipient_rejects_blank() {
        let mut rel = Relationship::default();
        assert!(!rel.rename_recipient("   "));
        assert_eq!(rel.recipient_label, DEFAULT_RECIPIENT_LABEL);
        assert_eq!(rel.sender_label, DEFAULT_SENDER_LABEL);
    }
}
