//! # Analysis Panel Component
//!
//! The tone analysis side panel. Three sections, switched with Left/Right
//! (or 1/2/3) while the panel has focus:
//!
//! - **Setup**: interaction type list, role picker, mismatch warning
//! - **Insights**: relationship diagram (editable recipient), tone readouts
//! - **Recommendations**: tone descriptors + "Apply Recommended Tones"
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `AnalysisPanelState` lives in `TuiState` (section, highlight, label draft)
//! - `AnalysisPanel` is created each frame with borrowed core state as props
//!
//! The panel never mutates core state directly. It emits `PanelEvent`s and
//! the event loop turns them into `core::action::Action`s.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Tabs, Wrap};

use crate::core::panel::{Relationship, ToneSelection};
use crate::core::tone::{
    AI_SUGGESTED_CONFIDENCE, AI_SUGGESTED_INTERACTION, InteractionType, RECIPIENT_TONE,
    RELATIONSHIP_SUMMARY, ROLE_MISMATCH_WARNING, ToneTrait, YOUR_TONE, YOUR_TONE_ADVISORY,
};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Width of the panel when open.
pub const PANEL_WIDTH: u16 = 46;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelSection {
    #[default]
    Setup,
    Insights,
    Recommendations,
}

impl PanelSection {
    pub const ALL: [PanelSection; 3] = [
        PanelSection::Setup,
        PanelSection::Insights,
        PanelSection::Recommendations,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PanelSection::Setup => "Setup",
            PanelSection::Insights => "Insights",
            PanelSection::Recommendations => "Recommendations",
        }
    }

    fn index(&self) -> usize {
        match self {
            PanelSection::Setup => 0,
            PanelSection::Insights => 1,
            PanelSection::Recommendations => 2,
        }
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Events emitted by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    SelectInteraction(InteractionType),
    /// Step the role picker forward or backward.
    CycleRole { forward: bool },
    DismissWarning,
    /// User asked to edit the recipient label; call `begin_edit`.
    EditRecipient,
    RenameRecipient(String),
    ApplyRecommended,
    Close,
}

/// Persistent state for the analysis panel.
#[derive(Debug, Default)]
pub struct AnalysisPanelState {
    pub section: PanelSection,
    /// Highlighted row in the interaction list
    pub highlighted: InteractionType,
    /// Label draft while the recipient node is being edited
    draft: Option<String>,
    /// Vertical scroll of the section body
    pub scroll: u16,
}

impl AnalysisPanelState {
    pub fn new(initial: InteractionType) -> Self {
        Self {
            highlighted: initial,
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&str> {
        self.draft.as_deref()
    }

    /// Start editing with the current label as the draft.
    pub fn begin_edit(&mut self, current: &str) {
        self.draft = Some(current.to_string());
    }

    /// Stop editing and hand back the draft (blank drafts are left to the
    /// core to reject).
    pub fn commit_edit(&mut self) -> Option<String> {
        self.draft.take()
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    fn switch_to(&mut self, section: PanelSection) {
        if self.section != section {
            self.section = section;
            self.scroll = 0;
        }
    }

    fn handle_editing(&mut self, event: &TuiEvent) -> Option<PanelEvent> {
        let draft = self.draft.as_mut()?;
        match event {
            TuiEvent::InputChar(c) => draft.push(*c),
            TuiEvent::Paste(text) => draft.push_str(text.lines().next().unwrap_or("")),
            TuiEvent::Backspace => {
                draft.pop();
            }
            TuiEvent::Submit => {
                return self.commit_edit().map(PanelEvent::RenameRecipient);
            }
            TuiEvent::Escape => self.cancel_edit(),
            _ => {}
        }
        None
    }
}

impl EventHandler for AnalysisPanelState {
    type Event = PanelEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PanelEvent> {
        if self.is_editing() {
            return self.handle_editing(event);
        }

        match event {
            TuiEvent::CursorLeft => {
                self.switch_to(self.section.prev());
                return None;
            }
            TuiEvent::CursorRight => {
                self.switch_to(self.section.next());
                return None;
            }
            TuiEvent::InputChar(c @ '1'..='3') => {
                let idx = (*c as usize) - ('1' as usize);
                self.switch_to(PanelSection::ALL[idx]);
                return None;
            }
            TuiEvent::InputChar('x') => return Some(PanelEvent::Close),
            _ => {}
        }

        match self.section {
            PanelSection::Setup => match event {
                TuiEvent::CursorUp => {
                    self.highlighted = self.highlighted.prev();
                    None
                }
                TuiEvent::CursorDown => {
                    self.highlighted = self.highlighted.next();
                    None
                }
                TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                    Some(PanelEvent::SelectInteraction(self.highlighted))
                }
                TuiEvent::InputChar(']') => Some(PanelEvent::CycleRole { forward: true }),
                TuiEvent::InputChar('[') => Some(PanelEvent::CycleRole { forward: false }),
                TuiEvent::InputChar('d') => Some(PanelEvent::DismissWarning),
                _ => None,
            },
            PanelSection::Insights => match event {
                TuiEvent::InputChar('e') | TuiEvent::Submit => Some(PanelEvent::EditRecipient),
                TuiEvent::CursorUp => {
                    self.scroll = self.scroll.saturating_sub(1);
                    None
                }
                TuiEvent::CursorDown => {
                    self.scroll = self.scroll.saturating_add(1);
                    None
                }
                _ => None,
            },
            PanelSection::Recommendations => match event {
                TuiEvent::InputChar('a') | TuiEvent::Submit => Some(PanelEvent::ApplyRecommended),
                TuiEvent::CursorUp => {
                    self.scroll = self.scroll.saturating_sub(1);
                    None
                }
                TuiEvent::CursorDown => {
                    self.scroll = self.scroll.saturating_add(1);
                    None
                }
                _ => None,
            },
        }
    }
}

/// Accent color for an interaction type.
pub fn accent(interaction: InteractionType) -> Color {
    match interaction {
        InteractionType::LowStakesFormal => Color::Blue,
        InteractionType::LowStakesInformal => Color::Yellow,
        InteractionType::HighStakesFormal => Color::Magenta,
        InteractionType::HighStakesInformal => Color::Green,
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn dim(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

fn trait_rows(traits: &[ToneTrait]) -> Vec<Line<'static>> {
    traits
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled(
                    format!("  {:<24}", t.label),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{} {}", t.level.glyph(), t.level.label()),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect()
}

/// Transient render wrapper for the analysis panel.
pub struct AnalysisPanel<'a> {
    pub state: &'a mut AnalysisPanelState,
    pub tone: &'a ToneSelection,
    pub relationship: &'a Relationship,
    /// Keyboard focus is on the panel
    pub focused: bool,
    /// A replacement target exists (composer has text and a remembered selection)
    pub has_target: bool,
}

impl<'a> AnalysisPanel<'a> {
    pub fn new(
        state: &'a mut AnalysisPanelState,
        tone: &'a ToneSelection,
        relationship: &'a Relationship,
        focused: bool,
        has_target: bool,
    ) -> Self {
        Self {
            state,
            tone,
            relationship,
            focused,
            has_target,
        }
    }

    fn setup_lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![heading("Interaction Type"), Line::default()];

        for t in InteractionType::ALL {
            let selected = self.tone.interaction() == t;
            let cursor = if self.focused && self.state.highlighted == t {
                "›"
            } else {
                " "
            };
            let radio = if selected { "●" } else { "○" };
            let label_style = if selected {
                Style::default()
                    .fg(accent(t))
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };

            let mut spans = vec![
                Span::raw(format!("{cursor} ")),
                Span::styled(format!("{radio} "), Style::default().fg(accent(t))),
                Span::styled(t.label().to_string(), label_style),
            ];
            if t.is_ai_suggested() {
                spans.push(Span::styled(" ✦ AI", Style::default().fg(Color::Cyan)));
            }
            lines.push(Line::from(spans));
            lines.push(Line::from(dim(format!("     {}", t.config().description))));
        }

        lines.push(Line::default());
        lines.push(heading("AI Role"));
        let role = self.tone.role();
        let mut role_spans = vec![
            dim("  [ "),
            Span::styled(
                role.role().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            dim(" ]"),
        ];
        if role.is_ai_suggested() {
            role_spans.push(Span::styled(" ✦", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(role_spans));

        if self.tone.warning_visible() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("⚠ {ROLE_MISMATCH_WARNING}"),
                Style::default().fg(Color::Yellow),
            )));
            lines.push(Line::from(dim("  d to dismiss")));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "AI Analysis Suggests:",
            Style::default().fg(Color::Cyan),
        )));
        lines.push(Line::from(Span::styled(
            format!(
                "  {} ({}% confidence)",
                AI_SUGGESTED_INTERACTION.label(),
                AI_SUGGESTED_CONFIDENCE
            ),
            Style::default().fg(Color::Gray),
        )));
        lines
    }

    fn insights_lines(&self) -> Vec<Line<'static>> {
        let node_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let recipient = match self.state.draft() {
            Some(draft) => Line::from(vec![
                dim("  [ "),
                Span::styled(
                    format!("{draft}▏"),
                    node_style.fg(Color::Cyan),
                ),
                dim(" ]  Recipient  (Enter save, Esc cancel)"),
            ]),
            None => Line::from(vec![
                dim("  [ "),
                Span::styled(self.relationship.recipient_label.clone(), node_style),
                dim(" ]  Recipient  (e to edit)"),
            ]),
        };

        let mut lines = vec![
            heading("Relationship Dynamic"),
            Line::default(),
            recipient,
            Line::from(dim("      │")),
            Line::from(vec![
                dim("  [ "),
                Span::styled(self.relationship.sender_label.clone(), node_style),
                dim(" ]  Sender (You)"),
            ]),
            Line::default(),
            Line::from(Span::styled(
                RELATIONSHIP_SUMMARY,
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            heading("Recipient's Tone"),
        ];
        lines.extend(trait_rows(&RECIPIENT_TONE));
        lines.push(Line::default());
        lines.push(heading("Your Tone"));
        lines.extend(trait_rows(&YOUR_TONE));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("⚠ {YOUR_TONE_ADVISORY}"),
            Style::default().fg(Color::Yellow),
        )));
        lines
    }

    fn recommendation_lines(&self) -> Vec<Line<'static>> {
        let interaction = self.tone.interaction();
        let config = interaction.config();
        let mut lines = vec![
            heading("Recommended Tones"),
            Line::from(dim(format!("  for {}", config.label))),
            Line::default(),
        ];

        for tone in &config.tones {
            lines.push(Line::from(vec![
                Span::styled("◆ ", Style::default().fg(accent(interaction))),
                Span::styled(
                    tone.title,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("  {}", tone.description),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::default());
        }

        let button_style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(accent(interaction))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent(interaction))
        };
        lines.push(Line::from(Span::styled(
            " ✨ Apply Recommended Tones ",
            button_style,
        )));
        if !self.has_target {
            lines.push(Line::from(dim(
                "  Highlight text in the message box to choose what gets replaced.",
            )));
        }
        lines
    }

    fn help_text(&self) -> &'static str {
        if !self.focused {
            return " Tab Focus  ^P Hide ";
        }
        if self.state.is_editing() {
            return " Enter Save  Esc Cancel ";
        }
        match self.state.section {
            PanelSection::Setup => " ↑↓ Move  Enter Pick  [ ] Role  d Dismiss ",
            PanelSection::Insights => " e Edit  ←→ Section  Esc Back ",
            PanelSection::Recommendations => " Enter Apply  ←→ Section  Esc Back ",
        }
    }
}

impl<'a> Component for AnalysisPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Span::styled(
                " ✦ Tone Analysis ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(self.help_text()).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [tabs_area, _gap, body_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let tabs = Tabs::new(PanelSection::ALL.iter().map(|s| s.title()))
            .select(self.state.section.index())
            .style(Style::default().fg(Color::DarkGray))
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("│");
        frame.render_widget(tabs, tabs_area);

        let lines = match self.state.section {
            PanelSection::Setup => self.setup_lines(),
            PanelSection::Insights => self.insights_lines(),
            PanelSection::Recommendations => self.recommendation_lines(),
        };

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0));
        frame.render_widget(body, body_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(
        state: &mut AnalysisPanelState,
        tone: &ToneSelection,
        relationship: &Relationship,
        height: u16,
    ) -> String {
        let backend = TestBackend::new(PANEL_WIDTH, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                AnalysisPanel::new(state, tone, relationship, true, false).render(f, f.area());
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
    fn section_navigation_wraps() {
        let mut state = AnalysisPanelState::default();
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.section, PanelSection::Recommendations);
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.section, PanelSection::Setup);
        state.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(state.section, PanelSection::Insights);
    }

    #[test]
    fn setup_enter_selects_highlighted_interaction() {
        let mut state = AnalysisPanelState::new(InteractionType::LowStakesFormal);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PanelEvent::SelectInteraction(InteractionType::HighStakesFormal))
        );
    }

    #[test]
    fn setup_role_and_dismiss_keys() {
        let mut state = AnalysisPanelState::default();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(']')),
            Some(PanelEvent::CycleRole { forward: true })
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('[')),
            Some(PanelEvent::CycleRole { forward: false })
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('d')),
            Some(PanelEvent::DismissWarning)
        );
    }

    #[test]
    fn recommendations_apply() {
        let mut state = AnalysisPanelState::default();
        state.handle_event(&TuiEvent::InputChar('3'));
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PanelEvent::ApplyRecommended)
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('a')),
            Some(PanelEvent::ApplyRecommended)
        );
    }

    #[test]
    fn editing_collects_draft_and_commits() {
        let mut state = AnalysisPanelState::default();
        state.handle_event(&TuiEvent::InputChar('2'));
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('e')),
            Some(PanelEvent::EditRecipient)
        );
        state.begin_edit("Colleague");
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::Backspace);
        state.handle_event(&TuiEvent::InputChar('a'));
        // Section keys are text while editing
        state.handle_event(&TuiEvent::InputChar('1'));
        assert_eq!(state.section, PanelSection::Insights);

        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(PanelEvent::RenameRecipient("Colla1".to_string()))
        );
        assert!(!state.is_editing());
    }

    #[test]
    fn escape_cancels_edit() {
        let mut state = AnalysisPanelState::default();
        state.begin_edit("Colleague");
        assert_eq!(state.handle_event(&TuiEvent::Escape), None);
        assert!(!state.is_editing());
    }

    #[test]
    fn close_key() {
        let mut state = AnalysisPanelState::default();
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('x')),
            Some(PanelEvent::Close)
        );
    }

    #[test]
    fn render_setup_shows_roles_and_suggestion() {
        let mut state = AnalysisPanelState::default();
        let tone = ToneSelection::default();
        let text = render_text(&mut state, &tone, &Relationship::default(), 60);

        assert!(text.contains("Tone Analysis"));
        assert!(text.contains("Low-stakes, Formal"));
        assert!(text.contains("Professional Communicator"));
        assert!(text.contains("72% confidence"));
        assert!(!text.contains("⚠"));
    }

    #[test]
    fn render_setup_shows_mismatch_warning() {
        let mut state = AnalysisPanelState::default();
        let mut tone = ToneSelection::default();
        tone.select_role(InteractionType::HighStakesInformal);
        let text = render_text(&mut state, &tone, &Relationship::default(), 60);

        assert!(text.contains("Trusted Partner"));
        assert!(text.contains("⚠"));
    }

    #[test]
    fn render_insights_shows_labels() {
        let mut state = AnalysisPanelState::default();
        state.handle_event(&TuiEvent::InputChar('2'));
        let relationship = Relationship {
            recipient_label: "Client".to_string(),
            sender_label: "You".to_string(),
        };
        let text = render_text(&mut state, &ToneSelection::default(), &relationship, 60);

        assert!(text.contains("Client"));
        assert!(text.contains("Recipient's Tone"));
        assert!(text.contains("Somewhat Dismissive"));
    }

    #[test]
    fn render_recommendations_follow_interaction() {
        let mut state = AnalysisPanelState::default();
        state.handle_event(&TuiEvent::InputChar('3'));
        let tone = ToneSelection::new(InteractionType::HighStakesInformal);
        let text = render_text(&mut state, &tone, &Relationship::default(), 60);

        assert!(text.contains("Authentic & Direct"));
        assert!(text.contains("Apply Recommended Tones"));
    }
}
