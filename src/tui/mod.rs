//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize). All pending
//! events are drained before the next frame.
//!
//! ## Focus
//!
//! Keyboard input goes either to the composer or to the analysis panel.
//! Tab toggles between them (only while the panel is open and the
//! terminal is wide enough to draw it). Global keys
//! (Ctrl+C, Ctrl+P, Ctrl+T, scrolling) work regardless of focus.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::selection::Selection;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::analysis_panel::{AnalysisPanelState, PanelEvent};
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Where keyboard input is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Composer,
    Panel,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    pub panel: AnalysisPanelState,
    pub focus: Focus,
    /// Whether the last frame had room to draw the panel
    pub panel_drawn: bool,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            panel: AnalysisPanelState::new(app.tone.interaction()),
            focus: Focus::Composer, // User expects to type immediately
            panel_drawn: app.panel_open,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol lets Shift+arrows and Ctrl+letters arrive
        // unambiguously; terminals without it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Run `action` through `update` and carry out the resulting effect.
///
/// Returns `true` when the app should quit.
fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::SyncComposer => {
            let caret = app
                .take_pending_cursor()
                .unwrap_or_else(|| app.composer.chars().count());
            let selection = tui.input_box.set_content(&app.composer, caret);
            report_selection(app, selection);
            false
        }
        Effect::None => false,
    }
}

fn report_selection(app: &mut App, selection: Selection) {
    update(
        app,
        Action::SelectionChanged {
            start: selection.start,
            end: selection.end,
        },
    );
}

fn handle_input_event(app: &mut App, tui: &TuiState, event: InputEvent) {
    match event {
        InputEvent::ContentChanged(selection) => {
            update(app, Action::ComposerEdited(tui.input_box.buffer.clone()));
            report_selection(app, selection);
        }
        InputEvent::SelectionChanged(selection) => report_selection(app, selection),
    }
}

fn handle_panel_event(app: &mut App, tui: &mut TuiState, event: PanelEvent) -> bool {
    let action = match event {
        PanelEvent::SelectInteraction(interaction) => Action::SelectInteraction(interaction),
        PanelEvent::CycleRole { forward } => {
            let role = app.tone.role();
            Action::SelectRole(if forward { role.next() } else { role.prev() })
        }
        PanelEvent::DismissWarning => Action::DismissRoleWarning,
        PanelEvent::EditRecipient => {
            tui.panel.begin_edit(&app.relationship.recipient_label);
            return false;
        }
        PanelEvent::RenameRecipient(draft) => Action::RenameRecipient(draft),
        PanelEvent::ApplyRecommended => Action::ApplyRecommendedTone,
        PanelEvent::Close => {
            tui.focus = Focus::Composer;
            Action::ClosePanel
        }
    };
    dispatch(app, tui, action)
}

/// Leaving the panel commits an in-progress label edit.
fn leave_panel(app: &mut App, tui: &mut TuiState) {
    if let Some(draft) = tui.panel.commit_edit() {
        update(app, Action::RenameRecipient(draft));
    }
    tui.focus = Focus::Composer;
}

/// Route one event. Returns `true` when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    match event {
        TuiEvent::Resize => false,
        TuiEvent::ForceQuit => dispatch(app, tui, Action::Quit),
        TuiEvent::TogglePanel => {
            if app.panel_open {
                leave_panel(app, tui);
            }
            dispatch(app, tui, Action::TogglePanel)
        }
        TuiEvent::ApplyRecommended => dispatch(app, tui, Action::ApplyRecommendedTone),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            tui.message_list.handle_event(&event);
            false
        }
        TuiEvent::FocusNext => {
            match tui.focus {
                Focus::Panel => leave_panel(app, tui),
                Focus::Composer if app.panel_open && tui.panel_drawn => {
                    tui.focus = Focus::Panel
                }
                Focus::Composer => {}
            }
            false
        }
        _ => match tui.focus {
            Focus::Composer => {
                if event == TuiEvent::Escape {
                    return dispatch(app, tui, Action::Quit);
                }
                if let Some(input_event) = tui.input_box.handle_event(&event) {
                    handle_input_event(app, tui, input_event);
                }
                false
            }
            Focus::Panel => {
                if event == TuiEvent::Escape && !tui.panel.is_editing() {
                    tui.focus = Focus::Composer;
                    return false;
                }
                match tui.panel.handle_event(&event) {
                    Some(panel_event) => handle_panel_event(app, tui, panel_event),
                    None => false,
                }
            }
        },
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync component props with App/TUI state
        if !app.panel_open {
            tui.focus = Focus::Composer;
        }
        tui.input_box.focused = tui.focus == Focus::Composer;

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            debug!("Dispatching {:?} (focus={:?})", event, tui.focus);
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tone::InteractionType;
    use crate::test_support::test_app;

    fn type_text(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn typing_mirrors_into_app() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        type_text(&mut app, &mut tui, "hi there");

        assert_eq!(app.composer, "hi there");
        assert_eq!(app.selection.current(), Selection::caret(8));
    }

    #[test]
    fn select_all_then_apply_replaces_and_syncs_composer() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        type_text(&mut app, &mut tui, "Yeah, I'll try.");
        handle_event(&mut app, &mut tui, TuiEvent::SelectAll);
        assert_eq!(app.selection.last_non_empty(), Some(Selection::new(0, 15)));

        assert!(!handle_event(&mut app, &mut tui, TuiEvent::ApplyRecommended));

        let expected = InteractionType::LowStakesFormal.config().message;
        assert_eq!(app.composer, expected);
        assert_eq!(tui.input_box.buffer, expected);
        assert_eq!(tui.input_box.caret(), expected.chars().count());
        assert_eq!(
            app.selection.current(),
            Selection::caret(expected.chars().count())
        );
    }

    #[test]
    fn apply_without_selection_leaves_composer() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        type_text(&mut app, &mut tui, "ok");
        handle_event(&mut app, &mut tui, TuiEvent::ApplyRecommended);
        assert_eq!(app.composer, "ok");
        assert_eq!(tui.input_box.buffer, "ok");
    }

    #[test]
    fn tab_moves_focus_only_when_panel_open() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);

        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Panel);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Composer);

        handle_event(&mut app, &mut tui, TuiEvent::TogglePanel);
        assert!(!app.panel_open);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Composer);
    }

    #[test]
    fn panel_keys_drive_tone_selection() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);

        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.tone.interaction(), InteractionType::LowStakesInformal);
        assert_eq!(app.tone.role(), InteractionType::LowStakesInformal);

        handle_event(&mut app, &mut tui, TuiEvent::InputChar(']'));
        assert_eq!(app.tone.role(), InteractionType::HighStakesFormal);
        assert!(app.tone.warning_visible());

        handle_event(&mut app, &mut tui, TuiEvent::InputChar('d'));
        assert!(!app.tone.warning_visible());
    }

    #[test]
    fn recipient_edit_commits_on_enter() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('e'));
        assert!(tui.panel.is_editing());

        for _ in 0.."Colleague".len() {
            handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        }
        type_text(&mut app, &mut tui, "Manager");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);

        assert_eq!(app.relationship.recipient_label, "Manager");
        // Composer untouched while the panel had focus
        assert!(app.composer.is_empty());
    }

    #[test]
    fn tab_stays_in_composer_when_panel_does_not_fit() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        tui.panel_drawn = false;

        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        assert_eq!(tui.focus, Focus::Composer);

        // Panel keys are typed into the composer instead
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('x'));
        assert!(app.panel_open);
        assert_eq!(app.composer, "x");
    }

    #[test]
    fn escape_in_edit_cancels_then_returns_focus() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('e'));
        type_text(&mut app, &mut tui, "xyz");

        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert_eq!(tui.focus, Focus::Panel);
        assert_eq!(app.relationship.recipient_label, "Colleague");

        assert!(!handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert_eq!(tui.focus, Focus::Composer);
    }

    #[test]
    fn tab_out_of_panel_commits_edit() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('e'));
        type_text(&mut app, &mut tui, "!");
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);

        assert_eq!(app.relationship.recipient_label, "Colleague!");
        assert!(!tui.panel.is_editing());
    }

    #[test]
    fn escape_in_composer_and_ctrl_c_quit() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        assert!(handle_event(&mut app, &mut tui, TuiEvent::Escape));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));
    }

    #[test]
    fn panel_close_key_returns_focus() {
        let mut app = test_app();
        let mut tui = TuiState::new(&app);
        handle_event(&mut app, &mut tui, TuiEvent::FocusNext);
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('x'));
        assert!(!app.panel_open);
        assert_eq!(tui.focus, Focus::Composer);
    }
}
