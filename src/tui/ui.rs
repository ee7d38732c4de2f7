use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::analysis_panel::{AnalysisPanel, PANEL_WIDTH};
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::title_bar::TITLE_BAR_HEIGHT;
use crate::tui::components::{MessageList, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Below this width the panel would squeeze the conversation out; it is
/// not drawn even when open.
const MIN_WIDTH_FOR_PANEL: u16 = PANEL_WIDTH + 30;

/// Split the frame into the conversation column and (optionally) the panel.
fn split_panel(area: Rect, panel_open: bool) -> (Rect, Option<Rect>) {
    if !panel_open || area.width < MIN_WIDTH_FOR_PANEL {
        return (area, None);
    }
    let [main, panel] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)]).areas(area);
    (main, Some(panel))
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let (main_area, panel_area) = split_panel(frame.area(), app.panel_open);

    // Keys must not go to a panel the user cannot see
    tui.panel_drawn = panel_area.is_some();
    if !tui.panel_drawn && tui.focus == Focus::Panel {
        tui.panel.cancel_edit();
        tui.focus = Focus::Composer;
        tui.input_box.focused = true;
    }

    let [title_area, messages_area, input_area, footer_area] = Layout::vertical([
        Length(TITLE_BAR_HEIGHT),
        Min(0),
        Length(INPUT_HEIGHT),
        Length(1),
    ])
    .areas(main_area);

    TitleBar::new(&app.contact, app.panel_open).render(frame, title_area);

    MessageList::new(&mut tui.message_list, &app.messages, &app.contact.name)
        .render(frame, messages_area);

    tui.input_box.render(frame, input_area);

    draw_footer(frame, footer_area, app, tui.focus);

    if let Some(panel_area) = panel_area {
        let has_target =
            !app.composer.trim().is_empty() && app.selection.last_non_empty().is_some();
        AnalysisPanel::new(
            &mut tui.panel,
            &app.tone,
            &app.relationship,
            tui.focus == Focus::Panel,
            has_target,
        )
        .render(frame, panel_area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, focus: Focus) {
    let hints = match focus {
        Focus::Composer => " Tab Panel  ^T Apply tone  ^P Toggle panel  Esc Quit",
        Focus::Panel => " Tab Composer  ←→ Sections  Esc Back",
    };

    // Status first so it survives truncation on narrow terminals
    let mut spans = Vec::new();
    if !app.status_message.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", app.status_message),
            Style::default().fg(Color::Green),
        ));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
