use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::{content, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render a result screen, or the profile guard standing in for one.
///
pub fn result(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(size);

    if let Some(screen) = state.displayed_content() {
        frame.render_widget(content::framed_paragraph(&screen, theme), rows[0]);
    }

    let action = if state.current_view() == View::ProfileIncomplete {
        Line::from(Span::styled(
            "Press p to update your profile",
            styling::warning_style(theme),
        ))
    } else {
        Line::from(vec![
            Span::styled("[ Save as image ]", styling::button_style(theme)),
            Span::styled(" s", styling::muted_text_style(theme)),
        ])
    };
    let action = Paragraph::new(action)
        .alignment(Alignment::Center)
        .style(styling::normal_text_style(theme));
    frame.render_widget(action, rows[1]);
}
