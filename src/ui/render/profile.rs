use super::Frame;
use crate::screening::CONTACT_DOMAIN;
use crate::state::{ProfileField, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Render the profile editor with one input box per field.
///
pub fn profile(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let Some(editor) = state.get_profile_editor() else {
        return;
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Profile", styling::banner_style(theme)))
        .border_style(styling::normal_block_border_style(theme))
        .style(styling::normal_text_style(theme));
    frame.render_widget(outer, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First name
            Constraint::Length(3), // Last name
            Constraint::Length(3), // Email
            Constraint::Min(0),
        ])
        .margin(1)
        .split(size);

    for (field, area) in ProfileField::ALL.iter().zip(rows.iter()) {
        let focused = *field == editor.focus();
        let (border_style, value) = if focused {
            (
                styling::active_block_border_style(theme),
                format!("{}_", editor.value(*field)),
            )
        } else {
            (
                styling::normal_block_border_style(theme),
                editor.value(*field).to_string(),
            )
        };
        let title_style = if focused {
            styling::active_block_title_style()
        } else {
            styling::muted_text_style(theme)
        };
        let input = Paragraph::new(value)
            .style(styling::normal_text_style(theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(field.label(), title_style))
                    .border_style(border_style),
            );
        frame.render_widget(input, *area);
    }

    let hint = Paragraph::new(Span::styled(
        format!(" Enter the username part of your @{} address", CONTACT_DOMAIN),
        styling::muted_text_style(theme),
    ));
    frame.render_widget(hint, rows[3]);
}
