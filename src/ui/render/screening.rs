use super::Frame;
use crate::screening::content::screening_questions;
use crate::screening::{Answer, SubmitGate};
use crate::state::State;
use crate::ui::widgets::{content, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the screening form: questions, the answer picker and either the
/// submit button or the profile warning.
///
pub fn screening(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Questions
            Constraint::Length(3), // Answer
            Constraint::Length(4), // Submit or warning
        ])
        .split(size);

    let questions = content::framed_paragraph(&screening_questions(), theme);
    frame.render_widget(questions, rows[0]);

    let selected = state.get_form().answer();
    let mut options = vec![Span::raw(" ")];
    for answer in Answer::ALL {
        let style = if answer == selected {
            styling::selected_option_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        options.push(Span::styled(format!(" {} ", answer.label()), style));
        options.push(Span::raw(" "));
    }
    let picker = Paragraph::new(Line::from(options))
        .style(styling::normal_text_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled("Answer", styling::active_block_title_style()))
                .border_style(styling::active_block_border_style(theme)),
        );
    frame.render_widget(picker, rows[1]);

    let action = match state.submit_gate() {
        SubmitGate::Open => Paragraph::new(Span::styled("[ Submit ]", styling::button_style(theme)))
            .alignment(Alignment::Center),
        SubmitGate::Blocked(reason) => Paragraph::new(Span::styled(
            reason,
            styling::warning_style(theme),
        ))
        .wrap(Wrap { trim: true }),
    };
    let action = action.style(styling::normal_text_style(theme)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(action, rows[2]);
}
