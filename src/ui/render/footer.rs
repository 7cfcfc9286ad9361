use super::Frame;
use crate::state::{State, View};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Format hotkeys for the current view as a display string.
///
fn format_hotkeys_for_view(state: &State) -> String {
    let mut parts: Vec<&str> = match state.current_view() {
        View::Screening => {
            let mut parts = vec!["←→ y n: answer"];
            if state.can_submit() {
                parts.push("Enter: submit");
            }
            parts.push("1 3: open link");
            parts
        }
        View::Clear => vec!["s: save image", "c: copy", "r v: open link", "Esc: back"],
        View::NotClear => vec!["s: save image", "c: copy", "Esc: back"],
        View::ProfileIncomplete => vec![],
        View::ProfileEditor => {
            return " Tab ↑↓: navigate fields, Enter: save, Esc: cancel".to_string();
        }
    };
    parts.extend(["p: profile", "d: log", "q: quit"]);
    format!(" {}", parts.join(", "))
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let mode = if state.current_view() == View::ProfileEditor {
        "EDIT:"
    } else {
        "NORMAL:"
    };
    let controls = Line::from(vec![
        Span::styled(
            mode,
            Style::default()
                .fg(theme.button_fg.to_color())
                .bg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_hotkeys_for_view(state),
            styling::muted_text_style(theme),
        ),
    ]);
    let controls_widget = Paragraph::new(controls).alignment(Alignment::Left);

    // Show the latest status message, otherwise the version
    let right_content = match state.get_status() {
        Some(status) => Line::from(Span::styled(
            format!("{} ", status),
            styling::warning_style(theme),
        )),
        None => Line::from(Span::styled(
            format!(" {}", env!("CARGO_PKG_VERSION")),
            styling::muted_text_style(theme),
        )),
    };
    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Bitmap, PhotoLibrary, SaveError};
    use crate::logger::LogBuffer;
    use crate::screening::{Browser, Profile};
    use crate::store::{MemoryStore, Settings};
    use crate::ui::Theme;
    use std::path::PathBuf;

    struct NoBrowser;

    impl Browser for NoBrowser {
        fn open_external(&self, _url: &str) {}
    }

    struct NoLibrary;

    impl PhotoLibrary for NoLibrary {
        fn save(&self, _bitmap: &Bitmap) -> Result<PathBuf, SaveError> {
            Err(SaveError::EmptyBitmap)
        }
    }

    fn state(profile: Profile) -> State {
        let settings = Settings {
            profile,
            ..Settings::default()
        };
        State::new(
            Box::new(MemoryStore::new(settings)),
            Box::new(NoBrowser),
            Box::new(NoLibrary),
            Theme::light(),
            LogBuffer::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_submit_hint_hidden_when_blocked() {
        let state = state(Profile::default());
        assert!(!format_hotkeys_for_view(&state).contains("submit"));
    }

    #[test]
    fn test_submit_hint_shown_when_open() {
        let state = state(Profile::new("Jane", "Doe", "jdoe"));
        assert!(format_hotkeys_for_view(&state).contains("Enter: submit"));
    }

    #[test]
    fn test_result_hotkeys() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        state.submit().unwrap();
        let hotkeys = format_hotkeys_for_view(&state);
        assert!(hotkeys.contains("s: save image"));
        assert!(hotkeys.contains("r v: open link"));
    }

    #[test]
    fn test_editor_hotkeys() {
        let mut state = state(Profile::default());
        state.open_profile_editor();
        assert!(format_hotkeys_for_view(&state).contains("Enter: save"));
    }
}
