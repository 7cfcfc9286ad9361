use super::{footer, log, main, Frame};
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

const LOG_HEIGHT: u16 = 8;

/// Render all widgets according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let mut constraints = vec![Constraint::Min(10)];
    if state.is_log_visible() {
        constraints.push(Constraint::Length(LOG_HEIGHT));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.size());

    // Saved images are captured at the size of the main area.
    state.set_terminal_size(rows[0]);
    main(frame, rows[0], state);
    if state.is_log_visible() {
        log(frame, rows[1], state);
    }
    footer(frame, rows[rows.len() - 1], state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Bitmap, PhotoLibrary, SaveError};
    use crate::logger::LogBuffer;
    use crate::screening::{Browser, Profile};
    use crate::store::{MemoryStore, Settings};
    use crate::ui::Theme;
    use ratatui::{backend::TestBackend, Terminal};
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
            Theme::dark(),
            LogBuffer::new(),
        )
        .unwrap()
    }

    fn draw(state: &mut State, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| all(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_render_records_main_area_size() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        draw(&mut state, 100, 40);
        let size = state.get_terminal_size();
        assert_eq!(size.width, 100);
        assert_eq!(size.height, 39);

        state.toggle_log();
        draw(&mut state, 100, 40);
        assert_eq!(state.get_terminal_size().height, 39 - LOG_HEIGHT);
    }

    #[test]
    fn test_render_blocked_form_shows_warning() {
        let mut state = state(Profile::default());
        let text = draw(&mut state, 200, 40);
        assert!(text.contains("Profile Section"));
        assert!(!text.contains("[ Submit ]"));
    }

    #[test]
    fn test_render_open_form_shows_submit() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        let text = draw(&mut state, 200, 40);
        assert!(text.contains("[ Submit ]"));
    }

    #[test]
    fn test_render_clear_result() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        state.submit().unwrap();
        let text = draw(&mut state, 200, 40);
        assert!(text.contains("Jane Doe"));
        assert!(text.contains("Save as image"));
    }
}
