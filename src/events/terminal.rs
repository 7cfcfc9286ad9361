use crate::screening::Answer;
use crate::state::{State, View};
use anyhow::{anyhow, Result};
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            let event = match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        Event::Input(key)
                    }
                    Ok(_) => Event::Tick,
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => Event::Tick,
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });
        Handler { rx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self
            .rx
            .recv()
            .map_err(|_| anyhow!("Terminal input thread stopped"))?
        {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    // Typing in the profile editor takes every printable key.
    if state.current_view() == View::ProfileEditor {
        handle_profile_editor_key(state, key);
        return true;
    }

    match key.code {
        KeyCode::Char('q') => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyCode::Char('p') => {
            state.open_profile_editor();
        }
        KeyCode::Char('d') => {
            state.toggle_log();
        }
        _ => match state.current_view() {
            View::Screening => handle_screening_key(state, key),
            View::Clear | View::NotClear => handle_result_key(state, key),
            // The guard only leads to the profile editor.
            View::ProfileIncomplete | View::ProfileEditor => {}
        },
    }
    true
}

fn handle_screening_key(state: &mut State, key: KeyEvent) {
    let selection = match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') => {
            state.toggle_answer().map(|_| ())
        }
        KeyCode::Char('y') => state.select_answer(Answer::Yes).map(|_| ()),
        KeyCode::Char('n') => state.select_answer(Answer::No).map(|_| ()),
        KeyCode::Enter => {
            if state.can_submit() {
                state.submit().map(|_| ())
            } else {
                debug!("Submit ignored: profile incomplete");
                Ok(())
            }
        }
        KeyCode::Char(c) => {
            state.open_link_by_key(c);
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(e) = selection {
        warn!("Failed to update screening: {}", e);
    }
}

fn handle_result_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            state.reopen_form();
        }
        KeyCode::Char('s') => match state.export_current_view() {
            Ok(path) => debug!("Exported screening view to {}", path.display()),
            Err(e) => debug!("Screening view not exported: {}", e),
        },
        KeyCode::Char('c') => {
            if let Err(e) = state.copy_headline() {
                warn!("Failed to copy headline: {}", e);
                state.set_status(format!("Failed to copy: {}", e));
            }
        }
        KeyCode::Char(c) => {
            state.open_link_by_key(c);
        }
        _ => {}
    }
}

fn handle_profile_editor_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.cancel_profile_editor();
        }
        KeyCode::Enter => {
            state.save_profile();
        }
        code => {
            if let Some(editor) = state.get_profile_editor_mut() {
                match code {
                    KeyCode::Tab | KeyCode::Down => {
                        editor.next_field();
                    }
                    KeyCode::BackTab | KeyCode::Up => {
                        editor.previous_field();
                    }
                    KeyCode::Backspace => {
                        editor.backspace();
                    }
                    KeyCode::Char(c)
                        if key.modifiers == KeyModifiers::NONE
                            || key.modifiers == KeyModifiers::SHIFT =>
                    {
                        editor.add_char(c);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{Bitmap, PhotoLibrary, SaveError};
    use crate::logger::LogBuffer;
    use crate::screening::{Browser, Outcome, Profile};
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
            Ok(PathBuf::from("/dev/null"))
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

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_exit_keys() {
        let mut state = state(Profile::default());
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(!handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_enter_ignored_without_profile() {
        let mut state = state(Profile::default());
        assert!(press(&mut state, KeyCode::Enter));
        assert_eq!(state.current_view(), View::Screening);
    }

    #[test]
    fn test_answer_and_submit() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        press(&mut state, KeyCode::Char('y'));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_view(), View::NotClear);
        assert_eq!(state.get_survey_result().outcome(), Outcome::NotClear);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_view(), View::Screening);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_view(), View::Clear);
    }

    #[test]
    fn test_save_image_key() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('s'));
        assert!(state.get_status().unwrap().contains("/dev/null"));
    }

    #[test]
    fn test_save_image_key_ignored_on_form() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        assert!(press(&mut state, KeyCode::Char('s')));
        assert_eq!(state.current_view(), View::Screening);
        assert!(state.get_status().is_none());
    }

    #[test]
    fn test_profile_editor_takes_typing() {
        let mut state = state(Profile::default());
        press(&mut state, KeyCode::Char('p'));
        assert_eq!(state.current_view(), View::ProfileEditor);

        // 'q' is text here, not quit.
        type_text(&mut state, "Jaqe");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Doe");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "jdoe");
        press(&mut state, KeyCode::Enter);

        assert_eq!(state.current_view(), View::Screening);
        assert_eq!(*state.get_profile(), Profile::new("Jaqe", "Doe", "jdoe"));
        assert!(state.can_submit());
    }

    #[test]
    fn test_guard_only_leads_to_profile_editor() {
        let mut state = state(Profile::new("Jane", "Doe", "jdoe"));
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('p'));
        // Empty the first name.
        for _ in 0..4 {
            press(&mut state, KeyCode::Backspace);
        }
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_view(), View::ProfileIncomplete);

        press(&mut state, KeyCode::Esc);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_view(), View::ProfileIncomplete);

        press(&mut state, KeyCode::Char('p'));
        type_text(&mut state, "Jane");
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.current_view(), View::Clear);
    }

    #[test]
    fn test_profile_editor_escape_discards() {
        let mut state = state(Profile::default());
        press(&mut state, KeyCode::Char('p'));
        type_text(&mut state, "Jane");
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.current_view(), View::Screening);
        assert_eq!(*state.get_profile(), Profile::default());
    }
}
