use crate::export::{Bitmap, PhotoLibrary, Renderer, ViewRenderer};
use crate::logger::LogBuffer;
use crate::screening::content::{
    profile_incomplete_screen, result_screen, screening_questions, ScreenContent,
};
use crate::screening::{
    Answer, Browser, ExternalLink, Outcome, Profile, ScreenDate, ScreeningForm, SubmitGate,
    SurveyResult,
};
use crate::store::{Settings, SettingsStore};
use crate::ui::Theme;
use chrono::{DateTime, Local, Utc};
use clipboard::{ClipboardContext, ClipboardProvider};
use log::*;
use ratatui::layout::Rect;
use std::path::PathBuf;

use super::error::StateError;
use super::form::ProfileEditor;
use super::navigation::{landing_view, result_view, View};

/// Houses data representative of application state.
///
/// Persisted settings and every outside capability are injected, so the
/// whole screening flow can be driven without a terminal.
pub struct State {
    store: Box<dyn SettingsStore>,
    browser: Box<dyn Browser>,
    library: Box<dyn PhotoLibrary>,
    settings: Settings,
    form: ScreeningForm,
    view_stack: Vec<View>,
    profile_editor: Option<ProfileEditor>,
    theme: Theme,
    terminal_size: Rect,
    status: Option<String>,
    log: LogBuffer,
    show_log: bool,
}

impl State {
    /// Load settings from the store and open on the landing view.
    ///
    pub fn new(
        store: Box<dyn SettingsStore>,
        browser: Box<dyn Browser>,
        library: Box<dyn PhotoLibrary>,
        theme: Theme,
        log: LogBuffer,
    ) -> Result<State, StateError> {
        let settings = store.load()?;
        let today = Local::now().date_naive();
        let landing = landing_view(&settings.profile, &settings.survey, today, &Local);
        debug!("Opening on the {} view", landing.title());

        let mut view_stack = vec![View::Screening];
        if landing != View::Screening {
            view_stack.push(landing);
        }
        Ok(State {
            store,
            browser,
            library,
            settings,
            form: ScreeningForm::new(),
            view_stack,
            profile_editor: None,
            theme,
            terminal_size: Rect::default(),
            status: None,
            log,
            show_log: false,
        })
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn get_profile(&self) -> &Profile {
        &self.settings.profile
    }

    pub fn get_survey_result(&self) -> &SurveyResult {
        &self.settings.survey
    }

    pub fn get_form(&self) -> &ScreeningForm {
        &self.form
    }

    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn get_status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) -> &mut Self {
        self.status = Some(status.into());
        self
    }

    pub fn clear_status(&mut self) -> &mut Self {
        self.status = None;
        self
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log.entries()
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> View {
        self.view_stack.last().copied().unwrap_or(View::Screening)
    }

    pub fn push_view(&mut self, view: View) -> &mut Self {
        debug!("Pushing {} view", view.title());
        self.view_stack.push(view);
        self
    }

    /// Pop the current view, never removing the screening form underneath.
    ///
    pub fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() > 1 {
            self.view_stack.pop()
        } else {
            None
        }
    }

    pub fn view_stack_len(&self) -> usize {
        self.view_stack.len()
    }

    fn replace_view(&mut self, view: View) {
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
        }
        self.view_stack.push(view);
    }

    /// Whether the form shows the submit action or the profile warning.
    ///
    pub fn submit_gate(&self) -> SubmitGate {
        self.form.gate(&self.settings.profile)
    }

    pub fn can_submit(&self) -> bool {
        self.current_view() == View::Screening && self.form.can_submit(&self.settings.profile)
    }

    pub fn select_answer(&mut self, answer: Answer) -> Result<&mut Self, StateError> {
        self.form.select(answer)?;
        Ok(self)
    }

    pub fn toggle_answer(&mut self) -> Result<&mut Self, StateError> {
        self.form.toggle()?;
        Ok(self)
    }

    /// Submit the screening now.
    ///
    pub fn submit(&mut self) -> Result<Outcome, StateError> {
        self.submit_at(Utc::now())
    }

    /// Record the answer at `now`, persist it and show the matching result.
    ///
    pub fn submit_at(&mut self, now: DateTime<Utc>) -> Result<Outcome, StateError> {
        let result = self.form.submit(&self.settings.profile, now)?;
        self.settings.survey = result;
        let outcome = result.outcome();
        info!(
            "Screening submitted: {}",
            if outcome.is_clear() { "clear" } else { "not clear" }
        );
        self.clear_status();
        self.persist();
        self.push_view(View::for_outcome(outcome));
        Ok(outcome)
    }

    /// Leave any result screen and start a fresh screening.
    ///
    pub fn reopen_form(&mut self) -> &mut Self {
        self.view_stack.truncate(1);
        self.form.reset();
        self.profile_editor = None;
        self.clear_status();
        self
    }

    /// Date of the stored screening in the local time zone.
    ///
    pub fn screen_date(&self) -> ScreenDate {
        ScreenDate::from_timestamp(&self.settings.survey.last_survey_date.with_timezone(&Local))
    }

    /// Content of the current view, if it is a content screen.
    ///
    pub fn displayed_content(&self) -> Option<ScreenContent> {
        match self.current_view() {
            View::Screening => Some(screening_questions()),
            View::Clear => Some(self.result_content_for(Outcome::Clear)),
            View::NotClear => Some(self.result_content_for(Outcome::NotClear)),
            View::ProfileIncomplete => Some(profile_incomplete_screen()),
            View::ProfileEditor => None,
        }
    }

    fn result_content_for(&self, outcome: Outcome) -> ScreenContent {
        result_screen(&self.settings.profile, outcome, &self.screen_date())
    }

    /// Content of the displayed result screen.
    ///
    pub fn result_content(&self) -> Result<ScreenContent, StateError> {
        match self.current_view() {
            View::Clear => Ok(self.result_content_for(Outcome::Clear)),
            View::NotClear => Ok(self.result_content_for(Outcome::NotClear)),
            view => Err(StateError::NothingToExport(view.title())),
        }
    }

    /// Capture the displayed result screen at terminal size and save it.
    ///
    pub fn export_current_view(&mut self) -> Result<PathBuf, StateError> {
        let content = self.result_content()?;
        let bitmap =
            ViewRenderer::new(&content, &self.theme, self.terminal_size).capture_current_view();
        self.save_bitmap(&bitmap)
    }

    /// Capture with the given renderer and save it.
    ///
    pub fn export_with(&mut self, renderer: &dyn Renderer) -> Result<PathBuf, StateError> {
        self.result_content()?;
        let bitmap = renderer.capture_current_view();
        self.save_bitmap(&bitmap)
    }

    fn save_bitmap(&mut self, bitmap: &Bitmap) -> Result<PathBuf, StateError> {
        match self.library.save(bitmap) {
            Ok(path) => {
                self.set_status(format!("Saved image to {}", path.display()));
                Ok(path)
            }
            Err(e) => {
                error!("Failed to save screening image: {}", e);
                self.set_status(format!("Failed to save image: {}", e));
                Err(e.into())
            }
        }
    }

    /// Copy the result headline to the system clipboard.
    ///
    pub fn copy_headline(&mut self) -> Result<String, StateError> {
        let headline = self.result_content()?.headline();
        let mut context: ClipboardContext =
            ClipboardProvider::new().map_err(|e| StateError::Clipboard(e.to_string()))?;
        context
            .set_contents(headline.clone())
            .map_err(|e| StateError::Clipboard(e.to_string()))?;
        info!("Copied screening headline to clipboard");
        self.set_status("Copied result to clipboard");
        Ok(headline)
    }

    /// Links shown on the current view.
    ///
    pub fn available_links(&self) -> Vec<ExternalLink> {
        self.displayed_content()
            .map(|content| content.links())
            .unwrap_or_default()
    }

    /// Open a link if the current view shows it. Returns whether it was opened.
    ///
    pub fn open_link(&mut self, link: ExternalLink) -> bool {
        if !self.available_links().contains(&link) {
            return false;
        }
        self.browser.open_external(link.url());
        self.set_status(format!("Opened {}", link.url()));
        true
    }

    /// Open the link bound to `key` on the current view, if any.
    ///
    pub fn open_link_by_key(&mut self, key: char) -> bool {
        let link = self
            .available_links()
            .into_iter()
            .find(|link| link.hotkey() == key);
        match link {
            Some(link) => self.open_link(link),
            None => false,
        }
    }

    pub fn get_profile_editor(&self) -> Option<&ProfileEditor> {
        self.profile_editor.as_ref()
    }

    pub fn get_profile_editor_mut(&mut self) -> Option<&mut ProfileEditor> {
        self.profile_editor.as_mut()
    }

    /// Start editing a copy of the stored profile.
    ///
    pub fn open_profile_editor(&mut self) -> &mut Self {
        if self.current_view() != View::ProfileEditor {
            self.profile_editor = Some(ProfileEditor::new(&self.settings.profile));
            self.push_view(View::ProfileEditor);
        }
        self
    }

    /// Store the edited profile and return to the previous view.
    ///
    pub fn save_profile(&mut self) -> &mut Self {
        if let Some(editor) = self.profile_editor.take() {
            self.settings.profile = editor.finish();
            info!(
                "Profile updated ({})",
                if self.settings.profile.is_complete() {
                    "complete"
                } else {
                    "incomplete"
                }
            );
            self.persist();
            self.pop_view();
            self.refresh_result_view();
        }
        self
    }

    pub fn cancel_profile_editor(&mut self) -> &mut Self {
        if self.profile_editor.take().is_some() {
            self.pop_view();
        }
        self
    }

    /// Swap a result view for the guard (or back) after profile changes.
    ///
    fn refresh_result_view(&mut self) {
        if self.current_view().is_result() {
            let view = result_view(&self.settings.profile, &self.settings.survey);
            if view != self.current_view() {
                debug!("Result view changed to {}", view.title());
                self.replace_view(view);
            }
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.settings) {
            error!("Failed to persist settings: {}", e);
            self.set_status(format!("Failed to save settings: {}", e));
        }
    }
}
