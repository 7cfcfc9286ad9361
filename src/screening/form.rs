//! Screening form state machine.
//!
//! The form starts in `Editing` with "No" selected. Submitting is only
//! possible with a complete profile and moves the form into a terminal
//! `Submitted` state until it is reopened.

use super::error::ScreeningError;
use super::profile::Profile;
use super::survey::{Answer, Outcome, SurveyResult};
use chrono::{DateTime, Utc};

/// Warning shown in place of the submit action when the profile is incomplete.
///
pub const PROFILE_WARNING: &str = "Please ensure to go to the Profile Section to update your info before filling out your COVID Screening";

/// Specifying the form lifecycle.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitted(Outcome),
}

/// What the form exposes below the answer picker.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    Open,
    Blocked(&'static str),
}

/// Houses the transient answer selection.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreeningForm {
    answer: Answer,
    state: FormState,
}

impl Default for ScreeningForm {
    fn default() -> Self {
        ScreeningForm {
            answer: Answer::default(),
            state: FormState::Editing,
        }
    }
}

impl ScreeningForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen the form, discarding any previous selection or submission.
    ///
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::default();
        self
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn answer(&self) -> Answer {
        self.answer
    }

    pub fn selected_index(&self) -> usize {
        self.answer.index()
    }

    pub fn select(&mut self, answer: Answer) -> Result<&mut Self, ScreeningError> {
        if let FormState::Submitted(_) = self.state {
            return Err(ScreeningError::AlreadySubmitted);
        }
        self.answer = answer;
        Ok(self)
    }

    pub fn select_index(&mut self, index: usize) -> Result<&mut Self, ScreeningError> {
        let answer = Answer::from_index(index).ok_or(ScreeningError::InvalidSelection(index))?;
        self.select(answer)
    }

    pub fn toggle(&mut self) -> Result<&mut Self, ScreeningError> {
        let answer = self.answer.toggled();
        self.select(answer)
    }

    /// Return whether the submit action is exposed for the given profile.
    ///
    pub fn gate(&self, profile: &Profile) -> SubmitGate {
        if profile.is_complete() {
            SubmitGate::Open
        } else {
            SubmitGate::Blocked(PROFILE_WARNING)
        }
    }

    pub fn can_submit(&self, profile: &Profile) -> bool {
        self.state == FormState::Editing && self.gate(profile) == SubmitGate::Open
    }

    /// Record the current answer at `now`, returning the result to persist.
    ///
    pub fn submit(
        &mut self,
        profile: &Profile,
        now: DateTime<Utc>,
    ) -> Result<SurveyResult, ScreeningError> {
        if let FormState::Submitted(_) = self.state {
            return Err(ScreeningError::AlreadySubmitted);
        }
        if let SubmitGate::Blocked(_) = self.gate(profile) {
            return Err(ScreeningError::ProfileIncomplete);
        }
        let outcome = self.answer.outcome();
        self.state = FormState::Submitted(outcome);
        Ok(SurveyResult::record(outcome, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2022, 5, 2, 10, 0, 0).unwrap()
    }

    fn complete_profile() -> Profile {
        Profile::new("Jane", "Doe", "jdoe")
    }

    #[test]
    fn test_default_form() {
        let form = ScreeningForm::new();
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.answer(), Answer::No);
        assert_eq!(form.selected_index(), 1);
    }

    #[test]
    fn test_gate_blocks_any_incomplete_profile() {
        let form = ScreeningForm::new();
        let incomplete = [
            Profile::default(),
            Profile::new("", "Doe", "jdoe"),
            Profile::new("Jane", "", "jdoe"),
            Profile::new("Jane", "Doe", ""),
        ];
        for profile in incomplete.iter() {
            assert_eq!(form.gate(profile), SubmitGate::Blocked(PROFILE_WARNING));
            assert!(!form.can_submit(profile));
        }
        assert_eq!(form.gate(&complete_profile()), SubmitGate::Open);
    }

    #[test]
    fn test_submit_no_is_clear() {
        let mut form = ScreeningForm::new();
        let result = form.submit(&complete_profile(), now()).unwrap();
        assert_eq!(result.last_survey_date, now());
        assert!(result.is_clear);
        assert_eq!(form.state(), FormState::Submitted(Outcome::Clear));
    }

    #[test]
    fn test_submit_yes_is_not_clear() {
        let mut form = ScreeningForm::new();
        form.select_index(0).unwrap();
        let result = form.submit(&complete_profile(), now()).unwrap();
        assert!(!result.is_clear);
        assert_eq!(form.state(), FormState::Submitted(Outcome::NotClear));
    }

    #[test]
    fn test_submit_incomplete_profile_fails() {
        let mut form = ScreeningForm::new();
        let error = form.submit(&Profile::default(), now()).unwrap_err();
        assert!(matches!(error, ScreeningError::ProfileIncomplete));
        assert_eq!(form.state(), FormState::Editing);
    }

    #[test]
    fn test_submitted_form_is_terminal_until_reset() {
        let mut form = ScreeningForm::new();
        form.submit(&complete_profile(), now()).unwrap();
        assert!(!form.can_submit(&complete_profile()));
        assert!(matches!(
            form.submit(&complete_profile(), now()),
            Err(ScreeningError::AlreadySubmitted)
        ));
        assert!(matches!(
            form.select(Answer::Yes),
            Err(ScreeningError::AlreadySubmitted)
        ));

        form.reset();
        assert_eq!(form.state(), FormState::Editing);
        assert_eq!(form.answer(), Answer::No);
    }

    #[test]
    fn test_invalid_selection() {
        let mut form = ScreeningForm::new();
        assert!(matches!(
            form.select_index(2),
            Err(ScreeningError::InvalidSelection(2))
        ));
        form.toggle().unwrap();
        assert_eq!(form.answer(), Answer::Yes);
    }
}
