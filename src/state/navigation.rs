//! Navigation-related state types.
//!
//! This module contains the views and the rules choosing which one is shown.

use crate::screening::content::{headline, profile_incomplete_screen};
use crate::screening::{Outcome, Profile, ScreenDate, SurveyResult};
use chrono::{NaiveDate, TimeZone};

/// Printed by `status` before any screening was submitted.
///
pub const NO_SUBMISSION: &str = "No screening submitted yet";

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Screening,
    Clear,
    NotClear,
    ProfileIncomplete,
    ProfileEditor,
}

impl View {
    /// Result view for an outcome.
    ///
    pub fn for_outcome(outcome: Outcome) -> View {
        match outcome {
            Outcome::Clear => View::Clear,
            Outcome::NotClear => View::NotClear,
        }
    }

    /// Whether the view shows a screening result (or stands in for one).
    ///
    pub fn is_result(&self) -> bool {
        matches!(self, View::Clear | View::NotClear | View::ProfileIncomplete)
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Screening => "Screening",
            View::Clear => "Clear",
            View::NotClear => "Not Clear",
            View::ProfileIncomplete => "Profile Incomplete",
            View::ProfileEditor => "Profile",
        }
    }
}

/// Result view for the stored survey, or the guard when the profile has
/// been emptied since it was submitted.
///
pub fn result_view(profile: &Profile, survey: &SurveyResult) -> View {
    if profile.is_complete() {
        View::for_outcome(survey.outcome())
    } else {
        View::ProfileIncomplete
    }
}

/// View shown at startup: today's result if already screened today,
/// otherwise the screening form.
///
pub fn landing_view<Tz: TimeZone>(
    profile: &Profile,
    survey: &SurveyResult,
    today: NaiveDate,
    zone: &Tz,
) -> View {
    if survey.submitted_on(today, zone) {
        result_view(profile, survey)
    } else {
        View::Screening
    }
}

/// One-line summary of the latest screening, with dates in `zone`. The
/// profile guard applies here as it does on screen.
///
pub fn status_text<Tz: TimeZone>(profile: &Profile, survey: &SurveyResult, zone: &Tz) -> String {
    if !survey.has_submission() {
        return NO_SUBMISSION.to_string();
    }
    match result_view(profile, survey) {
        View::Clear | View::NotClear => {
            let date = ScreenDate::from_timestamp(&survey.last_survey_date.with_timezone(zone));
            headline(profile, survey.outcome(), &date)
        }
        _ => profile_incomplete_screen().plain_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 5, 2).unwrap()
    }

    fn screened_today(is_clear: bool) -> SurveyResult {
        SurveyResult {
            last_survey_date: Utc.with_ymd_and_hms(2022, 5, 2, 8, 0, 0).unwrap(),
            is_clear,
        }
    }

    #[test]
    fn test_view() {
        assert_eq!(View::for_outcome(Outcome::Clear), View::Clear);
        assert_eq!(View::for_outcome(Outcome::NotClear), View::NotClear);
        assert!(View::ProfileIncomplete.is_result());
        assert!(!View::Screening.is_result());
        assert!(!View::ProfileEditor.is_result());
    }

    #[test]
    fn test_landing_without_submission() {
        let profile = Profile::new("Jane", "Doe", "jdoe");
        let view = landing_view(&profile, &SurveyResult::default(), today(), &Utc);
        assert_eq!(view, View::Screening);
    }

    #[test]
    fn test_landing_with_stale_submission() {
        let profile = Profile::new("Jane", "Doe", "jdoe");
        let next_day = NaiveDate::from_ymd_opt(2022, 5, 3).unwrap();
        let view = landing_view(&profile, &screened_today(true), next_day, &Utc);
        assert_eq!(view, View::Screening);
    }

    #[test]
    fn test_landing_with_todays_submission() {
        let profile = Profile::new("Jane", "Doe", "jdoe");
        assert_eq!(
            landing_view(&profile, &screened_today(true), today(), &Utc),
            View::Clear
        );
        assert_eq!(
            landing_view(&profile, &screened_today(false), today(), &Utc),
            View::NotClear
        );
    }

    #[test]
    fn test_landing_with_emptied_profile() {
        let view = landing_view(&Profile::default(), &screened_today(true), today(), &Utc);
        assert_eq!(view, View::ProfileIncomplete);
    }

    #[test]
    fn test_status_without_submission() {
        let profile = Profile::new("Jane", "Doe", "jdoe");
        assert_eq!(
            status_text(&profile, &SurveyResult::default(), &Utc),
            NO_SUBMISSION
        );
    }

    #[test]
    fn test_status_prints_headline() {
        let profile = Profile::new("Jane", "Doe", "jdoe");
        assert_eq!(
            status_text(&profile, &screened_today(false), &Utc),
            "Jane Doe is NOT CLEAR COVID Daily Health Screen for Monday, May 2nd."
        );
    }

    #[test]
    fn test_status_with_emptied_profile() {
        let text = status_text(&Profile::default(), &screened_today(true), &Utc);
        assert_eq!(text, profile_incomplete_screen().plain_text());
        assert!(!text.contains("CLEAR"));
    }
}
