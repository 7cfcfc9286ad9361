use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Seconds between 0001-01-01T00:00:00Z and the Unix epoch.
///
const DISTANT_PAST_SECONDS: i64 = -62_135_596_800;

/// Sentinel timestamp meaning "never screened".
///
pub fn distant_past() -> DateTime<Utc> {
    DateTime::from_timestamp(DISTANT_PAST_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Answer to "Are any of the following true for you?".
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Answer {
    Yes,
    #[default]
    No,
}

impl Answer {
    pub const ALL: [Answer; 2] = [Answer::Yes, Answer::No];

    /// Segmented-picker index: 0 is "Yes", 1 is "No".
    ///
    pub fn from_index(index: usize) -> Option<Answer> {
        Answer::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            Answer::Yes => 0,
            Answer::No => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }

    pub fn toggled(self) -> Answer {
        match self {
            Answer::Yes => Answer::No,
            Answer::No => Answer::Yes,
        }
    }

    /// Reporting any symptom, exposure or fever means not clear.
    ///
    pub fn outcome(self) -> Outcome {
        match self {
            Answer::Yes => Outcome::NotClear,
            Answer::No => Outcome::Clear,
        }
    }
}

/// Result of a submitted screening.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Clear,
    NotClear,
}

impl Outcome {
    pub fn from_clear(is_clear: bool) -> Outcome {
        if is_clear {
            Outcome::Clear
        } else {
            Outcome::NotClear
        }
    }

    pub fn is_clear(self) -> bool {
        self == Outcome::Clear
    }
}

/// Most recently submitted screening.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurveyResult {
    pub last_survey_date: DateTime<Utc>,
    pub is_clear: bool,
}

impl SurveyResult {
    pub fn record(outcome: Outcome, at: DateTime<Utc>) -> Self {
        SurveyResult {
            last_survey_date: at,
            is_clear: outcome.is_clear(),
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_clear(self.is_clear)
    }

    /// Whether anything has ever been submitted.
    ///
    pub fn has_submission(&self) -> bool {
        self.last_survey_date > distant_past()
    }

    /// Whether the last submission falls on `today` in the given zone.
    ///
    pub fn submitted_on<Tz: TimeZone>(&self, today: NaiveDate, zone: &Tz) -> bool {
        self.has_submission() && self.last_survey_date.with_timezone(zone).date_naive() == today
    }
}

impl Default for SurveyResult {
    fn default() -> Self {
        SurveyResult {
            last_survey_date: distant_past(),
            is_clear: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distant_past_is_year_one() {
        assert_eq!(distant_past().to_rfc3339(), "0001-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_answer_indices() {
        assert_eq!(Answer::from_index(0), Some(Answer::Yes));
        assert_eq!(Answer::from_index(1), Some(Answer::No));
        assert_eq!(Answer::from_index(2), None);
        assert_eq!(Answer::Yes.index(), 0);
        assert_eq!(Answer::No.index(), 1);
        assert_eq!(Answer::default(), Answer::No);
    }

    #[test]
    fn test_answer_outcome() {
        assert_eq!(Answer::Yes.outcome(), Outcome::NotClear);
        assert_eq!(Answer::No.outcome(), Outcome::Clear);
        assert_eq!(Answer::Yes.toggled(), Answer::No);
    }

    #[test]
    fn test_default_survey_result() {
        let result = SurveyResult::default();
        assert!(result.is_clear);
        assert!(!result.has_submission());
        assert_eq!(result.outcome(), Outcome::Clear);
    }

    #[test]
    fn test_submitted_on() {
        let at = Utc.with_ymd_and_hms(2022, 5, 2, 9, 0, 0).unwrap();
        let result = SurveyResult::record(Outcome::NotClear, at);
        assert!(!result.is_clear);
        assert!(result.submitted_on(NaiveDate::from_ymd_opt(2022, 5, 2).unwrap(), &Utc));
        assert!(!result.submitted_on(NaiveDate::from_ymd_opt(2022, 5, 3).unwrap(), &Utc));
        assert!(!SurveyResult::default()
            .submitted_on(NaiveDate::from_ymd_opt(1, 1, 1).unwrap(), &Utc));
    }
}
