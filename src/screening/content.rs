//! Text content of the screening screens.
//!
//! Content is built as lines of toned segments so the terminal renderer and
//! the image export draw exactly the same thing.

use super::date::ScreenDate;
use super::links::ExternalLink;
use super::profile::{Profile, HEALTH_CENTER_EMAIL};
use super::survey::Outcome;

const QUESTION: &str = "Are any of the following true for you?";

const CLOSE_CONTACT_NOTE: &str = "Close contact means that you have been within six feet of a COVID-19 positive individual for at least 15 minutes cumulative within a 24 hour period.";

const NOT_CLEAR_INSTRUCTIONS: &str = "Please go to the Official Daily COVID Screening Chapman email for today's date and fill out the form, so that Chapman's Health Center can help assist you further in what needs to be done.";

const PROFILE_INCOMPLETE_NOTICE: &str = "I'm sorry, but please make sure to have your profile fully filled out before having your screening ready";

/// Specifying how a segment is presented.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Strong,
    Italic,
    Clear,
    NotClear,
    Warning,
    Contact,
    Link(ExternalLink),
}

/// A run of text sharing one tone.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub tone: Tone,
}

impl Segment {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Segment {
            text: text.into(),
            tone,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }
}

pub type ContentLine = Vec<Segment>;

/// Everything a screen displays besides its chrome.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenContent {
    pub title: &'static str,
    pub lines: Vec<ContentLine>,
}

impl ScreenContent {
    /// Content flattened to text, one line per content line.
    ///
    pub fn plain_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// First line of the content.
    ///
    pub fn headline(&self) -> String {
        self.lines
            .first()
            .map(|line| line.iter().map(|s| s.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Links shown on the screen, in display order.
    ///
    pub fn links(&self) -> Vec<ExternalLink> {
        let mut links = vec![];
        for segment in self.lines.iter().flatten() {
            if let Tone::Link(link) = segment.tone {
                if !links.contains(&link) {
                    links.push(link);
                }
            }
        }
        links
    }
}

/// Headline sentence for a submitted screening.
///
pub fn headline(profile: &Profile, outcome: Outcome, date: &ScreenDate) -> String {
    headline_line(profile, outcome, date)
        .iter()
        .map(|s| s.text.as_str())
        .collect()
}

fn headline_line(profile: &Profile, outcome: Outcome, date: &ScreenDate) -> ContentLine {
    let (lead, verdict, tone) = match outcome {
        Outcome::Clear => ("has a", "CLEAR", Tone::Clear),
        Outcome::NotClear => ("is", "NOT CLEAR", Tone::NotClear),
    };
    vec![
        Segment::plain(format!("{} {} ", profile.full_name(), lead)),
        Segment::new(verdict, tone),
        Segment::plain(format!(" COVID Daily Health Screen for {}.", date)),
    ]
}

/// Symptom questions shown above the answer picker.
///
pub fn screening_questions() -> ScreenContent {
    ScreenContent {
        title: "Daily COVID Screening",
        lines: vec![
            vec![Segment::new(QUESTION, Tone::Strong)],
            vec![],
            vec![
                Segment::new("1.", Tone::Strong),
                Segment::plain(" I am sick with "),
                Segment::new("COVID-19 symptoms", Tone::Link(ExternalLink::CdcSymptoms)),
            ],
            vec![
                Segment::new("2.", Tone::Strong),
                Segment::plain(
                    " I have been notified that I am COVID-19 positive or have come in close",
                ),
                Segment::new("*", Tone::Strong),
                Segment::plain(
                    " contact with someone who has or is suspected of having COVID-19",
                ),
            ],
            vec![
                Segment::new("3.", Tone::Strong),
                Segment::plain(" I have a "),
                Segment::new("temperature", Tone::Link(ExternalLink::CdcReportableIllness)),
                Segment::plain(" of 100.4 degrees F (or 38 C) or greater"),
            ],
            vec![],
            vec![
                Segment::new("*", Tone::Strong),
                Segment::plain(CLOSE_CONTACT_NOTE),
            ],
        ],
    }
}

/// Content of the CLEAR result screen.
///
pub fn clear_screen(profile: &Profile, date: &ScreenDate) -> ScreenContent {
    ScreenContent {
        title: "Screening Result",
        lines: vec![
            headline_line(profile, Outcome::Clear, date),
            vec![],
            vec![Segment::new(
                "Been vaccinated? Register here.",
                Tone::Link(ExternalLink::VaccinationRegistration),
            )],
            vec![
                Segment::plain("Resources for "),
                Segment::new(
                    "COVID-19 Vaccinations",
                    Tone::Link(ExternalLink::VaccinationResources),
                ),
            ],
            vec![],
            vec![Segment::plain(
                "To access a Chapman campus, ensure the following are also completed:",
            )],
            vec![Segment::plain(
                "    • COVID-19 Safety Training via Canvas (staff, faculty, and student employees only)",
            )],
            vec![Segment::plain(
                "    • COVID-19 Test (all who are not vaccinated)",
            )],
        ],
    }
}

/// Content of the NOT CLEAR result screen.
///
pub fn not_clear_screen(profile: &Profile, date: &ScreenDate) -> ScreenContent {
    ScreenContent {
        title: "Screening Result",
        lines: vec![
            headline_line(profile, Outcome::NotClear, date),
            vec![],
            vec![Segment::new(NOT_CLEAR_INSTRUCTIONS, Tone::Italic)],
            vec![],
            vec![
                Segment::new(
                    format!(
                        "If you need further assistance, please email {} via your Chapman email address: ",
                        HEALTH_CENTER_EMAIL
                    ),
                    Tone::Italic,
                ),
                Segment::new(profile.contact_address(), Tone::Contact),
            ],
        ],
    }
}

/// Result screen matching the outcome.
///
pub fn result_screen(profile: &Profile, outcome: Outcome, date: &ScreenDate) -> ScreenContent {
    match outcome {
        Outcome::Clear => clear_screen(profile, date),
        Outcome::NotClear => not_clear_screen(profile, date),
    }
}

/// Content of the guard shown when the profile was emptied after a screening.
///
pub fn profile_incomplete_screen() -> ScreenContent {
    ScreenContent {
        title: "Profile Incomplete",
        lines: vec![vec![Segment::new(PROFILE_INCOMPLETE_NOTICE, Tone::Warning)]],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn date() -> ScreenDate {
        ScreenDate::from_timestamp(&Utc.with_ymd_and_hms(2022, 5, 2, 9, 0, 0).unwrap())
    }

    fn jane() -> Profile {
        Profile::new("Jane", "Doe", "jdoe")
    }

    #[test]
    fn test_clear_headline() {
        let content = clear_screen(&jane(), &date());
        assert_eq!(
            content.headline(),
            "Jane Doe has a CLEAR COVID Daily Health Screen for Monday, May 2nd."
        );
        assert_eq!(content.headline(), headline(&jane(), Outcome::Clear, &date()));
    }

    #[test]
    fn test_not_clear_headline_and_contact() {
        let content = not_clear_screen(&jane(), &date());
        assert_eq!(
            content.headline(),
            "Jane Doe is NOT CLEAR COVID Daily Health Screen for Monday, May 2nd."
        );
        let text = content.plain_text();
        assert!(text.contains("jdoe@chapman.edu"));
        assert!(text.contains("healthypanther@chapman.edu"));
        assert!(content.links().is_empty());
    }

    #[test]
    fn test_clear_links() {
        let content = clear_screen(&jane(), &date());
        assert_eq!(
            content.links(),
            vec![
                ExternalLink::VaccinationRegistration,
                ExternalLink::VaccinationResources
            ]
        );
    }

    #[test]
    fn test_questions_links() {
        let content = screening_questions();
        assert_eq!(
            content.links(),
            vec![ExternalLink::CdcSymptoms, ExternalLink::CdcReportableIllness]
        );
        assert!(content.plain_text().contains("100.4 degrees F"));
    }

    #[test]
    fn test_result_screen_dispatch() {
        assert_eq!(
            result_screen(&jane(), Outcome::Clear, &date()),
            clear_screen(&jane(), &date())
        );
        assert_eq!(
            result_screen(&jane(), Outcome::NotClear, &date()),
            not_clear_screen(&jane(), &date())
        );
    }

    #[test]
    fn test_profile_incomplete_screen() {
        let content = profile_incomplete_screen();
        assert!(content.plain_text().contains("profile fully filled out"));
        assert!(content.links().is_empty());
    }
}
