//! External reference pages and the capability used to open them.

use log::*;

/// Specifying the fixed pages linked from the screening screens.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    VaccinationRegistration,
    VaccinationResources,
    CdcSymptoms,
    CdcReportableIllness,
}

impl ExternalLink {
    pub fn url(self) -> &'static str {
        match self {
            ExternalLink::VaccinationRegistration => "https://web.chapman.edu/covid19vaccination",
            ExternalLink::VaccinationResources => {
                "https://cusafelyback.chapman.edu/covid-19-vaccination/"
            }
            ExternalLink::CdcSymptoms => {
                "https://www.cdc.gov/coronavirus/2019-ncov/symptoms-testing/symptoms.html"
            }
            ExternalLink::CdcReportableIllness => {
                "https://www.cdc.gov/quarantine/air/reporting-deaths-illness/definitions-symptoms-reportable-illnesses.html"
            }
        }
    }

    /// Key that opens the link wherever it is shown.
    ///
    pub fn hotkey(self) -> char {
        match self {
            ExternalLink::VaccinationRegistration => 'r',
            ExternalLink::VaccinationResources => 'v',
            ExternalLink::CdcSymptoms => '1',
            ExternalLink::CdcReportableIllness => '3',
        }
    }
}

/// Opens external pages outside the application.
///
pub trait Browser {
    fn open_external(&self, url: &str);
}

/// Browser backed by the desktop's default URL handler.
///
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open_external(&self, url: &str) {
        debug!("Opening external link {}...", url);
        match open::that(url) {
            Ok(()) => info!("Opened {} in the default browser", url),
            Err(e) => warn!("Failed to open {}: {}", url, e),
        }
    }
}
