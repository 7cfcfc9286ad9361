/// Domain appended to the stored email handle when showing a contact address.
///
pub const CONTACT_DOMAIN: &str = "chapman.edu";

/// Health center address shown on the not-clear screen.
///
pub const HEALTH_CENTER_EMAIL: &str = "healthypanther@chapman.edu";

/// Identity fields used to personalize screening output.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Profile {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Profile {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    /// Whether every field required for a screening is filled in.
    ///
    pub fn is_complete(&self) -> bool {
        !self.first_name.is_empty() && !self.last_name.is_empty() && !self.email.is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Campus address derived from the stored email handle.
    ///
    pub fn contact_address(&self) -> String {
        format!("{}@{}", self.email, CONTACT_DOMAIN)
    }
}
