//! Profile editor form state.
//!
//! The editor works on a copy of the profile; nothing is written back until
//! the user saves.

use crate::screening::Profile;

/// Specifying the profile editor fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

impl ProfileField {
    pub const ALL: [ProfileField; 3] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::FirstName => "First Name",
            ProfileField::LastName => "Last Name",
            ProfileField::Email => "Chapman Email (without @chapman.edu)",
        }
    }

    pub fn next(&self) -> ProfileField {
        match self {
            ProfileField::FirstName => ProfileField::LastName,
            ProfileField::LastName => ProfileField::Email,
            ProfileField::Email => ProfileField::FirstName,
        }
    }

    pub fn previous(&self) -> ProfileField {
        match self {
            ProfileField::FirstName => ProfileField::Email,
            ProfileField::LastName => ProfileField::FirstName,
            ProfileField::Email => ProfileField::LastName,
        }
    }
}

/// Draft profile being edited.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEditor {
    draft: Profile,
    focus: ProfileField,
}

impl ProfileEditor {
    pub fn new(profile: &Profile) -> Self {
        ProfileEditor {
            draft: profile.clone(),
            focus: ProfileField::FirstName,
        }
    }

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    pub fn focus(&self) -> ProfileField {
        self.focus
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.draft.first_name,
            ProfileField::LastName => &self.draft.last_name,
            ProfileField::Email => &self.draft.email,
        }
    }

    fn value_mut(&mut self) -> &mut String {
        match self.focus {
            ProfileField::FirstName => &mut self.draft.first_name,
            ProfileField::LastName => &mut self.draft.last_name,
            ProfileField::Email => &mut self.draft.email,
        }
    }

    pub fn next_field(&mut self) -> &mut Self {
        self.focus = self.focus.next();
        self
    }

    pub fn previous_field(&mut self) -> &mut Self {
        self.focus = self.focus.previous();
        self
    }

    pub fn add_char(&mut self, c: char) -> &mut Self {
        if !c.is_control() {
            self.value_mut().push(c);
        }
        self
    }

    pub fn backspace(&mut self) -> &mut Self {
        self.value_mut().pop();
        self
    }

    /// Empty the focused field.
    ///
    pub fn clear_field(&mut self) -> &mut Self {
        self.value_mut().clear();
        self
    }

    /// Draft with surrounding whitespace removed, ready to be stored.
    ///
    pub fn finish(&self) -> Profile {
        Profile::new(
            self.draft.first_name.trim(),
            self.draft.last_name.trim(),
            self.draft.email.trim(),
        )
    }
}
