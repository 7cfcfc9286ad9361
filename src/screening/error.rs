//! Screening form-specific error types.

/// Errors returned when the form is driven outside its allowed transitions.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    /// Submission attempted without first name, last name and email
    #[error("Profile is incomplete")]
    ProfileIncomplete,

    /// The form was already submitted in this session
    #[error("Screening already submitted")]
    AlreadySubmitted,

    /// Answer index outside the picker
    #[error("Invalid answer selection: {0}")]
    InvalidSelection(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screening_error_display() {
        let error = ScreeningError::ProfileIncomplete;
        assert!(error.to_string().contains("incomplete"));

        let error = ScreeningError::AlreadySubmitted;
        assert!(error.to_string().contains("already submitted"));

        let error = ScreeningError::InvalidSelection(5);
        assert!(error.to_string().contains("5"));
    }
}
