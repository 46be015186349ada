use std::fmt;

/// Why a candidate file was refused by the upload form.
///
/// The `Display` text is the notice shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FileRejected {
    #[error("Please upload a PDF file")]
    InvalidType,
    #[error("File size must not exceed 50 MB")]
    TooLarge,
}

/// Returned by `submit` when required fields are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationError {
    pub missing_title: bool,
    pub missing_file: bool,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.missing_title, self.missing_file) {
            (true, true) => write!(f, "Please enter a title and select a PDF file"),
            (true, false) => write!(f, "Please enter a title"),
            (false, true) => write!(f, "Please select a PDF file"),
            (false, false) => write!(f, "Material is incomplete"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_notices() {
        assert_eq!(FileRejected::InvalidType.to_string(), "Please upload a PDF file");
        assert_eq!(
            FileRejected::TooLarge.to_string(),
            "File size must not exceed 50 MB"
        );
    }

    #[test]
    fn validation_message_names_missing_fields() {
        let err = ValidationError {
            missing_title: true,
            missing_file: false,
        };
        assert_eq!(err.to_string(), "Please enter a title");

        let err = ValidationError {
            missing_title: true,
            missing_file: true,
        };
        assert!(err.to_string().contains("title"));
        assert!(err.to_string().contains("PDF"));
    }
}
