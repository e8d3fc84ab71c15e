use thiserror::Error;

pub type Result<T = (), E = GrabError> = std::result::Result<T, E>;

/// Errors surfaced to the user via a blocking alert dialog.
#[derive(Error, Debug, Clone)]
pub enum GrabError {
    #[error("Enter a YouTube URL first")]
    EmptyInput,

    #[error("Invalid YouTube URL. Check that the URL is correct.")]
    InvalidUrl,

    #[error("Failed to fetch image: {0}")]
    FetchFailed(String),

    #[error("Failed to decode image: {0}")]
    DecodeFailed(String),

    #[error("Failed to save file: {0}")]
    SaveFailed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_user_facing() {
        assert_eq!(GrabError::EmptyInput.to_string(), "Enter a YouTube URL first");
        assert_eq!(
            GrabError::SaveFailed("disk full".into()).to_string(),
            "Failed to save file: disk full"
        );
    }
}
