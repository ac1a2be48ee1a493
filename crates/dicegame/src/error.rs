use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid dice: count={count}, sides={sides} (both must be at least 1)")]
    InvalidDice { count: u32, sides: u32 },

    #[error("Invalid dice count: {0} (a round needs at least one die)")]
    InvalidDiceCount(u32),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Input closed before a valid answer was given")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let other_io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err2 = Error::Io(other_io_err);
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_invalid_dice_message() {
        let err = Error::InvalidDice { count: 0, sides: 6 };
        assert_eq!(
            err.to_string(),
            "Invalid dice: count=0, sides=6 (both must be at least 1)"
        );
    }
}
