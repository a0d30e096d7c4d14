use std::fmt::{self, Display};

/// Provides `MeetupError` and maps other errors to
/// convert to a `MeetupError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum MeetupError {
    /// A condition name outside the closed condition set, rejected when an
    /// agent is constructed from text.
    UnknownCondition(String),
    MeetupError(String),
}

impl From<String> for MeetupError {
    fn from(error: String) -> Self {
        MeetupError::MeetupError(error)
    }
}

impl From<&str> for MeetupError {
    fn from(error: &str) -> Self {
        MeetupError::MeetupError(error.to_string())
    }
}

impl std::error::Error for MeetupError {}

impl Display for MeetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
