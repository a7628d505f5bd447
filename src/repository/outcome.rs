use crate::data::DataError;

/// Result of one repository fetch, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure(DataError),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Human-readable failure reason, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err.to_string()),
        }
    }
}

impl<T> From<Result<T, DataError>> for Outcome<T> {
    fn from(result: Result<T, DataError>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err),
        }
    }
}
