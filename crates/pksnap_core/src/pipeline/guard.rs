use crate::oracle::FieldResult;

use super::error::ExtractError;

/// Uniform outcome of one guarded oracle query.
///
/// Softness is a declared contract: a `Failed` outcome never propagates
/// as an error by itself. Callers either substitute a default or promote
/// it with [`required`].
///
/// [`required`]: FieldOutcome::required
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome<T> {
    Ok(T),
    Failed(String),
}

/// Run one oracle query and normalize any failure into `Failed`.
pub fn guard<T>(field: &'static str, query: impl FnOnce() -> FieldResult<T>) -> FieldOutcome<T> {
    match query() {
        Ok(value) => FieldOutcome::Ok(value),
        Err(e) => {
            tracing::debug!(field, reason = %e, "field query failed");
            FieldOutcome::Failed(e.message)
        }
    }
}

impl<T> FieldOutcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Failed(_) => fallback,
        }
    }

    pub fn or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or(T::default())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldOutcome<U> {
        match self {
            Self::Ok(value) => FieldOutcome::Ok(f(value)),
            Self::Failed(reason) => FieldOutcome::Failed(reason),
        }
    }

    /// Promote a failure on a load-bearing fragment to a structural error.
    pub fn required(self, what: &str) -> Result<T, ExtractError> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Failed(reason) => Err(ExtractError::structural(format!("{what}: {reason}"))),
        }
    }
}
