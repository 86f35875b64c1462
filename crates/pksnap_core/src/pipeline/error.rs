use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractErrorCode {
    /// The save buffer could not be decoded into a session at all.
    Load,
    /// A load-bearing fragment (trainer info, game info, a creature
    /// summary pass) could not be obtained.
    Structural,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractError {
    pub code: ExtractErrorCode,
    pub message: String,
}

impl ExtractError {
    pub fn new(code: ExtractErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::Load, message)
    }

    pub fn structural(message: impl Into<String>) -> Self {
        Self::new(ExtractErrorCode::Structural, message)
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for ExtractError {}
