use thiserror::Error;

/// Minimum number of characters (after trimming) a city query must have.
pub const MIN_QUERY_CHARS: usize = 2;

/// Why a raw city input was rejected before reaching the network.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("city name is empty")]
    EmptyInput,
    #[error("city name must be at least 2 characters")]
    TooShort,
}

impl ValidationError {
    /// The message shown to the user when input is rejected.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Please enter a city name.",
            ValidationError::TooShort => "City names need at least 2 characters.",
        }
    }
}

/// A validated city query: trimmed, non-empty, at least two characters.
///
/// Length counts characters, not bytes, so two-character multibyte names
/// pass. No case-folding or character-set restriction happens here; the
/// provider handles arbitrary city-name text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery(String);

impl CityQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if trimmed.chars().count() < MIN_QUERY_CHARS {
            return Err(ValidationError::TooShort);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CityQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
