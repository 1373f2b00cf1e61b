use std::{fmt, num::ParseFloatError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseHalfError {
    Empty,
    Float(ParseFloatError),
}

impl fmt::Display for ParseHalfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseHalfError::Empty => write!(f, "cannot parse half from empty string"),
            ParseHalfError::Float(err) => write!(f, "invalid half literal: {err}"),
        }
    }
}

impl std::error::Error for ParseHalfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseHalfError::Empty => None,
            ParseHalfError::Float(err) => Some(err),
        }
    }
}

impl From<ParseFloatError> for ParseHalfError {
    fn from(err: ParseFloatError) -> Self {
        ParseHalfError::Float(err)
    }
}
