use std::{error::Error, fmt};

/// Error produced when a token names no variant of one of the code tables.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ParseEnumError {
    pub value: String,
    pub enum_name: &'static str,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "No {} is named \"{}\".", self.enum_name, &self.value)
    }
}

impl Error for ParseEnumError {}

/// Conversion from an assembly token to an enum variant.
///
/// Tokens are the lowercase variant names.
pub trait TokenFromStr: Sized {
    fn from_token(s: &str) -> Result<Self, ParseEnumError>;
}

/// The assembly token naming an enum variant.
pub trait TokenName {
    fn token(&self) -> &'static str;
}
