use crate::parser::Rule;
use dcpu::Word;
use pest::error::Error as PestError;
use std::fmt;
use std::num::ParseIntError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Pest(PestError<Rule>),
    ParseInt(ParseIntError),
    /// A `val` field does not fit in one word.
    CastInt(i64),
    /// A source line exceeds the line length limit.
    LineTooLong(usize),
    /// No header line survived the skip rules.
    MissingHeader,
    /// A record code with no mnemonic was met while disassembling.
    UnknownCode(Word),
}

impl From<PestError<Rule>> for Error {
    fn from(err: PestError<Rule>) -> Error {
        Error::Pest(err)
    }
}

impl From<ParseIntError> for Error {
    fn from(err: ParseIntError) -> Error {
        Error::ParseInt(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Pest(err) => write!(f, "{}", err),
            Error::ParseInt(err) => write!(f, "Parsing integer failed: {}", err),
            Error::CastInt(value) => write!(f, "Value {} does not fit in one word.", value),
            Error::LineTooLong(length) => {
                write!(f, "Line of {} bytes exceeds the line length limit.", length)
            }
            Error::MissingHeader => f.write_str("Input has no header line."),
            Error::UnknownCode(code) => write!(f, "Code {:#x} has no mnemonic.", code),
        }
    }
}

impl std::error::Error for Error {}
