pub mod constants;
mod instructions;
mod memory;
mod processor;
mod register;
mod tracer;


pub use crate::instructions::*;
pub use crate::memory::{AuxStack, Ram};
pub use crate::processor::{ExitCode, Processor};
pub use crate::register::RegisterFile;
pub use crate::tracer::Tracer;
pub use util::{ParseEnumError, TokenFromStr, TokenName};

/// The machine word. Registers, RAM cells, aux-stack cells and disk cells
/// all hold one of these.
pub type Word = u32;

/// Signed view of a word, used by comparisons and signed arithmetic.
pub type SWord = i32;
