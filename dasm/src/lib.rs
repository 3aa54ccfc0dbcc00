//! Assembler for the [dcpu](../dcpu/index.html) virtual processor.
//!
//! The main function provided by this crate is [`assemble`](fn.assemble.html),
//! which accepts a program written in the line-oriented dcpu assembly
//! language and outputs the encoded disk payload: the header record followed
//! by one 4-word record per statement. Writing the payload onto a disk image
//! is the [hddfile](../hddfile/index.html) crate's job; this crate never
//! seeks.
//!
//! Statement shape is validated using [pest]; token *spelling* is not:
//! an unknown mnemonic encodes to the all-ones sentinel and the processor
//! faults on it at run time.
//!
//! # Dcpu Assembly Language
//!
//! The first significant line is a header `<tag> <numLines>`; the tag is a
//! preprocessor artifact and is ignored. Every other significant line is a
//! statement of exactly four whitespace-separated tokens:
//!
//! ```text
//! <opcode> <reg> <type> <val>
//! ```
//!
//! where `val` is a decimal integer (optionally negative, stored in two's
//! complement). Lines starting with `/` and lines shorter than five bytes
//! counting the newline are skipped entirely.
//!
//! Quick reference of the mnemonics (see the [`dcpu`] tables for codes):
//!
//! Opcode   | Effect
//! ---------|------------------------------------------------------
//! `nop`    | Does nothing
//! `movl`   | reg = value
//! `stmovl` | RAM[value] = reg
//! `addl`   | reg += value
//! `subl`   | reg -= value
//! `imul`   | reg *= value
//! `idivl`  | reg /= value
//! `andl`   | reg &= value
//! `orl`    | reg \|= value
//! `xorl`   | reg ^= value
//! `shrw`   | reg >>= value
//! `shlw`   | reg <<= value
//! `cmpl`   | X = reg - value
//! `je`     | jump to line value iff X == 0
//! `jl`     | jump to line value iff X < 0
//! `jg`     | jump to line value iff X > 0
//! `jle`    | jump to line value iff X <= 0
//! `jge`    | jump to line value iff X >= 0
//! `jmp`    | jump to line value
//! `pushl`  | push value onto the aux stack
//! `popl`   | pop the aux stack into reg
//! `intl`   | interrupt: value 1 writes RAM[A..A+B] to stdout, 2 exits
//!
//! Registers: `nop a b c d err stack base`. Types: `nop int a b c d err
//! stack base` (a register type makes the operand `register + val`).
//!
//! [pest]: https://docs.rs/pest/

mod error;
mod parser;


use dcpu::{constants, encode_token, Opcode, OperandType, Record, RegisterId, SWord, TokenName, Word};
use num::FromPrimitive;
use parser::{DasmParser, Rule};
use pest::Parser;

pub use crate::error::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Longest meaningful source line in bytes.
pub const MAX_LINE_BYTES: usize = 1000;

/// Assembles a program into its disk payload.
///
/// The payload starts with the header record `[0x1, numLines, 0, 0]` taken
/// from the header line, followed by one record per statement, each word
/// destined for an 8-hex-digit disk field.
pub fn assemble(input: &str) -> Result<Vec<Word>> {
    let mut lines = significant_lines(input);

    let header = lines.next().ok_or(Error::MissingHeader)?;
    let num_lines = parse_header(header)?;

    let mut image = vec![constants::HEADER_MAGIC, num_lines, 0, 0];
    for line in lines {
        let record = parse_statement(line)?;
        image.extend_from_slice(&record.to_words());
    }
    Ok(image)
}

/// Renders a disk payload back into assembly source.
///
/// Only the `numLines` records announced by the header are rendered. Records
/// whose codes have no mnemonic cannot be printed and yield
/// [`Error::UnknownCode`](enum.Error.html#variant.UnknownCode).
pub fn disassemble(image: &[Word]) -> Result<String> {
    if image.len() < constants::RECORD_WORDS as usize {
        return Err(Error::MissingHeader);
    }
    let num_lines = image[1];

    let mut text = format!("dasm {}\n", num_lines);
    let records = image[constants::RECORD_WORDS as usize..]
        .chunks_exact(constants::RECORD_WORDS as usize)
        .take(num_lines as usize);
    for words in records {
        let record = Record::from_words(words);
        text.push_str(&format!(
            "{} {} {} {}\n",
            decode::<Opcode>(record.opcode)?.token(),
            decode::<RegisterId>(record.reg)?.token(),
            decode::<OperandType>(record.ty)?.token(),
            record.val,
        ));
    }
    Ok(text)
}

/// Lines that survive the skip rules: no `/` comments, nothing shorter than
/// five bytes counting the newline the reader consumed.
fn significant_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .lines()
        .filter(|line| !line.starts_with('/') && line.len() >= 4)
}

fn parse_header(line: &str) -> Result<Word> {
    check_length(line)?;
    let pair = DasmParser::parse(Rule::header, line)?.next().unwrap();
    let mut pairs = pair.into_inner();
    pairs.next().unwrap(); // preprocessor tag, ignored
    parse_val(pairs.next().unwrap().as_str())
}

fn parse_statement(line: &str) -> Result<Record> {
    check_length(line)?;
    let pair = DasmParser::parse(Rule::statement, line)?.next().unwrap();
    let mut pairs = pair.into_inner();

    let opcode = encode_token::<Opcode>(pairs.next().unwrap().as_str());
    let reg = encode_token::<RegisterId>(pairs.next().unwrap().as_str());
    let ty = encode_token::<OperandType>(pairs.next().unwrap().as_str());
    let val = parse_val(pairs.next().unwrap().as_str())?;

    Ok(Record::new(opcode, reg, ty, val))
}

fn parse_val(field: &str) -> Result<Word> {
    let value = field.parse::<i64>()?;
    if value < i64::from(SWord::min_value()) || value > i64::from(Word::max_value()) {
        return Err(Error::CastInt(value));
    }
    Ok(value as Word)
}

fn check_length(line: &str) -> Result<()> {
    if line.len() > MAX_LINE_BYTES {
        Err(Error::LineTooLong(line.len()))
    } else {
        Ok(())
    }
}

fn decode<T: FromPrimitive>(code: Word) -> Result<T> {
    T::from_u32(code).ok_or(Error::UnknownCode(code))
}
