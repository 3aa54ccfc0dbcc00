use crate::{constants, Word};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::ToPrimitive;
use std::fmt;
use util::{TokenFromStr, TokenName};
use util_derive::{TokenFromStr, TokenName};

/// Instruction set of the processor.
///
/// Every instruction occupies one 4-word record `[opcode, reg, type, val]`.
/// `reg` names the destination (or source, for stores) register, `type`
/// selects how `val` becomes the operand value (see
/// [`OperandType`](enum.OperandType.html)).
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive, TokenFromStr, TokenName,
)]
pub enum Opcode {
    //  Mnemonic      | Effect
    //----------------+------------------------------------------------------
    NOP = 0x00,    // | Does nothing
    MOVL = 0x01,   // | reg = value
    STMOVL = 0x02, // | RAM[value] = reg; faults when value is out of range
    ADDL = 0x03,   // | reg += value
    SUBL = 0x04,   // | reg -= value
    IMUL = 0x05,   // | reg *= value
    IDIVL = 0x06,  // | reg /= value; faults when value is zero
    ANDL = 0x07,   // | reg &= value
    ORL = 0x08,    // | reg |= value
    XORL = 0x09,   // | reg ^= value
    SHRW = 0x0A,   // | reg >>= value (logical)
    SHLW = 0x0B,   // | reg <<= value (logical)
    CMPL = 0x0C,   // | X = reg - value (signed)
    JE = 0x0D,     // | Jump to line value iff X == 0
    JL = 0x0E,     // | Jump to line value iff X < 0
    JG = 0x0F,     // | Jump to line value iff X > 0
    JLE = 0x10,    // | Jump to line value iff X <= 0
    JGE = 0x11,    // | Jump to line value iff X >= 0
    JMP = 0x12,    // | Jump to line value
    // 0x13 is unassigned
    PUSHL = 0x14,  // | Push value onto the aux stack
    POPL = 0x15,   // | Pop the aux stack into reg
    INTL = 0x16,   // | Software interrupt selected by value
}

/// List of addressable registers.
///
/// The `X` compare flag is not part of this list; it cannot be named by an
/// instruction.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive, TokenFromStr, TokenName,
)]
pub enum RegisterId {
    /// Reads as zero; writes are legal but have no effect.
    NOP = 0x00,
    A = 0x01,
    B = 0x02,
    C = 0x03,
    D = 0x04,
    /// Fault code of the most recent faulting instruction; zero when clean.
    ERR = 0x05,
    /// Index of the next free RAM slot; advanced by the loader.
    STACK = 0x06,
    /// Frame base; never touched by the processor itself.
    BASE = 0x07,
}

/// Addressing modes for the `val` field of a record.
///
/// Register types are additive, not dereferencing: type `a` with `val = 4`
/// yields `A + 4`.
#[derive(
    Clone, Copy, PartialEq, Eq, Debug, ToPrimitive, FromPrimitive, TokenFromStr, TokenName,
)]
pub enum OperandType {
    /// Operand is zero regardless of `val`.
    NOP = 0x00,
    /// Operand is `val` itself.
    INT = 0x01,
    A = 0x02,
    B = 0x03,
    C = 0x04,
    D = 0x05,
    ERR = 0x06,
    STACK = 0x07,
    BASE = 0x08,
}

#[inline]
pub fn enum_to_word<T: ToPrimitive + Copy>(val: T) -> Word {
    val.to_u32().unwrap()
}

macro_rules! impl_enum_display {
    ($e:ty) => {
        impl fmt::Display for $e {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.token())
            }
        }
    };
}

impl_enum_display!(Opcode);
impl_enum_display!(RegisterId);
impl_enum_display!(OperandType);

#[inline]
pub fn register_index(id: RegisterId) -> usize {
    enum_to_word(id) as usize
}

/// Encodes an assembly token through one of the three code tables.
///
/// Unknown tokens become [`UNKNOWN_TOKEN`](constants/constant.UNKNOWN_TOKEN.html).
pub fn encode_token<T: TokenFromStr + ToPrimitive + Copy>(token: &str) -> Word {
    match T::from_token(token) {
        Ok(value) => enum_to_word(value),
        Err(_) => constants::UNKNOWN_TOKEN,
    }
}

/// One instruction record: four consecutive words on disk and in RAM.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Record {
    pub opcode: Word,
    pub reg: Word,
    pub ty: Word,
    pub val: Word,
}

impl Record {
    pub fn new(opcode: Word, reg: Word, ty: Word, val: Word) -> Record {
        Record {
            opcode,
            reg,
            ty,
            val,
        }
    }

    /// Reads a record from the first four words of `words`.
    ///
    /// # Panics
    /// Panics if `words` holds fewer than four words.
    pub fn from_words(words: &[Word]) -> Record {
        Record::new(words[0], words[1], words[2], words[3])
    }

    pub fn to_words(self) -> [Word; 4] {
        [self.opcode, self.reg, self.ty, self.val]
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.opcode, self.reg, self.ty, self.val)
    }
}

/// Constructs a record from enum fields.
#[inline]
pub fn make_record(oc: Opcode, reg: RegisterId, ty: OperandType, val: Word) -> Record {
    Record::new(
        enum_to_word(oc),
        enum_to_word(reg),
        enum_to_word(ty),
        val,
    )
}

/// Constructs a record from enum field names.
#[macro_export]
macro_rules! record {
    ($opcode:ident, $reg:ident, $ty:ident, $val:expr) => {
        make_record(
            Opcode::$opcode,
            RegisterId::$reg,
            OperandType::$ty,
            ($val) as i64 as Word,
        )
    };
}

/// Constructs a loadable image: header record followed by the instruction
/// records.
pub fn image_from_records(records: &[Record]) -> Vec<Word> {
    let mut words = Vec::with_capacity((records.len() + 1) * constants::RECORD_WORDS as usize);
    words.extend_from_slice(&[constants::HEADER_MAGIC, records.len() as Word, 0, 0]);
    for record in records {
        words.extend_from_slice(&record.to_words());
    }
    words
}
