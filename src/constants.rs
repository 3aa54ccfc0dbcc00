use super::Word;

/// Words per instruction record.
pub const RECORD_WORDS: Word = 4;

pub const REGISTER_COUNT: usize = 8;

/// Default RAM preset (words).
pub const EIGHT_BIT_MAX_MEM: Word = 256;
/// Large RAM preset (words).
pub const SIXTEEN_BIT_MAX_MEM: Word = 65535;

/// First word of the disk header record.
pub const HEADER_MAGIC: Word = 0x1;

/// `ERR` value recorded when an opcode, register or type fails to decode.
pub const SEGMENTATION_FAULT: Word = 0x15B3;

/// Code an unknown assembly token encodes to. The assembler does not reject
/// it; the processor faults on decode.
pub const UNKNOWN_TOKEN: Word = 0xFFFF_FFFF;

/// `INTL` code writing `RAM[A] .. RAM[A+B-1]` to the output as raw bytes.
pub const INT_STDOUT_CODE: Word = 0x01;
/// `INTL` code stopping the processor.
pub const INT_SYS_EXIT_CODE: Word = 0x02;
