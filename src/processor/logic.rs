use std::io::Write;

use num::FromPrimitive;

use super::ExitCode;
use crate::memory::{AuxStack, Ram};
use crate::register::RegisterFile;
use crate::{constants, enum_to_word, Opcode, OperandType, Record, RegisterId, SWord, Word};

pub(crate) enum TickResult {
    Next,
    Jump(Word),
    Stop(ExitCode),
}

/// Decodes and executes one fetched record.
pub(crate) fn execute<W: Write>(
    registers: &mut RegisterFile,
    ram: &mut Ram,
    aux: &mut AuxStack,
    flag: &mut SWord,
    record: Record,
    output: &mut W,
) -> TickResult {
    let dest = registers.resolve(record.reg);
    let value = resolve_value(registers, record.ty, record.val);

    let opcode = match Opcode::from_u32(record.opcode) {
        Some(opcode) => opcode,
        None => {
            registers.fault(constants::SEGMENTATION_FAULT);
            return TickResult::Next;
        }
    };

    match opcode {
        Opcode::NOP => {}

        Opcode::MOVL => {
            registers.write(dest, value);
        }

        Opcode::STMOVL => {
            store(registers, ram, dest, value);
        }

        Opcode::ADDL => {
            let reg = registers.read(dest);
            registers.write(dest, reg.wrapping_add(value));
        }

        Opcode::SUBL => {
            let reg = registers.read(dest);
            registers.write(dest, reg.wrapping_sub(value));
        }

        Opcode::IMUL => {
            let reg = registers.read(dest);
            registers.write(dest, reg.wrapping_mul(value));
        }

        Opcode::IDIVL => {
            if value == 0 {
                registers.fault(enum_to_word(Opcode::IDIVL));
            } else {
                let reg = registers.read(dest) as SWord;
                registers.write(dest, reg.wrapping_div(value as SWord) as Word);
            }
        }

        Opcode::ANDL => {
            let reg = registers.read(dest);
            registers.write(dest, reg & value);
        }

        Opcode::ORL => {
            let reg = registers.read(dest);
            registers.write(dest, reg | value);
        }

        Opcode::XORL => {
            let reg = registers.read(dest);
            registers.write(dest, reg ^ value);
        }

        Opcode::SHRW => {
            let reg = registers.read(dest);
            registers.write(dest, reg.checked_shr(value).unwrap_or(0));
        }

        Opcode::SHLW => {
            let reg = registers.read(dest);
            registers.write(dest, reg.checked_shl(value).unwrap_or(0));
        }

        Opcode::CMPL => {
            *flag = (registers.read(dest) as SWord).wrapping_sub(value as SWord);
        }

        Opcode::JE => {
            if *flag == 0 {
                return TickResult::Jump(line_target(value));
            }
        }

        Opcode::JL => {
            if *flag < 0 {
                return TickResult::Jump(line_target(value));
            }
        }

        Opcode::JG => {
            if *flag > 0 {
                return TickResult::Jump(line_target(value));
            }
        }

        Opcode::JLE => {
            if *flag <= 0 {
                return TickResult::Jump(line_target(value));
            }
        }

        Opcode::JGE => {
            if *flag >= 0 {
                return TickResult::Jump(line_target(value));
            }
        }

        Opcode::JMP => {
            return TickResult::Jump(line_target(value));
        }

        Opcode::PUSHL => {
            if aux.push(value).is_err() {
                registers.fault(enum_to_word(Opcode::PUSHL));
            }
        }

        Opcode::POPL => match aux.pop() {
            Ok(popped) => registers.write(dest, popped),
            Err(()) => registers.fault(enum_to_word(Opcode::POPL)),
        },

        Opcode::INTL => {
            return interrupt(registers, ram, value, output);
        }
    }

    TickResult::Next
}

/// Resolves the `type`/`val` pair to an operand value.
///
/// Register types add `val` to the named register. An unknown type records
/// a segmentation fault and resolves to the fault code.
fn resolve_value(registers: &mut RegisterFile, ty: Word, val: Word) -> Word {
    let reg = match OperandType::from_u32(ty) {
        Some(OperandType::NOP) => return 0,
        Some(OperandType::INT) => return val,
        Some(OperandType::A) => RegisterId::A,
        Some(OperandType::B) => RegisterId::B,
        Some(OperandType::C) => RegisterId::C,
        Some(OperandType::D) => RegisterId::D,
        Some(OperandType::ERR) => RegisterId::ERR,
        Some(OperandType::STACK) => RegisterId::STACK,
        Some(OperandType::BASE) => RegisterId::BASE,
        None => {
            registers.fault(constants::SEGMENTATION_FAULT);
            return constants::SEGMENTATION_FAULT;
        }
    };
    registers.read(reg).wrapping_add(val)
}

/// Branch targets are one-based source lines.
fn line_target(value: Word) -> Word {
    value.wrapping_sub(1).wrapping_mul(constants::RECORD_WORDS)
}

/// Bounds-checked RAM store; also the loader's append primitive.
pub(crate) fn store(registers: &mut RegisterFile, ram: &mut Ram, src: RegisterId, index: Word) {
    let value = registers.read(src);
    if ram.write(index, value).is_err() {
        registers.fault(enum_to_word(Opcode::STMOVL));
    }
}

fn interrupt<W: Write>(
    registers: &mut RegisterFile,
    ram: &Ram,
    code: Word,
    output: &mut W,
) -> TickResult {
    match code {
        constants::INT_STDOUT_CODE => {
            let start = registers.read(RegisterId::A);
            let count = registers.read(RegisterId::B);
            for i in 0..count {
                let word = match ram.read(start.wrapping_add(i)) {
                    Ok(word) => word,
                    Err(()) => {
                        registers.fault(enum_to_word(Opcode::INTL));
                        break;
                    }
                };
                if output.write_all(&[word as u8]).is_err() {
                    return TickResult::Stop(ExitCode::Terminated);
                }
            }
            TickResult::Next
        }
        constants::INT_SYS_EXIT_CODE => TickResult::Stop(ExitCode::Halted),
        _ => {
            registers.fault(enum_to_word(Opcode::INTL));
            TickResult::Next
        }
    }
}
