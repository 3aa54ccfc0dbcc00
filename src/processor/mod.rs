mod loader;
mod logic;

use std::io::Write;

use self::logic::TickResult;
use crate::memory::{AuxStack, Ram};
use crate::register::RegisterFile;
use crate::{constants, Record, RegisterId, SWord, Word};

/// Reasons for leaving the run loop.
///
/// Faults never stop execution; they only set `ERR`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExitCode {
    Halted,       // The sys-exit interrupt was executed (normal shutdown)
    Terminated,   // The output sink failed mid-interrupt
    BadJump,      // The instruction counter left RAM
    EmptyProgram, // Run was called without a loaded program
}

/// The virtual processor: register file, compare flag, instruction counter,
/// RAM and the auxiliary push/pop stack.
pub struct Processor {
    registers: RegisterFile,
    flag: SWord,
    counter: Word,
    ram: Ram,
    aux: AuxStack,
    lines: Word,
}

impl Processor {
    /// Constructs a processor with `stack_size` words of RAM and an aux
    /// stack of half that size.
    pub fn new(stack_size: Word) -> Processor {
        Processor {
            registers: RegisterFile::new(),
            flag: 0,
            counter: 0,
            ram: Ram::new(stack_size),
            aux: AuxStack::new(stack_size / 2),
            lines: 0,
        }
    }

    /// Copies a program image (header record first) into the low end of RAM
    /// and advances `STACK` past it.
    ///
    /// Returns the `ERR` value after loading; an out-of-range store while
    /// loading faults and continues, and a truncated image stops early.
    pub fn load(&mut self, image: &[Word]) -> Word {
        loader::load(self, image)
    }

    /// Executes one instruction. Returns `None` while the processor keeps
    /// running.
    pub fn step<W: Write>(&mut self, output: &mut W) -> Option<ExitCode> {
        let record = match self.fetch() {
            Some(record) => record,
            None => {
                self.registers.fault(constants::SEGMENTATION_FAULT);
                return Some(ExitCode::BadJump);
            }
        };

        let result = logic::execute(
            &mut self.registers,
            &mut self.ram,
            &mut self.aux,
            &mut self.flag,
            record,
            output,
        );

        match result {
            TickResult::Next => {
                self.counter = self.counter.wrapping_add(constants::RECORD_WORDS);
                None
            }
            TickResult::Jump(target) => {
                self.counter = target;
                None
            }
            TickResult::Stop(exit_code) => Some(exit_code),
        }
    }

    /// Runs until the program exits.
    pub fn run<W: Write>(&mut self, output: &mut W) -> ExitCode {
        if self.lines == 0 {
            return ExitCode::EmptyProgram;
        }

        loop {
            if let Some(exit_code) = self.step(output) {
                return exit_code;
            }
        }
    }

    fn fetch(&self) -> Option<Record> {
        let start = self.counter;
        let end = start.checked_add(constants::RECORD_WORDS)?;
        if end > self.ram.size() {
            return None;
        }
        Some(Record::from_words(&self.ram.words()[start as usize..]))
    }

    pub fn register(&self, id: RegisterId) -> Word {
        self.registers.read(id)
    }

    /// The `X` compare flag, set by `CMPL`.
    pub fn flag(&self) -> SWord {
        self.flag
    }

    /// The instruction counter: RAM index of the next opcode word.
    pub fn counter(&self) -> Word {
        self.counter
    }

    /// Instruction records loaded by the most recent [`load`](#method.load).
    pub fn lines(&self) -> Word {
        self.lines
    }

    pub fn ram(&self) -> &[Word] {
        self.ram.words()
    }

    pub fn aux_counter(&self) -> i64 {
        self.aux.counter()
    }

    /// The occupied prefix of the aux stack.
    pub fn aux_used(&self) -> &[Word] {
        self.aux.used()
    }
}
