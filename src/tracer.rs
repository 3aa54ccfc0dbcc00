use std::io::{self, Write};

use crate::{Processor, Record, RegisterId, Word};

/// Writes a state dump after every executed instruction.
///
/// Purely observational: the tracer reads the processor and never mutates
/// it. A fault line is added whenever `ERR` changed during the step.
pub struct Tracer<W: Write> {
    sink: W,
    last_err: Word,
}

impl<W: Write> Tracer<W> {
    pub fn new(sink: W) -> Tracer<W> {
        Tracer { sink, last_err: 0 }
    }

    /// Dumps the state after a step. `counter` is the instruction counter
    /// the executed record was fetched from.
    pub fn record(&mut self, processor: &Processor, counter: Word) -> io::Result<()> {
        let ram = processor.ram();
        let record = Record::from_words(&ram[counter as usize..]);
        let stack = processor.register(RegisterId::STACK) as usize;
        let err = processor.register(RegisterId::ERR);

        writeln!(self.sink, "Instruction Line: {}", record)?;
        writeln!(self.sink, "--------------")?;
        writeln!(
            self.sink,
            "General Purpose Registers: {} {} {} {}",
            processor.register(RegisterId::A),
            processor.register(RegisterId::B),
            processor.register(RegisterId::C),
            processor.register(RegisterId::D),
        )?;
        writeln!(
            self.sink,
            "Other Registers: {} {} {}",
            err,
            processor.register(RegisterId::STACK),
            processor.register(RegisterId::BASE),
        )?;
        writeln!(self.sink, "Special Registers: {}", processor.flag())?;
        writeln!(self.sink, "Instruction Counter: {}", processor.counter())?;
        writeln!(self.sink, "Stack: {:?}", &ram[..stack.min(ram.len())])?;
        writeln!(self.sink, "Special Memory: {:?}", processor.aux_used())?;
        if err != self.last_err {
            writeln!(self.sink, "fault: err={:#x}", err)?;
            self.last_err = err;
        }
        writeln!(self.sink, "--------------")?;
        Ok(())
    }
}
