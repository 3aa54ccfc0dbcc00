//! Runner gluing the toolchain together: assemble a source file, flash it
//! onto a disk image, read the image back, load it into RAM and run it.


use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use dcpu::{constants, ExitCode, Processor, RegisterId, Tracer, Word};

#[derive(Debug)]
pub enum Error {
    Io(io::Error, PathBuf),
    Asm(dasm::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err, path) => write!(f, "File \"{}\" failed: {}", path.display(), err),
            Error::Asm(err) => write!(f, "Assembling failed: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// Knobs of a run.
pub struct Options {
    /// RAM size in words; also the disk capacity when a fresh image is
    /// created. The aux stack gets half of it.
    pub memory: Word,
    /// Dump processor state to stderr after every instruction.
    pub trace: bool,
    /// Disk image the assembler writes to; defaults to the source path with
    /// an `hdd` extension.
    pub disk: Option<PathBuf>,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            memory: constants::EIGHT_BIT_MAX_MEM,
            trace: false,
            disk: None,
        }
    }
}

/// Assembles a source file, flashes a fresh disk image at word offset 0 and
/// runs it.
pub fn run_source<P: AsRef<Path>>(
    path: P,
    options: &Options,
) -> Result<(Processor, ExitCode), Error> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| Error::Io(err, path.to_owned()))?;
    let image = dasm::assemble(&source).map_err(Error::Asm)?;

    let disk = options
        .disk
        .clone()
        .unwrap_or_else(|| path.with_extension("hdd"));
    hddfile::format_file(&disk, options.memory).map_err(|err| Error::Io(err, disk.clone()))?;
    hddfile::flash_file(&disk, 0, &image).map_err(|err| Error::Io(err, disk.clone()))?;

    run_disk(&disk, options)
}

/// Runs an existing disk image.
pub fn run_disk<P: AsRef<Path>>(
    path: P,
    options: &Options,
) -> Result<(Processor, ExitCode), Error> {
    let path = path.as_ref();
    let image = hddfile::read_file(path).map_err(|err| Error::Io(err, path.to_owned()))?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let result = if options.trace {
        let stderr = io::stderr();
        let mut tracer = Tracer::new(stderr.lock());
        execute_traced(&image, options.memory, &mut output, &mut tracer)
    } else {
        execute(&image, options.memory, &mut output)
    };
    Ok(result)
}

/// Loads an image into a fresh processor and runs it against the given
/// output sink.
///
/// Faulting instructions additionally write a diagnostic line to stderr.
pub fn execute<W: Write>(image: &[Word], memory: Word, output: &mut W) -> (Processor, ExitCode) {
    let mut processor = Processor::new(memory);
    processor.load(image);

    if processor.lines() == 0 {
        return (processor, ExitCode::EmptyProgram);
    }

    loop {
        let before = processor.register(RegisterId::ERR);
        match processor.step(output) {
            Some(exit_code) => return (processor, exit_code),
            None => {
                let err = processor.register(RegisterId::ERR);
                if err != before {
                    eprintln!("fault: err={:#x}", err);
                }
            }
        }
    }
}

/// Like [`execute`](fn.execute.html), dumping state through the tracer
/// after every instruction.
pub fn execute_traced<W: Write, T: Write>(
    image: &[Word],
    memory: Word,
    output: &mut W,
    tracer: &mut Tracer<T>,
) -> (Processor, ExitCode) {
    let mut processor = Processor::new(memory);
    processor.load(image);

    if processor.lines() == 0 {
        return (processor, ExitCode::EmptyProgram);
    }

    loop {
        let counter = processor.counter();
        match processor.step(output) {
            // A failed fetch never executed a record, so there is nothing
            // to dump for it
            Some(ExitCode::BadJump) => return (processor, ExitCode::BadJump),
            Some(exit_code) => {
                let _ = tracer.record(&processor, counter);
                return (processor, exit_code);
            }
            None => {
                let _ = tracer.record(&processor, counter);
            }
        }
    }
}
