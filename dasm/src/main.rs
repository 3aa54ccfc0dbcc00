#[macro_use]
extern crate clap;

use clap::Arg;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum IOErrorContext {
    ReadInput,
    WriteOutput,
}

#[derive(Debug)]
enum Error {
    Dasm(dasm::Error),
    Io(std::io::Error, IOErrorContext, PathBuf),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err, context, path) => writeln!(
                f,
                "{} file \"{}\" failed: {}",
                match context {
                    IOErrorContext::ReadInput => "Reading input",
                    IOErrorContext::WriteOutput => "Writing output",
                },
                path.display(),
                err
            ),
            Error::Dasm(err) => {
                writeln!(f, "Assembling input failed:")?;
                write!(f, "{}", err)
            }
        }
    }
}

fn main() {
    // Parse command line arguments
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the assembly file to use")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("OUTPUT")
                .help("Sets the disk image to write to"),
        )
        .arg(
            Arg::with_name("location")
                .short("l")
                .long("location")
                .takes_value(true)
                .value_name("LOCATION")
                .default_value("0")
                .help("Sets the word offset the program is flashed at"),
        )
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .takes_value(true)
                .value_name("SIZE")
                .default_value("256")
                .help("Sets the disk capacity in words"),
        )
        .get_matches();

    let input = matches.value_of("INPUT").unwrap();
    let output = matches.value_of("output");
    let location = value_t!(matches.value_of("location"), u32).unwrap_or_else(|e| e.exit());
    let size = value_t!(matches.value_of("size"), u32).unwrap_or_else(|e| e.exit());

    if let Err(err) = dasm(input, output, location, size) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn dasm(input: &str, output: Option<&str>, location: u32, size: u32) -> Result<(), Error> {
    let input_path = Path::new(input);

    // Read input file
    let source = fs::read_to_string(input_path)
        .map_err(|err| Error::Io(err, IOErrorContext::ReadInput, input_path.to_owned()))?;

    // Encode the program
    let image = dasm::assemble(&source).map_err(Error::Dasm)?;

    let output_path: PathBuf = output
        .map(PathBuf::from)
        .unwrap_or_else(|| input_path.with_extension("hdd"));

    // Format a fresh disk, then flash the program onto it
    hddfile::format_file(&output_path, size)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output_path.clone()))?;
    hddfile::flash_file(&output_path, location, &image)
        .map_err(|err| Error::Io(err, IOErrorContext::WriteOutput, output_path))?;

    Ok(())
}
