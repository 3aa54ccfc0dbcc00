#[macro_use]
extern crate clap;

use clap::{Arg, ArgGroup};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug)]
enum Error {
    Demu(demu::Error),
    Clap(clap::Error),
}

fn main() -> Result<(), Error> {
    let matches = app_from_crate!()
        .arg(
            Arg::with_name("PROGRAM")
                .help("Sets the disk image to run")
                .index(1),
        )
        .arg(
            Arg::with_name("assembly")
                .short("a")
                .long("assembly")
                .takes_value(true)
                .value_name("ASSEMBLY")
                .help("Sets the assembly file to assemble and run"),
        )
        .arg(
            Arg::with_name("memory")
                .short("m")
                .long("memory")
                .takes_value(true)
                .value_name("MEMORY")
                .default_value("256")
                .required(false)
                .help("Sets the size of RAM in words"),
        )
        .arg(
            Arg::with_name("disk")
                .short("d")
                .long("disk")
                .takes_value(true)
                .value_name("DISK")
                .help("Sets the disk image the assembler flashes"),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Dumps processor state after every instruction"),
        )
        .group(
            ArgGroup::with_name("input")
                .args(&["PROGRAM", "assembly"])
                .required(true),
        )
        .get_matches();

    let memory = value_t!(matches.value_of("memory"), u32).map_err(Error::Clap)?;
    let options = demu::Options {
        memory,
        trace: matches.is_present("trace"),
        disk: matches.value_of("disk").map(PathBuf::from),
    };

    let start = Instant::now();

    let (_processor, exit_code) = match matches.value_of("PROGRAM") {
        Some(program) => demu::run_disk(program, &options),

        None => {
            let asm = matches.value_of("assembly").unwrap();
            demu::run_source(asm, &options)
        }
    }
    .map_err(Error::Demu)?;

    let elapsed = start.elapsed();

    println!("Exit code: {:?}", exit_code);
    println!(
        "Benchmarks: {:.6}",
        elapsed.as_secs() as f64 + f64::from(elapsed.subsec_nanos()) * 1e-9
    );

    Ok(())
}
