use std::{fs, path::PathBuf, process::exit};

use anyhow::Context;
use clap::Parser;
use libemulator::Emulator;
use log::debug;

mod loader;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Program file to execute, one binary-literal instruction byte per line.
    program_path: PathBuf,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let mut emulator = match load_program(&args).and_then(Emulator::new) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("{:#}", e);
            exit(1);
        }
    };

    if let Err(e) = emulator.execute_to_halt() {
        eprintln!("Execution fault: {}", e);
        exit(1);
    }
}

fn load_program(args: &Args) -> anyhow::Result<Vec<u8>> {
    let source = fs::read_to_string(&args.program_path).with_context(|| {
        format!(
            "Failed to read program file {}",
            args.program_path.display()
        )
    })?;

    let program = loader::parse_program(&source)?;
    debug!("Loaded {} program bytes", program.len());

    Ok(program)
}
