use std::io::{self, Write};
use std::iter;

use alu::ALU;
use anyhow::anyhow;
use libisa::{Register, Word};
use memory::Memory;
use regfile::RegFile;

pub mod alu;
pub mod execute;
pub mod memory;
pub mod regfile;

/// Run state of the fetch-decode-execute loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
    Faulted,
}

pub struct Emulator<W> {
    pub memory: Memory,
    pub reg_file: RegFile,
    pub alu: ALU,
    pub pc: usize,
    pub state: State,
    pub output: W,
}

impl Emulator<io::Stdout> {
    /// Emulator writing program output to stdout.
    pub fn new(program: Vec<u8>) -> anyhow::Result<Self> {
        Self::with_output(program, io::stdout())
    }
}

impl<W> Emulator<W>
where
    W: Write,
{
    pub fn with_output(program: Vec<u8>, output: W) -> anyhow::Result<Self> {
        if program.len() > libisa::MEMORY_SIZE {
            return Err(anyhow!(
                "Program of {} bytes doesn't fit into {}-byte memory",
                program.len(),
                libisa::MEMORY_SIZE
            ));
        }

        let memory_data = program
            .into_iter()
            .chain(iter::repeat(0))
            .take(libisa::MEMORY_SIZE)
            .collect();

        Ok(Self {
            memory: Memory::new(memory_data),
            reg_file: RegFile::new(),
            alu: ALU::new(),
            pc: 0,
            state: State::Running,
            output,
        })
    }

    pub fn register(&self, index: Register) -> Word {
        self.reg_file
            .register(index)
            .expect("Out of bounds register access")
    }

    pub fn register_mut(&mut self, index: Register) -> &mut Word {
        self.reg_file
            .register_mut(index)
            .expect("Out of bounds register access")
    }
}
