use std::io::{self, Write};

use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Register, Word,
};
use log::trace;
use thiserror::Error;

use crate::{Emulator, State};

mod parsed;


pub enum ExecuteOk {
    Normal,
    Halted,
}

#[derive(Debug, Error)]
pub enum ExecuteErr {
    #[error("Memory access out of bounds at address {addr:#05x}")]
    MemoryOutOfBounds { addr: usize },

    #[error("Invalid register index {index} at address {addr:#04x}")]
    InvalidRegister { index: Register, addr: usize },

    #[error("Invalid instruction {opcode:#04x} at address {addr:#04x}")]
    InvalidInstruction { opcode: Word, addr: usize },

    #[error("Stack overflow on push with SP at {sp:#04x}")]
    StackOverflow { sp: Word },

    #[error("Stack underflow on pop with SP at {sp:#04x}")]
    StackUnderflow { sp: Word },

    #[error("Couldn't write program output: {0}")]
    Output(#[from] io::Error),
}

impl<W> Emulator<W>
where
    W: Write,
{
    /// Runs the fetch-decode-execute loop until the program halts or faults.
    pub fn execute_to_halt(&mut self) -> Result<(), ExecuteErr> {
        while self.state == State::Running {
            match self.execute_instruction() {
                Ok(ExecuteOk::Normal) => {}
                Ok(ExecuteOk::Halted) => self.state = State::Halted,
                Err(e) => {
                    self.state = State::Faulted;
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    pub fn execute_instruction(&mut self) -> Result<ExecuteOk, ExecuteErr> {
        let instruction = self.parse_next_instruction()?;

        trace!(
            "{:#04x}: {} | regs {:02x?}",
            self.pc,
            instruction,
            self.reg_file.as_array()
        );

        self.execute_parsed_instruction(instruction)
    }

    fn parse_next_instruction(&self) -> Result<Instruction, ExecuteErr> {
        let opcode = self.mem_byte(self.pc)?;

        let kind =
            InstructionKind::from_opcode(opcode).ok_or(ExecuteErr::InvalidInstruction {
                opcode,
                addr: self.pc,
            })?;

        let mut instruction = Instruction::new(kind);

        if kind.has_reg_a() {
            instruction.reg_a = Some(self.mem_byte(self.pc + 1)? as Register);
        }

        if kind.has_reg_b() {
            instruction.reg_b = Some(self.mem_byte(self.pc + 2)? as Register);
        } else if kind.has_immediate() {
            instruction.immediate = Some(self.mem_byte(self.pc + 2)?);
        }

        Ok(instruction)
    }

    fn mem_byte(&self, addr: usize) -> Result<Word, ExecuteErr> {
        self.memory
            .byte(addr)
            .ok_or(ExecuteErr::MemoryOutOfBounds { addr })
    }

    fn mem_byte_mut(&mut self, addr: usize) -> Result<&mut Word, ExecuteErr> {
        self.memory
            .byte_mut(addr)
            .ok_or(ExecuteErr::MemoryOutOfBounds { addr })
    }

    fn reg(&self, index: Register) -> Result<Word, ExecuteErr> {
        self.reg_file
            .register(index)
            .ok_or(ExecuteErr::InvalidRegister {
                index,
                addr: self.pc,
            })
    }

    fn reg_mut(&mut self, index: Register) -> Result<&mut Word, ExecuteErr> {
        let addr = self.pc;

        self.reg_file
            .register_mut(index)
            .ok_or(ExecuteErr::InvalidRegister { index, addr })
    }
}
