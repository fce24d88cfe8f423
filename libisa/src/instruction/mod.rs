use std::fmt::Display;

use kind::InstructionKind;
use thiserror::Error;

use crate::{Immediate, Register};

pub mod assembler;
pub mod kind;

#[cfg(test)]
mod tests;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("Missing register operand")]
    MissingRegister,

    #[error("Missing immediate")]
    MissingImmediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instruction {
    pub kind: InstructionKind,
    pub reg_a: Option<Register>,
    pub reg_b: Option<Register>,
    pub immediate: Option<Immediate>,
}

impl Instruction {
    pub const fn new(kind: InstructionKind) -> Self {
        Self {
            kind,
            reg_a: None,
            reg_b: None,
            immediate: None,
        }
    }

    pub const fn with_reg_a(mut self, reg_a: Register) -> Self {
        self.reg_a = Some(reg_a);
        self
    }

    pub const fn with_reg_b(mut self, reg_b: Register) -> Self {
        self.reg_b = Some(reg_b);
        self
    }

    pub const fn with_immediate(mut self, immediate: Immediate) -> Self {
        self.immediate = Some(immediate);
        self
    }

    pub fn assemble(self) -> Result<Vec<u8>, AssemblyError> {
        let mut output = Vec::with_capacity(self.kind.len_bytes());

        output.push(self.kind.opcode());

        if self.kind.has_reg_a() {
            let reg_a = self.reg_a.ok_or(AssemblyError::MissingRegister)?;
            output.push(reg_a as u8);
        }

        if self.kind.has_reg_b() {
            let reg_b = self.reg_b.ok_or(AssemblyError::MissingRegister)?;
            output.push(reg_b as u8);
        } else if self.kind.has_immediate() {
            let immediate = self.immediate.ok_or(AssemblyError::MissingImmediate)?;
            output.push(immediate);
        }

        Ok(output)
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}", self.kind))?;

        if let Some(reg_a) = self.reg_a {
            f.write_fmt(format_args!(" %{}", reg_a))?;
        }

        if let Some(reg_b) = self.reg_b {
            f.write_fmt(format_args!(", %{}", reg_b))?;
        }

        if let Some(immediate) = self.immediate {
            f.write_fmt(format_args!(", ${}", immediate))?;
        }

        Ok(())
    }
}
