use std::io::Write;

use libisa::{
    instruction::{kind::InstructionKind, Instruction},
    Word,
};

use crate::{alu::flags::ALUFlags, Emulator};

use super::{ExecuteErr, ExecuteOk};

impl<W> Emulator<W>
where
    W: Write,
{
    pub fn execute_parsed_instruction(
        &mut self,
        instruction: Instruction,
    ) -> Result<ExecuteOk, ExecuteErr> {
        match instruction.kind {
            InstructionKind::Nop => {}

            InstructionKind::Halt => return Ok(ExecuteOk::Halted),

            InstructionKind::Ldi => {
                let value = instruction.immediate.unwrap();
                *self.reg_a_mut(&instruction)? = value;
            }

            InstructionKind::Push => {
                let sp = self.reg(libisa::SP)?;
                if sp == 0 {
                    return Err(ExecuteErr::StackOverflow { sp });
                }

                let sp = sp - 1;
                let value = self.reg_a(&instruction)?;

                *self.mem_byte_mut(sp as usize)? = value;
                *self.reg_mut(libisa::SP)? = sp;
            }

            InstructionKind::Pop => {
                let sp = self.reg(libisa::SP)?;
                if sp >= libisa::STACK_INIT {
                    return Err(ExecuteErr::StackUnderflow { sp });
                }

                let value = self.mem_byte(sp as usize)?;

                *self.reg_a_mut(&instruction)? = value;
                *self.reg_mut(libisa::SP)? = sp + 1;
            }

            InstructionKind::Prn => {
                let value = self.reg_a(&instruction)?;
                writeln!(self.output, "{}", value)?;
            }

            InstructionKind::Jmp => {
                self.pc = self.reg_a(&instruction)? as usize;
                return Ok(ExecuteOk::Normal);
            }

            InstructionKind::Jeq => {
                if self.alu.flags.contains(ALUFlags::EQUAL) {
                    self.pc = self.reg_a(&instruction)? as usize;
                    return Ok(ExecuteOk::Normal);
                }
            }

            InstructionKind::Jne => {
                if !self.alu.flags.contains(ALUFlags::EQUAL) {
                    self.pc = self.reg_a(&instruction)? as usize;
                    return Ok(ExecuteOk::Normal);
                }
            }

            InstructionKind::Add
            | InstructionKind::Sub
            | InstructionKind::Mul
            | InstructionKind::And
            | InstructionKind::Inc
            | InstructionKind::Dec
            | InstructionKind::Cmp => self.execute_alu(&instruction)?,
        }

        self.pc += instruction.kind.len_bytes();
        Ok(ExecuteOk::Normal)
    }

    fn execute_alu(&mut self, instruction: &Instruction) -> Result<(), ExecuteErr> {
        match instruction.kind {
            InstructionKind::Add => {
                let b = self.reg_b(instruction)?;
                let a = self.reg_a(instruction)?;

                let result = self.alu.add(a, b);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::Sub => {
                let b = self.reg_b(instruction)?;
                let a = self.reg_a(instruction)?;

                let result = self.alu.sub(a, b);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::Mul => {
                let b = self.reg_b(instruction)?;
                let a = self.reg_a(instruction)?;

                let result = self.alu.mul(a, b);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::And => {
                let b = self.reg_b(instruction)?;
                let a = self.reg_a(instruction)?;

                let result = self.alu.and(a, b);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::Inc => {
                let a = self.reg_a(instruction)?;

                let result = self.alu.inc(a);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::Dec => {
                let a = self.reg_a(instruction)?;

                let result = self.alu.dec(a);
                *self.reg_a_mut(instruction)? = result;
            }

            InstructionKind::Cmp => {
                let b = self.reg_b(instruction)?;
                let a = self.reg_a(instruction)?;

                self.alu.cmp(a, b);
            }

            kind => unreachable!("Non-ALU instruction {} routed to the ALU", kind),
        }

        Ok(())
    }

    fn reg_a(&self, instruction: &Instruction) -> Result<Word, ExecuteErr> {
        self.reg(instruction.reg_a.unwrap())
    }

    fn reg_a_mut(&mut self, instruction: &Instruction) -> Result<&mut Word, ExecuteErr> {
        self.reg_mut(instruction.reg_a.unwrap())
    }

    fn reg_b(&self, instruction: &Instruction) -> Result<Word, ExecuteErr> {
        self.reg(instruction.reg_b.unwrap())
    }
}
