use std::fmt::Display;

use bimap::BiMap;
use lazy_static::lazy_static;

use crate::Word;

lazy_static! {
    static ref MNEMONIC_TABLE: BiMap<InstructionKind, &'static str> = [
        (InstructionKind::Nop, "NOP"),
        (InstructionKind::Halt, "HALT"),
        (InstructionKind::Push, "PUSH"),
        (InstructionKind::Pop, "POP"),
        (InstructionKind::Prn, "PRN"),
        (InstructionKind::Ldi, "LDI"),
        (InstructionKind::Jmp, "JMP"),
        (InstructionKind::Jeq, "JEQ"),
        (InstructionKind::Jne, "JNE"),
        (InstructionKind::Add, "ADD"),
        (InstructionKind::Sub, "SUB"),
        (InstructionKind::Mul, "MUL"),
        (InstructionKind::And, "AND"),
        (InstructionKind::Inc, "INC"),
        (InstructionKind::Dec, "DEC"),
        (InstructionKind::Cmp, "CMP"),
    ]
    .into_iter()
    .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    Nop,
    Halt,
    Push,
    Pop,
    Prn,
    Ldi,
    Jmp,
    Jeq,
    Jne,
    Add,
    Sub,
    Mul,
    And,
    Inc,
    Dec,
    Cmp,
}

impl InstructionKind {
    /// Opcode encoding: bits 7-6 carry the operand count, bit 5 marks
    /// ALU-class instructions, the low bits identify the operation.
    pub const fn opcode(self) -> Word {
        match self {
            Self::Nop => 0b0000_0000,
            Self::Halt => 0b0000_0001,
            Self::Push => 0b0100_0101,
            Self::Pop => 0b0100_0110,
            Self::Prn => 0b0100_0111,
            Self::Jmp => 0b0101_0100,
            Self::Jeq => 0b0101_0101,
            Self::Jne => 0b0101_0110,
            Self::Inc => 0b0110_0101,
            Self::Dec => 0b0110_0110,
            Self::Ldi => 0b1000_0010,
            Self::Add => 0b1010_0000,
            Self::Sub => 0b1010_0001,
            Self::Mul => 0b1010_0010,
            Self::Cmp => 0b1010_0111,
            Self::And => 0b1010_1000,
        }
    }

    pub const fn from_opcode(opcode: Word) -> Option<Self> {
        match opcode {
            0b0000_0000 => Some(Self::Nop),
            0b0000_0001 => Some(Self::Halt),
            0b0100_0101 => Some(Self::Push),
            0b0100_0110 => Some(Self::Pop),
            0b0100_0111 => Some(Self::Prn),
            0b0101_0100 => Some(Self::Jmp),
            0b0101_0101 => Some(Self::Jeq),
            0b0101_0110 => Some(Self::Jne),
            0b0110_0101 => Some(Self::Inc),
            0b0110_0110 => Some(Self::Dec),
            0b1000_0010 => Some(Self::Ldi),
            0b1010_0000 => Some(Self::Add),
            0b1010_0001 => Some(Self::Sub),
            0b1010_0010 => Some(Self::Mul),
            0b1010_0111 => Some(Self::Cmp),
            0b1010_1000 => Some(Self::And),
            _ => None,
        }
    }

    pub const fn operand_count(self) -> usize {
        match self {
            Self::Nop | Self::Halt => 0,

            Self::Push
            | Self::Pop
            | Self::Prn
            | Self::Jmp
            | Self::Jeq
            | Self::Jne
            | Self::Inc
            | Self::Dec => 1,

            Self::Ldi | Self::Add | Self::Sub | Self::Mul | Self::And | Self::Cmp => 2,
        }
    }

    /// Total encoded length, opcode byte included.
    pub const fn len_bytes(self) -> usize {
        1 + self.operand_count()
    }

    /// ALU-class instructions operate on registers through the ALU.
    pub const fn is_alu(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Inc | Self::Dec | Self::Cmp
        )
    }

    pub const fn has_reg_a(self) -> bool {
        self.operand_count() >= 1
    }

    pub const fn has_reg_b(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Cmp
        )
    }

    pub const fn has_immediate(self) -> bool {
        matches!(self, Self::Ldi)
    }

    pub fn mnemonic(self) -> &'static str {
        MNEMONIC_TABLE
            .get_by_left(&self)
            .copied()
            .expect("Mnemonic table covers every instruction kind")
    }

    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        MNEMONIC_TABLE.get_by_right(mnemonic).copied()
    }
}

impl Display for InstructionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
