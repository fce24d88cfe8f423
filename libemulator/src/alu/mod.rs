use std::cmp::Ordering;

use flags::ALUFlags;
use libisa::Word;

pub mod flags;

#[cfg(test)]
mod tests;

/// Register-width arithmetic. Every result wraps at 8 bits.
pub struct ALU {
    pub flags: ALUFlags,
}

impl ALU {
    pub fn new() -> Self {
        Self {
            flags: ALUFlags::empty(),
        }
    }

    pub fn add(&self, a: Word, b: Word) -> Word {
        a.wrapping_add(b)
    }

    pub fn sub(&self, a: Word, b: Word) -> Word {
        a.wrapping_sub(b)
    }

    pub fn and(&self, a: Word, b: Word) -> Word {
        a & b
    }

    pub fn mul(&self, a: Word, b: Word) -> Word {
        a.wrapping_mul(b)
    }

    pub fn inc(&self, a: Word) -> Word {
        a.wrapping_add(1)
    }

    pub fn dec(&self, a: Word) -> Word {
        a.wrapping_sub(1)
    }

    /// Sets exactly one comparison flag. The flags hold their value until
    /// the next comparison.
    pub fn cmp(&mut self, a: Word, b: Word) {
        self.flags = match a.cmp(&b) {
            Ordering::Less => ALUFlags::LESS,
            Ordering::Greater => ALUFlags::GREATER,
            Ordering::Equal => ALUFlags::EQUAL,
        };
    }
}
