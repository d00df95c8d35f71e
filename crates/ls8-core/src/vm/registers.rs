//! Register File
//!
//! Eight 8-bit general-purpose registers. R7 doubles as the stack pointer.

use crate::error::{Ls8Error, Ls8Result};

/// Number of general-purpose registers
pub const REGISTER_COUNT: usize = 8;

/// Register index reserved for the stack pointer
pub const SP: u8 = 7;

/// Initial stack pointer; the stack grows down from the top of memory
pub const STACK_TOP: u8 = 0xFF;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registers {
    values: [u8; REGISTER_COUNT],
}

impl Default for Registers {
    fn default() -> Self {
        let mut values = [0; REGISTER_COUNT];
        values[SP as usize] = STACK_TOP;
        Registers { values }
    }
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: u8) -> Ls8Result<u8> {
        self.values
            .get(index as usize)
            .copied()
            .ok_or(Ls8Error::InvalidRegister(index))
    }

    pub fn set(&mut self, index: u8, value: u8) -> Ls8Result<()> {
        let slot = self
            .values
            .get_mut(index as usize)
            .ok_or(Ls8Error::InvalidRegister(index))?;
        *slot = value;
        Ok(())
    }

    pub fn sp(&self) -> u8 {
        self.values[SP as usize]
    }

    pub fn set_sp(&mut self, value: u8) {
        self.values[SP as usize] = value;
    }

    pub fn as_array(&self) -> &[u8; REGISTER_COUNT] {
        &self.values
    }
}
