//! Machine Memory
//!
//! Flat 256-cell byte array shared by the program image, operands and the stack.
//! Addresses are `u8`, so every address names a valid cell.

use crate::error::{Ls8Error, Ls8Result};

/// Number of addressable cells
pub const MEMORY_SIZE: usize = 256;

/// Zero-filled RAM, never resized
#[derive(Debug, Clone)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Memory {
            cells: [0; MEMORY_SIZE],
        }
    }
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(&self, address: u8) -> u8 {
        self.cells[address as usize]
    }

    pub fn write(&mut self, address: u8, value: u8) {
        self.cells[address as usize] = value;
    }

    /// Copy a program image verbatim starting at address 0
    pub fn load(&mut self, image: &[u8]) -> Ls8Result<()> {
        if image.len() > MEMORY_SIZE {
            return Err(Ls8Error::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }
        self.cells[..image.len()].copy_from_slice(image);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.cells
    }
}
