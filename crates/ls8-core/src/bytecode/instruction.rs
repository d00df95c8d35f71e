//! Fetched Instruction
//!
//! The raw bytes read at the program counter in one fetch.
//! This layer contains no execution semantics.

use crate::vm::memory::Memory;

/// Opcode byte plus the two bytes after it
///
/// Both operand bytes are always read, whether or not the opcode uses them.
/// Addresses wrap, so a fetch at 0xFF reads operands from 0x00 and 0x01.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub operand_a: u8,
    pub operand_b: u8,
}

impl Instruction {
    /// Read the instruction at `pc`
    pub fn fetch(memory: &Memory, pc: u8) -> Self {
        Instruction {
            opcode: memory.read(pc),
            operand_a: memory.read(pc.wrapping_add(1)),
            operand_b: memory.read(pc.wrapping_add(2)),
        }
    }
}
