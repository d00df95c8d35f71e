//! Machine trace line
//!
//! Read-only view of the machine for debugging. Has no effect on state.

use std::fmt;

use crate::bytecode::Instruction;

use super::registers::REGISTER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    pub pc: u8,
    pub flags: u8,
    pub instruction: Instruction,
    pub registers: [u8; REGISTER_COUNT],
}

impl fmt::Display for Trace {
    /// `TRACE: PC FL | IR A B | R0 .. R7`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TRACE: {:02X} {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            self.flags,
            self.instruction.opcode,
            self.instruction.operand_a,
            self.instruction.operand_b,
        )?;
        for value in self.registers {
            write!(f, " {:02X}", value)?;
        }
        Ok(())
    }
}
