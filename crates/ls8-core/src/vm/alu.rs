//! Arithmetic Logic Unit
//!
//! Register-to-register arithmetic and comparison. All arithmetic wraps at 8 bits.

use crate::bytecode::Opcode;
use crate::error::{Ls8Error, Ls8Result};

use super::flags::Flags;
use super::registers::Registers;

/// ALU operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    /// `reg[a] += reg[b]`. Reserved: no opcode in the catalogue selects it.
    Add,
    /// `reg[a] *= reg[b]`
    Mul,
    /// Three-way compare of `reg[a]` against `reg[b]` into the flags
    Cmp,
}

impl TryFrom<Opcode> for AluOp {
    type Error = Ls8Error;

    /// Select the ALU operation for an opcode
    fn try_from(opcode: Opcode) -> Ls8Result<Self> {
        match opcode {
            Opcode::Mul => Ok(AluOp::Mul),
            Opcode::Cmp => Ok(AluOp::Cmp),
            other => Err(Ls8Error::UnsupportedAluOperation(other as u8)),
        }
    }
}

/// Apply `op` to registers `reg_a` and `reg_b`
pub fn apply(
    registers: &mut Registers,
    flags: &mut Flags,
    op: AluOp,
    reg_a: u8,
    reg_b: u8,
) -> Ls8Result<()> {
    let x = registers.get(reg_a)?;
    let y = registers.get(reg_b)?;

    match op {
        AluOp::Add => registers.set(reg_a, x.wrapping_add(y)),
        AluOp::Mul => registers.set(reg_a, x.wrapping_mul(y)),
        AluOp::Cmp => {
            flags.set(x.cmp(&y));
            Ok(())
        }
    }
}
