//! Instruction Handlers
//!
//! One function per opcode. Each receives both raw operand bytes and
//! decides itself how far to move the program counter.

use std::io::Write;

use crate::bytecode::Opcode;
use crate::error::Ls8Result;

use super::alu::{self, AluOp};
use super::dispatch::Flow;
use super::machine::Machine;

/// `HLT`: stop the loop, PC stays on the halt
pub(super) fn hlt<W: Write>(_m: &mut Machine<W>, _a: u8, _b: u8) -> Ls8Result<Flow> {
    Ok(Flow::Halt)
}

/// `LDI reg, imm`
pub(super) fn ldi<W: Write>(m: &mut Machine<W>, a: u8, b: u8) -> Ls8Result<Flow> {
    m.registers.set(a, b)?;
    m.advance(Opcode::Ldi);
    Ok(Flow::Continue)
}

/// `PRN reg`: decimal value and a newline on the output sink
pub(super) fn prn<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    let value = m.registers.get(a)?;
    writeln!(m.output, "{}", value)?;
    m.advance(Opcode::Prn);
    Ok(Flow::Continue)
}

/// `MUL` and `CMP`: the ALU operation is selected by the opcode at PC
pub(super) fn alu<W: Write>(m: &mut Machine<W>, a: u8, b: u8) -> Ls8Result<Flow> {
    let opcode = m.current_opcode()?;
    let op = AluOp::try_from(opcode)?;
    alu::apply(&mut m.registers, &mut m.flags, op, a, b)?;
    m.advance(opcode);
    Ok(Flow::Continue)
}

/// `PUSH reg`
pub(super) fn push<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    let value = m.registers.get(a)?;
    m.stack().push(value)?;
    m.advance(Opcode::Push);
    Ok(Flow::Continue)
}

/// `POP reg`
pub(super) fn pop<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    // Validate the destination before touching the stack pointer.
    m.registers.get(a)?;
    let value = m.stack().pop()?;
    m.registers.set(a, value)?;
    m.advance(Opcode::Pop);
    Ok(Flow::Continue)
}

/// `CALL reg`
pub(super) fn call<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    let return_address = m.pc.wrapping_add(Opcode::Call.instruction_len());
    let target = m.stack().call(return_address, a)?;
    m.pc = target;
    Ok(Flow::Continue)
}

/// `RET`
pub(super) fn ret<W: Write>(m: &mut Machine<W>, _a: u8, _b: u8) -> Ls8Result<Flow> {
    let target = m.stack().ret()?;
    m.pc = target;
    Ok(Flow::Continue)
}

/// `JMP reg`
pub(super) fn jmp<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    m.pc = m.registers.get(a)?;
    Ok(Flow::Continue)
}

/// `JEQ reg`
pub(super) fn jeq<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    let equal = m.flags.is_equal();
    branch(m, Opcode::Jeq, a, equal)
}

/// `JNE reg`
pub(super) fn jne<W: Write>(m: &mut Machine<W>, a: u8, _b: u8) -> Ls8Result<Flow> {
    let equal = m.flags.is_equal();
    branch(m, Opcode::Jne, a, !equal)
}

/// The target register is only read when the jump is taken
fn branch<W: Write>(m: &mut Machine<W>, opcode: Opcode, a: u8, taken: bool) -> Ls8Result<Flow> {
    if taken {
        m.pc = m.registers.get(a)?;
    } else {
        m.advance(opcode);
    }
    Ok(Flow::Continue)
}
