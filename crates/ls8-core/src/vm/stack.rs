//! Stack Manager
//!
//! Downward-growing stack kept in plain memory and addressed through R7.
//! Push decrements the pointer then writes; pop reads then increments.
//! Matching push/pop and call/return pairs is the program's job; the guard
//! only stops the pointer from leaving the address space.

use crate::config::StackGuard;
use crate::error::{Ls8Error, Ls8Result};

use super::memory::Memory;
use super::registers::Registers;

/// Stack view over machine memory and the stack pointer
#[derive(Debug)]
pub struct Stack<'a> {
    memory: &'a mut Memory,
    registers: &'a mut Registers,
    guard: StackGuard,
}

impl<'a> Stack<'a> {
    pub fn new(memory: &'a mut Memory, registers: &'a mut Registers, guard: StackGuard) -> Self {
        Stack {
            memory,
            registers,
            guard,
        }
    }

    /// Push value onto stack
    pub fn push(&mut self, value: u8) -> Ls8Result<()> {
        let sp = self.registers.sp();
        let next = match self.guard {
            StackGuard::Trap => sp.checked_sub(1).ok_or(Ls8Error::StackOverflow { sp })?,
            StackGuard::Wrap => sp.wrapping_sub(1),
        };
        self.registers.set_sp(next);
        self.memory.write(next, value);
        Ok(())
    }

    /// Pop value from stack
    pub fn pop(&mut self) -> Ls8Result<u8> {
        let sp = self.registers.sp();
        let next = match self.guard {
            StackGuard::Trap => sp.checked_add(1).ok_or(Ls8Error::StackUnderflow { sp })?,
            StackGuard::Wrap => sp.wrapping_add(1),
        };
        let value = self.memory.read(sp);
        self.registers.set_sp(next);
        Ok(value)
    }

    /// Push `return_address` and return the subroutine address held in `target_reg`
    pub fn call(&mut self, return_address: u8, target_reg: u8) -> Ls8Result<u8> {
        // Read the target first: CALL R7 jumps to the pre-push stack pointer.
        let target = self.registers.get(target_reg)?;
        self.push(return_address)?;
        Ok(target)
    }

    /// Pop the return address
    pub fn ret(&mut self) -> Ls8Result<u8> {
        self.pop()
    }
}
