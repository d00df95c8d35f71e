//! LS-8 Machine
//!
//! Owns memory, registers, flags and the program counter, and drives the
//! fetch-decode-execute loop through the dispatcher.

use std::io::{self, Stdout, Write};

use log::{debug, log_enabled, trace, Level};

use crate::bytecode::{Instruction, Opcode};
use crate::config::MachineConfig;
use crate::error::{Ls8Error, Ls8Result};

use super::dispatch::{Dispatcher, Flow};
use super::flags::Flags;
use super::memory::Memory;
use super::registers::Registers;
use super::stack::Stack;
use super::trace::Trace;

/// LS-8 machine writing `PRN` output to `W`
pub struct Machine<W: Write = Stdout> {
    pub(crate) memory: Memory,
    pub(crate) registers: Registers,
    pub(crate) flags: Flags,
    pub(crate) pc: u8,
    pub(crate) output: W,

    config: MachineConfig,
    dispatcher: Dispatcher<W>,
    halted: bool,
    cycles: u64,
}

impl Machine<Stdout> {
    /// Create a machine printing to standard output
    pub fn new(config: MachineConfig) -> Self {
        Machine::with_output(config, io::stdout())
    }
}

impl<W: Write> Machine<W> {
    /// Create a machine printing to `output`
    pub fn with_output(config: MachineConfig, output: W) -> Self {
        Machine {
            memory: Memory::new(),
            registers: Registers::new(),
            flags: Flags::new(),
            pc: 0,
            output,
            config,
            dispatcher: Dispatcher::new(),
            halted: false,
            cycles: 0,
        }
    }

    /// Copy a program image into memory at address 0
    pub fn load(&mut self, image: &[u8]) -> Ls8Result<()> {
        self.memory.load(image)?;
        debug!("loaded {} byte program image", image.len());
        Ok(())
    }

    /// Execute until halt or error, returning the number of instructions run
    pub fn run(&mut self) -> Ls8Result<u64> {
        while !self.halted {
            if let Some(limit) = self.config.max_cycles {
                if self.cycles >= limit {
                    return Err(Ls8Error::CycleLimitExceeded(limit));
                }
            }
            self.step()?;
        }
        self.output.flush()?;
        Ok(self.cycles)
    }

    /// Execute a single instruction
    pub fn step(&mut self) -> Ls8Result<Flow> {
        if self.halted {
            return Ok(Flow::Halt);
        }

        if log_enabled!(Level::Trace) {
            let mnemonic = Opcode::from_u8(self.memory.read(self.pc)).map_or("???", Opcode::mnemonic);
            trace!("{} {}", self.trace(), mnemonic);
        }

        let Instruction {
            opcode,
            operand_a,
            operand_b,
        } = Instruction::fetch(&self.memory, self.pc);

        let handler = match self.dispatcher.lookup(opcode) {
            Some(handler) => handler,
            None => {
                debug!("no handler for 0x{:02X} at 0x{:02X}", opcode, self.pc);
                return Err(Ls8Error::UnknownOpcode { opcode, pc: self.pc });
            }
        };

        let flow = handler(self, operand_a, operand_b)?;
        self.cycles += 1;

        if flow == Flow::Halt {
            self.halted = true;
            debug!(
                "{} at 0x{:02X} after {} instructions",
                Opcode::Hlt.mnemonic(),
                self.pc,
                self.cycles
            );
        }
        Ok(flow)
    }

    /// Snapshot of PC, the next three bytes and the register file
    pub fn trace(&self) -> Trace {
        Trace {
            pc: self.pc,
            flags: self.flags.bits(),
            instruction: Instruction::fetch(&self.memory, self.pc),
            registers: *self.registers.as_array(),
        }
    }

    pub(crate) fn stack(&mut self) -> Stack<'_> {
        Stack::new(&mut self.memory, &mut self.registers, self.config.stack_guard)
    }

    /// Opcode at the program counter
    pub(crate) fn current_opcode(&self) -> Ls8Result<Opcode> {
        let opcode = self.memory.read(self.pc);
        Opcode::from_u8(opcode).ok_or(Ls8Error::UnknownOpcode { opcode, pc: self.pc })
    }

    /// Step past an instruction of `opcode`'s length
    pub(crate) fn advance(&mut self, opcode: Opcode) {
        self.pc = self.pc.wrapping_add(opcode.instruction_len());
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn flags(&self) -> Flags {
        self.flags
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
