//! Instruction Dispatch
//!
//! Opcode-indexed handler table. Decoding is a single array lookup; adding an
//! opcode means installing one more handler.

use std::io::Write;

use crate::bytecode::Opcode;
use crate::error::Ls8Result;

use super::handlers;
use super::machine::Machine;

/// What the execution loop does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Uniform handler signature: raw operand bytes in, PC owned by the handler
pub type Handler<W> = fn(&mut Machine<W>, u8, u8) -> Ls8Result<Flow>;

/// 256-entry opcode table
pub struct Dispatcher<W: Write> {
    table: [Option<Handler<W>>; 256],
}

impl<W: Write> Default for Dispatcher<W> {
    fn default() -> Self {
        let mut dispatcher = Dispatcher { table: [None; 256] };

        dispatcher.install(Opcode::Hlt, handlers::hlt);
        dispatcher.install(Opcode::Ldi, handlers::ldi);
        dispatcher.install(Opcode::Prn, handlers::prn);

        dispatcher.install(Opcode::Mul, handlers::alu);
        dispatcher.install(Opcode::Cmp, handlers::alu);

        dispatcher.install(Opcode::Push, handlers::push);
        dispatcher.install(Opcode::Pop, handlers::pop);

        dispatcher.install(Opcode::Call, handlers::call);
        dispatcher.install(Opcode::Ret, handlers::ret);
        dispatcher.install(Opcode::Jmp, handlers::jmp);
        dispatcher.install(Opcode::Jeq, handlers::jeq);
        dispatcher.install(Opcode::Jne, handlers::jne);

        dispatcher
    }
}

impl<W: Write> Dispatcher<W> {
    /// Table holding a handler for every opcode in the catalogue
    pub fn new() -> Self {
        Self::default()
    }

    fn install(&mut self, opcode: Opcode, handler: Handler<W>) {
        self.table[opcode as usize] = Some(handler);
    }

    pub fn lookup(&self, opcode: u8) -> Option<Handler<W>> {
        self.table[opcode as usize]
    }
}
