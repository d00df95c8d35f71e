//! LS-8 Error Types
//!
//! Defines every condition that stops the LS-8 machine.
//! There is no recoverable class: each variant halts execution and is
//! reported by the host.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Ls8Error {
    // Decode errors
    #[error("unknown instruction 0x{opcode:02X} at address 0x{pc:02X}")]
    UnknownOpcode { opcode: u8, pc: u8 },

    // Register & ALU errors
    #[error("invalid register index: {0}")]
    InvalidRegister(u8),
    #[error("unsupported ALU operation: 0x{0:02X}")]
    UnsupportedAluOperation(u8),

    // Stack errors
    #[error("stack overflow (sp = 0x{sp:02X})")]
    StackOverflow { sp: u8 },
    #[error("stack underflow (sp = 0x{sp:02X})")]
    StackUnderflow { sp: u8 },

    // Execution limits
    #[error("cycle limit of {0} instructions exceeded")]
    CycleLimitExceeded(u64),

    // Program image errors
    #[error("program is {len} bytes, memory holds {capacity}")]
    ProgramTooLarge { len: usize, capacity: usize },
    #[error("line {line}: malformed binary literal `{text}`")]
    MalformedLiteral { line: usize, text: String },

    // IO boundary
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Ls8Result<T> = Result<T, Ls8Error>;
