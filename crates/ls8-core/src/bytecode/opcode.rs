//! Opcode Definitions
//!
//! Defines the LS-8 opcode set.
//! This file contains no execution semantics.
//! Opcode values are bit-exact with the LS-8 encoding: the top two bits
//! hold the operand count.

/// LS-8 opcodes
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    // System
    Hlt = 0b0000_0001,

    // Register load & output
    Ldi = 0b1000_0010,
    Prn = 0b0100_0111,

    // ALU
    Mul = 0b1010_0010,
    Cmp = 0b1010_0111,

    // Stack
    Push = 0b0100_0101,
    Pop  = 0b0100_0110,

    // Control flow
    Call = 0b0101_0000,
    Ret  = 0b0001_0001,
    Jmp  = 0b0101_0100,
    Jeq  = 0b0101_0101,
    Jne  = 0b0101_0110,
}

impl Opcode {
    /// Every opcode in the catalogue
    pub const ALL: [Opcode; 12] = [
        Opcode::Hlt,
        Opcode::Ldi,
        Opcode::Prn,
        Opcode::Mul,
        Opcode::Cmp,
        Opcode::Push,
        Opcode::Pop,
        Opcode::Call,
        Opcode::Ret,
        Opcode::Jmp,
        Opcode::Jeq,
        Opcode::Jne,
    ];

    /// Convert raw byte to opcode
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0b0000_0001 => Some(Opcode::Hlt),

            0b1000_0010 => Some(Opcode::Ldi),
            0b0100_0111 => Some(Opcode::Prn),

            0b1010_0010 => Some(Opcode::Mul),
            0b1010_0111 => Some(Opcode::Cmp),

            0b0100_0101 => Some(Opcode::Push),
            0b0100_0110 => Some(Opcode::Pop),

            0b0101_0000 => Some(Opcode::Call),
            0b0001_0001 => Some(Opcode::Ret),
            0b0101_0100 => Some(Opcode::Jmp),
            0b0101_0101 => Some(Opcode::Jeq),
            0b0101_0110 => Some(Opcode::Jne),

            _ => None,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Hlt => "HLT",
            Opcode::Ldi => "LDI",
            Opcode::Prn => "PRN",
            Opcode::Mul => "MUL",
            Opcode::Cmp => "CMP",
            Opcode::Push => "PUSH",
            Opcode::Pop => "POP",
            Opcode::Call => "CALL",
            Opcode::Ret => "RET",
            Opcode::Jmp => "JMP",
            Opcode::Jeq => "JEQ",
            Opcode::Jne => "JNE",
        }
    }

    /// Number of operand bytes following the opcode
    pub fn operand_count(self) -> u8 {
        (self as u8) >> 6
    }

    /// Total instruction length in bytes
    pub fn instruction_len(self) -> u8 {
        1 + self.operand_count()
    }
}
