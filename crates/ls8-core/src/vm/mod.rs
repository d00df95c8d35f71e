pub mod alu;
pub mod dispatch;
pub mod flags;
mod handlers;
pub mod machine;
pub mod memory;
pub mod registers;
pub mod stack;
pub mod trace;

pub use dispatch::Flow;
pub use machine::Machine;
pub use registers::Registers;
