//! LS-8 Configuration
//!
//! Runtime limits for the LS-8 machine.
//! Configuration specifies constraints only; enforcement is handled by the machine.

/// What happens when the stack pointer would leave the address space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackGuard {
    /// Fail with `StackOverflow` / `StackUnderflow`
    #[default]
    Trap,
    /// Wrap the stack pointer modulo 256
    Wrap,
}

/// Machine configuration
#[derive(Debug, Clone, Default)]
pub struct MachineConfig {
    /// Stack pointer boundary policy
    pub stack_guard: StackGuard,

    /// Maximum number of instructions `run` may execute (`None` = unbounded)
    pub max_cycles: Option<u64>,
}

impl MachineConfig {
    /// Create a new configuration with default limits
    pub fn new() -> Self {
        Self::default()
    }
}
