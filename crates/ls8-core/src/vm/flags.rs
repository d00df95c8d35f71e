//! Flags Register
//!
//! Holds the result of the last `CMP`. Written only by compare, read only by
//! the conditional jumps.

use std::cmp::Ordering;

/// Equal flag (`00000LGE` encoding)
pub const FLAG_EQUAL: u8 = 0b0000_0001;
/// Greater-than flag
pub const FLAG_GREATER: u8 = 0b0000_0010;
/// Less-than flag
pub const FLAG_LESS: u8 = 0b0000_0100;

/// At most one condition is set; none before the first compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    last: Option<Ordering>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, ordering: Ordering) {
        self.last = Some(ordering);
    }

    pub fn is_equal(&self) -> bool {
        self.last == Some(Ordering::Equal)
    }

    /// Flags as the `00000LGE` byte
    pub fn bits(&self) -> u8 {
        match self.last {
            None => 0,
            Some(Ordering::Equal) => FLAG_EQUAL,
            Some(Ordering::Greater) => FLAG_GREATER,
            Some(Ordering::Less) => FLAG_LESS,
        }
    }
}
