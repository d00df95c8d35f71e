//! Program Loader
//!
//! Parses LS-8 program text into a memory image.
//! One byte per line, written in base 2; `#` starts a comment; blank lines are skipped.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Ls8Error, Ls8Result};
use crate::vm::memory::MEMORY_SIZE;

/// Comment marker
const COMMENT: char = '#';

/// Program text loader
pub struct ProgramLoader;

impl ProgramLoader {
    /// Parse program text into an image of at most 256 bytes
    pub fn parse(source: &str) -> Ls8Result<Vec<u8>> {
        let mut image = Vec::new();

        for (index, line) in source.lines().enumerate() {
            let text = match line.split_once(COMMENT) {
                Some((code, _comment)) => code,
                None => line,
            }
            .trim();

            if text.is_empty() {
                continue;
            }

            let byte = u8::from_str_radix(text, 2).map_err(|_| Ls8Error::MalformedLiteral {
                line: index + 1,
                text: text.to_string(),
            })?;
            image.push(byte);
        }

        if image.len() > MEMORY_SIZE {
            return Err(Ls8Error::ProgramTooLarge {
                len: image.len(),
                capacity: MEMORY_SIZE,
            });
        }

        Ok(image)
    }

    /// Read and parse a program file
    pub fn load_file(path: &Path) -> Ls8Result<Vec<u8>> {
        let source = fs::read_to_string(path)?;
        let image = Self::parse(&source)?;
        debug!("parsed {} bytes from {}", image.len(), path.display());
        Ok(image)
    }
}
