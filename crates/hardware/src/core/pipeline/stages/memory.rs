//! Memory Unit.
//!
//! A single-ported store of 1024 words shared by the instruction and data
//! paths. Each edge performs exactly one operation: a write when write-enable
//! is asserted, otherwise a read into the registered read port. Reset clears
//! only the read register; the stored contents survive.
//!
//! Addresses are not byte addresses: the low 10 bits of the supplied address
//! select a word directly.

use serde::Serialize;

use crate::common::constants::{MEM_ADDR_MASK, MEM_WORDS, Word};
use crate::common::error::SimError;
use crate::core::pipeline::traits::Clocked;

/// Inputs sampled by the memory unit at an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryInputs {
    /// Reset level.
    pub reset: bool,
    /// Address; only the low 10 bits are used.
    pub address: Word,
    /// Write enable.
    pub write_enable: bool,
    /// Data stored on a write edge.
    pub write_data: Word,
}

/// Operation selected for an edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemOp {
    /// Reset: the read register clears.
    Reset,
    /// Store `data` at word `index`; the read register holds.
    Write {
        /// Word index.
        index: usize,
        /// Stored value.
        data: Word,
    },
    /// Load `data` into the read register.
    Read {
        /// Value read from the addressed word.
        data: Word,
    },
}

/// Unified word-addressable memory with a registered read port.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemoryUnit {
    #[serde(skip)]
    words: Box<[Word]>,
    read_data: Word,
}

impl Default for MemoryUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryUnit {
    /// Creates a zero-filled memory.
    pub fn new() -> Self {
        Self {
            words: vec![0; MEM_WORDS].into_boxed_slice(),
            read_data: 0,
        }
    }

    /// Word index selected by an address.
    pub const fn index(address: Word) -> usize {
        (address & MEM_ADDR_MASK) as usize
    }

    /// Registered read port; this is the word presented as the instruction.
    pub const fn read_data(&self) -> Word {
        self.read_data
    }

    /// Reads a stored word without going through the clocked port.
    pub fn peek(&self, address: Word) -> Word {
        self.words[Self::index(address)]
    }

    /// Stored contents, index equal to address.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Copies `image` into memory starting at word 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageTooLarge`] if `image` holds more than 1024
    /// words. Memory is left untouched in that case.
    pub fn load(&mut self, image: &[Word]) -> Result<(), SimError> {
        if image.len() > MEM_WORDS {
            return Err(SimError::ImageTooLarge {
                words: image.len(),
                capacity: MEM_WORDS,
            });
        }
        self.words[..image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Applies one full edge of the port outside the core's two-phase tick.
    pub fn step(&mut self, inputs: MemoryInputs) {
        let next = self.evaluate(inputs);
        self.commit(next);
    }
}

impl Clocked for MemoryUnit {
    type Inputs = MemoryInputs;
    type Next = MemOp;

    fn evaluate(&self, inputs: MemoryInputs) -> MemOp {
        let index = Self::index(inputs.address);
        if inputs.reset {
            MemOp::Reset
        } else if inputs.write_enable {
            MemOp::Write {
                index,
                data: inputs.write_data,
            }
        } else {
            MemOp::Read {
                data: self.words[index],
            }
        }
    }

    fn commit(&mut self, next: MemOp) {
        match next {
            MemOp::Reset => self.read_data = 0,
            MemOp::Write { index, data } => self.words[index & (MEM_WORDS - 1)] = data,
            MemOp::Read { data } => self.read_data = data,
        }
    }
}
