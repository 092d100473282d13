//! Global Core Constants.
//!
//! This module defines the fixed dimensions of the modelled core. It includes:
//! 1. **Word Width:** The machine word type shared by every datapath element.
//! 2. **Storage Dimensions:** Register count and memory depth.
//! 3. **Addressing:** The mask applied to memory addresses and the PC step.

/// A 32-bit machine word. Signed views are taken with `as i32` where needed.
pub type Word = u32;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Index of the hardwired zero register.
pub const REG_ZERO: usize = 0;

/// Number of words in the unified memory.
pub const MEM_WORDS: usize = 1024;

/// Mask selecting the low 10 address bits used to index memory.
pub const MEM_ADDR_MASK: Word = (MEM_WORDS as Word) - 1;

/// Program counter increment applied on every non-branching edge.
pub const PC_STEP: Word = 4;

/// Size of a memory word in bytes, used when unpacking byte images.
pub const WORD_BYTES: usize = 4;
