//! Image Loader.
//!
//! This module pre-populates a core's memory before the first tick. It performs:
//! 1. **Word images:** Copies words to memory, index equal to address.
//! 2. **Byte images:** Unpacks little-endian bytes into words first.
//! 3. **Program layout:** Places instructions at the word indices the program
//!    counter visits. The counter steps by 4 while memory is indexed by the
//!    low address bits directly, so consecutive instructions live at indices
//!    0, 4, 8, and so on.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::constants::{MEM_WORDS, PC_STEP, WORD_BYTES, Word};
use crate::common::error::SimError;
use crate::core::Core;

/// Reads an image file from disk.
///
/// # Errors
///
/// Returns [`SimError::Io`] if the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    debug!(path = %path.display(), len = bytes.len(), "read image file");
    Ok(bytes)
}

/// Unpacks a little-endian byte image into words.
///
/// # Errors
///
/// Returns [`SimError::MisalignedImage`] if the length is not a multiple of 4.
pub fn words_from_bytes(bytes: &[u8]) -> Result<Vec<Word>, SimError> {
    if bytes.len() % WORD_BYTES != 0 {
        return Err(SimError::MisalignedImage { len: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(WORD_BYTES)
        .map(|c| Word::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Spreads a straight-line program over the indices the program counter visits.
///
/// Slots between instructions are zero.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the spread program exceeds memory.
pub fn layout_program(program: &[Word]) -> Result<Vec<Word>, SimError> {
    let stride = PC_STEP as usize;
    let len = program.len().saturating_sub(1) * stride + usize::from(!program.is_empty());
    if len > MEM_WORDS {
        return Err(SimError::ImageTooLarge {
            words: len,
            capacity: MEM_WORDS,
        });
    }
    let mut image = vec![0; len];
    for (i, &inst) in program.iter().enumerate() {
        image[i * stride] = inst;
    }
    Ok(image)
}

/// Copies a word image into memory from index 0.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the image exceeds memory.
pub fn load_words(core: &mut Core, words: &[Word]) -> Result<(), SimError> {
    core.load_memory(words)?;
    debug!(words = words.len(), "loaded word image");
    Ok(())
}

/// Copies a little-endian byte image into memory from index 0.
///
/// # Errors
///
/// Returns [`SimError::MisalignedImage`] or [`SimError::ImageTooLarge`].
pub fn load_image(core: &mut Core, bytes: &[u8]) -> Result<(), SimError> {
    let words = words_from_bytes(bytes)?;
    load_words(core, &words)
}

/// Lays out and loads a straight-line program.
///
/// # Errors
///
/// Returns [`SimError::ImageTooLarge`] if the program does not fit.
pub fn load_program(core: &mut Core, program: &[Word]) -> Result<(), SimError> {
    let image = layout_program(program)?;
    load_words(core, &image)
}
