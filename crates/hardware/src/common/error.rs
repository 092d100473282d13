//! Simulation error definitions.
//!
//! The clocked core itself is total: every instruction word decodes to some
//! operation and every tick succeeds. Errors only arise at the edges of the
//! model, where an external collaborator hands data to the core:
//! 1. **Loading:** Images that do not fit the 1024-word memory, are not word sized,
//!    or cannot be read.
//! 2. **Injection:** Register indices outside the register file.
//! 3. **Driving:** Bounded runs that hit their tick limit.
//! 4. **Configuration:** Malformed JSON configuration.

use thiserror::Error;

/// Errors reported by the loader, simulator and configuration layers.
#[derive(Debug, Error)]
pub enum SimError {
    /// Image holds more words than the memory can store.
    #[error("image of {words} words does not fit in {capacity}-word memory")]
    ImageTooLarge {
        /// Number of words in the rejected image.
        words: usize,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// Byte image length is not a multiple of the word size.
    #[error("image length {len} is not a multiple of 4 bytes")]
    MisalignedImage {
        /// Length of the rejected byte image.
        len: usize,
    },

    /// Register index outside `0..32`.
    #[error("register index {0} out of range")]
    RegisterOutOfRange(usize),

    /// A bounded run reached its tick limit before its stop condition held.
    #[error("tick limit of {limit} reached")]
    TickLimit {
        /// The configured limit.
        limit: u64,
    },

    /// An image file could not be read.
    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
