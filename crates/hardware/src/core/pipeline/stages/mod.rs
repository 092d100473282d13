//! Clocked stage implementations.
//!
//! This module contains the components wired into the core's ring. It includes:
//! 1. **Fetch:** The program counter.
//! 2. **Decode:** The registered decoder.
//! 3. **Execute:** The registered ALU and branch unit.
//! 4. **Memory:** The unified single-ported memory.
//! 5. **Writeback:** The register file write-port driver.

/// Decoder with registered outputs.
pub mod decode;

/// Execution unit with registered outputs.
pub mod execute;

/// Program counter.
pub mod fetch;

/// Unified memory.
pub mod memory;

/// Writeback driver.
pub mod writeback;

pub use decode::{DecodeInputs, Decoder};
pub use execute::{ExecuteInputs, ExecutionUnit};
pub use fetch::{PcInputs, ProgramCounter};
pub use memory::{MemOp, MemoryInputs, MemoryUnit};
pub use writeback::WriteBack;
