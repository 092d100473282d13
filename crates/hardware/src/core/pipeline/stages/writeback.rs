//! Writeback (WB) Stage.
//!
//! Drives the register file write port. It holds no state of its own: the
//! destination comes from the decoder's registered record and the value from
//! the execution unit's registered result, both as they stood before the edge.
//! The write is enabled for the two arithmetic instruction forms.

use crate::common::reg::RegWritePort;
use crate::core::pipeline::latches::{DecodedInstruction, ExecutionResult};

/// Combinational writeback driver.
#[derive(Debug)]
pub struct WriteBack;

impl WriteBack {
    /// Computes the register write port signals for the coming edge.
    pub const fn drive(decoded: &DecodedInstruction, executed: &ExecutionResult) -> RegWritePort {
        RegWritePort {
            index: decoded.rd,
            value: executed.result,
            enable: decoded.class.writes_register(),
        }
    }
}
