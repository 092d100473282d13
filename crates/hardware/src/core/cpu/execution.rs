//! Clock Driver.
//!
//! This module implements the core's clock edge. It performs the following:
//! 1. **Evaluate:** Every clocked element computes its next state from the
//!    pre-edge state into a [`NextState`]. Nothing is mutated.
//! 2. **Commit:** All next states are installed together.
//! 3. **Observability:** Counters and an optional trace event per edge.
//!
//! Wiring of the ring, all sampled before the edge:
//!
//! ```text
//!   PC ──address──▶ Memory ──read port──▶ Decoder ──record──▶ RegisterFile (reads)
//!    ▲                 ▲                    │                      │
//!    │                 │ write data         ▼                      ▼
//!    └──branch_taken── Execution ◀──────── operands ───────────────┘
//!                          │
//!                          └──result──▶ WriteBack ──▶ RegisterFile (write)
//! ```

use tracing::{debug, trace};

use super::Core;
use crate::common::constants::{REG_ZERO, Word};
use crate::common::reg::{RegUpdate, RegWritePort};
use crate::core::pipeline::latches::{DecodedInstruction, ExecutionResult};
use crate::core::pipeline::stages::{
    DecodeInputs, ExecuteInputs, MemOp, MemoryInputs, PcInputs, WriteBack,
};
use crate::core::pipeline::traits::Clocked;
use crate::isa::disasm::disassemble;

/// Next-state values for every clocked element, computed in the evaluate phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NextState {
    /// Next program counter.
    pub pc: Word,
    /// Next decoder output.
    pub decoded: DecodedInstruction,
    /// Next execution unit output.
    pub executed: ExecutionResult,
    /// Memory operation for this edge.
    pub memory: MemOp,
    /// Register slot update for this edge.
    pub reg: RegUpdate,
    /// Write port signals that produced `reg`.
    pub reg_port: RegWritePort,
}

impl Core {
    /// Sets the reset level.
    ///
    /// While asserted, every tick holds the program counter, decoder,
    /// execution unit and memory read register at their reset values. Memory
    /// contents and the register file are not reset.
    pub fn reset(&mut self, active: bool) {
        if active != self.reset {
            debug!(active, pc = self.pc.value(), "reset level changed");
        }
        self.reset = active;
    }

    /// Advances the core by one clock edge.
    pub fn tick(&mut self) {
        let next = self.evaluate();
        if self.trace {
            self.trace_edge(&next);
        }
        self.commit(next);
    }

    /// Advances the core by `n` clock edges.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Evaluate phase: computes every next state from the pre-edge state.
    pub fn evaluate(&self) -> NextState {
        let reset = self.reset;
        let instruction = self.memory.read_data();
        let decoded = *self.decoder.output();
        let executed = *self.exec.output();

        let pc = self.pc.evaluate(PcInputs {
            reset,
            branch_taken: executed.branch_taken,
            instruction,
        });

        let next_decoded = self.decoder.evaluate(DecodeInputs { reset, instruction });

        let next_executed = self.exec.evaluate(ExecuteInputs {
            reset,
            decoded,
            rv1: self.regs.read(decoded.rs1),
            rv2: self.regs.read(decoded.rs2),
        });

        let memory = self.memory.evaluate(MemoryInputs {
            reset,
            address: self.pc.value(),
            write_enable: decoded.is_load_store,
            write_data: executed.result,
        });

        let reg_port = WriteBack::drive(&decoded, &executed);
        let reg = self.regs.evaluate(reg_port);

        NextState {
            pc,
            decoded: next_decoded,
            executed: next_executed,
            memory,
            reg,
            reg_port,
        }
    }

    /// Commit phase: installs a [`NextState`] into every element.
    pub fn commit(&mut self, next: NextState) {
        self.record(&next);

        self.pc.commit(next.pc);
        self.decoder.commit(next.decoded);
        self.exec.commit(next.executed);
        self.memory.commit(next.memory);
        self.regs.commit(next.reg);
    }

    fn record(&mut self, next: &NextState) {
        let stats = &mut self.stats;
        stats.ticks += 1;
        if self.reset {
            stats.reset_ticks += 1;
        }
        if next.executed.branch_taken {
            stats.branches_taken += 1;
        }
        if next.reg_port.is_write() {
            stats.register_writes += 1;
        } else if next.reg.index != REG_ZERO {
            stats.register_clears += 1;
        }
        match next.memory {
            MemOp::Write { .. } => stats.memory_writes += 1,
            MemOp::Read { .. } => stats.memory_reads += 1,
            MemOp::Reset => {}
        }
    }

    fn trace_edge(&self, next: &NextState) {
        let instruction = self.memory.read_data();
        trace!(
            tick = self.stats.ticks,
            pc = self.pc.value(),
            inst = %disassemble(instruction),
            op = self.decoder.output().op.mnemonic(),
            result = next.executed.result,
            branch = next.executed.branch_taken,
            next_pc = next.pc,
            "edge"
        );
        if next.reg_port.is_write() {
            trace!(rd = next.reg.index, value = next.reg.value, "register write");
        }
    }
}
