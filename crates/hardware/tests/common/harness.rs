use ringcore::Core;
use ringcore::common::Word;
use ringcore::core::pipeline::latches::{DecodedInstruction, ExecutionResult};
use ringcore::sim::loader;

/// A core plus the helpers tests use to load and step it.
#[derive(Debug)]
pub struct TestContext {
    pub core: Core,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let mut core = Core::new();
        core.trace = true;
        Self { core }
    }

    /// Lays out a straight-line program at the indices the PC visits.
    pub fn load_program(mut self, program: &[Word]) -> Self {
        loader::load_program(&mut self.core, program).unwrap();
        self
    }

    /// Copies a raw word image into memory from index 0.
    pub fn load_words(mut self, words: &[Word]) -> Self {
        loader::load_words(&mut self.core, words).unwrap();
        self
    }

    pub fn with_reg(mut self, idx: usize, val: Word) -> Self {
        self.set_reg(idx, val);
        self
    }

    pub fn set_reg(&mut self, idx: usize, val: Word) {
        self.core.load_register(idx, val).unwrap();
    }

    pub fn get_reg(&self, idx: usize) -> Word {
        self.core.regs().read(idx)
    }

    pub fn tick(&mut self) {
        self.core.tick();
    }

    pub fn run(&mut self, n: u64) {
        self.core.run(n);
    }

    pub fn pc(&self) -> Word {
        self.core.peek_pc()
    }

    pub fn result(&self) -> Word {
        self.core.peek_result()
    }

    pub fn decoded(&self) -> DecodedInstruction {
        *self.core.decoder().output()
    }

    pub fn executed(&self) -> ExecutionResult {
        *self.core.execution().output()
    }

    pub fn instruction(&self) -> Word {
        self.core.memory().read_data()
    }
}
