#![allow(unused)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use log::debug;

use solsnap_core::{
    engine::{Approver, Curve, Engine, EntropyVault, Error},
    prompt::Prompt,
    slip10::Slip10Node,
};

/// Vault implementation for test use
pub struct TestVault {
    /// BIP39 Mnemonic derived seed
    pub seed: [u8; 64],
    /// Root entropy request count
    pub count: AtomicUsize,
}

impl TestVault {
    pub fn new(seed: [u8; 64]) -> Self {
        Self {
            seed,
            count: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntropyVault for TestVault {
    async fn root_entropy(&self, base_path: &[u32], curve: Curve) -> Result<Slip10Node, Error> {
        debug!("root entropy: {:?} ({})", base_path, curve);

        self.count.fetch_add(1, Ordering::SeqCst);

        Slip10Node::from_seed(&self.seed)?.derive_path(base_path)
    }
}

/// Approver with a fixed decision, recording shown prompts
pub struct TestApprover {
    pub approve: bool,
    pub prompts: Mutex<Vec<Prompt>>,
}

impl TestApprover {
    pub fn new(approve: bool) -> Self {
        Self {
            approve,
            prompts: Mutex::new(vec![]),
        }
    }

    pub fn count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Approver for TestApprover {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        debug!("prompt: {:?} (approve: {})", prompt, self.approve);

        self.prompts.lock().unwrap().push(prompt.clone());
        self.approve
    }
}

pub type TestEngine = Engine<TestVault, TestApprover>;

/// Setup an engine for the provided seed and approval decision
pub fn engine(seed: [u8; 64], approve: bool) -> TestEngine {
    let _ = simplelog::SimpleLogger::init(log::LevelFilter::Debug, Default::default());

    Engine::new(TestVault::new(seed), TestApprover::new(approve))
}
