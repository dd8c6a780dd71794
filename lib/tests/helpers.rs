#![allow(unused)]

use log::LevelFilter;
use simplelog::SimpleLogger;

use solsnap::{Engine, FixedApprover, MnemonicVault};
use solsnap_tests::Vector;

pub type TestEngine = Engine<MnemonicVault, FixedApprover>;

/// Setup an engine with a mnemonic vault for the provided test vector
pub fn setup(v: &Vector, approve: bool) -> TestEngine {
    let _ = SimpleLogger::init(LevelFilter::Debug, Default::default());

    let vault = MnemonicVault::from_phrase(v.mnemonic, "").unwrap();

    Engine::new(vault, FixedApprover::new(approve))
}
