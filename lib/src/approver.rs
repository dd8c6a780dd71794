// Copyright (c) 2023 The Solsnap Contributors

//! Host [Approver] implementations

use std::{
    io::Write,
    sync::atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use log::{debug, warn};
use strum::Display;
use tokio::sync::Mutex;

use solsnap_core::{
    engine::Approver,
    prompt::{Component, Prompt},
};

/// Approval mode selection
#[derive(Copy, Clone, Debug, PartialEq, clap::ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ApproveMode {
    /// Prompt on the terminal
    Prompt,
    /// Approve every request
    Always,
    /// Reject every request
    Never,
}

/// Approver returning a fixed decision without user interaction
#[derive(Debug)]
pub struct FixedApprover {
    approve: bool,
    count: AtomicUsize,
}

impl FixedApprover {
    pub fn new(approve: bool) -> Self {
        Self {
            approve,
            count: AtomicUsize::new(0),
        }
    }

    /// Number of prompts answered
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Approver for FixedApprover {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        debug!("{} for {}: {}", prompt.title, prompt.origin, self.approve);

        self.count.fetch_add(1, Ordering::SeqCst);
        self.approve
    }
}

/// Approver rendering prompts to the terminal and reading a `y/N` answer
#[derive(Debug, Default)]
pub struct TerminalApprover {
    // One prompt on screen at a time
    lock: Mutex<()>,
}

impl TerminalApprover {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Approver for TerminalApprover {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        let _l = self.lock.lock().await;

        let text = render(&prompt.components());

        let r = tokio::task::spawn_blocking(move || {
            let mut e = std::io::stderr().lock();
            write!(e, "{text}\nApprove? [y/N]: ")?;
            e.flush()?;

            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;

            Ok::<_, std::io::Error>(line)
        })
        .await;

        match r {
            Ok(Ok(line)) => parse_answer(&line),
            Ok(Err(e)) => {
                warn!("prompt failed: {}", e);
                false
            }
            Err(e) => {
                warn!("prompt task failed: {}", e);
                false
            }
        }
    }
}

/// Generic approver (abstract over approval modes)
#[derive(Debug)]
pub enum GenericApprover {
    Terminal(TerminalApprover),
    Fixed(FixedApprover),
}

impl From<ApproveMode> for GenericApprover {
    fn from(m: ApproveMode) -> Self {
        match m {
            ApproveMode::Prompt => Self::Terminal(TerminalApprover::new()),
            ApproveMode::Always => Self::Fixed(FixedApprover::new(true)),
            ApproveMode::Never => Self::Fixed(FixedApprover::new(false)),
        }
    }
}

#[async_trait]
impl Approver for GenericApprover {
    async fn confirm(&self, prompt: &Prompt) -> bool {
        match self {
            Self::Terminal(a) => a.confirm(prompt).await,
            Self::Fixed(a) => a.confirm(prompt).await,
        }
    }
}

/// Render a prompt component tree as plain text
pub fn render(components: &[Component]) -> String {
    let mut s = String::new();

    for c in components {
        match c {
            Component::Heading(h) => {
                s.push_str(&format!("== {h} ==\n"));
            }
            Component::Text(t) => {
                s.push_str(t);
                s.push('\n');
            }
            Component::Divider => s.push_str("--------\n"),
        }
    }

    s
}

/// Only an explicit yes approves
fn parse_answer(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
}
