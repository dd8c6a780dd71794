// Copyright (c) 2023 The Solsnap Contributors

//! Confirmation prompt content
//!
//! Prompts describe _what_ to show the user, all formatting (hex / utf8
//! rendering, batch itemisation) happens here so approvers only need to
//! lay out the resulting [`Component`] tree.

/// Prompt body
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Body {
    /// Single block of text
    Text(String),
    /// Itemised entries (batch signing)
    Items(Vec<Item>),
}

/// Labelled prompt entry
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Item {
    pub label: String,
    pub text: String,
}

/// Confirmation prompt shown prior to returning keys or signatures
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Prompt {
    /// Prompt heading
    pub title: &'static str,
    /// Host of the requesting origin
    pub origin: String,
    /// Operation specific content
    pub body: Body,
}

/// Display tree component
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Component {
    Heading(String),
    Text(String),
    Divider,
}

impl Prompt {
    /// Prompt for releasing a derived public key
    pub fn get_public_key(origin: &str, public_key: &str) -> Self {
        Self {
            title: "Confirm access",
            origin: origin.to_string(),
            body: Body::Text(public_key.to_string()),
        }
    }

    /// Prompt for signing a single (Base58) transaction message
    pub fn sign_transaction(origin: &str, message: &str) -> Self {
        Self {
            title: "Sign transaction",
            origin: origin.to_string(),
            body: Body::Text(message.to_string()),
        }
    }

    /// Prompt for signing a batch of transaction messages.
    ///
    /// Batches of one are shown as a single transaction.
    pub fn sign_all_transactions<S: AsRef<str>>(origin: &str, messages: &[S]) -> Self {
        if let [m] = messages {
            return Self::sign_transaction(origin, m.as_ref());
        }

        let items = messages
            .iter()
            .enumerate()
            .map(|(i, m)| Item {
                label: format!("Transaction {}", i + 1),
                text: m.as_ref().to_string(),
            })
            .collect();

        Self {
            title: "Sign transactions",
            origin: origin.to_string(),
            body: Body::Items(items),
        }
    }

    /// Prompt for signing a message, `display` is the rendered message text
    pub fn sign_message(origin: &str, display: String) -> Self {
        Self {
            title: "Sign message",
            origin: origin.to_string(),
            body: Body::Text(display),
        }
    }

    /// Build the display tree for this prompt:
    /// heading, origin, divider, then body content
    pub fn components(&self) -> Vec<Component> {
        let mut c = vec![
            Component::Heading(self.title.to_string()),
            Component::Text(self.origin.clone()),
            Component::Divider,
        ];

        match &self.body {
            Body::Text(t) => c.push(Component::Text(t.clone())),
            Body::Items(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        c.push(Component::Divider);
                    }
                    c.push(Component::Heading(item.label.clone()));
                    c.push(Component::Text(item.text.clone()));
                }
            }
        }

        c
    }
}
