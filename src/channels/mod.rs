//! Transport abstraction for message I/O.

pub mod cli;
pub mod telegram;

pub use cli::CliTransport;
pub use telegram::TelegramTransport;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::ChannelError;

/// Identity of one remote user's session (the platform chat id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub i64);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Out-of-band commands recognized by transports in any dialog state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Cancel,
}

/// A message received from the remote user.
#[derive(Debug, Clone)]
pub struct Incoming {
    pub session: SessionId,
    pub text: String,
    pub command: Option<Command>,
}

impl Incoming {
    pub fn new(session: SessionId, text: impl Into<String>) -> Self {
        let text = text.into();
        let command = match text.trim() {
            "/start" => Some(Command::Start),
            "/cancel" => Some(Command::Cancel),
            _ => None,
        };
        Self {
            session,
            text,
            command,
        }
    }
}

/// A message to deliver to the remote user, with optional quick-reply tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub session: SessionId,
    pub text: String,
    /// Ordered tokens the transport should present as quick-reply options.
    pub choices: Option<Vec<String>>,
}

impl Outgoing {
    pub fn text(session: SessionId, text: impl Into<String>) -> Self {
        Self {
            session,
            text: text.into(),
            choices: None,
        }
    }

    pub fn with_choices(session: SessionId, text: impl Into<String>, choices: Vec<String>) -> Self {
        Self {
            session,
            text: text.into(),
            choices: Some(choices),
        }
    }
}

/// A transport connects the dialog core to a messaging surface. It receives
/// raw answers from users and delivers the dialog's replies back.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Human-readable transport name (e.g., "telegram", "cli").
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    ///
    /// The implementation handles polling or reading internally and yields
    /// messages on the returned receiver until it stops.
    async fn start(&self) -> Result<mpsc::Receiver<Incoming>, ChannelError>;

    /// Deliver one outgoing message.
    async fn send(&self, out: &Outgoing) -> Result<(), ChannelError>;
}
