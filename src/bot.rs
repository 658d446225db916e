//! Bot service — pumps the transport through the dialog machine.
//!
//! One loop merges two sources: inbound user messages and the reminder
//! scheduler's outbound queue. Sessions are created only by `/start`; stray
//! text from an unknown chat gets the generic invalid-input reply without
//! creating state.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::channels::{Command, Incoming, Outgoing, SessionId, Transport};
use crate::config::BotConfig;
use crate::dialog::{Turn, TurnEffect};
use crate::error::Result;
use crate::registry::SessionRegistry;
use crate::reminder::ReminderScheduler;
use crate::texts::{self, Locale, MessageKey};

/// The assembled bot: registry, reminder scheduler, and transport.
pub struct Bot {
    config: BotConfig,
    registry: Arc<SessionRegistry>,
    scheduler: Arc<ReminderScheduler>,
    transport: Arc<dyn Transport>,
    outbound_rx: mpsc::Receiver<Outgoing>,
}

impl Bot {
    pub fn new(config: BotConfig, transport: Arc<dyn Transport>) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        let (outbound_tx, outbound_rx) = mpsc::channel(256);
        let scheduler = Arc::new(ReminderScheduler::new(
            &config,
            Arc::clone(&registry),
            outbound_tx,
        ));
        Self {
            config,
            registry,
            scheduler,
            transport,
            outbound_rx,
        }
    }

    /// Run until the transport stream ends.
    pub async fn run(mut self) -> Result<()> {
        let mut incoming = self.transport.start().await?;
        tracing::info!(
            bot = %self.config.name,
            transport = self.transport.name(),
            "Bot started"
        );

        loop {
            tokio::select! {
                maybe = incoming.recv() => match maybe {
                    Some(msg) => self.handle_incoming(msg).await,
                    None => break,
                },
                maybe = self.outbound_rx.recv() => match maybe {
                    Some(out) => self.deliver(out).await,
                    None => break,
                },
            }
        }

        tracing::info!("Transport stream ended, shutting down");
        Ok(())
    }

    async fn handle_incoming(&self, msg: Incoming) {
        let turn = match msg.command {
            Some(Command::Start) => {
                let session = self.registry.get_or_create(msg.session).await;
                let turn = session.lock().await.start();
                Some(turn)
            }
            Some(Command::Cancel) => match self.registry.get(msg.session).await {
                Some(session) => Some(session.lock().await.handle_cancel()),
                // Nothing to end; still acknowledge in the default locale.
                None => {
                    self.deliver(Outgoing::text(
                        msg.session,
                        texts::text(Locale::default(), MessageKey::Cancel),
                    ))
                    .await;
                    None
                }
            },
            None => match self.registry.get(msg.session).await {
                Some(session) => {
                    let turn = session.lock().await.handle_text(&msg.text, &self.config);
                    Some(turn)
                }
                None => {
                    self.deliver(Outgoing::text(
                        msg.session,
                        texts::text(Locale::default(), MessageKey::InvalidInput),
                    ))
                    .await;
                    None
                }
            },
        };

        if let Some(turn) = turn {
            self.apply_turn(msg.session, turn).await;
        }
    }

    async fn apply_turn(&self, session: SessionId, turn: Turn) {
        for reply in turn.replies {
            self.deliver(Outgoing {
                session,
                text: reply.text,
                choices: reply.choices,
            })
            .await;
        }

        match turn.effect {
            TurnEffect::None => {}
            TurnEffect::PlanReady => self.scheduler.register(session).await,
            TurnEffect::SessionEnded => {
                self.registry.remove(session).await;
                self.scheduler.cancel(session).await;
                tracing::info!(session = %session, "Session ended");
            }
        }
    }

    async fn deliver(&self, out: Outgoing) {
        if let Err(e) = self.transport.send(&out).await {
            tracing::warn!(session = %out.session, "Failed to deliver message: {e}");
        }
    }

    /// The session registry (exposed for integration tests and callers that
    /// embed the bot).
    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// The reminder scheduler.
    pub fn scheduler(&self) -> &Arc<ReminderScheduler> {
        &self.scheduler
    }
}
