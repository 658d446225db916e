//! CLI transport — stdin/stdout REPL for local runs.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::channels::{Incoming, Outgoing, SessionId, Transport};
use crate::error::ChannelError;

/// The single session identity a CLI run talks through.
const CLI_SESSION: SessionId = SessionId(0);

/// A simple CLI transport that reads from stdin and writes to stdout.
#[derive(Default)]
pub struct CliTransport;

impl CliTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for CliTransport {
    fn name(&self) -> &str {
        "cli"
    }

    async fn start(&self) -> Result<mpsc::Receiver<Incoming>, ChannelError> {
        let (tx, rx) = mpsc::channel(64);

        tokio::spawn(async move {
            let stdin = tokio::io::stdin();
            let reader = BufReader::new(stdin);
            let mut lines = reader.lines();

            eprint!("> ");

            loop {
                match lines.next_line().await {
                    Ok(Some(line)) => {
                        let line = line.trim().to_string();
                        if line.is_empty() {
                            eprint!("> ");
                            continue;
                        }
                        if tx.send(Incoming::new(CLI_SESSION, line)).await.is_err() {
                            break;
                        }
                    }
                    Ok(None) => break, // EOF
                    Err(e) => {
                        tracing::error!("Error reading stdin: {}", e);
                        break;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, out: &Outgoing) -> Result<(), ChannelError> {
        match &out.choices {
            Some(choices) => println!("\n{}\n[{}]\n", out.text, choices.join(" | ")),
            None => println!("\n{}\n", out.text),
        }
        eprint!("> ");
        Ok(())
    }
}
