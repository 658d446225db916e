//! Telegram transport — long-polls the Bot API for updates.
//!
//! Incoming text is mapped to `Incoming` messages keyed by chat id; outgoing
//! replies carry their quick-reply tokens as a one-time reply keyboard.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;

use crate::channels::{Incoming, Outgoing, SessionId, Transport};
use crate::error::ChannelError;

/// Keyboards wider than this are wrapped onto the next row.
const KEYBOARD_ROW_WIDTH: usize = 3;

/// Telegram transport — connects to the Bot API via long-polling.
pub struct TelegramTransport {
    bot_token: SecretString,
    client: reqwest::Client,
}

impl TelegramTransport {
    pub fn new(bot_token: SecretString) -> Self {
        Self {
            bot_token,
            client: reqwest::Client::new(),
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!(
            "https://api.telegram.org/bot{}/{method}",
            self.bot_token.expose_secret()
        )
    }

    /// Build the `sendMessage` payload, attaching the choice set as a reply
    /// keyboard or removing a stale one.
    fn message_body(out: &Outgoing) -> serde_json::Value {
        let mut body = serde_json::json!({
            "chat_id": out.session.0,
            "text": out.text,
        });
        body["reply_markup"] = match &out.choices {
            Some(choices) => {
                let rows: Vec<&[String]> = choices.chunks(KEYBOARD_ROW_WIDTH).collect();
                serde_json::json!({
                    "keyboard": rows,
                    "one_time_keyboard": true,
                    "resize_keyboard": true,
                })
            }
            None => serde_json::json!({ "remove_keyboard": true }),
        };
        body
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<Incoming>, ChannelError> {
        let (tx, rx) = mpsc::channel(256);
        let url = self.api_url("getUpdates");
        let client = self.client.clone();

        tokio::spawn(async move {
            let mut offset: i64 = 0;

            tracing::info!("Telegram transport listening for messages...");

            loop {
                let body = serde_json::json!({
                    "offset": offset,
                    "timeout": 30,
                    "allowed_updates": ["message"],
                });

                let resp = match client.post(&url).json(&body).send().await {
                    Ok(r) => r,
                    Err(e) => {
                        tracing::warn!("Telegram poll error: {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                        continue;
                    }
                };

                let data: serde_json::Value = match resp.json().await {
                    Ok(d) => d,
                    Err(e) => {
                        tracing::warn!("Telegram parse error: {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(5)).await;
                        continue;
                    }
                };

                let Some(results) = data.get("result").and_then(serde_json::Value::as_array)
                else {
                    continue;
                };

                for update in results {
                    if let Some(uid) = update.get("update_id").and_then(serde_json::Value::as_i64)
                    {
                        offset = uid + 1;
                    }

                    let Some(message) = update.get("message") else {
                        continue;
                    };
                    let Some(text) = message.get("text").and_then(serde_json::Value::as_str)
                    else {
                        continue;
                    };
                    let Some(chat_id) = message
                        .get("chat")
                        .and_then(|c| c.get("id"))
                        .and_then(serde_json::Value::as_i64)
                    else {
                        continue;
                    };

                    if tx.send(Incoming::new(SessionId(chat_id), text)).await.is_err() {
                        tracing::info!("Telegram listener channel closed");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, out: &Outgoing) -> Result<(), ChannelError> {
        let resp = self
            .client
            .post(self.api_url("sendMessage"))
            .json(&Self::message_body(out))
            .send()
            .await
            .map_err(|e| ChannelError::SendFailed {
                name: "telegram".into(),
                reason: e.to_string(),
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err = resp.text().await.unwrap_or_default();
            return Err(ChannelError::SendFailed {
                name: "telegram".into(),
                reason: format!("sendMessage returned {status}: {err}"),
            });
        }

        Ok(())
    }
}
