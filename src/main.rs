use std::sync::Arc;

use calorie_compass::bot::Bot;
use calorie_compass::channels::{CliTransport, TelegramTransport, Transport};
use calorie_compass::config::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = BotConfig::from_env()?;

    eprintln!("🥗 Calorie Compass v{}", env!("CARGO_PKG_VERSION"));

    let transport: Arc<dyn Transport> = match std::env::var("TELEGRAM_BOT_TOKEN") {
        Ok(token) => {
            eprintln!("   Transport: telegram");
            Arc::new(TelegramTransport::new(secrecy::SecretString::from(token)))
        }
        Err(_) => {
            eprintln!("   Transport: cli (set TELEGRAM_BOT_TOKEN for Telegram)");
            eprintln!("   Type /start to begin, /cancel to end the session.\n");
            Arc::new(CliTransport::new())
        }
    };

    let bot = Bot::new(config, transport);
    bot.run().await?;

    Ok(())
}
