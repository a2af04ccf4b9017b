use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::dispatching::dialogue::{self, InMemStorage};
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mesob_bot::bot;
use mesob_bot::dialogue::ConversationState;
use mesob_bot::directory::DirectoryStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting MESOB Agaro Service Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Missing token is fatal at startup, never a runtime error.
    let bot_token =
        env::var("TELEGRAM_BOT_TOKEN").context("TELEGRAM_BOT_TOKEN must be set")?;

    let data_path =
        env::var("ORGANIZATIONS_FILE").unwrap_or_else(|_| "data.json".to_string());

    info!("Serving organization directory from: {}", data_path);

    let store = Arc::new(DirectoryStore::new(data_path));
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // One dialogue record per chat, held in memory only.
    let handler = dialogue::enter::<Update, InMemStorage<ConversationState>, ConversationState, _>()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![
            InMemStorage::<ConversationState>::new(),
            store
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
