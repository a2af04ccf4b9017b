//! Message Handler module for processing incoming Telegram messages

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{debug, info};

use crate::dialogue::{ConversationState, DirectoryDialogue};
use crate::directory::DirectoryStore;
use crate::language::Language;

use super::ui_builder;

/// Handle incoming text messages: commands and free-text search input.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    store: Arc<DirectoryStore>,
    dialogue: DirectoryDialogue,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    debug!(user_id = %msg.chat.id, "Received text message");

    // Handle /start command: always restarts at the language picker.
    if text == "/start" {
        info!(user_id = %msg.chat.id, "Starting conversation");
        bot.send_message(msg.chat.id, ui_builder::LANGUAGE_PROMPT)
            .parse_mode(ParseMode::Markdown)
            .reply_markup(ui_builder::language_keyboard())
            .await?;
        dialogue.update(ConversationState::ChoosingLanguage).await?;
        return Ok(());
    }

    // Handle /help command: reachable from any state, state unchanged.
    if text == "/help" {
        bot.send_message(msg.chat.id, ui_builder::help_message())
            .await?;
        return Ok(());
    }

    let state = dialogue.get().await?.unwrap_or_default();
    match state {
        ConversationState::AwaitingSearchQuery { lang } => {
            handle_search_query(&bot, &msg, text, lang, &store, &dialogue).await?;
        }
        _ => {
            bot.send_message(msg.chat.id, ui_builder::usage_hint())
                .await?;
        }
    }
    Ok(())
}

async fn handle_search_query(
    bot: &Bot,
    msg: &Message,
    term: &str,
    lang: Language,
    store: &DirectoryStore,
    dialogue: &DirectoryDialogue,
) -> Result<()> {
    let directory = store.load();
    let results = directory.search(term);
    info!(user_id = %msg.chat.id, matches = results.len(), "Search completed");

    bot.send_message(msg.chat.id, ui_builder::search_results_message(results.len(), lang))
        .reply_markup(ui_builder::search_results_keyboard(&results, lang))
        .await?;
    dialogue
        .update(ConversationState::BrowsingOrganizations { lang })
        .await?;
    Ok(())
}
