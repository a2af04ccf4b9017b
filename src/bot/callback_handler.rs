//! Callback Handler module for processing inline keyboard callback queries

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{MaybeInaccessibleMessage, ParseMode};
use tracing::{debug, info, warn};

use crate::dialogue::{CallbackAction, ConversationState, DirectoryDialogue};
use crate::directory::DirectoryStore;
use crate::language::Language;

use super::ui_builder;

/// Handle callback queries from the inline keyboards, gated by the current
/// conversation state.
pub async fn callback_handler(
    bot: Bot,
    q: CallbackQuery,
    store: Arc<DirectoryStore>,
    dialogue: DirectoryDialogue,
) -> Result<()> {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(action) = q.data.as_deref().and_then(CallbackAction::parse) else {
        debug!(user_id = %q.from.id, data = ?q.data, "Ignoring unknown callback payload");
        return Ok(());
    };
    let Some(msg) = &q.message else {
        return Ok(());
    };

    let state = dialogue.get().await?.unwrap_or_default();
    debug!(user_id = %q.from.id, state = ?state, action = ?action, "Received callback query");

    match action {
        // A language pick lands in the organization picker no matter where
        // the conversation was.
        CallbackAction::SelectLanguage(lang) => {
            info!(user_id = %q.from.id, lang = lang.code(), "Language selected");
            show_organization_picker(&bot, msg, &store, lang).await?;
            dialogue
                .update(ConversationState::BrowsingOrganizations { lang })
                .await?;
        }
        CallbackAction::SelectOrganization(org_id) => {
            if let ConversationState::BrowsingOrganizations { lang } = state {
                show_services(&bot, &q, msg, &store, org_id, lang, &dialogue).await?;
            } else {
                debug!(user_id = %q.from.id, "Organization callback outside picker, ignoring");
            }
        }
        CallbackAction::Search => {
            if let ConversationState::BrowsingOrganizations { lang } = state {
                bot.edit_message_text(msg.chat().id, msg.id(), ui_builder::search_prompt(lang))
                    .await?;
                dialogue
                    .update(ConversationState::AwaitingSearchQuery { lang })
                    .await?;
            } else {
                debug!(user_id = %q.from.id, "Search callback outside picker, ignoring");
            }
        }
        CallbackAction::Back => match state {
            ConversationState::BrowsingOrganizations { lang }
            | ConversationState::ViewingServices { lang } => {
                show_organization_picker(&bot, msg, &store, lang).await?;
                dialogue
                    .update(ConversationState::BrowsingOrganizations { lang })
                    .await?;
            }
            _ => {
                debug!(user_id = %q.from.id, "Back callback outside conversation, ignoring");
            }
        },
    }
    Ok(())
}

/// Edit the message into the organization picker for `lang`.
async fn show_organization_picker(
    bot: &Bot,
    msg: &MaybeInaccessibleMessage,
    store: &DirectoryStore,
    lang: Language,
) -> Result<()> {
    let directory = store.load();
    bot.edit_message_text(
        msg.chat().id,
        msg.id(),
        ui_builder::organization_picker_header(lang),
    )
    .reply_markup(ui_builder::organization_keyboard(&directory, lang))
    .await?;
    Ok(())
}

async fn show_services(
    bot: &Bot,
    q: &CallbackQuery,
    msg: &MaybeInaccessibleMessage,
    store: &DirectoryStore,
    org_id: u32,
    lang: Language,
    dialogue: &DirectoryDialogue,
) -> Result<()> {
    let directory = store.load();
    match directory.find(org_id) {
        Some(org) => {
            bot.edit_message_text(msg.chat().id, msg.id(), ui_builder::services_message(org, lang))
                .parse_mode(ParseMode::Markdown)
                .reply_markup(ui_builder::back_keyboard(lang))
                .await?;
            dialogue
                .update(ConversationState::ViewingServices { lang })
                .await?;
        }
        None => {
            // Stale button for an id no longer in the file. Tolerated no-op:
            // the message and state stay as they are.
            warn!(user_id = %q.from.id, org_id, "Callback referenced unknown organization id");
        }
    }
    Ok(())
}
