//! Conversation state and callback payload parsing for the directory dialogue.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::language::Language;

/// Per-chat conversation state. The chosen language travels inside the
/// state, so no session can observe another session's language.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    Start,
    /// Language picker shown, waiting for a `lang_*` callback.
    ChoosingLanguage,
    /// Organization picker shown.
    BrowsingOrganizations { lang: Language },
    /// Service list for one organization shown; only `back` is accepted.
    ViewingServices { lang: Language },
    /// Search prompt shown, waiting for free-text input.
    AwaitingSearchQuery { lang: Language },
}

impl ConversationState {
    /// The session language, if one has been chosen yet.
    pub fn language(&self) -> Option<Language> {
        match self {
            ConversationState::Start | ConversationState::ChoosingLanguage => None,
            ConversationState::BrowsingOrganizations { lang }
            | ConversationState::ViewingServices { lang }
            | ConversationState::AwaitingSearchQuery { lang } => Some(*lang),
        }
    }
}

/// Type alias for the directory dialogue
pub type DirectoryDialogue = Dialogue<ConversationState, InMemStorage<ConversationState>>;

/// A parsed inline-keyboard callback payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    SelectLanguage(Language),
    SelectOrganization(u32),
    Search,
    Back,
}

impl CallbackAction {
    /// Parse the opaque payload strings carried by the inline keyboards
    /// (`lang_en`, `org_3`, `search`, `back`). Unknown payloads yield `None`
    /// and are ignored by the callback handler.
    pub fn parse(data: &str) -> Option<CallbackAction> {
        if let Some(code) = data.strip_prefix("lang_") {
            return Language::from_code(code).map(CallbackAction::SelectLanguage);
        }
        if let Some(id) = data.strip_prefix("org_") {
            return id.parse().ok().map(CallbackAction::SelectOrganization);
        }
        match data {
            "search" => Some(CallbackAction::Search),
            "back" => Some(CallbackAction::Back),
            _ => None,
        }
    }
}
