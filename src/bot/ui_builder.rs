//! UI Builder module for creating keyboards and formatting messages.
//!
//! Everything here is a pure function of (state, language, directory data);
//! sending and editing messages stays in the handlers.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::directory::{Directory, Organization};
use crate::language::Language;

/// At most this many search hits become picker buttons.
pub const MAX_SEARCH_RESULTS: usize = 8;

/// Trilingual prompt shown above the language picker.
pub const LANGUAGE_PROMPT: &str =
    "🏛️ *MESOB Agaro Service Bot*\n\nPlease select language:\nAfaan filadhu:\nቋንቋ ይምረጡ:";

pub fn organization_picker_header(lang: Language) -> &'static str {
    match lang {
        Language::Oromo => "🏢 Dhaabbilee MESOB:\n\nMaqaa filadhu:",
        Language::Amharic => "🏢 በMESOB ያሉ ድርጅቶች:\n\nስም ይምረጡ:",
        Language::English => "🏢 MESOB Organizations:\n\nSelect name:",
    }
}

pub fn search_prompt(lang: Language) -> &'static str {
    match lang {
        Language::Oromo => "Maqaa dhaabbataa barreessi:",
        Language::Amharic => "የድርጅት ስም ይፃፉ:",
        Language::English => "Enter organization name:",
    }
}

pub fn back_label(lang: Language) -> &'static str {
    match lang {
        Language::Oromo => "🔙 Deebi'i",
        Language::Amharic => "🔙 ተመለስ",
        Language::English => "🔙 Back",
    }
}

pub fn help_message() -> &'static str {
    "MESOB Service Bot\nCommands:\n/start - Start bot\n/help - Show this message"
}

/// Hint for free text arriving outside the search prompt.
pub fn usage_hint() -> &'static str {
    "Send /start to browse organizations."
}

fn back_button(lang: Language) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(back_label(lang), "back")
}

fn organization_button(org: &Organization, lang: Language) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(org.name(lang).to_owned(), format!("org_{}", org.id))
}

pub fn language_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = Language::ALL
        .iter()
        .map(|&lang| {
            vec![InlineKeyboardButton::callback(
                lang.button_label(),
                format!("lang_{}", lang.code()),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// Organization picker: one button per organization in directory order,
/// with a trailing search button.
pub fn organization_keyboard(directory: &Directory, lang: Language) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = directory
        .organizations
        .iter()
        .map(|org| vec![organization_button(org, lang)])
        .collect();
    rows.push(vec![InlineKeyboardButton::callback("🔍 Search", "search")]);
    InlineKeyboardMarkup::new(rows)
}

/// Service list for one organization, rendered as Markdown.
pub fn services_message(org: &Organization, lang: Language) -> String {
    let services_text: Vec<String> = org
        .services(lang)
        .iter()
        .map(|service| format!("• {service}"))
        .collect();
    format!(
        "✅ *{}*\n\n📋 Services at MESOB:\n{}",
        org.name(lang),
        services_text.join("\n")
    )
}

pub fn back_keyboard(lang: Language) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![back_button(lang)]])
}

/// Search reply text. The count reports every match even when the picker
/// below is truncated.
pub fn search_results_message(count: usize, lang: Language) -> String {
    if count == 0 {
        return match lang {
            Language::Oromo => "Dhaabbanni hin argamne.",
            Language::Amharic => "ምንም ድርጅት አልተገኘም።",
            Language::English => "No organizations found.",
        }
        .to_string();
    }
    match lang {
        Language::Oromo => format!("Dhaabbilee {count} argaman:"),
        Language::Amharic => format!("{count} ድርጅቶች ተገኝተዋል:"),
        Language::English => format!("Found {count} organizations:"),
    }
}

/// Picker for search hits, truncated to the first [`MAX_SEARCH_RESULTS`],
/// with a trailing back button.
pub fn search_results_keyboard(results: &[&Organization], lang: Language) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = results
        .iter()
        .take(MAX_SEARCH_RESULTS)
        .map(|org| vec![organization_button(org, lang)])
        .collect();
    rows.push(vec![back_button(lang)]);
    InlineKeyboardMarkup::new(rows)
}
