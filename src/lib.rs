//! # MESOB Agaro Service Bot
//!
//! A Telegram bot that lets users browse the organizations hosted at the
//! MESOB one-stop service center in Agaro in Afaan Oromoo, Amharic or
//! English, with a simple name search.

pub mod bot;
pub mod dialogue;
pub mod directory;
pub mod language;
