//! Display mapping for transcript entries.

use routine_builder::{EntryKind, TranscriptEntry};

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

pub const TYPING_TEXT: &str = "Bot is typing...";

/// One transcript line as the chat window draws it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryDisplay {
    /// CSS modifier, e.g. `chat-msg--user`.
    pub class: &'static str,
    pub label: Option<&'static str>,
    pub text: String,
}

pub fn entry_display(entry: &TranscriptEntry) -> EntryDisplay {
    match &entry.kind {
        EntryKind::User(text) => EntryDisplay { class: "chat-msg chat-msg--user", label: Some("You:"), text: text.clone() },
        EntryKind::Assistant(text) => {
            EntryDisplay { class: "chat-msg chat-msg--bot", label: Some("Bot:"), text: text.clone() }
        }
        EntryKind::Typing => {
            EntryDisplay { class: "chat-msg chat-msg--typing", label: None, text: TYPING_TEXT.to_owned() }
        }
        EntryKind::Notice(text) => EntryDisplay { class: "chat-msg chat-msg--notice", label: None, text: text.clone() },
        EntryKind::Error(text) => EntryDisplay { class: "chat-msg chat-msg--error", label: Some("Error:"), text: text.clone() },
    }
}
