use super::*;
use routine_builder::Transcript;

fn only_entry(transcript: &Transcript) -> &TranscriptEntry {
    &transcript.entries()[0]
}

// =============================================================
// entry_display
// =============================================================

#[test]
fn user_entry_is_labelled_you() {
    let mut transcript = Transcript::new();
    transcript.push_user("hello");
    let display = entry_display(only_entry(&transcript));
    assert_eq!(display.label, Some("You:"));
    assert_eq!(display.text, "hello");
    assert!(display.class.contains("chat-msg--user"));
}

#[test]
fn assistant_entry_is_labelled_bot() {
    let mut transcript = Transcript::new();
    transcript.push_assistant("Use SPF daily.");
    let display = entry_display(only_entry(&transcript));
    assert_eq!(display.label, Some("Bot:"));
    assert_eq!(display.text, "Use SPF daily.");
}

#[test]
fn typing_entry_shows_fixed_text() {
    let mut transcript = Transcript::new();
    transcript.push_typing();
    let display = entry_display(only_entry(&transcript));
    assert_eq!(display.label, None);
    assert_eq!(display.text, TYPING_TEXT);
    assert!(display.class.contains("typing"));
}

#[test]
fn error_entry_keeps_message() {
    let mut transcript = Transcript::new();
    transcript.push_error("request timed out after 30s");
    let display = entry_display(only_entry(&transcript));
    assert_eq!(display.label, Some("Error:"));
    assert_eq!(display.text, "request timed out after 30s");
}

#[test]
fn notice_entry_is_unlabelled() {
    let mut transcript = Transcript::new();
    transcript.push_notice("No products selected.");
    let display = entry_display(only_entry(&transcript));
    assert_eq!(display.label, None);
    assert!(display.class.contains("notice"));
}
