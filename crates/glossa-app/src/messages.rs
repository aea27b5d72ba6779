use glossa_store::SaveError;
use glossa_types::Entry;

pub fn found(entry: &Entry) -> String {
    format!("Word: {}\nTranslation: {}", entry.word, entry.translation)
}

pub fn not_found() -> &'static str {
    "Word not found!"
}

pub fn inserted(word: &str) -> String {
    format!("Word '{word}' inserted!")
}

pub fn already_present(word: &str) -> String {
    format!("Word '{word}' already exists.")
}

pub fn deleted(word: &str) -> String {
    format!("Word '{word}' deleted!")
}

pub fn unsaved(error: &SaveError) -> String {
    format!("Some data may not have been saved ({error}).")
}
