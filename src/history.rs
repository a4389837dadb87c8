// src/history.rs
//! In-memory per-subject conversation history.
//!
//! `ChatStore` is an injectable store living in `AppState` rather than an
//! ambient global map. Each subject key owns an async mutex; a request
//! holds its subject's lock for the whole ask flow, so concurrent requests
//! on the same subject serialize and cannot interleave their seed/append
//! steps.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;

use crate::deepseek_client::ChatMessage;

/// One system entry plus ten question/answer pairs.
pub const MAX_ENTRIES: usize = 21;

#[derive(Debug, Default)]
pub struct ChatHistory {
    entries: Vec<ChatMessage>,
}

impl ChatHistory {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Seeds the conversation with its system entry. Only meaningful on an
    /// empty history; callers check `is_empty` first.
    pub fn seed(&mut self, system_content: String) {
        self.entries.push(ChatMessage::system(system_content));
    }

    pub fn push_user(&mut self, content: String) {
        self.entries.push(ChatMessage::user(content));
        self.trim();
    }

    pub fn push_assistant(&mut self, content: String) {
        self.entries.push(ChatMessage::assistant(content));
        self.trim();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.entries
    }

    // Suffix trim: keeps the newest MAX_ENTRIES only. After enough turns
    // this evicts the seeded system entry; the system entry is not pinned.
    fn trim(&mut self) {
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatStore {
    subjects: Mutex<HashMap<String, Arc<AsyncMutex<ChatHistory>>>>,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the history slot for a subject key, creating it lazily.
    /// Unknown subject ids get a slot too, keyed by the raw string.
    pub fn subject(&self, key: &str) -> Arc<AsyncMutex<ChatHistory>> {
        let mut subjects = self.subjects.lock().expect("chat store lock poisoned");
        subjects
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(ChatHistory::default())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deepseek_client::Role;

    fn seeded() -> ChatHistory {
        let mut history = ChatHistory::default();
        history.seed("You are a helpful teacher.".to_string());
        history
    }

    #[test]
    fn first_question_seeds_exactly_one_system_entry() {
        let mut history = ChatHistory::default();
        assert!(history.is_empty());
        history.seed("prompt".to_string());
        history.push_user("question".to_string());

        assert_eq!(history.len(), 2);
        assert_eq!(history.messages()[0].role, Role::System);
        assert_eq!(history.messages()[1].role, Role::User);
    }

    #[test]
    fn length_never_exceeds_cap() {
        let mut history = seeded();
        for i in 0..15 {
            history.push_user(format!("question {}", i));
            history.push_assistant(format!("answer {}", i));
            assert!(history.len() <= MAX_ENTRIES);
        }
        assert_eq!(history.len(), MAX_ENTRIES);
    }

    #[test]
    fn trim_keeps_newest_entries() {
        let mut history = seeded();
        for i in 0..15 {
            history.push_user(format!("question {}", i));
            history.push_assistant(format!("answer {}", i));
        }
        let last = history.messages().last().unwrap();
        assert_eq!(last.content, "answer 14");
    }

    #[test]
    fn trim_evicts_system_entry_after_enough_turns() {
        // Known quirk of the suffix trim, preserved on purpose.
        let mut history = seeded();
        for i in 0..11 {
            history.push_user(format!("question {}", i));
            history.push_assistant(format!("answer {}", i));
        }
        assert!(history.messages().iter().all(|m| m.role != Role::System));
    }

    #[test]
    fn store_returns_same_slot_per_subject() {
        let store = ChatStore::new();
        let a = store.subject("math");
        let b = store.subject("math");
        let c = store.subject("physics");
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[tokio::test]
    async fn store_keeps_state_between_lookups() {
        let store = ChatStore::new();
        {
            let slot = store.subject("math");
            let mut history = slot.lock().await;
            history.seed("prompt".to_string());
            history.push_user("q".to_string());
        }
        let slot = store.subject("math");
        let history = slot.lock().await;
        assert_eq!(history.len(), 2);
    }
}
