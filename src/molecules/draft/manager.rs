use log::{debug, info, warn};

use super::export::{build_export_uri, build_payload};
use super::placeholder::PlaceholderRotation;
use crate::atoms::clock::Clock;
use crate::atoms::launcher::UriOpener;
use crate::atoms::storage::{DraftStore, DRAFT_KEY};
use crate::types::DraftState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The URI was handed to the opener and local state was cleared.
    Sent { uri: String },
    /// Nothing but whitespace to export; state untouched.
    Skipped,
}

/// Owns the single draft, mirrors it to the store on every change and
/// performs the export hand-off.
///
/// Store and opener failures never surface to callers. A failed read is
/// treated as "no prior draft", a failed write or open is logged and ignored.
pub struct DraftManager<S, O, C> {
    store: S,
    opener: O,
    clock: C,
    key: String,
    text: String,
    char_count: usize,
    placeholder: PlaceholderRotation,
    focus_requested: bool,
    disposed: bool,
}

impl<S: DraftStore, O: UriOpener, C: Clock> DraftManager<S, O, C> {
    pub fn new(store: S, opener: O, clock: C) -> Self {
        Self::with_key(store, opener, clock, DRAFT_KEY)
    }

    pub fn with_key(store: S, opener: O, clock: C, key: &str) -> Self {
        Self {
            store,
            opener,
            clock,
            key: key.to_string(),
            text: String::new(),
            char_count: 0,
            placeholder: PlaceholderRotation::new(),
            focus_requested: false,
            disposed: false,
        }
    }

    /// Hydrate from the store and ask for input focus.
    pub fn initialize(&mut self) {
        match self.store.get(&self.key) {
            Ok(Some(saved)) if !saved.is_empty() => {
                self.char_count = saved.chars().count();
                self.text = saved;
                info!("event=draft_hydrated chars={}", self.char_count);
            }
            Ok(_) => debug!("event=draft_hydrated chars=0"),
            Err(e) => warn!("event=draft_read_failed error={:#}", e),
        }
        self.focus_requested = true;
    }

    pub fn update_text(&mut self, new_text: &str) {
        self.text = new_text.to_owned();
        self.char_count = self.text.chars().count();
        if let Err(e) = self.store.set(&self.key, new_text) {
            warn!("event=draft_write_failed error={:#}", e);
        }
    }

    /// Advance the placeholder prompt. Ignored once disposed.
    pub fn tick(&mut self) {
        if self.disposed {
            return;
        }
        self.placeholder.advance();
    }

    pub fn export_draft(&mut self) -> ExportOutcome {
        if !self.state().can_export() {
            debug!("event=export_skipped reason=empty");
            return ExportOutcome::Skipped;
        }

        let payload = build_payload(&self.text, self.clock.today());
        let uri = build_export_uri(&payload);

        match self.opener.open(&uri) {
            Ok(()) => info!("event=export_sent chars={}", self.char_count),
            Err(e) => warn!("event=export_open_failed error={:#}", e),
        }

        self.text.clear();
        self.char_count = 0;
        if let Err(e) = self.store.delete(&self.key) {
            warn!("event=draft_delete_failed error={:#}", e);
        }
        self.focus_requested = true;

        ExportOutcome::Sent { uri }
    }

    /// End of this manager's active life. Idempotent.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            debug!("event=draft_manager_disposed");
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn state(&self) -> DraftState {
        DraftState::of(&self.text)
    }

    pub fn placeholder_index(&self) -> usize {
        self.placeholder.index()
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder.current()
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Returns true once per focus request, then resets.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::clock::FixedClock;
    use crate::atoms::storage::MemoryStore;
    use anyhow::{Result, bail};
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingOpener {
        opened: Arc<Mutex<Vec<String>>>,
    }

    impl UriOpener for RecordingOpener {
        fn open(&mut self, uri: &str) -> Result<()> {
            self.opened.lock().unwrap().push(uri.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl UriOpener for FailingOpener {
        fn open(&mut self, _uri: &str) -> Result<()> {
            bail!("no handler for obsidian://")
        }
    }

    struct BrokenStore;

    impl DraftStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            bail!("disk on fire")
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            bail!("disk on fire")
        }
        fn delete(&mut self, _key: &str) -> Result<()> {
            bail!("disk on fire")
        }
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
    }

    fn manager(
        store: &MemoryStore,
    ) -> (DraftManager<MemoryStore, RecordingOpener, FixedClock>, RecordingOpener) {
        let opener = RecordingOpener::default();
        (DraftManager::new(store.clone(), opener.clone(), clock()), opener)
    }

    #[test]
    fn test_initialize_empty_store() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.initialize();
        assert_eq!(m.text(), "");
        assert_eq!(m.char_count(), 0);
        assert_eq!(m.state(), DraftState::Empty);
        assert!(m.take_focus_request());
        assert!(!m.take_focus_request());
    }

    #[test]
    fn test_update_text_writes_through() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.update_text("hello");
        assert_eq!(m.text(), "hello");
        assert_eq!(m.char_count(), 5);
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn test_update_text_accepts_empty() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.update_text("x");
        m.update_text("");
        assert_eq!(m.char_count(), 0);
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_repeated_text_is_written_again() {
        let mut store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.update_text("same");
        store.set(DRAFT_KEY, "changed elsewhere").unwrap();
        m.update_text("same");
        assert_eq!(m.text(), "same");
        assert_eq!(m.char_count(), 4);
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some("same"));
    }

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.update_text("héllo 你好");
        assert_eq!(m.char_count(), 8);
    }

    #[test]
    fn test_export_whitespace_is_noop() {
        let store = MemoryStore::new();
        let (mut m, opener) = manager(&store);
        m.update_text("  ");
        assert_eq!(m.export_draft(), ExportOutcome::Skipped);
        assert_eq!(m.text(), "  ");
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some("  "));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn test_export_sends_and_clears() {
        let store = MemoryStore::new();
        let (mut m, opener) = manager(&store);
        m.update_text("Buy milk");
        m.take_focus_request();

        let outcome = m.export_draft();
        let expected = "obsidian://new?content=Buy%20milk%0A%0A---%0AJanuary%205%2C%202025";
        assert_eq!(
            outcome,
            ExportOutcome::Sent {
                uri: expected.to_string()
            }
        );
        assert_eq!(opener.opened.lock().unwrap().as_slice(), [expected]);
        assert_eq!(m.text(), "");
        assert_eq!(m.char_count(), 0);
        assert!(store.get(DRAFT_KEY).unwrap().is_none());
        assert!(m.take_focus_request());
    }

    #[test]
    fn test_export_clears_even_when_opener_fails() {
        let store = MemoryStore::new();
        let mut m = DraftManager::new(store.clone(), FailingOpener, clock());
        m.update_text("note");
        assert!(matches!(m.export_draft(), ExportOutcome::Sent { .. }));
        assert_eq!(m.text(), "");
        assert!(store.get(DRAFT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_broken_store_degrades_silently() {
        let mut m = DraftManager::new(BrokenStore, RecordingOpener::default(), clock());
        m.initialize();
        assert_eq!(m.text(), "");
        m.update_text("still typing");
        assert_eq!(m.text(), "still typing");
        assert!(matches!(m.export_draft(), ExportOutcome::Sent { .. }));
        assert_eq!(m.text(), "");
    }

    #[test]
    fn test_tick_cycles_and_leaves_text() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.update_text("keep me");
        for _ in 0..10 {
            m.tick();
        }
        assert_eq!(m.placeholder_index(), 0);
        m.tick();
        assert_eq!(m.placeholder_index(), 1);
        assert_eq!(m.placeholder(), "Turn ideas into action...");
        assert_eq!(m.text(), "keep me");
    }

    #[test]
    fn test_tick_ignored_after_dispose() {
        let store = MemoryStore::new();
        let (mut m, _) = manager(&store);
        m.tick();
        m.dispose();
        m.dispose();
        m.tick();
        assert!(m.is_disposed());
        assert_eq!(m.placeholder_index(), 1);
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let mut m = DraftManager::with_key(
            store.clone(),
            RecordingOpener::default(),
            clock(),
            "voidNotes",
        );
        m.update_text("ext");
        assert_eq!(store.get("voidNotes").unwrap().as_deref(), Some("ext"));
        assert!(store.get(DRAFT_KEY).unwrap().is_none());
    }
}
