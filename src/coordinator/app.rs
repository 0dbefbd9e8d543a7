use std::time::Duration;

use log::info;

use crate::atoms::clock::{Clock, SystemClock};
use crate::atoms::launcher::{SystemOpener, UriOpener};
use crate::atoms::storage::{resolve_data_dir, DraftStore, FileStore, MemoryStore};
use crate::atoms::widgets::{text_column, wrap_calc};
use crate::molecules::config::{Keybindings, ThemeManager};
use crate::molecules::draft::{
    format_char_count, format_short_date, DraftManager, ExportOutcome, Ticker, TickerHandle,
    DEFAULT_TICK_PERIOD,
};
use crate::molecules::editor::TextBuffer;
use crate::types::{Config, DraftState, Theme};

pub type BoxedDraftManager =
    DraftManager<Box<dyn DraftStore>, Box<dyn UriOpener>, Box<dyn Clock>>;

pub struct App {
    pub config: Config,
    pub theme_manager: ThemeManager,
    pub keybindings: Keybindings,

    pub draft: BoxedDraftManager,
    pub buffer: TextBuffer,

    pub command_message: String,
    pub should_quit: bool,

    ticker: Option<TickerHandle>,
}

impl App {
    /// Build the app with the adapters `config` selects.
    pub fn new(config: Config) -> Self {
        let store: Box<dyn DraftStore> = if config.general.persist {
            let data_dir = resolve_data_dir(config.general.data_dir.as_deref());
            info!("event=store_selected kind=file dir={}", data_dir.display());
            Box::new(FileStore::new(data_dir))
        } else {
            info!("event=store_selected kind=memory");
            Box::new(MemoryStore::new())
        };
        let opener = Box::new(SystemOpener::from_config(config.export.opener.as_deref()));

        Self::from_parts(config, store, opener, Box::new(SystemClock))
    }

    /// Build an app around explicit adapters and hydrate the draft.
    pub fn from_parts(
        config: Config,
        store: Box<dyn DraftStore>,
        opener: Box<dyn UriOpener>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let theme_manager = ThemeManager::with_theme(&config.general.theme);
        let keybindings = Keybindings::from_config(&config.keyboard);

        let mut draft = DraftManager::new(store, opener, clock);
        draft.initialize();
        let buffer = TextBuffer::from_string(draft.text());

        let mut app = Self {
            config,
            theme_manager,
            keybindings,
            draft,
            buffer,
            command_message: String::new(),
            should_quit: false,
            ticker: None,
        };
        app.apply_focus();
        app
    }

    pub fn theme(&self) -> &Theme {
        self.theme_manager.current()
    }

    pub fn set_message(&mut self, msg: &str) {
        self.command_message = msg.to_string();
    }

    pub fn clear_message(&mut self) {
        self.command_message.clear();
    }

    pub fn cycle_theme(&mut self) {
        self.theme_manager.cycle_next();
        self.set_message(&format!("Theme: {}", self.theme().name));
    }

    pub fn start_ticker(&mut self) {
        let period = match self.config.general.placeholder_interval_ms {
            0 => DEFAULT_TICK_PERIOD,
            ms => Duration::from_millis(ms),
        };
        self.ticker = Some(Ticker::start(period));
    }

    /// Forward any timer ticks that fired since the last poll.
    pub fn poll_ticks(&mut self) {
        let fired = self.ticker.as_ref().map(|t| t.try_tick()).unwrap_or(0);
        for _ in 0..fired {
            self.draft.tick();
        }
    }

    /// Run an edit against the buffer and write the result through to the draft.
    pub fn edit(&mut self, f: impl FnOnce(&mut TextBuffer)) {
        self.buffer.save_undo_snapshot();
        f(&mut self.buffer);
        self.sync_draft();
        self.clear_message();
    }

    /// Cursor-only changes; nothing to persist.
    pub fn navigate(&mut self, f: impl FnOnce(&mut TextBuffer)) {
        f(&mut self.buffer);
    }

    pub fn undo(&mut self) {
        if self.buffer.undo() {
            self.sync_draft();
        } else {
            self.set_message("Already at oldest change");
        }
    }

    pub fn redo(&mut self) {
        if self.buffer.redo() {
            self.sync_draft();
        } else {
            self.set_message("Already at newest change");
        }
    }

    pub fn paste(&mut self, text: &str) {
        self.edit(|buffer| buffer.insert_str(text));
    }

    fn sync_draft(&mut self) {
        let text = self.buffer.to_string();
        self.draft.update_text(&text);
    }

    pub fn export(&mut self) {
        match self.draft.export_draft() {
            ExportOutcome::Sent { .. } => {
                self.buffer = TextBuffer::new();
                self.set_message("Sent to Obsidian");
            }
            ExportOutcome::Skipped => self.set_message("Nothing to export"),
        }
        self.apply_focus();
    }

    /// Honour a pending focus request by parking the cursor at the end of the text.
    pub fn apply_focus(&mut self) {
        if self.draft.take_focus_request() {
            self.buffer.move_to_end();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Stop the timer before the view goes away, then retire the draft manager.
    pub fn shutdown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
        self.draft.dispose();
        info!("event=app_shutdown chars={}", self.draft.char_count());
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    pub fn draft_state(&self) -> DraftState {
        self.draft.state()
    }

    pub fn char_count_label(&self) -> String {
        format_char_count(self.draft.char_count())
    }

    pub fn date_label(&self) -> String {
        format_short_date(self.draft.today())
    }

    pub fn export_key_label(&self) -> String {
        let spec = self.config.keyboard.export.to_lowercase();
        match spec.strip_prefix("ctrl+") {
            Some(rest) => format!("^{}", rest.to_uppercase()),
            None => spec,
        }
    }

    /// Top visible display row for an editor occupying `area`.
    pub fn scroll_offset(&self, area: ratatui::layout::Rect) -> usize {
        let column = text_column(area);
        let (row, col) = self.buffer.cursor_position();
        let vpos = wrap_calc::visual_cursor_position(self.buffer.content(), row, col, column.width);
        wrap_calc::scroll_offset_for(vpos.display_row(), column.height)
    }

    /// Screen position of the cursor inside an editor occupying `area`, if visible.
    pub fn cursor_screen_position(&self, area: ratatui::layout::Rect) -> Option<(u16, u16)> {
        let column = text_column(area);
        let (row, col) = self.buffer.cursor_position();
        let vpos = wrap_calc::visual_cursor_position(self.buffer.content(), row, col, column.width);
        let y = vpos.display_row().checked_sub(self.scroll_offset(area))?;
        let y = u16::try_from(y).ok().filter(|y| *y < column.height)?;
        let x = u16::try_from(vpos.col).ok().filter(|x| *x < column.width)?;
        Some((column.x + x, column.y + y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use crate::atoms::clock::FixedClock;
    use crate::atoms::storage::DRAFT_KEY;
    use chrono::NaiveDate;

    struct NullOpener;

    impl UriOpener for NullOpener {
        fn open(&mut self, _uri: &str) -> Result<()> {
            Ok(())
        }
    }

    fn app_with(store: &MemoryStore) -> App {
        App::from_parts(
            Config::default(),
            Box::new(store.clone()),
            Box::new(NullOpener),
            Box::new(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())),
        )
    }

    #[test]
    fn test_hydrates_and_focuses_end() {
        let mut store = MemoryStore::new();
        store.set(DRAFT_KEY, "one\ntwo").unwrap();
        let app = app_with(&store);
        assert_eq!(app.buffer.to_string(), "one\ntwo");
        assert_eq!(app.buffer.cursor_position(), (1, 3));
    }

    #[test]
    fn test_edit_writes_through() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.edit(|b| b.insert_str("hi"));
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some("hi"));
        assert_eq!(app.char_count_label(), "2 characters");
    }

    #[test]
    fn test_undo_writes_through() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.edit(|b| b.insert_char('a'));
        app.edit(|b| b.insert_char('b'));
        app.undo();
        assert_eq!(store.get(DRAFT_KEY).unwrap().as_deref(), Some("a"));
    }

    #[test]
    fn test_export_resets_buffer() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.paste("Buy milk");
        assert_eq!(app.draft_state(), DraftState::HasContent);
        app.export();
        assert!(app.buffer.is_empty());
        assert_eq!(app.draft_state(), DraftState::Empty);
        assert_eq!(app.command_message, "Sent to Obsidian");
        assert!(store.get(DRAFT_KEY).unwrap().is_none());
    }

    #[test]
    fn test_export_of_whitespace_keeps_buffer() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.paste("   ");
        app.export();
        assert_eq!(app.buffer.to_string(), "   ");
        assert_eq!(app.command_message, "Nothing to export");
    }

    #[test]
    fn test_shutdown_cancels_ticker() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.start_ticker();
        assert!(app.ticker_running());
        app.shutdown();
        assert!(!app.ticker_running());
        assert!(app.draft.is_disposed());
    }

    #[test]
    fn test_labels() {
        let store = MemoryStore::new();
        let app = app_with(&store);
        assert_eq!(app.date_label(), "Jan 5");
        assert_eq!(app.export_key_label(), "^E");
    }

    #[test]
    fn test_cursor_screen_position() {
        let store = MemoryStore::new();
        let mut app = app_with(&store);
        app.paste("abc");
        let area = ratatui::layout::Rect::new(0, 0, 150, 40);
        // Column starts at x=50, y=1.
        assert_eq!(app.cursor_screen_position(area), Some((53, 1)));
    }

    #[test]
    fn test_new_uses_the_config_it_is_given() {
        let mut config = Config::default();
        config.general.persist = false;
        config.general.theme = "void_dark".to_string();
        config.keyboard.export = "ctrl+s".to_string();

        let mut app = App::new(config);
        assert_eq!(app.config.general.theme, "void_dark");
        assert_eq!(app.export_key_label(), "^S");
        assert!(app.buffer.is_empty());

        app.paste("kept in memory");
        assert_eq!(app.draft.text(), "kept in memory");
    }

    #[test]
    fn test_long_stored_draft_keeps_cursor_on_screen() {
        let mut store = MemoryStore::new();
        store.set(DRAFT_KEY, &"x\n".repeat(70_000)).unwrap();
        let app = app_with(&store);
        assert_eq!(app.buffer.cursor_position(), (70_000, 0));

        // 120 wide: the column is 40 wide at x=40, 39 rows tall from y=1.
        let area = ratatui::layout::Rect::new(0, 0, 120, 40);
        assert_eq!(app.scroll_offset(area), 69_962);
        assert_eq!(app.cursor_screen_position(area), Some((40, 39)));
    }
}
