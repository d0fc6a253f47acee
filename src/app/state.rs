//! Application state

use std::time::{Duration, Instant};

use tracing::debug;

use super::clipboard::{Clipboard, SystemClipboard};
use super::scheduler::CompareScheduler;
use crate::config::Settings;
use crate::engine::{DiffResult, compute_diff_with};
use crate::model::{Notification, Side};
use crate::text;
use crate::ui::components::Dialog;
use crate::ui::navigation::ScrollOffset;
use crate::ui::views::{EditorOptions, EditorPane};

/// Longest time the main loop blocks waiting for input
pub const IDLE_TICK: Duration = Duration::from_millis(200);

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub settings: Settings,
    /// Original text
    pub left: EditorPane,
    /// Modified text
    pub right: EditorPane,
    /// Pane receiving edits
    pub focus: Side,
    /// Last comparison
    pub result: DiffResult,
    pub scheduler: CompareScheduler,
    /// Shared by both panes
    pub scroll: ScrollOffset,
    /// Error message to display
    pub error_message: Option<String>,
    /// Notification to display (success/info/error messages)
    pub notification: Option<Notification>,
    /// Active overlay (receives all input when Some)
    pub active_dialog: Option<Dialog>,
    pub(crate) clipboard: Box<dyn Clipboard>,
    /// Visible text rows, updated during render
    pub(crate) page_height: usize,
}

impl App {
    /// Construct a new instance of [`App`] with empty panes.
    pub fn new(settings: Settings) -> Self {
        Self::with_clipboard(settings, Box::new(SystemClipboard))
    }

    /// Construct an [`App`] using a specific clipboard.
    pub fn with_clipboard(settings: Settings, clipboard: Box<dyn Clipboard>) -> Self {
        let options = editor_options(&settings);
        let scheduler = CompareScheduler::new(settings.debounce());

        let mut app = Self {
            running: true,
            left: EditorPane::new(Side::Left, "", options),
            right: EditorPane::new(Side::Right, "", options),
            focus: Side::Left,
            result: DiffResult::default(),
            scheduler,
            scroll: ScrollOffset::default(),
            error_message: None,
            notification: None,
            active_dialog: None,
            clipboard,
            page_height: 20,
            settings,
        };
        app.compare_now();
        app
    }

    /// Replace both texts and compare immediately
    pub fn load_texts(&mut self, left: &str, right: &str) {
        let options = editor_options(&self.settings);
        self.left = EditorPane::new(Side::Left, left, options);
        self.right = EditorPane::new(Side::Right, right, options);
        self.scroll = ScrollOffset::default();
        self.compare_now();
    }

    pub fn pane(&self, side: Side) -> &EditorPane {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn pane_mut(&mut self, side: Side) -> &mut EditorPane {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn focused_pane(&self) -> &EditorPane {
        self.pane(self.focus)
    }

    pub(crate) fn focused_pane_mut(&mut self) -> &mut EditorPane {
        self.pane_mut(self.focus)
    }

    /// Restart the debounce timer
    pub(crate) fn schedule_compare(&mut self) {
        self.scheduler.schedule(Instant::now());
    }

    /// Run the engine on both panes and cancel any pending deadline
    pub fn compare_now(&mut self) {
        self.scheduler.cancel();

        let started = Instant::now();
        let left_text = self.left.text();
        let right_text = self.right.text();
        let left = text::normalize_line_endings(&left_text);
        let right = text::normalize_line_endings(&right_text);
        let left_lines = text::split_lines(&left);
        let right_lines = text::split_lines(&right);

        self.result = compute_diff_with(&left_lines, &right_lines, self.settings.algorithm);

        debug!(
            algorithm = self.settings.algorithm.label(),
            left_lines = left_lines.len(),
            right_lines = right_lines.len(),
            stats = %self.result.stats,
            elapsed_us = started.elapsed().as_micros() as u64,
            "compared"
        );
    }

    /// Idle processing: fire a due comparison and drop an expired notification
    pub fn tick(&mut self, now: Instant) {
        if self.scheduler.take_due(now) {
            self.compare_now();
        }
        self.clear_expired_notification(now);
    }

    /// How long the main loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.scheduler
            .remaining(now)
            .map_or(IDLE_TICK, |left| left.min(IDLE_TICK))
    }

    /// True while an edit is waiting for the debounce deadline
    pub fn is_compare_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Show a notification with the configured lifetime
    pub(crate) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification.with_ttl(self.settings.toast_ttl()));
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self, now: Instant) {
        if let Some(ref notification) = self.notification
            && notification.is_expired_at(now)
        {
            self.notification = None;
        }
    }
}

fn editor_options(settings: &Settings) -> EditorOptions {
    EditorOptions {
        hard_tab: settings.hard_tab,
        tab_width: settings.tab_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::clipboard::MemoryClipboard;

    fn app() -> App {
        App::with_clipboard(Settings::default(), Box::new(MemoryClipboard::default()))
    }

    #[test]
    fn test_new_app_is_identical() {
        let app = app();
        assert!(app.running);
        assert!(app.result.is_identical());
        assert!(!app.is_compare_pending());
        assert_eq!(app.focus, Side::Left);
    }

    #[test]
    fn test_load_texts_compares_immediately() {
        let mut app = app();
        app.load_texts("a\nb", "a\nc");
        assert_eq!(app.result.stats.modified, 1);
        assert_eq!(app.left.lines(), ["a", "b"]);
    }

    #[test]
    fn test_tick_fires_only_when_due() {
        let mut app = app();
        app.load_texts("a", "a");
        app.right.set_text("b");
        let start = Instant::now();
        app.scheduler.schedule(start);

        app.tick(start + Duration::from_millis(100));
        assert!(app.result.is_identical());
        assert!(app.is_compare_pending());

        app.tick(start + app.settings.debounce());
        assert_eq!(app.result.stats.modified, 1);
        assert!(!app.is_compare_pending());
    }

    #[test]
    fn test_poll_timeout_bounded_by_deadline() {
        let mut app = app();
        let now = Instant::now();
        assert_eq!(app.poll_timeout(now), IDLE_TICK);

        app.scheduler.schedule(now);
        assert_eq!(
            app.poll_timeout(now + Duration::from_millis(250)),
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_notification_expires_on_tick() {
        let mut app = app();
        app.notify(Notification::info("Already empty"));
        let created = app.notification.as_ref().unwrap().created_at;

        app.tick(created + Duration::from_secs(1));
        assert!(app.notification.is_some());
        app.tick(created + app.settings.toast_ttl());
        assert!(app.notification.is_none());
    }

    #[test]
    fn test_lcs_algorithm_setting() {
        let settings = Settings {
            algorithm: crate::engine::Algorithm::Lcs,
            ..Settings::default()
        };
        let mut app = App::with_clipboard(settings, Box::new(MemoryClipboard::default()));
        app.load_texts("x\ny", "y");
        assert_eq!(app.result.stats.removed, 1);
    }
}
