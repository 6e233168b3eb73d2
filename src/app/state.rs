// ScrapeDeck - app/state.rs
//
// Application state: the console buffer, per-action button state, and the
// UI flags panels use to request work from the frame loop.
// Owned by the eframe::App implementation.

use crate::core::console::ConsoleBuffer;
use crate::core::model::ActionKind;

/// View state of one action button. The idle and busy labels come from the
/// static ActionSpec; only the busy flag lives here. Restoring the label
/// after a cycle is implicit: the button renders from the spec each frame.
#[derive(Debug, Default)]
pub struct ActionView {
    /// True for the entire span between dispatch and settle. While true
    /// the button is disabled and shows the busy label.
    pub busy: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Base URL of the scraper backend.
    pub server_url: String,

    /// The shared console sink both actions log into.
    pub console: ConsoleBuffer,

    /// Button state for the news action.
    pub news_view: ActionView,

    /// Button state for the prices action.
    pub prices_view: ActionView,

    /// Set by the actions panel when a button is clicked; consumed by the
    /// frame loop, which dispatches the request.
    pub pending_action: Option<ActionKind>,

    /// Status message for the status bar.
    pub status_message: String,
}

impl AppState {
    pub fn new(server_url: String) -> Self {
        Self {
            server_url,
            console: ConsoleBuffer::new(),
            news_view: ActionView::default(),
            prices_view: ActionView::default(),
            pending_action: None,
            status_message: "Ready.".to_string(),
        }
    }

    pub fn view(&self, kind: ActionKind) -> &ActionView {
        match kind {
            ActionKind::News => &self.news_view,
            ActionKind::Prices => &self.prices_view,
        }
    }

    /// Whether any action currently has a request in flight.
    pub fn any_busy(&self) -> bool {
        self.news_view.busy || self.prices_view.busy
    }
}
