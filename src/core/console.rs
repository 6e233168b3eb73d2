// ScrapeDeck - core/console.rs
//
// The console sink: an append-only buffer of severity-tagged lines backing
// the on-screen console panel. Owns no UI; the console panel renders from
// this buffer each frame.
//
// Ordering guarantee: lines appear in exactly the order `push` is called.
// Both action controllers share one sink, so their lines may interleave,
// but each controller's own lines stay in emission order because all
// pushes happen on the UI thread.

use crate::core::model::{ConsoleLine, Severity};

/// Append-only console line buffer.
///
/// `revealed` latches to true on the first push and never resets; the
/// panel stays hidden until something has been logged.
#[derive(Debug, Default)]
pub struct ConsoleBuffer {
    lines: Vec<ConsoleLine>,
    revealed: bool,
    /// Set on push, consumed by the panel to stick the scroll position
    /// to the newest line.
    scroll_to_bottom: bool,
}

impl ConsoleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line with the given severity and reveal the panel.
    /// Revealing is idempotent; pushing is the only way to reveal.
    pub fn push(&mut self, message: impl Into<String>, severity: Severity) {
        self.push_line(ConsoleLine::new(message, severity));
    }

    /// Append an already-constructed line.
    pub fn push_line(&mut self, line: ConsoleLine) {
        tracing::debug!(severity = %line.severity, text = %line.text, "Console line");
        self.lines.push(line);
        self.revealed = true;
        self.scroll_to_bottom = true;
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the console panel should be shown at all.
    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Consume the pending scroll request, if any. Called once per frame
    /// by the console panel.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_to_bottom)
    }
}
