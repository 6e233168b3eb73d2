// ScrapeDeck - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI —
// the shared vocabulary across all layers.

use chrono::{DateTime, Local};
use serde::Deserialize;

// =============================================================================
// Severity
// =============================================================================

/// Severity of a console line, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Severity {
    Error,
    Warn,
    #[default]
    Info,
}

impl Severity {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warn => "Warn",
            Severity::Info => "Info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Console line
// =============================================================================

/// A single line in the console panel. Immutable once created; lines are
/// only ever appended, never edited or removed.
#[derive(Debug, Clone)]
pub struct ConsoleLine {
    pub text: String,
    pub severity: Severity,
    /// Local wall-clock time at which the line was created.
    pub at: DateTime<Local>,
}

impl ConsoleLine {
    pub fn new(text: impl Into<String>, severity: Severity) -> Self {
        Self {
            text: text.into(),
            severity,
            at: Local::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Info)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Warn)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, Severity::Error)
    }

    /// The text as rendered in the panel: message prefixed with the
    /// console marker.
    pub fn display_text(&self) -> String {
        format!("> {}", self.text)
    }
}

// =============================================================================
// Wire contract (owned by the backend, consumed read-only)
// =============================================================================

/// Job status reported by the backend. Any status string the client does
/// not recognise maps to `Unknown`, which the translation layer treats the
/// same as `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Success,
    Warning,
    Error,
    #[serde(other)]
    Unknown,
}

/// Response body of `POST /api/run-news` and `POST /api/run-prices`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    pub status: JobStatus,
    pub message: String,

    /// Number of items scraped. Informational only; not rendered.
    #[serde(default)]
    pub count: Option<u64>,

    /// Auxiliary per-site log lines, in emission order. Only the prices
    /// endpoint sends these today, but the translation rule accepts them
    /// from any action.
    #[serde(default)]
    pub logs: Vec<String>,
}

// =============================================================================
// Job outcome (background thread -> UI thread)
// =============================================================================

/// Terminal outcome of one dispatched job, sent once over the job channel.
#[derive(Debug, Clone)]
pub enum JobOutcome {
    /// The backend answered with a well-formed ScrapeResponse. The response
    /// itself may still report a business-level failure.
    Response(ScrapeResponse),

    /// The request could not be completed or the body could not be parsed.
    TransportError(String),
}

// =============================================================================
// Actions
// =============================================================================

/// The two scraper actions the panel can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    News,
    Prices,
}

impl ActionKind {
    pub fn all() -> &'static [ActionKind] {
        &[ActionKind::News, ActionKind::Prices]
    }

    pub fn spec(self) -> &'static ActionSpec {
        match self {
            ActionKind::News => &NEWS_SPEC,
            ActionKind::Prices => &PRICES_SPEC,
        }
    }
}

/// Static description of one action: what the button says, where the
/// request goes, and how the response translates into console lines.
#[derive(Debug)]
pub struct ActionSpec {
    pub kind: ActionKind,

    /// Idle button label.
    pub title: &'static str,

    /// Short description shown under the button.
    pub subtitle: &'static str,

    /// Button label while the request is in flight.
    pub busy_label: &'static str,

    /// Endpoint path, joined onto the server base URL.
    pub endpoint: &'static str,

    /// Info line emitted when the action starts.
    pub start_message: &'static str,

    /// Fixed info line emitted after a successful response's message.
    pub success_note: Option<&'static str>,

    /// Whether a `warning` status gets its own warn-level line. Actions
    /// without this branch treat `warning` like any other non-success
    /// status.
    pub honors_warning: bool,
}

static NEWS_SPEC: ActionSpec = ActionSpec {
    kind: ActionKind::News,
    title: "Run News Scraper",
    subtitle: "Fetch world news headlines",
    busy_label: "Running...",
    endpoint: "/api/run-news",
    start_message: "Starting news scrape...",
    success_note: Some("Saved to 'noticias_mundo.csv'"),
    honors_warning: false,
};

static PRICES_SPEC: ActionSpec = ActionSpec {
    kind: ActionKind::Prices,
    title: "Run Price Monitor",
    subtitle: "Check Tailoy, Brasil and Materiales BO",
    busy_label: "Searching prices...",
    endpoint: "/api/run-prices",
    start_message: "Starting price monitor (Tailoy, Brasil, Materiales BO)...",
    success_note: None,
    honors_warning: true,
};
