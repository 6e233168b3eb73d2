// ScrapeDeck - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; the causal chain is kept for
// diagnostic logging even where the console collapses it.

use std::fmt;

/// Errors from one backend request.
///
/// The two variants are deliberately distinct even though the console
/// surfaces both as a single "Connection error" line: the distinction is
/// visible in the tracing output, where it matters for diagnosis.
#[derive(Debug)]
pub enum RequestError {
    /// The request could not be completed: connect failure, I/O error,
    /// or a non-success transport status.
    Http { url: String, source: ureq::Error },

    /// The response arrived but its body was not a valid ScrapeResponse.
    MalformedBody { url: String, source: ureq::Error },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { source, .. } => write!(f, "{source}"),
            Self::MalformedBody { source, .. } => {
                write!(f, "malformed response body: {source}")
            }
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } | Self::MalformedBody { source, .. } => Some(source),
        }
    }
}

impl RequestError {
    /// The URL the failing request was addressed to.
    pub fn url(&self) -> &str {
        match self {
            Self::Http { url, .. } | Self::MalformedBody { url, .. } => url,
        }
    }
}
