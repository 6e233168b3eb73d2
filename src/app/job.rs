// ScrapeDeck - app/job.rs
//
// Job lifecycle management. Issues one backend request on a background
// thread, sending the single outcome to the UI thread via an mpsc channel.
//
// Architecture:
//   - `JobManager` lives on the UI thread; `run_job` runs on a background
//     thread. One manager per action; the two actions never share state.
//   - The UI polls `poll_outcome` each frame with `try_recv`.
//   - No cancellation and no timeout: the wire contract has neither, so a
//     hung request leaves its action busy until the process exits.

use crate::core::model::{JobOutcome, ScrapeResponse};
use crate::util::error::RequestError;
use std::sync::mpsc;

/// Manages one in-flight backend request for a single action.
pub struct JobManager {
    /// Channel receiver for the UI to poll. `Some` while a job is in
    /// flight; cleared when the outcome arrives.
    outcome_rx: Option<mpsc::Receiver<JobOutcome>>,
}

impl JobManager {
    pub fn new() -> Self {
        Self { outcome_rx: None }
    }

    /// Whether a job is currently in flight.
    pub fn in_flight(&self) -> bool {
        self.outcome_rx.is_some()
    }

    /// Dispatch a POST to `url` on a background thread.
    ///
    /// The caller guards against overlapping dispatches (the controller's
    /// busy flag); starting while in flight would orphan the previous
    /// receiver, so it is rejected here too.
    pub fn start(&mut self, agent: ureq::Agent, url: String) {
        if self.in_flight() {
            tracing::warn!(url = %url, "Job already in flight; dispatch ignored");
            return;
        }

        let (tx, rx) = mpsc::channel();
        self.outcome_rx = Some(rx);

        tracing::info!(url = %url, "Job dispatched");

        std::thread::spawn(move || {
            let outcome = run_job(&agent, &url);
            // Receiver dropped (window closed): nothing to deliver to.
            let _ = tx.send(outcome);
        });
    }

    /// Poll for the job outcome without blocking.
    ///
    /// Returns `Some` exactly once per dispatched job. A worker thread
    /// that died without sending surfaces as a transport error so the
    /// action always settles.
    pub fn poll_outcome(&mut self) -> Option<JobOutcome> {
        let rx = self.outcome_rx.as_ref()?;
        match rx.try_recv() {
            Ok(outcome) => {
                self.outcome_rx = None;
                Some(outcome)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.outcome_rx = None;
                tracing::error!("Job worker terminated without reporting an outcome");
                Some(JobOutcome::TransportError(
                    "request worker terminated unexpectedly".to_string(),
                ))
            }
        }
    }
}

impl Default for JobManager {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Background request
// =============================================================================

/// Issue the empty-body POST and parse the response. Runs on a background
/// thread; all failures collapse into `JobOutcome::TransportError` with
/// the underlying error text (the variant distinction is kept in the
/// tracing output).
fn run_job(agent: &ureq::Agent, url: &str) -> JobOutcome {
    match post_and_parse(agent, url) {
        Ok(resp) => {
            tracing::info!(url = %url, status = ?resp.status, count = ?resp.count, "Job response");
            JobOutcome::Response(resp)
        }
        Err(e) => {
            tracing::warn!(url = %e.url(), error = %e, "Job request failed");
            JobOutcome::TransportError(e.to_string())
        }
    }
}

/// POST with an empty body and read the JSON response.
fn post_and_parse(agent: &ureq::Agent, url: &str) -> Result<ScrapeResponse, RequestError> {
    let mut response = agent.post(url).send_empty().map_err(|e| RequestError::Http {
        url: url.to_string(),
        source: e,
    })?;

    response
        .body_mut()
        .read_json::<ScrapeResponse>()
        .map_err(|e| RequestError::MalformedBody {
            url: url.to_string(),
            source: e,
        })
}
