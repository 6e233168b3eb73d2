// ScrapeDeck - core/controller.rs
//
// Action controller: drives one button's click-to-request-to-log lifecycle.
//
// The controller never touches egui directly. It talks to a `Presenter`,
// a narrow view surface (busy flag + console append) that the GUI
// implements over its own state and tests implement with a recorder.
// This keeps the whole lifecycle testable without a window.

use crate::core::model::{ActionSpec, ConsoleLine, JobOutcome, JobStatus};

/// View surface an action controller drives.
///
/// `set_busy(true)` must disable the button and show the busy label;
/// `set_busy(false)` must restore the original label and re-enable it.
pub trait Presenter {
    fn set_busy(&mut self, busy: bool);
    fn append_line(&mut self, line: ConsoleLine);
}

/// Lifecycle owner for one action button.
///
/// Invariant: `busy` is true for the entire span between `begin` and
/// `finish`. While busy, `begin` refuses to start a second cycle; together
/// with the disabled button this is the only concurrency control the
/// action needs.
pub struct ActionController {
    spec: &'static ActionSpec,
    busy: bool,
}

impl ActionController {
    pub fn new(spec: &'static ActionSpec) -> Self {
        Self { spec, busy: false }
    }

    pub fn spec(&self) -> &'static ActionSpec {
        self.spec
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Enter the busy state and emit the start line.
    ///
    /// Returns false without side effects if a cycle is already running;
    /// the caller must not dispatch a request in that case.
    pub fn begin(&mut self, presenter: &mut dyn Presenter) -> bool {
        if self.busy {
            tracing::warn!(action = ?self.spec.kind, "begin() while busy ignored");
            return false;
        }
        self.busy = true;
        presenter.set_busy(true);
        presenter.append_line(ConsoleLine::info(self.spec.start_message));
        tracing::info!(action = ?self.spec.kind, endpoint = self.spec.endpoint, "Action started");
        true
    }

    /// Translate the settled outcome into console lines and leave the busy
    /// state. Runs unconditionally for every outcome so the button always
    /// recovers.
    pub fn finish(&mut self, outcome: JobOutcome, presenter: &mut dyn Presenter) {
        for line in translate_outcome(self.spec, &outcome) {
            presenter.append_line(line);
        }
        self.busy = false;
        presenter.set_busy(false);
        tracing::info!(action = ?self.spec.kind, "Action settled");
    }
}

/// Translate one job outcome into the console lines it produces, in order.
///
/// Response translation:
///   1. each auxiliary log string as an info line, before the summary;
///   2. success -> message as info, then the spec's fixed success note;
///   3. warning -> message as warn, only for actions that honor it;
///   4. anything else -> "Error: {message}" as error.
/// Transport failure -> a single "Connection error: {text}" error line.
pub fn translate_outcome(spec: &ActionSpec, outcome: &JobOutcome) -> Vec<ConsoleLine> {
    let mut lines = Vec::new();
    match outcome {
        JobOutcome::Response(resp) => {
            for aux in &resp.logs {
                lines.push(ConsoleLine::info(aux.clone()));
            }
            match resp.status {
                JobStatus::Success => {
                    lines.push(ConsoleLine::info(resp.message.clone()));
                    if let Some(note) = spec.success_note {
                        lines.push(ConsoleLine::info(note));
                    }
                }
                JobStatus::Warning if spec.honors_warning => {
                    lines.push(ConsoleLine::warn(resp.message.clone()));
                }
                _ => {
                    lines.push(ConsoleLine::error(format!("Error: {}", resp.message)));
                }
            }
        }
        JobOutcome::TransportError(text) => {
            lines.push(ConsoleLine::error(format!("Connection error: {text}")));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{ActionKind, ScrapeResponse, Severity};

    /// Recording presenter: captures busy transitions and appended lines.
    #[derive(Default)]
    struct FakePresenter {
        busy_transitions: Vec<bool>,
        lines: Vec<ConsoleLine>,
    }

    impl Presenter for FakePresenter {
        fn set_busy(&mut self, busy: bool) {
            self.busy_transitions.push(busy);
        }
        fn append_line(&mut self, line: ConsoleLine) {
            self.lines.push(line);
        }
    }

    fn response(status: &str, message: &str, logs: &[&str]) -> JobOutcome {
        JobOutcome::Response(ScrapeResponse {
            status: serde_json::from_str(&format!("\"{status}\"")).unwrap(),
            message: message.to_string(),
            count: None,
            logs: logs.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn texts(lines: &[ConsoleLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_news_success_full_cycle() {
        let mut ctrl = ActionController::new(ActionKind::News.spec());
        let mut p = FakePresenter::default();

        assert!(ctrl.begin(&mut p));
        assert!(ctrl.is_busy());
        ctrl.finish(response("success", "Done", &[]), &mut p);

        assert_eq!(
            texts(&p.lines),
            vec![
                "Starting news scrape...",
                "Done",
                "Saved to 'noticias_mundo.csv'"
            ]
        );
        assert!(p.lines.iter().all(|l| l.severity == Severity::Info));
        assert_eq!(p.busy_transitions, vec![true, false]);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_prices_warning_with_aux_logs() {
        let mut ctrl = ActionController::new(ActionKind::Prices.spec());
        let mut p = FakePresenter::default();

        ctrl.begin(&mut p);
        ctrl.finish(
            response(
                "warning",
                "Some sites unreachable",
                &["Checked Tailoy", "Checked Brasil"],
            ),
            &mut p,
        );

        assert_eq!(
            texts(&p.lines),
            vec![
                "Starting price monitor (Tailoy, Brasil, Materiales BO)...",
                "Checked Tailoy",
                "Checked Brasil",
                "Some sites unreachable"
            ]
        );
        // Aux logs are info; only the summary is warn.
        assert_eq!(p.lines[1].severity, Severity::Info);
        assert_eq!(p.lines[2].severity, Severity::Info);
        assert_eq!(p.lines[3].severity, Severity::Warn);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_prices_success_has_no_extra_note() {
        let spec = ActionKind::Prices.spec();
        let lines = translate_outcome(spec, &response("success", "42 products", &[]));
        assert_eq!(
            lines.iter().map(|l| l.text.as_str()).collect::<Vec<_>>(),
            vec!["42 products"]
        );
    }

    #[test]
    fn test_news_does_not_honor_warning() {
        // News has no warning branch: a warning status falls into the
        // catch-all error branch.
        let spec = ActionKind::News.spec();
        let lines = translate_outcome(spec, &response("warning", "partial", &[]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Error: partial");
        assert_eq!(lines[0].severity, Severity::Error);
    }

    #[test]
    fn test_business_error_is_verbatim_error_line() {
        let spec = ActionKind::News.spec();
        let lines = translate_outcome(spec, &response("error", "scrape blew up", &[]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "Error: scrape blew up");
        assert_eq!(lines[0].severity, Severity::Error);
    }

    #[test]
    fn test_unknown_status_treated_as_error() {
        let spec = ActionKind::Prices.spec();
        let lines = translate_outcome(spec, &response("exploded", "???", &[]));
        assert_eq!(lines[0].text, "Error: ???");
        assert_eq!(lines[0].severity, Severity::Error);
    }

    #[test]
    fn test_transport_error_single_line_and_recovery() {
        let mut ctrl = ActionController::new(ActionKind::Prices.spec());
        let mut p = FakePresenter::default();

        ctrl.begin(&mut p);
        ctrl.finish(
            JobOutcome::TransportError("connection refused".to_string()),
            &mut p,
        );

        // Exactly one error line beyond the start line.
        assert_eq!(p.lines.len(), 2);
        assert_eq!(p.lines[1].text, "Connection error: connection refused");
        assert_eq!(p.lines[1].severity, Severity::Error);
        // Button restored even on failure.
        assert_eq!(p.busy_transitions, vec![true, false]);
        assert!(!ctrl.is_busy());
    }

    #[test]
    fn test_begin_while_busy_is_rejected() {
        let mut ctrl = ActionController::new(ActionKind::News.spec());
        let mut p = FakePresenter::default();

        assert!(ctrl.begin(&mut p));
        // Second click during the in-flight interval: no second dispatch,
        // no second start line, no extra busy transition.
        assert!(!ctrl.begin(&mut p));
        assert_eq!(p.lines.len(), 1);
        assert_eq!(p.busy_transitions, vec![true]);
    }

    #[test]
    fn test_controller_reusable_after_settle() {
        let mut ctrl = ActionController::new(ActionKind::News.spec());
        let mut p = FakePresenter::default();

        ctrl.begin(&mut p);
        ctrl.finish(response("success", "ok", &[]), &mut p);
        assert!(ctrl.begin(&mut p));
        assert!(ctrl.is_busy());
    }
}
