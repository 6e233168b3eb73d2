// ScrapeDeck - gui.rs
//
// Top-level eframe::App implementation.
// Wires the panels together and drives the per-action request lifecycle:
// consumes click flags set by the actions panel, polls the job channels,
// and feeds settled outcomes through the action controllers.

use crate::app::job::JobManager;
use crate::app::state::{ActionView, AppState};
use crate::core::console::ConsoleBuffer;
use crate::core::controller::{ActionController, Presenter};
use crate::core::model::{ActionKind, ConsoleLine};
use crate::ui;
use crate::util::constants;

/// Controller plus job channel for one action. The two runtimes are fully
/// independent; both may have a request in flight at the same time.
struct ActionRuntime {
    controller: ActionController,
    job: JobManager,
}

impl ActionRuntime {
    fn new(kind: ActionKind) -> Self {
        Self {
            controller: ActionController::new(kind.spec()),
            job: JobManager::new(),
        }
    }
}

/// Presenter over the live GUI state: busy flag on the action's view,
/// lines into the shared console buffer.
struct GuiPresenter<'a> {
    view: &'a mut ActionView,
    console: &'a mut ConsoleBuffer,
}

impl Presenter for GuiPresenter<'_> {
    fn set_busy(&mut self, busy: bool) {
        self.view.busy = busy;
    }

    fn append_line(&mut self, line: ConsoleLine) {
        self.console.push_line(line);
    }
}

/// The ScrapeDeck application.
pub struct ScrapeDeckApp {
    pub state: AppState,
    news: ActionRuntime,
    prices: ActionRuntime,
    /// Shared blocking HTTP agent. Built with default config: no global
    /// timeout, matching the wire contract (a hung request leaves its
    /// button busy).
    agent: ureq::Agent,
}

impl ScrapeDeckApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            news: ActionRuntime::new(ActionKind::News),
            prices: ActionRuntime::new(ActionKind::Prices),
            agent: ureq::Agent::new_with_defaults(),
        }
    }
}

impl eframe::App for ScrapeDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Settle finished jobs ----
        for &kind in ActionKind::all() {
            let runtime = match kind {
                ActionKind::News => &mut self.news,
                ActionKind::Prices => &mut self.prices,
            };
            if let Some(outcome) = runtime.job.poll_outcome() {
                let AppState {
                    console,
                    news_view,
                    prices_view,
                    ..
                } = &mut self.state;
                let view = match kind {
                    ActionKind::News => news_view,
                    ActionKind::Prices => prices_view,
                };
                let mut presenter = GuiPresenter { view, console };
                runtime.controller.finish(outcome, &mut presenter);
                self.state.status_message = "Ready.".to_string();
            }
        }

        // ---- Dispatch a pending click ----
        // pending_action: the actions panel requested a run via button click.
        if let Some(kind) = self.state.pending_action.take() {
            let spec = kind.spec();
            let url = format!(
                "{}{}",
                self.state.server_url.trim_end_matches('/'),
                spec.endpoint
            );
            let agent = self.agent.clone();
            let runtime = match kind {
                ActionKind::News => &mut self.news,
                ActionKind::Prices => &mut self.prices,
            };
            let AppState {
                console,
                news_view,
                prices_view,
                ..
            } = &mut self.state;
            let view = match kind {
                ActionKind::News => news_view,
                ActionKind::Prices => prices_view,
            };
            let mut presenter = GuiPresenter { view, console };
            // begin() refuses re-entry; dispatch only on a fresh cycle.
            if runtime.controller.begin(&mut presenter) {
                runtime.job.start(agent, url);
                self.state.status_message = spec.start_message.to_string();
            }
        }

        // Keep repainting while a job is in flight so the outcome channel
        // is polled promptly.
        if self.state.any_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                constants::JOB_POLL_INTERVAL_MS,
            ));
        }

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.state.any_busy() {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.state.server_url)
                            .small()
                            .weak(),
                    );
                });
            });
        });

        // Console panel — only mounted once something has been logged.
        if self.state.console.revealed() {
            egui::TopBottomPanel::bottom("console_panel")
                .resizable(true)
                .default_height(ui::theme::CONSOLE_HEIGHT)
                .show(ctx, |ui| {
                    ui::panels::console::render(ui, &mut self.state);
                });
        }

        // Central panel (action cards)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(constants::APP_NAME);
            ui.label(
                egui::RichText::new("Trigger scraper jobs on the backend and watch their output.")
                    .weak(),
            );
            ui.add_space(10.0);
            ui::panels::actions::render(ui, &mut self.state);
        });
    }
}
