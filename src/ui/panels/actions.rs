// ScrapeDeck - ui/panels/actions.rs
//
// The two action cards. Each card owns one button; clicking sets
// `pending_action`, which the frame loop consumes to dispatch the request.
// While busy the button is disabled and shows the busy label with a
// spinner, so a second click cannot be produced from this surface.

use crate::app::state::AppState;
use crate::core::model::ActionKind;
use crate::ui::theme;

/// Render the action cards (central area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_top(|ui| {
        for &kind in ActionKind::all() {
            render_card(ui, state, kind);
        }
    });
}

fn render_card(ui: &mut egui::Ui, state: &mut AppState, kind: ActionKind) {
    let spec = kind.spec();
    let busy = state.view(kind).busy;

    ui.group(|ui| {
        ui.set_width(theme::ACTION_CARD_WIDTH);
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(spec.subtitle).small().weak());
            ui.add_space(6.0);

            if busy {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.add_enabled(
                        false,
                        egui::Button::new(spec.busy_label)
                            .min_size(theme::ACTION_BUTTON_SIZE.into()),
                    );
                });
            } else if ui
                .add(egui::Button::new(spec.title).min_size(theme::ACTION_BUTTON_SIZE.into()))
                .clicked()
            {
                state.pending_action = Some(kind);
            }
        });
    });
}
