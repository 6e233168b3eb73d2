// ScrapeDeck - ui/panels/console.rs
//
// The console panel: renders the shared ConsoleBuffer as a dark,
// auto-scrolling, terminal-style log. Each line is the "> "-prefixed
// message in its severity colour, with a dim HH:MM:SS column in front.
//
// The panel itself is only mounted once the buffer is revealed; see
// gui.rs. Rendering never mutates the buffer beyond consuming the
// pending scroll request.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the console panel (bottom area).
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label(egui::RichText::new("Console").strong());
    ui.add_space(2.0);

    let scroll_to_bottom = state.console.take_scroll_request();

    egui::Frame::default()
        .fill(theme::CONSOLE_BG)
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_min_height(theme::CONSOLE_HEIGHT - 40.0);
            let mut scroll = egui::ScrollArea::vertical().auto_shrink([false; 2]);
            if scroll_to_bottom {
                scroll = scroll.stick_to_bottom(true);
            }
            scroll.show(ui, |ui| {
                ui.set_width(ui.available_width());
                for line in state.console.lines() {
                    let font = egui::FontId::monospace(theme::CONSOLE_FONT_SIZE);
                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 6.0;
                        ui.label(
                            egui::RichText::new(line.at.format("%H:%M:%S").to_string())
                                .font(font.clone())
                                .color(theme::CONSOLE_TIMESTAMP),
                        );
                        ui.label(
                            egui::RichText::new(line.display_text())
                                .font(font)
                                .color(theme::severity_colour(&line.severity)),
                        );
                    });
                }
            });
        });
}
