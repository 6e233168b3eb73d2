// ScrapeDeck - ui/theme.rs
//
// Colour scheme, severity colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use egui::Color32;

/// Console text colour for a given severity level.
pub fn severity_colour(severity: &Severity) -> Color32 {
    match severity {
        Severity::Error => Color32::from_rgb(239, 68, 68),  // Red 500
        Severity::Warn => Color32::from_rgb(245, 158, 11),  // Amber 500
        Severity::Info => Color32::from_rgb(0, 255, 0),     // terminal green
    }
}

/// Console panel colours — dark terminal look regardless of app theme.
pub const CONSOLE_BG: Color32 = Color32::from_rgb(17, 24, 39); // Gray 900
pub const CONSOLE_TIMESTAMP: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const ACTION_CARD_WIDTH: f32 = 240.0;
pub const ACTION_BUTTON_SIZE: [f32; 2] = [200.0, 30.0];
pub const CONSOLE_HEIGHT: f32 = 260.0;
pub const CONSOLE_FONT_SIZE: f32 = 12.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colour_mapping() {
        // info -> green, warn -> orange, error -> red.
        assert_eq!(
            severity_colour(&Severity::Info),
            Color32::from_rgb(0, 255, 0)
        );
        assert_eq!(
            severity_colour(&Severity::Warn),
            Color32::from_rgb(245, 158, 11)
        );
        assert_eq!(
            severity_colour(&Severity::Error),
            Color32::from_rgb(239, 68, 68)
        );
    }

    #[test]
    fn test_severity_colours_are_distinct() {
        let colours = [
            severity_colour(&Severity::Info),
            severity_colour(&Severity::Warn),
            severity_colour(&Severity::Error),
        ];
        assert_ne!(colours[0], colours[1]);
        assert_ne!(colours[1], colours[2]);
        assert_ne!(colours[0], colours[2]);
    }
}
