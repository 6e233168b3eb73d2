// ScrapeDeck - ui/mod.rs
//
// UI layer: panels and theme. Renders from app state; all work requests
// go back through flags on AppState, never directly into the app layer.

pub mod panels;
pub mod theme;
