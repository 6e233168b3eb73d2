// ScrapeDeck - app/mod.rs
//
// Application layer: state management and the background job lifecycle.
// Dependencies: core layer.
// Must NOT depend on: ui.

pub mod job;
pub mod state;
