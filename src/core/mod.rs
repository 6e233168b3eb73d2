// ScrapeDeck - core/mod.rs
//
// Core layer: data model, console sink, action lifecycle.
// No I/O, no UI; depends on std, chrono and serde only.

pub mod console;
pub mod controller;
pub mod model;
