// ScrapeDeck - ui/panels/mod.rs

pub mod actions;
pub mod console;
