// LeadDeck - app/mod.rs
//
// Application layer: lead store, background loading, export flow.
// Dependencies: core, platform (export file creation), util.
// Must NOT depend on: ui.

pub mod export;
pub mod loader;
pub mod state;
