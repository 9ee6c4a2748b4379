// LeadDeck - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: util, directories, toml.
// Must NOT depend on: core, app, ui.

pub mod config;
pub mod fs;
