// LeadDeck - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, serde, csv, chrono, rand.
// Must NOT depend on: ui, platform, app, or any network/file I/O.

pub mod export;
pub mod filter;
pub mod ingest;
pub mod model;
pub mod tagging;
