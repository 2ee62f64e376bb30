// ShelfTrack - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library, chrono, serde.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod coerce;
pub mod date;
pub mod export;
pub mod filter;
pub mod model;
pub mod stats;
