// ShelfTrack - app/mod.rs
//
// Application layer: orchestration, state management, persistence.
// Dependencies: core layer.
// Must NOT depend on: ui, platform specifics.

pub mod persist;
pub mod state;
pub mod store;
