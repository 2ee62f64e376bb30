// ShelfTrack - ui/panels/mod.rs

pub mod confirm;
pub mod detail;
pub mod filters;
pub mod form;
pub mod list;
pub mod stats;
