// src/activity/mod.rs
// =============================================================================
// This module turns raw GitHub events into the printed activity summary.
//
// Submodules:
// - category: the nine counted categories and the event type table
// - summary: one-pass aggregation, overall or per repository
// - report: text lines for a summary
//
// Everything in here is pure computation; the network lives in github/.
// =============================================================================

mod category;
mod report;
mod summary;

pub use report::render;
pub use summary::{summarize, Grouping};
