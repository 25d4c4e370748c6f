//! CLI library components for AYU-Sync.

pub mod logging;
pub mod report;
