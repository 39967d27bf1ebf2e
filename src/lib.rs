//! Cost analytics reports from Cost Explorer CSV exports and a synced
//! cost database.

pub mod cli;
pub mod services;
pub mod sources;
pub mod types;
