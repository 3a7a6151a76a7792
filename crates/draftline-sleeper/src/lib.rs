// Sleeper platform integration: REST client, wire models, draft-config
// resolution, and the per-cycle draft tracker.

pub mod client;
pub mod error;
pub mod models;
pub mod resolve;
pub mod source;
pub mod tracker;

pub use client::SleeperClient;
pub use error::SleeperError;
pub use source::DraftSource;
pub use tracker::{DraftSnapshot, DraftTracker};
