// Library root for the draft model and the per-cycle computations that run
// over it: turn scheduling, roster metrics, and recommendations.

pub mod board;
pub mod cache;
pub mod config;
pub mod draft;
pub mod rankings;
pub mod recommend;
