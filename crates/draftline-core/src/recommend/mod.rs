// Recommendation engine: roster needs, position-aware scoring, and the
// ranked lists built from them.

pub mod browse;
pub mod engine;
pub mod metrics;
pub mod scoring;
