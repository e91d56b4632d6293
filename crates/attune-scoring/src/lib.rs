//! attune-scoring
//!
//! The scoring and interpretation engine. Pure data and pure functions —
//! no I/O, no shared mutable state. Defines the fixed domain configuration
//! registry, answer normalization, score aggregation, T-score conversion,
//! and severity classification. Safe to call concurrently for independent
//! submissions; each call only reads the immutable registry.

pub mod aggregate;
pub mod answer;
pub mod config;
pub mod domains;
pub mod interpret;
pub mod report;
pub mod tscore;

pub use domains::registry;
pub use report::generate_report;
