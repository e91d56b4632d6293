//! attune-core
//!
//! Pure domain types: submissions, answer tokens, and computed wellness
//! reports. No HTTP or storage dependency — this is the shared vocabulary
//! of the Attune system.

pub mod error;
pub mod models;
