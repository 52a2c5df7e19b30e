//! biometria-core
//!
//! Pure domain types for biophysical age scoring: calibration ranges and
//! boards, raw measurement input, per-metric and aggregate score results,
//! and the well-known metric catalog. No I/O — this is the shared vocabulary
//! of the Biometria system.

pub mod error;
pub mod metrics;
pub mod models;
