//! biometria-cli library root.
//!
//! Re-exports the file-facing modules so integration tests can exercise
//! them without going through the binary.

pub mod config;
pub mod input;
pub mod render;
