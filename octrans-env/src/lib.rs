//! Shared configuration error types for the octrans workspace.
//!
//! This crate centralizes the handful of error variants that arise while
//! parsing and validating the recognized configuration options (mesh size,
//! interpolation policy) before a transcription is ever built, so that the
//! same `ConfigError` type can be reused by `octrans-core` and by any driver
//! crate that reads configuration from the environment or from a CLI.

mod error;

pub use error::{parse_num_mesh_points, ConfigError};
