//! Validation errors for recognized configuration options.

/// Error type for problems with recognized configuration options.
///
/// These are distinct from `octrans_core::TranscriptionError` because they
/// arise earlier, while parsing raw configuration (e.g. from a CLI flag or
/// an environment variable) before an OCP has even been bound.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("num_mesh_points must be >= 2, got {0}")]
    MeshTooSmall(usize),

    #[error("num_mesh_points could not be parsed as an integer: {0}")]
    MeshPointsNotAnInteger(String),
}

/// Parse and validate the `num_mesh_points` configuration option.
pub fn parse_num_mesh_points(raw: &str) -> Result<usize, ConfigError> {
    let n: usize = raw
        .parse()
        .map_err(|_| ConfigError::MeshPointsNotAnInteger(raw.to_string()))?;
    if n < 2 {
        return Err(ConfigError::MeshTooSmall(n));
    }
    Ok(n)
}
