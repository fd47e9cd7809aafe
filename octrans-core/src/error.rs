//! Error taxonomy for the transcription layer.
//!
//! Configuration-time errors ([`TranscriptionError::InvalidConfig`] and
//! [`TranscriptionError::DimensionMismatch`]) are fatal to the solve and are
//! meant to be surfaced to the caller before any NLP iterations begin.
//! Evaluation-time errors ([`TranscriptionError::NumericalFailure`]) are not
//! recovered here; they propagate as-is so the NLP solver's own line-search
//! or trust-region logic can react. No automatic retries happen at this
//! layer.

/// Errors produced while configuring or evaluating a transcription.
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    /// A dimension declared by the OCP does not match a vector/name list it
    /// returned, or the mesh has fewer than 2 points.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An `Iterate`'s time/states/controls column counts are inconsistent
    /// with each other or with the OCP's declared dimensions.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// An OCP callback produced a NaN or infinite value during evaluation.
    #[error("numerical failure during evaluation: {0}")]
    NumericalFailure(String),

    /// A query (name lookup, column index) fell outside the declared size.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Writing a diagnostics report to the caller-supplied sink failed.
    #[error("diagnostics output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TranscriptionError>;
