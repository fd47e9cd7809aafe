//! Transcription configuration: the handful of options recognized when a
//! mesh is built and a flat NLP vector is (de)constructed.

/// Options that shape how an [`crate::Ocp`] is transcribed onto a mesh.
///
/// Grounded on the teacher's `DEConfig`/`DEConfigBuilder` shape: a plain
/// struct with a `Default` impl, plus a fluent builder with one setter per
/// field.
#[derive(Debug, Clone)]
pub struct TranscriptionConfig {
    /// Number of mesh points `N`. Must be `>= 2`.
    pub num_mesh_points: usize,
    /// When constructing the flat vector from a user-supplied guess whose
    /// column count differs from `num_mesh_points`, interpolate it onto the
    /// mesh instead of treating the mismatch as an error.
    pub interpolate_guess: bool,
    /// Gate verbose `eprintln!` progress output.
    pub verbose: bool,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        TranscriptionConfig {
            num_mesh_points: 50,
            interpolate_guess: true,
            verbose: false,
        }
    }
}

impl TranscriptionConfig {
    pub fn builder() -> TranscriptionConfigBuilder {
        TranscriptionConfigBuilder::default()
    }
}

/// Fluent builder for [`TranscriptionConfig`].
#[derive(Debug, Clone, Default)]
pub struct TranscriptionConfigBuilder {
    config: Option<TranscriptionConfig>,
}

impl TranscriptionConfigBuilder {
    fn current(self) -> TranscriptionConfig {
        self.config.unwrap_or_default()
    }

    pub fn num_mesh_points(self, num_mesh_points: usize) -> Self {
        let mut config = self.current();
        config.num_mesh_points = num_mesh_points;
        TranscriptionConfigBuilder { config: Some(config) }
    }

    /// Parse and validate `num_mesh_points` from a raw string (e.g. a CLI
    /// flag or an environment variable), using the same recognized-option
    /// validation as the rest of the workspace.
    pub fn num_mesh_points_str(self, raw: &str) -> Result<Self, octrans_env::ConfigError> {
        let n = octrans_env::parse_num_mesh_points(raw)?;
        Ok(self.num_mesh_points(n))
    }

    pub fn interpolate_guess(self, interpolate_guess: bool) -> Self {
        let mut config = self.current();
        config.interpolate_guess = interpolate_guess;
        TranscriptionConfigBuilder { config: Some(config) }
    }

    pub fn verbose(self, verbose: bool) -> Self {
        let mut config = self.current();
        config.verbose = verbose;
        TranscriptionConfigBuilder { config: Some(config) }
    }

    pub fn build(self) -> TranscriptionConfig {
        self.current()
    }
}
