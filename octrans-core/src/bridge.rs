//! NLP-facing surface: the handful of calls an NLP solver driver needs,
//! forwarded unchanged to the underlying [`Transcription`].

use ndarray::Array1;

use crate::error::TranscriptionError;
use crate::ocp::Ocp;
use crate::scalar::Scalar;
use crate::transcription::Transcription;

/// Thin wrapper exposing the sizes, bounds, and evaluation callbacks an NLP
/// solver driver needs, without exposing the transcription's internal mesh
/// or scratch buffers.
pub struct NlpBridge<'a, S: Scalar, O: Ocp<S>> {
    transcription: &'a Transcription<'a, S, O>,
}

impl<'a, S: Scalar, O: Ocp<S>> NlpBridge<'a, S, O> {
    pub fn new(transcription: &'a Transcription<'a, S, O>) -> Self {
        NlpBridge { transcription }
    }

    pub fn num_variables(&self) -> usize {
        self.transcription.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.transcription.num_constraints()
    }

    pub fn variable_lower(&self) -> &Array1<f64> {
        self.transcription.variable_bounds().0
    }

    pub fn variable_upper(&self) -> &Array1<f64> {
        self.transcription.variable_bounds().1
    }

    pub fn constraint_lower(&self) -> &Array1<f64> {
        self.transcription.constraint_bounds().0
    }

    pub fn constraint_upper(&self) -> &Array1<f64> {
        self.transcription.constraint_bounds().1
    }

    pub fn evaluate_objective(&self, x: &[S]) -> Result<S, TranscriptionError> {
        if x.len() != self.num_variables() {
            return Err(TranscriptionError::DimensionMismatch(format!(
                "evaluate_objective received {} variables, expected {}",
                x.len(),
                self.num_variables()
            )));
        }
        Ok(self.transcription.calc_objective(x))
    }

    pub fn evaluate_constraints(&self, x: &[S], c: &mut [S]) -> Result<(), TranscriptionError> {
        if x.len() != self.num_variables() {
            return Err(TranscriptionError::DimensionMismatch(format!(
                "evaluate_constraints received {} variables, expected {}",
                x.len(),
                self.num_variables()
            )));
        }
        if c.len() != self.num_constraints() {
            return Err(TranscriptionError::DimensionMismatch(format!(
                "evaluate_constraints output buffer has length {}, expected {}",
                c.len(),
                self.num_constraints()
            )));
        }
        self.transcription.calc_constraints(x, c);
        Ok(())
    }
}
