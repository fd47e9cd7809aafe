//! The OCP contract: everything the transcription layer expects a user to
//! implement. This is the abstract boundary between THE CORE and the
//! problem-specific dynamics/cost the caller owns.

use ndarray::{Array1, ArrayView1};

use crate::scalar::Scalar;

/// Aggregated time/state/control/path-constraint bounds, returned by a
/// single call so an OCP implementor only has one place to get this wrong.
///
/// Every vector field's length must match the corresponding OCP dimension
/// (`states`/`initial_states`/`final_states` length `num_states`,
/// `controls`/`initial_controls`/`final_controls` length `num_controls`,
/// `path_constraints` length `num_path_constraints`); a mismatch is reported
/// as [`crate::TranscriptionError::InvalidConfig`] when the transcription is
/// configured.
#[derive(Debug, Clone)]
pub struct Bounds {
    pub initial_time: (f64, f64),
    pub final_time: (f64, f64),
    pub states: (Array1<f64>, Array1<f64>),
    pub initial_states: (Array1<f64>, Array1<f64>),
    pub final_states: (Array1<f64>, Array1<f64>),
    pub controls: (Array1<f64>, Array1<f64>),
    pub initial_controls: (Array1<f64>, Array1<f64>),
    pub final_controls: (Array1<f64>, Array1<f64>),
    pub path_constraints: (Array1<f64>, Array1<f64>),
}

/// Labeling metadata attached to an OCP, used only for diagnostics output.
/// Does not introduce a new callback or constraint type.
#[derive(Debug, Clone, Default)]
pub struct OcpMetadata {
    /// Human-readable name for the cost/goal this OCP represents, printed
    /// by diagnostics tooling. Purely cosmetic.
    pub goal_name: Option<String>,
}

/// One mesh point's (index, time, state, control) passed to the combined
/// dynamics/path-constraint callback.
pub struct MeshPointInput<'a, S: Scalar> {
    pub index: usize,
    pub time: S,
    pub state: ArrayView1<'a, S>,
    pub control: ArrayView1<'a, S>,
}

/// The continuous-time optimal control problem, as implemented by the
/// caller. Polymorphic over the scalar type `S` used during evaluation so
/// the same implementation serves both finite-difference and
/// automatic-differentiation solvers.
///
/// Implementations may use interior mutability (e.g. `RefCell`) to cache
/// per-mesh-point data in [`Ocp::initialize_on_mesh`] for later evaluations;
/// the transcription holds the OCP by shared reference for its own
/// lifetime and never needs `&mut`. This mirrors the transcription's own
/// single-evaluator, not-thread-safe contract (one logical evaluator per
/// transcription instance, never concurrent evaluation of multiple vectors).
pub trait Ocp<S: Scalar> {
    fn num_states(&self) -> usize;
    fn num_controls(&self) -> usize;
    fn num_path_constraints(&self) -> usize;

    /// Ordered state names; length must equal `num_states()`.
    fn state_names(&self) -> Vec<String>;
    /// Ordered control names; length must equal `num_controls()`.
    fn control_names(&self) -> Vec<String>;
    /// Ordered path-constraint names; length must equal `num_path_constraints()`.
    fn path_constraint_names(&self) -> Vec<String>;

    /// Single aggregated bounds accessor (see [`Bounds`]).
    fn all_bounds(&self) -> Bounds;

    /// Called exactly once by the transcription after configuration, with
    /// the normalized mesh `τ ∈ [0, 1]^N`. May precompute per-mesh-point
    /// data.
    fn initialize_on_mesh(&self, mesh: &Array1<f64>);

    /// Mayer term: cost depending only on terminal time and state.
    fn calc_endpoint_cost(&self, final_time: S, final_state: ArrayView1<S>) -> S;

    /// Lagrange integrand, evaluated at one mesh point.
    fn calc_integral_cost(&self, time: S, state: ArrayView1<S>, control: ArrayView1<S>) -> S;

    /// Assigns state derivatives and path-constraint values simultaneously
    /// at one mesh point, so shared subexpressions are computed once.
    /// `derivs_out` has length `num_states()`, `path_out` has length
    /// `num_path_constraints()`.
    fn calc_differential_algebraic_equations(
        &self,
        point: MeshPointInput<S>,
        derivs_out: ndarray::ArrayViewMut1<S>,
        path_out: ndarray::ArrayViewMut1<S>,
    );

    /// Cosmetic labeling metadata; defaults to unlabeled.
    fn metadata(&self) -> OcpMetadata {
        OcpMetadata::default()
    }
}
