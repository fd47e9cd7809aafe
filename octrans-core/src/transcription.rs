//! Trapezoidal transcription: THE CORE mapping from a continuous-time
//! [`Ocp`] to a finite NLP over the flat vector `x_nlp` described in
//! `views`.

use std::cell::RefCell;

use ndarray::{Array1, Array2};

use crate::config::TranscriptionConfig;
use crate::error::{Result, TranscriptionError};
use crate::iterate::{construct_iterate, deconstruct_iterate, Iterate};
use crate::mesh::{quadrature_weights, uniform_mesh};
use crate::ocp::{MeshPointInput, Ocp};
use crate::scalar::Scalar;
use crate::views;

/// A trapezoidal transcription of `O` bound to a fixed mesh size.
///
/// Holds the OCP by shared reference for its own lifetime; evaluation
/// methods take `&self`, matching the OCP's own single-evaluator contract
/// (the transcription itself is not meant to be evaluated concurrently
/// with multiple candidate vectors from multiple threads).
pub struct Transcription<'a, S: Scalar, O: Ocp<S>> {
    ocp: &'a O,
    num_states: usize,
    num_controls: usize,
    num_path_constraints: usize,
    num_mesh_points: usize,
    num_defects: usize,
    mesh: Array1<f64>,
    quadrature_weights: Array1<f64>,
    variable_lower: Array1<f64>,
    variable_upper: Array1<f64>,
    constraint_lower: Array1<f64>,
    constraint_upper: Array1<f64>,
    derivs_scratch: RefCell<Array2<S>>,
    path_scratch: RefCell<Array2<S>>,
    verbose: bool,
}

impl<'a, S: Scalar, O: Ocp<S>> Transcription<'a, S, O> {
    /// Configure a transcription: build the mesh, validate the OCP's
    /// declared dimensions against the lengths of the vectors in
    /// [`crate::ocp::Bounds`], concatenate the per-mesh-point bounds, and
    /// call [`Ocp::initialize_on_mesh`] exactly once.
    pub fn new(ocp: &'a O, config: &TranscriptionConfig) -> Result<Self> {
        let num_mesh_points = config.num_mesh_points;
        if num_mesh_points < 2 {
            return Err(TranscriptionError::InvalidConfig(format!(
                "num_mesh_points must be >= 2, got {num_mesh_points}"
            )));
        }

        let num_states = ocp.num_states();
        let num_controls = ocp.num_controls();
        let num_path_constraints = ocp.num_path_constraints();
        let num_defects = num_mesh_points - 1;

        if config.verbose {
            eprintln!(
                "Transcription configure: mesh_points={num_mesh_points}, nx={num_states}, nu={num_controls}, n_g={num_path_constraints}"
            );
        }

        let bounds = ocp.all_bounds();
        check_len(&bounds.states.0, num_states, "states lower bound")?;
        check_len(&bounds.states.1, num_states, "states upper bound")?;
        check_len(&bounds.initial_states.0, num_states, "initial_states lower bound")?;
        check_len(&bounds.initial_states.1, num_states, "initial_states upper bound")?;
        check_len(&bounds.final_states.0, num_states, "final_states lower bound")?;
        check_len(&bounds.final_states.1, num_states, "final_states upper bound")?;
        check_len(&bounds.controls.0, num_controls, "controls lower bound")?;
        check_len(&bounds.controls.1, num_controls, "controls upper bound")?;
        check_len(&bounds.initial_controls.0, num_controls, "initial_controls lower bound")?;
        check_len(&bounds.initial_controls.1, num_controls, "initial_controls upper bound")?;
        check_len(&bounds.final_controls.0, num_controls, "final_controls lower bound")?;
        check_len(&bounds.final_controls.1, num_controls, "final_controls upper bound")?;
        check_len(&bounds.path_constraints.0, num_path_constraints, "path_constraints lower bound")?;
        check_len(&bounds.path_constraints.1, num_path_constraints, "path_constraints upper bound")?;

        let mesh = uniform_mesh(num_mesh_points);
        let weights = quadrature_weights(&mesh);

        ocp.initialize_on_mesh(&mesh);

        let (variable_lower, variable_upper) =
            build_variable_bounds(&bounds, num_states, num_controls, num_mesh_points);
        let (constraint_lower, constraint_upper) =
            build_constraint_bounds(&bounds, num_states, num_path_constraints, num_defects, num_mesh_points);

        let derivs_scratch = RefCell::new(Array2::<S>::from_elem((num_states, num_mesh_points), S::default()));
        let path_scratch =
            RefCell::new(Array2::<S>::from_elem((num_path_constraints.max(1), num_mesh_points), S::default()));

        if config.verbose {
            let num_variables = views::NUM_TIME_VARIABLES + num_mesh_points * (num_states + num_controls);
            let num_constraints = num_states * num_defects + num_path_constraints * num_mesh_points;
            eprintln!("  Nv={num_variables}, Nc={num_constraints}");
        }

        Ok(Transcription {
            ocp,
            num_states,
            num_controls,
            num_path_constraints,
            num_mesh_points,
            num_defects,
            mesh,
            quadrature_weights: weights,
            variable_lower,
            variable_upper,
            constraint_lower,
            constraint_upper,
            derivs_scratch,
            path_scratch,
            verbose: config.verbose,
        })
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn num_controls(&self) -> usize {
        self.num_controls
    }

    pub fn num_path_constraints(&self) -> usize {
        self.num_path_constraints
    }

    pub fn num_mesh_points(&self) -> usize {
        self.num_mesh_points
    }

    pub fn num_defects(&self) -> usize {
        self.num_defects
    }

    pub fn mesh(&self) -> &Array1<f64> {
        &self.mesh
    }

    pub fn state_names(&self) -> Vec<String> {
        self.ocp.state_names()
    }

    pub fn control_names(&self) -> Vec<String> {
        self.ocp.control_names()
    }

    pub fn path_constraint_names(&self) -> Vec<String> {
        self.ocp.path_constraint_names()
    }

    pub fn metadata(&self) -> crate::ocp::OcpMetadata {
        self.ocp.metadata()
    }

    /// Whether this transcription was configured to print progress lines
    /// during construction and diagnostics reporting.
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn quadrature_weights(&self) -> &Array1<f64> {
        &self.quadrature_weights
    }

    /// Number of scalar decision variables `Nv = 2 + N(nx + nu)`.
    pub fn num_variables(&self) -> usize {
        views::NUM_TIME_VARIABLES + self.num_mesh_points * (self.num_states + self.num_controls)
    }

    /// Number of scalar constraints `Nc = nx(N-1) + n_g N`.
    pub fn num_constraints(&self) -> usize {
        self.num_states * self.num_defects + self.num_path_constraints * self.num_mesh_points
    }

    pub fn variable_bounds(&self) -> (&Array1<f64>, &Array1<f64>) {
        (&self.variable_lower, &self.variable_upper)
    }

    pub fn constraint_bounds(&self) -> (&Array1<f64>, &Array1<f64>) {
        (&self.constraint_lower, &self.constraint_upper)
    }

    /// Build a flat NLP vector from an initial-guess trajectory, resampling
    /// onto the mesh when `config.interpolate_guess` is set.
    pub fn construct_iterate(&self, traj: &Iterate, config: &TranscriptionConfig) -> Result<Array1<f64>> {
        construct_iterate(
            traj,
            self.num_states,
            self.num_controls,
            self.num_mesh_points,
            config.interpolate_guess,
        )
    }

    /// Recover an [`Iterate`] from a flat NLP vector, attaching this OCP's
    /// state/control names.
    pub fn deconstruct_iterate(&self, x_nlp: &[f64]) -> Iterate {
        deconstruct_iterate(
            x_nlp,
            self.num_states,
            self.num_controls,
            self.num_mesh_points,
            self.ocp.state_names(),
            self.ocp.control_names(),
        )
    }

    /// Mayer term plus quadrature-weighted Lagrange integral, scaled by the
    /// trajectory duration. Uses an explicit loop rather than a dot product:
    /// `S` need not support `ndarray`'s numeric traits, only the arithmetic
    /// in [`Scalar`].
    pub fn calc_objective(&self, x_nlp: &[S]) -> S {
        let t0 = x_nlp[0];
        let tf = x_nlp[1];
        let duration = tf - t0;

        let states = views::states_view(x_nlp, self.num_states, self.num_controls, self.num_mesh_points);
        let controls = views::controls_view(x_nlp, self.num_states, self.num_controls, self.num_mesh_points);

        let final_state = states.column(self.num_mesh_points - 1);
        let endpoint = self.ocp.calc_endpoint_cost(tf, final_state);

        let mut weighted_sum = S::default();
        for k in 0..self.num_mesh_points {
            let time_k = t0 + duration * S::from(self.mesh[k]);
            let integrand = self
                .ocp
                .calc_integral_cost(time_k, states.column(k), controls.column(k));
            weighted_sum = weighted_sum + integrand * S::from(self.quadrature_weights[k]);
        }

        endpoint + weighted_sum * duration
    }

    /// Evaluate the combined defects/path-constraints vector into `c`.
    ///
    /// `c` must have length [`Transcription::num_constraints`]. Computes
    /// every mesh point's dynamics and path constraints first (one call per
    /// point, so shared subexpressions are shared), then assembles the
    /// trapezoidal defects from consecutive derivative columns.
    pub fn calc_constraints(&self, x_nlp: &[S], c: &mut [S]) {
        let t0 = x_nlp[0];
        let tf = x_nlp[1];
        let duration = tf - t0;

        let states = views::states_view(x_nlp, self.num_states, self.num_controls, self.num_mesh_points);
        let controls = views::controls_view(x_nlp, self.num_states, self.num_controls, self.num_mesh_points);

        let mut derivs = self.derivs_scratch.borrow_mut();
        let mut path = self.path_scratch.borrow_mut();

        for k in 0..self.num_mesh_points {
            let time_k = t0 + duration * S::from(self.mesh[k]);
            let point = MeshPointInput {
                index: k,
                time: time_k,
                state: states.column(k),
                control: controls.column(k),
            };
            let mut derivs_col = derivs.column_mut(k);
            if self.num_path_constraints == 0 {
                let mut empty = ndarray::Array1::<S>::from_elem(0, S::default());
                self.ocp
                    .calc_differential_algebraic_equations(point, derivs_col.view_mut(), empty.view_mut());
            } else {
                let mut path_col = path.column_mut(k);
                self.ocp
                    .calc_differential_algebraic_equations(point, derivs_col.view_mut(), path_col.view_mut());
            }
        }

        if self.num_path_constraints > 0 {
            let mut path_out = views::path_constraints_view_mut(
                c,
                self.num_states,
                self.num_defects,
                self.num_path_constraints,
                self.num_mesh_points,
            );
            path_out.assign(&path.slice(ndarray::s![0..self.num_path_constraints, ..]));
        }

        let mut defects_out = views::defects_view_mut(c, self.num_states, self.num_defects);
        for k in 0..self.num_defects {
            let step = S::from(self.mesh[k + 1] - self.mesh[k]) * duration;
            let half_step = step * S::from(0.5);
            for row in 0..self.num_states {
                let x_k = states[(row, k)];
                let x_k1 = states[(row, k + 1)];
                let xdot_k = derivs[(row, k)];
                let xdot_k1 = derivs[(row, k + 1)];
                defects_out[(row, k)] = x_k1 - x_k - half_step * (xdot_k + xdot_k1);
            }
        }
    }
}

fn check_len(v: &Array1<f64>, expected: usize, label: &str) -> Result<()> {
    if v.len() != expected {
        return Err(TranscriptionError::InvalidConfig(format!(
            "{label} has length {}, expected {expected}",
            v.len()
        )));
    }
    Ok(())
}

fn build_variable_bounds(
    bounds: &crate::ocp::Bounds,
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
) -> (Array1<f64>, Array1<f64>) {
    let num_vars = views::NUM_TIME_VARIABLES + num_mesh_points * (num_states + num_controls);
    let mut lower = Array1::<f64>::zeros(num_vars);
    let mut upper = Array1::<f64>::zeros(num_vars);

    lower[0] = bounds.initial_time.0;
    upper[0] = bounds.initial_time.1;
    lower[1] = bounds.final_time.0;
    upper[1] = bounds.final_time.1;

    {
        let mut states_lo = views::states_view_mut(lower.as_slice_mut().unwrap(), num_states, num_controls, num_mesh_points);
        let mut states_hi = views::states_view_mut(upper.as_slice_mut().unwrap(), num_states, num_controls, num_mesh_points);
        for k in 0..num_mesh_points {
            let (src_lo, src_hi) = if k == 0 {
                (&bounds.initial_states.0, &bounds.initial_states.1)
            } else if k == num_mesh_points - 1 {
                (&bounds.final_states.0, &bounds.final_states.1)
            } else {
                (&bounds.states.0, &bounds.states.1)
            };
            states_lo.column_mut(k).assign(src_lo);
            states_hi.column_mut(k).assign(src_hi);
        }
    }
    {
        let mut controls_lo =
            views::controls_view_mut(lower.as_slice_mut().unwrap(), num_states, num_controls, num_mesh_points);
        let mut controls_hi =
            views::controls_view_mut(upper.as_slice_mut().unwrap(), num_states, num_controls, num_mesh_points);
        for k in 0..num_mesh_points {
            let (src_lo, src_hi) = if k == 0 {
                (&bounds.initial_controls.0, &bounds.initial_controls.1)
            } else if k == num_mesh_points - 1 {
                (&bounds.final_controls.0, &bounds.final_controls.1)
            } else {
                (&bounds.controls.0, &bounds.controls.1)
            };
            controls_lo.column_mut(k).assign(src_lo);
            controls_hi.column_mut(k).assign(src_hi);
        }
    }

    (lower, upper)
}

fn build_constraint_bounds(
    bounds: &crate::ocp::Bounds,
    num_states: usize,
    num_path_constraints: usize,
    num_defects: usize,
    num_mesh_points: usize,
) -> (Array1<f64>, Array1<f64>) {
    let num_constraints = num_states * num_defects + num_path_constraints * num_mesh_points;
    let mut lower = Array1::<f64>::zeros(num_constraints);
    let mut upper = Array1::<f64>::zeros(num_constraints);
    // Defects block is an equality constraint: already zero-initialized.

    if num_path_constraints > 0 {
        let mut path_lo = views::path_constraints_view_mut(
            lower.as_slice_mut().unwrap(),
            num_states,
            num_defects,
            num_path_constraints,
            num_mesh_points,
        );
        let mut path_hi = views::path_constraints_view_mut(
            upper.as_slice_mut().unwrap(),
            num_states,
            num_defects,
            num_path_constraints,
            num_mesh_points,
        );
        for k in 0..num_mesh_points {
            path_lo.column_mut(k).assign(&bounds.path_constraints.0);
            path_hi.column_mut(k).assign(&bounds.path_constraints.1);
        }
    }

    (lower, upper)
}
