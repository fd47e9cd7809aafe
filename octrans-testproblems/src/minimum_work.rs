//! The minimal 1-D "minimum work" problem: drive a point from `x(0)=0` to
//! `x(1)=1` under `ẋ = u` while minimizing `∫ u^2 dt`. No path constraints.
//! Small enough to hand-check layout/quadrature properties against.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{Bounds, MeshPointInput, Ocp, OcpMetadata};

#[derive(Debug, Default)]
pub struct MinimumWorkOcp;

impl Ocp<f64> for MinimumWorkOcp {
    fn num_states(&self) -> usize {
        1
    }

    fn num_controls(&self) -> usize {
        1
    }

    fn num_path_constraints(&self) -> usize {
        0
    }

    fn state_names(&self) -> Vec<String> {
        vec!["x".into()]
    }

    fn control_names(&self) -> Vec<String> {
        vec!["u".into()]
    }

    fn path_constraint_names(&self) -> Vec<String> {
        vec![]
    }

    fn all_bounds(&self) -> Bounds {
        Bounds {
            initial_time: (0.0, 0.0),
            final_time: (1.0, 1.0),
            states: (array![-100.0], array![100.0]),
            initial_states: (array![0.0], array![0.0]),
            final_states: (array![1.0], array![1.0]),
            controls: (array![-100.0], array![100.0]),
            initial_controls: (array![-100.0], array![100.0]),
            final_controls: (array![-100.0], array![100.0]),
            path_constraints: (array![], array![]),
        }
    }

    fn initialize_on_mesh(&self, _mesh: &Array1<f64>) {}

    fn calc_endpoint_cost(&self, _final_time: f64, _final_state: ArrayView1<f64>) -> f64 {
        0.0
    }

    fn calc_integral_cost(&self, _time: f64, _state: ArrayView1<f64>, control: ArrayView1<f64>) -> f64 {
        control[0] * control[0]
    }

    fn calc_differential_algebraic_equations(
        &self,
        point: MeshPointInput<f64>,
        mut derivs_out: ArrayViewMut1<f64>,
        _path_out: ArrayViewMut1<f64>,
    ) {
        derivs_out[0] = point.control[0];
    }

    fn metadata(&self) -> OcpMetadata {
        OcpMetadata {
            goal_name: Some("minimum work".into()),
        }
    }
}
