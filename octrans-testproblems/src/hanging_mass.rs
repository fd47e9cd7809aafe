//! A one-DOF actuated point mass ("hanging mass"): state = [height,
//! velocity], control = [force]. Minimizes actuation effort while moving
//! the mass from rest at height 0 to rest at a target height, fighting
//! gravity along the way. Reimplemented as an idiomatic `Ocp<f64>` rather
//! than ported line-by-line from its C++ origin.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{Bounds, MeshPointInput, Ocp, OcpMetadata};

/// `ẋ = [v, (force - m*g) / m]`, cost `∫ force^2 dt`.
#[derive(Debug, Clone)]
pub struct HangingMassOcp {
    pub mass: f64,
    pub gravity: f64,
    pub target_height: f64,
    pub max_force: f64,
}

impl Default for HangingMassOcp {
    fn default() -> Self {
        HangingMassOcp {
            mass: 1.0,
            gravity: 9.81,
            target_height: 1.0,
            max_force: 50.0,
        }
    }
}

impl Ocp<f64> for HangingMassOcp {
    fn num_states(&self) -> usize {
        2
    }

    fn num_controls(&self) -> usize {
        1
    }

    fn num_path_constraints(&self) -> usize {
        0
    }

    fn state_names(&self) -> Vec<String> {
        vec!["height".into(), "velocity".into()]
    }

    fn control_names(&self) -> Vec<String> {
        vec!["force".into()]
    }

    fn path_constraint_names(&self) -> Vec<String> {
        vec![]
    }

    fn all_bounds(&self) -> Bounds {
        Bounds {
            initial_time: (0.0, 0.0),
            final_time: (1.0, 3.0),
            states: (array![-10.0, -50.0], array![10.0, 50.0]),
            initial_states: (array![0.0, 0.0], array![0.0, 0.0]),
            final_states: (
                array![self.target_height, 0.0],
                array![self.target_height, 0.0],
            ),
            controls: (array![-self.max_force], array![self.max_force]),
            initial_controls: (array![-self.max_force], array![self.max_force]),
            final_controls: (array![-self.max_force], array![self.max_force]),
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
        let velocity = point.state[1];
        let force = point.control[0];
        derivs_out[0] = velocity;
        derivs_out[1] = (force - self.mass * self.gravity) / self.mass;
    }

    fn metadata(&self) -> OcpMetadata {
        OcpMetadata {
            goal_name: Some("hanging mass minimum effort".into()),
        }
    }
}
