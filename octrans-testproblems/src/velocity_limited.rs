//! A one-DOF point mass with a path constraint on speed: state = [position,
//! velocity], control = [force]. Drives the mass from rest at the origin to
//! rest at a target position while keeping `|velocity| <= max_speed` at
//! every mesh point, exercising the path-constraints block the hanging-mass
//! and minimum-work fixtures leave at zero. Grounded on the inequality-path
//! shape of `constrained.rs`'s disk/bump constraints, reworked into a
//! dynamics-coupled path constraint instead of a static one.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{Bounds, MeshPointInput, Ocp, OcpMetadata};

/// `ẋ = [velocity, force / mass]`, `g = velocity`, cost `∫ force^2 dt`.
#[derive(Debug, Clone)]
pub struct VelocityLimitedOcp {
    pub mass: f64,
    pub target_position: f64,
    pub max_force: f64,
    pub max_speed: f64,
}

impl Default for VelocityLimitedOcp {
    fn default() -> Self {
        VelocityLimitedOcp {
            mass: 1.0,
            target_position: 1.0,
            max_force: 20.0,
            max_speed: 2.0,
        }
    }
}

impl Ocp<f64> for VelocityLimitedOcp {
    fn num_states(&self) -> usize {
        2
    }

    fn num_controls(&self) -> usize {
        1
    }

    fn num_path_constraints(&self) -> usize {
        1
    }

    fn state_names(&self) -> Vec<String> {
        vec!["position".into(), "velocity".into()]
    }

    fn control_names(&self) -> Vec<String> {
        vec!["force".into()]
    }

    fn path_constraint_names(&self) -> Vec<String> {
        vec!["speed_limit".into()]
    }

    fn all_bounds(&self) -> Bounds {
        Bounds {
            initial_time: (0.0, 0.0),
            final_time: (1.0, 5.0),
            states: (
                array![-10.0, -self.max_speed],
                array![10.0, self.max_speed],
            ),
            initial_states: (array![0.0, 0.0], array![0.0, 0.0]),
            final_states: (
                array![self.target_position, 0.0],
                array![self.target_position, 0.0],
            ),
            controls: (array![-self.max_force], array![self.max_force]),
            initial_controls: (array![-self.max_force], array![self.max_force]),
            final_controls: (array![-self.max_force], array![self.max_force]),
            path_constraints: (array![-self.max_speed], array![self.max_speed]),
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
        mut path_out: ArrayViewMut1<f64>,
    ) {
        let velocity = point.state[1];
        let force = point.control[0];
        derivs_out[0] = velocity;
        derivs_out[1] = force / self.mass;
        path_out[0] = velocity;
    }

    fn metadata(&self) -> OcpMetadata {
        OcpMetadata {
            goal_name: Some("speed-limited minimum effort".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_physically_sane() {
        let ocp = VelocityLimitedOcp::default();
        assert!(ocp.mass > 0.0);
        assert!(ocp.max_speed > 0.0);
        assert!(ocp.max_force > 0.0);
    }
}
