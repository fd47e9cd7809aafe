//! Scenario 4: an OCP with `φ(t_f, x_f) = x_f[0]^2`, `L ≡ 0`. Any trajectory
//! with `x_f[0] = 3` must produce objective exactly `9`, regardless of the
//! interior trajectory or duration.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{Bounds, MeshPointInput, Ocp, OcpMetadata, Transcription, TranscriptionConfig};

struct EndpointOnly;

impl Ocp<f64> for EndpointOnly {
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
            final_time: (0.0, 100.0),
            states: (array![-100.0], array![100.0]),
            initial_states: (array![-100.0], array![100.0]),
            final_states: (array![-100.0], array![100.0]),
            controls: (array![-100.0], array![100.0]),
            initial_controls: (array![-100.0], array![100.0]),
            final_controls: (array![-100.0], array![100.0]),
            path_constraints: (array![], array![]),
        }
    }
    fn initialize_on_mesh(&self, _mesh: &Array1<f64>) {}
    fn calc_endpoint_cost(&self, _final_time: f64, final_state: ArrayView1<f64>) -> f64 {
        final_state[0] * final_state[0]
    }
    fn calc_integral_cost(&self, _time: f64, _state: ArrayView1<f64>, _control: ArrayView1<f64>) -> f64 {
        0.0
    }
    fn calc_differential_algebraic_equations(
        &self,
        _point: MeshPointInput<f64>,
        mut derivs_out: ArrayViewMut1<f64>,
        _path_out: ArrayViewMut1<f64>,
    ) {
        derivs_out.fill(0.0);
    }
    fn metadata(&self) -> OcpMetadata {
        OcpMetadata::default()
    }
}

#[test]
fn objective_equals_final_state_squared_regardless_of_duration_or_interior() {
    let ocp = EndpointOnly;
    for &(n, tf) in &[(3usize, 1.0f64), (5, 7.3), (2, 0.0)] {
        let config = TranscriptionConfig::builder().num_mesh_points(n).build();
        let transcription = Transcription::new(&ocp, &config).unwrap();

        let mut x_nlp = vec![0.0; transcription.num_variables()];
        x_nlp[0] = 0.0;
        x_nlp[1] = tf;
        let stride = 2;
        for k in 0..n {
            x_nlp[2 + k * stride] = k as f64 * 1.7; // arbitrary interior trajectory
        }
        let last = 2 + (n - 1) * stride;
        x_nlp[last] = 3.0;

        let objective = transcription.calc_objective(&x_nlp);
        assert!((objective - 9.0).abs() < 1e-12, "n={n} tf={tf} objective={objective}");
    }
}
