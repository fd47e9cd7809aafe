//! Scenario 2: variable-bound concatenation with distinct initial/interior/
//! final blocks, `nx=2, nu=1, N=4`.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{Bounds, MeshPointInput, Ocp, OcpMetadata, Transcription, TranscriptionConfig};

struct TwoStateOneControl;

impl Ocp<f64> for TwoStateOneControl {
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
        vec!["a".into(), "b".into()]
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
            states: (array![-1.0, -1.0], array![1.0, 1.0]),
            initial_states: (array![0.0, 0.0], array![0.0, 0.0]),
            final_states: (array![1.0, 1.0], array![1.0, 1.0]),
            controls: (array![-2.0], array![2.0]),
            initial_controls: (array![-2.0], array![2.0]),
            final_controls: (array![-2.0], array![2.0]),
            path_constraints: (array![], array![]),
        }
    }
    fn initialize_on_mesh(&self, _mesh: &Array1<f64>) {}
    fn calc_endpoint_cost(&self, _final_time: f64, _final_state: ArrayView1<f64>) -> f64 {
        0.0
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
fn initial_block_matches_initial_state_bounds() {
    let ocp = TwoStateOneControl;
    let config = TranscriptionConfig::builder().num_mesh_points(4).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let (lower, _upper) = transcription.variable_bounds();

    // positions 2..4 are the first mesh point's [state; control] block's
    // state slots, and must equal initial_states_lo = [0, 0].
    assert_eq!(lower[2], 0.0);
    assert_eq!(lower[3], 0.0);
}

#[test]
fn interior_blocks_match_interior_state_and_control_bounds() {
    let ocp = TwoStateOneControl;
    let config = TranscriptionConfig::builder().num_mesh_points(4).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let (lower, upper) = transcription.variable_bounds();

    // Mesh point 1 and 2 are interior (k=1, k=2 out of 0..3); their state
    // bounds must equal the generic `states` bound, not the initial/final
    // bound overrides.
    let stride = 2 + 1; // nx + nu
    let base = 2; // after t0, tf
    for k in [1usize, 2usize] {
        let offset = base + k * stride;
        assert_eq!(lower[offset], -1.0);
        assert_eq!(lower[offset + 1], -1.0);
        assert_eq!(upper[offset], 1.0);
        assert_eq!(upper[offset + 1], 1.0);
        assert_eq!(lower[offset + 2], -2.0);
        assert_eq!(upper[offset + 2], 2.0);
    }
}

#[test]
fn last_block_matches_final_state_and_control_bounds() {
    let ocp = TwoStateOneControl;
    let config = TranscriptionConfig::builder().num_mesh_points(4).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let (lower, upper) = transcription.variable_bounds();

    let stride = 2 + 1;
    let base = 2;
    let offset = base + 3 * stride; // k = N-1 = 3
    assert_eq!(lower[offset], 1.0);
    assert_eq!(lower[offset + 1], 1.0);
    assert_eq!(upper[offset], 1.0);
    assert_eq!(upper[offset + 1], 1.0);
}
