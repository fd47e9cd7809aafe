//! Scenario 5: bound-activation reporting. An initial state fixed at `[0,0]`
//! with value `0` is ignored (lower == upper == value); a state bound
//! `[0,1]` with value `0` is active; value `-0.5` is active and violated.

use ndarray::{array, Array1, ArrayView1, ArrayViewMut1};

use octrans_core::{
    print_constraint_values, Bounds, Iterate, MeshPointInput, Ocp, OcpMetadata, Transcription,
    TranscriptionConfig,
};

struct SingleState;

impl Ocp<f64> for SingleState {
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
            states: (array![0.0], array![1.0]),
            initial_states: (array![0.0], array![0.0]),
            final_states: (array![0.0], array![1.0]),
            controls: (array![-10.0], array![10.0]),
            initial_controls: (array![-10.0], array![10.0]),
            final_controls: (array![-10.0], array![10.0]),
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

fn guess_with_initial_state(value: f64) -> Iterate {
    Iterate {
        time: Array1::linspace(0.0, 1.0, 3),
        states: ndarray::Array2::from_shape_vec((1, 3), vec![value, 0.5, 0.5]).unwrap(),
        controls: ndarray::Array2::zeros((1, 3)),
        state_names: vec!["x".into()],
        control_names: vec!["u".into()],
    }
}

#[test]
fn fixed_initial_bound_at_value_is_not_reported_active() {
    let ocp = SingleState;
    let config = TranscriptionConfig::builder().num_mesh_points(3).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let guess = guess_with_initial_state(0.0);

    let mut out = Vec::new();
    print_constraint_values(&transcription, &guess, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();

    // The initial-state column's value is printed without an L/U marker.
    let state_line = report
        .lines()
        .find(|l| l.trim_start().starts_with("x:"))
        .expect("state row present");
    let first_field = state_line.split_whitespace().nth(1).unwrap();
    assert!(
        !first_field.ends_with('L') && !first_field.ends_with('*'),
        "expected no activation marker on fixed bound, got: {first_field}"
    );
}

#[test]
fn lower_bound_at_zero_is_reported_active_when_not_fixed() {
    // Use a guess where the *interior* mesh point sits at its lower bound 0,
    // which (unlike the initial point) is a genuine [0,1] range, not a fixed
    // [0,0] bound.
    let ocp = SingleState;
    let config = TranscriptionConfig::builder().num_mesh_points(3).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let guess = Iterate {
        time: Array1::linspace(0.0, 1.0, 3),
        states: ndarray::Array2::from_shape_vec((1, 3), vec![0.0, 0.0, 0.5]).unwrap(),
        controls: ndarray::Array2::zeros((1, 3)),
        state_names: vec!["x".into()],
        control_names: vec!["u".into()],
    };

    let mut out = Vec::new();
    print_constraint_values(&transcription, &guess, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    let state_line = report
        .lines()
        .find(|l| l.trim_start().starts_with("x:"))
        .unwrap();
    // Second field (interior mesh point) must carry the active-lower marker.
    let interior_field = state_line.split_whitespace().nth(2).unwrap();
    assert!(interior_field.ends_with('L'), "got: {interior_field}");
}

#[test]
fn value_below_lower_bound_is_reported_violated() {
    let ocp = SingleState;
    let config = TranscriptionConfig::builder().num_mesh_points(3).build();
    let transcription = Transcription::new(&ocp, &config).unwrap();
    let guess = Iterate {
        time: Array1::linspace(0.0, 1.0, 3),
        states: ndarray::Array2::from_shape_vec((1, 3), vec![0.0, -0.5, 0.5]).unwrap(),
        controls: ndarray::Array2::zeros((1, 3)),
        state_names: vec!["x".into()],
        control_names: vec!["u".into()],
    };

    let mut out = Vec::new();
    print_constraint_values(&transcription, &guess, &mut out).unwrap();
    let report = String::from_utf8(out).unwrap();
    let state_line = report
        .lines()
        .find(|l| l.trim_start().starts_with("x:"))
        .unwrap();
    let interior_field = state_line.split_whitespace().nth(2).unwrap();
    assert!(interior_field.ends_with('*'), "got: {interior_field}");
}
