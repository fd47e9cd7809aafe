//! Scenario 6 plus the layout-bijection property: round-tripping an
//! `Iterate` through `Transcription::construct_iterate` /
//! `Transcription::deconstruct_iterate` reproduces states/controls exactly
//! when the source is already on the target mesh, and attaches the OCP's
//! names.

use ndarray::Array1;

use octrans_core::{Iterate, Transcription, TranscriptionConfig};
use octrans_testproblems::HangingMassOcp;

fn linspaced_guess(n: usize) -> Iterate {
    let time = Array1::linspace(0.0, 2.0, n);
    let states = ndarray::Array2::from_shape_fn((2, n), |(row, col)| {
        if row == 0 {
            col as f64 / (n - 1) as f64
        } else {
            0.0
        }
    });
    let controls = ndarray::Array2::zeros((1, n));
    Iterate {
        time,
        states,
        controls,
        state_names: vec!["height".into(), "velocity".into()],
        control_names: vec!["force".into()],
    }
}

#[test]
fn round_trip_reproduces_trajectory_when_already_on_mesh() {
    let ocp = HangingMassOcp::default();
    let config = TranscriptionConfig::builder()
        .num_mesh_points(6)
        .interpolate_guess(false)
        .build();
    let transcription = Transcription::new(&ocp, &config).unwrap();

    let guess = linspaced_guess(6);
    let x_nlp = transcription.construct_iterate(&guess, &config).unwrap();
    let back = transcription.deconstruct_iterate(x_nlp.as_slice().unwrap());

    for j in 0..6 {
        assert!((back.states[(0, j)] - guess.states[(0, j)]).abs() < 1e-12);
        assert!((back.states[(1, j)] - guess.states[(1, j)]).abs() < 1e-12);
        assert!((back.controls[(0, j)] - guess.controls[(0, j)]).abs() < 1e-12);
    }
    assert_eq!(back.state_names, vec!["height".to_string(), "velocity".to_string()]);
    assert_eq!(back.control_names, vec!["force".to_string()]);
}

#[test]
fn interpolation_onto_the_mesh_happens_when_column_counts_differ() {
    let ocp = HangingMassOcp::default();
    let config = TranscriptionConfig::builder()
        .num_mesh_points(9)
        .interpolate_guess(true)
        .build();
    let transcription = Transcription::new(&ocp, &config).unwrap();

    let guess = linspaced_guess(3); // coarser than the N=9 mesh
    let x_nlp = transcription.construct_iterate(&guess, &config).unwrap();
    assert_eq!(x_nlp.len(), transcription.num_variables());

    let back = transcription.deconstruct_iterate(x_nlp.as_slice().unwrap());
    assert_eq!(back.states.ncols(), 9);
}
