//! Human-readable reporting over a candidate trajectory: which bounds are
//! active or violated, and how large the defect/path-constraint residuals
//! are. Writes to a caller-supplied `impl std::io::Write` rather than
//! directly to stdout, so callers can redirect to a file or a string buffer.

use std::io::{self, Write};

use crate::error::Result;
use crate::iterate::{construct_iterate, Iterate};
use crate::ocp::Ocp;
use crate::scalar::Scalar;
use crate::transcription::Transcription;
use crate::views;

/// Classification of a scalar value against its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoundState {
    Inactive,
    ActiveLower,
    ActiveUpper,
    Violated,
}

fn classify(value: f64, lower: f64, upper: f64) -> BoundState {
    if lower == upper && value == lower {
        // Fixed bound; not a reportable activation.
        return BoundState::Inactive;
    }
    if value < lower || value > upper {
        return BoundState::Violated;
    }
    if value == lower {
        return BoundState::ActiveLower;
    }
    if value == upper {
        return BoundState::ActiveUpper;
    }
    BoundState::Inactive
}

fn marker(state: BoundState) -> &'static str {
    match state {
        BoundState::Inactive => " ",
        BoundState::ActiveLower => "L",
        BoundState::ActiveUpper => "U",
        BoundState::Violated => "*",
    }
}

fn row_norm<S: Scalar>(row: ndarray::ArrayView1<S>) -> f64 {
    row.iter().map(|v| v.to_f64().powi(2)).sum::<f64>().sqrt()
}

/// Reconstruct `x_nlp` from `guess` (without resampling — the caller is
/// expected to have already matched the mesh size), evaluate the
/// transcription's constraints against it, and print:
///  - a state/control value table annotated with bound activation markers
///  - per-state defect-row Euclidean norms
///  - per-path-constraint-row Euclidean norms and a mesh x path-constraint
///    value table
pub fn print_constraint_values<S: Scalar, O: Ocp<S>>(
    transcription: &Transcription<S, O>,
    guess: &Iterate,
    out: &mut dyn Write,
) -> Result<()> {
    let num_states = transcription.num_states();
    let num_controls = transcription.num_controls();
    let num_path_constraints = transcription.num_path_constraints();
    let num_mesh_points = transcription.num_mesh_points();
    let num_defects = transcription.num_defects();

    let x_f64 = construct_iterate(guess, num_states, num_controls, num_mesh_points, false)?;
    let x_nlp: Vec<S> = x_f64.iter().map(|&v| S::from(v)).collect();

    let mut c = vec![S::default(); transcription.num_constraints()];
    transcription.calc_constraints(&x_nlp, &mut c);

    let (var_lo, var_hi) = transcription.variable_bounds();

    if transcription.verbose() {
        eprintln!(
            "print_constraint_values: nx={num_states}, nu={num_controls}, n_g={num_path_constraints}, mesh_points={num_mesh_points}"
        );
    }

    if let Some(goal_name) = transcription.metadata().goal_name {
        writeln!(out, "goal: {goal_name}")?;
    }
    writeln!(out, "time: t0={:.6} tf={:.6}", x_f64[0], x_f64[1])?;

    let state_names = guess.state_names.clone();
    let control_names = guess.control_names.clone();

    print_variable_table(
        out,
        "state",
        &state_names,
        &views::states_view(x_f64.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
        &views::states_view(var_lo.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
        &views::states_view(var_hi.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
    )?;
    print_variable_table(
        out,
        "control",
        &control_names,
        &views::controls_view(x_f64.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
        &views::controls_view(var_lo.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
        &views::controls_view(var_hi.as_slice().unwrap(), num_states, num_controls, num_mesh_points),
    )?;

    writeln!(out)?;
    writeln!(out, "defect norms (nx={num_states}, intervals={num_defects}):")?;
    let defects = views::defects_view(&c, num_states, num_defects);
    for (row, name) in state_names.iter().enumerate() {
        writeln!(out, "  {name}: {:.6e}", row_norm(defects.row(row)))?;
    }

    if num_path_constraints > 0 {
        writeln!(out)?;
        writeln!(out, "path constraint norms (n_g={num_path_constraints}):")?;
        let path = views::path_constraints_view(&c, num_states, num_defects, num_path_constraints, num_mesh_points);
        let path_names = transcription.path_constraint_names();
        for (row, name) in path_names.iter().enumerate() {
            writeln!(out, "  {name}: {:.6e}", row_norm(path.row(row)))?;
        }

        writeln!(out)?;
        writeln!(out, "path constraint values by mesh point:")?;
        for k in 0..num_mesh_points {
            write!(out, "  k={k:3}")?;
            for row in 0..num_path_constraints {
                write!(out, " {:>12.6e}", path[(row, k)].to_f64())?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

fn print_variable_table(
    out: &mut dyn Write,
    label: &str,
    names: &[String],
    values: &ndarray::ArrayView2<f64>,
    lower: &ndarray::ArrayView2<f64>,
    upper: &ndarray::ArrayView2<f64>,
) -> io::Result<()> {
    let num_rows = values.nrows();
    let num_cols = values.ncols();
    writeln!(out, "{label} values (L=active lower, U=active upper, *=violated):")?;
    for row in 0..num_rows {
        let name = names.get(row).map(String::as_str).unwrap_or("?");
        write!(out, "  {name:>10}:")?;
        for k in 0..num_cols {
            let v = values[(row, k)];
            let state = classify(v, lower[(row, k)], upper[(row, k)]);
            write!(out, " {:>10.4}{}", v, marker(state))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
