//! In-memory representation of a candidate trajectory, independent of the
//! flat NLP layout, plus piecewise-linear interpolation onto a new number
//! of mesh points.

use ndarray::{Array1, Array2};

use crate::error::{Result, TranscriptionError};
use crate::views;

/// A candidate trajectory: a time row, a states matrix (`nx x T`), a
/// controls matrix (`nu x T`), and the corresponding name lists. `T` need
/// not equal the transcription's mesh size `N` prior to interpolation.
#[derive(Debug, Clone)]
pub struct Iterate {
    pub time: Array1<f64>,
    pub states: Array2<f64>,
    pub controls: Array2<f64>,
    pub state_names: Vec<String>,
    pub control_names: Vec<String>,
}

impl Iterate {
    /// Number of columns (time samples) currently held.
    pub fn num_columns(&self) -> usize {
        self.time.len()
    }

    /// Resample onto `n` points, linearly spaced between the current first
    /// and last time values. Each state/control row is resampled by
    /// piecewise-linear interpolation; queries land within
    /// `[time.first(), time.last()]` by construction since the new grid is
    /// linearly spaced between those same endpoints, but the row
    /// interpolation helper itself clamps to the nearest endpoint value for
    /// any query that falls (by floating point slop) just outside the
    /// source range, rather than producing NaN.
    pub fn interpolate(&self, n: usize) -> Iterate {
        debug_assert!(n >= 2);
        debug_assert!(self.num_columns() >= 2);

        let t0 = self.time[0];
        let t1 = self.time[self.time.len() - 1];
        let new_time = Array1::linspace(t0, t1, n);

        let states = interpolate_rows(&self.time, &self.states, &new_time);
        let controls = interpolate_rows(&self.time, &self.controls, &new_time);

        Iterate {
            time: new_time,
            states,
            controls,
            state_names: self.state_names.clone(),
            control_names: self.control_names.clone(),
        }
    }
}

/// Build a flat NLP variable vector `[t0, tf, x^(0), u^(0), ..., x^(N-1),
/// u^(N-1)]` from a candidate trajectory.
///
/// Row counts (`nx`, `nu`) must match exactly or this is
/// [`TranscriptionError::DimensionMismatch`]. If the trajectory's column count
/// does not equal `num_mesh_points`, the trajectory is resampled onto the
/// mesh when `interpolate` is set; otherwise the mismatch is reported as
/// [`TranscriptionError::DimensionMismatch`] rather than silently truncated
/// or padded.
pub fn construct_iterate(
    traj: &Iterate,
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
    interpolate: bool,
) -> Result<Array1<f64>> {
    if traj.states.nrows() != num_states {
        return Err(TranscriptionError::DimensionMismatch(format!(
            "trajectory has {} state rows, expected {num_states}",
            traj.states.nrows()
        )));
    }
    if traj.controls.nrows() != num_controls {
        return Err(TranscriptionError::DimensionMismatch(format!(
            "trajectory has {} control rows, expected {num_controls}",
            traj.controls.nrows()
        )));
    }

    let working: Iterate = if traj.num_columns() != num_mesh_points {
        if interpolate {
            traj.interpolate(num_mesh_points)
        } else {
            return Err(TranscriptionError::DimensionMismatch(format!(
                "trajectory has {} columns, expected {num_mesh_points} and interpolation is disabled",
                traj.num_columns()
            )));
        }
    } else {
        traj.clone()
    };

    let num_vars = 2 + num_mesh_points * (num_states + num_controls);
    let mut x_nlp = Array1::<f64>::zeros(num_vars);
    x_nlp[0] = working.time[0];
    x_nlp[1] = working.time[working.time.len() - 1];

    {
        let slice = x_nlp.as_slice_mut().expect("flat vector is contiguous");
        let mut states_dst = views::states_view_mut(slice, num_states, num_controls, num_mesh_points);
        states_dst.assign(&working.states);
    }
    {
        let slice = x_nlp.as_slice_mut().expect("flat vector is contiguous");
        let mut controls_dst = views::controls_view_mut(slice, num_states, num_controls, num_mesh_points);
        controls_dst.assign(&working.controls);
    }

    Ok(x_nlp)
}

/// Recover an [`Iterate`] from a flat NLP variable vector, attaching the
/// OCP's state/control names and a uniformly-spaced time row between `t0`
/// and `tf`.
pub fn deconstruct_iterate(
    x_nlp: &[f64],
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
    state_names: Vec<String>,
    control_names: Vec<String>,
) -> Iterate {
    let t0 = x_nlp[0];
    let tf = x_nlp[1];
    let time = Array1::linspace(t0, tf, num_mesh_points);
    let states = views::states_view(x_nlp, num_states, num_controls, num_mesh_points).to_owned();
    let controls = views::controls_view(x_nlp, num_states, num_controls, num_mesh_points).to_owned();

    Iterate {
        time,
        states,
        controls,
        state_names,
        control_names,
    }
}

/// Piecewise-linear interpolation of each row of `values` (columns indexed
/// by `time`) onto `new_time`. Queries outside `[time[0], time[last]]` clamp
/// to the nearest endpoint value.
fn interpolate_rows(time: &Array1<f64>, values: &Array2<f64>, new_time: &Array1<f64>) -> Array2<f64> {
    let nrows = values.nrows();
    let mut out = Array2::<f64>::zeros((nrows, new_time.len()));
    for row in 0..nrows {
        let src = values.row(row);
        for (j, &t) in new_time.iter().enumerate() {
            out[(row, j)] = interpolate_scalar(time, &src, t);
        }
    }
    out
}

fn interpolate_scalar(time: &Array1<f64>, values: &ndarray::ArrayView1<f64>, t: f64) -> f64 {
    let n = time.len();
    if t <= time[0] {
        return values[0];
    }
    if t >= time[n - 1] {
        return values[n - 1];
    }
    // Find the bracketing interval [time[i], time[i+1]].
    let mut i = 0;
    while i + 1 < n && time[i + 1] < t {
        i += 1;
    }
    let (t0, t1) = (time[i], time[i + 1]);
    let (v0, v1) = (values[i], values[i + 1]);
    if (t1 - t0).abs() < f64::EPSILON {
        return v0;
    }
    let frac = (t - t0) / (t1 - t0);
    v0 + frac * (v1 - v0)
}
