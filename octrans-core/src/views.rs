//! Non-owning strided views over the flat NLP vector and constraint vector.
//!
//! The flat variable vector is laid out `[t0, tf, x^(0), u^(0), x^(1),
//! u^(1), ..., x^(N-1), u^(N-1)]`; state/control matrices are therefore
//! strided views (row count `nx`/`nu`, column count `N`, column stride
//! `nx+nu`) rather than contiguous blocks. The constraint vector's defects
//! and path-constraint blocks, by contrast, are each contiguous
//! column-major blocks, so plain Fortran-order views suffice there.
//!
//! These views must not outlive the flat vector they borrow from, and
//! never copy a mesh-point column — this is the hot path evaluated on
//! every NLP iteration.

use ndarray::{ArrayView2, ArrayViewMut2, ShapeBuilder};

/// Number of scalar time variables at the front of the flat vector.
pub const NUM_TIME_VARIABLES: usize = 2;

/// Non-owning view of the states trajectory `x^(0..N-1)` inside `x_nlp`.
pub fn states_view<S: Copy>(
    x_nlp: &[S],
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
) -> ArrayView2<'_, S> {
    let stride = num_states + num_controls;
    let slice = &x_nlp[NUM_TIME_VARIABLES..];
    ArrayView2::from_shape((num_states, num_mesh_points).strides((1, stride)), slice)
        .expect("states view shape must fit x_nlp")
}

/// Non-owning view of the controls trajectory `u^(0..N-1)` inside `x_nlp`.
pub fn controls_view<S: Copy>(
    x_nlp: &[S],
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
) -> ArrayView2<'_, S> {
    let stride = num_states + num_controls;
    let slice = &x_nlp[NUM_TIME_VARIABLES + num_states..];
    ArrayView2::from_shape((num_controls, num_mesh_points).strides((1, stride)), slice)
        .expect("controls view shape must fit x_nlp")
}

/// Mutable view of the states trajectory, used by `construct_iterate` to
/// write a candidate trajectory into a freshly-allocated flat vector.
pub fn states_view_mut<S: Copy>(
    x_nlp: &mut [S],
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
) -> ArrayViewMut2<'_, S> {
    let stride = num_states + num_controls;
    let slice = &mut x_nlp[NUM_TIME_VARIABLES..];
    ArrayViewMut2::from_shape((num_states, num_mesh_points).strides((1, stride)), slice)
        .expect("states view shape must fit x_nlp")
}

/// Mutable view of the controls trajectory, used by `construct_iterate`.
pub fn controls_view_mut<S: Copy>(
    x_nlp: &mut [S],
    num_states: usize,
    num_controls: usize,
    num_mesh_points: usize,
) -> ArrayViewMut2<'_, S> {
    let stride = num_states + num_controls;
    let slice = &mut x_nlp[NUM_TIME_VARIABLES + num_states..];
    ArrayViewMut2::from_shape((num_controls, num_mesh_points).strides((1, stride)), slice)
        .expect("controls view shape must fit x_nlp")
}

/// Mutable view of the `nx x (N-1)` defects block at the front of the
/// constraint vector, column-major by mesh interval.
pub fn defects_view_mut<S: Copy>(
    c: &mut [S],
    num_states: usize,
    num_defects: usize,
) -> ArrayViewMut2<'_, S> {
    let slice = &mut c[0..num_states * num_defects];
    ArrayViewMut2::from_shape((num_states, num_defects).f(), slice)
        .expect("defects view shape must fit constraint vector")
}

/// Mutable view of the `n_g x N` path-constraints block, column-major by
/// mesh point, positioned after the defects block.
pub fn path_constraints_view_mut<S: Copy>(
    c: &mut [S],
    num_states: usize,
    num_defects: usize,
    num_path_constraints: usize,
    num_mesh_points: usize,
) -> ArrayViewMut2<'_, S> {
    if num_path_constraints == 0 {
        return ArrayViewMut2::from_shape((0, num_mesh_points).f(), &mut []).unwrap();
    }
    let start = num_states * num_defects;
    let slice = &mut c[start..start + num_path_constraints * num_mesh_points];
    ArrayViewMut2::from_shape((num_path_constraints, num_mesh_points).f(), slice)
        .expect("path constraints view shape must fit constraint vector")
}

/// Read-only view of the `nx x (N-1)` defects block, used by diagnostics.
pub fn defects_view<S: Copy>(c: &[S], num_states: usize, num_defects: usize) -> ArrayView2<'_, S> {
    let slice = &c[0..num_states * num_defects];
    ArrayView2::from_shape((num_states, num_defects).f(), slice)
        .expect("defects view shape must fit constraint vector")
}

/// Read-only view of the `n_g x N` path-constraints block, used by
/// diagnostics.
pub fn path_constraints_view<S: Copy>(
    c: &[S],
    num_states: usize,
    num_defects: usize,
    num_path_constraints: usize,
    num_mesh_points: usize,
) -> ArrayView2<'_, S> {
    if num_path_constraints == 0 {
        return ArrayView2::from_shape((0, num_mesh_points), &[]).unwrap();
    }
    let start = num_states * num_defects;
    let slice = &c[start..start + num_path_constraints * num_mesh_points];
    ArrayView2::from_shape((num_path_constraints, num_mesh_points).f(), slice)
        .expect("path constraints view shape must fit constraint vector")
}
