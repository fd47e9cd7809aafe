//! Normalized mesh and trapezoidal quadrature weights.
//!
//! Mesh points are fixed at configuration time: `N >= 2`, uniformly spaced
//! on `[0, 1]`. The quadrature formula below is written for a general
//! non-uniform mesh (interval lengths `h_i`) even though the current
//! contract only ever builds a uniform mesh, so that a future mesh
//! refinement pass can reuse this code unchanged.

use ndarray::Array1;

/// Build the normalized mesh `τ_0 = 0, ..., τ_{N-1} = 1`, uniformly spaced.
pub fn uniform_mesh(num_mesh_points: usize) -> Array1<f64> {
    debug_assert!(num_mesh_points >= 2);
    Array1::linspace(0.0, 1.0, num_mesh_points)
}

/// Trapezoidal quadrature weights `w` for a (possibly non-uniform) mesh
/// `τ`, per Betts (2010) eq. 4.195:
/// `w = 0.5 * [h_0, h_0 + h_1, h_1 + h_2, ..., h_{N-2} + h_{N-1}, h_{N-1}]`
/// where `h_i = τ_{i+1} - τ_i`. These are fractions of the normalized
/// interval and sum to 1.
pub fn quadrature_weights(mesh: &Array1<f64>) -> Array1<f64> {
    let n = mesh.len();
    debug_assert!(n >= 2);
    let intervals: Array1<f64> = (0..n - 1).map(|i| mesh[i + 1] - mesh[i]).collect();

    let mut w = Array1::<f64>::zeros(n);
    for i in 0..n - 1 {
        w[i] += 0.5 * intervals[i];
        w[i + 1] += 0.5 * intervals[i];
    }
    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_mesh_endpoints() {
        let mesh = uniform_mesh(5);
        assert_eq!(mesh[0], 0.0);
        assert_eq!(mesh[4], 1.0);
        assert_eq!(mesh.len(), 5);
    }

    #[test]
    fn quadrature_weights_sum_to_one() {
        for n in 2..20 {
            let mesh = uniform_mesh(n);
            let w = quadrature_weights(&mesh);
            let sum: f64 = w.sum();
            assert!((sum - 1.0).abs() < 1e-12, "n={n} sum={sum}");
        }
    }

    #[test]
    fn quadrature_weights_endpoint_and_interior_values() {
        let n = 7;
        let mesh = uniform_mesh(n);
        let w = quadrature_weights(&mesh);
        let h = 1.0 / (n as f64 - 1.0);
        assert!((w[0] - h / 2.0).abs() < 1e-12);
        assert!((w[n - 1] - h / 2.0).abs() < 1e-12);
        for &wk in w.iter().take(n - 1).skip(1) {
            assert!((wk - h).abs() < 1e-12);
        }
    }
}
