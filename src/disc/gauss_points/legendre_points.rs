use nalgebra::{DMatrix, SymmetricEigen};
use ndarray::{Array, Ix1, array};
use statrs::function::gamma::gamma;

pub fn get_legendre_points_interval(points_num: usize) -> (Array<f64, Ix1>, Array<f64, Ix1>) {
    jacobi_gauss_quadrature(0.0, 0.0, points_num)
}

/// Gauss-Jacobi nodes and weights for the weight (1 - x)^alpha (1 + x)^beta, from the
/// eigen-decomposition of the symmetric Jacobi matrix (Golub-Welsch).
pub fn jacobi_gauss_quadrature(
    alpha: f64,
    beta: f64,
    points_num: usize,
) -> (Array<f64, Ix1>, Array<f64, Ix1>) {
    assert!(points_num > 0, "Number of points must be at least 1");
    let mu_0 = 2.0_f64.powf(alpha + beta + 1.0) * gamma(alpha + 1.0) * gamma(beta + 1.0)
        / gamma(alpha + beta + 2.0);
    if points_num == 1 {
        let x0 = (beta - alpha) / (alpha + beta + 2.0);
        return (array![x0], array![mu_0]);
    }
    let dim = points_num;
    let h1: Vec<f64> = (0..dim).map(|k| 2.0 * k as f64 + alpha + beta).collect();
    let mut j = DMatrix::<f64>::zeros(dim, dim);
    for k in 0..dim {
        let denominator = h1[k] * (h1[k] + 2.0);
        j[(k, k)] = if denominator.abs() < 10.0 * f64::EPSILON {
            0.0
        } else {
            -(alpha.powi(2) - beta.powi(2)) / denominator
        };
    }
    // off-diagonal
    for k in 0..(dim - 1) {
        let l = k as f64 + 1.0;
        let numerator = l * (l + alpha + beta) * (l + alpha) * (l + beta);
        let denominator = (h1[k] + 1.0) * (h1[k] + 3.0);
        let off_diag_val = (2.0 / (h1[k] + 2.0)) * (numerator / denominator).sqrt();
        j[(k, k + 1)] = off_diag_val;
        j[(k + 1, k)] = off_diag_val;
    }
    let eigen = SymmetricEigen::new(j);
    let mut pairs: Vec<(f64, f64)> = (0..dim)
        .map(|i| {
            let v0 = eigen.eigenvectors[(0, i)];
            (eigen.eigenvalues[i], v0 * v0 * mu_0)
        })
        .collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut points: Array<f64, Ix1> = pairs.iter().map(|p| p.0).collect();
    let mut weights: Array<f64, Ix1> = pairs.iter().map(|p| p.1).collect();
    if (alpha - beta).abs() < f64::EPSILON {
        symmetrize(&mut points, &mut weights);
    }
    (points, weights)
}

/// Legendre polynomial P_n(x) by the three-term recurrence.
pub fn legendre_polynomial(n: usize, x: f64) -> f64 {
    match n {
        0 => 1.0,
        1 => x,
        _ => {
            let (mut p_prev, mut p) = (1.0, x);
            for k in 1..n {
                let kf = k as f64;
                let p_next = ((2.0 * kf + 1.0) * x * p - kf * p_prev) / (kf + 1.0);
                p_prev = p;
                p = p_next;
            }
            p
        }
    }
}

// Symmetric weight functions give nodes mirrored about 0; remove the round-off asymmetry.
fn symmetrize(points: &mut Array<f64, Ix1>, weights: &mut Array<f64, Ix1>) {
    let n = points.len();
    for i in 0..n / 2 {
        let x = 0.5 * (points[n - 1 - i] - points[i]);
        let w = 0.5 * (weights[i] + weights[n - 1 - i]);
        points[i] = -x;
        points[n - 1 - i] = x;
        weights[i] = w;
        weights[n - 1 - i] = w;
    }
    if n % 2 == 1 {
        points[n / 2] = 0.0;
    }
}
