use ndarray::{Array, Ix1, array};

use super::legendre_points::{jacobi_gauss_quadrature, legendre_polynomial};

pub fn get_lobatto_points_interval(points_num: usize) -> (Array<f64, Ix1>, Array<f64, Ix1>) {
    match points_num {
        0 | 1 => panic!("Gauss-Lobatto rule needs at least 2 points, got {points_num}"),
        2 => (array![-1.0, 1.0], array![1.0, 1.0]),
        _ => {
            // interior nodes are the roots of P'_N, i.e. the Gauss-Jacobi(1, 1) nodes
            let n = points_num - 1;
            let (x_interior, _) = jacobi_gauss_quadrature(1.0, 1.0, points_num - 2);
            let mut points = Array::zeros(points_num);
            points[0] = -1.0;
            points[n] = 1.0;
            for (i, x) in x_interior.iter().enumerate() {
                points[i + 1] = *x;
            }
            let denom = (n * (n + 1)) as f64;
            let weights = points.mapv(|x: f64| {
                let p_n = legendre_polynomial(n, x);
                2.0 / (denom * p_n * p_n)
            });
            (points, weights)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tabulated_four_points() {
        let (points, weights) = get_lobatto_points_interval(4);
        let expected_p = [-1.0, -1.0 / 5.0_f64.sqrt(), 1.0 / 5.0_f64.sqrt(), 1.0];
        let expected_w = [1.0 / 6.0, 5.0 / 6.0, 5.0 / 6.0, 1.0 / 6.0];
        for i in 0..4 {
            assert_relative_eq!(points[i], expected_p[i], epsilon = 1e-14);
            assert_relative_eq!(weights[i], expected_w[i], epsilon = 1e-13);
        }
    }

    #[test]
    fn test_tabulated_five_points() {
        let (points, weights) = get_lobatto_points_interval(5);
        let a = (3.0 / 7.0_f64).sqrt();
        let expected_p = [-1.0, -a, 0.0, a, 1.0];
        let expected_w = [1.0 / 10.0, 49.0 / 90.0, 32.0 / 45.0, 49.0 / 90.0, 1.0 / 10.0];
        for i in 0..5 {
            assert_relative_eq!(points[i], expected_p[i], epsilon = 1e-14);
            assert_relative_eq!(weights[i], expected_w[i], epsilon = 1e-13);
        }
    }

    #[test]
    fn test_weights_sum() {
        for n in 2..=9 {
            let (_, weights) = get_lobatto_points_interval(n);
            assert_relative_eq!(weights.sum(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "at least 2 points")]
    fn test_single_point_rejected() {
        get_lobatto_points_interval(1);
    }
}
