use ndarray::{Array1, Array2, ArrayView1};

use crate::disc::gauss_points::GaussPoints1d;

// Coordinates closer than this to a node are treated as that node.
const NODE_TOLERANCE: f64 = 1e-14;

/// Lagrange cardinal polynomials over a one-dimensional node set.
#[derive(Clone, Debug)]
pub struct LagrangeBasis1D {
    pub nodes: Array1<f64>,
}

impl LagrangeBasis1D {
    pub fn new(nodes: ArrayView1<f64>) -> LagrangeBasis1D {
        assert!(!nodes.is_empty(), "Lagrange basis needs at least one node");
        LagrangeBasis1D {
            nodes: nodes.to_owned(),
        }
    }
    pub fn from_gauss_points(gauss_points: &GaussPoints1d) -> LagrangeBasis1D {
        Self::new(gauss_points.points.view())
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluates the i-th basis function at point x
    ///
    /// # Arguments
    /// * `i` - Index of the basis function to evaluate
    /// * `x` - Point at which to evaluate the basis function
    ///
    /// # Returns
    /// Value of the i-th basis function at point x, exactly 1 or 0 when x is a node
    pub fn evaluate_basis_at(&self, i: usize, x: f64) -> f64 {
        let n = self.nodes.len();
        assert!(i < n, "basis index {i} out of range for {n} nodes");

        for j in 0..n {
            if (x - self.nodes[j]).abs() < NODE_TOLERANCE {
                return if j == i { 1.0 } else { 0.0 };
            }
        }

        let x_i = self.nodes[i];
        let mut result = 1.0;
        for j in 0..n {
            if j != i {
                let x_j = self.nodes[j];
                result *= (x - x_j) / (x_i - x_j);
            }
        }
        result
    }

    /// Evaluates the derivative of the i-th basis function at point x
    pub fn evaluate_derivative_at(&self, i: usize, x: f64) -> f64 {
        let n = self.nodes.len();
        assert!(i < n, "basis index {i} out of range for {n} nodes");
        let x_i = self.nodes[i];
        let mut derivative = 0.0;
        for k in 0..n {
            if k != i {
                let mut product = 1.0;
                for m in 0..n {
                    if m != i && m != k {
                        product *= (x - self.nodes[m]) / (x_i - self.nodes[m]);
                    }
                }
                derivative += product / (x_i - self.nodes[k]);
            }
        }
        derivative
    }

    pub fn evaluate_all_basis_at(&self, x: f64) -> Array1<f64> {
        Array1::from_shape_fn(self.nodes.len(), |i| self.evaluate_basis_at(i, x))
    }

    /// Evaluates the interpolant with nodal values `coefficients` at point x
    pub fn evaluate_function_at(&self, coefficients: &[f64], x: f64) -> f64 {
        assert_eq!(
            coefficients.len(),
            self.nodes.len(),
            "Coefficient vector length must match basis size"
        );
        coefficients
            .iter()
            .enumerate()
            .map(|(i, c)| c * self.evaluate_basis_at(i, x))
            .sum()
    }

    /// (ntargets, nbasis) matrix of basis values at `targets`.
    pub fn interpolation_matrix(&self, targets: ArrayView1<f64>) -> Array2<f64> {
        Array2::from_shape_fn((targets.len(), self.nodes.len()), |(t, i)| {
            self.evaluate_basis_at(i, targets[t])
        })
    }

    /// (ntargets, nbasis) matrix of basis derivatives at `targets`.
    pub fn differentiation_matrix(&self, targets: ArrayView1<f64>) -> Array2<f64> {
        Array2::from_shape_fn((targets.len(), self.nodes.len()), |(t, i)| {
            self.evaluate_derivative_at(i, targets[t])
        })
    }
}
