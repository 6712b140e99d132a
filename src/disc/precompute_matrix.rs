use log::debug;
use ndarray::Array2;

use crate::disc::basis::lagrange1d::LagrangeBasis1D;
use crate::disc::reference_element::ReferenceElementNodes;
use crate::disc::state_vector::StateVector;

/// Dense reference-element operators, built once per (order, dimension).
///
/// `sp2fp[d]` has shape (n_fp, n_sp): row f holds `L_i(ξ_f) L_j(η_f)` over the
/// Gauss-Legendre basis for every solution point (i, j).
///
/// `fp2sp[d]` has shape (n_sp, n_fp): row s holds the derivative along `d` of the
/// flux-point interpolant, Gauss-Lobatto derivative along `d` times Gauss-Legendre
/// value across `d`.
#[derive(Clone, Debug)]
pub struct SdOperators {
    pub sp2fp: Vec<Array2<f64>>,
    pub fp2sp: Vec<Array2<f64>>,
}

impl SdOperators {
    pub fn new(nodes: &ReferenceElementNodes) -> Self {
        let gl_basis = LagrangeBasis1D::from_gauss_points(&nodes.solution_points_1d);
        let gll_basis = LagrangeBasis1D::from_gauss_points(&nodes.flux_points_1d);
        let nsp = nodes.num_solution_points();

        let mut sp2fp = Vec::with_capacity(nodes.dimension);
        let mut fp2sp = Vec::with_capacity(nodes.dimension);
        for direction in 0..nodes.dimension {
            let nfp = nodes.num_flux_points(direction);
            let interp = Array2::from_shape_fn((nfp, nsp), |(f, s)| {
                let node = &nodes.fnodes[direction][f];
                let (i, j) = nodes.solution_point_indices(s);
                gl_basis.evaluate_basis_at(i, node.xi) * gl_basis.evaluate_basis_at(j, node.eta)
            });
            let deriv = Array2::from_shape_fn((nsp, nfp), |(s, f)| {
                let node = &nodes.snodes[s];
                let (i, j) = nodes.flux_point_indices(direction, f);
                match direction {
                    0 => {
                        gll_basis.evaluate_derivative_at(i, node.xi)
                            * gl_basis.evaluate_basis_at(j, node.eta)
                    }
                    _ => {
                        gl_basis.evaluate_basis_at(i, node.xi)
                            * gll_basis.evaluate_derivative_at(j, node.eta)
                    }
                }
            });
            sp2fp.push(interp);
            fp2sp.push(deriv);
        }
        debug!(
            "precomputed sp->fp and fp->sp operators for {} directions",
            nodes.dimension
        );
        Self { sp2fp, fp2sp }
    }
}

/// `output[r] = Σ_c matrix[(r, c)] * input[c]`, overwriting `output`.
///
/// Lengths must already match the matrix shape and `output` entries must have the
/// width of `input` entries.
pub fn apply_operator(matrix: &Array2<f64>, input: &[StateVector], output: &mut [StateVector]) {
    assert_eq!(matrix.ncols(), input.len(), "operator input length mismatch");
    assert_eq!(matrix.nrows(), output.len(), "operator output length mismatch");
    for (row, out) in matrix.rows().into_iter().zip(output.iter_mut()) {
        out.fill(0.0);
        for (weight, q) in row.iter().zip(input.iter()) {
            out.scaled_add(*weight, q);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operator_shapes() {
        let nodes = ReferenceElementNodes::new(3, 2).unwrap();
        let ops = SdOperators::new(&nodes);
        for direction in 0..2 {
            assert_eq!(ops.sp2fp[direction].shape(), &[12, 9]);
            assert_eq!(ops.fp2sp[direction].shape(), &[9, 12]);
        }
    }

    #[test]
    fn test_interpolation_rows_sum_to_one() {
        let nodes = ReferenceElementNodes::new(4, 2).unwrap();
        let ops = SdOperators::new(&nodes);
        for direction in 0..2 {
            for row in ops.sp2fp[direction].rows() {
                assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-12);
            }
            for row in ops.fp2sp[direction].rows() {
                assert_relative_eq!(row.sum(), 0.0, epsilon = 1e-11);
            }
        }
    }

    #[test]
    fn test_interpolation_is_exact_for_tensor_polynomials() {
        // q(ξ, η) = ξ^2 η - 3η + 1 lies in the order-3 tensor space
        let nodes = ReferenceElementNodes::new(3, 2).unwrap();
        let ops = SdOperators::new(&nodes);
        let q = |x: f64, y: f64| x * x * y - 3.0 * y + 1.0;
        let qsp: Vec<StateVector> = nodes
            .snodes
            .iter()
            .map(|n| StateVector::from_elem(4, q(n.xi, n.eta)))
            .collect();
        for direction in 0..2 {
            let mut qfp = vec![StateVector::zeros(4); nodes.num_flux_points(direction)];
            apply_operator(&ops.sp2fp[direction], &qsp, &mut qfp);
            for (node, value) in nodes.fnodes[direction].iter().zip(qfp.iter()) {
                assert_relative_eq!(value[0], q(node.xi, node.eta), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_derivative_is_exact_along_each_direction() {
        // F(ξ, η) = ξ^3 + ξ η^2 differentiated along ξ on direction-0 flux points,
        // G(ξ, η) = η^3 - 2 ξ η along η on direction-1 flux points
        let nodes = ReferenceElementNodes::new(3, 2).unwrap();
        let ops = SdOperators::new(&nodes);
        let f = |x: f64, y: f64| x.powi(3) + x * y * y;
        let g = |x: f64, y: f64| y.powi(3) - 2.0 * x * y;
        let ffp: Vec<StateVector> = nodes.fnodes[0]
            .iter()
            .map(|n| StateVector::from_elem(4, f(n.xi, n.eta)))
            .collect();
        let gfp: Vec<StateVector> = nodes.fnodes[1]
            .iter()
            .map(|n| StateVector::from_elem(4, g(n.xi, n.eta)))
            .collect();
        let mut dfsp = vec![StateVector::zeros(4); nodes.num_solution_points()];
        let mut dgsp = vec![StateVector::zeros(4); nodes.num_solution_points()];
        apply_operator(&ops.fp2sp[0], &ffp, &mut dfsp);
        apply_operator(&ops.fp2sp[1], &gfp, &mut dgsp);
        for (s, node) in nodes.snodes.iter().enumerate() {
            let (x, y) = (node.xi, node.eta);
            assert_relative_eq!(dfsp[s][0], 3.0 * x * x + y * y, epsilon = 1e-11);
            assert_relative_eq!(dgsp[s][2], 3.0 * y * y - 2.0 * x, epsilon = 1e-11);
        }
    }

    #[test]
    fn test_apply_overwrites_previous_output() {
        let nodes = ReferenceElementNodes::new(2, 2).unwrap();
        let ops = SdOperators::new(&nodes);
        let qsp = vec![StateVector::from_elem(4, 2.0); 4];
        let mut qfp = vec![StateVector::from_elem(4, 100.0); 6];
        apply_operator(&ops.sp2fp[0], &qsp, &mut qfp);
        for q in &qfp {
            assert_relative_eq!(q[3], 2.0, epsilon = 1e-13);
        }
    }
}
