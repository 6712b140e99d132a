use ndarray::{Array, Ix1};

pub mod legendre_points;
pub mod lobatto_points;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuadratureKind {
    GaussLegendre,
    GaussLobatto,
}

/// One-dimensional node set on [-1, 1], sorted ascending.
///
/// Solution points use Gauss-Legendre nodes; flux points use Gauss-Lobatto nodes
/// one order higher. Both are plain values: build one where it is needed and drop it
/// afterwards.
#[derive(Clone, Debug)]
pub struct GaussPoints1d {
    pub kind: QuadratureKind,
    pub points: Array<f64, Ix1>,
    pub weights: Array<f64, Ix1>,
}
impl GaussPoints1d {
    /// `order` Gauss-Legendre points.
    pub fn legendre(order: usize) -> Self {
        assert!(order > 0, "polynomial order must be at least 1");
        let (points, weights) = legendre_points::get_legendre_points_interval(order);
        Self {
            kind: QuadratureKind::GaussLegendre,
            points,
            weights,
        }
    }
    /// `order + 1` Gauss-Lobatto points, endpoints included.
    pub fn lobatto(order: usize) -> Self {
        assert!(order > 0, "polynomial order must be at least 1");
        let (points, weights) = lobatto_points::get_lobatto_points_interval(order + 1);
        Self {
            kind: QuadratureKind::GaussLobatto,
            points,
            weights,
        }
    }
    pub fn new(kind: QuadratureKind, order: usize) -> Self {
        match kind {
            QuadratureKind::GaussLegendre => Self::legendre(order),
            QuadratureKind::GaussLobatto => Self::lobatto(order),
        }
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn nodes(&self) -> Vec<f64> {
        self.points.to_vec()
    }
}
