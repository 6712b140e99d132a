use log::debug;

use crate::disc::gauss_points::GaussPoints1d;
use crate::error::{Result, SdError};

/// Parametric coordinate inside the reference square [-1, 1]^2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub xi: f64,
    pub eta: f64,
}
impl Node {
    pub fn coord(&self, direction: usize) -> f64 {
        match direction {
            0 => self.xi,
            1 => self.eta,
            _ => panic!("Invalid direction {direction} for a 2-D node"),
        }
    }
}

/// Flat <-> tensor index mapping for a two-level nested loop, `flat = outer * inner_len + inner`.
///
/// Node generation and both interpolation steps go through this one mapping, so the
/// flat ordering of stored points and the index recovery can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TensorIndex {
    pub outer_len: usize,
    pub inner_len: usize,
}
impl TensorIndex {
    pub fn new(outer_len: usize, inner_len: usize) -> Self {
        Self {
            outer_len,
            inner_len,
        }
    }
    pub fn len(&self) -> usize {
        self.outer_len * self.inner_len
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn flatten(&self, outer: usize, inner: usize) -> usize {
        debug_assert!(outer < self.outer_len && inner < self.inner_len);
        outer * self.inner_len + inner
    }
    pub fn split(&self, flat: usize) -> (usize, usize) {
        debug_assert!(flat < self.len());
        (flat / self.inner_len, flat % self.inner_len)
    }
    /// (outer, inner) pairs in flat order.
    pub fn iter(self) -> impl Iterator<Item = (usize, usize)> {
        let inner_len = self.inner_len;
        (0..self.outer_len).flat_map(move |outer| (0..inner_len).map(move |inner| (outer, inner)))
    }
}

/// Solution and flux point layout of the reference quadrilateral.
///
/// Solution points: outer loop over ξ, inner loop over η, both on Gauss-Legendre nodes.
///
/// ```text
///  ________________
/// |                |
/// |  (1)      (3)  |
/// |                |
/// |  (0)      (2)  |
/// |________________|
/// ```
///
/// Flux points of direction `d`: outer loop over the Gauss-Legendre node across `d`,
/// inner loop over the Gauss-Lobatto node along `d`. Every flux line is therefore a
/// contiguous run of `order + 1` points.
///
/// ```text
///  direction 0           direction 1
///  ________________      __(2)_____(5)___
/// |                |    |                |
/// (3)    (4)     (5)    |  (1)     (4)   |
/// |                |    |                |
/// (0)    (1)     (2)    |__(0)_____(3)___|
/// |________________|
/// ```
#[derive(Clone, Debug)]
pub struct ReferenceElementNodes {
    pub order: usize,
    pub dimension: usize,
    pub solution_points_1d: GaussPoints1d,
    pub flux_points_1d: GaussPoints1d,
    pub snodes: Vec<Node>,
    pub fnodes: Vec<Vec<Node>>,
    pub sp_index: TensorIndex,
    pub fp_index: TensorIndex,
}

impl ReferenceElementNodes {
    pub fn new(order: usize, dimension: usize) -> Result<Self> {
        if order == 0 {
            return Err(SdError::InvalidOrder(order));
        }
        if dimension != 2 {
            return Err(SdError::UnsupportedDimension(dimension));
        }
        let solution_points_1d = GaussPoints1d::legendre(order);
        let flux_points_1d = GaussPoints1d::lobatto(order);
        let sp_index = TensorIndex::new(order, order);
        let fp_index = TensorIndex::new(order, order + 1);

        let gl = &solution_points_1d.points;
        let snodes = sp_index
            .iter()
            .map(|(i, j)| Node {
                xi: gl[i],
                eta: gl[j],
            })
            .collect();

        let mut nodes = Self {
            order,
            dimension,
            solution_points_1d,
            flux_points_1d,
            snodes,
            fnodes: Vec::with_capacity(dimension),
            sp_index,
            fp_index,
        };
        for direction in 0..dimension {
            let line_nodes = (0..fp_index.len())
                .map(|f| {
                    let (i, j) = nodes.flux_point_indices(direction, f);
                    let (xi, eta) = match direction {
                        0 => (nodes.flux_points_1d.points[i], nodes.solution_points_1d.points[j]),
                        _ => (nodes.solution_points_1d.points[i], nodes.flux_points_1d.points[j]),
                    };
                    Node { xi, eta }
                })
                .collect();
            nodes.fnodes.push(line_nodes);
        }
        debug!(
            "created {} solution points and {}x{} flux points (order {order})",
            nodes.snodes.len(),
            nodes.fnodes.len(),
            fp_index.len()
        );
        Ok(nodes)
    }

    pub fn num_solution_points(&self) -> usize {
        self.snodes.len()
    }
    pub fn num_flux_points(&self, direction: usize) -> usize {
        self.fnodes[direction].len()
    }
    /// Number of conservative variables per point.
    pub fn state_width(&self) -> usize {
        self.dimension + 2
    }

    /// (ξ, η) indices of solution point `s` into the Gauss-Legendre set.
    pub fn solution_point_indices(&self, s: usize) -> (usize, usize) {
        self.sp_index.split(s)
    }

    /// (ξ, η) indices of flux point `f` of `direction`. The index along `direction`
    /// refers to the Gauss-Lobatto set, the other one to the Gauss-Legendre set.
    pub fn flux_point_indices(&self, direction: usize, f: usize) -> (usize, usize) {
        let (across, along) = self.fp_index.split(f);
        match direction {
            0 => (along, across),
            1 => (across, along),
            _ => panic!("Invalid flux direction {direction}"),
        }
    }
}
