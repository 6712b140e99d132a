use crate::disc::mesh::Element;
use crate::disc::reference_element::ReferenceElementNodes;

/// Boundary treatment applied to an element before its state is interpolated to flux points.
///
/// Implementations may rewrite any value of the element state but must keep every
/// array length unchanged; the pipeline re-checks the layout after the call.
///
/// Typical conditions:
/// - slip wall (Euler): (U - U_wall) . n = 0
/// - no-slip wall (Navier-Stokes): U = U_wall
/// - inlet: Q fixed on the boundary
/// - non-reflecting outlet: Q_L = Q_R
/// - periodic: Q_inflow = Q_outflow
pub trait BoundaryCondition: Send + Sync {
    fn apply(&self, nodes: &ReferenceElementNodes, element: &mut Element);
}

/// Leaves the element untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBoundaryCondition;

impl BoundaryCondition for NoBoundaryCondition {
    fn apply(&self, _nodes: &ReferenceElementNodes, _element: &mut Element) {}
}
