use crate::disc::flux::convective_flux;
use crate::disc::mesh::Element;
use crate::disc::reference_element::ReferenceElementNodes;

/// Flux coupling at flux points, called after the state has been interpolated to
/// flux points and before the flux is differentiated back to solution points.
///
/// Implementations write the common (upwinded) flux into the flux-point arrays and
/// must keep every array length unchanged.
pub trait RiemannSolver: Send + Sync {
    fn compute_flux(&self, nodes: &ReferenceElementNodes, element: &mut Element);
}

/// Leaves the flux-point arrays untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRiemannSolver;

impl RiemannSolver for NoRiemannSolver {
    fn compute_flux(&self, _nodes: &ReferenceElementNodes, _element: &mut Element) {}
}

/// Element-local convective flux: `Fcfp[d][f]` is the physical Euler flux of
/// `Qfp[d][f]` along `d`. No information from neighbouring elements is used.
#[derive(Clone, Copy, Debug)]
pub struct PointwiseFlux {
    pub hcr: f64,
}
impl PointwiseFlux {
    pub fn new(hcr: f64) -> Self {
        Self { hcr }
    }
}

impl RiemannSolver for PointwiseFlux {
    fn compute_flux(&self, _nodes: &ReferenceElementNodes, element: &mut Element) {
        let state = &mut element.state;
        for (direction, (qfp, fcfp)) in state.qfp.iter().zip(state.fcfp.iter_mut()).enumerate() {
            for (q, f) in qfp.iter().zip(fcfp.iter_mut()) {
                *f = convective_flux(q, self.hcr, direction);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disc::element_state::StateLayout;
    use crate::disc::state_vector::StateVector;

    #[test]
    fn test_pointwise_flux_fills_every_flux_point() {
        let nodes = ReferenceElementNodes::new(2, 2).unwrap();
        let layout = StateLayout::new(&nodes);
        let q = StateVector::from(vec![1.0, 0.5, 0.0, 3.0]);
        let mut element = Element::new(0);
        element.state.init_convective(&layout, &q);
        PointwiseFlux::new(1.4).compute_flux(&nodes, &mut element);
        for direction in 0..2 {
            let expected = convective_flux(&q, 1.4, direction);
            assert!(element.state.fcfp[direction].iter().all(|f| *f == expected));
        }
        assert!(element.state.check_convective(&layout).is_ok());
    }
}
