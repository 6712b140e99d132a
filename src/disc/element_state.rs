use crate::disc::reference_element::ReferenceElementNodes;
use crate::disc::state_vector::StateVector;
use crate::error::{Result, SdError};

/// Per-element storage of state vectors at solution points (`*sp`) and flux points (`*fp`).
///
/// Flat fields hold one entry per solution point. Directional fields hold one sequence per
/// spatial direction, indexed `[direction][point]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementState {
    pub qsp: Vec<StateVector>,
    pub qfp: Vec<Vec<StateVector>>,
    pub fcsp: Vec<Vec<StateVector>>,
    pub fcfp: Vec<Vec<StateVector>>,
    pub dfcsp: Vec<Vec<StateVector>>,
    pub dfcfp: Vec<Vec<StateVector>>,
    pub res: Vec<StateVector>,
    /// Diffusive fluxes and state gradients, present only for Navier-Stokes.
    pub viscous: Option<ViscousState>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViscousState {
    pub fdsp: Vec<Vec<StateVector>>,
    pub fdfp: Vec<Vec<StateVector>>,
    pub dfdsp: Vec<Vec<StateVector>>,
    pub dfdfp: Vec<Vec<StateVector>>,
    pub dqsp: Vec<Vec<StateVector>>,
    pub dqfp: Vec<Vec<StateVector>>,
}

pub fn init_dvec(vec: &mut Vec<StateVector>, num_nodes: usize, seed: &StateVector) {
    vec.clear();
    vec.resize(num_nodes, seed.clone());
}

pub fn init_directional_dvec(
    vec: &mut Vec<Vec<StateVector>>,
    nodes_per_direction: &[usize],
    seed: &StateVector,
) {
    vec.clear();
    vec.resize(nodes_per_direction.len(), Vec::new());
    for (dirvec, &num_nodes) in vec.iter_mut().zip(nodes_per_direction) {
        init_dvec(dirvec, num_nodes, seed);
    }
}

/// Expected array shape of an element for a given reference element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateLayout {
    pub width: usize,
    pub solution_points: usize,
    pub flux_points: Vec<usize>,
}
impl StateLayout {
    pub fn new(nodes: &ReferenceElementNodes) -> Self {
        Self {
            width: nodes.state_width(),
            solution_points: nodes.num_solution_points(),
            flux_points: nodes.fnodes.iter().map(Vec::len).collect(),
        }
    }
    fn solution_points_per_direction(&self) -> Vec<usize> {
        vec![self.solution_points; self.flux_points.len()]
    }
    fn check_points(&self, field: &'static str, vec: &[StateVector], expected: usize) -> Result<()> {
        if vec.len() != expected {
            return Err(SdError::layout_mismatch(field, expected, vec.len()));
        }
        match vec.iter().find(|q| q.len() != self.width) {
            Some(q) => Err(SdError::StateWidthMismatch {
                field,
                expected: self.width,
                actual: q.len(),
            }),
            None => Ok(()),
        }
    }
    fn check_directional(
        &self,
        field: &'static str,
        vec: &[Vec<StateVector>],
        expected: &[usize],
    ) -> Result<()> {
        if vec.len() != expected.len() {
            return Err(SdError::layout_mismatch(field, expected.len(), vec.len()));
        }
        for (dirvec, &num_nodes) in vec.iter().zip(expected) {
            self.check_points(field, dirvec, num_nodes)?;
        }
        Ok(())
    }
}

impl ElementState {
    /// Allocates the convective arrays and seeds every entry with `seed`.
    pub fn init_convective(&mut self, layout: &StateLayout, seed: &StateVector) {
        let sp = layout.solution_points_per_direction();
        init_dvec(&mut self.qsp, layout.solution_points, seed);
        init_directional_dvec(&mut self.qfp, &layout.flux_points, seed);
        init_directional_dvec(&mut self.fcsp, &sp, seed);
        init_directional_dvec(&mut self.fcfp, &layout.flux_points, seed);
        init_directional_dvec(&mut self.dfcsp, &sp, seed);
        init_directional_dvec(&mut self.dfcfp, &layout.flux_points, seed);
        init_dvec(&mut self.res, layout.solution_points, seed);
    }

    /// Allocates the diffusive arrays and seeds every entry with `seed`.
    pub fn init_viscous(&mut self, layout: &StateLayout, seed: &StateVector) {
        let sp = layout.solution_points_per_direction();
        let viscous = self.viscous.get_or_insert_with(ViscousState::default);
        init_directional_dvec(&mut viscous.fdsp, &sp, seed);
        init_directional_dvec(&mut viscous.fdfp, &layout.flux_points, seed);
        init_directional_dvec(&mut viscous.dqsp, &sp, seed);
        init_directional_dvec(&mut viscous.dqfp, &layout.flux_points, seed);
        init_directional_dvec(&mut viscous.dfdsp, &sp, seed);
        init_directional_dvec(&mut viscous.dfdfp, &layout.flux_points, seed);
    }

    pub fn check_convective(&self, layout: &StateLayout) -> Result<()> {
        let sp = layout.solution_points_per_direction();
        layout.check_points("Qsp", &self.qsp, layout.solution_points)?;
        layout.check_directional("Qfp", &self.qfp, &layout.flux_points)?;
        layout.check_directional("Fcsp", &self.fcsp, &sp)?;
        layout.check_directional("Fcfp", &self.fcfp, &layout.flux_points)?;
        layout.check_directional("dFcsp", &self.dfcsp, &sp)?;
        layout.check_directional("dFcfp", &self.dfcfp, &layout.flux_points)?;
        layout.check_points("res", &self.res, layout.solution_points)
    }

    pub fn check_viscous(&self, layout: &StateLayout, elem_id: usize) -> Result<()> {
        let viscous = self
            .viscous
            .as_ref()
            .ok_or(SdError::MissingViscousState(elem_id))?;
        let sp = layout.solution_points_per_direction();
        layout.check_directional("Fdsp", &viscous.fdsp, &sp)?;
        layout.check_directional("Fdfp", &viscous.fdfp, &layout.flux_points)?;
        layout.check_directional("dQsp", &viscous.dqsp, &sp)?;
        layout.check_directional("dQfp", &viscous.dqfp, &layout.flux_points)?;
        layout.check_directional("dFdsp", &viscous.dfdsp, &sp)?;
        layout.check_directional("dFdfp", &viscous.dfdfp, &layout.flux_points)
    }

    /// Visits every stored state vector together with the name of its field.
    pub fn for_each_state(&self, mut f: impl FnMut(&'static str, &StateVector)) {
        let mut flat = |name: &'static str, vec: &[StateVector]| vec.iter().for_each(|q| f(name, q));
        flat("Qsp", &self.qsp);
        flat("res", &self.res);
        let mut directional: Vec<(&'static str, &Vec<Vec<StateVector>>)> = vec![
            ("Qfp", &self.qfp),
            ("Fcsp", &self.fcsp),
            ("Fcfp", &self.fcfp),
            ("dFcsp", &self.dfcsp),
            ("dFcfp", &self.dfcfp),
        ];
        if let Some(viscous) = &self.viscous {
            directional.extend([
                ("Fdsp", &viscous.fdsp),
                ("Fdfp", &viscous.fdfp),
                ("dQsp", &viscous.dqsp),
                ("dQfp", &viscous.dqfp),
                ("dFdsp", &viscous.dfdsp),
                ("dFdfp", &viscous.dfdfp),
            ]);
        }
        for (name, vec) in directional {
            for dirvec in vec {
                flat(name, dirvec);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> StateLayout {
        StateLayout::new(&ReferenceElementNodes::new(2, 2).unwrap())
    }

    #[test]
    fn test_layout_from_nodes() {
        let layout = layout();
        assert_eq!(layout.width, 4);
        assert_eq!(layout.solution_points, 4);
        assert_eq!(layout.flux_points, vec![6, 6]);
    }

    #[test]
    fn test_convective_init_passes_check() {
        let layout = layout();
        let mut state = ElementState::default();
        state.init_convective(&layout, &StateVector::from_elem(4, 1.0));
        assert!(state.check_convective(&layout).is_ok());
        assert_eq!(state.qfp.len(), 2);
        assert_eq!(state.dfcsp[1].len(), 4);
        assert!(matches!(
            state.check_viscous(&layout, 7),
            Err(SdError::MissingViscousState(7))
        ));
    }

    #[test]
    fn test_reinit_clears_previous_sizes() {
        let layout = layout();
        let mut state = ElementState::default();
        state.qsp = vec![StateVector::zeros(4); 17];
        state.init_convective(&layout, &StateVector::from_elem(4, 2.0));
        assert_eq!(state.qsp, vec![StateVector::from_elem(4, 2.0); 4]);
    }

    #[test]
    fn test_check_reports_length_mismatch() {
        let layout = layout();
        let mut state = ElementState::default();
        state.init_convective(&layout, &StateVector::from_elem(4, 1.0));
        state.fcfp[1].pop();
        match state.check_convective(&layout) {
            Err(SdError::LayoutMismatch {
                field,
                expected,
                actual,
            }) => {
                assert_eq!(field, "Fcfp");
                assert_eq!((expected, actual), (6, 5));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_check_reports_width_mismatch() {
        let layout = layout();
        let mut state = ElementState::default();
        state.init_convective(&layout, &StateVector::from_elem(4, 1.0));
        state.init_viscous(&layout, &StateVector::from_elem(4, 1.0));
        state.viscous.as_mut().unwrap().dqsp[0][2] = StateVector::zeros(3);
        assert!(matches!(
            state.check_viscous(&layout, 0),
            Err(SdError::StateWidthMismatch {
                field: "dQsp",
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_for_each_state_counts() {
        let layout = layout();
        let seed = StateVector::from_elem(4, 1.0);
        let mut state = ElementState::default();
        state.init_convective(&layout, &seed);
        let mut count = 0;
        state.for_each_state(|_, _| count += 1);
        // Qsp + res: 2 * 4, five directional fields: 2 solution-point ones (2 * 2 * 4)
        // and 3 flux-point ones (3 * 2 * 6)
        assert_eq!(count, 8 + 16 + 36);
        state.init_viscous(&layout, &seed);
        let mut count = 0;
        state.for_each_state(|_, _| count += 1);
        // plus three solution-point (3 * 2 * 4) and three flux-point (3 * 2 * 6) fields
        assert_eq!(count, 60 + 24 + 36);
    }
}
