use std::marker::PhantomData;

use log::{debug, info, trace};

use crate::disc::boundary::{BoundaryCondition, NoBoundaryCondition};
use crate::disc::element_state::StateLayout;
use crate::disc::equation::Equation;
use crate::disc::mesh::{Element, Mesh};
use crate::disc::precompute_matrix::{SdOperators, apply_operator};
use crate::disc::reference_element::ReferenceElementNodes;
use crate::disc::riemann_solver::{NoRiemannSolver, RiemannSolver};
use crate::disc::state_vector::StateVector;
use crate::error::{Result, SdError};

/// Reference-element data shared read-only by every element of the mesh.
struct Discretization {
    nodes: ReferenceElementNodes,
    operators: SdOperators,
    layout: StateLayout,
}

/// Spectral difference discretization of `E` on quadrilateral elements.
///
/// `setup` builds the reference element and seeds every mesh element; `solve` then runs
/// boundary condition, sp->fp interpolation, Riemann solver, fp->sp differentiation and
/// residue assembly on one element.
pub struct SdSolver<E: Equation> {
    pub order: usize,
    pub dimension: usize,
    initial_state: StateVector,
    disc: Option<Discretization>,
    boundary: Box<dyn BoundaryCondition>,
    riemann: Box<dyn RiemannSolver>,
    _equation: PhantomData<E>,
}

impl<E: Equation> SdSolver<E> {
    pub fn new(order: usize, dimension: usize) -> Result<Self> {
        if order == 0 {
            return Err(SdError::InvalidOrder(order));
        }
        if dimension != 2 {
            return Err(SdError::UnsupportedDimension(dimension));
        }
        info!(
            "Initializing {} SD solver (order {order}, dimension {dimension})",
            E::NAME
        );
        Ok(Self {
            order,
            dimension,
            initial_state: StateVector::from_elem(dimension + 2, 1.0),
            disc: None,
            boundary: Box::new(NoBoundaryCondition),
            riemann: Box::new(NoRiemannSolver),
            _equation: PhantomData,
        })
    }

    /// Replaces the uniform seed written into every array by `initialize_properties`.
    pub fn with_initial_state(mut self, values: &[f64]) -> Result<Self> {
        let expected = self.dimension + 2;
        if values.len() != expected {
            return Err(SdError::InitialStateLength {
                expected,
                actual: values.len(),
            });
        }
        self.initial_state = StateVector::from(values.to_vec());
        Ok(self)
    }
    pub fn with_boundary_condition(mut self, boundary: impl BoundaryCondition + 'static) -> Self {
        self.boundary = Box::new(boundary);
        self
    }
    pub fn with_riemann_solver(mut self, riemann: impl RiemannSolver + 'static) -> Self {
        self.riemann = Box::new(riemann);
        self
    }

    pub fn initial_state(&self) -> &StateVector {
        &self.initial_state
    }
    pub fn nodes(&self) -> Result<&ReferenceElementNodes> {
        Ok(&self.discretization()?.nodes)
    }
    pub fn operators(&self) -> Result<&SdOperators> {
        Ok(&self.discretization()?.operators)
    }
    fn discretization(&self) -> Result<&Discretization> {
        self.disc.as_ref().ok_or(SdError::NotSetUp)
    }

    /// Builds the reference element, then allocates and seeds every element of `mesh`.
    pub fn setup(&mut self, mesh: &mut Mesh) -> Result<()> {
        self.create_nodes()?;
        self.initialize_properties(mesh)
    }

    pub fn create_nodes(&mut self) -> Result<()> {
        let nodes = ReferenceElementNodes::new(self.order, self.dimension)?;
        let operators = SdOperators::new(&nodes);
        let layout = StateLayout::new(&nodes);
        self.disc = Some(Discretization {
            nodes,
            operators,
            layout,
        });
        Ok(())
    }

    pub fn initialize_properties(&self, mesh: &mut Mesh) -> Result<()> {
        let disc = self.discretization()?;
        for element in mesh.elements.iter_mut() {
            E::initialize_properties(&disc.layout, &self.initial_state, &mut element.state);
        }
        debug!(
            "initialized {} {} elements with seed {:?}",
            mesh.elem_num(),
            E::NAME,
            self.initial_state.to_vec()
        );
        Ok(())
    }

    pub fn solve(&self, element: &mut Element) -> Result<()> {
        trace!("solving element {}", element.id);
        self.boundary_condition(element)?;
        self.interpolate_sp2fp(element)?;
        self.riemann_solver(element)?;
        self.interpolate_fp2sp(element)?;
        self.residue(element)
    }

    pub fn solve_mesh(&self, mesh: &mut Mesh) -> Result<()> {
        for element in mesh.elements.iter_mut() {
            self.solve(element)?;
        }
        Ok(())
    }

    fn checked(&self, element: &Element) -> Result<&Discretization> {
        let disc = self.discretization()?;
        E::check_layout(&disc.layout, &element.state, element.id)?;
        Ok(disc)
    }

    pub fn boundary_condition(&self, element: &mut Element) -> Result<()> {
        let disc = self.checked(element)?;
        self.boundary.apply(&disc.nodes, element);
        Ok(())
    }

    /// Qfp[d] = sp2fp[d] · Qsp for every direction d.
    pub fn interpolate_sp2fp(&self, element: &mut Element) -> Result<()> {
        let disc = self.checked(element)?;
        let state = &mut element.state;
        for (matrix, qfp) in disc.operators.sp2fp.iter().zip(state.qfp.iter_mut()) {
            apply_operator(matrix, &state.qsp, qfp);
        }
        Ok(())
    }

    pub fn riemann_solver(&self, element: &mut Element) -> Result<()> {
        let disc = self.checked(element)?;
        self.riemann.compute_flux(&disc.nodes, element);
        Ok(())
    }

    pub fn interpolate_fp2sp(&self, element: &mut Element) -> Result<()> {
        let disc = self.checked(element)?;
        E::interpolate_fp2sp(&disc.operators, &mut element.state, element.id)
    }

    pub fn residue(&self, element: &mut Element) -> Result<()> {
        self.checked(element)?;
        E::residue(&mut element.state, element.id)
    }
}
