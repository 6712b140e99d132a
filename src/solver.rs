use serde::Deserialize;

use crate::disc::equation::{Euler, NavierStokes};
use crate::disc::mesh::Mesh;
use crate::disc::reference_element::ReferenceElementNodes;
use crate::disc::riemann_solver::RiemannSolver;
use crate::disc::spectral_difference::SdSolver;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquationKind {
    Euler,
    NavierStokes,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolverParameters {
    pub polynomial_order: usize,
    pub dimension: usize,
    pub equation: EquationKind,
    pub initial_state: Option<Vec<f64>>,
}
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowParameters {
    pub hcr: f64,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MeshParameters {
    pub element_num: usize,
}

/// Spectral difference solver with the equation picked at run time.
pub enum Solver {
    Euler(SdSolver<Euler>),
    NavierStokes(SdSolver<NavierStokes>),
}

fn build<E: crate::disc::equation::Equation>(params: &SolverParameters) -> Result<SdSolver<E>> {
    let solver = SdSolver::<E>::new(params.polynomial_order, params.dimension)?;
    match &params.initial_state {
        Some(values) => solver.with_initial_state(values),
        None => Ok(solver),
    }
}

impl Solver {
    pub fn new(params: &SolverParameters) -> Result<Self> {
        Ok(match params.equation {
            EquationKind::Euler => Solver::Euler(build(params)?),
            EquationKind::NavierStokes => Solver::NavierStokes(build(params)?),
        })
    }
    pub fn with_riemann_solver(self, riemann: impl RiemannSolver + 'static) -> Self {
        match self {
            Solver::Euler(s) => Solver::Euler(s.with_riemann_solver(riemann)),
            Solver::NavierStokes(s) => Solver::NavierStokes(s.with_riemann_solver(riemann)),
        }
    }
    pub fn equation(&self) -> EquationKind {
        match self {
            Solver::Euler(_) => EquationKind::Euler,
            Solver::NavierStokes(_) => EquationKind::NavierStokes,
        }
    }
    pub fn setup(&mut self, mesh: &mut Mesh) -> Result<()> {
        match self {
            Solver::Euler(s) => s.setup(mesh),
            Solver::NavierStokes(s) => s.setup(mesh),
        }
    }
    pub fn solve_mesh(&self, mesh: &mut Mesh) -> Result<()> {
        match self {
            Solver::Euler(s) => s.solve_mesh(mesh),
            Solver::NavierStokes(s) => s.solve_mesh(mesh),
        }
    }
    pub fn nodes(&self) -> Result<&ReferenceElementNodes> {
        match self {
            Solver::Euler(s) => s.nodes(),
            Solver::NavierStokes(s) => s.nodes(),
        }
    }
}
