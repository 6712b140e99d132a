use std::path::Path;

use crate::{
    disc::{mesh::Mesh, riemann_solver::PointwiseFlux},
    error::Result,
    io::param_parser::SolverParamParser,
    solver::{FlowParameters, MeshParameters, Solver, SolverParameters},
};

pub fn initialize_params(
    parser: SolverParamParser,
) -> (FlowParameters, MeshParameters, SolverParameters) {
    let solver_params = SolverParameters {
        polynomial_order: parser.polynomial_order,
        dimension: parser.dimension,
        equation: parser.equation,
        initial_state: parser.initial_state,
    };
    let flow_params = FlowParameters { hcr: parser.hcr };
    let mesh_params = MeshParameters {
        element_num: parser.element_num,
    };
    (flow_params, mesh_params, solver_params)
}
pub fn initialize_params_by_file(
    file_path: impl AsRef<Path>,
) -> Result<(FlowParameters, MeshParameters, SolverParameters)> {
    let parser = SolverParamParser::parse(file_path)?;
    Ok(initialize_params(parser))
}
pub fn initialize_mesh(mesh_params: &MeshParameters) -> Mesh {
    Mesh::new(mesh_params.element_num)
}
/// Solver with element-local convective flux at flux points.
pub fn initialize_solver(
    solver_params: &SolverParameters,
    flow_params: &FlowParameters,
) -> Result<Solver> {
    Ok(Solver::new(solver_params)?.with_riemann_solver(PointwiseFlux::new(flow_params.hcr)))
}
