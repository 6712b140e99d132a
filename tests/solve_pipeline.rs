use approx::assert_abs_diff_eq;
use spectral_difference::SdError;
use spectral_difference::disc::mesh::Mesh;
use spectral_difference::initialization::{
    initialize_mesh, initialize_params, initialize_solver,
};
use spectral_difference::io::param_parser::SolverParamParser;
use spectral_difference::solver::{EquationKind, Solver, SolverParameters};

fn build(json: &str) -> (Solver, Mesh) {
    let parser = SolverParamParser::parse_str(json).unwrap();
    let (flow_params, mesh_params, solver_params) = initialize_params(parser);
    let mesh = initialize_mesh(&mesh_params);
    let solver = initialize_solver(&solver_params, &flow_params).unwrap();
    (solver, mesh)
}

#[test]
fn uniform_flow_has_zero_residue() {
    let (mut solver, mut mesh) = build(
        r#"{
            "polynomial_order": 3,
            "equation": "euler",
            "initial_state": [1.0, 0.5, -0.25, 2.625],
            "element_num": 3
        }"#,
    );
    solver.setup(&mut mesh).unwrap();
    solver.solve_mesh(&mut mesh).unwrap();

    assert_eq!(mesh.elem_num(), 3);
    for element in &mesh.elements {
        assert_eq!(element.state.res.len(), 9);
        for res in &element.state.res {
            assert_abs_diff_eq!(res.max_abs(), 0.0, epsilon = 1e-11);
        }
    }
}

#[test]
fn navier_stokes_allocates_diffusive_storage() {
    let (mut solver, mut mesh) = build(
        r#"{"polynomial_order": 2, "equation": "navier_stokes", "element_num": 2}"#,
    );
    assert_eq!(solver.equation(), EquationKind::NavierStokes);
    solver.setup(&mut mesh).unwrap();
    solver.solve_mesh(&mut mesh).unwrap();

    for element in &mesh.elements {
        let viscous = element.state.viscous.as_ref().unwrap();
        assert_eq!(viscous.fdfp.len(), 2);
        assert_eq!(viscous.fdfp[0].len(), 6);
        for res in &element.state.res {
            assert_abs_diff_eq!(res.max_abs(), 0.0, epsilon = 1e-11);
        }
    }
}

#[test]
fn solve_before_setup_is_rejected() {
    let solver = Solver::new(&SolverParameters {
        polynomial_order: 2,
        dimension: 2,
        equation: EquationKind::Euler,
        initial_state: None,
    })
    .unwrap();
    let mut mesh = Mesh::new(1);
    assert!(matches!(
        solver.solve_mesh(&mut mesh),
        Err(SdError::NotSetUp)
    ));
}

#[test]
fn three_dimensional_input_is_rejected() {
    let parser = SolverParamParser::parse_str(
        r#"{"polynomial_order": 2, "dimension": 3, "equation": "euler"}"#,
    )
    .unwrap();
    let (_, _, solver_params) = initialize_params(parser);
    assert!(matches!(
        Solver::new(&solver_params),
        Err(SdError::UnsupportedDimension(3))
    ));
}
