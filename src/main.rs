use log::{error, info};

use spectral_difference::initialization;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let param_file = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "inputs/solverparam.json".to_string());
    if let Err(e) = run(&param_file) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(param_file: &str) -> spectral_difference::Result<()> {
    let (flow_params, mesh_params, solver_params) =
        initialization::initialize_params_by_file(param_file)?;
    let mut mesh = initialization::initialize_mesh(&mesh_params);
    let mut solver = initialization::initialize_solver(&solver_params, &flow_params)?;
    solver.setup(&mut mesh)?;

    let nodes = solver.nodes()?;
    info!(
        "{} solution points, {} flux points per direction, {} elements",
        nodes.num_solution_points(),
        nodes.num_flux_points(0),
        mesh.elem_num()
    );
    solver.solve_mesh(&mut mesh)?;
    for element in &mesh.elements {
        let max_res = element
            .state
            .res
            .iter()
            .fold(0.0_f64, |acc, q| acc.max(q.max_abs()));
        info!("element {}: max |res| = {max_res:.3e}", element.id);
    }
    Ok(())
}
