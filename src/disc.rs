pub mod basis;
pub mod boundary;
pub mod element_state;
pub mod equation;
pub mod flux;
pub mod gauss_points;
pub mod mesh;
pub mod precompute_matrix;
pub mod reference_element;
pub mod riemann_solver;
pub mod spectral_difference;
pub mod state_vector;
