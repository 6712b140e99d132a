use crate::disc::element_state::{ElementState, StateLayout};
use crate::disc::precompute_matrix::{SdOperators, apply_operator};
use crate::disc::state_vector::StateVector;
use crate::error::{Result, SdError};

/// Equation-specific parts of the spectral difference pipeline: which arrays an element
/// carries, what is differentiated back to solution points and how the residue is formed.
pub trait Equation {
    const NAME: &'static str;

    fn initialize_properties(layout: &StateLayout, seed: &StateVector, state: &mut ElementState);

    fn check_layout(layout: &StateLayout, state: &ElementState, elem_id: usize) -> Result<()>;

    fn interpolate_fp2sp(operators: &SdOperators, state: &mut ElementState, elem_id: usize) -> Result<()>;

    fn residue(state: &mut ElementState, elem_id: usize) -> Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Euler;

#[derive(Clone, Copy, Debug, Default)]
pub struct NavierStokes;

fn differentiate_convective(operators: &SdOperators, state: &mut ElementState) {
    for (direction, matrix) in operators.fp2sp.iter().enumerate() {
        apply_operator(matrix, &state.fcfp[direction], &mut state.dfcsp[direction]);
    }
}

impl Equation for Euler {
    const NAME: &'static str = "Euler";

    fn initialize_properties(layout: &StateLayout, seed: &StateVector, state: &mut ElementState) {
        state.init_convective(layout, seed);
        state.viscous = None;
    }

    fn check_layout(layout: &StateLayout, state: &ElementState, _elem_id: usize) -> Result<()> {
        state.check_convective(layout)
    }

    fn interpolate_fp2sp(operators: &SdOperators, state: &mut ElementState, _elem_id: usize) -> Result<()> {
        differentiate_convective(operators, state);
        Ok(())
    }

    /// res = -Σ_d dFc_d
    fn residue(state: &mut ElementState, _elem_id: usize) -> Result<()> {
        for (s, res) in state.res.iter_mut().enumerate() {
            res.fill(0.0);
            for dfcsp in &state.dfcsp {
                *res -= &dfcsp[s];
            }
        }
        Ok(())
    }
}

impl Equation for NavierStokes {
    const NAME: &'static str = "Navier-Stokes";

    fn initialize_properties(layout: &StateLayout, seed: &StateVector, state: &mut ElementState) {
        state.init_convective(layout, seed);
        state.init_viscous(layout, seed);
    }

    fn check_layout(layout: &StateLayout, state: &ElementState, elem_id: usize) -> Result<()> {
        state.check_convective(layout)?;
        state.check_viscous(layout, elem_id)
    }

    fn interpolate_fp2sp(operators: &SdOperators, state: &mut ElementState, elem_id: usize) -> Result<()> {
        differentiate_convective(operators, state);
        let viscous = state
            .viscous
            .as_mut()
            .ok_or(SdError::MissingViscousState(elem_id))?;
        for (direction, matrix) in operators.fp2sp.iter().enumerate() {
            apply_operator(matrix, &viscous.fdfp[direction], &mut viscous.dfdsp[direction]);
            apply_operator(matrix, &state.qfp[direction], &mut viscous.dqsp[direction]);
        }
        Ok(())
    }

    /// res = Σ_d (-dFc_d + dFd_d)
    fn residue(state: &mut ElementState, elem_id: usize) -> Result<()> {
        let viscous = state
            .viscous
            .as_ref()
            .ok_or(SdError::MissingViscousState(elem_id))?;
        for (s, res) in state.res.iter_mut().enumerate() {
            res.fill(0.0);
            for (dfcsp, dfdsp) in state.dfcsp.iter().zip(&viscous.dfdsp) {
                *res -= &dfcsp[s];
                *res += &dfdsp[s];
            }
        }
        Ok(())
    }
}
