use crate::disc::state_vector::StateVector;

/// Inviscid Euler flux of `q = [rho, rho u_0, .., rho u_{d-1}, E]` along `direction`.
pub fn convective_flux(q: &StateVector, hcr: f64, direction: usize) -> StateVector {
    let width = q.len();
    let dimension = width - 2;
    assert!(direction < dimension, "flux direction {direction} out of range");
    let rho = q[0];
    let energy = q[width - 1];
    let kinetic: f64 = (1..=dimension).map(|k| q[k] * q[k]).sum::<f64>() / rho;
    let p = (hcr - 1.0) * (energy - 0.5 * kinetic);
    let un = q[direction + 1] / rho;

    let mut f = StateVector::zeros(width);
    f[0] = q[direction + 1];
    for k in 1..=dimension {
        f[k] = q[k] * un;
    }
    f[direction + 1] += p;
    f[width - 1] = un * (energy + p);
    f
}
