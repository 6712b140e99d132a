use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use ndarray::{Array1, ArrayView1};

/// Conservative state at a single point: density, momentum components and total energy.
///
/// All elementwise operations between two state vectors require equal widths; only
/// [`StateVector::assign`] from a raw sequence may change the width.
#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    q: Array1<f64>,
}

impl StateVector {
    pub fn zeros(width: usize) -> Self {
        Self {
            q: Array1::zeros(width),
        }
    }
    pub fn from_elem(width: usize, value: f64) -> Self {
        Self {
            q: Array1::from_elem(width, value),
        }
    }
    pub fn len(&self) -> usize {
        self.q.len()
    }
    pub fn is_empty(&self) -> bool {
        self.q.is_empty()
    }
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.q.view()
    }
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.q.iter()
    }
    pub fn to_vec(&self) -> Vec<f64> {
        self.q.to_vec()
    }
    /// Sets every component to `value`, keeping the width.
    pub fn fill(&mut self, value: f64) {
        self.q.fill(value);
    }
    /// Replaces the contents with `values`, resizing to its length.
    pub fn assign(&mut self, values: &[f64]) {
        self.q = Array1::from_vec(values.to_vec());
    }
    /// `self += alpha * rhs`
    pub fn scaled_add(&mut self, alpha: f64, rhs: &StateVector) {
        self.check_width(rhs);
        self.q.scaled_add(alpha, &rhs.q);
    }
    pub fn max_abs(&self) -> f64 {
        self.q.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
    fn check_width(&self, rhs: &StateVector) {
        assert_eq!(
            self.q.len(),
            rhs.q.len(),
            "state vector width mismatch: {} vs {}",
            self.q.len(),
            rhs.q.len()
        );
    }
}

impl From<Vec<f64>> for StateVector {
    fn from(values: Vec<f64>) -> Self {
        Self {
            q: Array1::from_vec(values),
        }
    }
}
impl From<Array1<f64>> for StateVector {
    fn from(q: Array1<f64>) -> Self {
        Self { q }
    }
}

impl Index<usize> for StateVector {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.q[i]
    }
}
impl IndexMut<usize> for StateVector {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.q[i]
    }
}

impl AddAssign<&StateVector> for StateVector {
    fn add_assign(&mut self, rhs: &StateVector) {
        self.check_width(rhs);
        self.q += &rhs.q;
    }
}
impl SubAssign<&StateVector> for StateVector {
    fn sub_assign(&mut self, rhs: &StateVector) {
        self.check_width(rhs);
        self.q -= &rhs.q;
    }
}
impl MulAssign<&StateVector> for StateVector {
    fn mul_assign(&mut self, rhs: &StateVector) {
        self.check_width(rhs);
        self.q *= &rhs.q;
    }
}
impl AddAssign<f64> for StateVector {
    fn add_assign(&mut self, scalar: f64) {
        self.q += scalar;
    }
}
impl SubAssign<f64> for StateVector {
    fn sub_assign(&mut self, scalar: f64) {
        self.q -= scalar;
    }
}
impl MulAssign<f64> for StateVector {
    fn mul_assign(&mut self, scalar: f64) {
        self.q *= scalar;
    }
}

// Binary operators are defined on top of the compound assignments, for owned and
// borrowed left-hand sides.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign:ident) => {
        impl $trait<&StateVector> for StateVector {
            type Output = StateVector;
            fn $method(mut self, rhs: &StateVector) -> StateVector {
                self.$assign(rhs);
                self
            }
        }
        impl $trait<StateVector> for StateVector {
            type Output = StateVector;
            fn $method(mut self, rhs: StateVector) -> StateVector {
                self.$assign(&rhs);
                self
            }
        }
        impl $trait<&StateVector> for &StateVector {
            type Output = StateVector;
            fn $method(self, rhs: &StateVector) -> StateVector {
                let mut result = self.clone();
                result.$assign(rhs);
                result
            }
        }
        impl $trait<f64> for StateVector {
            type Output = StateVector;
            fn $method(mut self, scalar: f64) -> StateVector {
                self.$assign(scalar);
                self
            }
        }
        impl $trait<f64> for &StateVector {
            type Output = StateVector;
            fn $method(self, scalar: f64) -> StateVector {
                let mut result = self.clone();
                result.$assign(scalar);
                result
            }
        }
    };
}
impl_binary_op!(Add, add, add_assign);
impl_binary_op!(Sub, sub, sub_assign);
impl_binary_op!(Mul, mul, mul_assign);

impl Mul<StateVector> for f64 {
    type Output = StateVector;
    fn mul(self, rhs: StateVector) -> StateVector {
        rhs * self
    }
}
impl Mul<&StateVector> for f64 {
    type Output = StateVector;
    fn mul(self, rhs: &StateVector) -> StateVector {
        rhs * self
    }
}
impl Add<StateVector> for f64 {
    type Output = StateVector;
    fn add(self, rhs: StateVector) -> StateVector {
        rhs + self
    }
}
impl Sub<StateVector> for f64 {
    type Output = StateVector;
    fn sub(self, rhs: StateVector) -> StateVector {
        -rhs + self
    }
}

impl Neg for StateVector {
    type Output = StateVector;
    fn neg(mut self) -> StateVector {
        self.q.mapv_inplace(|v| -v);
        self
    }
}
impl Neg for &StateVector {
    type Output = StateVector;
    fn neg(self) -> StateVector {
        -self.clone()
    }
}
