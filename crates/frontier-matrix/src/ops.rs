//! Operator overloads for [`Matrix`].
//!
//! Scalar arithmetic is infallible and available in both operand orders and
//! as compound assignment. Matrix-matrix addition and subtraction can fail
//! on shape mismatch and therefore live on [`Matrix`] as the fallible
//! `checked_*` methods instead of operators.

use crate::matrix::Matrix;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

macro_rules! scalar_assign_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Matrix {
            fn $method(&mut self, rhs: f64) {
                for v in &mut self.data {
                    *v $op rhs;
                }
            }
        }
    };
}

scalar_assign_op!(AddAssign, add_assign, +=);
scalar_assign_op!(SubAssign, sub_assign, -=);
scalar_assign_op!(MulAssign, mul_assign, *=);
scalar_assign_op!(DivAssign, div_assign, /=);

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $assign:tt) => {
        impl $trait<f64> for Matrix {
            type Output = Matrix;

            fn $method(mut self, rhs: f64) -> Matrix {
                self $assign rhs;
                self
            }
        }

        impl $trait<f64> for &Matrix {
            type Output = Matrix;

            fn $method(self, rhs: f64) -> Matrix {
                let mut out = self.clone();
                out $assign rhs;
                out
            }
        }
    };
}

scalar_op!(Add, add, +=);
scalar_op!(Sub, sub, -=);
scalar_op!(Mul, mul, *=);
scalar_op!(Div, div, /=);

impl Add<Matrix> for f64 {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        rhs + self
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        rhs * self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl Sub<Matrix> for f64 {
    type Output = Matrix;

    fn sub(self, mut rhs: Matrix) -> Matrix {
        for v in &mut rhs.data {
            *v = self - *v;
        }
        rhs
    }
}

impl Div<Matrix> for f64 {
    type Output = Matrix;

    fn div(self, mut rhs: Matrix) -> Matrix {
        for v in &mut rhs.data {
            *v = self / *v;
        }
        rhs
    }
}

impl Neg for Matrix {
    type Output = Self;

    fn neg(mut self) -> Self {
        for v in &mut self.data {
            *v = -*v;
        }
        self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fixture() -> Matrix {
        Matrix::from_vec(vec![1.0, -2.0, 3.0, 4.0], 2, 2).unwrap()
    }

    #[test]
    fn test_scalar_ops_both_orders() {
        let m = fixture();
        assert_eq!(&m + 1.0, 1.0 + m.clone());
        assert_eq!(&m * 2.0, 2.0 * &m);
        assert_eq!((&m - 0.5).get(0, 0).unwrap(), 0.5);
        assert_eq!((1.0 - m.clone()).get(0, 1).unwrap(), 3.0);
        assert_relative_eq!((&m / 2.0).get(1, 1).unwrap(), 2.0);
        assert_relative_eq!((2.0 / fixture()).get(0, 1).unwrap(), -1.0);
    }

    #[test]
    fn test_compound_assignment() {
        let mut m = fixture();
        m += 1.0;
        m *= 2.0;
        m -= 4.0;
        m /= 2.0;
        // ((x + 1) * 2 - 4) / 2 == x - 1
        assert_eq!(m, fixture() - 1.0);
    }

    #[test]
    fn test_negation() {
        let m = fixture();
        let n = -&m;
        assert_eq!(n.get(0, 0).unwrap(), -1.0);
        assert_eq!(-n, m);
    }
}
