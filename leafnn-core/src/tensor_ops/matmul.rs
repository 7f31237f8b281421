#![allow(clippy::needless_range_loop)]

use crate::{
    dtypes::Dtype,
    tensor::{Error, Tensor},
};
use std::vec::Vec;

impl<E: Dtype> Tensor<E> {
    /// Swaps the two axes of a 2d tensor.
    pub fn try_transpose(&self) -> Result<Self, Error> {
        let &[m, n] = self.shape.as_slice() else {
            return Err(Error::ShapeMismatch {
                op: "transpose",
                lhs: self.shape.clone(),
                rhs: Vec::new(),
            });
        };
        let numel = m.checked_mul(n).ok_or(Error::OutOfMemory)?;
        let mut data = self.device.try_alloc_elem(numel, E::zero())?;
        for i in 0..m {
            for j in 0..n {
                data[j * m + i] = self.data[i * n + j];
            }
        }
        Ok(self.device.build(data, std::vec![n, m]))
    }

    /// Matrix multiplication.
    ///
    /// Supported shapes:
    /// - `[k] x [k, n] -> [n]`
    /// - `[m, k] x [k, n] -> [m, n]`
    pub fn try_matmul(&self, rhs: &Self) -> Result<Self, Error> {
        let mismatch = || Error::ShapeMismatch {
            op: "matmul",
            lhs: self.shape.clone(),
            rhs: rhs.shape.clone(),
        };
        let &[k2, n] = rhs.shape.as_slice() else {
            return Err(mismatch());
        };
        let (m, k, out_shape) = match self.shape.as_slice() {
            &[k] => (1, k, std::vec![n]),
            &[m, k] => (m, k, std::vec![m, n]),
            _ => return Err(mismatch()),
        };
        if k != k2 {
            return Err(mismatch());
        }

        let numel = m.checked_mul(n).ok_or(Error::OutOfMemory)?;
        let mut data = self.device.try_alloc_elem(numel, E::zero())?;
        for i in 0..m {
            for p in 0..k {
                let a = self.data[i * k + p];
                for j in 0..n {
                    data[i * n + j] = data[i * n + j] + a * rhs.data[p * n + j];
                }
            }
        }
        Ok(self.device.build(data, out_shape))
    }

    pub fn matmul(&self, rhs: &Self) -> Self {
        self.try_matmul(rhs).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::*;

    #[test]
    fn test_transpose() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t = a.try_transpose().unwrap();
        assert_eq!(t.shape(), &[3, 2]);
        assert_close_to_literal!(t, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_matmul_vec_mat() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([1.0, 2.0]);
        let b: Tensor<TestDtype> = dev.tensor([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let c = a.matmul(&b);
        assert_eq!(c.shape(), &[3]);
        assert_close_to_literal!(c, [9.0, 12.0, 15.0]);
    }

    #[test]
    fn test_matmul_mat_mat() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
        let b: Tensor<TestDtype> = dev.tensor([[0.5, -1.0], [2.0, 0.0]]);
        let c = a.matmul(&b);
        assert_eq!(c.shape(), &[2, 2]);
        assert_close_to_literal!(c, [4.5, -1.0, 9.5, -3.0]);
    }

    #[test]
    fn test_matmul_output_too_large() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor((Vec::new(), vec![usize::MAX, 0]));
        let b: Tensor<TestDtype> = dev.tensor((Vec::new(), vec![0, 2]));
        assert!(matches!(a.try_matmul(&b), Err(Error::OutOfMemory)));
    }

    #[test]
    fn test_matmul_inner_dim_mismatch() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([1.0, 2.0, 3.0]);
        let b: Tensor<TestDtype> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
        assert!(matches!(
            a.try_matmul(&b),
            Err(Error::ShapeMismatch { op: "matmul", .. })
        ));
    }
}
