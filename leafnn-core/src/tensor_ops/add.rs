use crate::{
    dtypes::Dtype,
    tensor::{Error, Tensor},
};
use std::sync::Arc;

impl<E: Dtype> Tensor<E> {
    /// Element wise addition of two tensors with the same shape.
    pub fn try_add(mut self, rhs: &Self) -> Result<Self, Error> {
        if self.shape != rhs.shape {
            return Err(Error::ShapeMismatch {
                op: "add",
                lhs: self.shape,
                rhs: rhs.shape.clone(),
            });
        }
        Arc::make_mut(&mut self.data)
            .iter_mut()
            .zip(rhs.data.iter())
            .for_each(|(l, r)| *l = *l + *r);
        Ok(self)
    }

    /// Adds a 1d `rhs` to every row of `self`, broadcasting along all but the
    /// last axis. `rhs.shape()` must equal `[self.shape().last()]`.
    ///
    /// ```rust
    /// # use leafnn_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
    /// let b: Tensor<f32> = dev.tensor([10.0, 20.0]);
    /// assert_eq!(a.try_broadcast_add(&b).unwrap().as_vec(), [11.0, 22.0, 13.0, 24.0]);
    /// ```
    pub fn try_broadcast_add(mut self, rhs: &Self) -> Result<Self, Error> {
        let last = self.shape.last().copied();
        if rhs.shape.len() != 1 || last != Some(rhs.shape[0]) {
            return Err(Error::ShapeMismatch {
                op: "broadcast_add",
                lhs: self.shape,
                rhs: rhs.shape.clone(),
            });
        }
        if rhs.shape[0] == 0 {
            return Ok(self);
        }
        Arc::make_mut(&mut self.data)
            .chunks_exact_mut(rhs.shape[0])
            .for_each(|row| {
                row.iter_mut()
                    .zip(rhs.data.iter())
                    .for_each(|(l, r)| *l = *l + *r)
            });
        Ok(self)
    }
}

impl<E: Dtype> std::ops::Add<&Tensor<E>> for Tensor<E> {
    type Output = Self;
    fn add(self, rhs: &Tensor<E>) -> Self {
        self.try_add(rhs).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::tests::*;

    #[test]
    fn test_add_same_shape() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
        let b: Tensor<TestDtype> = dev.tensor([[0.5, -2.0], [1.0, 1.0]]);
        assert_close_to_literal!(a + &b, [1.5, 0.0, 4.0, 5.0]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([1.0, 2.0]);
        let b: Tensor<TestDtype> = dev.tensor([1.0, 2.0, 3.0]);
        assert!(matches!(
            a.try_add(&b),
            Err(Error::ShapeMismatch { op: "add", .. })
        ));
    }

    #[test]
    fn test_broadcast_add_1d() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([1.0, 2.0, 3.0]);
        let b: Tensor<TestDtype> = dev.tensor([0.5, 0.5, -3.0]);
        assert_close_to_literal!(a.try_broadcast_add(&b).unwrap(), [1.5, 2.5, 0.0]);
    }

    #[test]
    fn test_broadcast_add_wrong_len() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([[1.0, 2.0, 3.0]]);
        let b: Tensor<TestDtype> = dev.tensor([1.0, 2.0]);
        assert!(a.try_broadcast_add(&b).is_err());
    }
}
