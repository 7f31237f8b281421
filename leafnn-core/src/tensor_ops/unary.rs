use crate::{
    dtypes::Dtype,
    tensor::{Error, Tensor},
};
use std::sync::Arc;

impl<E: Dtype> Tensor<E> {
    /// Applies `f` to every element. Copies the storage only if it is shared.
    pub fn try_map<F: Fn(E) -> E>(mut self, f: F) -> Result<Self, Error> {
        Arc::make_mut(&mut self.data)
            .iter_mut()
            .for_each(|x| *x = f(*x));
        Ok(self)
    }

    /// `max(0, t)`
    pub fn relu(self) -> Self {
        self.try_relu().unwrap()
    }
    pub fn try_relu(self) -> Result<Self, Error> {
        self.try_map(|x| x.max(E::zero()))
    }

    /// `t` where `t >= 0`, otherwise `slope * t`.
    ///
    /// ```rust
    /// # use leafnn_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let t: Tensor<f32> = dev.tensor([-2.0, 0.0, 3.0]);
    /// assert_eq!(t.prelu(0.5).as_vec(), [-1.0, 0.0, 3.0]);
    /// ```
    pub fn prelu(self, slope: E) -> Self {
        self.try_prelu(slope).unwrap()
    }
    pub fn try_prelu(self, slope: E) -> Result<Self, Error> {
        self.try_map(|x| if x < E::zero() { x * slope } else { x })
    }

    /// `1 / (1 + exp(-t))`
    pub fn sigmoid(self) -> Self {
        self.try_sigmoid().unwrap()
    }
    pub fn try_sigmoid(self) -> Result<Self, Error> {
        self.try_map(|x| E::one() / (E::one() + (-x).exp()))
    }

    pub fn tanh(self) -> Self {
        self.try_tanh().unwrap()
    }
    pub fn try_tanh(self) -> Result<Self, Error> {
        self.try_map(|x| x.tanh())
    }

    pub fn square(self) -> Self {
        self.try_square().unwrap()
    }
    pub fn try_square(self) -> Result<Self, Error> {
        self.try_map(|x| x * x)
    }

    pub fn try_mul_scalar(self, scalar: E) -> Result<Self, Error> {
        self.try_map(|x| x * scalar)
    }

    pub fn try_add_scalar(self, scalar: E) -> Result<Self, Error> {
        self.try_map(|x| x + scalar)
    }
}

impl<E: Dtype> std::ops::Mul<E> for Tensor<E> {
    type Output = Self;
    fn mul(self, rhs: E) -> Self {
        self.try_mul_scalar(rhs).unwrap()
    }
}

impl<E: Dtype> std::ops::Add<E> for Tensor<E> {
    type Output = Self;
    fn add(self, rhs: E) -> Self {
        self.try_add_scalar(rhs).unwrap()
    }
}
