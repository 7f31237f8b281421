use super::{Error, Tensor};
use crate::dtypes::Unit;

use rand::{rngs::StdRng, SeedableRng};
use rand_distr::Distribution;
use std::{
    sync::{Arc, Mutex, PoisonError},
    vec::Vec,
};

/// A device that stores tensors on the heap and runs ops on the current thread.
///
/// The device owns the random number generator used for parameter
/// initialisation. Clones share the same generator.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub(crate) rng: Arc<Mutex<StdRng>>,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl Cpu {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Product of `shape`, or `None` if it overflows `usize`.
    pub(crate) fn checked_numel(shape: &[usize]) -> Option<usize> {
        shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
    }

    #[inline]
    pub(crate) fn try_alloc_elem<E: Unit>(&self, numel: usize, elem: E) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        data.resize(numel, elem);
        Ok(data)
    }

    pub(crate) fn try_sample<E: Unit, D: Distribution<E>>(
        &self,
        distr: &D,
        numel: usize,
    ) -> Result<Vec<E>, Error> {
        let mut data: Vec<E> = Vec::new();
        data.try_reserve(numel).map_err(|_| Error::OutOfMemory)?;
        // a panic while sampling leaves the generator in a valid state
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        data.extend((0..numel).map(|_| distr.sample(&mut *rng)));
        Ok(data)
    }

    pub(crate) fn build<E>(&self, data: Vec<E>, shape: Vec<usize>) -> Tensor<E> {
        Tensor {
            data: Arc::new(data),
            shape,
            device: self.clone(),
        }
    }
}

/// Constructs tensors filled with zeros.
pub trait ZerosTensor<E: Unit> {
    /// Creates a tensor with the given shape filled with `E::default()`.
    /// ```rust
    /// # use leafnn_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let a: Tensor<f32> = dev.zeros(&[2, 3]);
    /// assert_eq!(a.as_vec(), [0.0; 6]);
    /// ```
    fn zeros(&self, shape: &[usize]) -> Tensor<E> {
        self.try_zeros(shape).unwrap()
    }

    /// Fallible version of [ZerosTensor::zeros]
    fn try_zeros(&self, shape: &[usize]) -> Result<Tensor<E>, Error>;
}

impl<E: Unit> ZerosTensor<E> for Cpu {
    fn try_zeros(&self, shape: &[usize]) -> Result<Tensor<E>, Error> {
        let numel = Self::checked_numel(shape).ok_or(Error::OutOfMemory)?;
        let data = self.try_alloc_elem(numel, E::default())?;
        Ok(self.build(data, shape.to_vec()))
    }
}

/// Construct tensors from rust data.
pub trait TensorFrom<Src, E: Unit> {
    /// Create a tensor from rust data
    /// ```rust
    /// # use leafnn_core::prelude::*;
    /// # let dev: Cpu = Default::default();
    /// let _: Tensor<f32> = dev.tensor([1.0, 2.0, 3.0]);
    /// let _: Tensor<f32> = dev.tensor([[1.0, 2.0], [3.0, 4.0]]);
    /// let _: Tensor<f32> = dev.tensor((vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]));
    /// ```
    fn tensor(&self, src: Src) -> Tensor<E> {
        self.try_tensor(src).unwrap()
    }

    /// Fallible version of [TensorFrom::tensor]
    fn try_tensor(&self, src: Src) -> Result<Tensor<E>, Error>;
}

impl<E: Unit, const M: usize> TensorFrom<[E; M], E> for Cpu {
    fn try_tensor(&self, src: [E; M]) -> Result<Tensor<E>, Error> {
        Ok(self.build(src.to_vec(), std::vec![M]))
    }
}

impl<E: Unit, const M: usize, const N: usize> TensorFrom<[[E; N]; M], E> for Cpu {
    fn try_tensor(&self, src: [[E; N]; M]) -> Result<Tensor<E>, Error> {
        let data = src.iter().flat_map(|row| row.iter().copied()).collect();
        Ok(self.build(data, std::vec![M, N]))
    }
}

impl<E: Unit> TensorFrom<Vec<E>, E> for Cpu {
    fn try_tensor(&self, src: Vec<E>) -> Result<Tensor<E>, Error> {
        let shape = std::vec![src.len()];
        Ok(self.build(src, shape))
    }
}

impl<E: Unit> TensorFrom<(Vec<E>, Vec<usize>), E> for Cpu {
    fn try_tensor(&self, (src, shape): (Vec<E>, Vec<usize>)) -> Result<Tensor<E>, Error> {
        if Self::checked_numel(&shape) != Some(src.len()) {
            return Err(Error::WrongNumElements);
        }
        Ok(self.build(src, shape))
    }
}
