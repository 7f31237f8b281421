//! The [Tensor] struct, [Cpu] device, and construction traits like
//! [ZerosTensor] and [TensorFrom].
//!
//! A tensor is a flat, row-major buffer of elements plus a runtime shape.
//! Storage is reference counted: cloning a tensor is cheap, and ops that
//! modify values copy the buffer only when it is shared.
//!
//! ```rust
//! # use leafnn_core::prelude::*;
//! let dev: Cpu = Default::default();
//! let a: Tensor<f32> = dev.tensor([[1.0, -2.0], [3.0, -4.0]]);
//! let b = a.clone().relu();
//! assert_eq!(b.as_vec(), [1.0, 0.0, 3.0, 0.0]);
//! assert_eq!(a.shape(), &[2, 2]);
//! ```

mod cpu;
mod error;
#[cfg(feature = "safetensors")]
mod safetensors;

pub use cpu::{Cpu, TensorFrom, ZerosTensor};
pub use error::Error;

use crate::dtypes::Unit;
use std::{sync::Arc, vec::Vec};

/// An n-dimensional array of `E` living on a [Cpu].
#[derive(Clone)]
pub struct Tensor<E> {
    pub(crate) data: Arc<Vec<E>>,
    pub(crate) shape: Vec<usize>,
    pub(crate) device: Cpu,
}

impl<E> Tensor<E> {
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    pub fn device(&self) -> &Cpu {
        &self.device
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }
}

impl<E: Unit> Tensor<E> {
    pub fn as_vec(&self) -> Vec<E> {
        self.data.as_ref().clone()
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for Tensor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn test_clone_shares_storage() {
        let dev: TestDevice = Default::default();
        let a: Tensor<TestDtype> = dev.tensor([1.0, 2.0, 3.0]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.data, &b.data));
        assert_eq!(b.num_elements(), 3);
    }

    #[test]
    fn test_debug_output() {
        let dev: TestDevice = Default::default();
        let a: Tensor<f32> = dev.tensor([1.0, 2.0]);
        assert_eq!(
            format!("{a:?}"),
            "Tensor { shape: [2], data: [1.0, 2.0] }"
        );
    }
}
