//! Core building blocks for leafnn: a small reference counted [tensor::Tensor]
//! on a [tensor::Cpu] device, the handful of [tensor_ops] the bundled layers
//! need, and the module lifecycle traits in [nn_traits].
//!
//! Most users want the `leafnn` crate, which re-exports everything here and
//! adds layers.
//!
//! # Modules
//!
//! A module is anything that implements [nn_traits::Module]. Modules are
//! built from configs with [nn_traits::BuildModuleExt::build_module()], which
//! builds on the device and then resets parameters:
//!
//! ```rust
//! # use leafnn_core::prelude::*;
//! #[derive(Clone, Debug)]
//! struct Negate;
//!
//! impl<E: Dtype> BuildOnDevice<E> for Negate {
//!     type Built = Self;
//!     fn try_build_on_device(&self, _: &Cpu) -> Result<Self, Error> {
//!         Ok(Self)
//!     }
//! }
//!
//! impl<E: Dtype> ResetParams<E> for Negate {
//!     fn try_reset_params(&mut self) -> Result<(), Error> {
//!         Ok(())
//!     }
//! }
//!
//! impl<E: Dtype> Module<Tensor<E>> for Negate {
//!     type Output = Tensor<E>;
//!     type Error = Error;
//!     fn try_forward(&self, x: Tensor<E>) -> Result<Tensor<E>, Error> {
//!         x.try_mul_scalar(-E::ONE)
//!     }
//! }
//!
//! let dev: Cpu = Default::default();
//! let m = dev.build_module::<f32>((Negate, Negate, Negate));
//! let x: Tensor<f32> = dev.tensor([1.0, -2.0]);
//! let y = m.forward(x);
//! assert_eq!(y.as_vec(), [-1.0, 2.0]);
//! ```
//!
//! # Features
//!
//! - `safetensors` (default): [nn_traits::SaveSafeTensors] and
//!   [nn_traits::LoadSafeTensors].
//! - `test-f64`: run the unit tests with `f64` instead of `f32`.

pub mod dtypes;
pub mod nn_traits;
pub mod tensor;
pub mod tensor_ops;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::dtypes::*;
    pub use crate::nn_traits::*;
    pub use crate::tensor::*;
}
