//! # leafnn
//!
//! Composable neural network layers on top of [leafnn_core].
//!
//! Networks are plain rust values. A tuple of modules is a sequential
//! pipeline, a `Vec` of modules is a module list, and every layer is a leaf
//! that implements [Module].
//!
//! # Architecture configs vs built modules
//!
//! Layers with parameters are described by a config ([LinearConfig]) that
//! knows the dimensions but not the dtype. [BuildModuleExt::build_module()]
//! turns a config, or a tuple of configs, into modules with freshly
//! initialised parameters:
//!
//! ```rust
//! # use leafnn::prelude::*;
//! let dev: Cpu = Default::default();
//! let model = dev.build_module::<f32>((LinearConfig::new(4, 8), ReLU, LinearConfig::new(8, 2)));
//! let x: Tensor<f32> = dev.zeros(&[4]);
//! let y = model.forward(x);
//! assert_eq!(y.shape(), &[2]);
//! ```
//!
//! # Wrapping arbitrary functions
//!
//! [Functional] turns any unary callable into a leaf module, so an activation
//! or a bit of glue code can sit between layers without writing a new layer
//! type. Extra arguments are bound when the closure is created:
//!
//! ```rust
//! # use leafnn::prelude::*;
//! let dev: Cpu = Default::default();
//! let slope = 0.5;
//! let model = dev.build_module::<f32>((
//!     LinearConfig::new(3, 3),
//!     Functional::new(move |x: Tensor<f32>| x.try_prelu(slope)),
//! ));
//! assert_eq!(Pretty(&model).to_string(), "Sequential(\n  (0): Linear(in_features=3, out_features=3)\n  (1): Functional()\n)");
//! ```
//!
//! [Functional] holds no state, so it is skipped when a network is saved with
//! [SaveSafeTensors] and loaded with [LoadSafeTensors].

pub mod layers;

pub use leafnn_core;
pub use leafnn_core::{dtypes, tensor};

pub use layers::*;
pub use leafnn_core::nn_traits::*;

/// Contains subset of all public exports.
pub mod prelude {
    pub use crate::layers::*;
    pub use leafnn_core::prelude::*;
}
