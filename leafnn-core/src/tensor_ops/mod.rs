//! Operations on tensors like [Tensor::relu()], [Tensor::try_matmul()] and
//! [Tensor::try_broadcast_add()].
//!
//! Every op has a fallible `try_*` version returning [crate::tensor::Error];
//! the plain version panics on error.
//!
//! This is only the handful of ops the bundled layers are built from. Element
//! wise ops take `self` by value and write in place when the storage is not
//! shared.
//!
//! [Tensor::relu()]: crate::tensor::Tensor::relu
//! [Tensor::try_matmul()]: crate::tensor::Tensor::try_matmul
//! [Tensor::try_broadcast_add()]: crate::tensor::Tensor::try_broadcast_add

mod add;
mod matmul;
mod unary;
mod utilities;
