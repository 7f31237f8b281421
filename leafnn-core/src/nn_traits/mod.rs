//! The lifecycle every module in a network implements: building from a
//! config ([BuildOnDevice]), resetting parameters ([ResetParams]), forwarding
//! ([Module]), printing ([Describe]) and persistence ([SaveSafeTensors],
//! [LoadSafeTensors]).
//!
//! Tuples of modules are sequential pipelines and `Vec`s of modules are
//! module lists; both implement every trait here by delegating to their
//! children in order.

mod tuples;
mod vecs;

use crate::{
    dtypes::Dtype,
    tensor::{Cpu, Error},
};
use std::fmt;

/// Mutable & Immutable forward of `Input` that produces [Module::Output].
pub trait Module<X> {
    /// The type that this unit produces given `Input`.
    type Output;
    type Error: std::fmt::Debug;

    fn try_forward(&self, x: X) -> Result<Self::Output, Self::Error>;

    fn try_forward_mut(&mut self, x: X) -> Result<Self::Output, Self::Error> {
        self.try_forward(x)
    }

    fn forward(&self, x: X) -> Self::Output {
        self.try_forward(x).unwrap()
    }

    fn forward_mut(&mut self, x: X) -> Self::Output {
        self.try_forward_mut(x).unwrap()
    }
}

/// Something that can be built on a device. Configs build into modules,
/// parameterless modules build into copies of themselves.
pub trait BuildOnDevice<E: Dtype>: Clone {
    type Built: Clone + std::fmt::Debug;
    fn build_on_device(&self, device: &Cpu) -> Self::Built {
        self.try_build_on_device(device).unwrap()
    }
    fn try_build_on_device(&self, device: &Cpu) -> Result<Self::Built, Error>;
}

/// Something that can reset its parameters.
pub trait ResetParams<E: Dtype> {
    fn reset_params(&mut self) {
        self.try_reset_params().unwrap()
    }
    fn try_reset_params(&mut self) -> Result<(), Error>;
}

/// Extension method that calls [BuildOnDevice] and then [ResetParams].
pub trait BuildModuleExt<M> {
    fn build_module<E: Dtype>(&self, m: M) -> M::Built
    where
        M: BuildOnDevice<E>,
        M::Built: ResetParams<E>,
    {
        self.try_build_module(m).unwrap()
    }

    fn try_build_module<E: Dtype>(&self, m: M) -> Result<M::Built, Error>
    where
        M: BuildOnDevice<E>,
        M::Built: ResetParams<E>;
}

impl<M> BuildModuleExt<M> for Cpu {
    fn try_build_module<E: Dtype>(&self, m: M) -> Result<M::Built, Error>
    where
        M: BuildOnDevice<E>,
        M::Built: ResetParams<E>,
    {
        let mut module = m.try_build_on_device(self)?;
        module.try_reset_params()?;
        Ok(module)
    }
}

/// How a module shows up when a network is printed, and whether its state
/// belongs in saved snapshots.
pub trait Describe {
    /// Writes a short, human readable label. Not meant to be parsed.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Containers skip children that return `false` when saving and loading.
    fn is_serializable(&self) -> bool {
        true
    }
}

/// [Display](fmt::Display) adapter for anything that implements [Describe].
///
/// ```rust
/// # use leafnn_core::prelude::*;
/// #[derive(Clone, Debug)]
/// struct Double;
/// impl Describe for Double {
///     fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("Double()")
///     }
/// }
/// assert_eq!(Pretty(&(Double, Double)).to_string(), "Sequential(\n  (0): Double()\n  (1): Double()\n)");
/// ```
pub struct Pretty<'a, M: ?Sized>(pub &'a M);

impl<M: Describe + ?Sized> fmt::Display for Pretty<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.describe(f)
    }
}

/// `name(` then one `(i): child` line per child, nested output indented, then `)`.
pub(crate) fn describe_sequence<'a>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    children: impl IntoIterator<Item = &'a dyn Describe>,
) -> fmt::Result {
    writeln!(f, "{name}(")?;
    for (i, child) in children.into_iter().enumerate() {
        let text = Pretty(child).to_string();
        writeln!(f, "  ({i}): {}", text.replace('\n', "\n  "))?;
    }
    f.write_str(")")
}

#[cfg(feature = "safetensors")]
pub trait SaveSafeTensors {
    /// Writes every tensor of this module to a safetensors file at `path`.
    fn save_safetensors<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Error> {
        let mut tensors = Vec::new();
        self.write_safetensors("", &mut tensors);
        log::debug!(
            "writing {} tensors to {}",
            tensors.len(),
            path.as_ref().display()
        );
        let views = tensor_views(&tensors)?;
        safetensors::serialize_to_file(
            views.iter().map(|(k, v)| (k.as_str(), v)),
            &None,
            path.as_ref(),
        )?;
        Ok(())
    }

    /// Same as [SaveSafeTensors::save_safetensors], into memory.
    fn to_safetensors_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut tensors = Vec::new();
        self.write_safetensors("", &mut tensors);
        let views = tensor_views(&tensors)?;
        Ok(safetensors::serialize(
            views.iter().map(|(k, v)| (k.as_str(), v)),
            &None,
        )?)
    }

    /// Pushes `(key, dtype, shape, little endian bytes)` for every tensor,
    /// with keys prefixed by `location`.
    fn write_safetensors(
        &self,
        location: &str,
        tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
    );
}

#[cfg(feature = "safetensors")]
fn tensor_views(
    tensors: &[(String, safetensors::Dtype, Vec<usize>, Vec<u8>)],
) -> Result<Vec<(String, safetensors::tensor::TensorView<'_>)>, Error> {
    let mut views = Vec::with_capacity(tensors.len());
    for (key, dtype, shape, data) in tensors {
        let view = safetensors::tensor::TensorView::new(dtype.clone(), shape.clone(), data)?;
        views.push((key.clone(), view));
    }
    Ok(views)
}

#[cfg(feature = "safetensors")]
pub trait LoadSafeTensors {
    /// Reads every tensor of this module from the safetensors file at `path`.
    /// On error, tensors read before the failing one keep their new values.
    fn load_safetensors<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<(), Error> {
        let f = std::fs::File::open(path)?;
        // SAFETY: the mapping is only read while `f` is open, and nothing in
        // this process writes to the file meanwhile.
        let buffer = unsafe { memmap2::MmapOptions::new().map(&f)? };
        self.load_safetensors_bytes(&buffer)
    }

    /// Same as [LoadSafeTensors::load_safetensors], from memory.
    fn load_safetensors_bytes(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let tensors = safetensors::SafeTensors::deserialize(bytes)?;
        self.read_safetensors("", &tensors)
    }

    fn read_safetensors(
        &mut self,
        location: &str,
        tensors: &safetensors::SafeTensors<'_>,
    ) -> Result<(), Error>;
}

#[cfg(feature = "safetensors")]
impl<E: Dtype> SaveSafeTensors for crate::tensor::Tensor<E> {
    fn write_safetensors(
        &self,
        location: &str,
        tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
    ) {
        tensors.push((
            location.to_string(),
            E::DTYPE,
            self.shape().to_vec(),
            self.to_le_bytes(),
        ));
    }
}

#[cfg(feature = "safetensors")]
impl<E: Dtype> LoadSafeTensors for crate::tensor::Tensor<E> {
    fn read_safetensors(
        &mut self,
        location: &str,
        tensors: &safetensors::SafeTensors<'_>,
    ) -> Result<(), Error> {
        self.load_safetensor(tensors, location)
    }
}
