use crate::prelude::*;

use rand_distr::Uniform;
use std::fmt;

/// A linear transformation of the form `x * weight^T + bias`, where `weight`
/// is a matrix, `x` is a vector or a batch of vectors, and `bias` is a
/// vector.
///
/// Example:
/// ```rust
/// # use leafnn::prelude::*;
/// # let dev: Cpu = Default::default();
/// let model = dev.build_module::<f32>(LinearConfig::new(5, 2));
/// // single item forward
/// let y = model.forward(dev.zeros(&[5]));
/// assert_eq!(y.shape(), &[2]);
/// // batched forward
/// let y = model.forward(dev.zeros(&[10, 5]));
/// assert_eq!(y.shape(), &[10, 2]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearConfig {
    pub inp: usize,
    pub out: usize,
}

impl LinearConfig {
    pub fn new(inp: usize, out: usize) -> Self {
        Self { inp, out }
    }
}

impl<E: Dtype> BuildOnDevice<E> for LinearConfig {
    type Built = Linear<E>;
    fn try_build_on_device(&self, device: &Cpu) -> Result<Self::Built, Error> {
        Ok(Linear {
            weight: device.try_zeros(&[self.out, self.inp])?,
            bias: device.try_zeros(&[self.out])?,
        })
    }
}

/// See [LinearConfig].
#[derive(Clone, Debug)]
pub struct Linear<Elem> {
    /// Shape `[out, inp]`.
    pub weight: Tensor<Elem>,
    /// Shape `[out]`.
    pub bias: Tensor<Elem>,
}

impl<E> Linear<E> {
    pub fn in_features(&self) -> usize {
        self.weight.shape().get(1).copied().unwrap_or_default()
    }

    pub fn out_features(&self) -> usize {
        self.bias.shape().first().copied().unwrap_or_default()
    }
}

impl<E: Dtype> ResetParams<E> for Linear<E> {
    fn try_reset_params(&mut self) -> Result<(), Error> {
        let i = self.in_features();
        if i == 0 {
            return Ok(());
        }
        let b = E::from_f64(1.0 / (i as f64).sqrt());
        self.weight.try_fill_with_distr(Uniform::new(-b, b))?;
        self.bias.try_fill_with_distr(Uniform::new(-b, b))
    }
}

impl<E: Dtype> Module<Tensor<E>> for Linear<E> {
    type Output = Tensor<E>;
    type Error = Error;
    fn try_forward(&self, x: Tensor<E>) -> Result<Self::Output, Error> {
        let weight = self.weight.try_transpose()?;
        x.try_matmul(&weight)?.try_broadcast_add(&self.bias)
    }
}

impl<E> Describe for Linear<E> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Linear(in_features={}, out_features={})",
            self.in_features(),
            self.out_features()
        )
    }
}

#[cfg(feature = "safetensors")]
impl<E: Dtype> SaveSafeTensors for Linear<E> {
    fn write_safetensors(
        &self,
        location: &str,
        tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
    ) {
        self.weight.write_safetensors(&format!("{location}weight"), tensors);
        self.bias.write_safetensors(&format!("{location}bias"), tensors);
    }
}

#[cfg(feature = "safetensors")]
impl<E: Dtype> LoadSafeTensors for Linear<E> {
    fn read_safetensors(
        &mut self,
        location: &str,
        tensors: &safetensors::SafeTensors<'_>,
    ) -> Result<(), Error> {
        self.weight.read_safetensors(&format!("{location}weight"), tensors)?;
        self.bias.read_safetensors(&format!("{location}bias"), tensors)
    }
}
