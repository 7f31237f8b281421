use crate::prelude::*;

use std::fmt;

/// Wraps a unary function as a leaf module, so it can be placed inside a
/// network next to layers.
///
/// Forwarding calls the function with the input and returns its result
/// unchanged, including its error type. The function is stored as is: any
/// extra arguments must be bound when the closure is created, and are not
/// evaluated again afterwards.
///
/// A [Functional] has no parameters. Resetting it does nothing, and
/// [Describe::is_serializable] is `false`, so containers skip it when saving
/// and loading.
///
/// ```rust
/// # use leafnn::prelude::*;
/// let dev: Cpu = Default::default();
/// let slope = 0.5;
/// let leaky = Functional::new(move |x: Tensor<f32>| x.try_prelu(slope));
/// let y = leaky.forward(dev.tensor([-2.0, 4.0]));
/// assert_eq!(y.as_vec(), [-1.0, 4.0]);
/// assert_eq!(Pretty(&leaky).to_string(), "Functional()");
/// ```
#[derive(Clone)]
pub struct Functional<F> {
    function: F,
}

impl<F> Functional<F> {
    /// Wraps `function`. The signature is checked when the module is
    /// forwarded: `F: Fn(X) -> Result<Y, Err>`.
    ///
    /// Tensor ops should be wrapped in their `try_*` form, e.g.
    /// `Functional::new(Tensor::<f32>::try_relu)`. `Tensor::relu` returns a
    /// bare tensor, so a module built from it can't be forwarded. Other
    /// functions that cannot fail return `Ok::<_, Infallible>(..)`:
    ///
    /// ```rust
    /// # use leafnn::prelude::*;
    /// # use std::convert::Infallible;
    /// let dev: Cpu = Default::default();
    /// let relu = Functional::new(Tensor::<f32>::try_relu);
    /// let sigmoid = Functional::new(|x: Tensor<f32>| Ok::<_, Infallible>(x.sigmoid()));
    /// let y = sigmoid.forward(relu.forward(dev.tensor([-3.0, 0.0])));
    /// assert_eq!(y.as_vec(), [0.5, 0.5]);
    /// ```
    pub fn new(function: F) -> Self {
        log::debug!("wrapping {} as a module", std::any::type_name::<F>());
        Self { function }
    }
}

impl<F> fmt::Debug for Functional<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Functional")
    }
}

impl<X, Y, Err: fmt::Debug, F: Fn(X) -> Result<Y, Err>> Module<X> for Functional<F> {
    type Output = Y;
    type Error = Err;

    fn try_forward(&self, x: X) -> Result<Y, Err> {
        (self.function)(x)
    }
}

impl<F> Describe for Functional<F> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Functional()")
    }

    fn is_serializable(&self) -> bool {
        false
    }
}

impl<E: Dtype, F: Clone> BuildOnDevice<E> for Functional<F> {
    type Built = Self;
    fn try_build_on_device(&self, _device: &Cpu) -> Result<Self, Error> {
        Ok(self.clone())
    }
}

impl<E: Dtype, F> ResetParams<E> for Functional<F> {
    fn try_reset_params(&mut self) -> Result<(), Error> {
        log::trace!("nothing to reset in {}", std::any::type_name::<F>());
        Ok(())
    }
}

#[cfg(feature = "safetensors")]
impl<F> SaveSafeTensors for Functional<F> {
    fn write_safetensors(
        &self,
        _location: &str,
        _tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
    ) {
    }
}

#[cfg(feature = "safetensors")]
impl<F> LoadSafeTensors for Functional<F> {
    fn read_safetensors(
        &mut self,
        _location: &str,
        _tensors: &safetensors::SafeTensors<'_>,
    ) -> Result<(), Error> {
        Ok(())
    }
}
