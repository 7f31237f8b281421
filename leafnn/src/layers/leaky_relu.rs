use crate::prelude::*;

use std::fmt;

/// ReLU but keeps a small slope for negative inputs.
#[derive(Debug, Clone, Copy)]
pub struct LeakyReLU(pub f64);

impl Default for LeakyReLU {
    fn default() -> Self {
        Self(0.05)
    }
}

super::parameterless_module!(LeakyReLU);

impl<E: Dtype> Module<Tensor<E>> for LeakyReLU {
    type Output = Tensor<E>;
    type Error = Error;
    fn try_forward(&self, x: Tensor<E>) -> Result<Self::Output, Error> {
        x.try_prelu(E::from_f64(self.0))
    }
}

impl Describe for LeakyReLU {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LeakyReLU(negative_slope={})", self.0)
    }
}
