use crate::prelude::*;

use std::fmt;

/// Calls [Tensor::relu()].
#[derive(Default, Debug, Clone, Copy)]
pub struct ReLU;

super::parameterless_module!(ReLU);

impl<E: Dtype> Module<Tensor<E>> for ReLU {
    type Output = Tensor<E>;
    type Error = Error;
    fn try_forward(&self, x: Tensor<E>) -> Result<Self::Output, Error> {
        x.try_relu()
    }
}

impl Describe for ReLU {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ReLU()")
    }
}
