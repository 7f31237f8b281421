use crate::prelude::*;

use std::fmt;

/// Forwards the input to the output.
#[derive(Default, Debug, Clone, Copy)]
pub struct Id;

super::parameterless_module!(Id);

impl<E: Dtype> Module<Tensor<E>> for Id {
    type Output = Tensor<E>;
    type Error = Error;
    fn try_forward(&self, x: Tensor<E>) -> Result<Self::Output, Error> {
        Ok(x)
    }
}

impl Describe for Id {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Id()")
    }
}

pub type Id1 = (Id,);
pub type Id2 = (Id, Id);
pub type Id3 = (Id, Id, Id);
