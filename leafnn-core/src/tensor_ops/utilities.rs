use crate::{
    dtypes::Unit,
    tensor::{Error, Tensor},
};
use num_traits::AsPrimitive;
use rand_distr::Distribution;
use std::sync::Arc;

impl<E: Unit> Tensor<E> {
    /// Converts every element to `E2` with an `as` cast.
    pub fn to_dtype<E2: Unit>(&self) -> Tensor<E2>
    where
        E: AsPrimitive<E2>,
    {
        let data = self.data.iter().map(|x| x.as_()).collect();
        self.device.build(data, self.shape.clone())
    }

    /// Overwrites every element with a sample from `distr`, drawn from the
    /// device's generator.
    pub fn try_fill_with_distr<D: Distribution<E>>(&mut self, distr: D) -> Result<(), Error> {
        let data = self.device.try_sample(&distr, self.num_elements())?;
        self.data = Arc::new(data);
        Ok(())
    }

    pub fn fill_with_distr<D: Distribution<E>>(&mut self, distr: D) {
        self.try_fill_with_distr(distr).unwrap()
    }
}
