use crate::{
    dtypes::Dtype,
    nn_traits::{describe_sequence, BuildOnDevice, Describe, Module, ResetParams},
    tensor::{Cpu, Error},
};

use std::fmt;

impl<E: Dtype, T: BuildOnDevice<E>> BuildOnDevice<E> for Vec<T> {
    type Built = Vec<T::Built>;
    fn try_build_on_device(&self, device: &Cpu) -> Result<Self::Built, Error> {
        self.iter()
            .map(|m_i| m_i.try_build_on_device(device))
            .collect()
    }
}

impl<E: Dtype, T: ResetParams<E>> ResetParams<E> for Vec<T> {
    fn try_reset_params(&mut self) -> Result<(), Error> {
        for m_i in self.iter_mut() {
            m_i.try_reset_params()?;
        }
        Ok(())
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        describe_sequence(
            f,
            "ModuleList",
            self.iter().map(|m_i| m_i as &dyn Describe),
        )
    }
}

#[cfg(feature = "safetensors")]
impl<T: crate::nn_traits::SaveSafeTensors + Describe> crate::nn_traits::SaveSafeTensors
    for Vec<T>
{
    fn write_safetensors(
        &self,
        location: &str,
        tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
    ) {
        for (i, m_i) in self.iter().enumerate() {
            if m_i.is_serializable() {
                m_i.write_safetensors(&format!("{location}{i}."), tensors);
            } else {
                log::debug!("not saving {location}{i}: module is not serializable");
            }
        }
    }
}

#[cfg(feature = "safetensors")]
impl<T: crate::nn_traits::LoadSafeTensors + Describe> crate::nn_traits::LoadSafeTensors
    for Vec<T>
{
    fn read_safetensors(
        &mut self,
        location: &str,
        tensors: &safetensors::SafeTensors<'_>,
    ) -> Result<(), Error> {
        for (i, m_i) in self.iter_mut().enumerate() {
            if m_i.is_serializable() {
                m_i.read_safetensors(&format!("{location}{i}."), tensors)?;
            } else {
                log::debug!("not loading {location}{i}: module is not serializable");
            }
        }
        Ok(())
    }
}

impl<Input, T: Module<Input, Output = Input>> Module<Input> for Vec<T> {
    type Output = T::Output;
    type Error = T::Error;

    /// Calls forward sequentially on each module in the vec. An empty vec
    /// returns its input.
    fn try_forward(&self, mut x: Input) -> Result<Self::Output, T::Error> {
        for m_i in self.iter() {
            x = m_i.try_forward(x)?;
        }
        Ok(x)
    }

    fn try_forward_mut(&mut self, mut x: Input) -> Result<Self::Output, T::Error> {
        for m_i in self.iter_mut() {
            x = m_i.try_forward_mut(x)?;
        }
        Ok(x)
    }
}
