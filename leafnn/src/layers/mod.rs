/// Implements the build, reset and persistence traits for a layer without
/// parameters. The layer builds into a copy of itself and has no tensors.
macro_rules! parameterless_module {
    ($Layer:ty) => {
        impl<E: leafnn_core::dtypes::Dtype> leafnn_core::nn_traits::BuildOnDevice<E> for $Layer {
            type Built = Self;
            fn try_build_on_device(
                &self,
                _device: &leafnn_core::tensor::Cpu,
            ) -> Result<Self::Built, leafnn_core::tensor::Error> {
                Ok(self.clone())
            }
        }

        impl<E: leafnn_core::dtypes::Dtype> leafnn_core::nn_traits::ResetParams<E> for $Layer {
            fn try_reset_params(&mut self) -> Result<(), leafnn_core::tensor::Error> {
                Ok(())
            }
        }

        #[cfg(feature = "safetensors")]
        impl leafnn_core::nn_traits::SaveSafeTensors for $Layer {
            fn write_safetensors(
                &self,
                _location: &str,
                _tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
            ) {
            }
        }

        #[cfg(feature = "safetensors")]
        impl leafnn_core::nn_traits::LoadSafeTensors for $Layer {
            fn read_safetensors(
                &mut self,
                _location: &str,
                _tensors: &safetensors::SafeTensors<'_>,
            ) -> Result<(), leafnn_core::tensor::Error> {
                Ok(())
            }
        }
    };
}
pub(crate) use parameterless_module;

mod functional;
mod id;
mod leaky_relu;
mod linear;
mod relu;

pub use functional::Functional;
pub use id::{Id, Id1, Id2, Id3};
pub use leaky_relu::LeakyReLU;
pub use linear::{Linear, LinearConfig};
pub use relu::ReLU;
