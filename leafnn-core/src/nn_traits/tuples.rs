use crate::{
    dtypes::Dtype,
    nn_traits::{describe_sequence, BuildOnDevice, Describe, Module, ResetParams},
    tensor::{Cpu, Error},
};

use std::fmt;

macro_rules! tuple_impls {
    ([$($name:ident),+] [$($idx:tt),+], $first:ident, $last:ident, [$($rev_tail:ident),*]) => {

        impl<Elem: Dtype, $($name: BuildOnDevice<Elem>),+> BuildOnDevice<Elem> for ($($name,)+) {
            type Built = ($($name::Built, )+);
            fn try_build_on_device(&self, device: &Cpu) -> Result<Self::Built, Error> {
                Ok(($(
                    self.$idx.try_build_on_device(device)?,
                )+))
            }
        }

        impl<Elem: Dtype, $($name: ResetParams<Elem>),+> ResetParams<Elem> for ($($name,)+) {
            fn try_reset_params(&mut self) -> Result<(), Error> {
                $(self.$idx.try_reset_params()?;)+
                Ok(())
            }
        }

        impl<$($name: Describe),+> Describe for ($($name,)+) {
            fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                describe_sequence(f, "Sequential", [$(&self.$idx as &dyn Describe),+])
            }
        }

        #[cfg(feature = "safetensors")]
        impl<$($name: crate::nn_traits::SaveSafeTensors + Describe, )+> crate::nn_traits::SaveSafeTensors for ($($name,)+) {
            fn write_safetensors(
                &self,
                location: &str,
                tensors: &mut Vec<(String, safetensors::Dtype, Vec<usize>, Vec<u8>)>,
            ) {
                $(
                    if self.$idx.is_serializable() {
                        self.$idx.write_safetensors(&format!("{location}{}.", $idx), tensors);
                    } else {
                        log::debug!("not saving {location}{}: module is not serializable", $idx);
                    }
                )+
            }
        }

        #[cfg(feature = "safetensors")]
        impl<$($name: crate::nn_traits::LoadSafeTensors + Describe, )+> crate::nn_traits::LoadSafeTensors for ($($name,)+) {
            fn read_safetensors(
                &mut self,
                location: &str,
                tensors: &safetensors::SafeTensors<'_>,
            ) -> Result<(), Error> {
                $(
                    if self.$idx.is_serializable() {
                        self.$idx.read_safetensors(&format!("{location}{}.", $idx), tensors)?;
                    } else {
                        log::debug!("not loading {location}{}: module is not serializable", $idx);
                    }
                )+
                Ok(())
            }
        }

        /*This macro expands like this for a 4-tuple:

        impl<
            Input,

            // `$last:`
            D:

            // `$(Module::<$rev_tail ::Output, Error = $first ::Error>, $rev_tail: )+`
            Module<C ::Output, Error = A::Error>, C:
            Module<B ::Output, Error = A::Error>, B:
            Module<A ::Output, Error = A::Error>, A:

            Module<Input>
        > Module<Input> for (A, B, C, D) {
            type Output = D::Output;
            type Error = A::Error;
            fn try_forward(&self, x: Input) -> Result<Self::Output, Self::Error> {
                let x = self.0.try_forward(x)?;
                let x = self.1.try_forward(x)?;
                let x = self.2.try_forward(x)?;
                let x = self.3.try_forward(x)?;
                Ok(x)
            }
        }
        */
        impl<
            Input,
            $last:
            $(Module::<$rev_tail ::Output, Error = $first ::Error>, $rev_tail: )*
            Module<Input>
        > Module<Input> for ($($name,)+) {
            type Output = $last ::Output;
            type Error = $first ::Error;

            /// Calls forward sequentially on each module in the tuple,
            /// stopping at the first error.
            fn try_forward(&self, x: Input) -> Result<Self::Output, Self::Error> {
                $(let x = self.$idx.try_forward(x)?;)+
                Ok(x)
            }

            /// Calls forward sequentially on each module in the tuple,
            /// stopping at the first error.
            fn try_forward_mut(&mut self, x: Input) -> Result<Self::Output, Self::Error> {
                $(let x = self.$idx.try_forward_mut(x)?;)+
                Ok(x)
            }
        }
    };
}

tuple_impls!([M1][0], M1, M1, []);
tuple_impls!([M1, M2] [0, 1], M1, M2, [M1]);
tuple_impls!([M1, M2, M3] [0, 1, 2], M1, M3, [M2, M1]);
tuple_impls!([M1, M2, M3, M4] [0, 1, 2, 3], M1, M4, [M3, M2, M1]);
tuple_impls!([M1, M2, M3, M4, M5] [0, 1, 2, 3, 4], M1, M5, [M4, M3, M2, M1]);
tuple_impls!([M1, M2, M3, M4, M5, M6] [0, 1, 2, 3, 4, 5], M1, M6, [M5, M4, M3, M2, M1]);
