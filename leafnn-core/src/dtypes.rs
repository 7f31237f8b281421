//! Element type traits. Contains [Unit], [Dtype] and, with the `safetensors`
//! feature, [SafeTensorsDtype].

/// Represents a unit type, but no arithmetic.
pub trait Unit:
    'static
    + Copy
    + Clone
    + Default
    + std::fmt::Debug
    + std::fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + std::marker::Unpin
{
    const ONE: Self;
}

impl Unit for f32 {
    const ONE: Self = 1.0;
}

impl Unit for f64 {
    const ONE: Self = 1.0;
}

/// Little endian encoding plus the matching safetensors dtype tag.
#[cfg(feature = "safetensors")]
pub trait SafeTensorsDtype: Sized {
    const DTYPE: safetensors::Dtype;
    const NUM_BYTES: usize = std::mem::size_of::<Self>();

    fn write_le_bytes(&self, out: &mut std::vec::Vec<u8>);

    /// `bytes` must hold exactly [Self::NUM_BYTES] bytes.
    fn read_le_bytes(bytes: &[u8]) -> Self;
}

#[cfg(feature = "safetensors")]
macro_rules! safetensors_dtype {
    ($type:ty, $dtype:expr) => {
        impl SafeTensorsDtype for $type {
            const DTYPE: safetensors::Dtype = $dtype;

            fn write_le_bytes(&self, out: &mut std::vec::Vec<u8>) {
                out.extend_from_slice(&self.to_le_bytes());
            }

            fn read_le_bytes(bytes: &[u8]) -> Self {
                let mut buf = [0u8; std::mem::size_of::<$type>()];
                buf.copy_from_slice(bytes);
                Self::from_le_bytes(buf)
            }
        }
    };
}

#[cfg(feature = "safetensors")]
safetensors_dtype!(f32, safetensors::Dtype::F32);
#[cfg(feature = "safetensors")]
safetensors_dtype!(f64, safetensors::Dtype::F64);

/// Represents a floating point element that tensor ops and layers can
/// compute with.
#[cfg(feature = "safetensors")]
pub trait Dtype:
    Unit + num_traits::Float + rand_distr::uniform::SampleUniform + SafeTensorsDtype
{
    fn from_f64(value: f64) -> Self;
}

/// Represents a floating point element that tensor ops and layers can
/// compute with.
#[cfg(not(feature = "safetensors"))]
pub trait Dtype: Unit + num_traits::Float + rand_distr::uniform::SampleUniform {
    fn from_f64(value: f64) -> Self;
}

impl Dtype for f32 {
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Dtype for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}
