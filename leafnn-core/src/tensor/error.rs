/// Represents a number of different errors that can occur from creating tensors,
/// launching tensor operations or moving tensors in and out of safetensors.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// Device is out of memory
    OutOfMemory,
    /// Not enough elements were provided when creating a tensor
    WrongNumElements,
    /// The operands of an op have shapes the op cannot combine.
    ShapeMismatch {
        op: &'static str,
        lhs: std::vec::Vec<usize>,
        rhs: std::vec::Vec<usize>,
    },
    Io(std::io::Error),

    #[cfg(feature = "safetensors")]
    WrongDtype {
        expected: safetensors::Dtype,
        found: safetensors::Dtype,
    },

    #[cfg(feature = "safetensors")]
    SafeTensors(safetensors::SafeTensorError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(feature = "safetensors")]
impl From<safetensors::SafeTensorError> for Error {
    fn from(err: safetensors::SafeTensorError) -> Self {
        Self::SafeTensors(err)
    }
}
