use super::{Error, Tensor};
use crate::dtypes::Dtype;
use safetensors::tensor::SafeTensors;
use std::{sync::Arc, vec::Vec};

impl<E: Dtype> Tensor<E> {
    /// Loads data from the [SafeTensors] entry with the given `key`. The
    /// stored dtype and shape must match this tensor's.
    pub fn load_safetensor(&mut self, tensors: &SafeTensors<'_>, key: &str) -> Result<(), Error> {
        let view = tensors.tensor(key)?;
        if view.dtype() != E::DTYPE {
            return Err(Error::WrongDtype {
                expected: E::DTYPE,
                found: view.dtype(),
            });
        }
        if view.shape() != self.shape.as_slice() {
            return Err(Error::ShapeMismatch {
                op: "load_safetensor",
                lhs: self.shape.clone(),
                rhs: view.shape().to_vec(),
            });
        }
        let data: Vec<E> = view
            .data()
            .chunks_exact(E::NUM_BYTES)
            .map(E::read_le_bytes)
            .collect();
        self.data = Arc::new(data);
        Ok(())
    }

    /// Little endian bytes of every element, in row-major order.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.num_elements() * E::NUM_BYTES);
        for x in self.data.iter() {
            x.write_le_bytes(&mut bytes);
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use crate::tests::*;
    use safetensors::tensor::TensorView;

    fn serialize_one(
        name: &str,
        dtype: safetensors::Dtype,
        shape: Vec<usize>,
        data: &[u8],
    ) -> Vec<u8> {
        let view = TensorView::new(dtype, shape, data).unwrap();
        safetensors::serialize([(name.to_string(), &view)], &None).unwrap()
    }

    #[test]
    fn test_load_round_trips_values() {
        let dev: TestDevice = Default::default();
        let src: Tensor<TestDtype> = dev.tensor([[1.0, 2.0, 3.0], [-4.0, 5.5, 6.0]]);
        let buffer = serialize_one("w", TestDtype::DTYPE, vec![2, 3], &src.to_le_bytes());
        let tensors = SafeTensors::deserialize(&buffer).unwrap();

        let mut dst: Tensor<TestDtype> = dev.zeros(&[2, 3]);
        dst.load_safetensor(&tensors, "w").unwrap();
        assert_eq!(dst.as_vec(), src.as_vec());
    }

    #[test]
    fn test_load_rejects_wrong_shape() {
        let dev: TestDevice = Default::default();
        let src: Tensor<TestDtype> = dev.tensor([1.0, 2.0, 3.0, 4.0]);
        let buffer = serialize_one("w", TestDtype::DTYPE, vec![4], &src.to_le_bytes());
        let tensors = SafeTensors::deserialize(&buffer).unwrap();

        let mut dst: Tensor<TestDtype> = dev.zeros(&[2, 2]);
        let err = dst.load_safetensor(&tensors, "w").unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
        assert_eq!(dst.as_vec(), vec![0.0; 4]);
    }

    #[test]
    fn test_load_rejects_wrong_dtype() {
        let dev: TestDevice = Default::default();
        let src: Tensor<u8> = Tensor {
            data: Arc::new(vec![0u8; 4]),
            shape: vec![4],
            device: dev.clone(),
        };
        let buffer = serialize_one("w", safetensors::Dtype::U8, vec![4], src.as_slice());
        let tensors = SafeTensors::deserialize(&buffer).unwrap();

        let mut dst: Tensor<TestDtype> = dev.zeros(&[4]);
        let err = dst.load_safetensor(&tensors, "w").unwrap_err();
        assert!(matches!(err, Error::WrongDtype { .. }));
    }

    #[test]
    fn test_load_missing_key() {
        let dev: TestDevice = Default::default();
        let src: Tensor<TestDtype> = dev.tensor([1.0]);
        let buffer = serialize_one("w", TestDtype::DTYPE, vec![1], &src.to_le_bytes());
        let tensors = SafeTensors::deserialize(&buffer).unwrap();

        let mut dst: Tensor<TestDtype> = dev.zeros(&[1]);
        let err = dst.load_safetensor(&tensors, "b").unwrap_err();
        assert!(matches!(err, Error::SafeTensors(_)));
    }
}
