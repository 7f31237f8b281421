//! Wraps plain functions as modules and uses them between layers.

use leafnn::prelude::*;

fn main() {
    let dev: Cpu = Default::default();

    // any unary function can become a module. extra arguments are bound
    // when the closure is created.
    let mut slope = 0.2;
    let leaky = Functional::new(move |x: Tensor<f32>| x.try_prelu(slope));
    slope = 0.9;
    println!("slope is now {slope}, but the module keeps using 0.2");

    // functional modules sit inside architectures like any other layer
    let model = dev.build_module::<f32>((
        LinearConfig::new(4, 8),
        leaky,
        LinearConfig::new(8, 2),
        Functional::new(|x: Tensor<f32>| x.try_sigmoid()),
    ));
    println!("{}", Pretty(&model));

    let x: Tensor<f32> = dev.tensor([[1.0, -1.0, 0.5, 2.0], [0.0, 0.3, -0.7, 1.1]]);
    let y = model.forward(x);
    println!("{y:?}");

    // errors from the wrapped function reach the caller unchanged
    let strict = Functional::new(|x: Tensor<f32>| {
        if x.as_slice().iter().all(|v| v.is_finite()) {
            Ok(x)
        } else {
            Err(format!("non finite input {x:?}"))
        }
    });
    let bad: Tensor<f32> = dev.tensor([1.0, f32::NAN]);
    if let Err(e) = strict.try_forward(bad) {
        println!("rejected: {e}");
    }

    // functional modules hold no state, so they contribute nothing to a
    // saved file
    #[cfg(feature = "safetensors")]
    {
        let bytes = model
            .to_safetensors_bytes()
            .expect("Failed to serialize model");
        let tensors =
            safetensors::SafeTensors::deserialize(&bytes).expect("Failed to read back model");
        let mut names = tensors.names();
        names.sort();
        println!("saved tensors: {names:?}");
    }
}
