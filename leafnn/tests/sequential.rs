use leafnn::prelude::*;

type Activation = fn(Tensor<f32>) -> Result<Tensor<f32>, Error>;

fn half_leaky(x: Tensor<f32>) -> Result<Tensor<f32>, Error> {
    x.try_prelu(0.5)
}

fn arch() -> (LinearConfig, Functional<Activation>, LinearConfig) {
    (
        LinearConfig::new(3, 4),
        Functional::new(half_leaky as Activation),
        LinearConfig::new(4, 2),
    )
}

#[test]
fn test_forward_through_functional() {
    let dev = Cpu::seed_from_u64(1);
    let m = dev.build_module::<f32>(arch());

    let x: Tensor<f32> = dev.tensor([[1.0, -2.0, 0.5], [0.0, 3.0, -1.0]]);
    let hidden = m.0.forward(x.clone()).prelu(0.5);
    let expected = m.2.forward(hidden);

    let y = m.forward(x);
    assert_eq!(y.shape(), &[2, 2]);
    assert_eq!(y.as_vec(), expected.as_vec());
}

#[test]
fn test_pretty_print() {
    let dev: Cpu = Default::default();
    let m = dev.build_module::<f32>((arch(), ReLU));
    assert_eq!(
        Pretty(&m).to_string(),
        "Sequential(
  (0): Sequential(
    (0): Linear(in_features=3, out_features=4)
    (1): Functional()
    (2): Linear(in_features=4, out_features=2)
  )
  (1): ReLU()
)"
    );
}

#[cfg(feature = "safetensors")]
#[test]
fn test_functional_contributes_no_keys() {
    let dev: Cpu = Default::default();
    let m = dev.build_module::<f32>(arch());
    let bytes = m.to_safetensors_bytes().unwrap();
    let tensors = safetensors::SafeTensors::deserialize(&bytes).unwrap();
    let mut names = tensors.names();
    names.sort();
    assert_eq!(names, ["0.bias", "0.weight", "2.bias", "2.weight"]);
}

#[cfg(feature = "safetensors")]
#[test]
fn test_save_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.safetensors");

    let saved = Cpu::seed_from_u64(2).build_module::<f32>(arch());
    saved.save_safetensors(&path).unwrap();

    let mut loaded = Cpu::seed_from_u64(3).build_module::<f32>(arch());
    assert_ne!(loaded.0.weight.as_vec(), saved.0.weight.as_vec());
    loaded.load_safetensors(&path).unwrap();

    assert_eq!(loaded.0.weight.as_vec(), saved.0.weight.as_vec());
    assert_eq!(loaded.2.bias.as_vec(), saved.2.bias.as_vec());

    let dev: Cpu = Default::default();
    let x: Tensor<f32> = dev.tensor([0.25, -0.75, 1.5]);
    assert_eq!(
        loaded.forward(x.clone()).as_vec(),
        saved.forward(x).as_vec()
    );
}

#[cfg(feature = "safetensors")]
#[test]
fn test_load_missing_key_fails() {
    let dev: Cpu = Default::default();
    let small = dev.build_module::<f32>(LinearConfig::new(3, 4));
    let bytes = small.to_safetensors_bytes().unwrap();

    let mut m = dev.build_module::<f32>(arch());
    let r = m.load_safetensors_bytes(&bytes);
    assert!(matches!(r, Err(Error::SafeTensors(_))));
}

#[test]
fn test_error_from_functional_reaches_caller() {
    let dev: Cpu = Default::default();
    let m = dev.build_module::<f32>((
        LinearConfig::new(3, 3),
        Functional::new(|x: Tensor<f32>| -> Result<Tensor<f32>, Error> {
            Err(Error::ShapeMismatch {
                op: "reject",
                lhs: x.shape().to_vec(),
                rhs: Vec::new(),
            })
        }),
        ReLU,
    ));
    let x: Tensor<f32> = dev.zeros(&[3]);
    match m.try_forward(x) {
        Err(Error::ShapeMismatch { op, lhs, rhs }) => {
            assert_eq!(op, "reject");
            assert_eq!(lhs, [3]);
            assert!(rhs.is_empty());
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_module_list_of_functionals() {
    let dev: Cpu = Default::default();
    let add_one: Activation = |x| x.try_add_scalar(1.0);
    let m = vec![Functional::new(add_one); 3];
    let x: Tensor<f32> = dev.tensor([0.0, 1.0]);
    assert_eq!(m.forward(x).as_vec(), [3.0, 4.0]);
    assert_eq!(
        Pretty(&m).to_string(),
        "ModuleList(\n  (0): Functional()\n  (1): Functional()\n  (2): Functional()\n)"
    );
}
