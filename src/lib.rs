use std::path::Path;

use anyhow::Context;

pub mod generator;
pub mod manifest;
pub mod params;

pub use self::generator::{ClusterAccess, GenerateError, Generator, RequeueAfter};
pub use self::manifest::{GeneratorSpec, ParamSet};
pub use self::params::ParamMap;

pub fn load_param_set(path: impl AsRef<Path>) -> anyhow::Result<ParamSet> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(anyhow::anyhow!(
            "load param set: path does not exist: {}",
            path.display()
        ));
    }

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening param set {}", path.display()))?;
    serde_yaml::from_reader(file).with_context(|| format!("parsing param set {}", path.display()))
}
