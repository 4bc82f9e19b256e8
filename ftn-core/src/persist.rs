//! Explicit persistence capability.
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// A type that can be saved to and loaded from a YAML file.
///
/// There is no blanket implementation: deriving `Serialize`/`Deserialize` is
/// not enough, a type opts in with `impl Persist for T {}`.
///
/// ```rust
/// use ftn_core::Persist;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct RunConfig {
///     n_episodes: usize,
/// }
///
/// impl Persist for RunConfig {}
/// ```
pub trait Persist: Serialize + DeserializeOwned {
    /// Constructs the object from a YAML file.
    fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the object as YAML.
    fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempdir::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct EvalConfig {
        n_episodes: usize,
        name: String,
    }

    impl Persist for EvalConfig {}

    #[test]
    fn test_save_and_load() -> Result<()> {
        let config = EvalConfig {
            n_episodes: 5,
            name: "fruit".to_string(),
        };

        let dir = TempDir::new("persist")?;
        let path = dir.path().join("eval.yaml");
        config.save(&path)?;
        let config_ = EvalConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new("persist").unwrap();
        assert!(EvalConfig::load(dir.path().join("missing.yaml")).is_err());
    }
}
