//! `eqsolve config [--init]`

use std::path::Path;

use anyhow::{bail, Context};

use crate::config::SolverConfig;
use crate::io::atomic::atomic_write;

pub fn main(config: &SolverConfig, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    if !init {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }
    let Some(path) = path else {
        bail!("no config path: pass --config FILE (home directory not found)");
    };
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    let txt = SolverConfig::default().to_toml_string()?;
    atomic_write(path, txt.as_bytes()).with_context(|| format!("writing {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_defaults_once() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("cfg").join("config.toml");
        main(&SolverConfig::default(), Some(p.as_path()), true).unwrap();
        assert_eq!(SolverConfig::from_toml_file(&p).unwrap(), SolverConfig::default());
        assert!(main(&SolverConfig::default(), Some(p.as_path()), true).is_err());
    }
}
