// src/core/config.rs
mod loader;

pub use loader::{CONFIG_FILE, load_config};

use crate::cli::Args;
use crate::core::scanner::policy::Policy;
use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_MANUSCRIPT: &str = "manuscript.md";
pub const DEFAULT_TABLE_MAP: &str = "tables/tables.yml";
pub const DEFAULT_OUTPUT: &str = "build/submission";

/// Project defaults read from `mrt.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub manuscript: Option<PathBuf>,
    pub table_map: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub policy: Option<Policy>,
    /// Directory the file was found in; relative paths above resolve against it.
    #[serde(skip)]
    pub base: Option<PathBuf>,
}

/// Fully resolved inputs for one run. All paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub manuscript: PathBuf,
    pub table_map: PathBuf,
    pub output: PathBuf,
    pub policy: Policy,
    pub dry_run: bool,
}

impl Settings {
    /// Merges command-line arguments over `config` over built-in defaults.
    ///
    /// Relative command-line paths and defaults are resolved against the
    /// project directory, relative config paths against the config's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the project directory is relative and the current
    /// directory cannot be determined.
    pub fn resolve(args: &Args, config: Config) -> Result<Self> {
        let root = absolute(&args.directory)?;

        let base = config.base.as_deref().unwrap_or(&root);

        let pick = |cli: Option<&PathBuf>, file: Option<PathBuf>, default: &str| {
            match (cli, file) {
                (Some(path), _) => root.join(path),
                (None, Some(path)) => base.join(path),
                (None, None) => root.join(default),
            }
        };

        let manuscript = pick(args.manuscript.as_ref(), config.manuscript, DEFAULT_MANUSCRIPT);
        let table_map = pick(args.table_map.as_ref(), config.table_map, DEFAULT_TABLE_MAP);
        let output = pick(args.output.as_ref(), config.output, DEFAULT_OUTPUT);
        let policy = args.policy.or(config.policy).unwrap_or_default();

        Ok(Self {
            root,
            manuscript,
            table_map,
            output,
            policy,
            dry_run: args.dry_run,
        })
    }
}

fn absolute(dir: &Path) -> Result<PathBuf> {
    Ok(if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        env::current_dir()?.join(dir)
    })
}
