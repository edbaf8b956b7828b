//! `.env` discovery and merging into the process environment.
//!
//! Values from the file only fill gaps: a variable that is already set keeps
//! its value.

use crate::core::error::Result;
use std::path::{Path, PathBuf};

pub const ENV_FILE_NAME: &str = ".env";

/// Parsed contents of an env file, one entry per key.
#[derive(Debug, Clone)]
pub struct EnvFile {
    path: PathBuf,
    entries: Vec<(String, String)>,
}

/// What a merge did to the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvLoad {
    pub path: Option<PathBuf>,
    pub applied: Vec<String>,
    pub kept: Vec<String>,
}

impl EnvFile {
    pub fn read(path: &Path) -> Result<Self> {
        let mut entries: Vec<(String, String)> = Vec::new();

        for item in dotenvy::from_path_iter(path)? {
            match item {
                Ok((key, value)) => {
                    // Later assignments of the same key win.
                    match entries.iter_mut().find(|(k, _)| *k == key) {
                        Some(entry) => entry.1 = value,
                        None => entries.push((key, value)),
                    }
                }
                // The line itself may hold a secret; report where, not what.
                Err(dotenvy::Error::LineParse(_, index)) => {
                    tracing::warn!(
                        path = %path.display(),
                        "skipping unparsable statement (error at offset {})",
                        index
                    );
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set every entry whose key `is_set` reports absent.
    pub fn merge_into<F, G>(&self, is_set: F, mut set: G) -> EnvLoad
    where
        F: Fn(&str) -> bool,
        G: FnMut(&str, &str),
    {
        let mut load = EnvLoad {
            path: Some(self.path.clone()),
            ..EnvLoad::default()
        };

        for (key, value) in &self.entries {
            if is_set(key) {
                load.kept.push(key.clone());
            } else {
                set(key, value);
                load.applied.push(key.clone());
            }
        }

        load
    }

    pub fn apply(&self) -> EnvLoad {
        self.merge_into(
            |key| std::env::var_os(key).is_some(),
            |key, value| std::env::set_var(key, value),
        )
    }
}

/// Look for `.env` in `start_dir` and then in each of its ancestors.
pub fn find_env_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let candidate = current.join(ENV_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        current = current.parent()?;
    }
}

pub fn load_dotenv_from(start_dir: &Path) -> Result<EnvLoad> {
    let Some(path) = find_env_file(start_dir) else {
        tracing::debug!(dir = %start_dir.display(), "no .env file found");
        return Ok(EnvLoad::default());
    };

    let file = EnvFile::read(&path)?;
    let load = file.apply();

    tracing::debug!(
        path = %path.display(),
        applied = load.applied.len(),
        kept = load.kept.len(),
        "loaded .env file"
    );

    Ok(load)
}

pub fn load_dotenv() -> Result<EnvLoad> {
    let current_dir = std::env::current_dir()?;
    load_dotenv_from(&current_dir)
}
