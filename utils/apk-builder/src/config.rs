use std::env::{self, VarError};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::errors::{BuildErrKind, BuildResult};
use crate::places::Places;
use crate::tools::Platform;

pub const STENDHAL_REPO: &str = "https://github.com/arianne/stendhal.git";
pub const MARAUROA_REPO: &str = "https://github.com/arianne/marauroa.git";
pub const DEFAULT_BRANCH: &str = "master";

const STENDHAL_REPO_VAR: &str = "STENDHAL_REPO";
const MARAUROA_REPO_VAR: &str = "MARAUROA_REPO";
const BRANCH_VAR: &str = "SOURCE_BRANCH";

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub places: Places,
    pub platform: Platform,
    /// Game client sources, which also carry the android project.
    pub stendhal_repo: String,
    /// Networking library the client links against.
    pub marauroa_repo: String,
    pub branch: String,
}

impl BuildConfig {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            places: Places::new(root),
            platform: Platform::current(),
            stendhal_repo: STENDHAL_REPO.to_string(),
            marauroa_repo: MARAUROA_REPO.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        }
    }

    /// Defaults, overridden by `build.env` in the project root (if there is one) and then by the
    /// process environment.
    pub fn from_env<P: Into<PathBuf>>(root: P) -> BuildResult<Self> {
        let config = Self::new(root);

        let env_file = config.places.env_file();
        if env_file.is_file() {
            info!("loading {}", env_file.display());
            dotenv::from_path(&env_file)?;
        }

        config.with_overrides(|key| env::var(key))
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> BuildResult<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        override_from(&lookup, STENDHAL_REPO_VAR, &mut self.stendhal_repo)?;
        override_from(&lookup, MARAUROA_REPO_VAR, &mut self.marauroa_repo)?;
        override_from(&lookup, BRANCH_VAR, &mut self.branch)?;
        Ok(self)
    }
}

fn override_from<F>(lookup: &F, key: &str, slot: &mut String) -> BuildResult<()>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => {
            Err(BuildErrKind::Env(format!("{key} is set but empty")).into())
        }
        Ok(value) => {
            debug!("{key}={value}");
            *slot = value.trim().to_string();
            Ok(())
        }
        Err(VarError::NotPresent) => Ok(()),
        Err(VarError::NotUnicode(_)) => {
            Err(BuildErrKind::Env(format!("{key} is not valid unicode")).into())
        }
    }
}
