use std::path::{self, Path, PathBuf};

/// Where everything lives, relative to an explicit project root. Nothing in this crate changes
/// the process working directory; every step is handed absolute paths from here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Places {
    root: PathBuf,
}

impl Places {
    /// A relative root is resolved against the current directory once, here.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: absolute(root.into()) }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn env_file(&self) -> PathBuf {
        self.root.join("build.env")
    }

    pub fn stendhal_dir(&self) -> PathBuf {
        self.root.join("stendhal")
    }

    pub fn stendhal_build_file(&self) -> PathBuf {
        self.stendhal_dir().join("build.xml")
    }

    pub fn stendhal_android_dir(&self) -> PathBuf {
        self.stendhal_dir().join("android")
    }

    /// The gradle project, copied out of the game client sources.
    pub fn android_dir(&self) -> PathBuf {
        self.root.join("android")
    }

    pub fn marauroa_dir(&self) -> PathBuf {
        let mut path = self.android_dir();
        path.push("deps");
        path.push("marauroa");
        path
    }

    pub fn marauroa_build_file(&self) -> PathBuf {
        self.marauroa_dir().join("build.xml")
    }

    pub fn marauroa_jar(&self) -> PathBuf {
        let mut path = self.marauroa_dir();
        path.push("build-archive");
        path.push("marauroa.jar");
        path
    }

    pub fn keystore_source(&self) -> PathBuf {
        self.root.join("keystore.properties")
    }

    pub fn keystore_target(&self) -> PathBuf {
        self.android_dir().join("keystore.properties")
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join("build")
    }

    /// Gradle's build directory for the client, as configured by the android project.
    pub fn build_output_tree(&self) -> PathBuf {
        self.output_dir().join("build_android_client")
    }
}

/// `path` made absolute against the current directory. Paths that can't be resolved (empty, or
/// no current directory) come back unchanged.
pub fn absolute<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
