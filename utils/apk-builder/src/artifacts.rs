//! Gathering the packages gradle leaves scattered through its build directory.
//!
//! Every file under the search root whose name ends in [`ARTIFACT_EXTENSION`] is moved into a
//! flat output directory. Release builds lose their `-release` marker on the way, so
//! `app-release.apk` lands as `app.apk` while `app-debug.apk` keeps its name.
//!
//! Artifacts are processed in the order the walk finds them, which is whatever order the
//! filesystem lists directories in. When two of them end up with the same target name, the one
//! processed last is what remains in the output directory. Debug and release builds are expected
//! to never collide, so this is reported but not treated as an error.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::errors::{AtPath, BuildResult};

pub const ARTIFACT_EXTENSION: &str = ".apk";
pub const RELEASE_MARKER: &str = "-release";

/// A package found somewhere in the build output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub file_name: String,
}

impl Artifact {
    pub fn target_name(&self) -> String {
        target_name(&self.file_name)
    }
}

/// Where an artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedArtifact {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// A file already sat at `destination` and was deleted to make room.
    pub replaced: bool,
}

pub fn is_artifact(file_name: &str) -> bool {
    file_name.ends_with(ARTIFACT_EXTENSION)
}

pub fn target_name(file_name: &str) -> String {
    let release_suffix = format!("{RELEASE_MARKER}{ARTIFACT_EXTENSION}");
    match file_name.strip_suffix(release_suffix.as_str()) {
        Some(stem) => format!("{stem}{ARTIFACT_EXTENSION}"),
        None => file_name.to_string(),
    }
}

/// Finds every artifact under `root`. A root that doesn't exist simply has none.
pub fn discover(root: &Path) -> Vec<Artifact> {
    if !root.is_dir() {
        debug!("{} does not exist, nothing to collect", root.display());
        return vec![];
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // non utf-8 names can't carry the extension marker
        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };

        if is_artifact(file_name) {
            found.push(Artifact {
                path: entry.path().to_path_buf(),
                file_name: file_name.to_string(),
            });
        }
    }

    found
}

/// Moves every artifact under `root` into `output_dir` under its target name. `output_dir` must
/// already exist. The first file that can't be removed or moved aborts the whole collection.
pub fn collect(root: &Path, output_dir: &Path) -> BuildResult<Vec<CollectedArtifact>> {
    let artifacts = discover(root);
    info!("found {} artifact(s) under {}", artifacts.len(), root.display());

    let mut placed = HashSet::new();
    let mut collected = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let destination = output_dir.join(artifact.target_name());

        if artifact.path == destination {
            debug!("{} is already in place", destination.display());
            continue;
        }

        let replaced = destination.is_file();
        if replaced {
            if placed.contains(&destination) {
                warn!(
                    "{} replaces an artifact collected earlier in this run at {}",
                    artifact.path.display(),
                    destination.display()
                );
            }
            fs::remove_file(&destination).at(&destination)?;
        }

        move_file(&artifact.path, &destination)?;
        info!("{} -> {}", artifact.path.display(), destination.display());

        placed.insert(destination.clone());
        collected.push(CollectedArtifact { source: artifact.path, destination, replaced });
    }

    Ok(collected)
}

fn move_file(from: &Path, to: &Path) -> BuildResult<()> {
    if let Err(err) = fs::rename(from, to) {
        // rename can't cross filesystems
        debug!("rename {} failed ({err}), copying instead", from.display());
        fs::copy(from, to).at(to)?;
        fs::remove_file(from).at(from)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_marker_stripped() {
        assert_eq!(target_name("app-release.apk"), "app.apk");
        assert_eq!(
            target_name("stendhal-webview-20240119-release.apk"),
            "stendhal-webview-20240119.apk"
        );
    }

    #[test]
    fn other_names_verbatim() {
        assert_eq!(target_name("app-debug.apk"), "app-debug.apk");
        assert_eq!(target_name("app.apk"), "app.apk");
        assert_eq!(target_name("app-release-unsigned.apk"), "app-release-unsigned.apk");
        assert_eq!(target_name("app-release.aab"), "app-release.aab");
    }

    #[test]
    fn only_the_trailing_marker_is_stripped() {
        assert_eq!(target_name("release-release.apk"), "release.apk");
        assert_eq!(target_name("-release.apk"), ".apk");
    }

    #[test]
    fn naming_is_stable_once_stripped() {
        for name in ["app-release.apk", "app-debug.apk", "app.apk", "webview-release.apk"] {
            let once = target_name(name);
            assert_eq!(target_name(&once), once);
        }
    }

    #[test]
    fn recognises_extension() {
        assert!(is_artifact("app-debug.apk"));
        assert!(!is_artifact("notes.txt"));
        assert!(!is_artifact("app.APK"));
        assert!(!is_artifact("app.apk.idsig"));
    }
}
