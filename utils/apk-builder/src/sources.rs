use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::CopyOptions;
use tracing::info;

use crate::config::BuildConfig;
use crate::ensure::{ensure, Ensured};
use crate::errors::{AtPath, BuildErrKind, BuildResult};
use crate::places;
use crate::tools::{Platform, Tool};
use crate::utils::CommandRunner;

/// Shallow, single branch clone of `url` into `target`. A relative `target` is taken relative to
/// the current directory.
pub fn clone_source(platform: Platform, url: &str, target: &Path, branch: &str) -> BuildResult<()> {
    let target = places::absolute(target);
    info!("Cloning \"{url}\" to \"{}\"", target.display());

    fs::create_dir_all(&target).at(&target)?;
    let parent = target.parent().unwrap_or(target.as_path());
    let branch = format!("--branch={branch}");
    Tool::Git
        .command(platform, parent)
        .args(["clone", "--single-branch", branch.as_str(), "--depth=1", url])
        .arg(&target)
        .assert_success()
}

/// Makes sure the android project exists, cloning the game client to get it if needed.
pub fn prepare_stendhal(config: &BuildConfig) -> BuildResult<Ensured> {
    let places = &config.places;

    ensure("android project", || places.android_dir().exists(), || {
        ensure(
            "game client sources",
            || places.stendhal_build_file().exists(),
            || {
                clone_source(
                    config.platform,
                    &config.stendhal_repo,
                    &places.stendhal_dir(),
                    &config.branch,
                )
            },
        )?;

        copy_tree(&places.stendhal_android_dir(), &places.android_dir())
    })
}

/// Makes sure the networking library is checked out inside the android project and its jar is
/// built.
pub fn prepare_marauroa(config: &BuildConfig) -> BuildResult<()> {
    let places = &config.places;
    let marauroa_dir = places.marauroa_dir();

    ensure(
        "networking library sources",
        || places.marauroa_build_file().exists(),
        || clone_source(config.platform, &config.marauroa_repo, &marauroa_dir, &config.branch),
    )?;

    ensure(
        "networking library jar",
        || places.marauroa_jar().is_file(),
        || {
            Tool::Ant
                .command(config.platform, &marauroa_dir)
                .arg("jar")
                .assert_success()
        },
    )?;

    Ok(())
}

fn copy_tree(from: &Path, to: &Path) -> BuildResult<()> {
    info!("copying {} to {}", from.display(), to.display());

    fs::create_dir_all(to).at(to)?;
    let mut options = CopyOptions::new();
    options.content_only = true;
    fs_extra::dir::copy(from, to, &options).map_err(|err| BuildErrKind::Io {
        path: Some(from.to_path_buf()),
        err: io::Error::new(io::ErrorKind::Other, format!("copying to {}: {err}", to.display())),
    })?;

    Ok(())
}
