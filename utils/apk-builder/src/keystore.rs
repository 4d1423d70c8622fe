use std::fs;

use tracing::info;

use crate::errors::{AtPath, BuildResult};
use crate::places::Places;

/// Copies `keystore.properties` from the project root into the android project so gradle can
/// sign the release build. Returns whether there was one to install.
pub fn install_keystore(places: &Places) -> BuildResult<bool> {
    let source = places.keystore_source();
    if !source.is_file() {
        info!("no {} found, release apk will be unsigned", source.display());
        return Ok(false);
    }

    let target = places.keystore_target();
    if target.is_file() {
        fs::remove_file(&target).at(&target)?;
    }
    fs::copy(&source, &target).at(&target)?;
    info!("installed signing config at {}", target.display());

    Ok(true)
}
