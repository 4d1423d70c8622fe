use tracing::info;

use crate::artifacts::{self, CollectedArtifact};
use crate::client;
use crate::config::BuildConfig;
use crate::errors::BuildResult;
use crate::keystore;
use crate::sources;
use crate::tools;

/// Everything, in order: sources, signing config, gradle, collection.
pub fn run_all(config: &BuildConfig) -> BuildResult<Vec<CollectedArtifact>> {
    prepare(config)?;
    build(config)
}

pub fn prepare(config: &BuildConfig) -> BuildResult<()> {
    sources::prepare_stendhal(config)?;
    sources::prepare_marauroa(config)?;
    Ok(())
}

pub fn build(config: &BuildConfig) -> BuildResult<Vec<CollectedArtifact>> {
    keystore::install_keystore(&config.places)?;
    let collected = client::build_client(config)?;
    report(&collected);
    Ok(collected)
}

pub fn collect(config: &BuildConfig) -> BuildResult<Vec<CollectedArtifact>> {
    let places = &config.places;
    let collected = artifacts::collect(&places.build_output_tree(), &places.output_dir())?;
    report(&collected);
    Ok(collected)
}

pub fn verify(config: &BuildConfig) -> BuildResult<()> {
    tools::verify_environment(config.platform, &config.places)?;
    info!("build environment looks good");
    Ok(())
}

fn report(collected: &[CollectedArtifact]) {
    if collected.is_empty() {
        info!("no apks were collected");
    }
    for artifact in collected {
        info!("ready: {}", artifact.destination.display());
    }
}
