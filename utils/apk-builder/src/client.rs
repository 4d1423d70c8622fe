use tracing::info;

use crate::artifacts::{self, CollectedArtifact};
use crate::config::BuildConfig;
use crate::errors::BuildResult;
use crate::tools::Tool;
use crate::utils::CommandRunner;

pub const GRADLE_TASKS: [&str; 2] = ["assembleDebug", "assembleRelease"];

/// Assembles debug and release apks and moves them into the output directory.
pub fn build_client(config: &BuildConfig) -> BuildResult<Vec<CollectedArtifact>> {
    let places = &config.places;

    info!("Building android client");
    Tool::Gradlew
        .command(config.platform, &places.android_dir())
        .args(GRADLE_TASKS)
        .assert_success()?;

    artifacts::collect(&places.build_output_tree(), &places.output_dir())
}
