use std::fs;
use std::path::Path;

use apk_builder::ensure::Ensured;
use apk_builder::keystore::install_keystore;
use apk_builder::sources::{prepare_marauroa, prepare_stendhal};
use apk_builder::errors::BuildErrKind;
use apk_builder::tools::verify_environment;
use apk_builder::{BuildConfig, Tool};
use tempfile::tempdir;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn keystore_copied_into_android_project() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    let places = &config.places;
    write(&places.keystore_source(), "storePassword=hunter2\n");
    fs::create_dir_all(places.android_dir()).unwrap();

    assert!(install_keystore(places).unwrap());
    assert_eq!(fs::read_to_string(places.keystore_target()).unwrap(), "storePassword=hunter2\n");
    assert!(places.keystore_source().exists());
}

#[test]
fn keystore_replaces_old_copy() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    let places = &config.places;
    write(&places.keystore_source(), "new");
    write(&places.keystore_target(), "old");

    install_keystore(places).unwrap();

    assert_eq!(fs::read_to_string(places.keystore_target()).unwrap(), "new");
}

#[test]
fn no_keystore_is_fine() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    fs::create_dir_all(config.places.android_dir()).unwrap();

    assert!(!install_keystore(&config.places).unwrap());
    assert!(!config.places.keystore_target().exists());
}

#[test]
fn existing_android_project_left_alone() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    write(&config.places.android_dir().join("build.gradle"), "local edits");

    assert_eq!(prepare_stendhal(&config).unwrap(), Ensured::AlreadyPresent);
    assert_eq!(
        fs::read_to_string(config.places.android_dir().join("build.gradle")).unwrap(),
        "local edits"
    );
    assert!(!config.places.stendhal_dir().exists());
}

#[test]
fn android_project_copied_from_cloned_client() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    let places = &config.places;
    write(&places.stendhal_build_file(), "<project/>");
    write(&places.stendhal_android_dir().join("build.gradle"), "plugins {}");
    write(&places.stendhal_android_dir().join("app/src/main/AndroidManifest.xml"), "<manifest/>");

    assert_eq!(prepare_stendhal(&config).unwrap(), Ensured::Established);

    let android = places.android_dir();
    assert_eq!(fs::read_to_string(android.join("build.gradle")).unwrap(), "plugins {}");
    assert_eq!(
        fs::read_to_string(android.join("app/src/main/AndroidManifest.xml")).unwrap(),
        "<manifest/>"
    );
    assert!(!android.join("android").exists());
    assert!(places.stendhal_android_dir().join("build.gradle").exists());
}

#[test]
fn marauroa_ready_means_nothing_to_do() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    write(&config.places.marauroa_build_file(), "<project/>");
    write(&config.places.marauroa_jar(), "jar");

    prepare_marauroa(&config).unwrap();

    assert_eq!(fs::read_to_string(config.places.marauroa_jar()).unwrap(), "jar");
}

#[test]
fn verify_names_missing_wrapper() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    let android = config.places.android_dir();
    fs::create_dir_all(&android).unwrap();

    let err = verify_environment(config.platform, &config.places).unwrap_err();

    let wrapper = Tool::Gradlew.program(config.platform, &android);
    match err.kind {
        BuildErrKind::ToolsMissing(missing) => {
            assert!(missing.contains(&wrapper.display().to_string()), "{missing:?}")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn failed_copy_names_the_source() {
    let dir = tempdir().unwrap();
    let config = BuildConfig::new(dir.path());
    write(&config.places.stendhal_build_file(), "<project/>");

    let err = prepare_stendhal(&config).unwrap_err();

    match err.kind {
        BuildErrKind::Io { path, .. } => {
            assert_eq!(path, Some(config.places.stendhal_android_dir()))
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
