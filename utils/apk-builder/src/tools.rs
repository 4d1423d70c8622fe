use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::errors::{BuildErrKind, BuildResult};
use crate::places::{self, Places};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }
}

/// External programs the build shells out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Git,
    Ant,
    /// The gradle wrapper script checked into the android project, not a system install.
    Gradlew,
}

impl Tool {
    pub const SYSTEM: [Tool; 2] = [Tool::Git, Tool::Ant];

    fn base_name(self) -> &'static str {
        match self {
            Tool::Git => "git",
            Tool::Ant => "ant",
            Tool::Gradlew => "gradlew",
        }
    }

    fn windows_extension(self) -> &'static str {
        match self {
            Tool::Git => "exe",
            Tool::Ant | Tool::Gradlew => "bat",
        }
    }

    pub fn is_wrapper(self) -> bool {
        self == Tool::Gradlew
    }

    pub fn file_name(self, platform: Platform) -> String {
        match platform {
            Platform::Unix => self.base_name().to_string(),
            Platform::Windows => format!("{}.{}", self.base_name(), self.windows_extension()),
        }
    }

    /// What to hand `Command::new` when running this tool from `dir`. Wrappers resolve to an
    /// absolute path inside `dir`, system tools are left to `PATH`.
    pub fn program(self, platform: Platform, dir: &Path) -> PathBuf {
        if self.is_wrapper() {
            places::absolute(dir).join(self.file_name(platform))
        } else {
            PathBuf::from(self.file_name(platform))
        }
    }

    pub fn command(self, platform: Platform, dir: &Path) -> Command {
        let dir = places::absolute(dir);
        let mut command = Command::new(self.program(platform, &dir));
        command.current_dir(dir);
        command
    }
}

/// Checks that every tool the build will need can actually be found, reporting all the missing
/// ones at once.
pub fn verify_environment(platform: Platform, places: &Places) -> BuildResult<()> {
    let mut missing = vec![];

    for tool in Tool::SYSTEM {
        let name = tool.file_name(platform);
        match which::which(&name) {
            Ok(path) => debug!("found {name} at {}", path.display()),
            Err(err) => {
                warn!("{name} not found: {err}");
                missing.push(name);
            }
        }
    }

    let android_dir = places.android_dir();
    if android_dir.is_dir() {
        let wrapper = Tool::Gradlew.program(platform, &android_dir);
        if wrapper.is_file() {
            debug!("found gradle wrapper at {}", wrapper.display());
        } else {
            warn!("gradle wrapper missing from {}", android_dir.display());
            missing.push(wrapper.display().to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(BuildErrKind::ToolsMissing(missing).into())
    }
}

#[cfg(test)]
mod tests {
    use super::{Platform, Tool};
    use std::env;
    use std::path::Path;

    #[test]
    fn unix_names_are_bare() {
        assert_eq!(Tool::Git.file_name(Platform::Unix), "git");
        assert_eq!(Tool::Ant.file_name(Platform::Unix), "ant");
        assert_eq!(Tool::Gradlew.file_name(Platform::Unix), "gradlew");
    }

    #[test]
    fn windows_names_carry_extension() {
        assert_eq!(Tool::Git.file_name(Platform::Windows), "git.exe");
        assert_eq!(Tool::Ant.file_name(Platform::Windows), "ant.bat");
        assert_eq!(Tool::Gradlew.file_name(Platform::Windows), "gradlew.bat");
    }

    #[test]
    fn wrapper_resolves_inside_dir() {
        let dir = Path::new("/work/android");

        assert_eq!(Tool::Gradlew.program(Platform::Unix, dir), dir.join("gradlew"));
        assert_eq!(Tool::Gradlew.program(Platform::Windows, dir), dir.join("gradlew.bat"));
        assert_eq!(Tool::Ant.program(Platform::Unix, dir), Path::new("ant"));
    }

    #[test]
    fn command_runs_in_dir() {
        let dir = Path::new("/work/android/deps/marauroa");
        let command = Tool::Ant.command(Platform::Unix, dir);

        assert_eq!(command.get_current_dir(), Some(dir));
        assert_eq!(command.get_program(), "ant");
    }

    #[test]
    fn relative_dir_resolved_once() {
        let dir = Path::new("client/android");
        let expected = env::current_dir().unwrap().join(dir);
        let command = Tool::Gradlew.command(Platform::Unix, dir);

        assert_eq!(command.get_current_dir(), Some(expected.as_path()));
        assert_eq!(command.get_program(), expected.join("gradlew").as_os_str());
    }
}
