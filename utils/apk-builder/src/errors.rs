use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

pub type BuildResult<T> = Result<T, BuildErr>;

#[derive(Debug)]
pub struct BuildErr {
    pub kind: BuildErrKind,
}

#[derive(Debug)]
pub enum BuildErrKind {
    /// The process ran and exited unsuccessfully. `status` is `None` when it was killed by a
    /// signal.
    CommandFailed { command: String, status: Option<i32> },
    /// The process could not be started at all.
    Spawn { command: String, err: io::Error },
    ToolsMissing(Vec<String>),
    Io { path: Option<PathBuf>, err: io::Error },
    Env(String),
}

impl BuildErr {
    /// The status this process should exit with. Failed external commands hand their own
    /// status through so CI sees the toolchain's exit code.
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            BuildErrKind::CommandFailed { status: Some(code), .. } if code != 0 => code,
            _ => 1,
        }
    }
}

impl Display for BuildErr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl Display for BuildErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BuildErrKind::CommandFailed { command, status: Some(code) } => {
                write!(f, "Failed to execute \"{command}\" (exit status {code})")
            }
            BuildErrKind::CommandFailed { command, status: None } => {
                write!(f, "Failed to execute \"{command}\" (terminated by signal)")
            }
            BuildErrKind::Spawn { command, err } => {
                write!(f, "Failed to execute \"{command}\": {err}")
            }
            BuildErrKind::ToolsMissing(tools) => {
                write!(f, "required tools not found: {}", tools.join(", "))
            }
            BuildErrKind::Io { path: Some(path), err } => write!(f, "{}: {err}", path.display()),
            BuildErrKind::Io { path: None, err } => write!(f, "{err}"),
            BuildErrKind::Env(msg) => write!(f, "invalid build environment: {msg}"),
        }
    }
}

impl Error for BuildErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            BuildErrKind::Spawn { err, .. } | BuildErrKind::Io { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<BuildErrKind> for BuildErr {
    fn from(kind: BuildErrKind) -> Self {
        Self { kind }
    }
}

impl From<io::Error> for BuildErr {
    fn from(err: io::Error) -> Self {
        BuildErrKind::Io { path: None, err }.into()
    }
}

impl From<dotenv::Error> for BuildErr {
    fn from(err: dotenv::Error) -> Self {
        BuildErrKind::Env(err.to_string()).into()
    }
}

/// Attaches the path an io operation was working on, so failures name the file involved.
pub trait AtPath<T> {
    fn at<P: AsRef<Path>>(self, path: P) -> BuildResult<T>;
}

impl<T> AtPath<T> for io::Result<T> {
    fn at<P: AsRef<Path>>(self, path: P) -> BuildResult<T> {
        self.map_err(|err| BuildErrKind::Io { path: Some(path.as_ref().to_path_buf()), err }.into())
    }
}
