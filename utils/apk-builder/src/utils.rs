use std::process::Command;

use tracing::info;

use crate::errors::{BuildErrKind, BuildResult};

pub trait CommandRunner {
    fn assert_success(&mut self) -> BuildResult<()>;
}

impl CommandRunner for Command {
    fn assert_success(&mut self) -> BuildResult<()> {
        let command = render(self);
        match self.get_current_dir() {
            Some(dir) => info!("running \"{command}\" in {}", dir.display()),
            None => info!("running \"{command}\""),
        }

        let status = self
            .status()
            .map_err(|err| BuildErrKind::Spawn { command: command.clone(), err })?;

        if !status.success() {
            return Err(BuildErrKind::CommandFailed { command, status: status.code() }.into());
        }

        Ok(())
    }
}

/// The command line as a user would type it, for logs and error messages.
pub fn render(command: &Command) -> String {
    let mut parts = vec![command.get_program().to_string_lossy().into_owned()];
    parts.extend(command.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::render;
    use std::process::Command;

    #[test]
    fn renders_program_and_args() {
        let mut command = Command::new("git");
        command.args(["clone", "--depth=1", "https://github.com/arianne/marauroa.git"]);

        assert_eq!(render(&command), "git clone --depth=1 https://github.com/arianne/marauroa.git");
    }
}
