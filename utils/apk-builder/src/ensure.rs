use tracing::info;

use crate::errors::BuildResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    AlreadyPresent,
    Established,
}

/// Runs `establish` only when `present` reports the precondition does not hold yet. Every
/// "skip if it's already there" step of the build goes through here.
pub fn ensure<P, E>(what: &str, present: P, establish: E) -> BuildResult<Ensured>
where
    P: FnOnce() -> bool,
    E: FnOnce() -> BuildResult<()>,
{
    if present() {
        info!("{what}: already present");
        return Ok(Ensured::AlreadyPresent);
    }

    info!("{what}: preparing");
    establish()?;
    Ok(Ensured::Established)
}
