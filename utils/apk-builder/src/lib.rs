pub mod artifacts;
pub mod client;
pub mod config;
pub mod ensure;
pub mod errors;
pub mod keystore;
pub mod logger;
pub mod pipeline;
pub mod places;
pub mod sources;
pub mod tools;
pub mod utils;

pub use crate::config::BuildConfig;
pub use crate::errors::{BuildErr, BuildErrKind, BuildResult};
pub use crate::places::Places;
pub use crate::tools::{Platform, Tool};
