pub mod commands;
pub mod errors;
pub mod geometry;

pub use commands::{coalesce, NotificationCommand};
pub use errors::{ConfigError, HostError, PipeweaverError, ShellError};
pub use geometry::{BoundsField, MinimumSize, WindowGeometry};

/// Directory under the platform config dir that holds the shell's files.
pub const APP_DIR_NAME: &str = "pipeweaver";

pub type Result<T> = std::result::Result<T, PipeweaverError>;
