use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures on the shell side of the host protocol.
///
/// None of these are fatal: every caller degrades to "skip and continue".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("host connection unavailable")]
    HostUnavailable,

    #[error("renderer does not support operation: {0}")]
    RendererUnsupportedOperation(String),

    #[error("geometry {width}x{height} is below the {min_width}x{min_height} minimum")]
    GeometryBelowMinimum {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("connect error: {0}")]
    Connect(String),

    #[error("another instance is already running")]
    AlreadyRunning,
}

#[derive(Debug, thiserror::Error)]
pub enum PipeweaverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Shell(#[from] ShellError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
