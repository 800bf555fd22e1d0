use std::path::PathBuf;
use thiserror::Error;

/// Reasons a notified path failed validation and never reached the callback.
#[derive(Debug, Error)]
pub enum MinidumpError {
    #[error("Minidump path is empty")]
    EmptyPath,

    #[error("Minidump path '{}' does not exist", .0.display())]
    NotFound(PathBuf),

    #[error("Minidump path '{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("Failed to open minidump '{}'", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("An upload callback has already been registered")]
    CallbackAlreadyRegistered,

    #[error("Invalid minidump notification: {0}")]
    Invalid(#[from] MinidumpError),
}
