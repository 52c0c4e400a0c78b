// ABOUTME: Runtime error types with SNAFU pattern.
// ABOUTME: Unifies detection and client errors for programmatic handling.

use snafu::Snafu;

use super::client::ContainerError;
use super::detection::DetectionError;

/// Unified runtime error for detection and client failures.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RuntimeError {
    #[snafu(display("runtime detection failed: {source}"))]
    Detection { source: DetectionError },

    #[snafu(display("runtime client failed: {source}"))]
    Client { source: ContainerError },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// No container runtime found on the system.
    NoRuntimeFound,
    /// Failed to connect to runtime socket.
    ConnectionFailed,
    /// The runtime rejected the configuration or a referenced resource is missing.
    Rejected,
    /// A container with the same name exists or is already running.
    Conflict,
    /// Runtime operation error.
    RuntimeOperation,
}

impl RuntimeError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RuntimeErrorKind {
        match self {
            RuntimeError::Detection { source } => match source {
                DetectionError::NoRuntimeFound => RuntimeErrorKind::NoRuntimeFound,
            },
            RuntimeError::Client { source } => match source {
                ContainerError::ConnectionFailed(_) => RuntimeErrorKind::ConnectionFailed,
                ContainerError::NotFound(_)
                | ContainerError::ImageNotFound(_)
                | ContainerError::InvalidConfig(_) => RuntimeErrorKind::Rejected,
                ContainerError::AlreadyExists(_) | ContainerError::AlreadyRunning(_) => {
                    RuntimeErrorKind::Conflict
                }
                ContainerError::Runtime(_) => RuntimeErrorKind::RuntimeOperation,
            },
        }
    }

    /// Returns connection error details if this is a connection failure.
    pub fn connection_details(&self) -> Option<&str> {
        match self {
            RuntimeError::Client {
                source: ContainerError::ConnectionFailed(msg),
            } => Some(msg),
            _ => None,
        }
    }
}

impl From<DetectionError> for RuntimeError {
    fn from(source: DetectionError) -> Self {
        RuntimeError::Detection { source }
    }
}

impl From<ContainerError> for RuntimeError {
    fn from(source: ContainerError) -> Self {
        RuntimeError::Client { source }
    }
}
