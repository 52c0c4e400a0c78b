// ABOUTME: Runtime client seam that consumes translated container configs.
// ABOUTME: Creates and optionally starts a container from a config pair.

use crate::convert::RuntimeConfigs;
use crate::types::ContainerId;
use async_trait::async_trait;

/// A container runtime that accepts translated configs verbatim.
///
/// Validation of the configs (limits within host capacity, known log
/// drivers, ...) is the implementation's job.
#[async_trait]
pub trait RuntimeClient: Send + Sync {
    /// Create a container from the given configuration.
    async fn create_container(
        &self,
        name: Option<&str>,
        configs: &RuntimeConfigs,
    ) -> Result<ContainerId, ContainerError>;

    /// Start a created container.
    async fn start_container(&self, id: &ContainerId) -> Result<(), ContainerError>;
}

/// Create a container and, when `start` is set, start it.
pub async fn launch(
    client: &impl RuntimeClient,
    name: Option<&str>,
    configs: &RuntimeConfigs,
    start: bool,
) -> Result<ContainerId, ContainerError> {
    let id = client.create_container(name, configs).await?;
    tracing::info!(container = %id, "container created");

    if start {
        client.start_container(&id).await?;
        tracing::info!(container = %id, "container started");
    }

    Ok(id)
}

/// Errors from container operations.
#[derive(Debug, thiserror::Error)]
pub enum ContainerError {
    #[error("container not found: {0}")]
    NotFound(String),

    #[error("container already exists: {0}")]
    AlreadyExists(String),

    #[error("container already running: {0}")]
    AlreadyRunning(String),

    #[error("image not found: {0}")]
    ImageNotFound(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}
