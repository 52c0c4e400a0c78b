// ABOUTME: Runtime-side configuration model and the client that consumes it.
// ABOUTME: Includes local runtime detection and a bollard-backed client.

mod bollard;
mod client;
mod config;
mod detection;
mod error;
mod types;

pub use self::bollard::{BollardRuntimeClient, dropped_keys, to_create_body};
pub use client::{ContainerError, RuntimeClient, launch};
pub use config::{
    DeviceMapping, HealthCheck, LogConfig, PortBinding, PortMap, RuntimeHostConfig,
    RuntimeImageConfig, ThrottleDevice, Ulimit, WeightDevice,
};
pub use detection::{DetectionError, detect_local, detect_runtime};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use types::{RuntimeConfig, RuntimeInfo, RuntimeType};
