// ABOUTME: Builds the container health probe from the container's health fields.

use crate::runtime::HealthCheck;
use crate::spec::ContainerSpec;
use std::time::Duration;

pub fn build_healthcheck(spec: &ContainerSpec) -> HealthCheck {
    HealthCheck {
        test: spec.health_cmd.clone(),
        interval: Duration::from_secs(spec.health_interval),
        timeout: Duration::from_secs(spec.health_timeout),
        retries: spec.health_retries,
    }
}
