// ABOUTME: Builds device mappings from host:container[:perm] strings.

use super::parse::{DeviceSpec, SpecFormatError};
use crate::runtime::DeviceMapping;

pub fn map_devices(devices: &[String]) -> Result<Vec<DeviceMapping>, SpecFormatError> {
    devices
        .iter()
        .map(|raw| {
            DeviceSpec::parse(raw).map(|spec| DeviceMapping {
                path_on_host: spec.host,
                path_in_container: spec.container,
                cgroup_permissions: spec.permissions,
            })
        })
        .collect()
}
