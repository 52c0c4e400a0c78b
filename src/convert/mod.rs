// ABOUTME: Translates an orchestration container spec into runtime create configs.
// ABOUTME: Runs each field translator in a fixed order and assembles the results.

mod blkio;
mod devices;
mod fields;
mod healthcheck;
mod parse;
mod ports;
mod volumes;

pub use blkio::{BlkioSetup, DeviceOptions, decode_blkio_options};
pub use devices::map_devices;
pub use fields::{copy_host_fields, copy_image_fields, render_env, to_string_map};
pub use healthcheck::build_healthcheck;
pub use parse::{
    DEFAULT_BIND_MODE, DEFAULT_DEVICE_PERMISSIONS, DeviceSpec, SpecFormatError, SpecKind,
    VolumeSpec,
};
pub use ports::{PortSetup, aggregate_ports, port_key};
pub use volumes::{VolumeSetup, resolve_volumes, resolve_volumes_from};

use crate::runtime::{RuntimeHostConfig, RuntimeImageConfig};
use crate::spec::{ContainerSpec, Reference};
use serde::Serialize;

/// The pair of configs the runtime needs to create a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuntimeConfigs {
    #[serde(rename = "Config")]
    pub config: RuntimeImageConfig,
    #[serde(rename = "HostConfig")]
    pub host_config: RuntimeHostConfig,
}

/// Translate `spec` into the runtime's image and host configuration.
///
/// Pure over its inputs. Unresolvable volume sources and undecodable blkio
/// options are skipped; only malformed volume or device strings fail.
pub fn to_runtime_configs(
    spec: &ContainerSpec,
    reference: &Reference,
) -> Result<RuntimeConfigs, SpecFormatError> {
    let mut config = copy_image_fields(spec);
    let mut host_config = copy_host_fields(spec);

    let ports = aggregate_ports(&spec.public_endpoints);
    config.exposed_ports = ports.exposed_ports;
    host_config.port_bindings = ports.port_bindings;

    let volumes = resolve_volumes(&spec.data_volumes, &spec.data_volumes_from, reference)?;
    config.volumes = volumes.volumes;
    host_config.binds = volumes.binds;
    host_config.volumes_from = volumes.volumes_from;

    host_config.devices = map_devices(&spec.devices)?;

    let blkio = decode_blkio_options(&spec.blkio_device_options);
    host_config.blkio_weight_device = blkio.weight_device;
    host_config.blkio_device_read_iops = blkio.read_iops;
    host_config.blkio_device_write_iops = blkio.write_iops;
    host_config.blkio_device_read_bps = blkio.read_bps;
    host_config.blkio_device_write_bps = blkio.write_bps;

    config.healthcheck = Some(build_healthcheck(spec));

    Ok(RuntimeConfigs {
        config,
        host_config,
    })
}
