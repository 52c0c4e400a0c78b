// ABOUTME: Orchestration-level container description accepted as input.
// ABOUTME: Mirrors the platform's camelCase JSON schema for a single container.

mod reference;

pub use reference::{DEFAULT_DOCKER_ROOT, ProvisionedContainer, Reference};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Declarative description of one container as the orchestration platform
/// stores it.
///
/// Every field is optional on the wire. Maps typed as [`Value`] are opaque
/// bags whose shape the platform does not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContainerSpec {
    pub image: Option<String>,
    pub labels: HashMap<String, Value>,
    pub environment: HashMap<String, Value>,
    pub command: Vec<String>,
    pub entry_point: Vec<String>,
    pub working_dir: Option<String>,
    pub user: Option<String>,
    pub hostname: Option<String>,
    pub domain_name: Option<String>,
    pub stop_signal: Option<String>,
    pub stdin_open: bool,
    pub tty: bool,

    pub public_endpoints: Vec<PublicEndpoint>,
    pub publish_all_ports: bool,

    /// `path`, `host:container` or `host:container:mode`.
    pub data_volumes: Vec<String>,
    /// Logical volume-source names, resolved through [`Reference`].
    pub data_volumes_from: Vec<String>,
    /// `host:container` or `host:container:perm`.
    pub devices: Vec<String>,
    /// Device path to an option bag with `Weight`, `ReadIops`, `WriteIops`,
    /// `ReadBps` and `WriteBps`.
    pub blkio_device_options: BTreeMap<String, Value>,

    pub log_config: Option<LogConfig>,

    pub health_cmd: Vec<String>,
    /// Seconds.
    pub health_interval: u64,
    /// Seconds.
    pub health_timeout: u64,
    pub health_retries: u32,

    pub dns: Vec<String>,
    pub dns_search: Vec<String>,
    pub dns_opt: Vec<String>,
    pub extra_hosts: Vec<String>,
    pub cap_add: Vec<String>,
    pub cap_drop: Vec<String>,
    pub group_add: Vec<String>,
    pub privileged: bool,
    pub read_only: bool,

    pub cpu_set: Option<String>,
    pub cpu_set_mems: Option<String>,
    pub cpu_period: Option<i64>,
    pub cpu_quota: Option<i64>,
    pub cpu_shares: Option<i64>,
    pub blkio_weight: Option<u16>,
    pub cgroup_parent: Option<String>,
    pub memory: Option<i64>,
    pub memory_swap: Option<i64>,
    pub memory_swappiness: Option<i64>,
    pub kernel_memory: Option<i64>,
    pub oom_kill_disable: Option<bool>,
    pub oom_score_adj: Option<i64>,
    pub shm_size: Option<i64>,
    pub pids_limit: Option<i64>,
    pub disk_quota: Option<i64>,
    pub ulimits: Vec<Ulimit>,

    pub tmpfs: HashMap<String, Value>,
    pub sysctls: HashMap<String, Value>,
    pub storage_opt: HashMap<String, Value>,

    pub uts: Option<String>,
    pub ipc_mode: Option<String>,
    pub pid_mode: Option<String>,
    pub userns_mode: Option<String>,
}

/// A container port published on the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PublicEndpoint {
    pub private_port: u16,
    pub protocol: String,
    pub bind_ip_address: String,
    pub public_port: u16,
}

impl PublicEndpoint {
    pub fn new(private_port: u16, protocol: &str, public_port: u16) -> Self {
        Self {
            private_port,
            protocol: protocol.to_string(),
            bind_ip_address: String::new(),
            public_port,
        }
    }

    /// Bind the host side to a specific address.
    pub fn bind_ip(mut self, address: &str) -> Self {
        self.bind_ip_address = address.to_string();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub driver: String,
    pub config: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ulimit {
    pub name: String,
    pub soft: i64,
    pub hard: i64,
}
