// ABOUTME: One-to-one field copies from the container spec into both runtime configs.
// ABOUTME: Each output has a single mapping table; computed fields are filled in elsewhere.

use crate::runtime::{LogConfig, RuntimeHostConfig, RuntimeImageConfig, Ulimit};
use crate::spec::{self, ContainerSpec};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// Image-config fields copied unchanged from the container spec.
pub fn copy_image_fields(spec: &ContainerSpec) -> RuntimeImageConfig {
    RuntimeImageConfig {
        image: spec.image.clone(),
        hostname: spec.hostname.clone(),
        domainname: spec.domain_name.clone(),
        user: spec.user.clone(),
        tty: spec.tty,
        open_stdin: spec.stdin_open,
        stop_signal: spec.stop_signal.clone(),
        working_dir: spec.working_dir.clone(),
        cmd: spec.command.clone(),
        entrypoint: spec.entry_point.clone(),
        env: render_env(&spec.environment),
        labels: to_string_map(&spec.labels),
        ..Default::default()
    }
}

/// Host-config fields copied unchanged from the container spec.
pub fn copy_host_fields(spec: &ContainerSpec) -> RuntimeHostConfig {
    RuntimeHostConfig {
        publish_all_ports: spec.publish_all_ports,
        log_config: spec.log_config.as_ref().map(convert_log_config),
        blkio_weight: spec.blkio_weight,
        dns: spec.dns.clone(),
        dns_search: spec.dns_search.clone(),
        dns_options: spec.dns_opt.clone(),
        extra_hosts: spec.extra_hosts.clone(),
        cap_add: spec.cap_add.clone(),
        cap_drop: spec.cap_drop.clone(),
        group_add: spec.group_add.clone(),
        privileged: spec.privileged,
        readonly_rootfs: spec.read_only,
        cpuset_cpus: spec.cpu_set.clone(),
        cpuset_mems: spec.cpu_set_mems.clone(),
        cpu_period: spec.cpu_period,
        cpu_quota: spec.cpu_quota,
        cpu_shares: spec.cpu_shares,
        cgroup_parent: spec.cgroup_parent.clone(),
        memory: spec.memory,
        memory_swap: spec.memory_swap,
        memory_swappiness: spec.memory_swappiness,
        kernel_memory: spec.kernel_memory,
        oom_kill_disable: spec.oom_kill_disable,
        oom_score_adj: spec.oom_score_adj,
        shm_size: spec.shm_size,
        pids_limit: spec.pids_limit,
        disk_quota: spec.disk_quota,
        ulimits: spec.ulimits.iter().map(convert_ulimit).collect(),
        tmpfs: to_string_map(&spec.tmpfs),
        sysctls: to_string_map(&spec.sysctls),
        storage_opt: to_string_map(&spec.storage_opt),
        uts_mode: spec.uts.clone(),
        ipc_mode: spec.ipc_mode.clone(),
        pid_mode: spec.pid_mode.clone(),
        userns_mode: spec.userns_mode.clone(),
        ..Default::default()
    }
}

/// Keeps string values; anything else becomes an empty string.
pub fn to_string_map(map: &HashMap<String, Value>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(k, v)| (k.clone(), v.as_str().unwrap_or_default().to_string()))
        .collect()
}

/// `KEY=value` entries sorted by key.
pub fn render_env(environment: &HashMap<String, Value>) -> Vec<String> {
    let sorted: BTreeMap<&String, &Value> = environment.iter().collect();
    sorted
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, env_value(v)))
        .collect()
}

fn env_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn convert_log_config(config: &spec::LogConfig) -> LogConfig {
    LogConfig {
        driver: config.driver.clone(),
        config: to_string_map(&config.config),
    }
}

fn convert_ulimit(ulimit: &spec::Ulimit) -> Ulimit {
    Ulimit {
        name: ulimit.name.clone(),
        soft: ulimit.soft,
        hard: ulimit.hard,
    }
}
