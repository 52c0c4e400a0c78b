// ABOUTME: Decodes per-device block I/O option bags into typed throttle lists.
// ABOUTME: Devices whose options do not decode are skipped, never reported.

use crate::runtime::{ThrottleDevice, WeightDevice};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fixed schema of a device option bag. Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeviceOptions {
    #[serde(rename = "Weight")]
    pub weight: u16,
    #[serde(rename = "ReadIops")]
    pub read_iops: u64,
    #[serde(rename = "WriteIops")]
    pub write_iops: u64,
    #[serde(rename = "ReadBps")]
    pub read_bps: u64,
    #[serde(rename = "WriteBps")]
    pub write_bps: u64,
}

const FIELDS: [&str; 5] = ["Weight", "ReadIops", "WriteIops", "ReadBps", "WriteBps"];

impl DeviceOptions {
    /// Keys match case-insensitively and whole numbers written as floats
    /// are accepted.
    pub fn decode(value: &Value) -> Result<Self, serde_json::Error> {
        DeviceOptions::deserialize(&canonicalize(value))
    }
}

fn canonicalize(value: &Value) -> Value {
    let Value::Object(fields) = value else {
        return value.clone();
    };

    let canonical = fields
        .iter()
        .map(|(key, field)| {
            let key = FIELDS
                .iter()
                .find(|name| name.eq_ignore_ascii_case(key))
                .map_or_else(|| key.clone(), |name| name.to_string());
            (key, whole_number(field))
        })
        .collect();
    Value::Object(canonical)
}

fn whole_number(value: &Value) -> Value {
    match value.as_f64() {
        Some(n) if value.is_f64() && n.fract() == 0.0 && (0.0..u64::MAX as f64).contains(&n) => {
            Value::from(n as u64)
        }
        _ => value.clone(),
    }
}

/// Block I/O limits for the host config. A list is `None` unless at least
/// one device contributed to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlkioSetup {
    pub weight_device: Option<Vec<WeightDevice>>,
    pub read_iops: Option<Vec<ThrottleDevice>>,
    pub write_iops: Option<Vec<ThrottleDevice>>,
    pub read_bps: Option<Vec<ThrottleDevice>>,
    pub write_bps: Option<Vec<ThrottleDevice>>,
}

/// Lists come out in device path order.
pub fn decode_blkio_options(options: &BTreeMap<String, Value>) -> BlkioSetup {
    let mut weight_device = Vec::new();
    let mut read_iops = Vec::new();
    let mut write_iops = Vec::new();
    let mut read_bps = Vec::new();
    let mut write_bps = Vec::new();

    for (path, value) in options {
        let decoded = match DeviceOptions::decode(value) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!(device = path.as_str(), error = %e, "skipping blkio options");
                continue;
            }
        };

        if decoded.weight != 0 {
            weight_device.push(WeightDevice {
                path: path.clone(),
                weight: decoded.weight,
            });
        }
        push_rate(&mut read_iops, path, decoded.read_iops);
        push_rate(&mut write_iops, path, decoded.write_iops);
        push_rate(&mut read_bps, path, decoded.read_bps);
        push_rate(&mut write_bps, path, decoded.write_bps);
    }

    BlkioSetup {
        weight_device: non_empty(weight_device),
        read_iops: non_empty(read_iops),
        write_iops: non_empty(write_iops),
        read_bps: non_empty(read_bps),
        write_bps: non_empty(write_bps),
    }
}

fn push_rate(list: &mut Vec<ThrottleDevice>, path: &str, rate: u64) {
    if rate != 0 {
        list.push(ThrottleDevice {
            path: path.to_string(),
            rate,
        });
    }
}

fn non_empty<T>(list: Vec<T>) -> Option<Vec<T>> {
    if list.is_empty() { None } else { Some(list) }
}
