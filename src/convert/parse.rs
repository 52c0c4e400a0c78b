// ABOUTME: Parsing of colon-delimited volume and device spec strings.
// ABOUTME: Splits into at most three fields and fills in the defaulted trailing field.

use thiserror::Error;

/// Mode applied to a bind mount when the volume string omits one.
pub const DEFAULT_BIND_MODE: &str = "rw";

/// Cgroup permissions applied to a device when the device string omits them.
pub const DEFAULT_DEVICE_PERMISSIONS: &str = "rwm";

const DELIMITER: char = ':';
const MAX_PARTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    Volume,
    Device,
}

impl std::fmt::Display for SpecKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecKind::Volume => write!(f, "volume"),
            SpecKind::Device => write!(f, "device"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecFormatError {
    #[error("invalid {kind} spec format: {spec:?}")]
    InvalidSpecFormat { kind: SpecKind, spec: String },
}

impl SpecFormatError {
    fn new(kind: SpecKind, spec: &str) -> Self {
        SpecFormatError::InvalidSpecFormat {
            kind,
            spec: spec.to_string(),
        }
    }
}

/// A parsed data-volume spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VolumeSpec {
    /// `path`: a volume declared in the container with no host binding.
    Anonymous(String),
    /// `host:container[:mode]`.
    Bind {
        host: String,
        container: String,
        mode: String,
    },
}

impl VolumeSpec {
    pub fn parse(input: &str) -> Result<Self, SpecFormatError> {
        if input.is_empty() {
            return Err(SpecFormatError::new(SpecKind::Volume, input));
        }

        let parts: Vec<&str> = input.splitn(MAX_PARTS, DELIMITER).collect();
        match parts.as_slice() {
            [path] => Ok(VolumeSpec::Anonymous(path.to_string())),
            [host, container] => Ok(VolumeSpec::Bind {
                host: host.to_string(),
                container: container.to_string(),
                mode: DEFAULT_BIND_MODE.to_string(),
            }),
            [host, container, mode] => Ok(VolumeSpec::Bind {
                host: host.to_string(),
                container: container.to_string(),
                mode: mode.to_string(),
            }),
            _ => Err(SpecFormatError::new(SpecKind::Volume, input)),
        }
    }

}

/// A parsed `host:container[:perm]` device spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSpec {
    pub host: String,
    pub container: String,
    pub permissions: String,
}

impl DeviceSpec {
    pub fn parse(input: &str) -> Result<Self, SpecFormatError> {
        let parts: Vec<&str> = input.splitn(MAX_PARTS, DELIMITER).collect();
        match parts.as_slice() {
            [host, container] => Ok(DeviceSpec {
                host: host.to_string(),
                container: container.to_string(),
                permissions: DEFAULT_DEVICE_PERMISSIONS.to_string(),
            }),
            [host, container, permissions] => Ok(DeviceSpec {
                host: host.to_string(),
                container: container.to_string(),
                permissions: permissions.to_string(),
            }),
            _ => Err(SpecFormatError::new(SpecKind::Device, input)),
        }
    }
}
