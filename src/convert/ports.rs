// ABOUTME: Aggregates published endpoints into exposed ports and host bindings.
// ABOUTME: One container port may collect several host bindings.

use crate::runtime::{PortBinding, PortMap};
use crate::spec::PublicEndpoint;
use std::collections::BTreeSet;

const DEFAULT_PROTOCOL: &str = "tcp";

/// Exposed ports and host bindings derived from a set of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortSetup {
    pub exposed_ports: BTreeSet<String>,
    /// `None` when no endpoint produced a binding.
    pub port_bindings: Option<PortMap>,
}

/// `port/protocol` key used by the runtime for a container port.
pub fn port_key(endpoint: &PublicEndpoint) -> String {
    let protocol = if endpoint.protocol.is_empty() {
        DEFAULT_PROTOCOL
    } else {
        endpoint.protocol.as_str()
    };
    format!("{}/{}", endpoint.private_port, protocol)
}

/// Endpoints without a private port are skipped entirely. Bindings for the
/// same key keep the order the endpoints were given in.
pub fn aggregate_ports(endpoints: &[PublicEndpoint]) -> PortSetup {
    let mut exposed_ports = BTreeSet::new();
    let mut bindings = PortMap::new();

    for endpoint in endpoints.iter().filter(|e| e.private_port != 0) {
        let key = port_key(endpoint);
        bindings
            .entry(key.clone())
            .or_default()
            .push(PortBinding {
                host_ip: endpoint.bind_ip_address.clone(),
                host_port: endpoint.public_port.to_string(),
            });
        exposed_ports.insert(key);
    }

    PortSetup {
        exposed_ports,
        port_bindings: if bindings.is_empty() {
            None
        } else {
            Some(bindings)
        },
    }
}
