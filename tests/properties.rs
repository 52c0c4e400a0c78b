// ABOUTME: Property tests for translation invariants.
// ABOUTME: Uses proptest to check port, volume, volumes-from and blkio rules over generated input.

use dockconv::convert::*;
use dockconv::spec::{ContainerSpec, PublicEndpoint, Reference};
use proptest::prelude::*;
use serde_json::json;
use std::collections::BTreeMap;

fn path() -> impl Strategy<Value = String> {
    "/[a-z]{1,8}(/[a-z0-9]{1,6}){0,2}"
}

fn endpoint() -> impl Strategy<Value = PublicEndpoint> {
    (
        prop_oneof![Just(0u16), 1u16..=65535],
        prop_oneof![Just("tcp"), Just("udp")],
        any::<u16>(),
    )
        .prop_map(|(private, protocol, public)| PublicEndpoint::new(private, protocol, public))
}

proptest! {
    #[test]
    fn zero_private_ports_never_appear(endpoints in prop::collection::vec(endpoint(), 0..12)) {
        let setup = aggregate_ports(&endpoints);

        for key in &setup.exposed_ports {
            prop_assert!(!key.starts_with("0/"));
        }
        if let Some(bindings) = &setup.port_bindings {
            prop_assert!(bindings.keys().all(|k| !k.starts_with("0/")));
            prop_assert_eq!(
                bindings.keys().cloned().collect::<Vec<_>>(),
                setup.exposed_ports.iter().cloned().collect::<Vec<_>>()
            );
        }

        let published = endpoints.iter().filter(|e| e.private_port != 0).count();
        let bound: usize = setup
            .port_bindings
            .as_ref()
            .map(|b| b.values().map(Vec::len).sum())
            .unwrap_or(0);
        prop_assert_eq!(published, bound);
        prop_assert_eq!(setup.port_bindings.is_none(), published == 0);
    }

    #[test]
    fn three_part_volume_yields_one_bind(
        host in path(),
        container in path(),
        mode in prop_oneof![Just("rw"), Just("ro"), Just("z")],
    ) {
        prop_assume!(!(host == "/var/lib/docker" && container == "/var/lib/docker"));
        let spec = format!("{host}:{container}:{mode}");

        let setup = resolve_volumes(&[spec.clone()], &[], &Reference::new("/mnt/data")).unwrap();

        prop_assert_eq!(setup.binds, vec![spec]);
        prop_assert!(setup.volumes.contains(&container));
    }

    #[test]
    fn unresolved_volumes_from_are_excluded(
        names in prop::collection::vec("[a-z]{1,6}", 0..8),
        known in prop::collection::btree_map("[a-z]{1,6}", "[0-9a-f]{0,12}", 0..6),
    ) {
        let mut reference = Reference::default();
        for (name, id) in &known {
            reference = reference.volume_source(name, id);
        }

        let expected: Vec<String> = names
            .iter()
            .filter_map(|n| known.get(n).filter(|id| !id.is_empty()).cloned())
            .collect();

        match resolve_volumes_from(&names, &reference) {
            None => prop_assert!(expected.is_empty()),
            Some(ids) => prop_assert_eq!(ids, expected),
        }
    }

    #[test]
    fn redirect_contains_relocated_root(root in path(), mode in prop_oneof![Just("rw"), Just("ro")]) {
        prop_assume!(root != "/var/lib/docker");
        let spec = format!("/var/lib/docker:/var/lib/docker:{mode}");

        let setup = resolve_volumes(&[spec], &[], &Reference::new(root.clone())).unwrap();

        prop_assert_eq!(
            setup.binds,
            vec![
                format!("{root}:/var/lib/docker:{mode}"),
                format!("{root}:{root}:{mode}"),
            ]
        );
        prop_assert!(setup.volumes.contains(&root));
    }

    #[test]
    fn zero_blkio_bags_contribute_nothing(
        devices in prop::collection::btree_set(path(), 0..5),
        with_keys in any::<bool>(),
    ) {
        let options: BTreeMap<String, serde_json::Value> = devices
            .into_iter()
            .map(|d| {
                let bag = if with_keys {
                    json!({"Weight": 0, "ReadIops": 0, "WriteIops": 0, "ReadBps": 0, "WriteBps": 0})
                } else {
                    json!({})
                };
                (d, bag)
            })
            .collect();

        prop_assert_eq!(decode_blkio_options(&options), BlkioSetup::default());
    }

    #[test]
    fn translation_is_idempotent(
        endpoints in prop::collection::vec(endpoint(), 0..6),
        volumes in prop::collection::vec(path(), 0..4),
        rates in prop::collection::btree_map(path(), 0u64..1000, 0..4),
    ) {
        let mut spec = ContainerSpec {
            public_endpoints: endpoints,
            data_volumes: volumes.iter().map(|v| format!("{v}:{v}")).collect(),
            ..Default::default()
        };
        for (device, rate) in rates {
            spec.blkio_device_options.insert(device, json!({"ReadBps": rate}));
        }
        let reference = Reference::new("/mnt/data");

        let first = to_runtime_configs(&spec, &reference).unwrap();
        let second = to_runtime_configs(&spec, &reference).unwrap();
        prop_assert_eq!(first, second);
    }
}
