use cli_config_core::{join_ids, sorted_names, union_sorted, ConfigBlock, ConfigDocument, PortAddress};

use crate::model::{lag_number, ConfigModel, LagEntry, LagMode, PhysicalEntry, PortMode};
use crate::profile::PortPolicy;
use crate::topology::StackTopology;

/// Allowed and native VLANs derived for a trunk or hybrid port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrunkVlans {
    /// `all`, a sorted comma list, or `None` when nothing is allowed.
    pub allowed: Option<String>,
    /// Last untagged VLAN in source order.
    pub native: Option<u16>,
}

/// Derive the trunk VLAN lines of a physical port.
///
/// Untagged and voice VLANs are folded into the allowed set unless the port
/// already allows every VLAN.
pub fn trunk_vlans(port: &PhysicalEntry) -> TrunkVlans {
    let allowed = if port.tagged.is_all() {
        Some("all".to_string())
    } else {
        let voice: Vec<u16> = port.voice_vlan.into_iter().collect();
        let ids = union_sorted(&[port.tagged.ids(), port.untagged.ids(), voice.as_slice()]);
        (!ids.is_empty()).then(|| join_ids(&ids))
    };
    TrunkVlans {
        allowed,
        native: port.untagged.last(),
    }
}

fn admin_line(admin_up: bool) -> &'static str {
    if admin_up {
        "no shutdown"
    } else {
        "shutdown"
    }
}

/// The `interface lag` stanza of one LAG.
pub fn lag_block(key: &str, lag: &LagEntry) -> ConfigBlock {
    let mut block = ConfigBlock::new(format!("interface lag {}", lag_number(key)));
    if !lag.description.is_empty() {
        block.line(format!("description '{}'", lag.description));
    }
    block.line(admin_line(lag.admin_up));

    match lag.mode {
        LagMode::Access => {
            if let Some(id) = lag.vlans.first() {
                block.line(format!("vlan access {id}"));
            }
        }
        LagMode::Trunk => {
            if lag.vlans.is_set() {
                block.line(format!("vlan trunk allowed {}", lag.vlans));
            }
            block.line("vlan trunk native 1");
        }
        LagMode::Unset => {}
    }

    block.line("lacp mode active").line("lacp rate fast");
    block
}

/// The `interface <member>/<slot>/<port>` stanza of one physical port.
pub fn port_block(target: &str, port: &PhysicalEntry, policy: &PortPolicy) -> ConfigBlock {
    let mut block = ConfigBlock::new(format!("interface {target}"));
    if !port.description.is_empty() {
        block.line(format!("description {}", port.description));
    }
    block.line(admin_line(port.admin_up));

    if let Some(lag) = &port.lag {
        block.line(format!("lag {lag}"));
        return block;
    }

    match port.mode {
        PortMode::Access => {
            if let Some(id) = port.untagged.first() {
                block.line(format!("vlan access {id}"));
            }
        }
        PortMode::Trunk | PortMode::Hybrid => {
            let vlans = trunk_vlans(port);
            if let Some(allowed) = vlans.allowed {
                block.line(format!("vlan trunk allowed {allowed}"));
            }
            if let Some(native) = vlans.native {
                block.line(format!("vlan trunk native {native}"));
            }
        }
        PortMode::Unset => {}
    }

    if port.voice_vlan == Some(policy.voice_qos_vlan) || port.tagged.is_exactly(policy.qos_tagged_vlan) {
        block.line("qos trust dscp");
    }
    if port.has_vlan_config() {
        block.line("spanning-tree port-type admin-edge");
    }
    if port.loop_protect.as_deref() == Some(policy.loop_detect_source.as_str()) {
        block.line(format!("loop-protect vlan {}", policy.loop_protect_vlans));
    }
    block
}

pub(super) fn lags(doc: &mut ConfigDocument, model: &ConfigModel) {
    for key in sorted_names(model.lags.keys()) {
        if let Some(lag) = model.lags.get(key) {
            doc.block(&lag_block(key, lag));
        }
    }
}

pub(super) fn ports(doc: &mut ConfigDocument, model: &ConfigModel, topology: &StackTopology, policy: &PortPolicy) {
    for key in sorted_names(model.ports.keys()) {
        if !within_topology(key, topology) {
            log::debug!("generate: skipping {key}, not a port of the target stack");
            continue;
        }
        if let Some(port) = model.ports.get(key) {
            doc.block(&port_block(key, port, policy));
        }
    }
}

fn within_topology(key: &str, topology: &StackTopology) -> bool {
    key.parse::<PortAddress>()
        .ok()
        .and_then(|addr| topology.unit(addr.unit).map(|unit| unit.has_port(addr.port)))
        .unwrap_or(false)
}
