//! Normalized interface and VLAN model built from a source configuration.
//!
//! All maps are keyed by the interface (or VLAN) identifier. Map order is not
//! meaningful: every consumer that emits entries sorts the keys with
//! [`cli_config_core::compare_interface_names`] first.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use cli_config_core::VlanList;
use serde::Serialize;

/// Switchport mode of a LAG.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LagMode {
    #[default]
    Unset,
    Access,
    Trunk,
}

/// Switchport mode of a physical port.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortMode {
    #[default]
    Unset,
    Access,
    Trunk,
    Hybrid,
}

/// Whether a port lands in the standard range or the SFP uplink range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortClass {
    Standard,
    Uplink,
}

/// A routed VLAN interface (`Vlan-interface<N>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SviEntry {
    pub admin_up: bool,
    pub primary_address: Option<String>,
    pub secondary_address: Option<String>,
    pub dhcp_relay: bool,
    pub description: String,
}

impl Default for SviEntry {
    fn default() -> Self {
        Self {
            admin_up: true,
            primary_address: None,
            secondary_address: None,
            dhcp_relay: false,
            description: String::new(),
        }
    }
}

/// A link aggregation (`Bridge-Aggregation<N>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LagEntry {
    pub admin_up: bool,
    pub mode: LagMode,
    pub vlans: VlanList,
    pub description: String,
}

impl Default for LagEntry {
    fn default() -> Self {
        Self {
            admin_up: true,
            mode: LagMode::Unset,
            vlans: VlanList::Unset,
            description: String::new(),
        }
    }
}

/// A physical Ethernet port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhysicalEntry {
    /// Interface name as written in the source configuration.
    pub source_name: String,
    pub class: PortClass,
    pub admin_up: bool,
    /// LAG number this port is a member of.
    pub lag: Option<String>,
    pub mode: PortMode,
    pub untagged: VlanList,
    pub tagged: VlanList,
    pub voice_vlan: Option<u16>,
    pub lldp_med_policy: Option<u32>,
    /// Raw `loopback-detection enable vlan` argument.
    pub loop_protect: Option<String>,
    pub description: String,
}

impl PhysicalEntry {
    pub fn new(source_name: impl Into<String>, class: PortClass) -> Self {
        Self {
            source_name: source_name.into(),
            class,
            admin_up: true,
            lag: None,
            mode: PortMode::Unset,
            untagged: VlanList::Unset,
            tagged: VlanList::Unset,
            voice_vlan: None,
            lldp_med_policy: None,
            loop_protect: None,
            description: String::new(),
        }
    }

    /// True when any of untagged, tagged or voice VLAN is configured.
    pub fn has_vlan_config(&self) -> bool {
        self.untagged.is_set() || self.tagged.is_set() || self.voice_vlan.is_some()
    }
}

/// A VLAN declared in the source configuration. Informational only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VlanEntry {
    pub name: Option<String>,
    pub port_count: u32,
    pub igmp_snooping: bool,
}

/// The four interface/VLAN collections of one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigModel {
    pub svis: BTreeMap<String, SviEntry>,
    pub lags: BTreeMap<String, LagEntry>,
    pub ports: BTreeMap<String, PhysicalEntry>,
    pub vlans: BTreeMap<u16, VlanEntry>,
}

impl ConfigModel {
    pub fn is_empty(&self) -> bool {
        self.svis.is_empty() && self.lags.is_empty() && self.ports.is_empty() && self.vlans.is_empty()
    }
}

/// Key prefix of LAG interfaces in the source dialect.
pub const LAG_PREFIX: &str = "Bridge-Aggregation";
/// Key prefix of VLAN interfaces in the source dialect.
pub const SVI_PREFIX: &str = "Vlan-interface";

/// LAG number of a LAG key (`Bridge-Aggregation13` -> `13`).
pub fn lag_number(key: &str) -> &str {
    key.strip_prefix(LAG_PREFIX).unwrap_or(key)
}

impl Display for LagMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            LagMode::Unset => "-",
            LagMode::Access => "ACCESS",
            LagMode::Trunk => "TRUNK",
        };
        write!(f, "{label}")
    }
}

impl Display for PortMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortMode::Unset => "-",
            PortMode::Access => "ACCESS",
            PortMode::Trunk => "TRUNK",
            PortMode::Hybrid => "HYBRID",
        };
        write!(f, "{label}")
    }
}
