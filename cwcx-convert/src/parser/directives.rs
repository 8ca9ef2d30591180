//! Per-kind directive tables.
//!
//! Each table is an ordered list of (matcher, setter) pairs; the first
//! matching directive handles the line. Lines that match nothing are ignored.

use std::sync::LazyLock;

use cli_config_core::{extract_vlan_ids, to_cidr, VlanList};
use regex::Regex;

use crate::model::{LagEntry, LagMode, PhysicalEntry, PortMode, SviEntry, VlanEntry};

/// How a directive recognizes its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Exact(&'static str),
    Prefix(&'static str),
    Contains(&'static str),
    /// Line starts with `prefix`, contains `with` and does not contain `without`.
    PrefixWith {
        prefix: &'static str,
        with: &'static str,
        without: Option<&'static str>,
    },
}

impl Matcher {
    pub fn matches(&self, line: &str) -> bool {
        match *self {
            Matcher::Exact(text) => line == text,
            Matcher::Prefix(prefix) => line.starts_with(prefix),
            Matcher::Contains(needle) => line.contains(needle),
            Matcher::PrefixWith {
                prefix,
                with,
                without,
            } => {
                line.starts_with(prefix)
                    && line.contains(with)
                    && without.map_or(true, |w| !line.contains(w))
            }
        }
    }
}

/// One recognized directive for entries of type `E`.
pub struct Directive<E> {
    pub name: &'static str,
    pub matcher: Matcher,
    pub apply: fn(&mut E, &str),
}

/// Apply the first directive of `table` matching `line`.
///
/// Returns the directive name, or `None` when the line is not recognized.
pub fn dispatch<E>(table: &[Directive<E>], entry: &mut E, line: &str) -> Option<&'static str> {
    let directive = table.iter().find(|d| d.matcher.matches(line))?;
    (directive.apply)(entry, line);
    Some(directive.name)
}

static ACCESS_VLAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"port access vlan\s+(\d+)").expect("valid access vlan pattern"));
static VOICE_VLAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"voice-vlan\s+(\d+)").expect("valid voice vlan pattern"));
static NETWORK_POLICY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"network-policy\s+(\d+)").expect("valid network policy pattern"));
static LOOP_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vlan\s+(.+)").expect("valid loop range pattern"));
static AGG_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"group\s+(\d+)").expect("valid aggregation group pattern"));

fn capture<'l>(re: &Regex, line: &'l str) -> Option<&'l str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn capture_vlan(re: &Regex, line: &str) -> Option<u16> {
    capture(re, line).and_then(|id| extract_vlan_ids(id).first().copied())
}

/// Description text with quotes removed.
fn description_of(line: &str) -> String {
    line["description ".len()..]
        .replace(['\'', '"'], "")
        .trim()
        .to_string()
}

fn permitted_vlans(line: &str) -> VlanList {
    if line.ends_with("all") {
        VlanList::All
    } else {
        VlanList::from_ids(extract_vlan_ids(line))
    }
}

pub const SVI_DIRECTIVES: &[Directive<SviEntry>] = &[
    Directive {
        name: "shutdown",
        matcher: Matcher::Exact("shutdown"),
        apply: |svi, _| svi.admin_up = false,
    },
    Directive {
        name: "description",
        matcher: Matcher::Prefix("description "),
        apply: |svi, line| svi.description = description_of(line),
    },
    Directive {
        name: "ip address",
        matcher: Matcher::Prefix("ip address "),
        apply: |svi, line| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 4 {
                return;
            }
            let cidr = to_cidr(parts[2], parts[3]);
            if line.contains("sub") {
                svi.secondary_address = Some(cidr);
            } else {
                svi.primary_address = Some(cidr);
            }
        },
    },
    Directive {
        name: "dhcp relay",
        matcher: Matcher::Prefix("dhcp select relay"),
        apply: |svi, _| svi.dhcp_relay = true,
    },
];

pub const LAG_DIRECTIVES: &[Directive<LagEntry>] = &[
    Directive {
        name: "shutdown",
        matcher: Matcher::Exact("shutdown"),
        apply: |lag, _| lag.admin_up = false,
    },
    Directive {
        name: "description",
        matcher: Matcher::Prefix("description "),
        apply: |lag, line| lag.description = description_of(line),
    },
    Directive {
        name: "access vlan",
        matcher: Matcher::Prefix("port access vlan "),
        apply: |lag, line| {
            if let Some(id) = capture_vlan(&ACCESS_VLAN, line) {
                lag.mode = LagMode::Access;
                lag.vlans = VlanList::from_ids([id]);
            }
        },
    },
    Directive {
        name: "link-type trunk",
        matcher: Matcher::Prefix("port link-type trunk"),
        apply: |lag, _| lag.mode = LagMode::Trunk,
    },
    Directive {
        name: "trunk permit",
        matcher: Matcher::Prefix("port trunk permit vlan"),
        apply: |lag, line| {
            let permitted = permitted_vlans(line);
            if permitted.is_set() {
                lag.vlans = permitted;
            }
        },
    },
];

pub const PHYSICAL_DIRECTIVES: &[Directive<PhysicalEntry>] = &[
    Directive {
        name: "shutdown",
        matcher: Matcher::Exact("shutdown"),
        apply: |port, _| port.admin_up = false,
    },
    Directive {
        name: "description",
        matcher: Matcher::Prefix("description "),
        apply: |port, line| port.description = description_of(line),
    },
    Directive {
        name: "link-type trunk",
        matcher: Matcher::Prefix("port link-type trunk"),
        apply: |port, _| port.mode = PortMode::Trunk,
    },
    Directive {
        name: "link-type hybrid",
        matcher: Matcher::Prefix("port link-type hybrid"),
        apply: |port, _| port.mode = PortMode::Hybrid,
    },
    Directive {
        name: "access vlan",
        matcher: Matcher::Prefix("port access vlan "),
        apply: |port, line| {
            port.mode = PortMode::Access;
            if let Some(id) = capture_vlan(&ACCESS_VLAN, line) {
                port.untagged = VlanList::from_ids([id]);
            }
        },
    },
    Directive {
        name: "trunk permit",
        matcher: Matcher::Prefix("port trunk permit vlan"),
        apply: |port, line| {
            if line.ends_with("all") {
                port.tagged = VlanList::All;
            } else {
                port.tagged.merge(extract_vlan_ids(line));
            }
        },
    },
    Directive {
        name: "hybrid tagged",
        matcher: Matcher::PrefixWith {
            prefix: "port hybrid vlan",
            with: "tagged",
            without: Some("untagged"),
        },
        apply: |port, line| port.tagged.merge(extract_vlan_ids(line)),
    },
    Directive {
        name: "hybrid untagged",
        matcher: Matcher::PrefixWith {
            prefix: "port hybrid vlan",
            with: "untagged",
            without: None,
        },
        apply: |port, line| {
            let before = line.split("untagged").next().unwrap_or_default();
            port.untagged.merge(extract_vlan_ids(before));
        },
    },
    Directive {
        name: "voice vlan",
        matcher: Matcher::Prefix("voice-vlan "),
        apply: |port, line| {
            if let Some(id) = capture_vlan(&VOICE_VLAN, line) {
                port.voice_vlan = Some(id);
            }
        },
    },
    Directive {
        name: "lldp med policy",
        matcher: Matcher::Prefix("lldp tlv-enable med-tlv network-policy "),
        apply: |port, line| {
            if let Some(id) = capture(&NETWORK_POLICY, line).and_then(|v| v.parse().ok()) {
                port.lldp_med_policy = Some(id);
            }
        },
    },
    Directive {
        name: "loopback detection",
        matcher: Matcher::Prefix("loopback-detection enable vlan "),
        apply: |port, line| {
            if let Some(range) = capture(&LOOP_RANGE, line) {
                port.loop_protect = Some(range.trim().to_string());
            }
        },
    },
    Directive {
        name: "aggregation group",
        matcher: Matcher::Prefix("port link-aggregation group "),
        apply: |port, line| {
            if let Some(group) = capture(&AGG_GROUP, line) {
                port.lag = Some(group.to_string());
            }
        },
    },
];

pub const VLAN_DIRECTIVES: &[Directive<VlanEntry>] = &[
    Directive {
        name: "name",
        matcher: Matcher::Prefix("name "),
        apply: |vlan, line| vlan.name = Some(line["name ".len()..].trim().to_string()),
    },
    Directive {
        name: "igmp snooping",
        matcher: Matcher::Contains("igmp-snooping"),
        apply: |vlan, _| vlan.igmp_snooping = true,
    },
];

#[cfg(test)]
mod tests {
    use cli_config_core::VlanList;

    use super::{
        dispatch, Matcher, LAG_DIRECTIVES, PHYSICAL_DIRECTIVES, SVI_DIRECTIVES, VLAN_DIRECTIVES,
    };
    use crate::model::{LagEntry, LagMode, PhysicalEntry, PortClass, PortMode, SviEntry, VlanEntry};

    fn port() -> PhysicalEntry {
        PhysicalEntry::new("GigabitEthernet1/0/1", PortClass::Standard)
    }

    #[test]
    fn matcher_prefix_with_excludes_untagged() {
        let tagged = Matcher::PrefixWith {
            prefix: "port hybrid vlan",
            with: "tagged",
            without: Some("untagged"),
        };
        assert!(tagged.matches("port hybrid vlan 10 tagged"));
        assert!(!tagged.matches("port hybrid vlan 10 untagged"));
    }

    #[test]
    fn svi_ip_address_primary_and_secondary() {
        let mut svi = SviEntry::default();
        dispatch(SVI_DIRECTIVES, &mut svi, "ip address 10.0.10.1 255.255.255.0");
        dispatch(SVI_DIRECTIVES, &mut svi, "ip address 10.0.11.1 255.255.255.128 sub");
        assert_eq!(svi.primary_address.as_deref(), Some("10.0.10.1/24"));
        assert_eq!(svi.secondary_address.as_deref(), Some("10.0.11.1/25"));
    }

    #[test]
    fn svi_short_ip_line_is_ignored() {
        let mut svi = SviEntry::default();
        assert_eq!(
            dispatch(SVI_DIRECTIVES, &mut svi, "ip address dhcp-alloc"),
            Some("ip address")
        );
        assert_eq!(svi.primary_address, None);
    }

    #[test]
    fn description_strips_quotes() {
        let mut svi = SviEntry::default();
        dispatch(SVI_DIRECTIVES, &mut svi, r#"description "Users 'bat 2'""#);
        assert_eq!(svi.description, "Users bat 2");
    }

    #[test]
    fn lag_permit_list_replaces_and_sorts() {
        let mut lag = LagEntry::default();
        dispatch(LAG_DIRECTIVES, &mut lag, "port link-type trunk");
        dispatch(LAG_DIRECTIVES, &mut lag, "port trunk permit vlan 30 10");
        assert_eq!(lag.mode, LagMode::Trunk);
        assert_eq!(lag.vlans.to_string(), "10,30");

        dispatch(LAG_DIRECTIVES, &mut lag, "port trunk permit vlan all");
        assert_eq!(lag.vlans, VlanList::All);
    }

    #[test]
    fn lag_access_vlan_sets_mode_and_id() {
        let mut lag = LagEntry::default();
        dispatch(LAG_DIRECTIVES, &mut lag, "port access vlan 42");
        assert_eq!(lag.mode, LagMode::Access);
        assert_eq!(lag.vlans.to_string(), "42");
    }

    #[test]
    fn tagged_directives_merge() {
        let mut p = port();
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port trunk permit vlan 3");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port trunk permit vlan 5");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port trunk permit vlan 3");
        assert_eq!(p.tagged.ids(), &[3, 5]);
    }

    #[test]
    fn permit_all_short_circuits_later_merges() {
        let mut p = port();
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port trunk permit vlan all");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port trunk permit vlan 7");
        assert_eq!(p.tagged, VlanList::All);
    }

    #[test]
    fn hybrid_untagged_takes_ids_before_keyword() {
        let mut p = port();
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port link-type hybrid");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port hybrid vlan 20 untagged");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port hybrid vlan 30 untagged");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port hybrid vlan 4 tagged");
        assert_eq!(p.mode, PortMode::Hybrid);
        assert_eq!(p.untagged.ids(), &[20, 30]);
        assert_eq!(p.tagged.ids(), &[4]);
    }

    #[test]
    fn access_vlan_replaces_untagged() {
        let mut p = port();
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port hybrid vlan 20 untagged");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port access vlan 10");
        assert_eq!(p.mode, PortMode::Access);
        assert_eq!(p.untagged.ids(), &[10]);
    }

    #[test]
    fn port_scalar_fields() {
        let mut p = port();
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "voice-vlan 1716 enable");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "lldp tlv-enable med-tlv network-policy 1");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "loopback-detection enable vlan 1 to 4094");
        dispatch(PHYSICAL_DIRECTIVES, &mut p, "port link-aggregation group 13");
        assert_eq!(p.voice_vlan, Some(1716));
        assert_eq!(p.lldp_med_policy, Some(1));
        assert_eq!(p.loop_protect.as_deref(), Some("1 to 4094"));
        assert_eq!(p.lag.as_deref(), Some("13"));
    }

    #[test]
    fn unknown_lines_are_not_dispatched() {
        let mut p = port();
        assert_eq!(
            dispatch(PHYSICAL_DIRECTIVES, &mut p, "stp edged-port"),
            None
        );
        assert_eq!(p, port());
    }

    #[test]
    fn vlan_block_name_and_snooping() {
        let mut vlan = VlanEntry::default();
        dispatch(VLAN_DIRECTIVES, &mut vlan, "name Users");
        dispatch(VLAN_DIRECTIVES, &mut vlan, "igmp-snooping enable");
        assert_eq!(vlan.name.as_deref(), Some("Users"));
        assert!(vlan.igmp_snooping);
    }
}
