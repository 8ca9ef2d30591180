//! Source-to-target port identity mapping.
//!
//! Comware addresses ports as `<Prefix><member>/<subslot>/<port>` with a
//! zero-based subslot. AOS-CX uses `<member>/<subslot>/<port>` with a
//! one-based subslot. Standard ports keep their number; uplink-class ports
//! are packed into the unit's SFP cages by [`SfpAllocator`].

use std::collections::BTreeMap;

use cli_config_core::PortAddress;
use thiserror::Error;

use crate::model::PortClass;
use crate::topology::{StackTopology, StackUnit};

/// Prefix of standard access ports.
pub const STANDARD_PREFIX: &str = "GigabitEthernet";

/// Prefixes of uplink-class ports, all mapped into the SFP range.
pub const UPLINK_PREFIXES: &[&str] = &[
    "Ten-GigabitEthernet",
    "Twenty-FiveGigE",
    "FortyGigE",
    "HundredGigE",
];

/// Why a source port has no target address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("unsupported interface prefix in '{name}'")]
    UnsupportedPrefix { name: String },
    #[error("malformed port address in '{name}'")]
    MalformedAddress { name: String },
    #[error("unit {unit} is not part of the stack")]
    UnknownUnit { unit: u32 },
    #[error("port {port} exceeds the {max} ports of unit {unit}")]
    PortOutOfRange { unit: u32, port: u32, max: u32 },
    #[error("no SFP port left on unit {unit} (capacity {capacity})")]
    SfpExhausted { unit: u32, capacity: u32 },
}

/// Split a source port name into its class and the address remainder.
pub fn split_port_name(name: &str) -> Option<(PortClass, &str)> {
    UPLINK_PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .map(|rest| (PortClass::Uplink, rest))
        .or_else(|| {
            name.strip_prefix(STANDARD_PREFIX)
                .map(|rest| (PortClass::Standard, rest))
        })
}

/// Class of a source port name, if its prefix is recognized.
pub fn port_class(name: &str) -> Option<PortClass> {
    split_port_name(name).map(|(class, _)| class)
}

/// Per-run assignment of uplink ports to SFP cages.
///
/// The first request for a source port takes the unit's next free cage;
/// repeated requests return the same cage. A fresh allocator is built for
/// every conversion run.
#[derive(Debug, Default)]
pub struct SfpAllocator {
    assigned: BTreeMap<String, u32>,
    cursors: BTreeMap<u32, u32>,
}

impl SfpAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target port for `source` on `unit`.
    pub fn allocate(&mut self, source: &str, unit: &StackUnit) -> Result<u32, MapError> {
        if let Some(port) = self.assigned.get(source) {
            return Ok(*port);
        }

        let cursor = self.cursors.entry(unit.unit).or_insert(unit.sfp_start);
        if *cursor > unit.sfp_end() {
            return Err(MapError::SfpExhausted {
                unit: unit.unit,
                capacity: unit.sfp_count,
            });
        }

        let port = *cursor;
        *cursor += 1;
        self.assigned.insert(source.to_string(), port);
        log::debug!("sfp: {source} -> unit {} port {port}", unit.unit);
        Ok(port)
    }

    /// Previously assigned target port for `source`.
    pub fn assigned(&self, source: &str) -> Option<u32> {
        self.assigned.get(source).copied()
    }
}

/// Maps source port names onto a target stack.
#[derive(Debug)]
pub struct PortMapper<'a> {
    topology: &'a StackTopology,
    sfp: SfpAllocator,
}

impl<'a> PortMapper<'a> {
    pub fn new(topology: &'a StackTopology) -> Self {
        Self {
            topology,
            sfp: SfpAllocator::new(),
        }
    }

    pub fn topology(&self) -> &StackTopology {
        self.topology
    }

    /// Target address of a source port.
    pub fn map(&mut self, source: &str) -> Result<PortAddress, MapError> {
        let (class, rest) =
            split_port_name(source).ok_or_else(|| MapError::UnsupportedPrefix {
                name: source.to_string(),
            })?;
        let malformed = || MapError::MalformedAddress {
            name: source.to_string(),
        };
        let addr: PortAddress = rest.parse().map_err(|_| malformed())?;
        let target = addr.with_one_based_subslot().ok_or_else(malformed)?;
        let topology = self.topology;
        let unit = topology
            .unit(addr.unit)
            .ok_or(MapError::UnknownUnit { unit: addr.unit })?;

        let port = match class {
            PortClass::Standard => {
                if addr.port > unit.total_ports {
                    return Err(MapError::PortOutOfRange {
                        unit: unit.unit,
                        port: addr.port,
                        max: unit.total_ports,
                    });
                }
                addr.port
            }
            PortClass::Uplink => self.sfp.allocate(source, unit)?,
        };

        Ok(PortAddress { port, ..target })
    }
}
