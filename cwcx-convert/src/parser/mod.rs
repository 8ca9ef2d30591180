//! Stateful line scanner for Comware running configurations.
//!
//! The scanner walks the text once, tracking the currently open block.
//! Block headers (`interface …`, `vlan …`) create or reuse model entries;
//! every other line inside a block is handed to the directive table of the
//! block's kind (see [`directives`]).

pub mod directives;

use crate::mapper::{port_class, UPLINK_PREFIXES};
use crate::model::{ConfigModel, PhysicalEntry, PortClass, VlanEntry, LAG_PREFIX, SVI_PREFIX};

use directives::{dispatch, LAG_DIRECTIVES, PHYSICAL_DIRECTIVES, SVI_DIRECTIVES, VLAN_DIRECTIVES};

/// Kind of the block currently open.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Svi(String),
    Lag(String),
    Physical(String),
    /// An interface kind the model does not track (LoopBack, NULL, …).
    Other,
    Vlan(u16),
}

#[derive(Debug, Default)]
struct Scanner {
    model: ConfigModel,
    current: Option<Block>,
    in_block: bool,
    ignored: usize,
}

impl Scanner {
    fn reset(&mut self) {
        self.current = None;
        self.in_block = false;
    }

    fn scan_line(&mut self, line: &str) {
        if line.starts_with('#') || (line.is_empty() && !self.in_block) {
            self.reset();
            return;
        }

        if let Some(name) = line.strip_prefix("interface ") {
            self.open_interface(name.trim());
            return;
        }

        if let Some(arg) = line.strip_prefix("vlan ") {
            if !line.contains("interface") {
                self.open_vlan(arg.trim());
                return;
            }
        }

        let Some(block) = self.current.as_ref() else {
            return;
        };

        let handled = match block {
            Block::Svi(key) => self
                .model
                .svis
                .get_mut(key)
                .and_then(|svi| dispatch(SVI_DIRECTIVES, svi, line)),
            Block::Lag(key) => self
                .model
                .lags
                .get_mut(key)
                .and_then(|lag| dispatch(LAG_DIRECTIVES, lag, line)),
            Block::Physical(key) => self
                .model
                .ports
                .get_mut(key)
                .and_then(|port| dispatch(PHYSICAL_DIRECTIVES, port, line)),
            Block::Vlan(id) => self
                .model
                .vlans
                .get_mut(id)
                .and_then(|vlan| dispatch(VLAN_DIRECTIVES, vlan, line)),
            Block::Other => None,
        };

        if handled.is_none() {
            self.ignored += 1;
        }
    }

    fn open_interface(&mut self, name: &str) {
        self.in_block = true;
        let block = if name.starts_with(SVI_PREFIX) {
            self.model.svis.entry(name.to_string()).or_default();
            Block::Svi(name.to_string())
        } else if name.starts_with(LAG_PREFIX) {
            self.model.lags.entry(name.to_string()).or_default();
            Block::Lag(name.to_string())
        } else if is_physical(name) {
            let class = port_class(name).unwrap_or(PortClass::Standard);
            self.model
                .ports
                .entry(name.to_string())
                .or_insert_with(|| PhysicalEntry::new(name, class));
            Block::Physical(name.to_string())
        } else {
            log::debug!("parser: untracked interface '{name}'");
            Block::Other
        };
        log::debug!("parser: open {block:?}");
        self.current = Some(block);
    }

    fn open_vlan(&mut self, arg: &str) {
        if arg.is_empty() || !arg.chars().all(|c| c.is_ascii_digit()) {
            return;
        }
        let Ok(id) = arg.parse::<u16>() else {
            return;
        };
        self.model.vlans.entry(id).or_insert_with(VlanEntry::default);
        self.current = Some(Block::Vlan(id));
    }
}

fn is_physical(name: &str) -> bool {
    name.contains("Ethernet") || UPLINK_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Scan configuration text into a model keyed by source interface names.
///
/// The result is not yet mapped onto a target stack; see
/// [`crate::normalize::parse_config`] for the full pipeline.
pub fn parse(text: &str) -> ConfigModel {
    let mut scanner = Scanner::default();
    for raw in text.split('\n') {
        scanner.scan_line(raw.trim());
    }
    log::info!(
        "parsed {} svis, {} lags, {} ports, {} vlans ({} lines ignored)",
        scanner.model.svis.len(),
        scanner.model.lags.len(),
        scanner.model.ports.len(),
        scanner.model.vlans.len(),
        scanner.ignored
    );
    scanner.model
}

/// Hostname declared by the first `sysname` line, if any.
pub fn extract_hostname(text: &str) -> Option<String> {
    text.lines()
        .find(|line| line.contains("sysname"))
        .and_then(|line| line.split_whitespace().nth(1))
        .map(str::to_string)
}
