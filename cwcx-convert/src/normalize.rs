//! Re-key physical ports onto the target stack.
//!
//! After parsing, physical entries are keyed by their Comware names. The
//! normalizer maps each one through a [`PortMapper`] built for this call,
//! visiting source names in canonical interface order so SFP cages are
//! handed out deterministically.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use cli_config_core::sort_by_interface_name;
use serde::{Serialize, Serializer};

use crate::mapper::{MapError, PortMapper};
use crate::model::{ConfigModel, PhysicalEntry};
use crate::parser;
use crate::topology::StackTopology;

/// A non-fatal problem found while building the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConversionWarning {
    /// The port has no target address and was dropped.
    UnmappedPort {
        source: String,
        #[serde(serialize_with = "as_display")]
        reason: MapError,
    },
    /// Another source port already took this target address.
    TargetCollision { source: String, target: String },
}

impl Display for ConversionWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionWarning::UnmappedPort { source, reason } => {
                write!(f, "skipping port '{source}': {reason}")
            }
            ConversionWarning::TargetCollision { source, target } => {
                write!(f, "skipping port '{source}': target {target} already assigned")
            }
        }
    }
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Model and warnings produced by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub model: ConfigModel,
    pub warnings: Vec<ConversionWarning>,
}

/// Parse `text` and map its ports onto `topology`.
pub fn parse_config(text: &str, topology: &StackTopology) -> ParseOutcome {
    let mut model = parser::parse(text);
    let warnings = normalize(&mut model, topology);
    ParseOutcome { model, warnings }
}

/// Replace source-keyed physical entries with target-keyed ones.
///
/// Also recomputes the per-VLAN port counts from the surviving ports.
pub fn normalize(model: &mut ConfigModel, topology: &StackTopology) -> Vec<ConversionWarning> {
    let mut mapper = PortMapper::new(topology);
    let mut warnings = Vec::new();

    let mut entries: Vec<(String, PhysicalEntry)> =
        std::mem::take(&mut model.ports).into_iter().collect();
    sort_by_interface_name(&mut entries, |(name, _)| name.as_str());

    let mut ports = BTreeMap::new();
    for (source, entry) in entries {
        let target = match mapper.map(&source) {
            Ok(addr) => addr.to_string(),
            Err(reason) => {
                log::warn!("skipping port '{source}': {reason}");
                warnings.push(ConversionWarning::UnmappedPort { source, reason });
                continue;
            }
        };
        if ports.contains_key(&target) {
            log::warn!("skipping port '{source}': target {target} already assigned");
            warnings.push(ConversionWarning::TargetCollision { source, target });
            continue;
        }
        log::debug!("normalize: {source} -> {target}");
        ports.insert(target, entry);
    }
    model.ports = ports;

    count_vlan_ports(model);
    warnings
}

fn count_vlan_ports(model: &mut ConfigModel) {
    for (id, vlan) in model.vlans.iter_mut() {
        vlan.port_count = model
            .ports
            .values()
            .filter(|port| {
                port.untagged.ids().contains(id)
                    || port.tagged.is_all()
                    || port.tagged.ids().contains(id)
                    || port.voice_vlan == Some(*id)
            })
            .count() as u32;
    }
}
