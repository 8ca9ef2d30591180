//! Target stack layout: one entry per stack member.

use serde::Serialize;

/// Number of SFP cages on every supported model.
pub const SFP_COUNT: u32 = 4;

/// Model used when a token is not recognized.
pub const DEFAULT_MODEL: &str = "48";

/// Supported access port counts, keyed by model token.
const MODELS: &[(&str, u32)] = &[("12", 12), ("24", 24), ("48", 48)];

/// One physical switch of the target stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackUnit {
    /// 1-based stack member number.
    pub unit: u32,
    /// Model token as supplied by the caller.
    pub model: String,
    pub total_ports: u32,
    pub sfp_count: u32,
    pub sfp_start: u32,
}

impl StackUnit {
    /// Last port number of the SFP range.
    pub fn sfp_end(&self) -> u32 {
        self.sfp_start + self.sfp_count - 1
    }

    pub fn is_sfp_port(&self, port: u32) -> bool {
        (self.sfp_start..=self.sfp_end()).contains(&port)
    }

    /// Whether `port` exists on this unit, standard or SFP.
    pub fn has_port(&self, port: u32) -> bool {
        port >= 1 && port <= self.sfp_end()
    }
}

/// Resolved stack topology, ordered by unit number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StackTopology {
    units: Vec<StackUnit>,
}

impl StackTopology {
    /// Resolve `(unit, model)` pairs into stack units.
    ///
    /// Unknown model tokens resolve to [`DEFAULT_MODEL`] rather than failing.
    pub fn resolve<S: AsRef<str>>(pairs: &[(u32, S)]) -> Self {
        let mut units: Vec<StackUnit> = pairs
            .iter()
            .map(|(unit, model)| resolve_unit(*unit, model.as_ref()))
            .collect();
        units.sort_by_key(|u| u.unit);
        units.dedup_by_key(|u| u.unit);
        Self { units }
    }

    /// Resolve models for consecutive units starting at 1.
    pub fn from_models<S: AsRef<str>>(models: &[S]) -> Self {
        let pairs: Vec<(u32, &str)> = models
            .iter()
            .zip(1u32..)
            .map(|(model, unit)| (unit, model.as_ref()))
            .collect();
        Self::resolve(&pairs)
    }

    /// A single-member stack.
    pub fn single(model: &str) -> Self {
        Self::from_models(&[model])
    }

    pub fn unit(&self, unit: u32) -> Option<&StackUnit> {
        self.units.iter().find(|u| u.unit == unit)
    }

    pub fn units(&self) -> &[StackUnit] {
        &self.units
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// Access port count for a model token, if the token is known.
///
/// Tokens with a series prefix (`6100-48`) are reduced to the part after
/// the first `-`.
pub fn model_port_count(token: &str) -> Option<u32> {
    let token = token.trim();
    let short = token.split_once('-').map_or(token, |(_, rest)| rest);
    MODELS
        .iter()
        .find(|(name, _)| *name == short)
        .map(|(_, ports)| *ports)
}

fn resolve_unit(unit: u32, model: &str) -> StackUnit {
    let total_ports = model_port_count(model).unwrap_or_else(|| {
        log::warn!("unknown switch model '{model}' for unit {unit}; assuming {DEFAULT_MODEL} ports");
        model_port_count(DEFAULT_MODEL).unwrap_or(48)
    });
    StackUnit {
        unit,
        model: model.trim().to_string(),
        total_ports,
        sfp_count: SFP_COUNT,
        sfp_start: total_ports + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::{model_port_count, StackTopology};

    #[test]
    fn resolves_known_models_with_sfp_range() {
        let topo = StackTopology::from_models(&["24", "48"]);
        let first = topo.unit(1).expect("unit 1");
        assert_eq!(first.total_ports, 24);
        assert_eq!(first.sfp_start, 25);
        assert_eq!(first.sfp_end(), 28);
        let second = topo.unit(2).expect("unit 2");
        assert_eq!(second.sfp_start, 49);
        assert_eq!(second.sfp_end(), 52);
    }

    #[test]
    fn series_prefixed_tokens_are_reduced() {
        assert_eq!(model_port_count("6100-12"), Some(12));
        assert_eq!(model_port_count("6200-48"), Some(48));
    }

    #[test]
    fn unknown_model_defaults_to_largest() {
        let topo = StackTopology::single("8300-32");
        let unit = topo.unit(1).expect("unit 1");
        assert_eq!(unit.total_ports, 48);
        assert_eq!(unit.sfp_start, 49);
        assert_eq!(unit.model, "8300-32");
    }

    #[test]
    fn explicit_pairs_are_sorted_and_deduplicated() {
        let topo = StackTopology::resolve(&[(2, "12"), (1, "24"), (2, "48")]);
        let numbers: Vec<u32> = topo.units().iter().map(|u| u.unit).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(topo.unit(2).expect("unit 2").total_ports, 12);
    }
}
