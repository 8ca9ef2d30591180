//! Front-panel view of the target stack.
//!
//! Each unit is drawn the way the ports sit on the chassis: odd ports on the
//! top row, even ports on the bottom row, SFP cages last.

use cli_config_core::PortAddress;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::model::{ConfigModel, PhysicalEntry, PortMode};
use crate::topology::{StackTopology, StackUnit};

/// Display class of one front-panel port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PortKind {
    Down,
    Lag,
    Trunk,
    Access,
    Hybrid,
    HybridVoice,
    Empty,
    Unused,
}

impl PortKind {
    pub const ALL: [PortKind; 8] = [
        PortKind::Down,
        PortKind::Lag,
        PortKind::Trunk,
        PortKind::Access,
        PortKind::Hybrid,
        PortKind::HybridVoice,
        PortKind::Empty,
        PortKind::Unused,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PortKind::Down => "down",
            PortKind::Lag => "lag",
            PortKind::Trunk => "trunk",
            PortKind::Access => "access",
            PortKind::Hybrid => "hybrid",
            PortKind::HybridVoice => "hybrid-voice",
            PortKind::Empty => "empty",
            PortKind::Unused => "unused",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            PortKind::Down => 'X',
            PortKind::Lag => 'L',
            PortKind::Trunk => 'T',
            PortKind::Access => 'A',
            PortKind::Hybrid => 'H',
            PortKind::HybridVoice => 'V',
            PortKind::Empty => 'E',
            PortKind::Unused => '.',
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            PortKind::Down => text.red(),
            PortKind::Lag => text.magenta(),
            PortKind::Trunk => text.blue(),
            PortKind::Access => text.green(),
            PortKind::Hybrid => text.yellow(),
            PortKind::HybridVoice => text.cyan(),
            PortKind::Empty => text.white(),
            PortKind::Unused => text.dimmed(),
        }
    }
}

fn kind_of(port: &PhysicalEntry) -> PortKind {
    if !port.admin_up {
        return PortKind::Down;
    }
    if port.lag.is_some() {
        return PortKind::Lag;
    }
    match port.mode {
        PortMode::Trunk => PortKind::Trunk,
        PortMode::Access => PortKind::Access,
        PortMode::Hybrid if port.voice_vlan.is_some() => PortKind::HybridVoice,
        PortMode::Hybrid => PortKind::Hybrid,
        PortMode::Unset => PortKind::Empty,
    }
}

/// Classify the port numbered `port` on stack member `unit`.
///
/// The subslot is not considered; the first configured port with a
/// matching unit and port number wins.
pub fn classify_port(model: &ConfigModel, unit: u32, port: u32) -> PortKind {
    model
        .ports
        .iter()
        .find(|(key, _)| {
            key.parse::<PortAddress>()
                .map(|addr| addr.unit == unit && addr.port == port)
                .unwrap_or(false)
        })
        .map(|(_, entry)| kind_of(entry))
        .unwrap_or(PortKind::Unused)
}

/// Port classes of one unit laid out by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitGrid {
    pub unit: u32,
    pub model: String,
    pub top: Vec<(u32, PortKind)>,
    pub bottom: Vec<(u32, PortKind)>,
    pub sfp: Vec<(u32, PortKind)>,
}

pub fn unit_grid(model: &ConfigModel, unit: &StackUnit) -> UnitGrid {
    let classify = |port: u32| (port, classify_port(model, unit.unit, port));
    UnitGrid {
        unit: unit.unit,
        model: unit.model.clone(),
        top: (1..=unit.total_ports).step_by(2).map(classify).collect(),
        bottom: (2..=unit.total_ports).step_by(2).map(classify).collect(),
        sfp: (unit.sfp_start..=unit.sfp_end()).map(classify).collect(),
    }
}

fn render_row(label: &str, cells: &[(u32, PortKind)]) -> String {
    let body: Vec<String> = cells
        .iter()
        .map(|(port, kind)| {
            let symbol = kind.symbol().to_string();
            format!("{port:>3}{}", kind.paint(&symbol))
        })
        .collect();
    format!("  {label:<6}{}", body.join(" "))
}

/// Render every unit of `topology` followed by a legend.
pub fn render_grid(model: &ConfigModel, topology: &StackTopology) -> String {
    let mut out = Vec::new();
    for unit in topology.units() {
        let grid = unit_grid(model, unit);
        out.push(format!(
            "unit {} model={} ports={} sfp={}-{}",
            unit.unit,
            unit.model,
            unit.total_ports,
            unit.sfp_start,
            unit.sfp_end()
        ));
        out.push(render_row("top", &grid.top));
        out.push(render_row("bottom", &grid.bottom));
        out.push(render_row("sfp", &grid.sfp));
        out.push(String::new());
    }
    let legend: Vec<String> = PortKind::ALL
        .iter()
        .map(|kind| format!("{}={}", kind.symbol(), kind.label()))
        .collect();
    out.push(format!("legend: {}", legend.join(" ")));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use cli_config_core::VlanList;

    use super::{classify_port, unit_grid, PortKind};
    use crate::model::{ConfigModel, PhysicalEntry, PortClass, PortMode};
    use crate::topology::StackTopology;

    fn model_with(key: &str, edit: impl FnOnce(&mut PhysicalEntry)) -> ConfigModel {
        let mut port = PhysicalEntry::new("GigabitEthernet1/0/1", PortClass::Standard);
        edit(&mut port);
        let mut model = ConfigModel::default();
        model.ports.insert(key.to_string(), port);
        model
    }

    #[test]
    fn admin_down_wins_over_everything() {
        let model = model_with("1/1/1", |p| {
            p.admin_up = false;
            p.lag = Some("1".to_string());
            p.mode = PortMode::Trunk;
        });
        assert_eq!(classify_port(&model, 1, 1), PortKind::Down);
    }

    #[test]
    fn lag_membership_wins_over_mode() {
        let model = model_with("1/1/1", |p| {
            p.lag = Some("1".to_string());
            p.mode = PortMode::Access;
        });
        assert_eq!(classify_port(&model, 1, 1), PortKind::Lag);
    }

    #[test]
    fn hybrid_splits_on_voice_vlan() {
        let voice = model_with("1/1/1", |p| {
            p.mode = PortMode::Hybrid;
            p.voice_vlan = Some(1090);
        });
        assert_eq!(classify_port(&voice, 1, 1), PortKind::HybridVoice);

        let plain = model_with("1/1/1", |p| {
            p.mode = PortMode::Hybrid;
            p.untagged = VlanList::from_ids([2]);
        });
        assert_eq!(classify_port(&plain, 1, 1), PortKind::Hybrid);
    }

    #[test]
    fn configured_without_mode_is_empty_and_missing_is_unused() {
        let model = model_with("1/1/1", |_| {});
        assert_eq!(classify_port(&model, 1, 1), PortKind::Empty);
        assert_eq!(classify_port(&model, 1, 2), PortKind::Unused);
        assert_eq!(classify_port(&model, 2, 1), PortKind::Unused);
    }

    #[test]
    fn grid_rows_split_odd_even_and_sfp() {
        let topo = StackTopology::single("12");
        let model = model_with("1/1/13", |p| p.mode = PortMode::Trunk);
        let grid = unit_grid(&model, topo.unit(1).expect("unit"));

        let top: Vec<u32> = grid.top.iter().map(|(p, _)| *p).collect();
        let bottom: Vec<u32> = grid.bottom.iter().map(|(p, _)| *p).collect();
        assert_eq!(top, vec![1, 3, 5, 7, 9, 11]);
        assert_eq!(bottom, vec![2, 4, 6, 8, 10, 12]);
        assert_eq!(
            grid.sfp,
            vec![
                (13, PortKind::Trunk),
                (14, PortKind::Unused),
                (15, PortKind::Unused),
                (16, PortKind::Unused)
            ]
        );
    }
}
