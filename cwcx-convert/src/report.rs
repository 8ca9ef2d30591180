use colored::Colorize;
use cli_config_core::sorted_names;

use crate::model::ConfigModel;

/// One of the four model tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableSection {
    Svi,
    Lag,
    Int,
    Vlan,
}

impl TableSection {
    pub const ALL: [TableSection; 4] = [
        TableSection::Svi,
        TableSection::Lag,
        TableSection::Int,
        TableSection::Vlan,
    ];

    pub fn title(self) -> &'static str {
        match self {
            TableSection::Svi => "int_vlan",
            TableSection::Lag => "int_lag",
            TableSection::Int => "int_phy",
            TableSection::Vlan => "vlan",
        }
    }
}

/// Render the requested tables, or all four when `section` is `None`.
pub fn render_tables(model: &ConfigModel, section: Option<TableSection>) -> String {
    let sections: Vec<TableSection> = match section {
        Some(one) => vec![one],
        None => TableSection::ALL.to_vec(),
    };
    sections
        .into_iter()
        .map(|section| render_section(model, section))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render one `warning: <message>` line per warning.
pub fn render_warnings<W: std::fmt::Display>(warnings: &[W]) -> String {
    warnings
        .iter()
        .map(|w| format!("warning: {w}").yellow().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_section(model: &ConfigModel, section: TableSection) -> String {
    let (headers, rows) = match section {
        TableSection::Svi => svi_rows(model),
        TableSection::Lag => lag_rows(model),
        TableSection::Int => port_rows(model),
        TableSection::Vlan => vlan_rows(model),
    };
    let mut out = vec![section.title().cyan().to_string()];
    out.extend(format_table(&headers, &rows));
    out.join("\n")
}

fn admin(up: bool) -> String {
    let label = if up { "UP" } else { "DOWN" };
    label.to_string()
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn svi_rows(model: &ConfigModel) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = vec!["interface", "admin", "ip", "ip-sub", "dhcp-relay", "description"];
    let rows = sorted_names(model.svis.keys())
        .into_iter()
        .filter_map(|key| model.svis.get(key).map(|svi| (key, svi)))
        .map(|(key, svi)| {
            vec![
                key.to_string(),
                admin(svi.admin_up),
                or_dash(svi.primary_address.as_deref()),
                or_dash(svi.secondary_address.as_deref()),
                if svi.dhcp_relay { "yes" } else { "-" }.to_string(),
                svi.description.clone(),
            ]
        })
        .collect();
    (headers, rows)
}

fn lag_rows(model: &ConfigModel) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = vec!["interface", "admin", "type", "vlan", "description"];
    let rows = sorted_names(model.lags.keys())
        .into_iter()
        .filter_map(|key| model.lags.get(key).map(|lag| (key, lag)))
        .map(|(key, lag)| {
            vec![
                key.to_string(),
                admin(lag.admin_up),
                lag.mode.to_string(),
                lag.vlans.to_string(),
                lag.description.clone(),
            ]
        })
        .collect();
    (headers, rows)
}

fn port_rows(model: &ConfigModel) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = vec![
        "interface",
        "source",
        "admin",
        "agg",
        "type",
        "untag",
        "tag",
        "voice",
        "lldp-med-np",
        "loopback",
        "description",
    ];
    let rows = sorted_names(model.ports.keys())
        .into_iter()
        .filter_map(|key| model.ports.get(key).map(|port| (key, port)))
        .map(|(key, port)| {
            vec![
                key.to_string(),
                port.source_name.clone(),
                admin(port.admin_up),
                or_dash(port.lag.as_deref()),
                port.mode.to_string(),
                port.untagged.to_string(),
                port.tagged.to_string(),
                or_dash(port.voice_vlan),
                or_dash(port.lldp_med_policy),
                or_dash(port.loop_protect.as_deref()),
                port.description.clone(),
            ]
        })
        .collect();
    (headers, rows)
}

fn vlan_rows(model: &ConfigModel) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = vec!["vlan", "name", "ports", "snooping"];
    let rows = model
        .vlans
        .iter()
        .map(|(id, vlan)| {
            vec![
                id.to_string(),
                or_dash(vlan.name.as_deref()),
                vlan.port_count.to_string(),
                if vlan.igmp_snooping { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();
    (headers, rows)
}

fn format_table(headers: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.chars().count());
            }
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{cell:<width$}", width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![format_row(headers.to_vec())];
    if rows.is_empty() {
        out.push("- none".to_string());
    }
    for row in rows {
        out.push(format_row(row.iter().map(String::as_str).collect()));
    }
    out
}
