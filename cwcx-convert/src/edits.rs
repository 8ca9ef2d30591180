//! Manual corrections applied to a normalized model before generation.
//!
//! Edits are read from a TOML file:
//!
//! ```toml
//! [[interface]]
//! name = "1/1/5"            # target address or Comware name
//! description = "printer"
//! lag = "13"                # "" or "-" removes the port from its LAG
//!
//! [[lag]]
//! name = "13"               # LAG number or Bridge-Aggregation key
//! description = "to core"
//!
//! [[svi]]
//! name = "Vlan-interface10"
//! description = "users"
//! ```

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use cli_config_core::sorted_names;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{lag_number, ConfigModel, LAG_PREFIX};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InterfaceEdit {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DescriptionEdit {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A batch of edits, applied in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Edits {
    #[serde(default, rename = "interface")]
    pub interfaces: Vec<InterfaceEdit>,
    #[serde(default, rename = "lag")]
    pub lags: Vec<DescriptionEdit>,
    #[serde(default, rename = "svi")]
    pub svis: Vec<DescriptionEdit>,
}

impl Edits {
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.lags.is_empty() && self.svis.is_empty()
    }
}

/// An edit that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EditWarning {
    UnknownInterface { name: String },
    UnknownLag { name: String },
    UnknownSvi { name: String },
    LagNotAvailable { interface: String, lag: String },
}

impl Display for EditWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EditWarning::UnknownInterface { name } => write!(f, "edit: no interface '{name}'"),
            EditWarning::UnknownLag { name } => write!(f, "edit: no LAG '{name}'"),
            EditWarning::UnknownSvi { name } => write!(f, "edit: no VLAN interface '{name}'"),
            EditWarning::LagNotAvailable { interface, lag } => {
                write!(f, "edit: LAG {lag} for '{interface}' does not exist")
            }
        }
    }
}

/// Errors returned when loading an edits file.
#[derive(Debug, Error)]
pub enum EditsLoadError {
    #[error("failed to read edits file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse edits file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

pub fn load_edits(path: &Path) -> Result<Edits, EditsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| EditsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| EditsLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// LAG numbers a port may be assigned to, in interface order.
pub fn available_lags(model: &ConfigModel) -> Vec<String> {
    sorted_names(model.lags.keys())
        .into_iter()
        .map(|key| lag_number(key).to_string())
        .collect()
}

fn lag_key(name: &str) -> String {
    if name.starts_with(LAG_PREFIX) {
        name.to_string()
    } else {
        format!("{LAG_PREFIX}{name}")
    }
}

fn port_key(model: &ConfigModel, name: &str) -> Option<String> {
    if model.ports.contains_key(name) {
        return Some(name.to_string());
    }
    model
        .ports
        .iter()
        .find(|(_, port)| port.source_name == name)
        .map(|(key, _)| key.clone())
}

/// Apply `edits` to `model`, returning the edits that were rejected.
pub fn apply_edits(model: &mut ConfigModel, edits: &Edits) -> Vec<EditWarning> {
    let mut warnings = Vec::new();
    let lags = available_lags(model);

    for edit in &edits.interfaces {
        let Some(key) = port_key(model, &edit.name) else {
            warnings.push(EditWarning::UnknownInterface {
                name: edit.name.clone(),
            });
            continue;
        };
        let Some(port) = model.ports.get_mut(&key) else {
            continue;
        };
        if let Some(description) = &edit.description {
            port.description = description.trim().to_string();
        }
        if let Some(lag) = edit.lag.as_deref().map(str::trim) {
            if lag.is_empty() || lag == "-" {
                port.lag = None;
            } else if lags.iter().any(|known| known == lag_number(lag)) {
                port.lag = Some(lag_number(lag).to_string());
            } else {
                warnings.push(EditWarning::LagNotAvailable {
                    interface: edit.name.clone(),
                    lag: lag.to_string(),
                });
            }
        }
        log::debug!("edit: applied interface edit to {key}");
    }

    for edit in &edits.lags {
        match model.lags.get_mut(&lag_key(&edit.name)) {
            Some(lag) => {
                if let Some(description) = &edit.description {
                    lag.description = description.trim().to_string();
                }
            }
            None => warnings.push(EditWarning::UnknownLag {
                name: edit.name.clone(),
            }),
        }
    }

    for edit in &edits.svis {
        match model.svis.get_mut(&edit.name) {
            Some(svi) => {
                if let Some(description) = &edit.description {
                    svi.description = description.trim().to_string();
                }
            }
            None => warnings.push(EditWarning::UnknownSvi {
                name: edit.name.clone(),
            }),
        }
    }

    for warning in &warnings {
        log::warn!("{warning}");
    }
    warnings
}
