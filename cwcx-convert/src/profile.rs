//! Site-specific literals used by the generator.
//!
//! The VLAN catalog, banner, system lines and policy sentinels belong to the
//! site, not to the conversion algorithm, so they live in a TOML profile.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// A VLAN declared unconditionally in every generated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogVlan {
    pub id: u16,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub voice: bool,
    #[serde(default)]
    pub igmp: bool,
}

/// Values used when the caller supplies none.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileDefaults {
    pub hostname: String,
    pub password: String,
}

/// Sentinels that switch on derived per-port lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PortPolicy {
    pub voice_qos_vlan: u16,
    pub qos_tagged_vlan: u16,
    pub loop_detect_source: String,
    pub loop_protect_vlans: String,
    pub default_route: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteProfile {
    #[serde(default)]
    pub banner: Vec<String>,
    #[serde(default)]
    pub system: Vec<String>,
    pub defaults: ProfileDefaults,
    pub policy: PortPolicy,
    #[serde(default, rename = "vlan")]
    pub vlans: Vec<CatalogVlan>,
}

impl SiteProfile {
    /// Banner lines with `{hostname}` substituted.
    pub fn banner_for(&self, hostname: &str) -> Vec<String> {
        self.banner
            .iter()
            .map(|line| line.replace("{hostname}", hostname))
            .collect()
    }
}

/// Errors returned when loading a profile file.
#[derive(Debug, Error)]
pub enum ProfileLoadError {
    #[error("failed to read profile {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load a site profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<SiteProfile, ProfileLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_profile(&raw, path.display().to_string())
}

/// The embedded site profile.
pub fn default_profile() -> SiteProfile {
    let embedded = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/profiles/default.toml"));
    match parse_profile(embedded, "embedded profile".to_string()) {
        Ok(profile) => profile,
        Err(err) => {
            log::warn!("{err}; using built-in fallback profile");
            fallback_profile()
        }
    }
}

fn parse_profile(raw: &str, path: String) -> Result<SiteProfile, ProfileLoadError> {
    toml::from_str(raw).map_err(|source| ProfileLoadError::Parse { path, source })
}

fn fallback_profile() -> SiteProfile {
    SiteProfile {
        banner: Vec::new(),
        system: Vec::new(),
        defaults: ProfileDefaults {
            hostname: "Switch".to_string(),
            password: "admin123".to_string(),
        },
        policy: PortPolicy {
            voice_qos_vlan: 1716,
            qos_tagged_vlan: 4,
            loop_detect_source: "1 to 4094".to_string(),
            loop_protect_vlans: "1-4094".to_string(),
            default_route: "ip route 0.0.0.0/0 172.17.1.100".to_string(),
        },
        vlans: vec![CatalogVlan {
            id: 1,
            name: String::new(),
            description: None,
            voice: false,
            igmp: true,
        }],
    }
}
