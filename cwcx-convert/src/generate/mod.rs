//! Render a normalized model as AOS-CX configuration text.

mod boilerplate;
mod interfaces;

use cli_config_core::ConfigDocument;

use crate::model::ConfigModel;
use crate::profile::SiteProfile;
use crate::topology::StackTopology;

pub use interfaces::{lag_block, port_block, trunk_vlans, TrunkVlans};

/// Caller-supplied values for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub hostname: String,
    pub password: String,
    pub topology: StackTopology,
}

impl GenerateParams {
    /// Params using the profile's default hostname and password.
    pub fn with_defaults(profile: &SiteProfile, topology: StackTopology) -> Self {
        Self {
            hostname: profile.defaults.hostname.clone(),
            password: profile.defaults.password.clone(),
            topology,
        }
    }
}

/// Render the full configuration document.
///
/// Lines are joined with `\n` and the text has no trailing newline. The
/// model is not modified, so rendering the same model twice yields the
/// same text.
pub fn generate(model: &ConfigModel, params: &GenerateParams, profile: &SiteProfile) -> String {
    let hostname = non_empty_or(&params.hostname, &profile.defaults.hostname);
    let password = non_empty_or(&params.password, &profile.defaults.password);

    let mut doc = ConfigDocument::new();
    boilerplate::header(&mut doc, profile, hostname, password);
    boilerplate::vlan_catalog(&mut doc, &profile.vlans);
    doc.blank();
    interfaces::lags(&mut doc, model);
    interfaces::ports(&mut doc, model, &params.topology, &profile.policy);
    doc.push(profile.policy.default_route.clone());
    doc.render()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
