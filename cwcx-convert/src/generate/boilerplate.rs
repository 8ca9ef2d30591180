use cli_config_core::{ConfigBlock, ConfigDocument};

use crate::profile::{CatalogVlan, SiteProfile};

/// Banner, identity and site-wide system lines.
pub(super) fn header(doc: &mut ConfigDocument, profile: &SiteProfile, hostname: &str, password: &str) {
    doc.extend(profile.banner_for(hostname));
    doc.blank();
    doc.push(format!("hostname {hostname}"));
    doc.blank();
    doc.push(format!("user admin password plaintext {password}"));
    doc.blank();
    doc.extend(profile.system.iter().cloned());
}

/// One block per catalog VLAN, in catalog order.
pub(super) fn vlan_catalog(doc: &mut ConfigDocument, vlans: &[CatalogVlan]) {
    for vlan in vlans {
        let mut block = ConfigBlock::new(format!("vlan {}", vlan.id));
        if !vlan.name.is_empty() {
            block.line(format!("name {}", vlan.name));
        }
        if let Some(description) = vlan.description.as_deref().filter(|d| !d.is_empty()) {
            block.line(format!("description \"{description}\""));
        }
        if vlan.voice {
            block.line("voice");
        }
        if vlan.igmp {
            block.line("ip igmp snooping enable");
        }
        doc.block(&block);
    }
}
