//! Primitives for line-oriented network switch configuration text.
//!
//! Dialect-agnostic building blocks shared by the conversion tooling:
//! interface ordering, VLAN membership lists, port addresses, CIDR rendering
//! and stanza-based output assembly.

pub mod address;
pub mod cidr;
pub mod order;
pub mod vlan_list;
pub mod writer;

pub use address::{AddressParseError, PortAddress};
pub use cidr::to_cidr;
pub use order::{compare_interface_names, sort_by_interface_name, sorted_names};
pub use vlan_list::{extract_vlan_ids, join_ids, union_sorted, VlanList};
pub use writer::{write_file, ConfigBlock, ConfigDocument, WriteError, INDENT};
