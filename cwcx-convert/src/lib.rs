//! H3C Comware to Aruba AOS-CX switch configuration conversion.
//!
//! This library turns a Comware running configuration into an AOS-CX
//! configuration for a possibly different stack of switches. Port identities
//! are renumbered for the target hardware, uplink-class ports are packed
//! into the target units' SFP cages, and several per-port settings that have
//! no one-to-one counterpart (native VLAN, allowed VLAN set, QoS trust,
//! loop-protect) are derived from the parsed model.
//!
//! # Architecture
//!
//! ## Pipeline
//!
//! - [`parser`]: Stateful line scanner building the interface/VLAN model
//! - [`topology`]: Target stack layout resolved from switch model tokens
//! - [`mapper`]: Source to target port mapping and SFP cage allocation
//! - [`normalize`]: Re-keys physical ports onto the target stack
//! - [`generate`]: Renders the model as AOS-CX configuration text
//!
//! ## Model & Site Data
//!
//! - [`model`]: SVI, LAG, physical port and VLAN entries
//! - [`profile`]: Site profile holding the VLAN catalog and banner text
//! - [`edits`]: Manual corrections applied before generation
//!
//! ## Reporting
//!
//! - [`report`]: Table views and warning lines
//! - [`grid`]: Front-panel port grid of the target stack
//! - [`conversion_summary`]: Post-conversion counts
//!
//! # Workflow
//!
//! 1. **Resolve** the target stack from switch model tokens
//! 2. **Parse & normalize** the source text; unmappable ports become warnings
//! 3. **Edit** descriptions and LAG membership if needed
//! 4. **Generate** the target configuration
//!
//! # Examples
//!
//! ```ignore
//! use cwcx_convert::generate::{generate, GenerateParams};
//! use cwcx_convert::normalize::parse_config;
//! use cwcx_convert::profile::default_profile;
//! use cwcx_convert::topology::StackTopology;
//!
//! let topology = StackTopology::from_models(&["48", "24"]);
//! let outcome = parse_config(&text, &topology);
//! let profile = default_profile();
//! let params = GenerateParams::with_defaults(&profile, topology);
//! println!("{}", generate(&outcome.model, &params, &profile));
//! ```
//!
//! # Built on cli-config-core
//!
//! Interface ordering, VLAN lists, port addresses and stanza output come from
//! `cli-config-core`. Everything Comware- or AOS-CX-specific lives here.

pub mod conversion_summary;
pub mod edits;
pub mod generate;
pub mod grid;
pub mod mapper;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod profile;
pub mod report;
pub mod topology;
