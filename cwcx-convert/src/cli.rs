use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use cwcx_convert::report::TableSection;

#[derive(Parser, Debug)]
#[command(name = "cwcx-convert")]
#[command(about = "Convert H3C Comware switch configurations to Aruba AOS-CX")]
pub struct Cli {
    /// Log filter (error, warn, info, debug, trace). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert one Comware config to AOS-CX.
    Convert(ConvertArgs),
    /// Show the parsed and normalized model as tables or JSON.
    Inspect(InspectArgs),
    /// Draw the front-panel port grid of the target stack.
    Grid(GridArgs),
}

#[derive(Parser, Debug)]
pub struct StackArgs {
    /// Switch model of each stack member, in unit order (12, 24, 48, 6100-48, ...).
    #[arg(long = "unit", value_name = "MODEL", default_values_t = vec!["48".to_string()])]
    pub units: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Comware config file to convert.
    pub input: PathBuf,
    /// Output file path. Writes to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Target hostname. Defaults to the source sysname, then the profile default.
    #[arg(long)]
    pub hostname: Option<String>,
    /// Admin password. Defaults to the profile default.
    #[arg(long)]
    pub password: Option<String>,
    #[command(flatten)]
    pub stack: StackArgs,
    /// Site profile TOML. Defaults to the embedded profile.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    /// Manual edits TOML applied before generation.
    #[arg(long)]
    pub edits: Option<PathBuf>,
    /// Fail when any port is dropped or any edit is rejected.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Comware config file to inspect.
    pub input: PathBuf,
    #[command(flatten)]
    pub stack: StackArgs,
    /// Only show one table.
    #[arg(long, value_enum)]
    pub section: Option<SectionArg>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct GridArgs {
    /// Comware config file to draw.
    pub input: PathBuf,
    #[command(flatten)]
    pub stack: StackArgs,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum SectionArg {
    Svi,
    Lag,
    Int,
    Vlan,
}

impl From<SectionArg> for TableSection {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Svi => TableSection::Svi,
            SectionArg::Lag => TableSection::Lag,
            SectionArg::Int => TableSection::Int,
            SectionArg::Vlan => TableSection::Vlan,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
