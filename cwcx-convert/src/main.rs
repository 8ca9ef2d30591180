use anyhow::Result;
use clap::Parser;

mod cli;
mod convert_cmd;
mod grid_cmd;
mod inspect_cmd;
mod path_guard;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Command::Convert(args) => convert_cmd::run_convert(args),
        Command::Inspect(args) => inspect_cmd::run_inspect(args),
        Command::Grid(args) => grid_cmd::run_grid(args),
    }
}

fn init_logging(level: Option<&str>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.parse_filters(level);
    }
    builder.init();
}
