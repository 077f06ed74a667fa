mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate a config file and exit
    Check {
        /// Path to config file
        #[arg(default_value = "logwatch.hcl")]
        path: PathBuf,

        /// Print errors without hints
        #[arg(short, long, default_value = "false")]
        plain: bool,
    },

    /// Print the resolved configuration, defaults included
    Dump {
        #[arg(default_value = "logwatch.hcl")]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a commented config file with default values
    Init {
        /// Path to config file
        #[arg(default_value = "logwatch.hcl")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path, plain } => check(path, plain),
        ConfigCmd::Dump { path, json, yaml } => dump(path, json, yaml),
        ConfigCmd::Init { path, force } => init(path, force),
    }
}
