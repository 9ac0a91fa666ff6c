use super::LogFormat;

use clap::{Parser, Subcommand};

/// Shared entry point of the gmatch command line ports.
///
/// Each port provides its own set of subcommands while the logging options are
/// common to all of them.
#[derive(Parser, Debug)]
#[clap(version, author)]
pub struct CliLauncher<T: Subcommand> {
    #[clap(subcommand)]
    pub opts: T,

    #[clap(long)]
    pub log_level: Option<String>,

    #[clap(long)]
    pub log_file: Option<String>,

    #[clap(long, default_value = "ansi")]
    pub log_format: LogFormat,
}
