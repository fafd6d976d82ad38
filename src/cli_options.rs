use crate::commands::SubCommand;
use std::path::PathBuf;

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Look words up with the Wordnik api")]
pub(crate) struct CliOptions {
    #[argh(
        option,
        description = "the path to the config. defaults to ./.wordnik.toml, then ~/.wordnik.toml"
    )]
    pub(crate) config: Option<PathBuf>,

    #[argh(switch, description = "print responses as the api sent them")]
    pub(crate) raw: bool,

    #[argh(switch, short = 'v', description = "log requests to the stderr")]
    pub(crate) verbose: bool,

    #[argh(subcommand)]
    pub(crate) subcommand: SubCommand,
}
