#![deny(
    unused_import_braces,
    unused_lifetimes,
    unreachable_pub,
    trivial_numeric_casts,
    missing_debug_implementations,
    missing_copy_implementations,
    deprecated_in_future,
    meta_variable_misuse,
    non_ascii_idents,
    rust_2018_compatibility,
    rust_2018_idioms,
    future_incompatible,
    nonstandard_style,
    clippy::all
)]
#![warn(variant_size_differences, let_underscore_drop)]

//! # Wordnik CLI

mod cli_options;
mod commands;
mod logger;

use crate::{
    cli_options::CliOptions,
    commands::SubCommand,
};
use anyhow::Context as _;
use tokio::runtime::Builder as RuntimeBuilder;
use tracing::debug;

/// Data from the setup function
struct SetupData {
    tokio_rt: tokio::runtime::Runtime,
    client: wordnik::Client,
    subcommand: SubCommand,
}

/// Pre-main setup
fn setup(cli_options: CliOptions) -> anyhow::Result<SetupData> {
    logger::setup(cli_options.verbose).context("failed to initialize logger")?;

    let tokio_rt = RuntimeBuilder::new_multi_thread()
        .enable_all()
        .thread_name("wordnik-tokio-worker")
        .build()
        .context("failed to start tokio runtime")?;

    let config = match cli_options.config.as_deref() {
        Some(path) => wordnik::Config::load_from_path(path)
            .with_context(|| format!("failed to load config from '{}'", path.display()))?,
        None => wordnik::Config::load().context("failed to load config")?,
    };
    debug!(
        api_host = %config.api_host,
        api_port = config.api_port,
        api_version = %config.api_version,
        "loaded config"
    );

    let client = wordnik::Client::new(config)
        .context("failed to create client")?
        .clean_up(!cli_options.raw);

    Ok(SetupData {
        tokio_rt,
        client,
        subcommand: cli_options.subcommand,
    })
}

/// The main entry.
///
/// Sets up the program and calls `real_main`.
fn main() -> anyhow::Result<()> {
    let cli_options: CliOptions = argh::from_env();

    let setup_data = setup(cli_options)?;
    real_main(setup_data)?;
    Ok(())
}

/// The actual entry point
fn real_main(setup_data: SetupData) -> anyhow::Result<()> {
    let SetupData {
        tokio_rt,
        client,
        subcommand,
    } = setup_data;

    tokio_rt.block_on(subcommand.exec(&client))
}
