//! Terminal front end: argument parsing, logging setup, and the menu loop.

mod render;
mod setup;
mod shell;
mod styles;
mod templates;

use blotter::api::Blog;
use blotter::config::BlogConfig;
use blotter::error::Result;
use blotter::store::fs::JsonFileStore;
use clap::Parser;
use console::Term;
use render::Renderer;
use setup::Cli;
use shell::Shell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = cli.config.unwrap_or_else(|| PathBuf::from("."));
    let config = BlogConfig::load(&config_dir)?.with_overrides(cli.store, cli.export);
    tracing::debug!(?config, "resolved config");

    let mut blog = Blog::open(JsonFileStore::new(&config.store_file))?;

    let use_color = Term::stdout().features().colors_supported();
    let renderer = Renderer::new(use_color)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(
        &mut blog,
        stdin.lock(),
        stdout.lock(),
        renderer,
        config.export_file,
    )
    .run()
}

/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins over `--verbose` when set.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose)
        .compact()
        .init();
}
