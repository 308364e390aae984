use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use post_gen_hook::config::{self, DEFAULT_CONFIG_FILE};
use post_gen_hook::hook::InstallHook;
use post_gen_hook::runner::process::ProcessRunner;

#[derive(Parser)]
#[command(name = "post-gen-hook")]
#[command(version, about = "Create the generated project's conda environment from environment.yml")]
struct Cli {
    /// Answer to "install the environment?"; only "y" (any case) installs
    #[arg(env = "INSTALL_ENVIRONMENT")]
    install_environment: Option<String>,

    /// Settings file consulted when no answer is given
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() -> Result<()> {
    // Stdout carries the hook's messages; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("post_gen_hook=warn")),
        )
        .init();

    // Must run before parsing so INSTALL_ENVIRONMENT can come from .env.
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            tracing::debug!("no .env file");
        } else {
            tracing::warn!(error = %e, "ignoring .env file");
        }
    }

    let cli = Cli::parse();
    let flag = config::resolve_flag(cli.install_environment, &cli.config);

    // Neither the install outcome nor the settings file changes the exit status.
    let outcome = InstallHook::new(ProcessRunner).run(flag, &mut io::stdout().lock())?;
    tracing::debug!(?outcome, "hook finished");

    Ok(())
}
