use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use stateholder::config::AppConfig;
use stateholder::logging::init_tracing;
use stateholder::settings::SettingsStore;
use stateholder::ui::runtime;

#[derive(Debug, Parser)]
#[command(name = "stateholder", version, about = "Edit session settings in the terminal")]
struct Cli {
    /// Path to a TOML config file (defaults to the user config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Print the final settings as JSON after the screen closes
    #[arg(long)]
    print_on_exit: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Exiting with error");
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
    .context("could not load configuration")?;

    if cli.print_config {
        let rendered = config.to_toml().context("could not render configuration")?;
        print!("{rendered}");
        return Ok(());
    }

    let store = SettingsStore::new();
    let settings = runtime::run(&config, store).context("terminal session failed")?;

    if cli.print_on_exit {
        let json = serde_json::to_string_pretty(&settings)?;
        println!("{json}");
    }
    Ok(())
}
