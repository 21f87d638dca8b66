#![allow(clippy::pedantic)]
#![allow(clippy::unused_async)]

use anyhow::Context;
use clap::Parser;
use tur_config::TurismoConfig;

mod cli;
mod commands;
mod context;
mod output;

use cli::subcommands::AuthCommands;
use context::SessionMode;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tur error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = TurismoConfig::load_with_dotenv().context("failed to load turismo config")?;
    let flags = cli.global_flags(&config.general.default_format);
    init_tracing(flags.quiet, flags.verbose)?;

    match &cli.command {
        cli::Commands::DecodeToken(args) => return commands::decode_token::handle(args, &flags),
        cli::Commands::AssetUrl(args) => {
            return commands::asset_url::handle(args, &flags, &config);
        }
        cli::Commands::Schema(args) => return commands::schema::handle(args, &flags),
        _ => {}
    }

    context::warn_unconfigured(&config);

    let command = cli.command;
    let mut ctx = context::AppContext::init(config, session_mode_for_command(&command)).await;
    commands::dispatch::dispatch(command, &mut ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("TURISMO_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Commands that replace or never need the stored session skip restoring it.
fn session_mode_for_command(command: &cli::Commands) -> SessionMode {
    match command {
        cli::Commands::Auth { action } => match action {
            AuthCommands::Status | AuthCommands::Whoami => SessionMode::Restore,
            AuthCommands::Login(_)
            | AuthCommands::Logout
            | AuthCommands::Register(_)
            | AuthCommands::VerifyEmail(_)
            | AuthCommands::ForgotPassword(_)
            | AuthCommands::ResetPassword(_) => SessionMode::Anonymous,
        },
        _ => SessionMode::Restore,
    }
}
