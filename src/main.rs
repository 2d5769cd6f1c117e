// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use coffee_env::config::{DEFAULT_CONFIG_DIR, ENVIRONMENT_ENV};
use coffee_env::{logging, AppContext, ConfigLoader, Environment};
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "coffee-env",
    about = "Load, validate and use the coffee shop environment configuration",
    version
)]
struct Args {
    /// Environment to load (development, staging, production)
    #[arg(short, long, env = ENVIRONMENT_ENV, default_value = "development")]
    env: Environment,

    /// Configuration file to use instead of <config-dir>/<env>.json
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding per-environment JSON files
    #[arg(long, value_name = "DIR", default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the configuration and print it (default)
    Check {
        /// Also fetch the identity provider's signing keys
        #[arg(long)]
        online: bool,
    },
    /// Print the identity provider login link
    LoginUrl {
        /// Opaque value echoed back on the callback
        #[arg(long)]
        state: Option<String>,
    },
    /// Print the identity provider logout link
    LogoutUrl,
    /// List drinks from the backend
    Drinks,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let mut loader = ConfigLoader::new(args.env).with_config_dir(&args.config_dir);
    if let Some(path) = &args.config {
        loader = loader.with_config_file(path);
    }
    let loaded = loader.load();

    // Verbosity follows the loaded flag; fall back to the environment default
    // so a broken config is still reported.
    let production = loaded
        .as_ref()
        .map(|config| config.production())
        .unwrap_or(args.env.is_production());
    if let Err(e) = logging::init(&args.verbosity, production) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!(environment = %args.env, error = %e, "Invalid configuration, refusing to start");
            return ExitCode::FAILURE;
        }
    };

    let config_file = loader.resolved_file().ok().flatten();
    info!(
        environment = %args.env,
        config_file = ?config_file,
        production = config.production(),
        api_server_url = config.api_server_url_str(),
        tenant = config.auth().domain(),
        client_id = config.auth().client_id(),
        "Configuration loaded"
    );

    let ctx = match AppContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "Failed to initialize clients");
            return ExitCode::FAILURE;
        }
    };

    match args.command.unwrap_or(Command::Check { online: false }) {
        Command::Check { online } => check(&ctx, online).await,
        Command::LoginUrl { state } => {
            println!("{}", ctx.identity.authorize_url(state.as_deref()));
            ExitCode::SUCCESS
        }
        Command::LogoutUrl => {
            println!("{}", ctx.identity.logout_url());
            ExitCode::SUCCESS
        }
        Command::Drinks => match ctx.api.get_drinks().await {
            Ok(drinks) => {
                for drink in drinks {
                    println!("{:>4}  {}", drink.id, drink.title);
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch drinks");
                ExitCode::FAILURE
            }
        },
    }
}

async fn check(ctx: &AppContext, online: bool) -> ExitCode {
    if online {
        if let Err(e) = ctx.identity.jwks().refresh().await {
            error!(error = %e, jwks_url = %ctx.identity.jwks().jwks_url(), "Identity provider keys unavailable");
            return ExitCode::FAILURE;
        }
        info!(tenant = ctx.identity.tenant_host(), "Identity provider keys fetched");
    }

    match serde_json::to_string_pretty(&ctx.config.to_raw()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to serialize configuration");
            ExitCode::FAILURE
        }
    }
}
