mod config;
mod display;

use anyhow::Context;
use clap::{Parser, Subcommand};
use lexcheck_core::{Jurisdiction, format_for_display};
use lexcheck_server::ApiError;
use lexcheck_server::handlers::check::{CheckRequest, validate};
use tracing_subscriber::EnvFilter;

use config::Settings;

#[derive(Parser)]
#[command(name = "lexcheck", version, about = "Legal compliance checks for policy proposals")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve {
        /// Address to listen on.
        #[arg(long, env = "LEXCHECK_BIND", default_value = "0.0.0.0:3000")]
        bind: String,

        #[command(flatten)]
        settings: Settings,
    },
    /// Check a single proposal and print the result.
    Check {
        /// Proposal text.
        proposal: String,

        /// Jurisdiction code: EU or BE.
        #[arg(short, long, default_value = "EU")]
        jurisdiction: Jurisdiction,

        /// Print the JSON response instead of a card.
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        settings: Settings,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,lexcheck=debug".into()),
        )
        .init();
    tracing::info!("lexcheck v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().command {
        Command::Serve { bind, settings } => {
            let state = settings.app_state()?;
            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .with_context(|| format!("binding {bind}"))?;
            lexcheck_server::serve(listener, state).await?;
        }
        Command::Check {
            proposal,
            jurisdiction,
            json,
            settings,
        } => {
            let (proposal, jurisdiction) = checked_input(proposal, jurisdiction)?;
            let state = settings.app_state()?;
            let result = lexcheck_server::check_compliance(
                &state.corpus,
                &state.analyzer,
                &proposal,
                jurisdiction,
            )
            .await;
            let formatted = format_for_display(result);
            if json {
                println!("{}", serde_json::to_string_pretty(&formatted)?);
            } else {
                display::print_result_card(&formatted);
            }
        }
    }
    Ok(())
}

/// Apply the same input rules as `POST /api/check`.
fn checked_input(
    proposal: String,
    jurisdiction: Jurisdiction,
) -> anyhow::Result<(String, Jurisdiction)> {
    let request = CheckRequest {
        proposal: Some(proposal),
        jurisdiction: Some(jurisdiction.code().to_string()),
    };
    validate(request).map_err(|e| match e {
        ApiError::Validation { error, details } => {
            anyhow::anyhow!("{error} {details}")
        }
        other => other.into(),
    })
}
