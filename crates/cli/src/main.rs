//! FAT CLI - Command-line interface for the FAT daemon JSON-RPC API

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use fat_sdk::{env, ClientConfig, FatdClient, SdkError, TokenParams, DEFAULT_API_VERSION, DEFAULT_HOST};
use serde_json::Value;
use std::path::PathBuf;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "fat_core=warn,fat_sdk=info,fat_cli=info";

#[derive(Parser)]
#[command(name = "fat")]
#[command(about = "FAT daemon JSON-RPC CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(flatten)]
    token: TokenArgs,

    /// Print object results as a field/value table
    #[arg(long, global = true)]
    table: bool,
}

#[derive(Args)]
struct ConnectionArgs {
    /// Daemon URL, including http(s)://
    #[arg(long, global = true, env = env::HOST, default_value = DEFAULT_HOST)]
    host: String,

    /// API version path
    #[arg(long, global = true, env = env::API_VERSION, default_value = DEFAULT_API_VERSION)]
    api_version: String,

    /// RPC username
    #[arg(long, global = true, env = env::RPC_USER)]
    user: Option<String>,

    /// RPC password
    #[arg(long, global = true, env = env::RPC_PASSWORD, hide_env_values = true)]
    password: Option<String>,

    /// PEM certificate to trust for TLS
    #[arg(long, global = true, env = env::TLS_CERT)]
    tls_cert: Option<PathBuf>,
}

#[derive(Args)]
struct TokenArgs {
    /// Token chain id
    #[arg(long, global = true, env = env::CHAIN_ID)]
    chain_id: Option<String>,

    /// Token id (together with --issuer-id)
    #[arg(long, global = true, env = env::TOKEN_ID)]
    token_id: Option<String>,

    /// Issuer identity chain id (together with --token-id)
    #[arg(long, global = true, env = env::ISSUER_ID)]
    issuer_id: Option<String>,

    /// Default FAT address for balance lookups
    #[arg(long, global = true, env = env::FAT_ADDRESS)]
    fat_address: Option<String>,

    /// Default factoid address for balance lookups
    #[arg(long, global = true, env = env::FCT_ADDRESS)]
    fct_address: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the balance of an address
    Balance {
        /// Address (defaults to --fat-address, then --fct-address)
        address: Option<String>,
    },

    /// Get token issuance
    Issuance,

    /// Get the raw issuance entry
    IssuanceEntry,

    /// Get token statistics
    Stats,

    /// Get a transaction by entry hash
    Transaction {
        /// Entry hash
        entry_hash: String,
    },

    /// Get a raw transaction entry by entry hash
    TransactionEntry {
        /// Entry hash
        entry_hash: String,
    },

    /// Get a non-fungible token
    NfToken {
        /// Non-fungible token id
        nf_token_id: String,
    },

    /// Submit a signed transaction
    SendTransaction {
        /// Transaction as JSON string
        #[arg(long)]
        tx: String,

        /// Signature/RCD pairs as JSON string
        #[arg(long)]
        signatures: String,
    },

    /// List tokens tracked by the daemon
    DaemonTokens,

    /// Show daemon properties
    DaemonProperties,
}

#[derive(Tabled)]
struct FieldRow {
    field: String,
    value: String,
}

fn init_logging() {
    let log_format = std::env::var("FAT_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn build_config(cli: &Cli) -> ClientConfig {
    let conn = &cli.connection;
    let token = &cli.token;

    ClientConfig {
        host: conn.host.clone(),
        version: conn.api_version.clone(),
        username: conn.user.clone(),
        password: conn.password.clone(),
        tls_cert: conn.tls_cert.clone(),
        chain_id: token.chain_id.clone(),
        token_id: token.token_id.clone(),
        issuer_id: token.issuer_id.clone(),
        fat_address: token.fat_address.clone(),
        fct_address: token.fct_address.clone(),
    }
}

fn parse_json(raw: &str, what: &str) -> Result<Value> {
    serde_json::from_str(raw).with_context(|| format!("Invalid JSON for {}", what))
}

async fn run(cli: Cli) -> Result<Value> {
    let client = FatdClient::new(build_config(&cli)).context("Failed to create client")?;
    info!(url = %client.url(), "Calling FAT daemon");

    // Identity comes from the configured defaults
    let token = TokenParams::default();

    let result = match cli.command {
        Commands::Balance { address } => client.get_balance(token, address.as_deref()).await?,
        Commands::Issuance => client.get_issuance(token).await?,
        Commands::IssuanceEntry => client.get_issuance_entry(token).await?,
        Commands::Stats => client.get_stats(token).await?,
        Commands::Transaction { entry_hash } => {
            client.get_transaction(token, Some(&entry_hash)).await?
        }
        Commands::TransactionEntry { entry_hash } => {
            client.get_transaction_entry(token, Some(&entry_hash)).await?
        }
        Commands::NfToken { nf_token_id } => {
            client.get_nf_token(token, Some(&nf_token_id)).await?
        }
        Commands::SendTransaction { tx, signatures } => {
            let tx = parse_json(&tx, "--tx")?;
            let signatures = parse_json(&signatures, "--signatures")?;
            client.send_transaction(token, tx, signatures).await?
        }
        Commands::DaemonTokens => client.get_daemon_tokens(token).await?,
        Commands::DaemonProperties => client.get_daemon_properties(token).await?,
    };

    Ok(result)
}

fn field_rows(result: &Value) -> Option<Vec<FieldRow>> {
    let object = result.as_object()?;
    Some(
        object
            .iter()
            .map(|(field, value)| FieldRow {
                field: field.clone(),
                value: match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                },
            })
            .collect(),
    )
}

fn print_result(result: &Value, table: bool) -> Result<()> {
    match field_rows(result).filter(|_| table) {
        Some(rows) => println!("{}", Table::new(rows)),
        None => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn report(err: &anyhow::Error) {
    match err.downcast_ref::<SdkError>() {
        Some(SdkError::Api(api)) => {
            eprintln!(
                "{} {:?} ({}): {}",
                "✗".red().bold(),
                api.kind,
                api.code,
                api.message.red()
            );
            if api.data.as_object().is_some_and(|d| !d.is_empty()) {
                eprintln!("  {} {}", "Data:".bold(), api.data);
            }
        }
        Some(SdkError::Validation(v)) => {
            eprintln!("{} {}", "✗".red().bold(), v.to_string().yellow());
        }
        _ => eprintln!("{} {:#}", "✗".red().bold(), err),
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();
    let table = cli.table;

    let outcome = match run(cli).await {
        Ok(result) => print_result(&result, table),
        Err(e) => Err(e),
    };

    if let Err(e) = outcome {
        report(&e);
        std::process::exit(1);
    }
}
