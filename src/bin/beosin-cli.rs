use std::path::PathBuf;
use std::process::ExitCode;

use beosin::config::{read_config, validate_config, ClientConfig};
use beosin::{
    chain, AddressRiskRequest, BlackScreeningRequest, Client, DepositRequest, Error, MaliciousAddressRequest,
    VaspRequest, WithdrawalRequest,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

#[derive(Parser)]
#[command(name = "beosin-cli")]
#[command(about = "Command line client for the Beosin KYT API", long_about = None)]
struct Cli {
    /// TOML file with base_url, app_id, app_secret, timeout_secs, debug
    #[arg(short, long, env = "BEOSIN_CONFIG")]
    config: Option<PathBuf>,

    #[arg(long, env = "BEOSIN_BASE_URL")]
    base_url: Option<String>,

    #[arg(long, env = "BEOSIN_APP_ID")]
    app_id: Option<String>,

    #[arg(long, env = "BEOSIN_APP_SECRET", hide_env_values = true)]
    app_secret: Option<String>,

    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log request URLs and raw responses
    #[arg(short, long, env = "BEOSIN_DEBUG")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TxArgs {
    /// Transaction hash
    hash: String,
    /// Chain name (eth, bsc, tron, ...) or raw chain id
    #[arg(long, default_value = "eth")]
    chain: String,
    /// Token contract address; native token when omitted
    #[arg(long)]
    token: Option<String>,
}

#[derive(Args)]
struct AddressArgs {
    address: String,
    #[arg(long, default_value = "eth")]
    chain: String,
    #[arg(long)]
    token: Option<String>,
}

#[derive(Args)]
struct TagArgs {
    address: String,
    #[arg(long, default_value = "eth")]
    chain: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show remaining credits
    Balance,
    /// Assess a deposit transaction
    Deposit(TxArgs),
    /// Assess a withdrawal transaction
    Withdraw(TxArgs),
    /// Assess an EOA address
    AddressRisk(AddressArgs),
    /// Look up malicious / sanction tags for an address
    Malicious(TagArgs),
    /// Check whether an address belongs to a VASP
    Vasp(TagArgs),
    /// Assess an EOA address (v4)
    V4AddressRisk(AddressArgs),
    /// Assess a deposit transaction (v4)
    V4Deposit(TxArgs),
    /// Assess a withdrawal transaction (v4)
    V4Withdraw(TxArgs),
    /// Screen an address against black lists
    Screen {
        address: String,
        /// Platform short name (bsc, eth, ...)
        #[arg(long, default_value = "eth")]
        platform: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Client(#[from] Error),

    #[error("failed to encode output: {0}")]
    Encode(serde_json::Error),
}

fn to_json<T: Serialize>(value: T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(CliError::Encode)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    beosin::observability::logging::init(config.debug);

    let client = match config.into_builder().build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli.command).await {
        Ok(json) => match serde_json::to_string_pretty(&json) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(CliError::Client(Error::Api(api))) => {
            eprintln!("API error {}: {}", api.code, api.message);
            if api.is_task_executing() {
                eprintln!("The assessment is still running, retry later.");
            }
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// File values first, then flags and environment on top.
fn resolve_config(cli: &Cli) -> Result<ClientConfig, Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ClientConfig::default(),
    };

    if let Some(url) = &cli.base_url {
        config.base_url = url.clone();
    }
    if let Some(id) = &cli.app_id {
        config.app_id = id.clone();
    }
    if let Some(secret) = &cli.app_secret {
        config.app_secret = secret.clone();
    }
    if let Some(secs) = cli.timeout_secs {
        config.timeout_secs = secs;
    }
    config.debug |= cli.debug;

    if let Err(errors) = validate_config(&config) {
        let msg: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return Err(format!("invalid configuration: {}", msg.join(", ")).into());
    }
    Ok(config)
}

fn deposit(args: TxArgs) -> DepositRequest {
    DepositRequest {
        chain_id: chain::resolve(&args.chain).to_string(),
        hash: args.hash,
        token: args.token,
    }
}

fn withdrawal(args: TxArgs) -> WithdrawalRequest {
    WithdrawalRequest {
        chain_id: chain::resolve(&args.chain).to_string(),
        hash: args.hash,
        token: args.token,
    }
}

fn address_risk(args: AddressArgs) -> AddressRiskRequest {
    AddressRiskRequest {
        chain_id: chain::resolve(&args.chain).to_string(),
        address: args.address,
        token: args.token,
    }
}

async fn run(client: &Client, command: Commands) -> Result<Value, CliError> {
    let json = match command {
        Commands::Balance => to_json(client.get_account_balance().await?)?,
        Commands::Deposit(args) => to_json(client.deposit_transaction_assessment(&deposit(args)).await?)?,
        Commands::Withdraw(args) => {
            to_json(client.withdrawal_transaction_assessment(&withdrawal(args)).await?)?
        }
        Commands::AddressRisk(args) => {
            to_json(client.eoa_address_risk_assessment(&address_risk(args)).await?)?
        }
        Commands::Malicious(args) => {
            let req = MaliciousAddressRequest {
                chain_id: chain::resolve(&args.chain).to_string(),
                address: args.address,
            };
            to_json(client.malicious_address_query(&req).await?)?
        }
        Commands::Vasp(args) => {
            let req = VaspRequest {
                chain_id: chain::resolve(&args.chain).to_string(),
                address: args.address,
            };
            to_json(client.vasp_query(&req).await?)?
        }
        Commands::V4AddressRisk(args) => {
            to_json(client.v4_eoa_address_risk_assessment(&address_risk(args)).await?)?
        }
        Commands::V4Deposit(args) => {
            to_json(client.v4_deposit_transaction_assessment(&deposit(args)).await?)?
        }
        Commands::V4Withdraw(args) => {
            to_json(client.v4_withdrawal_transaction_assessment(&withdrawal(args)).await?)?
        }
        Commands::Screen { address, platform } => {
            let resp = client
                .black_address_screening(&BlackScreeningRequest { platform, address })
                .await?;
            if let Some(data) = resp.data.as_ref().filter(|d| d.has_any_risk()) {
                eprintln!("Flagged: {}", data.risk_categories().join(", "));
            }
            to_json(resp)?
        }
    };
    Ok(json)
}
