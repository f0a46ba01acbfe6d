//! # Currency Registry
//!
//! Runs genesis for the currency registry against an in-memory config
//! store: publishes the registry, registers the configured genesis codes,
//! closes genesis and reports the resulting slot.

use clap::Parser;
use config_store::{InMemoryConfigStore, SlotInfo, SlotReader};
use currency_common::config::{LogFormat, LogLevel};
use currency_common::consts::DEFAULT_CONFIG_PATH;
use currency_common::init_tracing;
use currency_registry::bootstrap::bootstrap;
use currency_registry::config::RegistryConfig;
use currency_registry::genesis::GenesisFlag;
use currency_registry::{CurrencyCodeRegistry, RegisteredCurrencies};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

/// Currency Registry — genesis bootstrap
#[derive(Parser, Debug)]
#[command(name = "currency_registry")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Initialize the currency code registry and register genesis currencies")]
struct Args {
    /// Path to registry configuration TOML.
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format, overriding `shared.log_format`.
    #[arg(long)]
    json: bool,

    /// Print the final registry summary as JSON on stdout.
    #[arg(long)]
    print_json: bool,
}

impl Args {
    fn log_format(&self, configured: LogFormat) -> LogFormat {
        if self.json {
            LogFormat::Json
        } else {
            configured
        }
    }
}

/// Final state reported after bootstrap.
#[derive(Debug, Serialize)]
struct RegistrySummary {
    service_name: String,
    version: u64,
    currency_codes: Vec<String>,
    slots: Vec<SlotInfo>,
}

fn main() {
    let args = Args::parse();

    let config = match RegistryConfig::load_validated(&args.config) {
        Ok(config) => config,
        Err(e) => {
            init_tracing(LogLevel::Info, args.log_format(LogFormat::Compact));
            error!("FATAL: {}: {e}", args.config.display());
            process::exit(1);
        }
    };

    let level = if args.verbose {
        LogLevel::Debug
    } else {
        config.shared.log_level
    };
    init_tracing(level, args.log_format(config.shared.log_format));

    info!(
        "Currency Registry v{} starting ({})",
        env!("CARGO_PKG_VERSION"),
        config.shared.service_name
    );

    if let Err(e) = run(&args, &config) {
        error!("FATAL: {e}");
        process::exit(1);
    }
}

fn run(args: &Args, config: &RegistryConfig) -> Result<(), Box<dyn std::error::Error>> {
    let admin = &config.authority.admin;
    let store = InMemoryConfigStore::new(admin.clone());
    let genesis = GenesisFlag::new();
    let roles = config.role_table();
    let registry = CurrencyCodeRegistry::new(&store, &genesis, &roles);

    bootstrap(&registry, admin, &config.genesis_codes())?;
    genesis.end_genesis();

    let mut reader = SlotReader::<RegisteredCurrencies>::attach(&store)?;
    let current = reader.read()?;

    let summary = RegistrySummary {
        service_name: config.shared.service_name.clone(),
        version: reader.version(),
        currency_codes: current
            .currency_codes()
            .iter()
            .map(ToString::to_string)
            .collect(),
        slots: store.list_slots(),
    };

    if args.print_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            version = summary.version,
            "registered currencies: [{}]",
            summary.currency_codes.join(", ")
        );
    }

    Ok(())
}
