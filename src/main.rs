// ts3sdk-client - main.rs
//
// `ts3sdk-probe`: diagnostics for the loader. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. Platform / resource resolution, optional artifact load

use clap::Parser;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use ts3sdk_client::platform::config::{self, PlatformPaths};
use ts3sdk_client::util::error::ClientError;
use ts3sdk_client::{util, BootstrapOptions, LibraryLoader, Resolution};

/// ts3sdk-probe - show where the TeamSpeak 3 SDK client library is loaded from.
///
/// Resolves the platform tag and resource directory exactly as the loader
/// does at startup, and optionally opens the library.
#[derive(Parser, Debug)]
#[command(name = "ts3sdk-probe", version, about)]
struct Cli {
    /// Directory to resolve `node_modules/` and `bin/` against
    /// (default: the directory of this executable).
    #[arg(short = 'b', long = "base-dir")]
    base_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Also open the native artifact.
    #[arg(short = 'l', long = "load")]
    load: bool,

    /// With --load, report whether the artifact exports this symbol.
    /// May be repeated.
    #[arg(short = 's', long = "symbol", requires = "load")]
    symbols: Vec<String>,

    /// Print the protocol constant tables as JSON.
    #[arg(long = "constants")]
    constants: bool,

    /// Print the resolution as JSON instead of text.
    #[arg(long = "json")]
    json: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PlatformPaths::resolve().config_file());
    let (loader_config, problems) = config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        loader_config.log_level.as_deref(),
        loader_config.log_file.as_deref().map(std::path::Path::new),
    );
    for problem in &problems {
        tracing::warn!(error = %problem, "Configuration warning");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "ts3sdk-probe starting"
    );

    if cli.constants {
        return exit_code(print_json(ts3sdk_client::registry()));
    }

    let mut options = BootstrapOptions::default();
    // CLI override > config > executable directory.
    if let Some(base) = cli.base_dir.or(loader_config.base_dir) {
        options.base_dir = base;
    }

    let resolution = match ts3sdk_client::resolve(&options) {
        Ok(r) => r,
        Err(e) => return fail(&e),
    };

    if !cli.json {
        println!("platform:      {}", resolution.platform);
        println!(
            "resource path: {} ({})",
            resolution.resource_path,
            resolution.resource_path.layout.label()
        );
        println!("bindings path: {}", resolution.bindings_path.display());
    }

    let mut report = ProbeReport {
        resolution: &resolution,
        loaded: None,
        symbols: BTreeMap::new(),
    };

    // Load from the resolution printed above; never resolve a second time.
    let client = if cli.load {
        match ts3sdk_client::load_resolved(resolution.clone(), &LibraryLoader) {
            Ok(c) => Some(c),
            Err(e) => return fail(&e),
        }
    } else {
        None
    };

    if let Some(client) = &client {
        report.loaded = Some(client.engine().path().to_path_buf());
        for symbol in &cli.symbols {
            report
                .symbols
                .insert(symbol.clone(), client.engine().has_symbol(symbol));
        }
    }

    if cli.json {
        return exit_code(print_json(&report));
    }

    if let Some(loaded) = &report.loaded {
        println!("loaded:        {}", loaded.display());
    }
    for (symbol, exported) in &report.symbols {
        let found = if *exported { "exported" } else { "missing" };
        println!("symbol:        {symbol} ({found})");
    }

    ExitCode::SUCCESS
}

/// Everything `--json` prints, as a single document.
#[derive(Debug, Serialize)]
struct ProbeReport<'a> {
    #[serde(flatten)]
    resolution: &'a Resolution,

    /// Path of the opened artifact (with `--load`).
    #[serde(skip_serializing_if = "Option::is_none")]
    loaded: Option<PathBuf>,

    /// `--symbol` name -> exported.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    symbols: BTreeMap<String, bool>,
}

/// Pretty-print `value` to stdout. Returns false if serialisation failed.
fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "JSON serialisation failed");
            false
        }
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn fail(err: &ClientError) -> ExitCode {
    tracing::error!(error = %err, "Bootstrap failed");
    eprintln!("error: {err}");
    ExitCode::from(exit_status(err))
}

/// Process exit status for a bootstrap failure: 2 for an unsupported
/// platform, 1 for everything else.
fn exit_status(err: &ClientError) -> u8 {
    match err {
        ClientError::Platform(_) => 2,
        _ => 1,
    }
}
