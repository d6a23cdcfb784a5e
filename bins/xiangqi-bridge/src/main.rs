//! Xiangqi Bridge CLI
//!
//! Hosts the engine method channel locally: answers path queries, lists the
//! supported methods, and diagnoses the resolved app directories.

mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use output::Status;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use xiangqi_channel::{ChannelHost, MethodCall, Outcome};
use xiangqi_core::config::Config;
use xiangqi_core::error::exit_codes;
use xiangqi_core::health::{EnvVarCheck, HealthChecker, HealthStatus, PathCheck};
use xiangqi_platform::{
    AppDirs, PathQuery, PathQueryResponder, ENV_CODE_CACHE_DIR, ENV_FILES_DIR, ENV_NATIVE_LIB_DIR,
};

#[derive(Parser)]
#[command(name = "xiangqi-bridge")]
#[command(about = "Engine channel host and app-directory diagnostics for Xiangqi")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase output verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue one method call on the engine channel and print the reply
    Query {
        /// Wire method name, e.g. getFilesDir
        method: String,
        /// Override the engine channel name
        #[arg(long)]
        channel: Option<String>,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the method names the engine channel answers
    Methods {
        /// Print the names as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the resolved app directories
    Dirs {
        /// Print the directories as JSON
        #[arg(long)]
        json: bool,
    },

    /// Diagnose the resolved directories and override environment
    Doctor {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    init_tracing(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref().and_then(|p| p.to_str()))?;

    let exit_code = match cli.command {
        Commands::Query {
            method,
            channel,
            json,
        } => run_query(&method, channel.as_deref(), json, &config),
        Commands::Methods { json } => run_methods(json),
        Commands::Dirs { json } => run_dirs(json, &config),
        Commands::Doctor { json } => run_doctor(json, &config),
    };

    std::process::exit(exit_code);
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn resolve_dirs(config: &Config) -> Result<AppDirs, i32> {
    AppDirs::detect(&config.schema).map_err(|e| {
        Status::error(&e.to_string());
        match e.code.category() {
            "Configuration" => exit_codes::CONFIG_ERROR,
            _ => exit_codes::FAILURE,
        }
    })
}

fn run_query(method: &str, channel: Option<&str>, json: bool, config: &Config) -> i32 {
    let dirs = match resolve_dirs(config) {
        Ok(dirs) => dirs,
        Err(code) => return code,
    };

    let channel = channel.unwrap_or(&config.schema.channel.engine);

    let mut host = ChannelHost::new();
    host.register(channel, PathQueryResponder::new(dirs));

    let outcome = host.invoke(channel, &MethodCall::new(method));

    if json {
        match serde_json::to_string(&outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                Status::error(&format!("Failed to encode outcome: {}", e));
                return exit_codes::FAILURE;
            }
        }
        return match outcome {
            Outcome::Success(_) => exit_codes::SUCCESS,
            Outcome::NotImplemented => exit_codes::NOT_IMPLEMENTED,
        };
    }

    match outcome {
        Outcome::Success(path) => {
            println!("{}", path);
            exit_codes::SUCCESS
        }
        Outcome::NotImplemented => {
            Status::warning(&format!(
                "Method `{}` is not implemented on channel {}",
                method, channel
            ));
            exit_codes::NOT_IMPLEMENTED
        }
    }
}

fn run_methods(json: bool) -> i32 {
    let names: Vec<&str> = PathQuery::ALL.iter().map(|q| q.method_name()).collect();

    if json {
        match serde_json::to_string(&names) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                Status::error(&format!("Failed to encode method names: {}", e));
                return exit_codes::FAILURE;
            }
        }
        return exit_codes::SUCCESS;
    }

    for name in names {
        println!("{}", name);
    }
    exit_codes::SUCCESS
}

fn run_dirs(json: bool, config: &Config) -> i32 {
    let dirs = match resolve_dirs(config) {
        Ok(dirs) => dirs,
        Err(code) => return code,
    };

    let report = dirs.report();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                Status::error(&format!("Failed to encode directories: {}", e));
                return exit_codes::FAILURE;
            }
        }
        return exit_codes::SUCCESS;
    }

    Status::detail("native_library_dir", &report.native_library_dir);
    Status::detail("code_cache_dir", &report.code_cache_dir);
    Status::detail("files_dir", &report.files_dir);
    exit_codes::SUCCESS
}

fn run_doctor(json: bool, config: &Config) -> i32 {
    let dirs = match resolve_dirs(config) {
        Ok(dirs) => dirs,
        Err(code) => return code,
    };

    let report = HealthChecker::new()
        .add_check(PathCheck::readable(
            "native_library_dir",
            dirs.native_library_dir().to_string_lossy(),
        ))
        .add_check(PathCheck::writable(
            "code_cache_dir",
            dirs.code_cache_dir().to_string_lossy(),
        ))
        .add_check(PathCheck::writable(
            "files_dir",
            dirs.files_dir().to_string_lossy(),
        ))
        .add_check(EnvVarCheck::optional(ENV_NATIVE_LIB_DIR))
        .add_check(EnvVarCheck::optional(ENV_CODE_CACHE_DIR))
        .add_check(EnvVarCheck::optional(ENV_FILES_DIR))
        .run();

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(body) => println!("{}", body),
            Err(e) => {
                Status::error(&format!("Failed to encode report: {}", e));
                return exit_codes::FAILURE;
            }
        }
    } else {
        println!("Environment Check");
        println!();

        for check in &report.checks {
            let summary = match &check.message {
                Some(message) => format!("{}: {}", check.name, message),
                None => check.name.clone(),
            };
            match check.status {
                HealthStatus::Healthy => Status::success(&summary),
                HealthStatus::Degraded => Status::warning(&summary),
                HealthStatus::Unhealthy => Status::error(&summary),
            }
        }
    }

    if report.status.is_operational() {
        exit_codes::SUCCESS
    } else {
        exit_codes::FAILURE
    }
}
