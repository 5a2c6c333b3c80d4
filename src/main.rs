//! fs-tasks - run a declarative list of filesystem tasks.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fs_tasks::config::Settings;
use fs_tasks::Runner;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", NAME, VERSION);
        return ExitCode::SUCCESS;
    }

    let file_path = match get_flag_value(&args, &["--file-path", "--filePath", "-f"]) {
        Some(path) => path,
        None => {
            eprintln!("Error: must provide a path to the task file (--file-path <PATH>)");
            return ExitCode::FAILURE;
        }
    };
    if !Path::new(&file_path).is_absolute() {
        eprintln!("Error: the task file path must be absolute: {}", file_path);
        return ExitCode::FAILURE;
    }

    let settings = match get_flag_value(&args, &["--config", "-c"]) {
        Some(config_path) => match Settings::load(&config_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };

    if let Err(e) = init_logging(&settings) {
        eprintln!("Error initializing logging: {}", e);
        return ExitCode::FAILURE;
    }

    let runner = Runner::from_settings(&settings);
    info!(run_id = %runner.run_id(), "Starting {} v{}", NAME, VERSION);
    info!(run_id = %runner.run_id(), "Task file: {}", file_path);

    match runner.run_file(&file_path) {
        Ok(report) => {
            info!(run_id = %runner.run_id(), "{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(run_id = %runner.run_id(), "{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Print help message.
fn print_help() {
    println!(
        r#"{} {}
Run a declarative list of filesystem tasks.

USAGE:
    {} --file-path <PATH> [OPTIONS]

OPTIONS:
    -f, --file-path <PATH>  Absolute path to the task file (required)
    -c, --config <PATH>     Path to a TOML configuration file
    -h, --help              Print help information
    -V, --version           Print version information
"#,
        NAME, VERSION, NAME
    );
}

/// Get the value of the first matching flag, as `--flag value` or `--flag=value`.
fn get_flag_value(args: &[String], names: &[&str]) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        for name in names {
            if arg == name && i + 1 < args.len() {
                return Some(args[i + 1].clone());
            }
            if let Some(value) = arg.strip_prefix(name).and_then(|rest| rest.strip_prefix('=')) {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Initialize logging based on settings.
fn init_logging(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    match settings.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .try_init()?;
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .try_init()?;
        }
    }

    Ok(())
}
