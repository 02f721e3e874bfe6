//! shellport - line-oriented driver for the portable command shell
//!
//! Reads one command per line from standard input, runs it through the
//! library's `Shell` and prints the classified result.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context, Result};
use tracing::{debug, error, info};

use shellport::config::loader::ConfigLoader;
use shellport::{Config, LineCategory, PlatformKind, Shell, Submission};

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Force a toolchain
    platform: Option<PlatformKind>,
    /// Enable debug mode
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    let Some(path) = args.get(i + 1) else {
                        bail!("Missing config file path");
                    };
                    app_args.config_path = Some(PathBuf::from(path));
                    i += 1;
                }
                "--platform" | "-p" => {
                    let Some(name) = args.get(i + 1) else {
                        bail!("Missing platform name");
                    };
                    app_args.platform = Some(name.parse()?);
                    i += 1;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("shellport v{}", shellport::VERSION);
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    bail!("Unknown option: {}", arg);
                }
                other => {
                    bail!("Unexpected argument: {}", other);
                }
            }
            i += 1;
        }

        if app_args.config_path.is_none() {
            app_args.config_path = env::var("SHELLPORT_CONFIG").ok().map(PathBuf::from);
        }
        if !app_args.debug {
            app_args.debug = env::var("SHELLPORT_DEBUG")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false);
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("shellport - {}", shellport::DESCRIPTION);
    println!();
    println!("USAGE:");
    println!("    shellport [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>        Path to configuration file");
    println!("    -p, --platform <PLATFORM>  Toolchain to use (posix, windows)");
    println!("    -d, --debug                Enable debug logging");
    println!("    -h, --help                 Print this help message");
    println!("    -V, --version              Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    shellport looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. <config dir>/shellport/config.toml (or .json)");
    println!("    3. <config dir>/shellport.toml (or .json)");
    println!("    4. ~/.shellport.toml (or .json)");
    println!("    5. ./.shellport.toml (or .json)");
    println!("    6. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    SHELLPORT_CONFIG       Path to configuration file");
    println!("    SHELLPORT_DEBUG        Enable debug logging (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn load_configuration(args: &AppArgs) -> Result<Config> {
    let mut config = match &args.config_path {
        Some(path) => ConfigLoader::load_from_path(path)
            .map_err(|e| anyhow::anyhow!(shellport::handle_startup_error(&e)))
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => ConfigLoader::load().unwrap_or_else(|e| {
            eprintln!("{}", shellport::handle_startup_error(&e));
            Config::default()
        }),
    };

    if let Some(platform) = args.platform {
        config.session.platform = Some(platform);
    }
    Ok(config)
}

fn init_logging(args: &AppArgs, config: &Config) {
    let log_level = if args.debug {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };

    let env_filter = env::var("RUST_LOG").unwrap_or(log_level);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_writer(io::stderr)
        .init();
}

fn print_submission(out: &mut impl Write, submission: &Submission) -> io::Result<()> {
    if submission.clear {
        // ANSI clear screen and home cursor
        write!(out, "\x1b[2J\x1b[H")?;
        return Ok(());
    }

    for line in &submission.lines {
        match line.category {
            LineCategory::Output => writeln!(out, "{}", line.text)?,
            category => writeln!(out, "[{}] {}", category, line.text)?,
        }
    }
    Ok(())
}

fn prompt(out: &mut impl Write, shell: &Shell) -> io::Result<()> {
    write!(out, "{}> ", shell.current_working_directory().display())?;
    out.flush()
}

fn run(mut shell: Shell) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    prompt(&mut stdout, &shell)?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let trimmed = line.trim();

        match trimmed {
            "" => {}
            "exit" | "quit" => break,
            _ => {
                let submission = shell.submit_line(trimmed);
                print_submission(&mut stdout, &submission)?;
            }
        }
        prompt(&mut stdout, &shell)?;
    }

    debug!("Input closed after {} commands", shell.history_entries().len());
    Ok(())
}

fn main() -> Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    let config = load_configuration(&args)?;
    init_logging(&args, &config);

    info!("🚀 Starting shellport v{}", shellport::VERSION);
    debug!("Debug mode enabled");

    let shell = match shellport::init_from(&config) {
        Ok(shell) => shell,
        Err(e) => {
            error!("💥 Failed to start session: {}", e);
            eprintln!("{}", shellport::handle_startup_error(&e));
            process::exit(1);
        }
    };

    run(shell)
}
