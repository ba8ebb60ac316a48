//! tld-swap - check which alternate TLDs of .io names look unregistered
//!
//! Runs the whole built-in list (or the names given as arguments) and prints
//! a color-coded report per name.

use std::env;
use std::io;
use std::process;
use tld_swap::{
    domains::BASE_DOMAINS, AvailabilityChecker, CheckConfig, ColorScheme, HickoryProber,
    ReportFormatter, Result, TldSwapError,
};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default)]
struct CliOptions {
    help: bool,
    version: bool,
    no_color: bool,
    domains: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-V" | "--version" => options.version = true,
            "--no-color" => options.no_color = true,
            flag if flag.starts_with('-') => {
                return Err(TldSwapError::cli(format!("unknown option '{}'", flag)));
            }
            name => options.domains.push(name.to_string()),
        }
    }

    Ok(options)
}

#[tokio::main]
async fn main() {
    // Initialize the library
    if let Err(e) = tld_swap::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    // Logs go to stderr so stdout stays the report
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    if options.help {
        print_help();
        return;
    }

    if options.version {
        println!("tld-swap {}", tld_swap::VERSION);
        return;
    }

    if let Err(e) = run_checks(options).await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Main check workflow
async fn run_checks(options: CliOptions) -> Result<()> {
    let config = CheckConfig::from_env()?;

    let no_color = options.no_color || env::var_os("NO_COLOR").is_some();
    let scheme = if no_color {
        ColorScheme::plain()
    } else {
        // Color even when piped; escapes are part of the report format
        colored::control::set_override(true);
        ColorScheme::default()
    };
    let formatter = ReportFormatter::new(scheme);

    let prober = HickoryProber::with_resolver(config.resolver);
    let checker = AvailabilityChecker::with_config(config, prober);

    let base_domains: Vec<String> = if options.domains.is_empty() {
        BASE_DOMAINS.iter().map(|d| d.to_string()).collect()
    } else {
        options.domains
    };

    tracing::info!(
        base_domains = %base_domains.len(),
        resolver = %checker.config().resolver,
        "Starting availability check"
    );

    let check_start = std::time::Instant::now();
    let summary = tld_swap::run(
        &base_domains,
        &checker,
        &formatter,
        io::stdout().lock(),
        io::stderr(),
    )
    .await?;

    tracing::info!(
        base_domains = %summary.base_domains,
        candidates = %summary.candidates(),
        available = %summary.available,
        taken = %summary.taken,
        errors = %summary.errors,
        duration_ms = %check_start.elapsed().as_millis(),
        "Availability check completed"
    );

    Ok(())
}

/// Print help information
fn print_help() {
    println!("tld-swap - find free alternate TLDs for .io names");
    println!();
    println!("USAGE:");
    println!("    tld-swap [OPTIONS] [NAME.io ...]");
    println!();
    println!("Without names, the built-in list of .io names is checked.");
    println!("Each name is tried with .com, .net, .org, .dev, .tech and .co.");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help");
    println!("    -V, --version    Print version");
    println!("        --no-color   Disable colored output");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    TLD_SWAP_RESOLVER  system, google or cloudflare (default: system)");
    println!("    NO_COLOR           Disable colored output");
    println!("    RUST_LOG           Log filter (default: warn)");
    println!();
    println!("A name without DNS records is only likely available; confirm with your registrar.");
}
