//! Pancanga CLI - interactive explorer for the Indian luni-solar calendar

use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use miette::Result;
use pancanga_core::Session;
use pancanga_engine::{BridgeConfig, KollavarshamBridge};
use tracing::debug;

mod banner;
mod display;
mod error;
mod exit_codes;
mod interactive;
mod logging;
mod prompter;

use logging::{LogConfig, LogFormat};
use prompter::DialoguerPrompter;

#[derive(Parser, Debug)]
#[command(name = "pancanga")]
#[command(author = "Pancanga Contributors")]
#[command(version)]
#[command(about = "Convert between Gregorian and Indian luni-solar dates", long_about = None)]
struct Cli {
    /// Node.js executable used to run the calendar engine
    #[arg(long, env = "PANCANGA_NODE", default_value = "node")]
    node: PathBuf,

    /// node_modules directory holding kollavarsham (exported as NODE_PATH)
    #[arg(long, env = "PANCANGA_MODULE_DIR")]
    module_dir: Option<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }
    logging::init_logging(&LogConfig::from_debug(cli.debug).with_format(cli.log_format))?;

    let config = BridgeConfig {
        node: cli.node,
        module_dir: cli.module_dir,
    };
    debug!(?config, "starting session");

    let today = Local::now().date_naive();
    let mut session = Session::new(KollavarshamBridge::new(config), today);
    let mut prompter = DialoguerPrompter::new();

    if let Err(err) = interactive::run(&mut session, &mut prompter, &mut io::stdout()) {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
    Ok(())
}
