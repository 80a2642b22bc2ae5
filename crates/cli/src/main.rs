mod cmd;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use vovkplc_lib::dispatch::{DIST_BUILD, TESTKIT_BUILD, WASM_TEST};

use crate::cmd::{cmd_dispatch, cmd_filter, exit_status};
use crate::output::print_error;

/// vplc - build and test orchestration for the VovkPLC WebAssembly targets
#[derive(Parser)]
#[command(name = "vplc")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable verbose logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the runtime test kit (simulator.wasm + simulator.js)
  Build,

  /// Build the distributable bundle (VovkPLC.wasm + VovkPLC.js)
  Dist,

  /// Build and run the WASM test suite
  Test,

  /// List which sources the native firmware build includes
  Filter {
    /// Source directory to scan
    #[arg(default_value = "src")]
    dir: PathBuf,
  },
}

fn main() {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Build => cmd_dispatch(&TESTKIT_BUILD).map(exit_status),
    Commands::Dist => cmd_dispatch(&DIST_BUILD).map(exit_status),
    Commands::Test => cmd_dispatch(&WASM_TEST).map(exit_status),
    Commands::Filter { dir } => cmd_filter(&dir).map(|()| 0),
  };

  let code = match result {
    Ok(code) => code,
    Err(e) => {
      print_error(&format!("{:#}", e));
      1
    }
  };

  std::process::exit(code);
}
