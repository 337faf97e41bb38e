mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use args::Args;
use env_logger::Env;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
