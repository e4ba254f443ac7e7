//! pullall CLI: re-pull every locally installed model

use clap::Parser;
use pullall_engine::ToolConfig;
use tracing_subscriber::EnvFilter;

/// Update every locally installed model, one at a time
#[derive(Parser)]
#[command(name = "pullall")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    init_logging();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    if let Err(e) = rt.block_on(pullall_tui::run_tui(ToolConfig::default())) {
        println!("Error running program: {e}");
        std::process::exit(1);
    }
}

/// Logging is off unless `RUST_LOG` asks for it, so the inline view stays clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
