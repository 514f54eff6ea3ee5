use anyhow::{Result, anyhow};
use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infrastructure::{OutputFormat, RunnerConfig, SinkFactory};
use tag_runner::{ScriptRunner, deliver};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lua script to run (falls back to `script` from config)
    script: Option<PathBuf>,

    /// Path to config directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Override output format (json, binary, none)
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Override output path
    #[arg(long)]
    output: Option<String>,
}

fn run() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr, stdout is reserved for JSON output
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,tag_runner=debug,scripting=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    info!("📂 Config directory: {}", args.config_dir);
    let mut config = RunnerConfig::load(&args.config_dir)?;

    // Override with CLI args if present
    if let Some(format) = args.format {
        config.output.format = format;
    }
    if let Some(path) = args.output {
        config.output.path = Some(path);
    }

    let script = args
        .script
        .or_else(|| config.script.as_ref().map(PathBuf::from))
        .ok_or_else(|| anyhow!("No script given: pass a path or set `script` in config"))?;

    let runner = ScriptRunner::new()?;
    let tagsets = runner.run_file(&script)?;

    match SinkFactory::create(&config.output)? {
        Some(mut sink) => deliver(sink.as_mut(), &tagsets)?,
        None => warn!(
            "Output format is none, {} tagset(s) discarded",
            tagsets.len()
        ),
    }

    info!("👋 Done");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ ERROR: {:?}", e);
        std::process::exit(1);
    }
}
