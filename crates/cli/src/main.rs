use anyhow::{anyhow, Context, Result};
use clap::Parser;
use quick_share_core::{
    config::Config, init, session::user_message, ClipboardSink, QuickShare, SelectedFile,
    SystemClipboard,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Files to preselect for sharing
    files: Vec<PathBuf>,

    /// Override the model defined in .env
    #[arg(short, long)]
    model: Option<String>,

    /// Generate in the terminal instead of opening a window
    #[arg(long)]
    headless: bool,

    /// Copy the result to clipboard automatically (headless only)
    #[arg(short, long, default_value_t = false, requires = "headless")]
    copy: bool,

    /// Print the result as JSON (headless only)
    #[arg(long, requires = "headless")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Setup
    init();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    // Load config and override model if specified via CLI
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(m) = args.model {
        config = Config::builder()
            .with_optional_api_key(config.gemini_api_key)
            .with_link_host(config.link_host)
            .with_model(m)
            .build()
            .context("Invalid --model")?;
    }
    if !config.has_api_key() {
        warn!("No GEMINI_API_KEY set; caption generation will fail");
    }
    info!(model = %config.model_name, "Starting Quick Share AI v{}", env!("CARGO_PKG_VERSION"));

    let app = QuickShare::with_config(config).context("Failed to initialize caption client")?;

    let files = args
        .files
        .iter()
        .map(|path| {
            SelectedFile::from_path(path)
                .with_context(|| format!("Cannot share {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    if !args.headless {
        // eframe owns the main thread until the window closes
        return tokio::task::block_in_place(|| app.run_interactive(files))
            .context("Failed to run share window");
    }

    // The session logs the cause; the user only sees the short message
    let payload = app
        .generate(files)
        .await
        .map_err(|e| anyhow!("{}", user_message(&e)))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", payload.clipboard_text());
    }

    if args.copy {
        let mut clipboard = SystemClipboard;
        match clipboard.write_text(&payload.clipboard_text()) {
            Ok(()) => eprintln!("(Copied to clipboard)"),
            Err(e) => warn!("{}", e),
        }
    }

    Ok(())
}
