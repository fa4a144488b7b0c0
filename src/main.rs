use clap::{Parser, Subcommand};
use core_types::Granularity;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

mod report;

/// The main entry point for the Superstore dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // SUPERSTORE__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_settings(&cli.config)?;
    let _log_guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(args) => {
            if let Some(addr) = args.addr {
                let (host, port) = addr
                    .rsplit_once(':')
                    .ok_or_else(|| anyhow::anyhow!("--addr must be HOST:PORT, got {addr}"))?;
                settings.server.host = host.to_string();
                settings.server.port = port.parse()?;
            }
            web_server::run_server(settings).await?;
        }
        Commands::Report(args) => {
            let granularity = args
                .granularity
                .unwrap_or(settings.dashboard.default_granularity);
            let dashboard = dashboard::render_dashboard(&settings, granularity)?;
            let rows = args.rows.unwrap_or(20);
            println!("{}", report::render_report(&dashboard, rows));
        }
        Commands::Export(args) => {
            let granularity = args
                .granularity
                .unwrap_or(settings.dashboard.default_granularity);
            let dashboard = dashboard::render_dashboard(&settings, granularity)?;
            match args.out {
                Some(path) => {
                    let file = File::create(&path)?;
                    serde_json::to_writer_pretty(file, &dashboard)?;
                    tracing::info!(path = %path.display(), "Dashboard exported.");
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    serde_json::to_writer_pretty(&mut stdout, &dashboard)?;
                    writeln!(stdout)?;
                }
            }
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// A year-over-year sales dashboard for the Superstore dataset.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file. Missing files fall back to defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard page and its JSON API.
    Serve(ServeArgs),
    /// Print the dashboard to the terminal.
    Report(ReportArgs),
    /// Write the rendered dashboard (metrics and chart specs) as JSON.
    Export(ExportArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Listen address, overriding the configured host and port (e.g. "127.0.0.1:8080").
    #[arg(long)]
    addr: Option<String>,
}

#[derive(Parser)]
struct ReportArgs {
    /// Bucketing of the custom sales chart.
    #[arg(long, value_enum)]
    granularity: Option<Granularity>,

    /// Number of data rows to preview.
    #[arg(long)]
    rows: Option<usize>,
}

#[derive(Parser)]
struct ExportArgs {
    /// Bucketing of the custom sales chart.
    #[arg(long, value_enum)]
    granularity: Option<Granularity>,

    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}
