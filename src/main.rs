use analytics::{kpi_context, KpiEngine, FORMULAS};
use anyhow::Context;
use clap::{Parser, Subcommand};
use completion_client::{ask_about_kpis, HuggingFaceClient};
use configuration::{load_config_from, Config, InputOverrides};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

mod render;

/// The main entry point for the KPI dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables (e.g. the assistant token) from .env if present
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = load_config_from(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Explain => {
            println!("{}", render::formulas_table(FORMULAS));
            Ok(())
        }
        Commands::Ask(args) => handle_ask(args, &config).await,
        Commands::Serve(args) => handle_serve(args, config).await,
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Marketing KPI calculator with growth projections and an AI assistant.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means built-in defaults.
    #[arg(long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the KPIs and the growth projection.
    Report(ReportArgs),
    /// Explain how every KPI is calculated.
    Explain,
    /// Ask the AI assistant a question about your KPIs.
    Ask(AskArgs),
    /// Serve the dashboard JSON API.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct ReportArgs {
    #[command(flatten)]
    inputs: InputOverrides,

    /// Only the basic KPIs: no lifetime value, drop-off or projection.
    #[arg(long)]
    basic: bool,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct AskArgs {
    /// The question for the assistant.
    #[arg(long)]
    question: String,

    #[command(flatten)]
    inputs: InputOverrides,
}

#[derive(Parser)]
struct ServeArgs {
    /// Overrides `[server] host`.
    #[arg(long)]
    host: Option<String>,

    /// Overrides `[server] port`.
    #[arg(long)]
    port: Option<u16>,
}

// ==============================================================================
// Command Logic
// ==============================================================================

fn handle_report(args: ReportArgs, config: &Config) -> anyhow::Result<()> {
    let inputs = config.defaults.with_overrides(&args.inputs);
    let growth = inputs.growth();
    let growth = (!args.basic).then_some(&growth);

    let snapshot = KpiEngine::new().snapshot(&inputs.campaign(), growth)?;
    tracing::info!(months = snapshot.projection.len(), "Report calculated.");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Key KPIs");
    println!("{}", render::cards_table(&snapshot.cards));
    if !snapshot.projection.is_empty() {
        println!("\nProjection ({} months)", snapshot.projection.len());
        println!("{}", render::projection_table(&snapshot.projection));
    }
    Ok(())
}

async fn handle_ask(args: AskArgs, config: &Config) -> anyhow::Result<()> {
    let inputs = config.defaults.with_overrides(&args.inputs);
    let (campaign, growth) = (inputs.campaign(), inputs.growth());

    let context = kpi_context(&campaign, &growth)?;

    let client = HuggingFaceClient::new(&config.assistant)
        .context("Set KPI__ASSISTANT__TOKEN (or [assistant] token) to use the assistant")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("The assistant is answering...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let answer = ask_about_kpis(&client, &context, &args.question).await;
    spinner.finish_and_clear();

    println!("{}", answer?);
    Ok(())
}

async fn handle_serve(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    web_server::run_server(&config).await
}
