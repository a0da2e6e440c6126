use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use entresupport::config::{Config, SourceKind};
use entresupport::source::{self, AnalysisSource};
use entresupport::workflow::{AnalysisWorkflow, MessageContent, MessageRole, SubmitOutcome};
use entresupport::{create_router, tui, utils, AppState};

#[derive(Parser, Debug)]
#[command(name = "entresupport", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the demo analysis HTTP service
    Serve,
    /// Terminal UI: home page and analysis chat (default)
    Tui {
        /// Use the remote analysis service instead of the demo report
        #[arg(long)]
        remote: bool,
    },
    /// Analyse one idea headless and print the conversation
    Analyze {
        /// Startup idea to analyse
        idea: String,
        /// Use the remote analysis service instead of the demo report
        #[arg(long)]
        remote: bool,
        /// Print the message log as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    match cli.command.unwrap_or(Command::Tui { remote: false }) {
        Command::Serve => {
            utils::init_stdout_logging();
            serve(config).await
        }
        Command::Tui { remote } => {
            let _guard = utils::init_file_logging(&config.logging.dir)
                .context("Failed to open log directory")?;
            if remote {
                config.analysis.source = SourceKind::Remote;
            }
            let source = source::from_config(&config.analysis)?;
            tui::run(config, source).await
        }
        Command::Analyze { idea, remote, json } => {
            let _guard = utils::init_file_logging(&config.logging.dir)
                .context("Failed to open log directory")?;
            if remote {
                config.analysis.source = SourceKind::Remote;
            }
            let source = source::from_config(&config.analysis)?;
            analyze(&config, source, &idea, json).await
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Configuration loaded: {:?}", config.server);

    if config.remote_loops_back() {
        bail!(
            "ANALYSIS_API_URL {} points at this server; use ANALYSIS_SOURCE=fixture or another URL",
            config.analysis.api_base_url
        );
    }

    let source = source::from_config(&config.analysis)?;
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid HOST/PORT")?;
    let app = create_router(AppState { config, source });

    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow!("Server error: {}", e))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}

async fn analyze(
    config: &Config,
    source: Arc<dyn AnalysisSource>,
    idea: &str,
    json: bool,
) -> anyhow::Result<()> {
    let mut workflow = AnalysisWorkflow::new(source, &config.analysis);

    if let outcome @ (SubmitOutcome::IgnoredEmpty | SubmitOutcome::IgnoredBusy) = workflow.submit(idea) {
        bail!("Nothing to analyze ({:?}): please enter a startup idea", outcome);
    }

    let mut shown = usize::MAX;
    loop {
        let progress = workflow.progress();
        if workflow.is_analyzing() && progress.stage_index != shown {
            shown = progress.stage_index;
            eprintln!("… {}", workflow.current_stage_label());
        }
        if !workflow.next_event().await {
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(workflow.messages())?);
    } else {
        for message in workflow.messages() {
            match &message.content {
                MessageContent::Text(text) => println!("[{:?}] {}\n", message.role, text),
                MessageContent::Report(report) => println!("{}", report.to_plain_text()),
            }
        }
    }

    match workflow.messages().last() {
        Some(last) if last.role == MessageRole::Error => {
            let detail = last.content.as_text().unwrap_or_default();
            Err(anyhow!("Analysis failed: {}", detail))
        }
        _ => Ok(()),
    }
}
