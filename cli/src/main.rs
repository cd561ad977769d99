//! CLI entrypoint for techradar
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use radar_application::{
    ErrorPresenter, LoadOutcome, LoadRadarInput, LoadRadarUseCase, LoadingPresenter,
    NoLoadingPresenter, Renderer,
};
use radar_infrastructure::{ConfigLoader, CsvDocumentSource, SourceLocation, published_csv_url};
use radar_presentation::{
    Cli, ConsoleErrorPresenter, ConsoleRenderer, OutputFormat, SpinnerLoadingPresenter,
    TextFormatter,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting techradar");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    // CLI arguments override configuration file values.
    let (location, sheet_name) = match (&cli.source, &cli.sheet, &config.source) {
        (Some(source), _, _) => (SourceLocation::from_input(source), "CSV File"),
        (None, Some(token), _) => (
            SourceLocation::Url(published_csv_url(token)),
            "Google Sheet",
        ),
        (None, None, file_source) => {
            if let Some(csv) = &file_source.csv {
                (SourceLocation::from_input(csv), "CSV File")
            } else if let Some(token) = &file_source.sheet {
                (
                    SourceLocation::Url(published_csv_url(token)),
                    "Google Sheet",
                )
            } else {
                bail!("No CSV source given. Pass a URL/path, --sheet, or set one in techradar.toml.");
            }
        }
    };

    let json = match cli.output {
        Some(OutputFormat::Json) => true,
        Some(OutputFormat::Text) => false,
        None => config.output.format.as_deref() == Some("json"),
    };
    let viewport_size = cli.size.unwrap_or(config.output.viewport_size);

    // === Dependency Injection ===
    let source_name = location.display_name();
    let source = Arc::new(CsvDocumentSource::new(location));
    let renderer: Arc<dyn Renderer> =
        Arc::new(ConsoleRenderer::new(Box::new(TextFormatter::new())).with_json(json));
    let error_presenter: Arc<dyn ErrorPresenter> =
        Arc::new(ConsoleErrorPresenter::new(config.output.color));
    let loading_presenter: Arc<dyn LoadingPresenter> = if cli.quiet || json {
        Arc::new(NoLoadingPresenter)
    } else {
        Arc::new(SpinnerLoadingPresenter::new())
    };

    let use_case = LoadRadarUseCase::new(source, renderer, error_presenter, loading_presenter);
    let input =
        LoadRadarInput::new(source_name, sheet_name).with_viewport_size(viewport_size);

    match use_case.execute(input).await {
        LoadOutcome::Ready { title, .. } => {
            info!("Document title: {title}");
            Ok(ExitCode::SUCCESS)
        }
        LoadOutcome::Failed { .. } => Ok(ExitCode::FAILURE),
    }
}
