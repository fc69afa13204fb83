//! CLI entrypoint for churn-predict
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use churn_application::PredictChurnUseCase;
use churn_domain::{FormSnapshot, InvocationState, OutputFormat};
use churn_infrastructure::{ConfigLoader, FileConfig, FormLoader, HttpPredictionGateway};
use churn_presentation::{Cli, ConsoleFormatter, ConsoleSurface};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return ExitCode::SUCCESS;
    }

    // === Configuration ===
    // Until the config is read, only --output can choose the format
    let requested_format: OutputFormat = cli.output.map(Into::into).unwrap_or_default();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report_failure(&e, requested_format),
    };
    ConsoleFormatter::set_color_enabled(config.output.color);
    let format = config.output.format.unwrap_or_default();

    if cli.schema {
        println!("{}", ConsoleFormatter::format_schema());
        return ExitCode::SUCCESS;
    }

    match run(&cli, &config, format).await {
        Ok(code) => code,
        Err(e) => report_failure(&e, format),
    }
}

/// Load the form, wire the adapters and run (or dry-run) one prediction
async fn run(cli: &Cli, config: &FileConfig, format: OutputFormat) -> Result<ExitCode> {
    let snapshot = load_form(cli)?;
    debug!("Form has {} fields", snapshot.len());

    // === Dependency Injection ===
    let gateway = match config.endpoint.timeout_seconds {
        Some(seconds) => {
            HttpPredictionGateway::with_timeout(&config.endpoint.url, Duration::from_secs(seconds))?
        }
        None => HttpPredictionGateway::new(&config.endpoint.url),
    };
    let use_case =
        PredictChurnUseCase::new(Arc::new(gateway)).with_params(config.prediction_params()?);

    if cli.dry_run {
        let features = use_case.encode(&snapshot)?;
        let output = match format {
            OutputFormat::Text => ConsoleFormatter::format_features(&features),
            OutputFormat::Json => ConsoleFormatter::format_features_json(&features),
        };
        println!("{}", output);
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting churn prediction against {}", config.endpoint.url);

    let surface = ConsoleSurface::new(format).with_progress(!cli.quiet);
    match use_case.execute_with_surface(&snapshot, &surface).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        // Already rendered and logged by the use case
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

/// Render a failure that happened outside the use case the same way the
/// use case renders its own
fn report_failure(err: &anyhow::Error, format: OutputFormat) -> ExitCode {
    error!(error = %format!("{:#}", err), "Prediction failed");
    println!("{}", failure_output(err, format));
    ExitCode::FAILURE
}

fn failure_output(err: &anyhow::Error, format: OutputFormat) -> String {
    let state = InvocationState::failed(format!("{:#}", err));
    match format {
        OutputFormat::Text => ConsoleFormatter::format(&state),
        OutputFormat::Json => ConsoleFormatter::format_json(&state),
    }
}

/// Merge config files (unless disabled) and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };

    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(seconds) = cli.timeout {
        config.endpoint.timeout_seconds = Some(seconds);
    }
    if let Some(threshold) = cli.threshold {
        config.risk.threshold = threshold;
    }
    if cli.no_validate {
        config.encoding.validate = false;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }

    config.validate()?;
    Ok(config)
}

/// Form file (or stdin) overlaid with `--field` values
fn load_form(cli: &Cli) -> Result<FormSnapshot> {
    let base = match cli.form.as_deref() {
        Some(path) if path == Path::new("-") => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read form from stdin")?;
            FormLoader::parse(&content, None)
                .map_err(|e| anyhow::anyhow!("Could not parse form from stdin: {}", e))?
        }
        Some(path) => FormLoader::load(path)?,
        None => FormSnapshot::new(),
    };

    let overrides: FormSnapshot = cli.fields.iter().cloned().collect();

    if base.is_empty() && overrides.is_empty() {
        bail!("No form given. Use --form <PATH> or --field ID=VALUE.");
    }

    Ok(base.merge(overrides))
}
