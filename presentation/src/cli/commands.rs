//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for prediction results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured message in a coloured frame
    Text,
    /// JSON record of the final state
    Json,
}

impl From<OutputFormat> for churn_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => churn_domain::OutputFormat::Text,
            OutputFormat::Json => churn_domain::OutputFormat::Json,
        }
    }
}

/// Parse a `--field id=value` argument
pub fn parse_field_assignment(arg: &str) -> Result<(String, String), String> {
    let (id, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got \"{}\"", arg))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing field id in \"{}\"", arg));
    }
    Ok((id.to_string(), value.to_string()))
}

/// CLI arguments for churn-predict
#[derive(Parser, Debug)]
#[command(name = "churn-predict")]
#[command(author, version, about = "Churn risk from a customer form via a remote prediction model")]
#[command(long_about = r#"
churn-predict encodes a customer form into the feature vector the churn model
expects, sends it to the prediction service, and shows the churn risk.

The form is read from a JSON or TOML file keyed by field id
(senior-citizen, tenure, monthly-charges, total-charges, gender, partner,
dependents, phone-service, multiple-lines, internet-service,
online-security, online-backup, device-protection, tech-support,
streaming-tv, streaming-movies, contract, paperless-billing,
payment-method). Individual fields can be given or overridden with --field.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./churn.toml        Project-level config
3. ~/.config/churn-predict/config.toml   Global config

Example:
  churn-predict --form customer.toml
  churn-predict --form customer.json --field contract="Two year"
  churn-predict --form customer.toml --dry-run
"#)]
pub struct Cli {
    /// Form file (JSON or TOML); use "-" to read JSON/TOML from stdin
    #[arg(short, long, value_name = "PATH")]
    pub form: Option<PathBuf>,

    /// Set a single form field (can be specified multiple times)
    #[arg(short = 'F', long = "field", value_name = "ID=VALUE", value_parser = parse_field_assignment)]
    pub fields: Vec<(String, String)>,

    /// Prediction service URL (overrides configuration)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (default: none)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Probability above which a customer is high risk (default: 0.5)
    #[arg(long, value_name = "P")]
    pub threshold: Option<f64>,

    /// Send the form even if fields are missing or out of domain
    #[arg(long)]
    pub no_validate: bool,

    /// Print the encoded payload and exit without contacting the service
    #[arg(long)]
    pub dry_run: bool,

    /// Print the feature schema and exit
    #[arg(long)]
    pub schema: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field_assignment() {
        assert_eq!(
            parse_field_assignment("contract=Two year").unwrap(),
            ("contract".to_string(), "Two year".to_string())
        );
        // Only the first '=' splits
        assert_eq!(
            parse_field_assignment("gender=a=b").unwrap().1,
            "a=b".to_string()
        );
        assert!(parse_field_assignment("contract").is_err());
        assert!(parse_field_assignment("=Yes").is_err());
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "churn-predict",
            "--form",
            "customer.toml",
            "-F",
            "tenure=5",
            "--field",
            "internet-service=Fiber optic",
            "--threshold",
            "0.6",
            "-o",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.form, Some(PathBuf::from("customer.toml")));
        assert_eq!(cli.fields.len(), 2);
        assert_eq!(cli.fields[1].1, "Fiber optic");
        assert_eq!(cli.threshold, Some(0.6));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.no_validate);
    }
}
