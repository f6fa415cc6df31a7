use clap::{Parser, Subcommand};
use colored::Colorize;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lexifield_core::{
    Config, DataDictionary, DataType, ProviderKind, Sensitivity, Severity, ValidationReport,
    ValidationVerdict,
};
use lexifield_ai::{
    DescriptionRequest, GeminiProvider, MockProvider, SuggestionProvider, SuggestionRequest,
};
use lexifield_engine::{recommend_masking, FieldValidator};

const DEFAULT_CONFIG_FILE: &str = "lexifield.toml";

/// LexiField - API field naming assistant and data dictionary
#[derive(Parser)]
#[command(name = "lexifield")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: lexifield.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Override the configured suggestion provider (gemini, mock)
    #[arg(long, global = true)]
    provider: Option<ProviderKind>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate candidate field names
    Validate {
        /// Field names to validate
        #[arg(required = true, value_parser = parse_field_name)]
        names: Vec<String>,

        /// Write a JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest a field name from a description
    Suggest {
        /// What the field holds
        #[arg(short, long)]
        description: String,

        /// Existing field names, comma separated
        #[arg(short, long, value_delimiter = ',')]
        existing: Vec<String>,

        /// Framework requirements (e.g. "JSON:API")
        #[arg(short, long)]
        framework: Option<String>,
    },

    /// Generate a compliant description for a field
    Describe {
        /// Field name
        #[arg(long)]
        field: String,

        /// What the field holds, its type and usage
        #[arg(long)]
        details: String,

        /// Regulatory requirements (e.g. "GDPR")
        #[arg(short, long)]
        regulatory: Option<String>,

        /// Framework requirements
        #[arg(short, long)]
        framework: Option<String>,
    },

    /// Recommend a masking technique
    Mask {
        /// Field name
        #[arg(long)]
        field: String,

        /// Data type (string, number, boolean, date, timestamp, object, array, mixed)
        #[arg(long)]
        data_type: DataType,

        /// Sensitivity (none, low, medium, high, critical)
        #[arg(long)]
        sensitivity: Sensitivity,
    },

    /// Search the data dictionary
    Search {
        /// Matches field name, description, API group or tags
        term: Option<String>,
    },

    /// Export dictionary entries as JSON
    Export {
        /// Only export entries matching this term
        term: Option<String>,

        /// Output file
        #[arg(short, long, default_value = "data-dictionary.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();
    init_tracing(cli.verbose);

    let mut config = load_config(cli.config.as_deref(), cli.verbose)?;
    if let Some(kind) = cli.provider {
        config.provider.kind = kind;
    }

    match cli.command {
        Commands::Validate { names, output } => {
            validate_command(&config, &names, output.as_deref(), cli.verbose).await
        }
        Commands::Suggest { description, existing, framework } => {
            suggest_command(&config, description, existing, framework).await
        }
        Commands::Describe { field, details, regulatory, framework } => {
            describe_command(&config, field, details, regulatory, framework).await
        }
        Commands::Mask { field, data_type, sensitivity } => {
            mask_command(&field, data_type, sensitivity);
            Ok(())
        }
        Commands::Search { term } => {
            search_command(term.as_deref().unwrap_or(""));
            Ok(())
        }
        Commands::Export { term, output } => {
            export_command(term.as_deref().unwrap_or(""), &output, cli.verbose)
        }
    }
}

/// Reject empty or blank field names before any provider call
fn parse_field_name(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("field name must not be empty".to_string());
    }
    Ok(value.to_string())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lexifield=debug,lexifield_ai=debug,lexifield_engine=debug")
    } else {
        EnvFilter::from_default_env()
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let config = if let Some(config_path) = path {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        Config::from_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        if verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    Ok(config)
}

fn build_provider(config: &Config) -> Result<Box<dyn SuggestionProvider>> {
    let provider: Box<dyn SuggestionProvider> = match config.provider.kind {
        ProviderKind::Gemini => Box::new(GeminiProvider::from_config(&config.provider)?),
        ProviderKind::Mock => Box::new(MockProvider::new()),
    };

    tracing::debug!(provider = provider.name(), "suggestion provider ready");
    Ok(provider)
}

/// Validate command - run naming rules and the provider cross-check per name
async fn validate_command(
    config: &Config,
    names: &[String],
    output: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let validator = FieldValidator::from_config(config, build_provider(config)?);

    let mut verdicts = Vec::with_capacity(names.len());
    for name in names {
        if verbose {
            eprintln!("{} {}", "Validating".cyan(), name);
        }

        match validator.validate(name).await {
            Ok(verdict) => {
                print_verdict(&verdict);
                verdicts.push(verdict);
            }
            Err(error) => {
                eprintln!("{} {}", "Error:".red().bold(), error);
                std::process::exit(1);
            }
        }
    }

    let report = ValidationReport::from_verdicts(verdicts);

    if let Some(path) = output {
        report.save_to_file(path)?;
        if verbose {
            eprintln!("{} {}", "Report saved to:".green(), path.display());
        }
    }

    print_report_summary(&report);

    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Suggest command - ask the provider for a field name
async fn suggest_command(
    config: &Config,
    description: String,
    existing: Vec<String>,
    framework: Option<String>,
) -> Result<()> {
    let provider = build_provider(config)?;

    let mut request = SuggestionRequest::new(description).with_existing_names(existing);
    if let Some(framework) = framework {
        request = request.with_framework_requirements(framework);
    }

    let result = provider.suggest_field_name(&request).await?;

    println!("{} {}", "Suggested name:".bold(), result.suggested_field_name.green().bold());
    println!("{} {}", "Reasoning:".bold(), result.reasoning);

    Ok(())
}

/// Describe command - generate a field description
async fn describe_command(
    config: &Config,
    field: String,
    details: String,
    regulatory: Option<String>,
    framework: Option<String>,
) -> Result<()> {
    let provider = build_provider(config)?;

    let mut request = DescriptionRequest::new(field, details);
    if let Some(regulatory) = regulatory {
        request = request.with_regulatory_requirements(regulatory);
    }
    if let Some(framework) = framework {
        request = request.with_framework_requirements(framework);
    }

    let result = provider.generate_description(&request).await?;
    println!("{}", result.field_description);

    Ok(())
}

fn mask_command(field: &str, data_type: DataType, sensitivity: Sensitivity) {
    let technique = recommend_masking(field, Some(data_type), Some(sensitivity));

    println!("{} {}", "Recommended masking:".bold(), technique.to_string().cyan().bold());
    println!(
        "{}",
        "Always consult your data governance policy for the final decision.".dimmed()
    );
}

fn search_command(term: &str) {
    let dictionary = DataDictionary::seeded();
    let entries = dictionary.search(term);

    if entries.is_empty() {
        println!("{}", "No fields match the search.".yellow());
        return;
    }

    for entry in entries {
        let sensitivity = match entry.sensitivity {
            Sensitivity::Critical | Sensitivity::High => entry.sensitivity.as_str().red().bold(),
            Sensitivity::Medium => entry.sensitivity.as_str().yellow(),
            Sensitivity::Low | Sensitivity::None => entry.sensitivity.as_str().green(),
        };

        println!(
            "{} ({}) [{}] {}",
            entry.field_name.bold(),
            entry.data_type,
            sensitivity,
            entry.api_group.dimmed()
        );
        println!("    {}", entry.description);
        if !entry.tags.is_empty() {
            println!("    Tags: {}", entry.tags.join(", "));
        }
    }
}

fn export_command(term: &str, output: &Path, verbose: bool) -> Result<()> {
    let dictionary = DataDictionary::seeded();
    let entries = dictionary.search(term);

    let json = DataDictionary::to_json(&entries)?;
    std::fs::write(output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    if verbose {
        eprintln!("{} {}", "Dictionary exported to:".green(), output.display());
    }
    println!("Exported {} fields", entries.len());

    Ok(())
}

fn print_verdict(verdict: &ValidationVerdict) {
    let label = match verdict.severity {
        Severity::Error => "ERROR".red().bold(),
        Severity::Warning => "WARN".yellow().bold(),
        Severity::Success => "OK".green().bold(),
        Severity::Info => "INFO".cyan(),
    };

    println!("[{}] {}", label, verdict.message);
    for detail in &verdict.details {
        println!("    - {}", detail);
    }
    if let Some(alternative) = &verdict.alternative {
        println!("    Alternative: {}", alternative.green());
    }
}

/// Print report summary to stdout
fn print_report_summary(report: &ValidationReport) {
    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Field Name Validation Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("  Names checked: {}", report.summary.total);
    println!("  Passed:   {}", report.summary.passed.to_string().green());

    if report.summary.errors > 0 {
        println!("  Errors:   {}", report.summary.errors.to_string().red().bold());
    } else {
        println!("  Errors:   {}", report.summary.errors.to_string().green());
    }

    if report.summary.warnings > 0 {
        println!("  Warnings: {}", report.summary.warnings.to_string().yellow());
    } else {
        println!("  Warnings: {}", report.summary.warnings.to_string().green());
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}
