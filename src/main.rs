//! Principle Catalog CLI - Browse, check and run design principle demonstrations
//!
//! Architecture: Application Layer - CLI coordinates user interactions with the catalog
//! - Translates user commands to catalog queries
//! - Handles external concerns like file I/O, process exit codes and terminal output
//! - The catalog itself never prints

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use principle_catalog::{
    config::DEFAULT_CONFIG_FILES, CatalogConfig, CatalogError, CatalogExplorer, CatalogFormatter,
    CatalogResult, OutputFormat, PrincipleExample, PrincipleFamily, ReportOptions, Severity,
};
use std::fs;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Principle Catalog - Paired violating and compliant code for design principles
#[derive(Parser)]
#[command(name = "principle-catalog")]
#[command(version)]
#[command(about = "Browse paired violating and compliant code for software design principles")]
#[command(
    long_about = "Principle Catalog holds one entry per design principle (DRY, KISS, SOLID, YAGNI and any loaded from YAML files). Each entry pairs a violating sample with a compliant one and explains why. Built-in entries come with runnable demonstrations."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries in registration order
    List {
        /// Only entries of this family
        #[arg(long, value_enum)]
        family: Option<FamilyArg>,

        /// Only entries whose name, title or problem match this regex
        #[arg(long)]
        filter: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show one entry
    Show {
        /// Entry name, matched exactly
        name: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Leave out the code samples
        #[arg(long)]
        no_code: bool,
    },

    /// Check every entry for consistency problems
    Check {
        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Minimum severity level to report
        #[arg(short = 's', long, value_enum)]
        min_severity: Option<SeverityArg>,

        /// Maximum number of findings to report
        #[arg(long)]
        max_findings: Option<usize>,
    },

    /// Run demonstrations
    Demo {
        /// Principle to demonstrate (all when omitted)
        name: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Write the whole catalog as one document
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value = "markdown")]
        format: OutputFormatArg,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration file
    ValidateConfig {
        /// Configuration file to validate
        config_file: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, PartialEq)]
enum OutputFormatArg {
    Human,
    Json,
    Markdown,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum SeverityArg {
    Info,
    Warning,
    Error,
}

impl From<SeverityArg> for Severity {
    fn from(arg: SeverityArg) -> Self {
        match arg {
            SeverityArg::Info => Severity::Info,
            SeverityArg::Warning => Severity::Warning,
            SeverityArg::Error => Severity::Error,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum FamilyArg {
    Foundational,
    Solid,
}

impl From<FamilyArg> for PrincipleFamily {
    fn from(arg: FamilyArg) -> Self {
        match arg {
            FamilyArg::Foundational => PrincipleFamily::Foundational,
            FamilyArg::Solid => PrincipleFamily::Solid,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run_command(cli) {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run_command(cli: Cli) -> anyhow::Result<i32> {
    let use_colors = !cli.no_color;

    match cli.command {
        Commands::List {
            family,
            filter,
            format,
        } => Ok(run_list(cli.config, family, filter, format, use_colors)?),
        Commands::Show {
            name,
            format,
            no_code,
        } => Ok(run_show(cli.config, &name, format, no_code, use_colors)?),
        Commands::Check {
            format,
            min_severity,
            max_findings,
        } => Ok(run_check(
            cli.config,
            format,
            min_severity,
            max_findings,
            use_colors,
        )?),
        Commands::Demo { name, format } => Ok(run_demo(cli.config, name, format, use_colors)?),
        Commands::Export { format, output } => run_export(cli.config, format, output),
        Commands::ValidateConfig { config_file } => {
            Ok(run_validate_config(config_file.or(cli.config)))
        }
    }
}

/// Load the configuration named on the command line or the first default file present
fn load_config(config_path: Option<PathBuf>) -> CatalogResult<CatalogConfig> {
    match config_path {
        Some(path) => CatalogConfig::load_from_file(path),
        None => CatalogConfig::discover("."),
    }
}

/// Escape codes only go to terminal output
fn colors_for(format: OutputFormatArg, use_colors: bool) -> bool {
    use_colors && format == OutputFormatArg::Human
}

fn build_explorer(
    config_path: Option<PathBuf>,
    options: ReportOptions,
) -> CatalogResult<CatalogExplorer> {
    let config = load_config(config_path)?;
    Ok(CatalogExplorer::new_with_config(config)?.with_formatter(CatalogFormatter::new(options)))
}

fn run_list(
    config_path: Option<PathBuf>,
    family: Option<FamilyArg>,
    filter: Option<String>,
    format: OutputFormatArg,
    use_colors: bool,
) -> CatalogResult<i32> {
    let explorer = build_explorer(
        config_path,
        ReportOptions {
            use_colors: colors_for(format, use_colors),
            ..Default::default()
        },
    )?;

    let mut entries: Vec<&PrincipleExample> = match &filter {
        Some(pattern) => explorer.catalog().search(pattern)?,
        None => explorer.catalog().list().collect(),
    };

    if let Some(family) = family {
        let family = PrincipleFamily::from(family);
        entries.retain(|e| e.family == family);
    }

    let output = explorer.formatter().format_listing(&entries, format.into())?;
    print!("{output}");

    Ok(0)
}

fn run_show(
    config_path: Option<PathBuf>,
    name: &str,
    format: OutputFormatArg,
    no_code: bool,
    use_colors: bool,
) -> CatalogResult<i32> {
    let explorer = build_explorer(
        config_path,
        ReportOptions {
            use_colors: colors_for(format, use_colors),
            show_code: !no_code,
            ..Default::default()
        },
    )?;

    match explorer.format_entry(name, format.into()) {
        Ok(output) => {
            print!("{output}");
            Ok(0)
        }
        Err(CatalogError::NotFound { name }) => {
            eprintln!("No example named '{name}'");
            eprintln!(
                "Available examples: {}",
                explorer.catalog().names().collect::<Vec<_>>().join(", ")
            );
            Ok(1)
        }
        Err(e) => Err(e),
    }
}

fn run_check(
    config_path: Option<PathBuf>,
    format: OutputFormatArg,
    min_severity: Option<SeverityArg>,
    max_findings: Option<usize>,
    use_colors: bool,
) -> CatalogResult<i32> {
    let explorer = build_explorer(
        config_path,
        ReportOptions {
            use_colors: colors_for(format, use_colors),
            min_severity: min_severity.map(|s| s.into()),
            max_findings,
            ..Default::default()
        },
    )?;

    let report = explorer.check();
    let output = explorer.format_check(&report, format.into())?;
    print!("{output}");

    if report.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn run_demo(
    config_path: Option<PathBuf>,
    name: Option<String>,
    format: OutputFormatArg,
    use_colors: bool,
) -> CatalogResult<i32> {
    let explorer = build_explorer(
        config_path,
        ReportOptions {
            use_colors: colors_for(format, use_colors),
            ..Default::default()
        },
    )?;

    let outcomes = match name {
        Some(name) => match explorer.run_demo(&name) {
            Ok(Some(outcome)) => vec![outcome],
            Ok(None) => {
                eprintln!("'{name}' has no runnable demonstration");
                return Ok(1);
            }
            Err(CatalogError::NotFound { name }) => {
                eprintln!("No example named '{name}'");
                return Ok(1);
            }
            Err(e) => return Err(e),
        },
        None => explorer.run_all_demos(),
    };

    let output = explorer.formatter().format_demos(&outcomes, format.into())?;
    print!("{output}");

    if outcomes.iter().all(|o| o.holds()) {
        Ok(0)
    } else {
        Ok(1)
    }
}

fn run_export(
    config_path: Option<PathBuf>,
    format: OutputFormatArg,
    output: Option<PathBuf>,
) -> anyhow::Result<i32> {
    let use_colors = colors_for(format, output.is_none());
    let explorer = build_explorer(
        config_path,
        ReportOptions {
            use_colors,
            ..Default::default()
        },
    )?;

    let document = explorer.export(format.into())?;

    match output {
        Some(path) => {
            fs::write(&path, document)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            println!(
                "Exported {} examples to {}",
                explorer.catalog().len(),
                path.display()
            );
        }
        None => print!("{document}"),
    }

    Ok(0)
}

fn run_validate_config(config_path: Option<PathBuf>) -> i32 {
    let config_path = config_path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILES[0]));

    println!("Validating configuration: {}", config_path.display());

    let config = match CatalogConfig::load_from_file(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            return 1;
        }
    };

    // sources are only known to be readable once they load
    match CatalogExplorer::new_with_config(config) {
        Ok(explorer) => {
            println!("✅ Configuration is valid");
            println!("📊 Configuration summary:");
            println!(
                "  Built-in examples: {}",
                if explorer.config().include_builtin {
                    "included"
                } else {
                    "disabled"
                }
            );
            println!("  Excluded: {}", explorer.config().exclude.len());
            println!("  Source paths: {}", explorer.config().sources.paths.len());
            println!("  Examples loaded: {}", explorer.catalog().len());
            0
        }
        Err(e) => {
            eprintln!("❌ Configuration validation failed: {e}");
            1
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use principle_catalog::ConfigBuilder;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, yaml: &str) -> PathBuf {
        let path = temp_dir.path().join("principle_catalog.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_colors_only_for_human_output() {
        assert!(colors_for(OutputFormatArg::Human, true));
        assert!(!colors_for(OutputFormatArg::Human, false));
        assert!(!colors_for(OutputFormatArg::Markdown, true));
        assert!(!colors_for(OutputFormatArg::Json, true));
    }

    #[test]
    fn test_list_command() {
        assert_eq!(run_list(None, None, None, OutputFormatArg::Json, false).unwrap(), 0);
        assert_eq!(
            run_list(
                None,
                Some(FamilyArg::Solid),
                Some("principle".to_string()),
                OutputFormatArg::Human,
                false
            )
            .unwrap(),
            0
        );
        assert!(run_list(None, None, Some("(".to_string()), OutputFormatArg::Human, false).is_err());
    }

    #[test]
    fn test_show_command() {
        assert_eq!(run_show(None, "DRY", OutputFormatArg::Markdown, false, false).unwrap(), 0);
        assert_eq!(run_show(None, "dry", OutputFormatArg::Human, true, false).unwrap(), 1);
    }

    #[test]
    fn test_check_command() {
        let result = run_check(None, OutputFormatArg::Json, None, None, false);
        assert_eq!(result.unwrap(), 0);
    }

    #[test]
    fn test_check_command_with_broken_source() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("entries")).unwrap();
        fs::write(
            temp_dir.path().join("entries/broken.yaml"),
            "examples:\n  - name: Same\n    title: Same\n    violating: {code: \"fn a() {}\"}\n    compliant: {code: \"fn a() {}\"}\n    rationale: r\n",
        )
        .unwrap();
        let config = write_config(&temp_dir, "version: \"1.0\"\nsources:\n  paths: [entries]\n");

        let result = run_check(Some(config), OutputFormatArg::Human, None, None, false);
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_demo_command() {
        assert_eq!(run_demo(None, None, OutputFormatArg::Human, false).unwrap(), 0);
        assert_eq!(
            run_demo(None, Some("ISP".to_string()), OutputFormatArg::Json, false).unwrap(),
            0
        );
        assert_eq!(
            run_demo(None, Some("GRASP".to_string()), OutputFormatArg::Human, false).unwrap(),
            1
        );
    }

    #[test]
    fn test_export_command() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("catalog.md");

        let result = run_export(None, OutputFormatArg::Markdown, Some(output.clone()));
        assert_eq!(result.unwrap(), 0);

        let document = fs::read_to_string(&output).unwrap();
        assert!(document.starts_with("# Design Principles"));

        let missing_dir = temp_dir.path().join("missing").join("catalog.json");
        let err = run_export(None, OutputFormatArg::Json, Some(missing_dir)).unwrap_err();
        assert!(err.to_string().contains("Failed to write export"));
    }

    #[test]
    fn test_validate_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = ConfigBuilder::new().exclude("KISS").build().unwrap();
        let path = write_config(&temp_dir, &config.to_yaml().unwrap());

        assert_eq!(run_validate_config(Some(path)), 0);

        let bad = write_config(&temp_dir, "version: \"1.0\"\nsources:\n  paths: [missing]\n");
        assert_eq!(run_validate_config(Some(bad)), 1);

        assert_eq!(run_validate_config(Some(temp_dir.path().join("nope.yaml"))), 1);
    }
}
