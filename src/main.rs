use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use registry_export::config::{self, CliOverrides, ExportConfig};
use registry_export::export;

/// Export protocol id mappings from a generated registries.json report
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game version label substituted for {version} in paths
    #[arg(short = 'v', long)]
    version_label: Option<String>,

    /// Path (template) of the registries.json report
    #[arg(short, long)]
    input: Option<String>,

    /// Registry to export
    #[arg(short, long)]
    registry: Option<String>,

    /// Path (template) of the generated constant declarations
    #[arg(long)]
    code_output: Option<String>,

    /// Path (template) of the protocol id index JSON
    #[arg(long)]
    index_output: Option<String>,

    /// Fail on duplicate protocol ids instead of keeping the last one
    #[arg(long)]
    strict: bool,

    /// Do not print each entry to stdout
    #[arg(short, long)]
    quiet: bool,

    /// List the registries in the input document and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            version: self.version_label.clone(),
            input: self.input.clone(),
            registry: self.registry.clone(),
            code_output: self.code_output.clone(),
            index_output: self.index_output.clone(),
            strict: self.strict,
            quiet: self.quiet,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut export_config = match &args.config {
        Some(path) => config::load_config(path)
            .wrap_err_with(|| format!("Failed to load configuration '{}'", path.display()))?,
        None => ExportConfig::default(),
    };
    config::apply_overrides(&mut export_config, &args.overrides())
        .wrap_err("Invalid command-line overrides")?;

    if args.list {
        let stdout = std::io::stdout();
        export::list_registries(&export_config, &mut stdout.lock())
            .wrap_err("Failed to list registries")?;
        return Ok(());
    }

    let summary = export::run(&export_config)
        .wrap_err_with(|| format!("Failed to export registry '{}'", export_config.registry))?;

    if summary.duplicates > 0 {
        warn!(
            "{} entries shared a protocol id; the index keeps the last name for each",
            summary.duplicates
        );
    }

    info!(
        "Exported {} entries ({} protocol ids) from '{}'",
        summary.entries, summary.indexed, summary.registry
    );
    Ok(())
}
