//! Export driver.
//!
//! Runs one conversion end to end:
//!
//! 1. load the registry document and extract the configured registry
//! 2. walk the entries in document order, printing `[id] key` for each,
//!    filling the identifier index and rendering the constant lines
//! 3. write the constant fragment, then the index JSON
//!
//! Nothing is written until every entry has been processed, so a malformed
//! entry leaves both outputs untouched. The two writes are independent: if
//! the index write fails the constant fragment has already been replaced.

use log::{debug, info};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::index::IdentifierIndex;
use crate::output::write_atomic;
use crate::registry::{RegistryDocument, RegistrySummary};
use crate::render;

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub registry: String,
    /// Entries read, and constant lines written
    pub entries: usize,
    /// Distinct protocol ids in the index
    pub indexed: usize,
    /// Entries whose protocol id overwrote an earlier one
    pub duplicates: usize,
    pub code_output: PathBuf,
    pub index_output: PathBuf,
}

/// Run an export, printing entry diagnostics to stdout
pub fn run(config: &ExportConfig) -> Result<ExportSummary> {
    let stdout = io::stdout();
    let mut console = stdout.lock();
    run_with_console(config, &mut console)
}

/// Run an export, printing entry diagnostics to `console`
pub fn run_with_console<W: Write>(config: &ExportConfig, console: &mut W) -> Result<ExportSummary> {
    config.validate()?;
    let paths = config.resolve();

    info!("Input document: {:?}", paths.input);
    info!("Registry: {}", config.registry);

    let document = RegistryDocument::load(&paths.input)?;
    let registry = document.registry(&config.registry)?;
    info!("Found {} entries in '{}'", registry.len(), registry.name);

    let policy = config.duplicate_policy();
    let mut index = IdentifierIndex::new();
    let mut code = String::new();

    for entry in &registry.entries {
        if !config.quiet {
            writeln!(console, "[{}] {}", entry.protocol_id, entry.location)?;
        }
        debug!("Processing {} (protocol id {})", entry.location, entry.protocol_id);

        index.insert(entry, policy)?;
        code.push_str(&render::code_line(entry));
    }

    let index_text = render::index_json(&index).map_err(ExportError::Serialize)?;

    write_atomic(&paths.code_output, &code)?;
    info!("Wrote {} constant declarations to {:?}", registry.len(), paths.code_output);

    write_atomic(&paths.index_output, &index_text)?;
    info!("Wrote {} protocol ids to {:?}", index.len(), paths.index_output);

    Ok(ExportSummary {
        registry: registry.name.clone(),
        entries: registry.len(),
        indexed: index.len(),
        duplicates: index.duplicates(),
        code_output: paths.code_output,
        index_output: paths.index_output,
    })
}

/// Print the registries present in the configured input document.
///
/// Writes no files.
pub fn list_registries<W: Write>(
    config: &ExportConfig,
    console: &mut W,
) -> Result<Vec<RegistrySummary>> {
    let paths = config.resolve();
    let document = RegistryDocument::load(&paths.input)?;
    let summaries = document.summaries();

    for summary in &summaries {
        writeln!(console, "{} ({} entries)", summary.name, summary.entry_count)?;
    }

    Ok(summaries)
}
