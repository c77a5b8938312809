//! Inventory pipeline: seeding, ingestion, reduction and output.

use std::path::{Path, PathBuf};

use crate::{source::read_source, strip::strip_markup, CharInventory, Error, InventoryConfig};

/// Outcome of processing a single input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SourceOutcome {
    /// Document was read and stripped.
    Read {
        /// Number of chars first contributed by this document.
        added: usize,
    },
    /// Document does not exist and was skipped.
    Missing,
}

/// Input document together with its [`SourceOutcome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Path to the document.
    pub path: PathBuf,
    /// Processing outcome.
    pub outcome: SourceOutcome,
}

/// Result of [collecting](collect) an inventory.
#[derive(Debug, Clone)]
pub struct InventoryReport {
    /// Collected inventory.
    pub inventory: CharInventory,
    /// Per-document outcomes in the processing order.
    pub sources: Vec<SourceReport>,
}

impl InventoryReport {
    /// Iterates over paths of the documents that were skipped because they do not exist.
    pub fn missing_sources(&self) -> impl Iterator<Item = &Path> + '_ {
        self.sources.iter().filter_map(|source| {
            matches!(source.outcome, SourceOutcome::Missing).then_some(source.path.as_path())
        })
    }
}

/// Collects the inventory: seeds it with the base alphabet and adds stripped text of every input
/// document in order. Does not write any output.
///
/// # Errors
///
/// Returns an error if an existing input document cannot be read. Missing documents are skipped
/// with a warning.
pub fn collect(config: &InventoryConfig) -> Result<InventoryReport, Error> {
    let mut inventory = CharInventory::from_text(&config.base_alphabet);
    let mut sources = Vec::with_capacity(config.inputs.len());

    for path in &config.inputs {
        let outcome = match read_source(path)? {
            Some(content) => {
                let text = strip_markup(&content);
                let added = inventory.extend_from_text(&text);
                tracing::debug!(
                    path = %path.display(),
                    text_len = text.len(),
                    added,
                    "processed input file"
                );
                SourceOutcome::Read { added }
            }
            None => SourceOutcome::Missing,
        };
        sources.push(SourceReport {
            path: path.clone(),
            outcome,
        });
    }
    Ok(InventoryReport { inventory, sources })
}

/// Runs the entire pipeline: [collects](collect) the inventory and writes it to the configured output,
/// overwriting the previous content.
///
/// # Errors
///
/// Returns an error if an existing input document cannot be read, or the output cannot be written.
pub fn run(config: &InventoryConfig) -> Result<InventoryReport, Error> {
    let report = collect(config)?;
    report.inventory.write_to(&config.output)?;
    tracing::info!(
        count = report.inventory.len(),
        path = %config.output.display(),
        "unique characters written"
    );
    Ok(report)
}
