//! Subcommand implementations: load, render, write.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use catalog_ingest::{ensure_input_exists, load_normalized_catalog, load_raw_catalog};
use catalog_model::StateSummary;
use catalog_report::{DocumentOptions, LatexLayout, render_json, write_document};
use tracing::{info, info_span};

use crate::cli::{DocumentArgs, JsonArgs, SimpleArgs, StatsArgs};
use crate::error::CliError;

/// What a conversion produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Json,
    Latex(LatexLayout),
}

#[derive(Debug)]
pub struct ConversionResult {
    pub kind: OutputKind,
    pub output: PathBuf,
    /// Rows written (JSON) or entries rendered (LaTeX).
    pub entries: usize,
}

impl ConversionResult {
    /// One-line summary printed on success.
    pub fn summary_line(&self) -> String {
        match self.kind {
            OutputKind::Json => format!(
                "Converted {} rows to {}",
                self.entries,
                self.output.display()
            ),
            OutputKind::Latex(layout) => format!(
                "Wrote {} ({} {} entries)",
                self.output.display(),
                self.entries,
                layout.name()
            ),
        }
    }
}

#[derive(Debug)]
pub struct StatsResult {
    pub input: PathBuf,
    pub summary: StateSummary,
    /// Record count per raw state value; `None` for records without one.
    pub counts: BTreeMap<Option<String>, usize>,
}

/// Clean a CSV catalog and write it as JSON.
pub fn run_json(args: &JsonArgs) -> Result<ConversionResult, CliError> {
    let span = info_span!("json", input = %args.input.display(), output = %args.output.display());
    let _guard = span.enter();
    ensure_input_exists(&args.input).map_err(|error| CliError::InputNotFound {
        path: error.path().to_path_buf(),
    })?;
    let catalog = load_normalized_catalog(&args.input)?;
    let document = info_span!("render").in_scope(|| render_json(&catalog))?;
    write_document(&args.output, &document.text)?;
    info!(rows = document.entries, "converted catalog to json");
    Ok(ConversionResult {
        kind: OutputKind::Json,
        output: args.output.clone(),
        entries: document.entries,
    })
}

/// Load raw rows and render them with a LaTeX layout.
pub fn run_latex(
    layout: LatexLayout,
    input: &Path,
    output: &Path,
    title: &str,
) -> Result<ConversionResult, CliError> {
    let span = info_span!(
        "latex",
        layout = layout.name(),
        input = %input.display(),
        output = %output.display()
    );
    let _guard = span.enter();
    let catalog = load_raw_catalog(input)?;
    let options = DocumentOptions::with_title(title);
    let document = info_span!("render").in_scope(|| layout.render(&catalog, &options));
    write_document(output, &document.text)?;
    info!(
        records = catalog.len(),
        entries = document.entries,
        "rendered document"
    );
    Ok(ConversionResult {
        kind: OutputKind::Latex(layout),
        output: output.to_path_buf(),
        entries: document.entries,
    })
}

pub fn run_catalog(args: &DocumentArgs) -> Result<ConversionResult, CliError> {
    run_latex(LatexLayout::Catalog, &args.input, &args.output, &args.title)
}

pub fn run_inventory(args: &DocumentArgs) -> Result<ConversionResult, CliError> {
    run_latex(LatexLayout::Inventory, &args.input, &args.output, &args.title)
}

pub fn run_simple(args: &SimpleArgs) -> Result<ConversionResult, CliError> {
    run_latex(LatexLayout::Simple, &args.input, &args.output, &args.title)
}

/// Count sets per state without writing anything.
pub fn run_stats(args: &StatsArgs) -> Result<StatsResult, CliError> {
    let span = info_span!("stats", input = %args.input.display());
    let _guard = span.enter();
    let catalog = load_raw_catalog(&args.input)?;
    Ok(StatsResult {
        input: args.input.clone(),
        summary: catalog.state_summary(),
        counts: catalog.state_counts(),
    })
}
