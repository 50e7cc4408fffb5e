//! Catalog document rendering.
//!
//! Output layouts:
//!
//! - **JSON**: the normalized catalog as a pretty-printed array
//! - **Catalog**: one LaTeX page per set that is ready to build
//! - **Inventory**: LaTeX summary counters and a long table of every set
//! - **Simple**: LaTeX two-column name/description table

mod catalog;
mod error;
mod inventory;
mod json;
mod latex;
mod simple;
mod writer;

use catalog_model::Catalog;

pub use catalog::{is_catalog_entry, render_catalog, render_page};
pub use error::{ReportError, Result};
pub use inventory::{render_inventory, render_row as render_inventory_row, state_marker};
pub use json::render_json;
pub use latex::{
    AMPERSAND_ESCAPES, AMPERSAND_PERCENT_ESCAPES, DEFAULT_AUTHOR, DEFAULT_TITLE,
    DocumentOptions, FieldRule, NO_ESCAPES, RenderedDocument, TEXT_ESCAPES, escape_latex,
};
pub use simple::{render_row as render_simple_row, render_simple};
pub use writer::write_document;

/// The LaTeX layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatexLayout {
    Catalog,
    Inventory,
    Simple,
}

impl LatexLayout {
    pub fn name(self) -> &'static str {
        match self {
            LatexLayout::Catalog => "catalog",
            LatexLayout::Inventory => "inventory",
            LatexLayout::Simple => "simple",
        }
    }

    pub fn render(self, catalog: &Catalog, options: &DocumentOptions) -> RenderedDocument {
        match self {
            LatexLayout::Catalog => render_catalog(catalog, options),
            LatexLayout::Inventory => render_inventory(catalog, options),
            LatexLayout::Simple => render_simple(catalog, options),
        }
    }
}
