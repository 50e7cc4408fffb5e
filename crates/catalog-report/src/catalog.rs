//! Catalog layout: one page per set that is ready to build.

use catalog_model::{Catalog, Record, SetState, fields};
use tracing::debug;

use crate::latex::{
    DocumentOptions, END_DOCUMENT, FieldRule, NO_ESCAPES, RenderedDocument, TEXT_ESCAPES,
    trimmed_text,
};

const TITLE: FieldRule = FieldRule::new(fields::NAME, "Unknown", TEXT_ESCAPES);
const SET_NUMBER: FieldRule = FieldRule::new(fields::SET_NUMBER, "---", NO_ESCAPES);
const AGE: FieldRule = FieldRule::new(fields::AGE_MIN, "---", NO_ESCAPES);
const PIECES: FieldRule = FieldRule::new(fields::PIECES, "---", NO_ESCAPES);
const THEME: FieldRule = FieldRule::new(fields::IP, "---", TEXT_ESCAPES);
const MISSING: FieldRule = FieldRule::new(fields::MISSING_PIECES, "None", TEXT_ESCAPES);
const NOTES: FieldRule = FieldRule::new(fields::NOTES, "---", TEXT_ESCAPES);

/// True for records that get a page: trimmed state is exactly "Ready to go"
/// and the set has a number or a name.
pub fn is_catalog_entry(record: &Record) -> bool {
    if trimmed_text(record, fields::STATE) != SetState::ReadyToGo.label() {
        return false;
    }
    !trimmed_text(record, fields::SET_NUMBER).is_empty()
        || !trimmed_text(record, fields::NAME).is_empty()
}

fn preamble(options: &DocumentOptions) -> String {
    let title = options.escaped_title();
    let author = options.escaped_author();
    format!(
        r"\documentclass{{article}}
\usepackage[utf8]{{inputenc}}
\usepackage[margin=0.75in]{{geometry}}
\usepackage{{xcolor}}

\title{{{title}}}
\author{{{author}}}
\date{{\today}}

\pagestyle{{empty}}

\begin{{document}}
\maketitle
\thispagestyle{{empty}}

\newpage
"
    )
}

/// One page block, ending in a page break.
pub fn render_page(record: &Record) -> String {
    let name = TITLE.trimmed(record);
    let set_number = SET_NUMBER.trimmed(record);
    let age = AGE.trimmed(record);
    let pieces = PIECES.trimmed(record);
    let theme = THEME.trimmed(record);
    let missing = MISSING.trimmed(record);
    let notes = NOTES.trimmed(record);
    format!(
        r"
\begin{{center}}
{{\Huge \textbf{{{name}}}}}

{{\small Set \#{set_number}}}
\end{{center}}

\vspace{{2em}}

{{\large Age {age}+ \quad {pieces} pieces}}

\vspace{{2em}}

\textbf{{Theme:}} {theme} \\[0.5em]
\textbf{{Missing Pieces:}} {missing} \\[0.5em]
\textbf{{Notes:}} {notes}

\vfill

\newpage
"
    )
}

pub fn render_catalog(catalog: &Catalog, options: &DocumentOptions) -> RenderedDocument {
    let mut text = preamble(options);
    let mut entries = 0usize;
    for record in catalog {
        if !is_catalog_entry(record) {
            continue;
        }
        text.push_str(&render_page(record));
        entries += 1;
    }
    text.push_str(END_DOCUMENT);
    debug!(
        records = catalog.len(),
        entries,
        excluded = catalog.len() - entries,
        "rendered catalog pages"
    );
    RenderedDocument { text, entries }
}
