//! Inventory layout: summary counters and one long table of every record.

use std::borrow::Cow;

use catalog_model::{Catalog, Record, SetState, StateSummary, fields};
use tracing::debug;

use crate::latex::{
    AMPERSAND_ESCAPES, AMPERSAND_PERCENT_ESCAPES, DocumentOptions, END_DOCUMENT, FieldRule,
    NO_ESCAPES, RenderedDocument, TEXT_ESCAPES, escape_latex,
};

// Defaults apply only when the column is missing from the record.
const SET_NUMBER: FieldRule = FieldRule::new(fields::SET_NUMBER, "---", NO_ESCAPES);
const NAME: FieldRule = FieldRule::new(fields::NAME, "Unknown", TEXT_ESCAPES);
const PIECES: FieldRule = FieldRule::new(fields::PIECES, "", NO_ESCAPES);
const AGE: FieldRule = FieldRule::new(fields::AGE_MIN, "", NO_ESCAPES);
const STATE: FieldRule = FieldRule::new(fields::STATE, "Unknown", AMPERSAND_ESCAPES);
const THEME_DEFAULT: &str = "---";

/// Cell shading for a state, keyed by the exact raw state text.
pub fn state_marker(state: Option<SetState>) -> &'static str {
    match state {
        Some(SetState::ReadyToGo) => r"\cellcolor{gray!15}",
        Some(SetState::PartiallyComplete) => r"\cellcolor{gray!40}",
        Some(SetState::InTheAether) => r"\cellcolor{gray!70}\color{white}",
        None => "",
    }
}

/// `IP` when non-empty, else the raw `Theme` value when the column exists.
fn theme(record: &Record) -> String {
    let value = match record.get(fields::IP).filter(|value| !value.is_empty()) {
        Some(ip) => ip.as_text().into_owned(),
        None => record
            .text(fields::THEME)
            .map_or_else(|| THEME_DEFAULT.to_string(), Cow::into_owned),
    };
    escape_latex(&value, AMPERSAND_PERCENT_ESCAPES)
}

/// One table row, terminated by `\\`.
pub fn render_row(record: &Record) -> String {
    let set_number = SET_NUMBER.raw(record);
    let name = NAME.raw(record);
    let theme = theme(record);
    let pieces = PIECES.raw(record);
    let age = AGE.raw(record);
    let marker = state_marker(Catalog::record_state(record));
    let state = STATE.raw(record);
    format!(r"{set_number} & {name} & {theme} & {pieces} & {age} & {marker}{state} \\")
}

fn preamble(options: &DocumentOptions, summary: &StateSummary) -> String {
    let title = options.escaped_title();
    let author = options.escaped_author();
    let total = summary.total;
    let ready = summary.ready;
    let partial = summary.partial;
    let aether = summary.aether;
    format!(
        r"\documentclass{{article}}
\usepackage[utf8]{{inputenc}}
\usepackage[margin=0.5in,landscape]{{geometry}}
\usepackage[table]{{xcolor}}
\usepackage{{longtable}}

\title{{{title}}}
\author{{{author}}}
\date{{\today}}

\begin{{document}}
\maketitle

\section*{{Summary}}
\begin{{tabular}}{{lr}}
Total sets & {total} \\
Ready to go & {ready} \\
Partially complete & {partial} \\
In the aether & {aether} \\
\end{{tabular}}

\section*{{Inventory}}
\begin{{longtable}}{{|l|p{{6cm}}|p{{4cm}}|r|r|l|}}
\hline
\textbf{{Set}} & \textbf{{Name}} & \textbf{{Theme}} & \textbf{{Pieces}} & \textbf{{Age}} & \textbf{{State}} \\
\hline
\endhead
"
    )
}

const CLOSING: &str = "\\hline\n\\end{longtable}\n\n";

pub fn render_inventory(catalog: &Catalog, options: &DocumentOptions) -> RenderedDocument {
    let summary = catalog.state_summary();
    let mut text = preamble(options, &summary);
    for record in catalog {
        text.push_str(&render_row(record));
        text.push('\n');
    }
    text.push_str(CLOSING);
    text.push_str(END_DOCUMENT);
    debug!(
        total = summary.total,
        ready = summary.ready,
        partial = summary.partial,
        aether = summary.aether,
        "rendered inventory"
    );
    RenderedDocument {
        text,
        entries: catalog.len(),
    }
}
