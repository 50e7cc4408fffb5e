//! Simple layout: a two-column name/description table.

use catalog_model::{Catalog, Record, fields};
use tracing::debug;

use crate::latex::{
    AMPERSAND_PERCENT_ESCAPES, DocumentOptions, END_DOCUMENT, FieldRule, NO_ESCAPES,
    RenderedDocument,
};

const NAME: FieldRule = FieldRule::new(fields::SIMPLE_NAME, "", NO_ESCAPES);
const DESCRIPTION: FieldRule =
    FieldRule::new(fields::SIMPLE_DESCRIPTION, "", AMPERSAND_PERCENT_ESCAPES);

/// One row followed by its rule line.
pub fn render_row(record: &Record) -> String {
    let name = NAME.raw(record);
    let description = DESCRIPTION.raw(record);
    format!("{name} & {description} \\\\\n\\hline\n")
}

fn preamble(options: &DocumentOptions) -> String {
    let title = options.escaped_title();
    let author = options.escaped_author();
    format!(
        r"\documentclass{{article}}
\usepackage[utf8]{{inputenc}}
\usepackage[margin=0.75in]{{geometry}}
\usepackage{{longtable}}

\title{{{title}}}
\author{{{author}}}
\date{{\today}}

\begin{{document}}
\maketitle

\begin{{longtable}}{{|p{{0.3\textwidth}}|p{{0.6\textwidth}}|}}
\hline
\textbf{{Name}} & \textbf{{Description}} \\
\hline
\endhead
"
    )
}

pub fn render_simple(catalog: &Catalog, options: &DocumentOptions) -> RenderedDocument {
    let mut text = preamble(options);
    for record in catalog {
        text.push_str(&render_row(record));
    }
    text.push_str("\\end{longtable}\n\n");
    text.push_str(END_DOCUMENT);
    debug!(rows = catalog.len(), "rendered name/description table");
    RenderedDocument {
        text,
        entries: catalog.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_escapes_description_only() {
        let record: Record = [("name", "R&D"), ("description", "50% off & #1")]
            .into_iter()
            .collect();
        assert_eq!(render_row(&record), "R&D & 50\\% off \\& #1 \\\\\n\\hline\n");
    }

    #[test]
    fn missing_fields_are_empty() {
        assert_eq!(render_row(&Record::new()), " &  \\\\\n\\hline\n");
    }
}
