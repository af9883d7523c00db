use std::path::Path;

use log::debug;
use serde::Serialize;

use crate::markdown::render_markdown;
use crate::toc::parser::assign_heading_ids;
use crate::toc::types::{HeadingDescriptor, IdStrategy};
use crate::utils::path::has_extension;

const MARKDOWN_EXTENSIONS: [&str; 4] = ["md", "markdown", "mdown", "mkd"];

/// Source format of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Markdown,
    Html,
}

impl DocumentFormat {
    /// Guess the format from a file name, HTML unless it looks like markdown
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        if has_extension(path, &MARKDOWN_EXTENSIONS) {
            DocumentFormat::Markdown
        } else {
            DocumentFormat::Html
        }
    }
}

/// Rendered document body together with its table of contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreparedDocument {
    pub html: String,
    pub headings: Vec<HeadingDescriptor>,
}

/// Render a document and give its headings stable ids
pub fn prepare_document(source: &str, format: DocumentFormat, strategy: IdStrategy) -> PreparedDocument {
    let html = match format {
        DocumentFormat::Markdown => render_markdown(source),
        DocumentFormat::Html => source.to_string(),
    };

    let (html, headings) = assign_heading_ids(&html, strategy);
    debug!("Prepared {:?} document with {} headings", format, headings.len());

    PreparedDocument { html, headings }
}
