use serde::Serialize;

use crate::toc::types::HeadingDescriptor;

/// Horizontal indentation per relative heading level
pub const DEFAULT_INDENT_STEP: f64 = 12.0;

/// One row of a rendered table of contents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub id: String,
    pub text: String,
    /// Level relative to the shallowest heading present
    pub depth: usize,
    pub indent_px: f64,
    pub active: bool,
}

/// The shallowest heading level in the list
pub fn min_level(headings: &[HeadingDescriptor]) -> Option<usize> {
    headings.iter().map(|heading| heading.level).min()
}

/// Build the table of contents rows, shallowest level at zero indent
pub fn toc_entries(
    headings: &[HeadingDescriptor],
    active_id: Option<&str>,
    indent_step: f64,
) -> Vec<TocEntry> {
    let Some(base) = min_level(headings) else {
        return Vec::new();
    };

    headings
        .iter()
        .map(|heading| {
            let depth = heading.level - base;
            TocEntry {
                id: heading.id.clone(),
                text: heading.text.clone(),
                depth,
                indent_px: depth as f64 * indent_step,
                active: active_id == Some(heading.id.as_str()),
            }
        })
        .collect()
}

/// Render the table of contents as an HTML navigation list
///
/// Returns `None` when there is nothing to show.
pub fn render_toc_html(
    headings: &[HeadingDescriptor],
    active_id: Option<&str>,
    indent_step: f64,
) -> Option<String> {
    let entries = toc_entries(headings, active_id, indent_step);
    if entries.is_empty() {
        return None;
    }

    let mut html = String::from("<nav class=\"table-of-contents\" role=\"navigation\">\n<ul>\n");

    for entry in &entries {
        let id = html_escape::encode_double_quoted_attribute(&entry.id);
        html.push_str(&format!(
            "<li style=\"padding-left: {}px\"><a href=\"#{}\" data-toc-id=\"{}\"{}>{}</a></li>\n",
            entry.indent_px,
            id,
            id,
            if entry.active { " class=\"active\"" } else { "" },
            html_escape::encode_text(&entry.text)
        ));
    }

    html.push_str("</ul>\n</nav>");
    Some(html)
}

/// Render the table of contents as an indented plain-text outline
pub fn render_toc_text(headings: &[HeadingDescriptor], active_id: Option<&str>) -> String {
    toc_entries(headings, active_id, DEFAULT_INDENT_STEP)
        .iter()
        .map(|entry| {
            format!(
                "{}{} {} (#{})\n",
                "  ".repeat(entry.depth),
                if entry.active { ">" } else { "-" },
                entry.text,
                entry.id
            )
        })
        .collect()
}
