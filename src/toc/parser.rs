use std::collections::HashSet;
use std::ops::Range;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::toc::types::{HeadingDescriptor, IdStrategy};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r"(?is)<h([1-6])(\s[^>]*)?>(.*?)</h[1-6]\s*>"
    ).unwrap();

    static ref ID_ATTR_REGEX: Regex = Regex::new(
        r#"(?i)(?:^|\s)id\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+))"#
    ).unwrap();

    // Markup a browser never renders as headings. An unterminated comment
    // runs to the end of the document.
    static ref OPAQUE_REGEX: Regex = Regex::new(
        r"(?is)<!--(?:.*?-->|.*)|<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>|<textarea\b[^>]*>.*?</textarea\s*>"
    ).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// One heading element located in a document
struct HeadingMatch {
    /// Whole element, opening tag to closing tag
    span: Range<usize>,
    level: usize,
    attrs: String,
    /// Raw inner markup, as written in the document
    inner: String,
    text: String,
}

/// Locate the headings a browser would render, in document order
///
/// Comments and the bodies of `script`, `style` and `textarea` elements are
/// blanked out before matching, so offsets still refer to `html`.
fn scan_headings(html: &str) -> Vec<HeadingMatch> {
    let masked = mask_opaque(html);

    HEADING_REGEX
        .captures_iter(&masked)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            let inner = cap.get(3)?;
            let level = cap[1].parse().ok()?;
            let attrs = cap.get(2).map(|attrs| attrs.range()).unwrap_or(0..0);

            Some(HeadingMatch {
                span: whole.range(),
                level,
                attrs: html.get(attrs)?.to_string(),
                inner: html.get(inner.range())?.to_string(),
                // Text comes from the masked copy so inline comments drop out
                text: heading_text(inner.as_str()),
            })
        })
        .collect()
}

/// Replace hidden markup with spaces of the same byte length
fn mask_opaque(html: &str) -> String {
    let mut masked = String::with_capacity(html.len());
    let mut last_end = 0;

    for m in OPAQUE_REGEX.find_iter(html) {
        trace!("Ignoring hidden markup at {}..{}", m.start(), m.end());
        masked.push_str(&html[last_end..m.start()]);
        masked.push_str(&" ".repeat(m.len()));
        last_end = m.end();
    }

    masked.push_str(&html[last_end..]);
    masked
}

/// Extract headings from HTML content, keeping the ids already present
///
/// Headings without an id get one slugified from their text, made unique
/// against every other id in the document.
pub fn extract_headings(html: &str) -> Vec<HeadingDescriptor> {
    let matches = scan_headings(html);
    let existing: Vec<Option<String>> = matches.iter().map(|m| existing_id(&m.attrs)).collect();
    let mut used: HashSet<String> = existing.iter().flatten().cloned().collect();

    matches
        .into_iter()
        .zip(existing)
        .map(|(m, id)| {
            let id = id.unwrap_or_else(|| unique_slug(&m.text, &mut used));
            HeadingDescriptor::new(id, m.text, m.level)
        })
        .collect()
}

/// Give every heading in `html` a generated id
///
/// Existing ids are replaced so the returned descriptors always match the
/// rewritten markup. Headings are numbered across all levels in document
/// order; headings inside comments or raw-text elements are left alone.
pub fn assign_heading_ids(html: &str, strategy: IdStrategy) -> (String, Vec<HeadingDescriptor>) {
    let mut output = String::with_capacity(html.len() + 64);
    let mut headings = Vec::new();
    let mut used = HashSet::new();
    let mut last_end = 0;

    for (index, m) in scan_headings(html).into_iter().enumerate() {
        let id = match strategy {
            IdStrategy::Indexed => format!("heading-{}", index),
            IdStrategy::Slug => unique_slug(&m.text, &mut used),
        };

        let attrs = ID_ATTR_REGEX.replace_all(&m.attrs, "");

        output.push_str(&html[last_end..m.span.start]);
        output.push_str(&format!(
            "<h{level} id=\"{}\"{attrs}>{}</h{level}>",
            html_escape::encode_double_quoted_attribute(&id),
            m.inner,
            level = m.level,
        ));
        last_end = m.span.end;

        headings.push(HeadingDescriptor::new(id, m.text, m.level));
    }

    output.push_str(&html[last_end..]);
    debug!("Assigned ids to {} headings", headings.len());

    (output, headings)
}

fn existing_id(attrs: &str) -> Option<String> {
    let cap = ID_ATTR_REGEX.captures(attrs)?;
    cap.get(1)
        .or_else(|| cap.get(2))
        .or_else(|| cap.get(3))
        .map(|m| m.as_str().trim().to_string())
        .filter(|id| !id.is_empty())
}

/// Plain heading text: tags stripped, entities decoded, whitespace collapsed
fn heading_text(inner: &str) -> String {
    let stripped = TAG_REGEX.replace_all(inner, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn slug_id(text: &str) -> String {
    let slug = slug::slugify(text);
    if slug.is_empty() {
        "section".to_string()
    } else {
        slug
    }
}

fn unique_slug(text: &str, used: &mut HashSet<String>) -> String {
    let base = slug_id(text);
    let mut candidate = base.clone();
    let mut suffix = 1;

    while used.contains(&candidate) {
        candidate = format!("{}-{}", base, suffix);
        suffix += 1;
    }

    used.insert(candidate.clone());
    candidate
}
