use comrak::Options;

/// Create ComrakOptions with GitHub Flavored Markdown settings
///
/// Heading ids are left off; they are assigned after rendering so that
/// markdown and HTML sources get the same ids.
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown(content: &str) -> String {
    comrak::markdown_to_html(content, &create_comrak_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let html = render_markdown("# Hello, World!\n\nThis is a **bold** statement.");

        assert!(html.contains("<h1>Hello, World!</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_inline_html_is_kept() {
        let html = render_markdown("<h2 class=\"raw\">Raw</h2>\n");
        assert!(html.contains("<h2 class=\"raw\">Raw</h2>"));
    }
}
