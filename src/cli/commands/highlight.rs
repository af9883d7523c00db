use log::info;
use serde::Deserialize;
use std::collections::HashMap;

use pagemark::config::NavConfig;
use pagemark::toc::{self, HeadingDescriptor, HighlightOptions, StaticLayout, ViewportMetrics};
use pagemark::utils::fs::read_file;
use pagemark::Result;

use crate::cli::types::Commands;

/// Layout snapshot read from a JSON fixture
#[derive(Debug, Deserialize)]
struct HighlightFixture {
    headings: Vec<HeadingDescriptor>,
    #[serde(default)]
    positions: HashMap<String, f64>,
    viewport: ViewportMetrics,
}

/// Handle the highlight command
pub fn handle_highlight_command(command: &Commands, config: &NavConfig) -> Result<()> {
    if let Commands::Highlight { fixture, header_offset } = command {
        let fixture: HighlightFixture = serde_json::from_str(&read_file(fixture)?)?;

        let mut options = config.toc.highlight_options();
        if let Some(header_offset) = header_offset {
            options = options.with_header_offset(*header_offset);
        }

        info!(
            "Highlighting {} headings at scroll position {}",
            fixture.headings.len(),
            fixture.viewport.scroll_y
        );
        print!("{}", describe_highlight(&fixture, &options));
    }

    Ok(())
}

/// Outline with the active heading marked, followed by the active id
fn describe_highlight(fixture: &HighlightFixture, options: &HighlightOptions) -> String {
    let layout = StaticLayout {
        positions: fixture.positions.clone(),
        viewport: fixture.viewport,
    };
    let active = toc::active_heading(&fixture.headings, &layout, options);

    format!(
        "{}active: {}\n",
        toc::render_toc_text(&fixture.headings, active),
        active.unwrap_or("(none)")
    )
}
