use std::fs;

use log::info;

use pagemark::config::NavConfig;
use pagemark::toc::{self, DocumentFormat, IdStrategy, PreparedDocument};
use pagemark::utils::fs::read_file;
use pagemark::Result;

use crate::cli::types::{Commands, TocFormat};

/// Handle the toc command
pub fn handle_toc_command(command: &Commands, config: &NavConfig) -> Result<()> {
    if let Commands::Toc { file, format, slug, output } = command {
        let source = read_file(file)?;
        let strategy = if *slug { IdStrategy::Slug } else { config.toc.id_strategy };

        let document = toc::prepare_document(&source, DocumentFormat::from_path(file), strategy);
        info!("Found {} headings in {}", document.headings.len(), file.display());

        if let Some(output) = output {
            fs::write(output, &document.html)?;
            info!("Document with heading ids written to {}", output.display());
        }

        print!("{}", format_toc(&document, *format, config.toc.indent_step)?);
    }

    Ok(())
}

/// Render the table of contents of a prepared document
fn format_toc(document: &PreparedDocument, format: TocFormat, indent_step: f64) -> Result<String> {
    Ok(match format {
        TocFormat::Text => toc::render_toc_text(&document.headings, None),
        TocFormat::Html => toc::render_toc_html(&document.headings, None, indent_step)
            .map(|html| format!("{}\n", html))
            .unwrap_or_default(),
        TocFormat::Json => format!("{}\n", serde_json::to_string_pretty(&document.headings)?),
    })
}
