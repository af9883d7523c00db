use log::{debug, info};
use serde::Serialize;

use pagemark::config::NavConfig;
use pagemark::pagination::{PageChangeMode, PageItem, PageItemKind, PageToken, Pagination};
use pagemark::Result;

use crate::cli::types::{Commands, OutputFormat};

/// Pagination bar as printed in JSON
#[derive(Debug, Serialize)]
struct PaginationReport {
    current: usize,
    total: usize,
    compact: bool,
    tokens: Vec<PageToken>,
    has_prev: bool,
    has_next: bool,
    items: Vec<PageItem>,
}

/// Handle the paginate command
pub fn handle_paginate_command(command: &Commands, config: &NavConfig) -> Result<()> {
    if let Commands::Paginate { current, total, compact, base_path, format } = command {
        let base_path = base_path
            .clone()
            .unwrap_or_else(|| config.pagination.base_path.clone());

        let pagination = match Pagination::new(*current, *total, PageChangeMode::link(base_path.clone())) {
            Some(pagination) => pagination.with_ranges(config.pagination.ranges()),
            None => {
                info!("Only {} page(s), no pagination shown", total);
                if *format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&empty_report(*current, *total, *compact))?);
                }
                return Ok(());
            }
        };

        if *current < 1 || *current > *total {
            debug!("Current page {} is outside 1..={}", current, total);
        }

        let report = PaginationReport {
            current: *current,
            total: *total,
            compact: *compact,
            tokens: pagination.tokens(*compact),
            has_prev: pagination.has_prev(),
            has_next: pagination.has_next(),
            items: pagination.items(*compact),
        };

        match format {
            OutputFormat::Text => print!("{}", format_report(&report, !base_path.is_empty())),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
    }

    Ok(())
}

fn empty_report(current: usize, total: usize, compact: bool) -> PaginationReport {
    PaginationReport {
        current,
        total,
        compact,
        tokens: Vec::new(),
        has_prev: false,
        has_next: false,
        items: Vec::new(),
    }
}

/// Token line with the current page bracketed, then prev/next and links
fn format_report(report: &PaginationReport, with_links: bool) -> String {
    let line: Vec<String> = report
        .tokens
        .iter()
        .map(|token| match token {
            PageToken::Page(page) if *page == report.current => format!("[{}]", page),
            other => other.to_string(),
        })
        .collect();

    let describe = |enabled: bool, page: usize| {
        if enabled { page.to_string() } else { "-".to_string() }
    };

    let mut out = format!(
        "{}\nprev: {}  next: {}\n",
        line.join(" "),
        describe(report.has_prev, report.current.saturating_sub(1)),
        describe(report.has_next, report.current.saturating_add(1)),
    );

    if with_links {
        for item in &report.items {
            if let (PageItemKind::Page, Some(page), Some(href)) = (item.kind, item.page, &item.href) {
                out.push_str(&format!("{} -> {}\n", page, href));
            }
        }
    }

    out
}
