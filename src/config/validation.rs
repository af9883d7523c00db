use log::warn;

use crate::config::types::{NavConfig, PanelConfig, PaginationConfig, TocConfig};
use crate::utils::error::{PagemarkError, Result};

/// Validate the configuration
pub fn validate_config(config: &NavConfig) -> Result<()> {
    validate_toc(&config.toc)?;
    validate_pagination(&config.pagination)?;
    validate_panels(&config.panels)?;
    Ok(())
}

/// Validate the table of contents thresholds
fn validate_toc(toc: &TocConfig) -> Result<()> {
    let thresholds = [
        ("toc.header_offset", toc.header_offset),
        ("toc.reading_line_slack", toc.reading_line_slack),
        ("toc.bottom_threshold", toc.bottom_threshold),
        ("toc.scroll_offset", toc.scroll_offset),
        ("toc.indent_step", toc.indent_step),
    ];

    for (name, value) in thresholds {
        if !value.is_finite() || value < 0.0 {
            return Err(PagemarkError::Config(format!(
                "{} must be a non-negative number, got {}", name, value
            )));
        }
    }

    Ok(())
}

/// Validate the pagination window ranges
fn validate_pagination(pagination: &PaginationConfig) -> Result<()> {
    if pagination.compact_range > pagination.full_range {
        return Err(PagemarkError::Config(format!(
            "pagination.compact_range ({}) must not exceed pagination.full_range ({})",
            pagination.compact_range, pagination.full_range
        )));
    }

    if pagination.base_path.contains('?') {
        warn!(
            "pagination.base_path '{}' already has a query string; page links will append another",
            pagination.base_path
        );
    }

    Ok(())
}

/// Validate resizable panel bounds
fn validate_panels(panels: &PanelConfig) -> Result<()> {
    for (name, value) in [
        ("panels.min_size", panels.min_size),
        ("panels.max_size", panels.max_size),
        ("panels.default_size", panels.default_size),
    ] {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(PagemarkError::Config(format!(
                "{} must be between 0 and 100, got {}", name, value
            )));
        }
    }

    if panels.min_size > panels.max_size {
        return Err(PagemarkError::Config(format!(
            "panels.min_size ({}) must not exceed panels.max_size ({})",
            panels.min_size, panels.max_size
        )));
    }

    if panels.default_size < panels.min_size || panels.default_size > panels.max_size {
        return Err(PagemarkError::Config(format!(
            "panels.default_size ({}) must lie within [{}, {}]",
            panels.default_size, panels.min_size, panels.max_size
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate_config(&NavConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_threshold() {
        let mut config = NavConfig::default();
        config.toc.bottom_threshold = -1.0;
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("toc.bottom_threshold"));
    }

    #[test]
    fn test_non_finite_threshold() {
        let mut config = NavConfig::default();
        config.toc.header_offset = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_compact_wider_than_full() {
        let mut config = NavConfig::default();
        config.pagination.compact_range = 2;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_panel_bounds() {
        let mut config = NavConfig::default();
        config.panels.min_size = 60.0;
        config.panels.max_size = 40.0;
        assert!(validate_config(&config).is_err());

        let mut config = NavConfig::default();
        config.panels.default_size = 95.0;
        assert!(validate_config(&config).is_err());

        let mut config = NavConfig::default();
        config.panels.max_size = 120.0;
        assert!(validate_config(&config).is_err());
    }
}
