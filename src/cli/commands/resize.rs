use log::debug;

use pagemark::config::NavConfig;
use pagemark::resize::DragSession;
use pagemark::{PagemarkError, Result};

use crate::cli::types::Commands;

/// Handle the resize command
pub fn handle_resize_command(command: &Commands, config: &NavConfig) -> Result<()> {
    if let Commands::Resize { container, left, right, from, to } = command {
        let (left, right) = starting_widths(*container, *left, *right, config);
        debug!("Starting widths {}px / {}px", left, right);

        let bounds = config.panels.bounds();
        let mut session = DragSession::begin(*from, *container, left, right, bounds, bounds)
            .ok_or_else(|| PagemarkError::Parse(format!(
                "Container width must be positive, got {}", container
            )))?;

        let sizes = session.update(*to);
        let (left_basis, right_basis) = sizes.flex_basis();
        println!("left: {}  right: {}", left_basis, right_basis);
    }

    Ok(())
}

/// Panel widths when the handle is pressed, from the configured split
/// where not given
fn starting_widths(
    container: f64,
    left: Option<f64>,
    right: Option<f64>,
    config: &NavConfig,
) -> (f64, f64) {
    let (default_left, default_right) = config.panels.initial_sizes().widths(container);
    (left.unwrap_or(default_left), right.unwrap_or(default_right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resize(container: f64) -> Commands {
        Commands::Resize {
            container,
            left: Some(500.0),
            right: Some(500.0),
            from: 500.0,
            to: 600.0,
        }
    }

    #[test]
    fn test_zero_width_container_is_rejected() {
        let err = handle_resize_command(&resize(0.0), &NavConfig::default()).unwrap_err();
        assert!(matches!(err, PagemarkError::Parse(_)));
    }

    #[test]
    fn test_resize_succeeds() {
        assert!(handle_resize_command(&resize(1000.0), &NavConfig::default()).is_ok());
    }

    #[test]
    fn test_widths_default_to_configured_split() {
        let mut config = NavConfig::default();
        config.panels.default_size = 30.0;

        assert_eq!(starting_widths(1000.0, None, None, &config), (300.0, 700.0));
        assert_eq!(starting_widths(1000.0, Some(400.0), None, &config), (400.0, 700.0));
    }
}
