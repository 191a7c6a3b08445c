//! # Config Commands
//!
//! Commands for retrieving storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - App startup (marketplace name in the header)
/// - Currency formatting
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_returns_copy() {
        let config = ConfigState::default();
        assert_eq!(get_config(&config), config);
    }
}
