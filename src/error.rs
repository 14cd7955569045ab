//! Error types.
//!
//! Building a breadcrumb cannot fail: a menu the provider knows nothing
//! about is skipped, and an empty result is a valid breadcrumb. The only
//! fallible step is loading [`Settings`](crate::Settings).
//!
//! ```
//! use menu_breadcrumb::{ConfigError, Settings};
//!
//! let err = Settings::from_yaml_str("determine_menu: [").unwrap_err();
//! assert!(matches!(err, ConfigError::Parse(_)));
//! ```

use thiserror::Error;

/// Errors raised while loading or validating settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
