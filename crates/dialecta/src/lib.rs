//! Facade crate for the Dialecta feature slices and shared modules.
//! Re-exports domain/kernel primitives and composes the atlas and challenge
//! slices into an interactive [`Session`].
//! Keep this crate thin: business rules live in the slices.
//!
//! ## Usage
//! - Load an [`AppConfig`] with [`load_config`].
//! - Call [`init`] to load the data document and open a session.

mod error;
mod mode;
mod session;
mod style;

pub use crate::error::{DialectaError, DialectaErrorExt};
pub use crate::mode::Mode;
pub use crate::session::{ClickResponse, Session};
pub use crate::style::{Style, StyleRequest};
pub use dialecta_domain as domain;
pub use dialecta_kernel as kernel;

use dialecta_atlas::Atlas;
use dialecta_domain::config::AppConfig;
use std::path::Path;
use tracing::info;

/// Feature slices.
pub mod features {
    pub use dialecta_atlas as atlas;
    pub use dialecta_challenge as challenge;
}

/// Loads the configuration file at `path`, or the optional default file when `None`.
///
/// `DIALECTA__*` environment variables override file values.
///
/// # Errors
/// [`DialectaError::Config`] when an explicit file is missing or any value is malformed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, DialectaError> {
    let config = dialecta_kernel::config::load_config(path, path.is_some())
        .context(path.map_or_else(|| "Default configuration".to_owned(), |p| format!("Loading {}", p.display())))?;
    Ok(config)
}

/// Loads the data document named by `config` and opens a session.
///
/// # Errors
/// [`DialectaError::Load`] when the document is missing or malformed.
pub fn init(config: &AppConfig) -> Result<Session, DialectaError> {
    let atlas = Atlas::from_config(&config.data)
        .context(format!("Loading {}", config.data.path.display()))?;
    info!(
        grading = ?config.challenge.grading,
        kinds = config.challenge.kinds.bits(),
        seeded = config.challenge.seed.is_some(),
        "Session opened"
    );
    Ok(Session::new(atlas, config.challenge.clone()))
}
