pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::{create_router, AppState};
pub use config::ServiceConfig;
pub use core::{checker::InnChecker, registry::HttpRegistryClient};
pub use utils::error::{CheckError, Result};
