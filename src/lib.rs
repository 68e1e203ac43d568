pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::{engine::LookupEngine, lookup::HttpProvider, report::ProviderOutcome};
pub use domain::model::{AddressRecord, FieldMapping, ProviderSpec};
pub use utils::error::{CepError, LookupError, Result};
