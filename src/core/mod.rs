pub mod engine;
pub mod lookup;
pub mod report;

pub use crate::domain::model::{AddressRecord, FieldMapping, ProviderSpec};
pub use crate::domain::ports::{AddressProvider, ConfigProvider};
pub use crate::utils::error::Result;
