use crate::domain::model::{AddressRecord, ProviderSpec};
use crate::utils::error::LookupError;
use async_trait::async_trait;

#[async_trait]
pub trait AddressProvider: Send + Sync {
    fn name(&self) -> &str;
    async fn lookup(&self, cep: &str) -> std::result::Result<AddressRecord, LookupError>;
}

pub trait ConfigProvider: Send + Sync {
    fn viacep_url(&self) -> &str;
    fn brasilapi_url(&self) -> &str;

    /// Providers in query order.
    fn provider_specs(&self) -> Vec<ProviderSpec> {
        vec![
            ProviderSpec::viacep(self.viacep_url()),
            ProviderSpec::brasilapi(self.brasilapi_url()),
        ]
    }
}
