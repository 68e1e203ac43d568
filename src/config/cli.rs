use crate::core::ConfigProvider;
use crate::domain::model::{BRASILAPI_DEFAULT_URL, VIACEP_DEFAULT_URL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "cep-lookup")]
#[command(about = "Consulta um CEP no ViaCEP e na BrasilAPI")]
pub struct CliConfig {
    #[arg(long, default_value = VIACEP_DEFAULT_URL, help = "ViaCEP base URL")]
    pub viacep_url: String,

    #[arg(long, default_value = BRASILAPI_DEFAULT_URL, help = "BrasilAPI base URL")]
    pub brasilapi_url: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit diagnostics as JSON lines on stderr")]
    pub json_logs: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            viacep_url: VIACEP_DEFAULT_URL.to_string(),
            brasilapi_url: BRASILAPI_DEFAULT_URL.to_string(),
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn viacep_url(&self) -> &str {
        &self.viacep_url
    }

    fn brasilapi_url(&self) -> &str {
        &self.brasilapi_url
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("viacep_url", &self.viacep_url)?;
        validate_url("brasilapi_url", &self.brasilapi_url)?;
        Ok(())
    }
}
