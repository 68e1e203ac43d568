use std::fmt;

/// Common address shape every provider response is decoded into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRecord {
    pub cep: String,
    pub logradouro: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl AddressRecord {
    /// 只有 cep 非空才算查到
    pub fn is_found(&self) -> bool {
        !self.cep.is_empty()
    }
}

impl fmt::Display for AddressRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "CEP: {}", self.cep)?;
        writeln!(f, "Rua: {}", self.logradouro)?;
        writeln!(f, "Bairro: {}", self.bairro)?;
        writeln!(f, "Cidade: {}", self.localidade)?;
        writeln!(f, "UF: {}", self.uf)
    }
}

/// JSON keys a provider uses for each of the five record fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub cep: &'static str,
    pub street: &'static str,
    pub neighborhood: &'static str,
    pub city: &'static str,
    pub state: &'static str,
}

impl FieldMapping {
    pub const VIACEP: FieldMapping = FieldMapping {
        cep: "cep",
        street: "logradouro",
        neighborhood: "bairro",
        city: "localidade",
        state: "uf",
    };

    pub const BRASILAPI: FieldMapping = FieldMapping {
        cep: "cep",
        street: "street",
        neighborhood: "neighborhood",
        city: "city",
        state: "state",
    };
}

/// URL template plus field mapping; one per provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSpec {
    pub name: String,
    pub base_url: String,
    /// must contain `{cep}`
    pub path_template: String,
    pub fields: FieldMapping,
    /// provider name with its preposition, used in the not-found message
    pub not_found_label: String,
}

pub const VIACEP_DEFAULT_URL: &str = "https://viacep.com.br";
pub const BRASILAPI_DEFAULT_URL: &str = "https://brasilapi.com.br";

impl ProviderSpec {
    pub fn viacep(base_url: impl Into<String>) -> Self {
        Self {
            name: "ViaCEP".to_string(),
            base_url: base_url.into(),
            path_template: "/ws/{cep}/json/".to_string(),
            fields: FieldMapping::VIACEP,
            not_found_label: "no ViaCEP".to_string(),
        }
    }

    pub fn brasilapi(base_url: impl Into<String>) -> Self {
        Self {
            name: "BrasilAPI".to_string(),
            base_url: base_url.into(),
            path_template: "/api/cep/v1/{cep}".to_string(),
            fields: FieldMapping::BRASILAPI,
            not_found_label: "na BrasilAPI".to_string(),
        }
    }

    /// The CEP is embedded as-is, without escaping.
    pub fn endpoint(&self, cep: &str) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.path_template.replace("{cep}", cep)
        )
    }
}
