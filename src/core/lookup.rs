use crate::domain::model::{AddressRecord, FieldMapping, ProviderSpec};
use crate::domain::ports::AddressProvider;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};

const USER_AGENT: &str = concat!("cep-lookup/", env!("CARGO_PKG_VERSION"));

/// One HTTP lookup client; instantiated once per provider.
///
/// Each instance owns its own `Client`, so the two providers never share a
/// connection. No timeout and no retry are configured.
pub struct HttpProvider {
    spec: ProviderSpec,
    client: Client,
}

impl HttpProvider {
    pub fn new(spec: ProviderSpec) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { spec, client })
    }

    async fn fetch_body(&self, url: &str) -> std::result::Result<String, LookupError> {
        let transport = |source| LookupError::Transport {
            provider: self.spec.name.clone(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        tracing::debug!("{} responded with status {}", self.spec.name, response.status());

        // 不管 HTTP status，body 一律讀完再解析
        response.text().await.map_err(transport)
    }
}

#[async_trait]
impl AddressProvider for HttpProvider {
    fn name(&self) -> &str {
        &self.spec.name
    }

    async fn lookup(&self, cep: &str) -> std::result::Result<AddressRecord, LookupError> {
        let url = self.spec.endpoint(cep);
        tracing::debug!("Making API request to: {}", url);

        let body = self.fetch_body(&url).await?;
        tracing::debug!("{} body: {} bytes", self.spec.name, body.len());

        let record = decode_record(&self.spec.name, &self.spec.fields, &body)?;
        if !record.is_found() {
            tracing::info!("{}: no address for CEP '{}'", self.spec.name, cep);
            return Err(LookupError::NotFound {
                provider: self.spec.name.clone(),
                label: self.spec.not_found_label.clone(),
            });
        }

        Ok(record)
    }
}

/// 依照 provider 的欄位對應把 JSON body 轉成 AddressRecord
///
/// A `null` body, and missing or `null` fields, decode to empty strings; any
/// other non-string value, or a body that is neither an object nor `null`, is
/// a decode failure.
pub fn decode_record(
    provider: &str,
    fields: &FieldMapping,
    body: &str,
) -> std::result::Result<AddressRecord, LookupError> {
    let decode_err = |message: String| LookupError::Decode {
        provider: provider.to_string(),
        message,
    };

    let value: Value = serde_json::from_str(body).map_err(|e| decode_err(e.to_string()))?;
    let obj = match value {
        Value::Object(obj) => obj,
        Value::Null => Map::new(),
        other => {
            return Err(decode_err(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            )))
        }
    };

    let text = |key: &str| string_field(&obj, key).map_err(&decode_err);

    Ok(AddressRecord {
        cep: text(fields.cep)?,
        logradouro: text(fields.street)?,
        bairro: text(fields.neighborhood)?,
        localidade: text(fields.city)?,
        uf: text(fields.state)?,
    })
}

fn string_field(obj: &Map<String, Value>, key: &str) -> std::result::Result<String, String> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(format!(
            "field `{}` should be a string, found {}",
            key,
            json_kind(other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
