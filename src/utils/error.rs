use thiserror::Error;

/// 單一 provider 查詢失敗的原因，訊息直接顯示給使用者
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("erro na requisição {provider}: {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("erro ao ler JSON {provider}: {message}")]
    Decode { provider: String, message: String },

    /// `label` carries the preposition, e.g. "no ViaCEP" or "na BrasilAPI"
    #[error("CEP não encontrado {label}")]
    NotFound { provider: String, label: String },
}

impl LookupError {
    pub fn provider(&self) -> &str {
        match self {
            LookupError::Transport { provider, .. }
            | LookupError::Decode { provider, .. }
            | LookupError::NotFound { provider, .. } => provider,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound { .. })
    }
}

#[derive(Error, Debug)]
pub enum CepError {
    #[error("HTTP client error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CepError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::HttpClientError(_) => "Não foi possível inicializar o cliente HTTP".to_string(),
            CepError::IoError(e) => format!("Falha de entrada/saída: {}", e),
            CepError::InvalidConfigValueError { field, reason, .. } => {
                format!("Opção inválida --{}: {}", field.replace('_', "-"), reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;
