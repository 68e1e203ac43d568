use crate::domain::model::AddressRecord;
use crate::utils::error::LookupError;

pub const PROMPT: &str = "Digite um CEP (somente números): ";
pub const HEADER: &str = "\n🔎 Consultando CEP...\n";
pub const CLOSING: &str = "🔚 Fim da consulta.";

/// Result of one provider lookup, kept for reporting.
#[derive(Debug)]
pub struct ProviderOutcome {
    pub provider: String,
    pub result: std::result::Result<AddressRecord, LookupError>,
}

impl ProviderOutcome {
    pub fn is_found(&self) -> bool {
        self.result.is_ok()
    }
}

/// 把單一 provider 的結果轉成要印出的文字（含結尾換行）
pub fn render_outcome(outcome: &ProviderOutcome) -> String {
    match &outcome.result {
        Ok(record) => format!("{}: ✅ Encontrado!\n{}\n", outcome.provider, record),
        Err(e) => format!("{}: ❌ {}\n", outcome.provider, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_success_block() {
        let outcome = ProviderOutcome {
            provider: "ViaCEP".to_string(),
            result: Ok(AddressRecord {
                cep: "01310-100".to_string(),
                logradouro: "Avenida Paulista".to_string(),
                bairro: "Bela Vista".to_string(),
                localidade: "São Paulo".to_string(),
                uf: "SP".to_string(),
            }),
        };

        assert_eq!(
            render_outcome(&outcome),
            "ViaCEP: ✅ Encontrado!\nCEP: 01310-100\nRua: Avenida Paulista\nBairro: Bela Vista\nCidade: São Paulo\nUF: SP\n\n"
        );
    }

    #[test]
    fn test_render_failure_line() {
        let outcome = ProviderOutcome {
            provider: "BrasilAPI".to_string(),
            result: Err(LookupError::NotFound {
                provider: "BrasilAPI".to_string(),
                label: "na BrasilAPI".to_string(),
            }),
        };

        assert!(!outcome.is_found());
        assert_eq!(
            render_outcome(&outcome),
            "BrasilAPI: ❌ CEP não encontrado na BrasilAPI\n"
        );
    }
}
