use crate::core::lookup::HttpProvider;
use crate::core::report::{render_outcome, ProviderOutcome, CLOSING, HEADER};
use crate::domain::ports::{AddressProvider, ConfigProvider};
use crate::utils::error::Result;
use std::io::Write;

/// Runs every provider in order and reports each outcome as it arrives.
pub struct LookupEngine {
    providers: Vec<Box<dyn AddressProvider>>,
}

impl LookupEngine {
    pub fn new(providers: Vec<Box<dyn AddressProvider>>) -> Self {
        Self { providers }
    }

    /// ViaCEP 與 BrasilAPI，各自獨立的 HTTP client
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let providers = config
            .provider_specs()
            .into_iter()
            .map(|spec| HttpProvider::new(spec).map(|p| Box::new(p) as Box<dyn AddressProvider>))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(providers))
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Lookups run one after another; a failed provider never stops the next.
    /// Only a failure writing to `out` is returned as an error.
    pub async fn run<W: Write>(&self, cep: &str, out: &mut W) -> Result<Vec<ProviderOutcome>> {
        tracing::info!("Looking up CEP '{}' on {} providers", cep, self.providers.len());
        writeln!(out, "{}", HEADER)?;

        let mut outcomes = Vec::with_capacity(self.providers.len());
        for provider in &self.providers {
            let result = provider.lookup(cep).await;
            match &result {
                Ok(_) => tracing::info!("✅ {} found CEP '{}'", provider.name(), cep),
                Err(e) if e.is_not_found() => tracing::info!("{}", e),
                Err(e) => tracing::warn!("❌ {}", e),
            }

            let outcome = ProviderOutcome {
                provider: provider.name().to_string(),
                result,
            };
            write!(out, "{}", render_outcome(&outcome))?;
            out.flush()?;
            outcomes.push(outcome);
        }

        writeln!(out, "{}", CLOSING)?;
        out.flush()?;
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AddressRecord;
    use crate::utils::error::LookupError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockProvider {
        name: String,
        found: bool,
        calls: Arc<AtomicUsize>,
    }

    impl MockProvider {
        fn boxed(name: &str, found: bool, calls: Arc<AtomicUsize>) -> Box<dyn AddressProvider> {
            Box::new(Self {
                name: name.to_string(),
                found,
                calls,
            })
        }
    }

    #[async_trait]
    impl AddressProvider for MockProvider {
        fn name(&self) -> &str {
            &self.name
        }

        async fn lookup(&self, cep: &str) -> std::result::Result<AddressRecord, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.found {
                Ok(AddressRecord {
                    cep: cep.to_string(),
                    uf: "RJ".to_string(),
                    ..Default::default()
                })
            } else {
                Err(LookupError::NotFound {
                    provider: self.name.clone(),
                    label: format!("no {}", self.name),
                })
            }
        }
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_next_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = LookupEngine::new(vec![
            MockProvider::boxed("A", false, calls.clone()),
            MockProvider::boxed("B", true, calls.clone()),
        ]);

        let mut out = Vec::new();
        let outcomes = engine.run("20040-002", &mut out).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_found());
        assert!(outcomes[1].is_found());

        let text = String::from_utf8(out).unwrap();
        let a_pos = text.find("A: ❌ CEP não encontrado no A").unwrap();
        let b_pos = text.find("B: ✅ Encontrado!").unwrap();
        assert!(a_pos < b_pos);
        assert!(text.ends_with("🔚 Fim da consulta.\n"));
    }

    #[tokio::test]
    async fn test_success_does_not_skip_failing_provider() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = LookupEngine::new(vec![
            MockProvider::boxed("A", true, calls.clone()),
            MockProvider::boxed("B", false, calls.clone()),
        ]);

        let mut out = Vec::new();
        let outcomes = engine.run("20040-002", &mut out).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(outcomes[0].is_found());
        assert!(!outcomes[1].is_found());

        let text = String::from_utf8(out).unwrap();
        let a_pos = text.find("A: ✅ Encontrado!\nCEP: 20040-002\n").unwrap();
        let b_pos = text.find("B: ❌ CEP não encontrado no B\n").unwrap();
        assert!(a_pos < b_pos);
        assert!(text.ends_with("🔚 Fim da consulta.\n"));
    }

    #[tokio::test]
    async fn test_all_failures_still_print_closing() {
        let calls = Arc::new(AtomicUsize::new(0));
        let engine = LookupEngine::new(vec![
            MockProvider::boxed("A", false, calls.clone()),
            MockProvider::boxed("B", false, calls.clone()),
        ]);

        let mut out = Vec::new();
        let outcomes = engine.run("00000-000", &mut out).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(outcomes.iter().all(|o| !o.is_found()));
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n🔎 Consultando CEP...\n"));
        assert!(text.ends_with("🔚 Fim da consulta.\n"));
    }

    #[test]
    fn test_from_config_keeps_provider_order() {
        struct Urls;
        impl ConfigProvider for Urls {
            fn viacep_url(&self) -> &str {
                "http://localhost:1"
            }
            fn brasilapi_url(&self) -> &str {
                "http://localhost:2"
            }
        }

        let engine = LookupEngine::from_config(&Urls).unwrap();
        assert_eq!(engine.provider_names(), vec!["ViaCEP", "BrasilAPI"]);
    }
}
