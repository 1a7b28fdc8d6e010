use crate::core::output::write_result_line;
use crate::core::{DomainMetadataSource, LookupResult};
use crate::domain::resolver::top_level_domain;
use crate::utils::error::Result;
use std::io::Write;

pub struct LookupEngine<S: DomainMetadataSource> {
    source: S,
}

impl<S: DomainMetadataSource> LookupEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub async fn lookup(&self, domain: &str) -> Result<LookupResult> {
        let top_level = top_level_domain(domain);
        tracing::debug!("Resolved '{}' to top-level domain '{}'", domain, top_level);

        let metadata = self.source.get_domain(top_level).await?;
        tracing::debug!(
            "Domain '{}' business service: {:?}",
            metadata.name,
            metadata.business_service
        );

        Ok(LookupResult {
            top_level_domain: top_level.to_string(),
            business_service: metadata.business_service().to_string(),
        })
    }

    /// Looks the domain up and writes the result line. Nothing is written
    /// when the lookup fails.
    pub async fn run<W: Write>(&self, domain: &str, out: &mut W) -> Result<LookupResult> {
        let result = self.lookup(domain).await?;
        write_result_line(out, &result)?;
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DomainMetadata;
    use crate::utils::error::LookupError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockSource {
        domains: HashMap<String, DomainMetadata>,
        requests: Mutex<Vec<String>>,
    }

    impl MockSource {
        fn new() -> Self {
            Self {
                domains: HashMap::new(),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn with_domain(mut self, name: &str, business_service: Option<&str>) -> Self {
            self.domains.insert(
                name.to_string(),
                DomainMetadata {
                    name: name.to_string(),
                    business_service: business_service.map(str::to_string),
                    ..Default::default()
                },
            );
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DomainMetadataSource for MockSource {
        async fn get_domain(&self, name: &str) -> Result<DomainMetadata> {
            self.requests.lock().unwrap().push(name.to_string());
            self.domains
                .get(name)
                .cloned()
                .ok_or_else(|| LookupError::DomainNotFound {
                    domain: name.to_string(),
                })
        }
    }

    #[tokio::test]
    async fn test_run_prints_domain_and_business_service() {
        let source = MockSource::new().with_domain("finance", Some("Payments"));
        let engine = LookupEngine::new(source);

        let mut out = Vec::new();
        let result = engine.run("finance", &mut out).await.unwrap();

        assert_eq!(result.business_service, "Payments");
        assert_eq!(String::from_utf8(out).unwrap(), "finance,Payments\n");
    }

    #[tokio::test]
    async fn test_subdomain_is_looked_up_by_top_level() {
        let source = MockSource::new().with_domain("sports", Some("Media"));
        let engine = LookupEngine::new(source);

        let result = engine.lookup("sports.nba").await.unwrap();

        assert_eq!(result.top_level_domain, "sports");
        assert_eq!(engine.source.requests(), vec!["sports"]);
    }

    #[tokio::test]
    async fn test_leading_dot_queries_empty_name() {
        let source = MockSource::new().with_domain("", None);
        let engine = LookupEngine::new(source);

        let mut out = Vec::new();
        engine.run(".hidden", &mut out).await.unwrap();

        assert_eq!(engine.source.requests(), vec![""]);
        assert_eq!(String::from_utf8(out).unwrap(), ",\n");
    }

    #[tokio::test]
    async fn test_failure_writes_nothing() {
        let engine = LookupEngine::new(MockSource::new());

        let mut out = Vec::new();
        let err = engine.run("unknown.sub", &mut out).await.unwrap_err();

        assert!(matches!(err, LookupError::DomainNotFound { ref domain } if domain == "unknown"));
        assert!(out.is_empty());
    }
}
