use crate::domain::model::DomainMetadata;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Anything that can answer "what is the metadata of this top-level domain".
#[async_trait]
pub trait DomainMetadataSource: Send + Sync {
    async fn get_domain(&self, name: &str) -> Result<DomainMetadata>;
}
