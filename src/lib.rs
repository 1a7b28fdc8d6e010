pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::zms::ZmsClient;
pub use config::{CliConfig, LookupConfig};
pub use crate::core::lookup::LookupEngine;
pub use domain::model::{DomainMetadata, LookupResult};
pub use utils::error::{LookupError, Result};

use std::io::Write;

/// Builds the mutual-TLS ZMS client from `config`, looks the domain up and
/// writes the result line to `out`.
pub async fn execute<W: Write>(config: &LookupConfig, out: &mut W) -> Result<LookupResult> {
    let client = ZmsClient::from_config(config)?;
    tracing::debug!("ZMS client ready for {}", client.base_url());

    let engine = LookupEngine::new(client);
    engine.run(&config.domain, out).await
}
