use crate::adapters::tls::{ClientIdentity, TlsSettings, TlsTransport};
use crate::config::LookupConfig;
use crate::domain::model::{DomainMetadata, ServiceErrorBody};
use crate::domain::ports::DomainMetadataSource;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::validate_service_url;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// ZMS REST client over a mutual-TLS transport.
pub struct ZmsClient {
    base_url: Url,
    client: Client,
}

impl ZmsClient {
    pub fn new(base_url: &str, tls: TlsSettings) -> Result<Self> {
        let base_url = validate_service_url(base_url)?;
        let builder = match tls.build_transport()? {
            TlsTransport::Rustls(config) => Client::builder().use_preconfigured_tls(config),
            TlsTransport::Native(connector) => Client::builder().use_preconfigured_tls(connector),
        };

        let client = builder
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LookupError::ClientBuildError {
                message: e.to_string(),
            })?;

        Ok(Self { base_url, client })
    }

    /// Loads the identity named by `config` and builds the client.
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        let identity = ClientIdentity::from_pem_files(&config.cert_path, &config.key_path)?;
        let mut tls = TlsSettings::new(identity);
        if let Some(ca_path) = &config.ca_cert_path {
            tls = tls.with_ca_bundle(ca_path)?;
        }

        Self::new(&config.zms_url, tls)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/domain/{name}`, with `name` encoded as a single path segment.
    pub fn domain_url(&self, name: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidServiceUrlError {
                url: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push("domain")
            .push(name);
        Ok(url)
    }
}

#[async_trait]
impl DomainMetadataSource for ZmsClient {
    async fn get_domain(&self, name: &str) -> Result<DomainMetadata> {
        let url = self.domain_url(name)?;

        tracing::debug!("Making ZMS request to: {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("ZMS response status: {}", status);
        let body = response.text().await?;

        if status == StatusCode::NOT_FOUND {
            return Err(LookupError::DomainNotFound {
                domain: name.to_string(),
            });
        }

        if !status.is_success() {
            return Err(LookupError::ServiceError {
                status: status.as_u16(),
                message: service_error_message(status, &body),
            });
        }

        let domain: DomainMetadata = serde_json::from_str(&body)?;
        Ok(domain)
    }
}

fn service_error_message(status: StatusCode, body: &str) -> String {
    let decoded = serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty());

    if let Some(message) = decoded {
        return message;
    }

    let raw = body.trim();
    if raw.is_empty() {
        status.canonical_reason().unwrap_or("unknown error").to_string()
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(base: &str) -> ZmsClient {
        ZmsClient {
            base_url: Url::parse(base).unwrap(),
            client: Client::new(),
        }
    }

    #[test]
    fn test_domain_url() {
        let client = client_for("https://zms.example.com:4443/zms/v1");
        assert_eq!(
            client.domain_url("sports").unwrap().as_str(),
            "https://zms.example.com:4443/zms/v1/domain/sports"
        );

        let trailing = client_for("https://zms.example.com:4443/zms/v1/");
        assert_eq!(
            trailing.domain_url("finance").unwrap().as_str(),
            "https://zms.example.com:4443/zms/v1/domain/finance"
        );
    }

    #[test]
    fn test_domain_url_encodes_segment() {
        let client = client_for("https://zms.example.com/zms/v1");
        assert_eq!(
            client.domain_url("a/b c").unwrap().as_str(),
            "https://zms.example.com/zms/v1/domain/a%2Fb%20c"
        );
        assert_eq!(
            client.domain_url("").unwrap().as_str(),
            "https://zms.example.com/zms/v1/domain/"
        );
    }

    #[test]
    fn test_service_error_message() {
        let body = r#"{"code":403,"message":"ZMS is not authorized"}"#;
        assert_eq!(
            service_error_message(StatusCode::FORBIDDEN, body),
            "ZMS is not authorized"
        );
        assert_eq!(
            service_error_message(StatusCode::BAD_GATEWAY, "  upstream down \n"),
            "upstream down"
        );
        assert_eq!(
            service_error_message(StatusCode::INTERNAL_SERVER_ERROR, ""),
            "Internal Server Error"
        );
    }
}
