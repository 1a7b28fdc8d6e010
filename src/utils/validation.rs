use crate::utils::error::{LookupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Only emptiness is checked; content is left to the components that use it.
pub fn validate_required_flag(flag: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(LookupError::MissingArgument {
            flag: flag.to_string(),
        });
    }
    Ok(())
}

pub fn validate_service_url(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str).map_err(|e| LookupError::InvalidServiceUrlError {
        url: url_str.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(LookupError::InvalidServiceUrlError {
            url: url_str.to_string(),
            reason: format!("Unsupported URL scheme: {}", scheme),
        }),
    }
}
