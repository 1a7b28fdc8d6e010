use serde::{Deserialize, Serialize};
use std::fmt;

/// ZMS domain record. Only `name` is required; attributes this tool does not
/// know about are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ypm_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl DomainMetadata {
    pub fn business_service(&self) -> &str {
        self.business_service.as_deref().unwrap_or_default()
    }
}

/// Error body ZMS sends along with non-success statuses.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// One output line: `<topLevelDomain>,<businessService>`, written unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub top_level_domain: String,
    pub business_service: String,
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.top_level_domain, self.business_service)
    }
}
