use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Missing required flag: {flag}")]
    MissingArgument { flag: String },

    #[error("Invalid arguments: {message}")]
    UsageError { message: String },

    #[error("Unable to read {path}: {source}")]
    CredentialIoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid credential in {path}: {reason}")]
    InvalidCredentialError { path: String, reason: String },

    #[error("TLS configuration error: {0}")]
    TlsError(#[from] rustls::Error),

    #[error("TLS configuration error: {0}")]
    NativeTlsError(#[from] native_tls::Error),

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidServiceUrlError { url: String, reason: String },

    #[error("HTTP client construction failed: {message}")]
    ClientBuildError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Domain not found: '{domain}'")]
    DomainNotFound { domain: String },

    #[error("Service returned {status}: {message}")]
    ServiceError { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponseError(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    OutputError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Credential,
    Client,
    Remote,
    Output,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::MissingArgument { .. } | LookupError::UsageError { .. } => {
                ErrorCategory::Usage
            }
            LookupError::CredentialIoError { .. }
            | LookupError::InvalidCredentialError { .. }
            | LookupError::TlsError(_)
            | LookupError::NativeTlsError(_) => ErrorCategory::Credential,
            LookupError::InvalidServiceUrlError { .. } | LookupError::ClientBuildError { .. } => {
                ErrorCategory::Client
            }
            LookupError::ApiError(_)
            | LookupError::DomainNotFound { .. }
            | LookupError::ServiceError { .. }
            | LookupError::MalformedResponseError(_) => ErrorCategory::Remote,
            LookupError::OutputError(_) => ErrorCategory::Output,
        }
    }

    /// Every failure is terminal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Usage => self.to_string(),
            ErrorCategory::Credential | ErrorCategory::Client => {
                format!("unable to create zms client: {}", self)
            }
            ErrorCategory::Remote => format!("unable to get domain details: {}", self),
            ErrorCategory::Output => format!("unable to write result: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
