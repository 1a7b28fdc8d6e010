pub mod cli;

use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_required_flag, Validate};
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "zms-bscv-lookup")]
#[command(version)]
#[command(about = "Print the business service of an Athenz domain as `<domain>,<businessService>`")]
pub struct CliConfig {
    #[arg(short = 'd', long = "domain", allow_hyphen_values = true, help = "domain names")]
    pub domain: Option<String>,

    #[arg(short = 'k', long = "key", allow_hyphen_values = true, help = "service private key path")]
    pub key_path: Option<String>,

    #[arg(short = 'c', long = "cert", allow_hyphen_values = true, help = "service x.509 certificate path")]
    pub cert_path: Option<String>,

    #[arg(long = "zms", allow_hyphen_values = true, help = "zms url")]
    pub zms_url: Option<String>,

    #[arg(long = "ca-cert", allow_hyphen_values = true, help = "additional CA bundle (PEM) used to verify the zms server")]
    pub ca_cert_path: Option<String>,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Parses a raw argument list, accepting Go-style single-dash long flags.
    pub fn try_parse_go_style<I, T>(args: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(cli::normalize_go_style_args(args))
    }

    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_required_flag("-zms", self.zms_url.as_deref().unwrap_or_default())?;
        validate_required_flag("-d", self.domain.as_deref().unwrap_or_default())?;
        validate_required_flag("-k", self.key_path.as_deref().unwrap_or_default())?;
        validate_required_flag("-c", self.cert_path.as_deref().unwrap_or_default())?;
        Ok(())
    }
}

/// Validated invocation parameters. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub domain: String,
    pub key_path: PathBuf,
    pub cert_path: PathBuf,
    pub zms_url: String,
    pub ca_cert_path: Option<PathBuf>,
}

impl TryFrom<CliConfig> for LookupConfig {
    type Error = LookupError;

    fn try_from(cli: CliConfig) -> Result<Self> {
        cli.validate()?;

        Ok(Self {
            domain: cli.domain.unwrap_or_default(),
            key_path: PathBuf::from(cli.key_path.unwrap_or_default()),
            cert_path: PathBuf::from(cli.cert_path.unwrap_or_default()),
            zms_url: cli.zms_url.unwrap_or_default(),
            ca_cert_path: cli
                .ca_cert_path
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }
}
