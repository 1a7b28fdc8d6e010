//! Client-certificate TLS setup for the ZMS transport.
//!
//! Certificates and keys are read from PEM files. The key may be PKCS#1
//! (`RSA PRIVATE KEY`), PKCS#8 (`PRIVATE KEY`) or SEC1 (`EC PRIVATE KEY`).
//!
//! The renegotiation policy picks the TLS backend: rustls refuses every
//! renegotiation, while the OpenSSL client behind `native-tls` accepts a
//! server-requested secure renegotiation.

use crate::utils::error::{LookupError, Result};
use openssl::pkey::PKey;
use openssl::x509::X509;
use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::{ClientConfig, RootCertStore};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// How often the server may ask to renegotiate an established session.
///
/// `OnceAsClient` exists for ZMS front ends that request the client
/// certificate through a renegotiation after the first handshake. It is a
/// legacy compatibility setting, not a hardening one; drop it once the
/// service no longer needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Renegotiation {
    Never,
    #[default]
    OnceAsClient,
}

impl Renegotiation {
    pub fn max_renegotiations(self) -> u32 {
        match self {
            Renegotiation::Never => 0,
            Renegotiation::OnceAsClient => 1,
        }
    }
}

/// The single certificate/key pair presented to the server.
#[derive(Debug)]
pub struct ClientIdentity {
    cert_chain: Vec<CertificateDer<'static>>,
    key: PrivateKeyDer<'static>,
}

impl ClientIdentity {
    pub fn from_pem_files(cert_path: &Path, key_path: &Path) -> Result<Self> {
        let cert_chain = load_certs(cert_path)?;
        let key = load_private_key(key_path)?;
        Ok(Self { cert_chain, key })
    }

    pub fn cert_chain(&self) -> &[CertificateDer<'static>] {
        &self.cert_chain
    }

    /// Re-encodes the pair as a PEM chain plus a PKCS#8 PEM key, failing when
    /// the key does not belong to the leaf certificate.
    fn to_pkcs8_pem(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let pkey = PKey::private_key_from_der(self.key.secret_der())
            .map_err(|e| invalid_identity(format!("unreadable private key: {}", e)))?;

        let mut chain_pem = Vec::new();
        for (index, der) in self.cert_chain.iter().enumerate() {
            let cert = X509::from_der(der)
                .map_err(|e| invalid_identity(format!("unreadable certificate: {}", e)))?;

            if index == 0 {
                let public_key = cert
                    .public_key()
                    .map_err(|e| invalid_identity(format!("unreadable public key: {}", e)))?;
                if !public_key.public_eq(&pkey) {
                    return Err(invalid_identity(
                        "certificate and private key do not match".to_string(),
                    ));
                }
            }

            let pem = cert
                .to_pem()
                .map_err(|e| invalid_identity(format!("certificate encoding failed: {}", e)))?;
            chain_pem.extend_from_slice(&pem);
        }

        let key_pem = pkey
            .private_key_to_pem_pkcs8()
            .map_err(|e| invalid_identity(format!("private key encoding failed: {}", e)))?;

        Ok((chain_pem, key_pem))
    }
}

fn invalid_identity(reason: String) -> LookupError {
    LookupError::InvalidCredentialError {
        path: "client identity".to_string(),
        reason,
    }
}

/// A ready-to-use TLS backend for the HTTP client.
pub enum TlsTransport {
    Rustls(ClientConfig),
    Native(native_tls::TlsConnector),
}

impl TlsTransport {
    pub fn backend(&self) -> &'static str {
        match self {
            TlsTransport::Rustls(_) => "rustls",
            TlsTransport::Native(_) => "native-tls",
        }
    }
}

#[derive(Debug)]
pub struct TlsSettings {
    pub identity: ClientIdentity,
    pub extra_roots: Vec<CertificateDer<'static>>,
    pub renegotiation: Renegotiation,
}

impl TlsSettings {
    pub fn new(identity: ClientIdentity) -> Self {
        Self {
            identity,
            extra_roots: Vec::new(),
            renegotiation: Renegotiation::default(),
        }
    }

    pub fn with_ca_bundle(mut self, path: &Path) -> Result<Self> {
        self.extra_roots.extend(load_certs(path)?);
        Ok(self)
    }

    pub fn with_renegotiation(mut self, renegotiation: Renegotiation) -> Self {
        self.renegotiation = renegotiation;
        self
    }

    /// Picks the backend that can honor the renegotiation policy.
    pub fn build_transport(self) -> Result<TlsTransport> {
        let renegotiation = self.renegotiation;
        let transport = match renegotiation {
            Renegotiation::Never => TlsTransport::Rustls(self.build_client_config()?),
            Renegotiation::OnceAsClient => TlsTransport::Native(self.build_native_connector()?),
        };

        debug!(
            renegotiation = ?renegotiation,
            max_renegotiations = renegotiation.max_renegotiations(),
            backend = transport.backend(),
            "TLS transport built"
        );

        Ok(transport)
    }

    /// rustls client configuration presenting exactly one identity. rustls
    /// answers a server `HelloRequest` with a `no_renegotiation` alert.
    pub fn build_client_config(self) -> Result<ClientConfig> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());

        let mut roots = RootCertStore {
            roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
        };
        for cert in self.extra_roots {
            roots.add(cert)?;
        }

        let config = ClientConfig::builder_with_provider(provider)
            .with_safe_default_protocol_versions()?
            .with_root_certificates(roots)
            .with_client_auth_cert(self.identity.cert_chain, self.identity.key)?;

        Ok(config)
    }

    /// OpenSSL-backed connector presenting exactly one identity. Server
    /// trust comes from the system store plus any extra roots. OpenSSL lets
    /// the server drive a secure renegotiation, which is what the
    /// certificate-request-after-handshake flow needs.
    pub fn build_native_connector(self) -> Result<native_tls::TlsConnector> {
        let (chain_pem, key_pem) = self.identity.to_pkcs8_pem()?;
        let identity = native_tls::Identity::from_pkcs8(&chain_pem, &key_pem)?;

        let mut builder = native_tls::TlsConnector::builder();
        builder.identity(identity);
        for cert in &self.extra_roots {
            builder.add_root_certificate(native_tls::Certificate::from_der(cert)?);
        }

        Ok(builder.build()?)
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| LookupError::CredentialIoError {
        path: path.display().to_string(),
        source,
    })
}

/// Loads every certificate block from a PEM file.
pub fn load_certs(path: &Path) -> Result<Vec<CertificateDer<'static>>> {
    let pem_data = read_file(path)?;
    let certs = rustls_pemfile::certs(&mut pem_data.as_slice())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| LookupError::InvalidCredentialError {
            path: path.display().to_string(),
            reason: format!("failed to parse certificates: {}", e),
        })?;

    if certs.is_empty() {
        return Err(LookupError::InvalidCredentialError {
            path: path.display().to_string(),
            reason: "no certificates found".to_string(),
        });
    }

    Ok(certs)
}

/// Loads the first private key from a PEM file.
pub fn load_private_key(path: &Path) -> Result<PrivateKeyDer<'static>> {
    let pem_data = read_file(path)?;
    rustls_pemfile::private_key(&mut pem_data.as_slice())
        .map_err(|e| LookupError::InvalidCredentialError {
            path: path.display().to_string(),
            reason: format!("failed to parse private key: {}", e),
        })?
        .ok_or_else(|| LookupError::InvalidCredentialError {
            path: path.display().to_string(),
            reason: "no private key found".to_string(),
        })
}
