// Adapters layer: concrete implementations for external systems (TLS credentials, ZMS over HTTP).

pub mod tls;
pub mod zms;
