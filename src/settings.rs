//! Application configuration structures
//!
//! This module contains the typed configuration structures and their
//! per-field defaults, applied when the configuration document omits a field.

use serde::{Deserialize, Serialize};

fn default_http_port() -> u16 {
    3000
}

fn default_tls_port() -> u16 {
    3443
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Enable debug behavior
    #[serde(default)]
    pub debug: bool,

    /// HTTP listener configuration
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Hostname to listen on (empty means all interfaces)
    #[serde(default)]
    pub hostname: String,

    /// Listener port
    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Serve over TLS
    #[serde(default)]
    pub is_secure: bool,

    /// TLS listener configuration
    #[serde(default)]
    pub secure_http: Option<TlsConfig>,
}

/// TLS listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Path to the PEM-encoded private key
    #[serde(default)]
    pub key_file_path: String,

    /// Path to the PEM-encoded certificate
    #[serde(default)]
    pub cert_file_path: String,

    /// Listener port when serving over TLS
    #[serde(default = "default_tls_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            port: default_http_port(),
            is_secure: false,
            secure_http: None,
        }
    }
}

impl Default for TlsConfig {
    fn default() -> Self {
        Self {
            key_file_path: String::new(),
            cert_file_path: String::new(),
            port: default_tls_port(),
        }
    }
}

impl HttpConfig {
    /// Effective listener port
    ///
    /// The TLS port applies only when `is_secure` is set and a TLS block is
    /// present; a secure listener without a TLS block falls back to the base
    /// port.
    pub fn effective_port(&self) -> u16 {
        match &self.secure_http {
            Some(tls) if self.is_secure => tls.port,
            _ => self.port,
        }
    }

    /// Effective listen address as `<scheme><hostname>:<port>`
    ///
    /// The scheme prefix (`http://` or `https://`) is included only when
    /// `with_scheme` is set. An empty hostname yields addresses like `":3000"`.
    pub fn address(&self, with_scheme: bool) -> String {
        let scheme = if with_scheme {
            if self.is_secure {
                "https://"
            } else {
                "http://"
            }
        } else {
            ""
        };
        format!("{}{}:{}", scheme, self.hostname, self.effective_port())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insecure_address_with_scheme() {
        let http = HttpConfig {
            hostname: "example.com".to_string(),
            ..HttpConfig::default()
        };
        assert_eq!(http.address(true), "http://example.com:3000");
    }

    #[test]
    fn test_secure_address_uses_tls_port() {
        let http = HttpConfig {
            hostname: "example.com".to_string(),
            is_secure: true,
            secure_http: Some(TlsConfig::default()),
            ..HttpConfig::default()
        };
        assert_eq!(http.address(true), "https://example.com:3443");
        assert_eq!(http.address(false), "example.com:3443");
    }

    #[test]
    fn test_secure_without_tls_block_falls_back_to_base_port() {
        let http = HttpConfig {
            hostname: "example.com".to_string(),
            is_secure: true,
            ..HttpConfig::default()
        };
        assert_eq!(http.address(true), "https://example.com:3000");
    }

    #[test]
    fn test_tls_port_ignored_when_not_secure() {
        let http = HttpConfig {
            hostname: "example.com".to_string(),
            secure_http: Some(TlsConfig::default()),
            ..HttpConfig::default()
        };
        assert_eq!(http.effective_port(), 3000);
        assert_eq!(http.address(true), "http://example.com:3000");
    }

    #[test]
    fn test_empty_hostname_address() {
        let http = HttpConfig::default();
        assert_eq!(http.address(false), ":3000");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.debug);
        assert!(config.http.is_none());

        let http = HttpConfig::default();
        assert_eq!(http.hostname, "");
        assert_eq!(http.port, 3000);
        assert!(!http.is_secure);
        assert!(http.secure_http.is_none());

        let tls = TlsConfig::default();
        assert_eq!(tls.key_file_path, "");
        assert_eq!(tls.cert_file_path, "");
        assert_eq!(tls.port, 3443);
    }
}
