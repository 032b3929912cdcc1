use reqwest::Url;

use crate::error::{PdnsError, Result};
use crate::powerdns::change::qualify;

pub const DEFAULT_VHOST: &str = "localhost";

/// Connection parameters for one zone on one PowerDNS server.
///
/// Built once and never mutated; share it by reference or clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    scheme: String,
    hostname: String,
    port: u16,
    base_path: String,
    vhost: String,
    zone: String,
    api_key: String,
    zone_url: String,
}

impl ClientConfig {
    /// Parse `base_url` (e.g. "http://127.0.0.1:8081/api/v1") and capture the rest.
    ///
    /// An empty `vhost` falls back to [`DEFAULT_VHOST`].
    pub fn new(
        base_url: &str,
        vhost: impl Into<String>,
        zone: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let url = Url::parse(base_url).map_err(|err| PdnsError::config(base_url, err))?;
        let hostname = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| PdnsError::config(base_url, "missing host"))?
            .to_string();

        let port = url
            .port()
            .unwrap_or(if url.scheme() == "https" { 443 } else { 80 });

        let base_path = match url.path() {
            "" => "/".to_string(),
            p => p.to_string(),
        };

        let mut vhost = vhost.into();
        if vhost.is_empty() {
            vhost = DEFAULT_VHOST.to_string();
        }

        let zone = zone.into();
        let zone_url = zone_url(url.scheme(), &hostname, port, &base_path, &vhost, &zone)?;

        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname,
            port,
            base_path,
            vhost,
            zone,
            api_key: api_key.into(),
            zone_url,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn vhost(&self) -> &str {
        &self.vhost
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Canonical URL of the configured zone resource.
    pub fn zone_url(&self) -> &str {
        &self.zone_url
    }
}

/// `<scheme>://<host>:<port><base_path>/servers/<vhost>/zones/<zone.>`
///
/// `base_path` is taken as already encoded; `vhost` and `zone` are
/// percent-encoded as single path segments. The port is left out when it is
/// the scheme's default.
pub fn zone_url(
    scheme: &str,
    host: &str,
    port: u16,
    base_path: &str,
    vhost: &str,
    zone: &str,
) -> Result<String> {
    let origin = format!("{}://{}:{}/", scheme, host, port);
    let mut url = Url::parse(&origin).map_err(|err| PdnsError::config(&origin, err))?;
    url.set_path(base_path);
    let zone = qualify(zone);
    url.path_segments_mut()
        .map_err(|_| PdnsError::config(&origin, "url cannot carry a path"))?
        .pop_if_empty()
        .extend(["servers", vhost, "zones", zone.as_str()]);
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_port_by_scheme() {
        let http = ClientConfig::new("http://pdns.example.net", "", "example.com", "k").unwrap();
        assert_eq!(http.port(), 80);
        assert_eq!(http.base_path(), "/");
        assert_eq!(http.vhost(), DEFAULT_VHOST);

        let https = ClientConfig::new("https://pdns.example.net/api/v1", "", "example.com", "k")
            .unwrap();
        assert_eq!(https.port(), 443);
        assert_eq!(https.base_path(), "/api/v1");
    }

    #[test]
    fn keeps_explicit_port_and_vhost() {
        let cfg =
            ClientConfig::new("http://127.0.0.1:8081/api/v1/", "ns1", "example.com.", "k").unwrap();
        assert_eq!(cfg.hostname(), "127.0.0.1");
        assert_eq!(cfg.port(), 8081);
        assert_eq!(cfg.vhost(), "ns1");
    }

    #[test]
    fn rejects_unparseable_url() {
        let err = ClientConfig::new("not a url", "", "example.com", "k").unwrap_err();
        assert!(matches!(err, PdnsError::Config { .. }));
        assert!(err.operation().is_none());
    }

    #[test]
    fn rejects_url_without_host() {
        let err = ClientConfig::new("mailto:hostmaster@example.com", "", "example.com", "k")
            .unwrap_err();
        match err {
            PdnsError::Config { url, reason } => {
                assert_eq!(url, "mailto:hostmaster@example.com");
                assert_eq!(reason, "missing host");
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn escapes_vhost_and_zone_segments() {
        let cfg =
            ClientConfig::new("http://127.0.0.1:8081/api/v1", "my server", "a/b.example", "k")
                .unwrap();
        assert_eq!(
            cfg.zone_url(),
            "http://127.0.0.1:8081/api/v1/servers/my%20server/zones/a%2Fb.example."
        );

        let encoded_base =
            ClientConfig::new("http://127.0.0.1:8081/pdns%20api/", "", "example.com", "k")
                .unwrap();
        assert_eq!(
            encoded_base.zone_url(),
            "http://127.0.0.1:8081/pdns%20api/servers/localhost/zones/example.com."
        );
    }

    #[test]
    fn builds_zone_url() {
        let cfg = ClientConfig::new("http://127.0.0.1:8081/api/v1/", "", "example.com", "k")
            .unwrap();
        assert_eq!(
            cfg.zone_url(),
            "http://127.0.0.1:8081/api/v1/servers/localhost/zones/example.com."
        );

        let root = ClientConfig::new("https://pdns.example.net", "", "example.com.", "k").unwrap();
        assert_eq!(
            root.zone_url(),
            "https://pdns.example.net/servers/localhost/zones/example.com."
        );

        let url = zone_url("http", "127.0.0.1", 8081, "/", "localhost", "example.com").unwrap();
        assert_eq!(url, "http://127.0.0.1:8081/servers/localhost/zones/example.com.");
    }
}
