use std::sync::Arc;

use reqwest::Method;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{PdnsError, Result};
use crate::powerdns::change::{Action, build_patch};
use crate::powerdns::flatten::{combine, flatten};
use crate::powerdns::transport::{HttpTransport, RawResponse, Transport};
use crate::powerdns::types::*;

const GET_ZONE: &str = "get_zone";
const PATCH_RRSETS: &str = "patch_rrsets";

/// Client bound to a single zone. Cheap to clone; no state changes after construction.
#[derive(Clone)]
pub struct PowerDnsClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl PowerDnsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new().map_err(|source| PdnsError::Transport {
            operation: "build_client",
            source,
        })?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn request(
        &self,
        operation: &'static str,
        method: Method,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse> {
        let url = self.config.zone_url();
        debug!(%method, %url, operation, "sending PowerDNS request");

        let res = self
            .transport
            .request(method, url, self.config.api_key(), body)
            .await
            .map_err(|source| PdnsError::Transport { operation, source })?;

        if let Ok(err) = serde_json::from_slice::<ApiErrorBody>(&res.body) {
            warn!(operation, status = res.status, error = %err.error, "PowerDNS returned an error");
            return Err(PdnsError::Api {
                operation,
                message: err.error,
            });
        }
        if !res.is_success() {
            warn!(operation, status = res.status, "PowerDNS returned a non-success status");
            return Err(PdnsError::Api {
                operation,
                message: format!("unexpected status {}", res.status),
            });
        }
        Ok(res)
    }

    /// Fetch the configured zone, rrsets included.
    pub async fn get_zone(&self) -> Result<Zone> {
        let res = self.request(GET_ZONE, Method::GET, None).await?;
        serde_json::from_slice(&res.body).map_err(|source| PdnsError::Decode {
            operation: GET_ZONE,
            source,
        })
    }

    /// Every content value of the zone as its own record.
    pub async fn get_records(&self) -> Result<Vec<Record>> {
        let zone = self.get_zone().await?;
        Ok(flatten(&zone))
    }

    /// Zone contents grouped by (name, type).
    pub async fn get_combined_records(&self) -> Result<Vec<CombinedRecord>> {
        let records = self.get_records().await?;
        Ok(combine(&records))
    }

    pub async fn change_record(
        &self,
        name: &str,
        rrtype: &str,
        ttl: u32,
        contents: &[String],
        action: Action,
    ) -> Result<()> {
        let patch = build_patch(name, rrtype, ttl, contents, action);
        let body = serde_json::to_vec(&patch).map_err(|source| PdnsError::Encode {
            operation: PATCH_RRSETS,
            source,
        })?;

        debug!(%action, name, rrtype, ttl, count = contents.len(), "patching rrset");
        self.request(PATCH_RRSETS, Method::PATCH, Some(body)).await?;
        Ok(())
    }

    /// Replace the contents of (name, type) with `contents`.
    pub async fn add_record(
        &self,
        name: &str,
        rrtype: &str,
        ttl: u32,
        contents: &[String],
    ) -> Result<()> {
        self.change_record(name, rrtype, ttl, contents, Action::Upsert)
            .await
    }

    /// Remove (name, type) from the zone.
    pub async fn delete_record(
        &self,
        name: &str,
        rrtype: &str,
        ttl: u32,
        contents: &[String],
    ) -> Result<()> {
        self.change_record(name, rrtype, ttl, contents, Action::Delete)
            .await
    }
}
