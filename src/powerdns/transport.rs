use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, header};

use crate::error::TransportError;

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const JSON: &str = "application/json; charset=utf-8";
const USER_AGENT: &str = concat!("pdns-zone/", env!("CARGO_PKG_VERSION"));

/// Status and raw body of one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single request/response exchange with the PowerDNS API.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport with a fixed timeout.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::Send)?;
        Ok(Self { http })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, TransportError> {
        let mut req = self
            .http
            .request(method, url)
            .header("X-API-Key", api_key)
            .header(header::CONTENT_TYPE, JSON)
            .header(header::ACCEPT, JSON);
        if let Some(body) = body {
            req = req.body(body);
        }

        let res = req.send().await.map_err(TransportError::Send)?;
        let status = res.status().as_u16();
        let body = res.bytes().await.map_err(TransportError::ReadBody)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
