#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pdns_zone::powerdns::transport::{RawResponse, Transport};
use pdns_zone::{ClientConfig, PowerDnsClient, TransportError};
use reqwest::Method;

#[derive(Debug, Clone)]
pub struct SentRequest {
    pub method: Method,
    pub url: String,
    pub api_key: String,
    pub body: Option<Vec<u8>>,
}

impl SentRequest {
    pub fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().expect("request had no body"))
            .expect("request body is not JSON")
    }
}

/// Replays scripted responses and records what was sent.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Other(message.into())));
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(
        &self,
        method: Method,
        url: &str,
        api_key: &str,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, TransportError> {
        self.sent.lock().unwrap().push(SentRequest {
            method,
            url: url.to_string(),
            api_key: api_key.to_string(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no scripted response".into())))
    }
}

pub fn make_config() -> ClientConfig {
    ClientConfig::new("http://127.0.0.1:8081/api/v1", "", "example.com", "secret").unwrap()
}

pub fn make_client(transport: MockTransport) -> (PowerDnsClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = PowerDnsClient::with_transport(make_config(), transport.clone());
    (client, transport)
}

pub const ZONE_URL: &str = "http://127.0.0.1:8081/api/v1/servers/localhost/zones/example.com.";

pub const ZONE_JSON: &str = r#"{
    "account": "",
    "dnssec": false,
    "id": "example.com.",
    "kind": "Native",
    "last_check": 0,
    "masters": [],
    "name": "example.com.",
    "notified_serial": 0,
    "serial": 2024010101,
    "soa_edit": "",
    "soa_edit_api": "DEFAULT",
    "url": "/api/v1/servers/localhost/zones/example.com.",
    "rrsets": [
        {
            "name": "www.example.com.",
            "type": "A",
            "ttl": 300,
            "records": [
                {"content": "192.0.2.1", "disabled": false},
                {"content": "192.0.2.2", "disabled": true}
            ],
            "comments": []
        },
        {
            "name": "example.com.",
            "type": "MX",
            "ttl": 3600,
            "records": [
                {"name": "example.com.", "type": "MX", "ttl": 3600, "priority": 10,
                 "disabled": false, "content": "10 mail.example.com."}
            ]
        },
        {
            "name": "www.example.com.",
            "type": "AAAA",
            "ttl": 300,
            "records": [{"content": "2001:db8::1", "disabled": false}]
        }
    ]
}"#;
