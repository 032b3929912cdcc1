use serde::{Deserialize, Serialize};

/// Full zone resource as returned by `GET /servers/{vhost}/zones/{zone}`.
///
/// Only `rrsets` is interpreted; everything else is passed through as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Zone {
    #[serde(default)]
    pub id: String, // "example.com."
    #[serde(default)]
    pub name: String, // "example.com."
    #[serde(rename = "type", default)]
    pub zone_type: Option<String>, // "Zone"
    #[serde(default)]
    pub kind: String, // "Native", "Master", ...
    #[serde(default)]
    pub account: String,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub serial: i64,
    #[serde(default)]
    pub notified_serial: i64,
    #[serde(default)]
    pub last_check: i64,
    #[serde(default)]
    pub soa_edit: String,
    #[serde(default)]
    pub soa_edit_api: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub masters: Vec<String>,
    #[serde(default)]
    pub rrsets: Vec<RrSet>,
}

/// One (name, type) group on the server. `changetype` is only set when patching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrSet {
    pub name: String, // "www.example.com."
    #[serde(rename = "type")]
    pub rrtype: String, // "A", "MX", ...
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changetype: Option<ChangeType>,
    #[serde(default)]
    pub records: Vec<RrEntry>,
}

/// A single content value inside an [`RrSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrEntry {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub rrtype: String,
    #[serde(default)]
    pub ttl: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    pub content: String, // "192.0.2.1" or "10 mail.example.com."
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

/// Body of a `PATCH` against the zone resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RrSetPatch {
    pub rrsets: Vec<RrSet>,
}

/// Flat record: one content value with the metadata of its set and entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    pub ttl: u32,
    pub priority: i32,
    pub disabled: bool,
    pub content: String,
}

/// All contents sharing a (name, type) key.
///
/// `priority` and `disabled` come from the first member only; later members
/// may differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub rrtype: String,
    pub ttl: u32,
    pub priority: i32,
    pub disabled: bool,
    pub records: Vec<String>,
}

/// Error payload PowerDNS sends with non-success responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

fn is_zero(v: &i32) -> bool {
    *v == 0
}

fn is_false(v: &bool) -> bool {
    !*v
}
