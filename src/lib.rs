//! Client for the PowerDNS Authoritative HTTP API scoped to a single zone.
//!
//! Reads flatten the server's rrsets into per-content [`Record`]s (and regroup
//! them into [`CombinedRecord`]s); writes encode a change as a single-rrset
//! `PATCH` with `REPLACE` or `DELETE` semantics.

pub mod config;
pub mod error;
pub mod powerdns;

pub use config::ClientConfig;
pub use error::{PdnsError, Result, TransportError};
pub use powerdns::change::{Action, qualify};
pub use powerdns::client::PowerDnsClient;
pub use powerdns::types::{CombinedRecord, Record, Zone};
