//! Encoding of caller record changes into PowerDNS rrset patches.
use std::{fmt, str::FromStr};

use crate::powerdns::types::{ChangeType, RrEntry, RrSet, RrSetPatch};

/// What a change request does to a (name, type) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Make the given contents the complete set for the pair.
    Upsert,
    /// Remove the pair entirely.
    Delete,
}

impl Action {
    pub fn changetype(self) -> ChangeType {
        match self {
            Action::Upsert => ChangeType::Replace,
            Action::Delete => ChangeType::Delete,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Upsert => f.write_str("UPSERT"),
            Action::Delete => f.write_str("DELETE"),
        }
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UPSERT" => Ok(Action::Upsert),
            "DELETE" => Ok(Action::Delete),
            other => Err(format!("unknown action '{other}' (expected UPSERT or DELETE)")),
        }
    }
}

/// Append the root dot unless `name` is empty or already absolute.
pub fn qualify(name: &str) -> String {
    if name.is_empty() || name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Build the single-rrset patch for one change.
///
/// Contents are attached for `Delete` too; the server ignores them.
pub fn build_patch(
    name: &str,
    rrtype: &str,
    ttl: u32,
    contents: &[String],
    action: Action,
) -> RrSetPatch {
    let name = qualify(name);
    let records = contents
        .iter()
        .map(|content| RrEntry {
            name: name.clone(),
            rrtype: rrtype.to_string(),
            ttl,
            content: content.clone(),
            ..RrEntry::default()
        })
        .collect();

    RrSetPatch {
        rrsets: vec![RrSet {
            name,
            rrtype: rrtype.to_string(),
            ttl,
            changetype: Some(action.changetype()),
            records,
        }],
    }
}
