use std::collections::HashMap;

use crate::powerdns::types::{CombinedRecord, Record, Zone};

/// One [`Record`] per content value, in rrset then entry order.
///
/// Rrsets without entries contribute nothing.
pub fn flatten(zone: &Zone) -> Vec<Record> {
    zone.rrsets
        .iter()
        .flat_map(|set| {
            set.records.iter().map(move |entry| Record {
                name: set.name.clone(),
                rrtype: set.rrtype.clone(),
                ttl: set.ttl,
                priority: entry.priority,
                disabled: entry.disabled,
                content: entry.content.clone(),
            })
        })
        .collect()
}

/// Group flat records by (name, type), keeping first-seen key order.
///
/// ttl, priority and disabled of each group come from its first member.
pub fn combine(records: &[Record]) -> Vec<CombinedRecord> {
    let mut index: HashMap<(&str, &str), usize> = HashMap::new();
    let mut combined: Vec<CombinedRecord> = Vec::new();

    for rec in records {
        let key = (rec.name.as_str(), rec.rrtype.as_str());
        let slot = *index.entry(key).or_insert_with(|| {
            combined.push(CombinedRecord {
                name: rec.name.clone(),
                rrtype: rec.rrtype.clone(),
                ttl: rec.ttl,
                priority: rec.priority,
                disabled: rec.disabled,
                records: Vec::new(),
            });
            combined.len() - 1
        });
        combined[slot].records.push(rec.content.clone());
    }

    combined
}
