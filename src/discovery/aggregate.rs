//! Merge records from every source into one ordered collection.
use std::collections::HashSet;

use crate::config::DiscoveryRecord;

/// Drop records whose `(directory, format)` was already seen, keeping the
/// first, then order the survivors by ascending directory path length.
///
/// The sort is stable: records of equal length keep their encounter order.
pub fn aggregate(records: impl IntoIterator<Item = DiscoveryRecord>) -> Vec<DiscoveryRecord> {
    let mut seen = HashSet::new();
    let mut kept: Vec<DiscoveryRecord> = records
        .into_iter()
        .filter(|r| seen.insert(r.source.key()))
        .collect();
    kept.sort_by_key(|r| r.source.path_len());
    kept
}
