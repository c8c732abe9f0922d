use std::collections::BTreeMap;

use super::domain::{InteractionDomain, InteractionRecord};

/// Output of the grouping phase. Every input record lands in exactly one
/// place: a recognized domain's group, or the unclassified quarantine.
#[derive(Debug, Default)]
pub struct DomainGroups {
    pub groups: BTreeMap<InteractionDomain, Vec<InteractionRecord>>,
    pub unclassified: Vec<InteractionRecord>,
}

impl DomainGroups {
    pub fn classified_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.unclassified.is_empty()
    }
}

/// Partition interactions by domain, keeping every record (no dedup, no
/// sampling). Producers are expected to write valid tags, but a tag outside
/// the five domains must never corrupt another domain's group, so anything
/// unrecognized is quarantined rather than dropped or misfiled.
pub fn group_by_domain(records: Vec<InteractionRecord>) -> DomainGroups {
    let mut partitioned = DomainGroups::default();

    for record in records {
        match InteractionDomain::from_tag(&record.domain_tag) {
            Some(domain) => partitioned.groups.entry(domain).or_default().push(record),
            None => partitioned.unclassified.push(record),
        }
    }

    partitioned
}
