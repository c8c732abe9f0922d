use super::aggregate::{group_by_domain, DomainGroups};
use super::domain::{
    ClaritySnapshot, DomainClarity, InteractionDomain, InteractionRecord, Resolution, Sentiment,
};

/// Policy: an empty system reports maximum clarity. With zero interactions
/// there is no observed friction, and admin dashboards should not open on a
/// red panel before the first student has asked a question.
pub const DEFAULT_OVERALL_CLARITY: u8 = 100;

const SENTIMENT_WEIGHT: u64 = 3;
const RESOLUTION_WEIGHT: u64 = 2;
const RECORD_WEIGHT: u64 = SENTIMENT_WEIGHT + RESOLUTION_WEIGHT;

fn sentiment_points(sentiment: Option<Sentiment>) -> u64 {
    match sentiment {
        Some(Sentiment::Positive) => 100,
        Some(Sentiment::Neutral) | None => 70,
        Some(Sentiment::Negative) => 20,
    }
}

fn resolution_points(resolution: Option<Resolution>) -> u64 {
    match resolution {
        Some(Resolution::Resolved) => 100,
        Some(Resolution::InProgress) | None => 60,
        Some(Resolution::Escalated) => 10,
    }
}

fn record_points(record: &InteractionRecord) -> u64 {
    SENTIMENT_WEIGHT * sentiment_points(record.sentiment)
        + RESOLUTION_WEIGHT * resolution_points(record.resolution)
}

/// Round `numerator / denominator` half-up. Exact integer arithmetic keeps
/// the result identical for every permutation of the same input set.
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// Score one domain's grouped interactions. A missing optional signal is
/// scored at its neutral value rather than excluding the record, so the
/// count always reflects the full group. Empty groups produce no result.
pub fn score_group(domain: InteractionDomain, records: &[InteractionRecord]) -> Option<DomainClarity> {
    if records.is_empty() {
        return None;
    }

    let total: u64 = records.iter().map(record_points).sum();
    let denominator = RECORD_WEIGHT * records.len() as u64;
    let score = div_round_half_up(total, denominator) as u8;

    Some(DomainClarity {
        domain,
        score,
        interaction_count: records.len(),
    })
}

/// Reduce grouped interactions to the campus-wide snapshot. The overall
/// figure is the unweighted mean of the emitted domain scores: a domain with
/// two interactions counts exactly as much as one with five hundred.
pub fn score_groups(grouped: &DomainGroups) -> ClaritySnapshot {
    let per_domain: Vec<DomainClarity> = grouped
        .groups
        .iter()
        .filter_map(|(domain, records)| score_group(*domain, records))
        .collect();

    let overall = if per_domain.is_empty() {
        DEFAULT_OVERALL_CLARITY
    } else {
        let sum: u64 = per_domain.iter().map(|entry| entry.score as u64).sum();
        div_round_half_up(sum, per_domain.len() as u64) as u8
    };

    ClaritySnapshot { overall, per_domain }
}

/// Convenience over the full dataset: group, then reduce. Unclassified tags
/// are quarantined by the grouping phase and contribute to nothing here.
pub fn score_all(records: Vec<InteractionRecord>) -> ClaritySnapshot {
    score_groups(&group_by_domain(records))
}
