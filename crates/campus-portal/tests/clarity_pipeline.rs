use campus_portal::portal::{
    group_by_domain, parse_interactions, score_all, score_group, score_groups, InteractionDomain,
    InteractionRecord, Resolution, Sentiment, DEFAULT_OVERALL_CLARITY,
};
use chrono::{Duration, TimeZone, Utc};

fn record(
    domain_tag: &str,
    sentiment: Option<Sentiment>,
    resolution: Option<Resolution>,
) -> InteractionRecord {
    InteractionRecord {
        domain_tag: domain_tag.to_string(),
        department_id: "CSE".to_string(),
        sentiment,
        resolution,
        occurred_at: Utc.with_ymd_and_hms(2026, 2, 20, 10, 0, 0).unwrap(),
    }
}

#[test]
fn csv_export_flows_through_grouping_into_scores() {
    let export = "\
Domain,Department,Sentiment,Resolution,Occurred At
FEES,CSE,POSITIVE,RESOLVED,2026-02-10T08:45:00Z
FEES,ECE,POSITIVE,RESOLVED,2026-02-10T09:00:00Z
HOSTEL,CSE,NEGATIVE,ESCALATED,2026-02-11T10:00:00Z
LIBRARY,ME,NEUTRAL,RESOLVED,2026-02-12T10:00:00Z
";

    let records = parse_interactions(export.as_bytes()).expect("export parses");
    let grouped = group_by_domain(records);
    assert_eq!(grouped.unclassified.len(), 1);

    let snapshot = score_groups(&grouped);
    assert_eq!(snapshot.per_domain.len(), 2);

    let fees = snapshot
        .per_domain
        .iter()
        .find(|entry| entry.domain == InteractionDomain::Fees)
        .expect("fees scored");
    assert_eq!(fees.score, 100);
    assert_eq!(fees.interaction_count, 2);

    let hostel = snapshot
        .per_domain
        .iter()
        .find(|entry| entry.domain == InteractionDomain::Hostel)
        .expect("hostel scored");
    assert!(hostel.score < fees.score);

    let mean = (fees.score as f64 + hostel.score as f64) / 2.0;
    assert_eq!(snapshot.overall, mean.round() as u8);
}

#[test]
fn every_signal_combination_stays_within_bounds() {
    let sentiments = [
        None,
        Some(Sentiment::Positive),
        Some(Sentiment::Neutral),
        Some(Sentiment::Negative),
    ];
    let resolutions = [
        None,
        Some(Resolution::Resolved),
        Some(Resolution::InProgress),
        Some(Resolution::Escalated),
    ];

    for sentiment in sentiments {
        for resolution in resolutions {
            let clarity =
                score_group(InteractionDomain::General, &[record("GENERAL", sentiment, resolution)])
                    .expect("single record scores");
            assert!(clarity.score <= 100);
        }
    }
}

#[test]
fn shuffled_datasets_produce_identical_snapshots() {
    let mut records = vec![
        record("FEES", Some(Sentiment::Positive), Some(Resolution::Resolved)),
        record("FEES", Some(Sentiment::Negative), None),
        record("EXAMS", None, Some(Resolution::Escalated)),
        record("HOSTEL", Some(Sentiment::Neutral), Some(Resolution::InProgress)),
        record("GENERAL", Some(Sentiment::Negative), Some(Resolution::Escalated)),
        record("ACADEMICS", Some(Sentiment::Positive), None),
    ];

    let baseline = score_all(records.clone());

    // A few deterministic permutations stand in for the full factorial.
    records.reverse();
    assert_eq!(score_all(records.clone()), baseline);
    records.rotate_left(2);
    assert_eq!(score_all(records.clone()), baseline);
    records.swap(0, 3);
    assert_eq!(score_all(records), baseline);
}

#[test]
fn improving_one_outcome_never_lowers_a_domain_score() {
    let poor = record("EXAMS", Some(Sentiment::Negative), Some(Resolution::Escalated));
    let fine = record("EXAMS", Some(Sentiment::Positive), Some(Resolution::Resolved));

    let mut group = vec![poor.clone(), poor.clone(), fine.clone()];
    let mut last = score_group(InteractionDomain::Exams, &group)
        .expect("group scores")
        .score;

    for index in 0..2 {
        group[index] = fine.clone();
        let next = score_group(InteractionDomain::Exams, &group)
            .expect("group scores")
            .score;
        assert!(next >= last, "replacing a poor outcome lowered the score");
        last = next;
    }
}

#[test]
fn empty_dataset_is_reported_as_fully_clear() {
    let snapshot = score_all(Vec::new());
    assert_eq!(snapshot.overall, DEFAULT_OVERALL_CLARITY);
    assert!(snapshot.per_domain.is_empty());
}

#[test]
fn old_records_are_still_scored_when_supplied() {
    // Windowing is the caller's concern; the engine scores whatever it gets.
    let mut stale = record("FEES", Some(Sentiment::Positive), Some(Resolution::Resolved));
    stale.occurred_at = stale.occurred_at - Duration::days(400);
    let snapshot = score_all(vec![stale]);
    assert_eq!(snapshot.per_domain.len(), 1);
}
