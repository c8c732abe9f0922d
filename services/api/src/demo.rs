use crate::infra::{CannedExplanationProvider, InMemoryContentStore, InMemoryInteractionStore};
use campus_portal::error::AppError;
use campus_portal::portal::{
    parse_interactions, AudienceRule, ClarityReport, ContentKind, ContentRecord, InteractionRecord,
    PortalService, Resolution, Sentiment, ViewerProfile, MAX_CLARITY_WINDOW_DAYS,
};
use chrono::{DateTime, Duration, Utc};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ClarityReportArgs {
    /// Interaction-log CSV export to score
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Number of days of interactions to include
    #[arg(long, default_value_t = 30)]
    pub(crate) window_days: i64,
    /// Evaluation instant (RFC3339 or YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional interaction-log CSV export instead of the built-in sample
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Evaluation instant (RFC3339 or YYYY-MM-DD, defaults to now)
    #[arg(long, value_parser = crate::infra::parse_timestamp)]
    pub(crate) as_of: Option<DateTime<Utc>>,
}

pub(crate) fn run_clarity_report(args: ClarityReportArgs) -> Result<(), AppError> {
    let ClarityReportArgs {
        csv,
        window_days,
        as_of,
    } = args;

    let as_of = as_of.unwrap_or_else(Utc::now);
    let window_days = window_days.clamp(1, MAX_CLARITY_WINDOW_DAYS);
    let since = as_of - Duration::days(window_days);

    let file = std::fs::File::open(&csv)?;
    let records = parse_interactions(file)?;

    let store = InMemoryInteractionStore::default();
    store.extend(records);
    let service = PortalService::new(
        Arc::new(store),
        Arc::new(InMemoryContentStore::default()),
        Arc::new(CannedExplanationProvider),
    );

    let report = service.clarity_report(since)?;
    println!(
        "Clarity report for {} (last {} days)",
        csv.display(),
        window_days
    );
    render_clarity_report(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { csv, as_of } = args;
    let as_of = as_of.unwrap_or_else(Utc::now);

    let interactions = Arc::new(InMemoryInteractionStore::default());
    match csv {
        Some(path) => {
            let file = std::fs::File::open(&path)?;
            interactions.extend(parse_interactions(file)?);
        }
        None => interactions.extend(sample_interactions(as_of)),
    }

    let catalog = Arc::new(InMemoryContentStore::default());
    for record in sample_catalog(as_of) {
        catalog.push(record);
    }

    let service = PortalService::new(
        interactions,
        catalog,
        Arc::new(CannedExplanationProvider),
    );

    println!("Campus portal demo\n");

    let report = service.clarity_report(as_of - Duration::days(30))?;
    println!("Admin clarity dashboard (last 30 days)");
    render_clarity_report(&report);

    for viewer in [
        ViewerProfile {
            department_id: "CSE".to_string(),
            is_hosteller: false,
        },
        ViewerProfile {
            department_id: "ECE".to_string(),
            is_hosteller: true,
        },
    ] {
        let feed = service.student_feed(&viewer, as_of)?;
        println!(
            "\nFeed for {} ({})",
            viewer.department_id,
            if viewer.is_hosteller {
                "hosteller"
            } else {
                "day scholar"
            }
        );
        for record in feed.announcements.iter().chain(feed.services.iter()) {
            println!("- [{}] {}", record.kind.label(), record.title);
        }
    }

    let answer = service.explain("How do I apply for a hostel room?")?;
    println!("\nAssistant reply: {answer}");

    Ok(())
}

fn render_clarity_report(report: &ClarityReport) {
    println!("Overall clarity: {}", report.overall);
    for entry in &report.per_domain {
        println!(
            "- {:<10} score {:>3} across {} interaction(s)",
            entry.domain.label(),
            entry.score,
            entry.interaction_count
        );
    }
    if report.unclassified_count > 0 {
        println!(
            "! {} interaction(s) carried unrecognized domain tags and were excluded",
            report.unclassified_count
        );
    }
}

fn sample_interactions(as_of: DateTime<Utc>) -> Vec<InteractionRecord> {
    let entry = |domain: &str, sentiment, resolution, days_ago: i64| InteractionRecord {
        domain_tag: domain.to_string(),
        department_id: "CSE".to_string(),
        sentiment,
        resolution,
        occurred_at: as_of - Duration::days(days_ago),
    };

    vec![
        entry("FEES", Some(Sentiment::Positive), Some(Resolution::Resolved), 2),
        entry("FEES", Some(Sentiment::Neutral), Some(Resolution::Resolved), 4),
        entry("FEES", Some(Sentiment::Negative), Some(Resolution::Escalated), 6),
        entry("EXAMS", Some(Sentiment::Positive), Some(Resolution::Resolved), 1),
        entry("EXAMS", None, Some(Resolution::InProgress), 3),
        entry("HOSTEL", Some(Sentiment::Negative), Some(Resolution::Escalated), 2),
        entry("HOSTEL", Some(Sentiment::Negative), None, 5),
        entry("GENERAL", Some(Sentiment::Neutral), Some(Resolution::Resolved), 8),
        entry("SPORTS", Some(Sentiment::Positive), Some(Resolution::Resolved), 1),
    ]
}

fn sample_catalog(as_of: DateTime<Utc>) -> Vec<ContentRecord> {
    vec![
        ContentRecord {
            id: "ann-timetable".to_string(),
            title: "Revised semester exam timetable".to_string(),
            body: "Exams for all departments move to block C.".to_string(),
            kind: ContentKind::Announcement,
            audience: AudienceRule::AllStudents,
            department_id: None,
            is_active: true,
            active_from: Some(as_of - Duration::days(3)),
            active_until: None,
        },
        ContentRecord {
            id: "ann-hostel-curfew".to_string(),
            title: "Hostel curfew relaxed for exam week".to_string(),
            body: "Gates close at midnight during exams.".to_string(),
            kind: ContentKind::Announcement,
            audience: AudienceRule::HostellersOnly,
            department_id: None,
            is_active: true,
            active_from: Some(as_of - Duration::days(1)),
            active_until: Some(as_of + Duration::days(10)),
        },
        ContentRecord {
            id: "ann-ece-seminar".to_string(),
            title: "ECE department seminar series".to_string(),
            body: "Weekly seminars start Friday.".to_string(),
            kind: ContentKind::Announcement,
            audience: AudienceRule::Department,
            department_id: Some("ECE".to_string()),
            is_active: true,
            active_from: Some(as_of - Duration::days(2)),
            active_until: None,
        },
        ContentRecord {
            id: "svc-counselling".to_string(),
            title: "Student counselling desk".to_string(),
            body: "Walk-in hours 10:00-16:00.".to_string(),
            kind: ContentKind::Service,
            audience: AudienceRule::AllStudents,
            department_id: None,
            is_active: true,
            active_from: None,
            active_until: None,
        },
        ContentRecord {
            id: "svc-mess-rebate".to_string(),
            title: "Mess rebate applications".to_string(),
            body: "Apply before the 5th of each month.".to_string(),
            kind: ContentKind::Service,
            audience: AudienceRule::HostellersOnly,
            department_id: None,
            is_active: true,
            active_from: None,
            active_until: None,
        },
    ]
}
