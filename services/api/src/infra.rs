use campus_portal::portal::{
    ContentKind, ContentRecord, ContentStore, ExplainError, ExplanationProvider, InteractionRecord,
    InteractionStore, RepositoryError,
};
use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Interaction log backed by a mutex-guarded vec. Stands in for the
/// relational store until the persistence collaborator is wired up.
#[derive(Default, Clone)]
pub(crate) struct InMemoryInteractionStore {
    records: Arc<Mutex<Vec<InteractionRecord>>>,
}

impl InteractionStore for InMemoryInteractionStore {
    fn record(&self, interaction: InteractionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("interaction mutex poisoned");
        guard.push(interaction);
        Ok(())
    }

    fn interactions_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<InteractionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("interaction mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.occurred_at >= since)
            .cloned()
            .collect())
    }
}

impl InMemoryInteractionStore {
    pub(crate) fn extend(&self, records: Vec<InteractionRecord>) {
        let mut guard = self.records.lock().expect("interaction mutex poisoned");
        guard.extend(records);
    }
}

/// Announcement/service catalog held in insertion order; the feed relies on
/// that order surviving the round trip.
#[derive(Default, Clone)]
pub(crate) struct InMemoryContentStore {
    records: Arc<Mutex<Vec<ContentRecord>>>,
}

impl ContentStore for InMemoryContentStore {
    fn catalog(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.kind == kind)
            .cloned()
            .collect())
    }
}

impl InMemoryContentStore {
    pub(crate) fn push(&self, record: ContentRecord) {
        let mut guard = self.records.lock().expect("catalog mutex poisoned");
        guard.push(record);
    }
}

/// Stand-in for the hosted chat API; answers every question with a canned
/// pointer so the route can be exercised without network access.
#[derive(Default, Clone)]
pub(crate) struct CannedExplanationProvider;

impl ExplanationProvider for CannedExplanationProvider {
    fn explain(&self, question: &str) -> Result<String, ExplainError> {
        Ok(format!(
            "This deployment has no chat backend configured. Your question was: {question}"
        ))
    }
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc))
        .ok_or_else(|| format!("failed to parse '{raw}' as RFC3339 or YYYY-MM-DD"))
}
