use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::Value;

use crate::portal::insight::{InteractionRecord, Resolution, Sentiment};
use crate::portal::repository::{
    ContentStore, ExplainError, ExplanationProvider, InteractionStore, RepositoryError,
};
use crate::portal::service::PortalService;
use crate::portal::visibility::{AudienceRule, ContentKind, ContentRecord};

pub(super) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub(super) fn interaction(
    domain_tag: &str,
    sentiment: Option<Sentiment>,
    resolution: Option<Resolution>,
    days_ago: i64,
) -> InteractionRecord {
    InteractionRecord {
        domain_tag: domain_tag.to_string(),
        department_id: "CSE".to_string(),
        sentiment,
        resolution,
        occurred_at: base_time() - Duration::days(days_ago),
    }
}

pub(super) fn announcement(id: &str, audience: AudienceRule) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        title: format!("Announcement {id}"),
        body: "Details on the notice board.".to_string(),
        kind: ContentKind::Announcement,
        audience,
        department_id: None,
        is_active: true,
        active_from: Some(base_time() - Duration::days(5)),
        active_until: None,
    }
}

pub(super) fn campus_service(id: &str, audience: AudienceRule) -> ContentRecord {
    ContentRecord {
        id: id.to_string(),
        title: format!("Service {id}"),
        body: "Available through the portal.".to_string(),
        kind: ContentKind::Service,
        audience,
        department_id: None,
        is_active: true,
        active_from: None,
        active_until: None,
    }
}

#[derive(Default)]
pub(super) struct MemoryInteractions {
    records: Mutex<Vec<InteractionRecord>>,
}

impl InteractionStore for MemoryInteractions {
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

#[derive(Default)]
pub(super) struct MemoryCatalog {
    records: Mutex<Vec<ContentRecord>>,
}

impl MemoryCatalog {
    pub(super) fn push(&self, record: ContentRecord) {
        self.records.lock().expect("catalog mutex poisoned").push(record);
    }
}

impl ContentStore for MemoryCatalog {
    fn catalog(&self, kind: ContentKind) -> Result<Vec<ContentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("catalog mutex poisoned");
        Ok(guard
            .iter()
            .filter(|record| record.kind == kind)
            .cloned()
            .collect())
    }
}

pub(super) struct CannedExplainer;

impl ExplanationProvider for CannedExplainer {
    fn explain(&self, question: &str) -> Result<String, ExplainError> {
        Ok(format!("In short: {question}"))
    }
}

pub(super) struct OfflineExplainer;

impl ExplanationProvider for OfflineExplainer {
    fn explain(&self, _question: &str) -> Result<String, ExplainError> {
        Err(ExplainError::Unavailable("model endpoint timed out".to_string()))
    }
}

pub(super) struct UnavailableStore;

impl InteractionStore for UnavailableStore {
    fn record(&self, _interaction: InteractionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("interaction log offline".to_string()))
    }

    fn interactions_since(
        &self,
        _since: DateTime<Utc>,
    ) -> Result<Vec<InteractionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("interaction log offline".to_string()))
    }
}

impl ContentStore for UnavailableStore {
    fn catalog(&self, _kind: ContentKind) -> Result<Vec<ContentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("catalog offline".to_string()))
    }
}

pub(super) type MemoryService = PortalService<MemoryInteractions, MemoryCatalog, CannedExplainer>;

pub(super) fn build_service() -> (Arc<MemoryService>, Arc<MemoryInteractions>, Arc<MemoryCatalog>) {
    let interactions = Arc::new(MemoryInteractions::default());
    let catalog = Arc::new(MemoryCatalog::default());
    let service = Arc::new(PortalService::new(
        interactions.clone(),
        catalog.clone(),
        Arc::new(CannedExplainer),
    ));
    (service, interactions, catalog)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}
