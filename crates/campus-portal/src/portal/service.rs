use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::insight::{group_by_domain, score_groups, DomainClarity, InteractionRecord};
use super::repository::{
    ContentStore, ExplainError, ExplanationProvider, InteractionStore, RepositoryError,
};
use super::visibility::{filter_visible, ContentKind, ContentRecord, ViewerProfile};

/// Service composing the stores, the two engines, and the explanation hook.
/// Holds no mutable state of its own; every call works on a fresh snapshot
/// fetched from the collaborators.
pub struct PortalService<I, C, E> {
    interactions: Arc<I>,
    contents: Arc<C>,
    explainer: Arc<E>,
}

impl<I, C, E> PortalService<I, C, E>
where
    I: InteractionStore + 'static,
    C: ContentStore + 'static,
    E: ExplanationProvider + 'static,
{
    pub fn new(interactions: Arc<I>, contents: Arc<C>, explainer: Arc<E>) -> Self {
        Self {
            interactions,
            contents,
            explainer,
        }
    }

    /// Append one interaction to the log. Written once, never mutated.
    pub fn record_interaction(
        &self,
        interaction: InteractionRecord,
    ) -> Result<(), PortalServiceError> {
        self.interactions.record(interaction)?;
        Ok(())
    }

    /// Build the admin/HOD clarity dashboard over interactions since the
    /// given cutoff: group, score per domain, report the unclassified
    /// quarantine size so dirty tags stay visible.
    pub fn clarity_report(&self, since: DateTime<Utc>) -> Result<ClarityReport, PortalServiceError> {
        let records = self.interactions.interactions_since(since)?;
        let grouped = group_by_domain(records);
        let unclassified_count = grouped.unclassified.len();
        let snapshot = score_groups(&grouped);

        Ok(ClarityReport {
            since,
            overall: snapshot.overall,
            per_domain: snapshot.per_domain,
            unclassified_count,
        })
    }

    /// Assemble the student dashboard feed: announcements then services,
    /// each visibility-filtered with catalog order preserved.
    pub fn student_feed(
        &self,
        viewer: &ViewerProfile,
        as_of: DateTime<Utc>,
    ) -> Result<StudentFeed, PortalServiceError> {
        let announcements = self.contents.catalog(ContentKind::Announcement)?;
        let services = self.contents.catalog(ContentKind::Service)?;

        Ok(StudentFeed {
            announcements: filter_visible(&announcements, viewer, as_of),
            services: filter_visible(&services, viewer, as_of),
        })
    }

    /// Forward a student question to the hosted chat API.
    pub fn explain(&self, question: &str) -> Result<String, PortalServiceError> {
        Ok(self.explainer.explain(question)?)
    }
}

/// Clarity dashboard payload for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClarityReport {
    pub since: DateTime<Utc>,
    pub overall: u8,
    pub per_domain: Vec<DomainClarity>,
    pub unclassified_count: usize,
}

/// Visibility-filtered content for one viewer's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentFeed {
    pub announcements: Vec<ContentRecord>,
    pub services: Vec<ContentRecord>,
}

/// Error raised by the portal service.
#[derive(Debug, thiserror::Error)]
pub enum PortalServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Explain(#[from] ExplainError),
}
