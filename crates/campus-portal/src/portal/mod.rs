//! Campus portal core: the domain intelligence and visibility engines plus
//! the service layer and HTTP surface that expose them.

pub mod insight;
pub mod repository;
pub mod router;
pub mod service;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use insight::{
    group_by_domain, parse_interactions, score_all, score_group, score_groups, ClaritySnapshot,
    DomainClarity, DomainGroups, InteractionDomain, InteractionImportError, InteractionRecord,
    Resolution, Sentiment, DEFAULT_OVERALL_CLARITY,
};
pub use repository::{
    ContentStore, ExplainError, ExplanationProvider, InteractionStore, RepositoryError,
};
pub use router::{portal_router, MAX_CLARITY_WINDOW_DAYS};
pub use service::{ClarityReport, PortalService, PortalServiceError, StudentFeed};
pub use visibility::{
    filter_visible, is_visible, AudienceRule, ContentKind, ContentRecord, ViewerProfile,
};
