//! Domain intelligence: grouping raw student interactions by subject domain
//! and reducing each group to a 0-100 Process Clarity Index.
//!
//! Both phases are pure functions over immutable snapshots. Grouping and
//! scoring stay separate so each can be exercised on its own.

pub mod aggregate;
pub mod domain;
pub mod import;
pub mod scoring;

pub use aggregate::{group_by_domain, DomainGroups};
pub use domain::{
    ClaritySnapshot, DomainClarity, InteractionDomain, InteractionRecord, Resolution, Sentiment,
};
pub use import::{parse_interactions, InteractionImportError};
pub use scoring::{score_all, score_group, score_groups, DEFAULT_OVERALL_CLARITY};
