//! Audience-scoped visibility: deciding which catalog records a given
//! student may see, failing closed on anything unrecognized.

pub mod domain;
pub mod resolver;

pub use domain::{AudienceRule, ContentKind, ContentRecord, ViewerProfile};
pub use resolver::{filter_visible, is_visible};
