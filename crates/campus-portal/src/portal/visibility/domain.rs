use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audience-targeting policy attached to a content record. Tags the store
/// hands us that match none of the recognized policies deserialize to
/// `Unknown`, and the resolver rejects that variant unconditionally: an
/// unrecognized audience rule must never widen who can see something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudienceRule {
    AllStudents,
    HostellersOnly,
    Department,
    #[serde(other)]
    Unknown,
}

/// What kind of catalog entry this is; feeds are assembled per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Announcement,
    Service,
}

impl ContentKind {
    pub const fn label(self) -> &'static str {
        match self {
            ContentKind::Announcement => "announcement",
            ContentKind::Service => "service",
        }
    }
}

/// An announcement or campus service as stored by the catalog. Created and
/// updated by admin/HOD actors elsewhere; read-only to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub kind: ContentKind,
    pub audience: AudienceRule,
    /// Department scope; meaningful only under `AudienceRule::Department`.
    pub department_id: Option<String>,
    pub is_active: bool,
    pub active_from: Option<DateTime<Utc>>,
    /// Absent means the record never expires.
    pub active_until: Option<DateTime<Utc>>,
}

/// The minimal viewer context a visibility decision needs. Supplied per
/// request by the authentication layer, never persisted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerProfile {
    pub department_id: String,
    pub is_hosteller: bool,
}
