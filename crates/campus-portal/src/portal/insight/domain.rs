use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five fixed subject categories every student interaction is filed under.
///
/// Ordered so grouped output iterates deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionDomain {
    Academics,
    Exams,
    Fees,
    Hostel,
    General,
}

impl InteractionDomain {
    pub const ALL: [InteractionDomain; 5] = [
        InteractionDomain::Academics,
        InteractionDomain::Exams,
        InteractionDomain::Fees,
        InteractionDomain::Hostel,
        InteractionDomain::General,
    ];

    /// Parse a raw domain tag as stored by the interaction log. Anything
    /// outside the five recognized values returns `None`; callers decide
    /// whether that means rejection or the unclassified bucket.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ACADEMICS" => Some(Self::Academics),
            "EXAMS" => Some(Self::Exams),
            "FEES" => Some(Self::Fees),
            "HOSTEL" => Some(Self::Hostel),
            "GENERAL" => Some(Self::General),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            InteractionDomain::Academics => "academics",
            InteractionDomain::Exams => "exams",
            InteractionDomain::Fees => "fees",
            InteractionDomain::Hostel => "hostel",
            InteractionDomain::General => "general",
        }
    }
}

/// Tone the assistant inferred from the student's wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Some(Self::Positive),
            "NEUTRAL" => Some(Self::Neutral),
            "NEGATIVE" => Some(Self::Negative),
            _ => None,
        }
    }
}

/// How the interaction concluded from the student's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    Resolved,
    InProgress,
    Escalated,
}

impl Resolution {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_uppercase().as_str() {
            "RESOLVED" => Some(Self::Resolved),
            "IN_PROGRESS" => Some(Self::InProgress),
            "ESCALATED" => Some(Self::Escalated),
            _ => None,
        }
    }
}

/// One student query/action as recorded by the assistant. Immutable once
/// written; the scoring pipeline only ever reads these.
///
/// The domain arrives as the raw stored tag so the grouping step owns the
/// validity seam instead of trusting every producer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord {
    pub domain_tag: String,
    pub department_id: String,
    pub sentiment: Option<Sentiment>,
    pub resolution: Option<Resolution>,
    pub occurred_at: DateTime<Utc>,
}

/// Clarity result for a single domain. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainClarity {
    pub domain: InteractionDomain,
    pub score: u8,
    pub interaction_count: usize,
}

/// Campus-wide clarity view: the per-domain scores actually produced plus
/// their unweighted mean. Domains with no interactions are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaritySnapshot {
    pub overall: u8,
    pub per_domain: Vec<DomainClarity>,
}
